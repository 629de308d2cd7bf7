use crate::types::FaceBox;

/// Pick the candidate with the greatest pixel area — the subject of the
/// photo. Comparison is strict, so among equal-area candidates the first
/// one in the detector's return order wins. Returns `None` for an empty
/// candidate set.
pub fn largest_face(faces: &[FaceBox]) -> Option<&FaceBox> {
    let mut best: Option<&FaceBox> = None;
    let mut best_area = 0u64;
    for face in faces {
        let area = face.area();
        if area > best_area {
            best_area = area;
            best = Some(face);
        }
    }
    best
}
