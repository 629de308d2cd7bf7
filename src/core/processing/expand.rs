use crate::types::{CropRegion, FaceBox};

/// Expand a detected face box into a padded square region of interest.
///
/// The square is centered on the face box's center with side
/// `max(w, h) * scale`, truncated to integer pixels. Clamping at the image
/// edges shifts the anchor to the edge (left/top) or shrinks the side
/// (right/bottom) without re-centering, so a face near an edge yields an
/// off-center, possibly non-square region. That framing is intentional and
/// must not be "fixed" by re-centering after the clamp.
///
/// The caller guarantees the face box lies inside the `img_w` x `img_h`
/// frame; the returned region is then always fully contained in it.
pub fn expand_to_square(face: &FaceBox, scale: f64, img_w: u32, img_h: u32) -> CropRegion {
    let cx = f64::from(face.x) + f64::from(face.width) / 2.0;
    let cy = f64::from(face.y) + f64::from(face.height) / 2.0;
    let size = f64::from(face.width.max(face.height)) * scale;

    // Truncating float-to-int conversions, including for negative anchors.
    let mut nx = (cx - size / 2.0) as i64;
    let mut ny = (cy - size / 2.0) as i64;
    let mut nw = size as i64;
    let mut nh = size as i64;

    if nx < 0 {
        nx = 0;
    }
    if ny < 0 {
        ny = 0;
    }
    if nx + nw > i64::from(img_w) {
        nw = i64::from(img_w) - nx;
    }
    if ny + nh > i64::from(img_h) {
        nh = i64::from(img_h) - ny;
    }

    CropRegion {
        x: nx as u32,
        y: ny as u32,
        width: nw.max(0) as u32,
        height: nh.max(0) as u32,
    }
}
