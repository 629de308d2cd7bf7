//! Built-in detector backed by the `rustface` crate (SeetaFace frontal model).
use std::path::Path;

use crate::core::params::DetectionParams;
use crate::detect::FaceDetector;
use crate::error::{Error, Result};
use crate::types::FaceBox;

/// Face detector backed by a SeetaFace frontal-face model.
///
/// The model file is read and parsed once at construction and then treated
/// as read-only for the lifetime of the batch; every `detect` call builds a
/// cheap runtime detector from the shared parsed model.
pub struct RustfaceDetector {
    model: rustface::Model,
    params: DetectionParams,
}

impl RustfaceDetector {
    /// Load a SeetaFace model from disk.
    ///
    /// The file is read as raw bytes first, so unusual path encodings never
    /// reach the model parser.
    pub fn from_model_path(path: &Path, params: DetectionParams) -> Result<Self> {
        let bytes = std::fs::read(path)?;
        let model = rustface::read_model(std::io::Cursor::new(bytes))
            .map_err(|e| Error::Detector(e.to_string()))?;
        Ok(Self { model, params })
    }
}

impl FaceDetector for RustfaceDetector {
    fn detect(&self, gray: &[u8], width: u32, height: u32) -> Vec<FaceBox> {
        let mut detector = rustface::create_detector_with_model(self.model.clone());
        detector.set_min_face_size(self.params.min_face_size);
        // SeetaFace shrinks its pyramid by a factor < 1 per level, the
        // reciprocal of a cascade-style scale step.
        detector.set_pyramid_scale_factor(1.0 / self.params.scale_step);
        // min_neighbors maps onto the clustering score threshold; the
        // default of 5 lands on SeetaFace's stock threshold of 2.0.
        detector.set_score_thresh(f64::from(self.params.min_neighbors) * 0.4);
        detector.set_slide_window_step(4, 4);

        let faces = detector.detect(&rustface::ImageData::new(gray, width, height));

        faces
            .iter()
            .filter_map(|face| {
                let bbox = face.bbox();
                clip_to_image(
                    bbox.x(),
                    bbox.y(),
                    bbox.width(),
                    bbox.height(),
                    width,
                    height,
                )
            })
            .collect()
    }
}

/// SeetaFace can report boxes that spill past the frame. Clip them to the
/// image and drop anything left empty, so every box leaving this backend
/// satisfies the containment invariant the expander relies on.
fn clip_to_image(x: i32, y: i32, w: u32, h: u32, img_w: u32, img_h: u32) -> Option<FaceBox> {
    let x0 = i64::from(x).max(0);
    let y0 = i64::from(y).max(0);
    let x1 = (i64::from(x) + i64::from(w)).min(i64::from(img_w));
    let y1 = (i64::from(y) + i64::from(h)).min(i64::from(img_h));
    if x1 <= x0 || y1 <= y0 {
        return None;
    }
    Some(FaceBox {
        x: x0 as u32,
        y: y0 as u32,
        width: (x1 - x0) as u32,
        height: (y1 - y0) as u32,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interior_box_passes_through() {
        let face = clip_to_image(10, 20, 100, 100, 640, 480).unwrap();
        assert_eq!(
            face,
            FaceBox {
                x: 10,
                y: 20,
                width: 100,
                height: 100
            }
        );
    }

    #[test]
    fn negative_anchor_is_clipped_and_shrunk() {
        let face = clip_to_image(-15, -5, 100, 100, 640, 480).unwrap();
        assert_eq!(
            face,
            FaceBox {
                x: 0,
                y: 0,
                width: 85,
                height: 95
            }
        );
    }

    #[test]
    fn overflow_past_the_frame_is_trimmed() {
        let face = clip_to_image(600, 440, 100, 100, 640, 480).unwrap();
        assert_eq!(face.x + face.width, 640);
        assert_eq!(face.y + face.height, 480);
    }

    #[test]
    fn fully_outside_box_is_dropped() {
        assert!(clip_to_image(700, 10, 50, 50, 640, 480).is_none());
        assert!(clip_to_image(-60, 10, 50, 50, 640, 480).is_none());
    }

    #[test]
    fn missing_model_file_is_an_error() {
        let err = RustfaceDetector::from_model_path(
            Path::new("/nonexistent/model.bin"),
            DetectionParams::default(),
        );
        assert!(err.is_err());
    }
}
