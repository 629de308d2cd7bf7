//! Face detection capability interface.
//!
//! The concrete detection engine sits behind the narrow [`FaceDetector`]
//! trait so it can be swapped (SeetaFace, ONNX, a test stub) without
//! touching the expander, selector, or pipeline. [`detect_faces`] is the
//! adapter the pipeline calls: it converts color input to grayscale and
//! enforces the minimum face size whatever the backend reports.
use image::{RgbImage, imageops};

use crate::core::params::DetectionParams;
use crate::types::FaceBox;

pub mod rustface_backend;
pub use rustface_backend::RustfaceDetector;

/// Pluggable face detection backend.
///
/// Implementations scan a row-major grayscale buffer of `width` x `height`
/// bytes and return candidate face boxes clipped to the image. Returning no
/// boxes is a normal outcome, not an error.
pub trait FaceDetector: Send + Sync {
    fn detect(&self, gray: &[u8], width: u32, height: u32) -> Vec<FaceBox>;
}

/// Run the backend over a color image.
///
/// Candidates smaller than `min_face_size` on either side are dropped here
/// regardless of what the backend was configured with, so the floor holds
/// for every backend. The returned set is final: callers treat it as
/// immutable.
pub fn detect_faces(
    image: &RgbImage,
    detector: &dyn FaceDetector,
    params: &DetectionParams,
) -> Vec<FaceBox> {
    let gray = imageops::grayscale(image);
    let (width, height) = gray.dimensions();
    let mut faces = detector.detect(gray.as_raw(), width, height);
    faces.retain(|face| face.width >= params.min_face_size && face.height >= params.min_face_size);
    faces
}
