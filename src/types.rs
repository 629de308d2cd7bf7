//! Shared types used across FACECROP.
//! Includes the detected-face bounding box (`FaceBox`), the expanded crop
//! rectangle (`CropRegion`), and the per-file terminal state (`FileOutcome`).
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box of one detected face, in pixel coordinates with
/// the origin at the image's top-left corner. Width and height are non-zero
/// by construction; boxes are clipped to the image before they leave the
/// detector adapter.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct FaceBox {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl FaceBox {
    pub fn area(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }
}

impl std::fmt::Display for FaceBox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}x{}+{}+{}",
            self.width, self.height, self.x, self.y
        )
    }
}

/// Region of the source image selected for cropping. Square except where
/// boundary clamping forced a shrink at an image edge; always fully
/// contained in the source image.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct CropRegion {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Terminal state of one input file after a pipeline run. Exactly one
/// outcome is produced per input; only `Success` leaves a file behind.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum FileOutcome {
    /// Output crop written to the contained path.
    Success(PathBuf),
    /// Path unreadable, or bytes not decodable as an image.
    ReadFailure(PathBuf),
    /// Detector returned no usable candidate. Not a fault.
    NoFaceFound(PathBuf),
    /// Encoding or writing the output failed.
    WriteFailure(PathBuf),
}

impl std::fmt::Display for FileOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FileOutcome::Success(path) => write!(f, "OK {}", path.display()),
            FileOutcome::ReadFailure(path) => write!(f, "failed to read {}", path.display()),
            FileOutcome::NoFaceFound(path) => write!(f, "no face found in {}", path.display()),
            FileOutcome::WriteFailure(path) => write!(f, "failed to write {}", path.display()),
        }
    }
}
