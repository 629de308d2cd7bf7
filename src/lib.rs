#![doc = r#"
FACECROP — a batch face-cropping toolkit.

This crate finds the most prominent human face in each photo of a
directory, expands the detected box into a padded square clamped to the
image bounds, and emits a fixed-size 512x512 JPEG crop per photo. It powers
the FACECROP CLI and can be embedded in your own Rust applications.

Pipeline
--------
load -> detect -> select largest -> expand -> crop -> resize -> save,
with per-file error isolation: one bad photo never aborts the batch.

Quick start: process a directory
--------------------------------
```rust,no_run
use std::path::Path;
use facecrop::{CropParams, process_directory_to_path};
use facecrop::detect::RustfaceDetector;

fn main() -> facecrop::Result<()> {
    let params = CropParams::default();
    let detector = RustfaceDetector::from_model_path(
        Path::new("seeta_fd_frontal_v1.0.bin"),
        params.detection,
    )?;

    let report = process_directory_to_path(
        Path::new("photos"),
        Path::new("crop_faces"),
        &detector,
        &params,
    )?;

    println!(
        "processed={} no_face={} errors={}",
        report.processed, report.no_face, report.failed
    );
    Ok(())
}
```

Custom detection backend
------------------------
The detection engine sits behind the narrow [`FaceDetector`] trait, so any
backend that can turn a grayscale buffer into face boxes plugs in:

```rust
use facecrop::{FaceBox, FaceDetector};

struct MyDetector;

impl FaceDetector for MyDetector {
    fn detect(&self, _gray: &[u8], _width: u32, _height: u32) -> Vec<FaceBox> {
        Vec::new()
    }
}
```

Error handling
--------------
Library functions return `facecrop::Result<T>`; per-file problems inside a
batch never surface as errors but as [`FileOutcome`] values and report
counters. Match on [`Error`] for the fatal cases (bad arguments, missing
input directory, unreadable model).

Useful modules
--------------
- [`api`] — high-level, ergonomic entry points.
- [`core`] — crop parameters and the geometric pipeline primitives.
- [`detect`] — the detection capability interface and SeetaFace backend.
- [`io`] — byte-level image reading and JPEG writing.
- [`error`] — crate-level `Error` and `Result`.
"#]

// Core modules (public)
pub mod api;
pub mod core;
pub mod detect;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
// Types
pub use core::params::{CropParams, DetectionParams};
pub use error::{Error, Result};
pub use types::{CropRegion, FaceBox, FileOutcome};

// Detection capability
pub use detect::FaceDetector;

// Codec helpers
pub use io::codec::{encode_jpeg, read_image, write_image};

// High-level API re-exports
pub use api::{
    BatchReport, RECOGNIZED_EXTENSIONS, is_recognized_image, iterate_images, output_path_for,
    process_directory_to_path, process_file_to_path,
};
