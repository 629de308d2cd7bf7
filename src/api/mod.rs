//! High-level, ergonomic library API: process single photos or whole
//! directories, with per-file outcomes and an aggregate batch report.
//! Prefer these entrypoints over the low-level processing modules when
//! embedding FACECROP.
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::core::params::CropParams;
use crate::core::processing::pipeline::crop_largest_face;
use crate::detect::FaceDetector;
use crate::error::Result;
use crate::io::codec;
use crate::types::FileOutcome;

/// File extensions the batch driver recognizes. Matching is case-sensitive
/// by default and the set intentionally lists upper-case variants for only
/// some formats. Set [`CropParams::case_insensitive_ext`] to widen matching
/// instead of editing this list.
pub const RECOGNIZED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "bmp", "JPG", "PNG"];

/// Suffix appended to the input stem for output crops.
const OUTPUT_SUFFIX: &str = "_face";

/// Aggregate counts for one directory run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchReport {
    /// Files that produced an output crop.
    pub processed: usize,
    /// Valid images in which no face was found. Not failures.
    pub no_face: usize,
    /// Read or write failures.
    pub failed: usize,
}

/// Whether `path` carries a recognized image extension.
pub fn is_recognized_image(path: &Path, case_insensitive: bool) -> bool {
    let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
        return false;
    };
    if case_insensitive {
        RECOGNIZED_EXTENSIONS
            .iter()
            .any(|known| known.eq_ignore_ascii_case(ext))
    } else {
        RECOGNIZED_EXTENSIONS.contains(&ext)
    }
}

/// Collect the recognized image files directly under `input_dir`, sorted so
/// batch runs visit files in a stable order.
pub fn iterate_images(input_dir: &Path, case_insensitive: bool) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(input_dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_file() && is_recognized_image(&path, case_insensitive) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Output path for `input` under `output_dir`: `<stem>_face.jpg`.
///
/// The extension is always `jpg` regardless of the input format, since
/// crops are always JPEG-encoded.
pub fn output_path_for(input: &Path, output_dir: &Path) -> Option<PathBuf> {
    let stem = input.file_stem()?;
    let mut name = stem.to_os_string();
    name.push(OUTPUT_SUFFIX);
    name.push(".jpg");
    Some(output_dir.join(name))
}

/// Run the crop pipeline on a single file: load, detect, select, expand,
/// crop, resize, save.
///
/// Every per-file failure is folded into the returned [`FileOutcome`];
/// nothing escapes to the caller, so a batch can keep going past bad files.
pub fn process_file_to_path(
    input: &Path,
    output: &Path,
    detector: &dyn FaceDetector,
    params: &CropParams,
) -> FileOutcome {
    let image = match codec::read_image(input) {
        Ok(image) => image,
        Err(e) => {
            debug!("reading {:?} failed: {}", input, e);
            return FileOutcome::ReadFailure(input.to_path_buf());
        }
    };

    let crop = match crop_largest_face(&image, detector, params) {
        Ok(Some(crop)) => crop,
        Ok(None) => return FileOutcome::NoFaceFound(input.to_path_buf()),
        Err(e) => {
            debug!("processing {:?} failed: {}", input, e);
            return FileOutcome::WriteFailure(output.to_path_buf());
        }
    };

    match codec::write_image(output, &crop, params.jpeg_quality) {
        Ok(()) => FileOutcome::Success(output.to_path_buf()),
        Err(e) => {
            debug!("writing {:?} failed: {}", output, e);
            FileOutcome::WriteFailure(output.to_path_buf())
        }
    }
}

/// Process every recognized image in `input_dir` into `output_dir`,
/// creating `output_dir` if absent.
///
/// One status line is logged per file. A missing or unreadable input
/// directory (or invalid `params`) is the only fatal condition; per-file
/// failures are counted in the report and the batch continues.
pub fn process_directory_to_path(
    input_dir: &Path,
    output_dir: &Path,
    detector: &dyn FaceDetector,
    params: &CropParams,
) -> Result<BatchReport> {
    params.validate()?;
    fs::create_dir_all(output_dir)?;

    let mut report = BatchReport::default();

    for input in iterate_images(input_dir, params.case_insensitive_ext)? {
        // Files passing the extension filter always have a stem.
        let Some(output) = output_path_for(&input, output_dir) else {
            continue;
        };

        let outcome = process_file_to_path(&input, &output, detector, params);
        match &outcome {
            FileOutcome::Success(_) => {
                report.processed += 1;
                info!("{}", outcome);
            }
            FileOutcome::NoFaceFound(_) => {
                report.no_face += 1;
                info!("{}", outcome);
            }
            FileOutcome::ReadFailure(_) | FileOutcome::WriteFailure(_) => {
                report.failed += 1;
                warn!("{}", outcome);
            }
        }
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognized_extensions_are_case_sensitive_by_default() {
        assert!(is_recognized_image(Path::new("a.jpg"), false));
        assert!(is_recognized_image(Path::new("a.JPG"), false));
        assert!(is_recognized_image(Path::new("a.PNG"), false));
        assert!(!is_recognized_image(Path::new("a.Jpg"), false));
        assert!(!is_recognized_image(Path::new("a.JPEG"), false));
        assert!(!is_recognized_image(Path::new("a.BMP"), false));
        assert!(!is_recognized_image(Path::new("a.gif"), false));
        assert!(!is_recognized_image(Path::new("noext"), false));
    }

    #[test]
    fn case_insensitive_mode_widens_matching() {
        assert!(is_recognized_image(Path::new("a.Jpg"), true));
        assert!(is_recognized_image(Path::new("a.JPEG"), true));
        assert!(is_recognized_image(Path::new("a.BMP"), true));
        assert!(!is_recognized_image(Path::new("a.gif"), true));
    }

    #[test]
    fn output_name_replaces_extension_with_jpg() {
        let out = output_path_for(Path::new("/in/portrait.PNG"), Path::new("/out")).unwrap();
        assert_eq!(out, Path::new("/out/portrait_face.jpg"));
    }

    #[test]
    fn output_name_keeps_non_ascii_stems() {
        let out = output_path_for(Path::new("/in/大頭照 01.jpg"), Path::new("/out")).unwrap();
        assert_eq!(out, Path::new("/out/大頭照 01_face.jpg"));
    }
}
