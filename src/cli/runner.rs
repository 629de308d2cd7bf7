use std::fs;

use tracing::info;

use facecrop::CropParams;
use facecrop::api::process_directory_to_path;
use facecrop::detect::RustfaceDetector;

use super::args::CliArgs;
use super::errors::AppError;

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(if args.log {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    // A missing input directory is the only fatal condition of a batch run;
    // everything past this point is isolated per file.
    if !args.input_dir.is_dir() {
        return Err(AppError::MissingInputDir {
            path: args.input_dir.display().to_string(),
        }
        .into());
    }

    let mut params = match &args.config {
        Some(path) => {
            let text = fs::read_to_string(path).map_err(AppError::Io)?;
            serde_json::from_str::<CropParams>(&text).map_err(|source| {
                AppError::InvalidConfig {
                    path: path.display().to_string(),
                    source,
                }
            })?
        }
        None => CropParams::default(),
    };
    if args.case_insensitive_ext {
        params.case_insensitive_ext = true;
    }

    // Model parsed once, shared read-only for the whole batch.
    let detector = RustfaceDetector::from_model_path(&args.model, params.detection)?;

    info!("Starting batch processing from directory: {:?}", args.input_dir);
    info!("Output directory: {:?}", args.output_dir);

    let report =
        process_directory_to_path(&args.input_dir, &args.output_dir, &detector, &params)?;

    info!("Batch processing complete!");
    info!("Processed: {}", report.processed);
    info!("No face: {}", report.no_face);
    info!("Errors: {}", report.failed);

    Ok(())
}
