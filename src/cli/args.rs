use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "facecrop", version, about = "FACECROP CLI")]
pub struct CliArgs {
    /// Input directory containing photos
    #[arg(short, long)]
    pub input_dir: PathBuf,

    /// Output directory for face crops (created if absent)
    #[arg(short, long)]
    pub output_dir: PathBuf,

    /// Path to the SeetaFace frontal-face model file
    #[arg(short, long, default_value = "seeta_fd_frontal_v1.0.bin")]
    pub model: PathBuf,

    /// Optional JSON file overriding the default crop parameters
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Match recognized extensions ignoring ASCII case
    #[arg(long, default_value_t = false)]
    pub case_insensitive_ext: bool,

    /// Enable verbose logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}
