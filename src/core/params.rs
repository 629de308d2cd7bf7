use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Sensitivity knobs forwarded to the face detection backend.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectionParams {
    /// Multi-scale search granularity: the factor between consecutive
    /// pyramid levels. Must be > 1.0; smaller steps search more scales.
    pub scale_step: f32,
    /// Detection-clustering threshold suppressing isolated false positives.
    pub min_neighbors: u32,
    /// Smallest face the detector reports, in pixels (square side).
    pub min_face_size: u32,
}

impl Default for DetectionParams {
    fn default() -> Self {
        Self {
            scale_step: 1.1,
            min_neighbors: 5,
            min_face_size: 80,
        }
    }
}

/// Crop parameters suitable for config files and presets.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CropParams {
    /// Multiplier applied to the detected box's larger side before cropping.
    /// 1.4 keeps a ring of hair and chin around the face.
    pub expansion_scale: f64,
    /// Side of the square output crop, in pixels.
    pub output_size: u32,
    /// JPEG quality for written crops (0-100).
    pub jpeg_quality: u8,
    /// Match recognized extensions ignoring ASCII case instead of the
    /// literal extension list.
    pub case_insensitive_ext: bool,
    pub detection: DetectionParams,
}

impl Default for CropParams {
    fn default() -> Self {
        Self {
            expansion_scale: 1.4,
            output_size: 512,
            jpeg_quality: 95,
            case_insensitive_ext: false,
            detection: DetectionParams::default(),
        }
    }
}

impl CropParams {
    pub fn validate(&self) -> Result<()> {
        if self.output_size == 0 {
            return Err(Error::InvalidArgument {
                arg: "output_size",
                value: self.output_size.to_string(),
            });
        }
        if self.jpeg_quality > 100 {
            return Err(Error::InvalidArgument {
                arg: "jpeg_quality",
                value: self.jpeg_quality.to_string(),
            });
        }
        if self.expansion_scale < 1.0 {
            return Err(Error::InvalidArgument {
                arg: "expansion_scale",
                value: self.expansion_scale.to_string(),
            });
        }
        if self.detection.scale_step <= 1.0 {
            return Err(Error::InvalidArgument {
                arg: "scale_step",
                value: self.detection.scale_step.to_string(),
            });
        }
        if self.detection.min_face_size == 0 {
            return Err(Error::InvalidArgument {
                arg: "min_face_size",
                value: self.detection.min_face_size.to_string(),
            });
        }
        Ok(())
    }
}
