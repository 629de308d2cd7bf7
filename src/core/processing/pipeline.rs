use image::{RgbImage, imageops};
use tracing::debug;

use crate::core::params::CropParams;
use crate::core::processing::expand::expand_to_square;
use crate::core::processing::resize::resize_to_square;
use crate::core::processing::select::largest_face;
use crate::detect::{FaceDetector, detect_faces};
use crate::error::Result;

/// Crop the most prominent face out of `image`: detect, select the largest
/// candidate, expand it to a padded square, slice, and resample to the
/// fixed output size.
///
/// Returns `Ok(None)` when the detector reports no usable face — a normal
/// outcome, not an error. The crop slice needs no bounds check because the
/// expanded region is guaranteed to be contained in the image.
pub fn crop_largest_face(
    image: &RgbImage,
    detector: &dyn FaceDetector,
    params: &CropParams,
) -> Result<Option<RgbImage>> {
    let faces = detect_faces(image, detector, &params.detection);
    let Some(face) = largest_face(&faces) else {
        return Ok(None);
    };

    let region = expand_to_square(face, params.expansion_scale, image.width(), image.height());
    debug!(
        "selected face {} of {} candidate(s), cropping {}x{}+{}+{}",
        face,
        faces.len(),
        region.width,
        region.height,
        region.x,
        region.y
    );

    let crop = imageops::crop_imm(image, region.x, region.y, region.width, region.height).to_image();
    let resized = resize_to_square(&crop, params.output_size)?;
    Ok(Some(resized))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FaceBox;

    struct FixedFaces(Vec<FaceBox>);

    impl FaceDetector for FixedFaces {
        fn detect(&self, _gray: &[u8], _width: u32, _height: u32) -> Vec<FaceBox> {
            self.0.clone()
        }
    }

    fn gradient(width: u32, height: u32) -> RgbImage {
        RgbImage::from_fn(width, height, |x, y| {
            image::Rgb([
                (x * 255 / width.max(1)) as u8,
                (y * 255 / height.max(1)) as u8,
                128,
            ])
        })
    }

    #[test]
    fn detected_face_yields_fixed_size_crop() {
        let detector = FixedFaces(vec![FaceBox {
            x: 100,
            y: 100,
            width: 200,
            height: 200,
        }]);
        let crop = crop_largest_face(&gradient(1000, 800), &detector, &CropParams::default())
            .unwrap()
            .unwrap();
        assert_eq!(crop.dimensions(), (512, 512));
    }

    #[test]
    fn face_at_the_corner_still_crops() {
        let detector = FixedFaces(vec![FaceBox {
            x: 0,
            y: 0,
            width: 100,
            height: 100,
        }]);
        let crop = crop_largest_face(&gradient(1000, 800), &detector, &CropParams::default())
            .unwrap()
            .unwrap();
        assert_eq!(crop.dimensions(), (512, 512));
    }

    #[test]
    fn no_detection_yields_none() {
        let detector = FixedFaces(Vec::new());
        let crop =
            crop_largest_face(&gradient(640, 480), &detector, &CropParams::default()).unwrap();
        assert!(crop.is_none());
    }

    #[test]
    fn candidates_below_the_size_floor_yield_none() {
        // Default min_face_size is 80; a 40x40 candidate does not count.
        let detector = FixedFaces(vec![FaceBox {
            x: 10,
            y: 10,
            width: 40,
            height: 40,
        }]);
        let crop =
            crop_largest_face(&gradient(640, 480), &detector, &CropParams::default()).unwrap();
        assert!(crop.is_none());
    }

    #[test]
    fn largest_of_several_faces_drives_the_crop() {
        let detector = FixedFaces(vec![
            FaceBox {
                x: 20,
                y: 20,
                width: 90,
                height: 90,
            },
            FaceBox {
                x: 400,
                y: 300,
                width: 180,
                height: 180,
            },
        ]);
        let crop = crop_largest_face(&gradient(1000, 800), &detector, &CropParams::default())
            .unwrap()
            .unwrap();
        assert_eq!(crop.dimensions(), (512, 512));
    }
}
