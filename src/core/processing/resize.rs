use fast_image_resize::{FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer, images::Image};
use image::RgbImage;

use crate::error::{Error, Result};

/// Resample an RGB crop to an exact `target` x `target` output using
/// Catmull-Rom convolution (a bicubic-class filter). The output resolution
/// is fixed by the caller and does not preserve the crop's aspect ratio.
pub fn resize_to_square(image: &RgbImage, target: u32) -> Result<RgbImage> {
    let (cols, rows) = image.dimensions();

    let resize_options =
        ResizeOptions::new().resize_alg(ResizeAlg::Convolution(FilterType::CatmullRom));
    let mut resizer = Resizer::new();

    let src_image = Image::from_vec_u8(cols, rows, image.as_raw().clone(), PixelType::U8x3)
        .map_err(Error::external)?;
    let mut dst_image = Image::new(target, target, PixelType::U8x3);
    resizer
        .resize(&src_image, &mut dst_image, &resize_options)
        .map_err(Error::external)?;

    RgbImage::from_raw(target, target, dst_image.into_vec())
        .ok_or_else(|| Error::Processing("resized buffer has unexpected length".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

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
    fn downscale_produces_exact_square() {
        let resized = resize_to_square(&gradient(1000, 800), 512).unwrap();
        assert_eq!(resized.dimensions(), (512, 512));
    }

    #[test]
    fn upscale_produces_exact_square() {
        let resized = resize_to_square(&gradient(120, 140), 512).unwrap();
        assert_eq!(resized.dimensions(), (512, 512));
    }

    #[test]
    fn same_size_round_trips_dimensions() {
        let resized = resize_to_square(&gradient(512, 512), 512).unwrap();
        assert_eq!(resized.dimensions(), (512, 512));
    }

    #[test]
    fn non_square_input_is_stretched_not_padded() {
        // A crop shrunk by edge clamping still fills the whole output.
        let resized = resize_to_square(&gradient(120, 140), 64).unwrap();
        assert_eq!(resized.dimensions(), (64, 64));
    }
}
