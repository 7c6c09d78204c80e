use image::{imageops, RgbImage};

use crate::error::AnalysisError;
use crate::pipeline::types::CropRegion;

/// Copy of the pixels in `[y, y+height) x [x, x+width)`.
///
/// The region must be non-empty and lie fully inside the image; nothing is
/// clamped.
pub fn crop(image: &RgbImage, region: CropRegion) -> Result<RgbImage, AnalysisError> {
    let (image_width, image_height) = image.dimensions();
    if region.is_empty() || !region.fits_within(image_width, image_height) {
        return Err(AnalysisError::InvalidRegion {
            x: region.x,
            y: region.y,
            width: region.width,
            height: region.height,
            image_width,
            image_height,
        });
    }

    Ok(imageops::crop_imm(image, region.x, region.y, region.width, region.height).to_image())
}

/// Crops away `margin` of the width and height on every side.
pub fn crop_central(
    image: &RgbImage,
    margin: f64,
) -> Result<(RgbImage, CropRegion), AnalysisError> {
    let region = CropRegion::central(image.width(), image.height(), margin);
    let cropped = crop(image, region)?;
    Ok((cropped, region))
}
