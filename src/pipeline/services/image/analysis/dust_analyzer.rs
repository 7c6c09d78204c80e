//! Dust segmentation and coverage measurement for panel images.
use image::{imageops, DynamicImage, GrayImage, Luma, Rgb, RgbImage};
use imageproc::drawing::draw_hollow_rect_mut;
use imageproc::rect::Rect;

use super::config::{AnalysisConfig, DustDetectionConfig};
use super::contours::external_contours;
use super::cropper::crop_central;
use super::panel_detector::PanelDetector;
use crate::error::AnalysisError;
use crate::pipeline::types::{BoundingBox, DustReport, PanelAnalysis, RegionContour};

/// Estimates how much of a panel is covered by dark deposits.
#[derive(Debug, Clone, Default)]
pub struct DustAnalyzer {
    config: AnalysisConfig,
    detector: PanelDetector,
}

impl DustAnalyzer {
    pub fn new(config: AnalysisConfig) -> Self {
        let detector = PanelDetector::new(config.panel_detection.clone());
        Self { config, detector }
    }

    /// Gate on the panel heuristic, then measure dust in the central crop.
    pub fn analyze(&self, image: &DynamicImage) -> Result<PanelAnalysis, AnalysisError> {
        if !self.detector.is_panel(image) {
            tracing::info!("Image rejected by panel detection");
            return Ok(PanelAnalysis::Rejected);
        }

        let rgb = image.to_rgb8();
        let (cropped, region) = crop_central(&rgb, self.config.dust_detection.crop_margin)?;
        tracing::debug!(
            "Cropped to {}x{} at ({}, {})",
            region.width,
            region.height,
            region.x,
            region.y
        );

        Ok(PanelAnalysis::Analyzed(self.measure_dust(&cropped)))
    }

    /// Segments dark regions of an already cropped image and outlines them.
    pub fn measure_dust(&self, cropped: &RgbImage) -> DustReport {
        let dust = &self.config.dust_detection;

        let gray = imageops::grayscale(cropped);
        let mask = dust_mask(&gray, dust.intensity_threshold);
        let contours = external_contours(&mask);
        let (dust_pixels, regions) = tally_dust_regions(&contours, dust.min_dust_area);

        let annotated = annotate_regions(cropped, &regions, dust);
        let total_pixels = cropped.width() as u64 * cropped.height() as u64;
        let dust_percentage = if total_pixels == 0 {
            0.0
        } else {
            100.0 * dust_pixels / total_pixels as f64
        };

        tracing::info!(
            "Found {} dust regions covering {:.2}% of the panel",
            regions.len(),
            dust_percentage
        );

        DustReport {
            dust_percentage,
            dust_pixels,
            total_pixels,
            regions,
            annotated,
        }
    }
}

/// Binary inverse threshold: pixels strictly darker than `threshold` become
/// 255, everything else 0.
pub fn dust_mask(gray: &GrayImage, threshold: u8) -> GrayImage {
    let mut mask = gray.clone();
    for p in mask.pixels_mut() {
        if p.0[0] < threshold {
            *p = Luma([255]);
        } else {
            *p = Luma([0]);
        }
    }
    mask
}

/// Sums the area of every contour above `min_area` and collects its box.
///
/// Areas are added per contour without masking pixels already counted, so
/// overlapping contours contribute their full areas each time.
pub fn tally_dust_regions(contours: &[RegionContour], min_area: f64) -> (f64, Vec<BoundingBox>) {
    let mut dust_pixels = 0.0;
    let mut regions = Vec::new();

    for contour in contours {
        let area = contour.area();
        if area > min_area {
            dust_pixels += area;
            regions.push(contour.bounding_box());
        }
    }

    (dust_pixels, regions)
}

/// Draws each region's outline onto a copy of `image`, `border_thickness`
/// pixels wide growing inward.
pub fn annotate_regions(
    image: &RgbImage,
    regions: &[BoundingBox],
    dust: &DustDetectionConfig,
) -> RgbImage {
    let mut canvas = image.clone();
    let color = Rgb(dust.highlight_color);

    for region in regions {
        for inset in 0..dust.border_thickness {
            let width = region.width.saturating_sub(2 * inset);
            let height = region.height.saturating_sub(2 * inset);
            if width == 0 || height == 0 {
                break;
            }
            let rect = Rect::at((region.x + inset) as i32, (region.y + inset) as i32)
                .of_size(width, height);
            draw_hollow_rect_mut(&mut canvas, rect, color);
        }
    }

    canvas
}
