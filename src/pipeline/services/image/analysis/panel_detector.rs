//! Gate that decides whether an image plausibly shows a solar panel.
use image::DynamicImage;
use imageproc::edges::canny;

use super::config::PanelDetectionConfig;
use super::contours::external_contours;

/// Edge/contour heuristic for "this looks like a panel".
///
/// Runs Canny on the grayscale image and accepts it when at least one outer
/// edge contour encloses more than `min_panel_area` pixels. This is a weak
/// heuristic: any image with a large enough solid shape passes.
#[derive(Debug, Clone, Default)]
pub struct PanelDetector {
    config: PanelDetectionConfig,
}

impl PanelDetector {
    pub fn new(config: PanelDetectionConfig) -> Self {
        Self { config }
    }

    pub fn is_panel(&self, image: &DynamicImage) -> bool {
        self.panel_like_regions(image) > 0
    }

    /// Number of outer edge contours large enough to be a panel outline.
    pub fn panel_like_regions(&self, image: &DynamicImage) -> usize {
        if image.width() == 0 || image.height() == 0 {
            return 0;
        }

        let gray = image.to_luma8();
        let edges = canny(&gray, self.config.canny_low, self.config.canny_high);
        let contours = external_contours(&edges);

        let panel_like = contours
            .iter()
            .filter(|contour| contour.area() > self.config.min_panel_area)
            .count();

        tracing::debug!(
            "Panel detection: {} edge contours, {} above {} px",
            contours.len(),
            panel_like,
            self.config.min_panel_area
        );

        panel_like
    }
}
