use image::RgbImage;
use serde::Serialize;

use super::BoundingBox;

/// Outcome of running the dust analyzer on one image.
#[derive(Debug, Clone, PartialEq)]
pub enum PanelAnalysis {
    /// The image did not pass the panel gate.
    Rejected,
    Analyzed(DustReport),
}

impl PanelAnalysis {
    pub fn is_rejected(&self) -> bool {
        matches!(self, PanelAnalysis::Rejected)
    }

    pub fn report(&self) -> Option<&DustReport> {
        match self {
            PanelAnalysis::Analyzed(report) => Some(report),
            PanelAnalysis::Rejected => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DustReport {
    /// Not clamped: overlapping contours are counted once per contour.
    pub dust_percentage: f64,
    pub dust_pixels: f64,
    pub total_pixels: u64,
    pub regions: Vec<BoundingBox>,
    /// Cropped image with every counted region outlined.
    pub annotated: RgbImage,
}

impl DustReport {
    pub fn cleanliness_percentage(&self) -> f64 {
        100.0 - self.dust_percentage
    }

    pub fn cleanliness(&self, cutoff: f64) -> Cleanliness {
        Cleanliness::from_percentage(self.dust_percentage, cutoff)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Cleanliness {
    Clean,
    Dirty,
}

impl Cleanliness {
    /// `Clean` iff the dust percentage is strictly below `cutoff`.
    pub fn from_percentage(dust_percentage: f64, cutoff: f64) -> Self {
        if dust_percentage < cutoff {
            Cleanliness::Clean
        } else {
            Cleanliness::Dirty
        }
    }
}
