pub mod config;
pub mod contours;
pub mod cropper;
pub mod dust_analyzer;
pub mod panel_detector;

pub use self::config::{AnalysisConfig, DustDetectionConfig, PanelDetectionConfig};
pub use contours::external_contours;
pub use cropper::{crop, crop_central};
pub use dust_analyzer::{annotate_regions, dust_mask, tally_dust_regions, DustAnalyzer};
pub use panel_detector::PanelDetector;
