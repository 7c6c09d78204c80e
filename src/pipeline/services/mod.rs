pub mod image;
pub mod inspection_service;

pub use self::image::{AnalysisConfig, DustAnalyzer, PanelDetector};
pub use inspection_service::InspectionService;
