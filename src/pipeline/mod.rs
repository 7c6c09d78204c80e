pub mod services;
pub mod types;

pub use services::{AnalysisConfig, DustAnalyzer, InspectionService, PanelDetector};
pub use types::{
    BoundingBox, Cleanliness, CropRegion, DustReport, InspectionReport, InspectionStatus,
    PanelAnalysis, RegionContour,
};
