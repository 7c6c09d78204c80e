pub mod config;
pub mod error;
pub mod pipeline;

pub use crate::config::Settings;
pub use crate::error::{AnalysisError, AppError};

pub use crate::pipeline::{
    AnalysisConfig, Cleanliness, DustAnalyzer, DustReport, InspectionReport, InspectionService,
    InspectionStatus, PanelAnalysis, PanelDetector,
};
