pub mod analysis;

pub use analysis::{AnalysisConfig, DustAnalyzer, PanelDetector};
