use std::path::PathBuf;

use thiserror::Error;

// Main Application Error Type

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration Error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Analysis Error: {0}")]
    Analysis(#[from] AnalysisError),
    #[error("Failed to encode report: {0}")]
    Report(#[from] serde_json::Error),
    #[error("Usage: dustcheck <image-path>")]
    Usage,
}

// Pipeline / Inspection Error Type
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error(
        "Region {x},{y} {width}x{height} does not fit inside a {image_width}x{image_height} image"
    )]
    InvalidRegion {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
        image_width: u32,
        image_height: u32,
    },
    #[error("Invalid analysis configuration: {0}")]
    InvalidConfig(String),
    #[error("Upload path has no file name: {0}")]
    MissingFileName(PathBuf),
    #[error("Failed to prepare upload directory {1}: {0}")]
    Io(std::io::Error, PathBuf),
    #[error("Failed to save annotated image {1}: {0}")]
    Save(image::ImageError, PathBuf),
    #[error("Inspection task failed: {0}")]
    Worker(#[from] tokio::task::JoinError),
}
