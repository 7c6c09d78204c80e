use std::path::PathBuf;

use dustcheck::{AppError, InspectionService, Settings};
use tower::{Service, ServiceExt};

fn init_logging(settings: &Settings) -> Result<(), AppError> {
    tracing_subscriber::fmt()
        .with_max_level(settings.max_log_level()?)
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let settings = Settings::load()?;
    init_logging(&settings)?;

    let path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .ok_or(AppError::Usage)?;

    let mut service = InspectionService::new(settings)?;
    let report = service.ready().await?.call(path).await?;

    println!("{}", report.summary());
    if let Some(annotated) = report.display_image() {
        println!("Annotated image: {}", annotated.display());
    }
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
