use std::{
    path::{Path, PathBuf},
    sync::Arc,
    task::{Context, Poll},
};

use futures::future::BoxFuture;
use image::{DynamicImage, ImageError, ImageFormat, ImageReader};
use tower::Service;

use super::image::DustAnalyzer;
use crate::config::Settings;
use crate::error::AnalysisError;
use crate::pipeline::types::{InspectionReport, PanelAnalysis};

/// Boundary between stored uploads and the analysis pipeline.
///
/// Takes the path of an uploaded image, analyzes it on the blocking pool and
/// writes the annotated crop next to the uploads as
/// `<annotated_prefix><file name>`.
#[derive(Clone)]
pub struct InspectionService {
    settings: Arc<Settings>,
    analyzer: Arc<DustAnalyzer>,
}

impl InspectionService {
    pub fn new(settings: Settings) -> Result<Self, AnalysisError> {
        settings
            .analysis
            .validate()
            .map_err(AnalysisError::InvalidConfig)?;

        let analyzer = DustAnalyzer::new(settings.analysis.clone());
        Ok(Self {
            settings: Arc::new(settings),
            analyzer: Arc::new(analyzer),
        })
    }

    /// Load, analyze and annotate one stored image.
    ///
    /// Unreadable files and non-panel images are reported through the
    /// returned status; only geometry and output failures are errors.
    pub fn inspect_path(&self, path: &Path) -> Result<InspectionReport, AnalysisError> {
        let (image, format) = match load_upload(path) {
            Ok(loaded) => loaded,
            Err(e) => {
                tracing::warn!("Failed to load {}: {}", path.display(), e);
                return Ok(InspectionReport::load_failed(path.to_path_buf()));
            }
        };

        let report = match self.analyzer.analyze(&image)? {
            PanelAnalysis::Rejected => {
                return Ok(InspectionReport::not_a_panel(path.to_path_buf()));
            }
            PanelAnalysis::Analyzed(report) => report,
        };

        let output = self
            .settings
            .annotated_path_for(path)
            .ok_or_else(|| AnalysisError::MissingFileName(path.to_path_buf()))?;
        std::fs::create_dir_all(&self.settings.upload_dir)
            .map_err(|e| AnalysisError::Io(e, self.settings.upload_dir.clone()))?;

        // Written in the upload's own format, whatever its name claims.
        let format = format
            .or_else(|| ImageFormat::from_path(&output).ok())
            .unwrap_or(ImageFormat::Png);
        report
            .annotated
            .save_with_format(&output, format)
            .map_err(|e| AnalysisError::Save(e, output.clone()))?;

        tracing::info!(
            "Inspected {}: {:.2}% dust, annotated image at {}",
            path.display(),
            report.dust_percentage,
            output.display()
        );

        Ok(InspectionReport::analyzed(
            path.to_path_buf(),
            report,
            self.settings.analysis.clean_cutoff,
            output,
        ))
    }
}

/// Decodes an upload by sniffing its contents rather than trusting the
/// file extension.
fn load_upload(path: &Path) -> Result<(DynamicImage, Option<ImageFormat>), ImageError> {
    let reader = ImageReader::open(path)?.with_guessed_format()?;
    let format = reader.format();
    let image = reader.decode()?;
    Ok((image, format))
}

impl Service<PathBuf> for InspectionService {
    type Response = InspectionReport;
    type Error = AnalysisError;
    type Future = BoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, path: PathBuf) -> Self::Future {
        let service = self.clone();

        Box::pin(async move {
            tokio::task::spawn_blocking(move || service.inspect_path(&path)).await?
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::types::{Cleanliness, InspectionStatus};
    use image::{ImageBuffer, Rgb, RgbImage};
    use tower::ServiceExt;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("dustcheck-{}-{}", name, std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn service_for(dir: &Path) -> InspectionService {
        InspectionService::new(Settings::default().with_upload_dir(dir)).unwrap()
    }

    fn dusty_panel() -> RgbImage {
        let mut img = ImageBuffer::from_pixel(200, 200, Rgb([235, 240, 250]));
        for y in 40..120 {
            for x in 40..140 {
                img.put_pixel(x, y, Rgb([30, 30, 40]));
            }
        }
        img
    }

    #[tokio::test]
    async fn analyzed_upload_writes_annotated_copy() {
        let dir = scratch_dir("analyzed");
        let upload = dir.join("panel.png");
        dusty_panel().save(&upload).unwrap();

        let mut service = service_for(&dir);
        let report = service.ready().await.unwrap().call(upload.clone()).await.unwrap();

        assert_eq!(report.status, InspectionStatus::Analyzed);
        assert_eq!(report.cleanliness, Some(Cleanliness::Dirty));
        let expected = dir.join("dusty_panel.png");
        assert_eq!(report.annotated_path.as_ref(), Some(&expected));
        assert_eq!(report.display_image(), Some(&expected));

        let written = image::open(&expected).unwrap();
        assert_eq!((written.width(), written.height()), (160, 160));

        let percentage = report.dust_percentage.unwrap();
        assert!((percentage - 100.0 * (99.0 * 79.0) / 25_600.0).abs() < 1e-9);
    }

    #[tokio::test]
    async fn blank_upload_is_not_a_panel() {
        let dir = scratch_dir("blank");
        let upload = dir.join("wall.png");
        RgbImage::from_pixel(120, 120, Rgb([200, 200, 200]))
            .save(&upload)
            .unwrap();

        let mut service = service_for(&dir);
        let report = service.call(upload).await.unwrap();

        assert_eq!(report.status, InspectionStatus::NotAPanel);
        assert!(report.dust_percentage.is_none());
        assert!(!dir.join("dusty_wall.png").exists());
    }

    #[tokio::test]
    async fn unreadable_uploads_are_load_failures() {
        let dir = scratch_dir("unreadable");
        let corrupt = dir.join("corrupt.png");
        std::fs::write(&corrupt, b"definitely not a png").unwrap();

        let mut service = service_for(&dir);
        let report = service.call(corrupt).await.unwrap();
        assert_eq!(report.status, InspectionStatus::LoadFailed);

        let report = service.call(dir.join("missing.jpg")).await.unwrap();
        assert_eq!(report.status, InspectionStatus::LoadFailed);
        assert!(report.annotated_path.is_none());
    }

    #[test]
    fn uploads_are_decoded_by_content_not_name() {
        let dir = scratch_dir("sniffed");
        let png = dir.join("source.png");
        dusty_panel().save(&png).unwrap();
        let misnamed = dir.join("photo.jpg");
        let bare = dir.join("upload");
        std::fs::copy(&png, &misnamed).unwrap();
        std::fs::copy(&png, &bare).unwrap();

        let service = service_for(&dir);
        for (upload, annotated) in [(misnamed, "dusty_photo.jpg"), (bare, "dusty_upload")] {
            let report = service.inspect_path(&upload).unwrap();
            assert_eq!(report.status, InspectionStatus::Analyzed);

            let written = dir.join(annotated);
            assert_eq!(report.annotated_path.as_ref(), Some(&written));
            let reader = ImageReader::open(&written)
                .unwrap()
                .with_guessed_format()
                .unwrap();
            assert_eq!(reader.format(), Some(ImageFormat::Png));
            let decoded = reader.decode().unwrap();
            assert_eq!((decoded.width(), decoded.height()), (160, 160));
        }
    }

    #[test]
    fn invalid_analysis_config_is_refused() {
        let mut settings = Settings::default();
        settings.analysis.dust_detection.crop_margin = 0.75;

        assert!(matches!(
            InspectionService::new(settings),
            Err(AnalysisError::InvalidConfig(_))
        ));
    }

    #[test]
    fn output_directory_is_created_on_demand() {
        let dir = scratch_dir("on-demand");
        let upload = dir.join("roof.png");
        dusty_panel().save(&upload).unwrap();
        let out_dir = dir.join("annotated");

        let service = service_for(&out_dir);
        let report = service.inspect_path(&upload).unwrap();

        assert_eq!(report.annotated_path, Some(out_dir.join("dusty_roof.png")));
        assert!(out_dir.join("dusty_roof.png").exists());
    }
}
