use std::path::PathBuf;

use serde::Serialize;

use super::{BoundingBox, Cleanliness, DustReport};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InspectionStatus {
    LoadFailed,
    NotAPanel,
    Analyzed,
}

/// What the upload boundary hands back to its caller for one stored image.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InspectionReport {
    pub source: PathBuf,
    pub status: InspectionStatus,
    pub dust_percentage: Option<f64>,
    pub cleanliness_percentage: Option<f64>,
    pub cleanliness: Option<Cleanliness>,
    pub regions: Vec<BoundingBox>,
    pub annotated_path: Option<PathBuf>,
}

impl InspectionReport {
    pub fn load_failed(source: PathBuf) -> Self {
        Self::without_analysis(source, InspectionStatus::LoadFailed)
    }

    pub fn not_a_panel(source: PathBuf) -> Self {
        Self::without_analysis(source, InspectionStatus::NotAPanel)
    }

    /// Report for a measured panel whose annotated copy was written to
    /// `annotated_path`.
    pub fn analyzed(
        source: PathBuf,
        report: DustReport,
        clean_cutoff: f64,
        annotated_path: PathBuf,
    ) -> Self {
        Self {
            source,
            status: InspectionStatus::Analyzed,
            dust_percentage: Some(report.dust_percentage),
            cleanliness_percentage: Some(report.cleanliness_percentage()),
            cleanliness: Some(report.cleanliness(clean_cutoff)),
            regions: report.regions,
            annotated_path: Some(annotated_path),
        }
    }

    fn without_analysis(source: PathBuf, status: InspectionStatus) -> Self {
        Self {
            source,
            status,
            dust_percentage: None,
            cleanliness_percentage: None,
            cleanliness: None,
            regions: Vec::new(),
            annotated_path: None,
        }
    }

    /// Message shown to the person who uploaded the image.
    pub fn summary(&self) -> &'static str {
        match (self.status, self.cleanliness) {
            (InspectionStatus::LoadFailed, _) => {
                "Could not read the uploaded image. Please try another file."
            }
            (InspectionStatus::NotAPanel, _) => {
                "Not a valid image. Please upload a solar panel image."
            }
            (InspectionStatus::Analyzed, Some(Cleanliness::Clean)) => {
                "Dust areas not found, panel is clean."
            }
            (InspectionStatus::Analyzed, _) => "Dirty",
        }
    }

    /// The annotated image is only worth showing when the panel is dirty.
    pub fn display_image(&self) -> Option<&PathBuf> {
        match self.cleanliness {
            Some(Cleanliness::Dirty) => self.annotated_path.as_ref(),
            _ => None,
        }
    }
}
