mod analysis;
mod contour;
mod inspection;
mod region;

pub use analysis::{Cleanliness, DustReport, PanelAnalysis};
pub use contour::RegionContour;
pub use inspection::{InspectionReport, InspectionStatus};
pub use region::{BoundingBox, CropRegion};
