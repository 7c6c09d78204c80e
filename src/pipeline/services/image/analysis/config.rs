use serde::Deserialize;

/// Configuration for panel inspection with tunable parameters
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub panel_detection: PanelDetectionConfig,
    pub dust_detection: DustDetectionConfig,
    /// Dust percentages strictly below this value are labelled clean.
    pub clean_cutoff: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PanelDetectionConfig {
    pub canny_low: f32,
    pub canny_high: f32,
    pub min_panel_area: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DustDetectionConfig {
    /// Pixels darker than this are dust candidates.
    pub intensity_threshold: u8,
    pub min_dust_area: f64,
    /// Fraction trimmed from each side before segmentation.
    pub crop_margin: f64,
    pub border_thickness: u32,
    pub highlight_color: [u8; 3],
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            panel_detection: PanelDetectionConfig::default(),
            dust_detection: DustDetectionConfig::default(),
            clean_cutoff: 10.0,
        }
    }
}

impl Default for PanelDetectionConfig {
    fn default() -> Self {
        Self {
            canny_low: 50.0,
            canny_high: 150.0,
            min_panel_area: 1000.0,
        }
    }
}

impl Default for DustDetectionConfig {
    fn default() -> Self {
        Self {
            intensity_threshold: 150,
            min_dust_area: 500.0,
            crop_margin: 0.1,
            border_thickness: 2,
            highlight_color: [255, 0, 0],
        }
    }
}

impl AnalysisConfig {
    /// Validate configuration parameters
    pub fn validate(&self) -> Result<(), String> {
        let panel = &self.panel_detection;
        if panel.canny_low < 0.0 || panel.canny_low > panel.canny_high {
            return Err("Canny low threshold must be between 0 and the high threshold".to_string());
        }

        if panel.min_panel_area < 0.0 {
            return Err("Minimum panel area must not be negative".to_string());
        }

        let dust = &self.dust_detection;
        if !(0.0..0.5).contains(&dust.crop_margin) {
            return Err("Crop margin must be in [0.0, 0.5)".to_string());
        }

        if dust.min_dust_area < 0.0 {
            return Err("Minimum dust area must not be negative".to_string());
        }

        if dust.border_thickness == 0 {
            return Err("Border thickness must be greater than 0".to_string());
        }

        if !self.clean_cutoff.is_finite() {
            return Err("Clean cutoff must be a finite percentage".to_string());
        }

        Ok(())
    }
}
