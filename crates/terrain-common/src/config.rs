//! Contour generation configuration.
//!
//! Configuration can be loaded from YAML or JSON. Every field has a default,
//! so an empty document is a valid configuration:
//!
//! ```yaml
//! height_step: 10
//! distance_threshold: 30.0
//! for_height: 120
//! render:
//!   title: "North slope"
//!   draw_generated_points: false
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::{ContourError, ContourResult};

/// Default interval between contour levels.
pub const DEFAULT_HEIGHT_STEP: i64 = 10;

/// Default maximum length of an emitted contour segment.
pub const DEFAULT_DISTANCE_THRESHOLD: f64 = 30.0;

/// Parameters of the contour generation engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContourConfig {
    /// Interval between contour levels; must be positive
    pub height_step: i64,

    /// Longest contour segment kept; negative disables filtering
    pub distance_threshold: f64,

    /// Only assemble contours at this height
    pub for_height: Option<i64>,

    /// SVG output layout
    pub render: RenderConfig,
}

impl Default for ContourConfig {
    fn default() -> Self {
        Self {
            height_step: DEFAULT_HEIGHT_STEP,
            distance_threshold: DEFAULT_DISTANCE_THRESHOLD,
            for_height: None,
            render: RenderConfig::default(),
        }
    }
}

impl ContourConfig {
    /// Load configuration from a file. `.yaml` and `.yml` files are parsed as
    /// YAML, anything else as JSON.
    pub fn from_file(path: impl AsRef<Path>) -> ContourResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| ContourError::Config(format!("{}: {}", path.display(), e)))?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml(&content),
            _ => Self::from_json(&content),
        }
    }

    /// Parse configuration from a YAML string.
    pub fn from_yaml(yaml: &str) -> ContourResult<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from a JSON string.
    pub fn from_json(json: &str) -> ContourResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> ContourResult<()> {
        if self.height_step <= 0 {
            return Err(ContourError::InvalidConfig(format!(
                "height_step must be positive, got {}",
                self.height_step
            )));
        }
        if self.distance_threshold.is_nan() {
            return Err(ContourError::InvalidConfig(
                "distance_threshold must be a number".to_string(),
            ));
        }
        self.render.validate()
    }

    /// Whether segments are filtered by length at all.
    pub fn filters_by_distance(&self) -> bool {
        self.distance_threshold >= 0.0
    }
}

/// Layout of the SVG output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Document title
    pub title: String,

    /// Coordinates are multiplied by `scale_numerator / scale_denominator`
    pub scale_numerator: i64,
    pub scale_denominator: i64,

    /// Offsets added after scaling, in millimetres
    pub margin_x: i64,
    pub margin_y: i64,

    pub draw_generated_points: bool,
    pub draw_declared_points: bool,

    /// Fill of the height labels of declared points, `#rrggbb`
    pub label_color: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            title: "Contour map".to_string(),
            scale_numerator: 100,
            scale_denominator: 107,
            margin_x: 1,
            margin_y: 1,
            draw_generated_points: true,
            draw_declared_points: true,
            label_color: "#305030".to_string(),
        }
    }
}

impl RenderConfig {
    pub fn validate(&self) -> ContourResult<()> {
        if self.scale_numerator <= 0 || self.scale_denominator <= 0 {
            return Err(ContourError::InvalidConfig(format!(
                "scale {}/{} must be positive",
                self.scale_numerator, self.scale_denominator
            )));
        }
        if Color::from_hex(&self.label_color).is_none() {
            return Err(ContourError::InvalidConfig(format!(
                "label_color '{}' is not #rrggbb",
                self.label_color
            )));
        }
        Ok(())
    }

    /// Parsed label colour, falling back to the default green.
    pub fn label_color(&self) -> Color {
        Color::from_hex(&self.label_color).unwrap_or(Color::rgb(0x30, 0x50, 0x30))
    }
}
