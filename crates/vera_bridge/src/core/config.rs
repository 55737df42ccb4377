//! # Bridge Configuration
//!
//! Configuration for the scene bridge: logging behaviour, the host render
//! settings used when a scene camera object is converted, and the viewer
//! camera type requested for rendering.
//!
//! ## Configuration Categories
//!
//! - **Logging Config**: Default log filter and timestamp format
//! - **Render Settings**: Output resolution and pixel aspect of the host scene
//! - **Render Camera Type**: Viewer camera model used for offline renders

use serde::{Serialize, Deserialize};
use std::fmt;
use std::str::FromStr;

pub use crate::config::{Config, ConfigError, ConfigFormat};

/// Host property id under which the render camera type is stored
pub const RENDER_CAMERA_TYPE_ID: &str = "render_camera_type";

/// # Logging Configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default log filter when `RUST_LOG` is unset
    pub level: String,
    /// Whether log lines carry a timestamp
    pub timestamps: bool,
}

impl LoggingConfig {
    /// Create a new logging configuration
    pub fn new() -> Self {
        Self {
            level: "info".to_string(),
            timestamps: true,
        }
    }

    /// Set log level
    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = level.into();
        self
    }

    /// Enable or disable timestamps
    pub fn with_timestamps(mut self, enabled: bool) -> Self {
        self.timestamps = enabled;
        self
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// # Render Settings
///
/// Mirror of the host scene's output settings. The raw resolution and the
/// pixel aspect ratios parameterize the host camera projection; the
/// percentage only affects the pixel dimensions of the rendered image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    /// Horizontal output resolution in pixels
    pub resolution_x: u32,
    /// Vertical output resolution in pixels
    pub resolution_y: u32,
    /// Output scale in percent applied to both resolutions
    pub resolution_percentage: u32,
    /// Horizontal pixel aspect ratio
    pub pixel_aspect_x: f32,
    /// Vertical pixel aspect ratio
    pub pixel_aspect_y: f32,
}

impl RenderSettings {
    /// Create render settings for the given resolution with square pixels
    pub fn new(resolution_x: u32, resolution_y: u32) -> Self {
        Self {
            resolution_x,
            resolution_y,
            resolution_percentage: 100,
            pixel_aspect_x: 1.0,
            pixel_aspect_y: 1.0,
        }
    }

    /// Set the output percentage
    pub fn with_percentage(mut self, percentage: u32) -> Self {
        self.resolution_percentage = percentage;
        self
    }

    /// Set the pixel aspect ratios
    pub fn with_pixel_aspect(mut self, x: f32, y: f32) -> Self {
        self.pixel_aspect_x = x;
        self.pixel_aspect_y = y;
        self
    }

    /// Size of the rendered image in pixels after the output percentage
    pub fn pixel_dimensions(&self) -> (u32, u32) {
        let scale = |value: u32| {
            let scaled = u64::from(value) * u64::from(self.resolution_percentage) / 100;
            u32::try_from(scaled).unwrap_or(u32::MAX)
        };
        (scale(self.resolution_x), scale(self.resolution_y))
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.resolution_x == 0 || self.resolution_y == 0 {
            return Err(ConfigError::Invalid("Resolution must be non-zero".to_string()));
        }

        if self.resolution_percentage == 0 {
            return Err(ConfigError::Invalid("Resolution percentage must be at least 1".to_string()));
        }

        if !(self.pixel_aspect_x > 0.0 && self.pixel_aspect_y > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "Pixel aspect must be positive, got {}x{}",
                self.pixel_aspect_x, self.pixel_aspect_y
            )));
        }

        Ok(())
    }
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self::new(1920, 1080)
    }
}

/// Camera model the viewer uses when rendering the scene
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderCameraType {
    /// Regular perspective camera
    #[default]
    Perspective,
    /// Spherical projection split into quadrilaterals
    SphericalQuadrilateral,
    /// Cube-map style projection onto the six faces of a hexahedron
    QuadrilateralHexahedron,
}

impl RenderCameraType {
    /// Every camera type, in the order the host lists them
    pub const ALL: [Self; 3] = [
        Self::Perspective,
        Self::SphericalQuadrilateral,
        Self::QuadrilateralHexahedron,
    ];

    /// Identifier stored in the host property
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Perspective => "perspective",
            Self::SphericalQuadrilateral => "spherical_quadrilateral",
            Self::QuadrilateralHexahedron => "quadrilateral_hexahedron",
        }
    }
}

impl fmt::Display for RenderCameraType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RenderCameraType {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ConfigError::Invalid(format!("Unknown {}: {}", RENDER_CAMERA_TYPE_ID, s)))
    }
}

/// # Complete Bridge Configuration
///
/// Top-level configuration loaded by host adapters.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BridgeConfig {
    /// Viewer camera model
    pub camera_type: RenderCameraType,
    /// Logging configuration
    pub logging: LoggingConfig,
    /// Host render settings
    pub render: RenderSettings,
}

impl BridgeConfig {
    /// Create a configuration for the given render resolution
    pub fn new(resolution_x: u32, resolution_y: u32) -> Self {
        Self {
            render: RenderSettings::new(resolution_x, resolution_y),
            ..Default::default()
        }
    }

    /// Set logging configuration
    pub fn with_logging(mut self, logging: LoggingConfig) -> Self {
        self.logging = logging;
        self
    }

    /// Set render settings
    pub fn with_render(mut self, render: RenderSettings) -> Self {
        self.render = render;
        self
    }

    /// Set the render camera type
    pub fn with_camera_type(mut self, camera_type: RenderCameraType) -> Self {
        self.camera_type = camera_type;
        self
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.logging.level.trim().is_empty() {
            return Err(ConfigError::Invalid("Log level cannot be empty".to_string()));
        }

        self.render.validate()
    }
}

impl Config for BridgeConfig {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("vera_bridge_{}_{}", std::process::id(), name))
    }

    #[test]
    fn test_defaults_are_valid() {
        let config = BridgeConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.camera_type, RenderCameraType::Perspective);
        assert_eq!(config.render.pixel_dimensions(), (1920, 1080));
    }

    #[test]
    fn test_pixel_dimensions_apply_percentage() {
        let render = RenderSettings::new(1920, 1080).with_percentage(50);
        assert_eq!(render.pixel_dimensions(), (960, 540));
    }

    #[test]
    fn test_render_settings_validation() {
        assert!(RenderSettings::new(0, 1080).validate().is_err());
        assert!(RenderSettings::new(640, 480).with_percentage(0).validate().is_err());
        assert!(RenderSettings::new(640, 480).with_pixel_aspect(0.0, 1.0).validate().is_err());
        assert!(RenderSettings::new(640, 480).with_pixel_aspect(2.0, 1.0).validate().is_ok());
    }

    #[test]
    fn test_camera_type_strings() {
        for kind in RenderCameraType::ALL {
            assert_eq!(kind.to_string().parse::<RenderCameraType>().unwrap(), kind);
        }
        assert_eq!(
            "spherical_quadrilateral".parse::<RenderCameraType>().unwrap(),
            RenderCameraType::SphericalQuadrilateral
        );
        assert!("fisheye".parse::<RenderCameraType>().is_err());
    }

    #[test]
    fn test_toml_partial_config_uses_defaults() {
        let text = r#"
            camera_type = "quadrilateral_hexahedron"

            [render]
            resolution_x = 800
            resolution_y = 600
        "#;

        let config = BridgeConfig::from_str_as(text, ConfigFormat::Toml).unwrap();
        assert_eq!(config.camera_type, RenderCameraType::QuadrilateralHexahedron);
        assert_eq!(config.render.resolution_x, 800);
        assert_eq!(config.render.resolution_percentage, 100);
        assert_eq!(config.logging, LoggingConfig::default());
    }

    #[test]
    fn test_save_and_load_toml() {
        let path = temp_path("config.toml");
        let config = BridgeConfig::new(1280, 720)
            .with_logging(LoggingConfig::new().with_level("debug").with_timestamps(false))
            .with_camera_type(RenderCameraType::SphericalQuadrilateral);

        config.save_to_file(&path).unwrap();
        let loaded = BridgeConfig::load_from_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_save_and_load_ron() {
        let path = temp_path("config.ron");
        let config = BridgeConfig::new(640, 480)
            .with_render(RenderSettings::new(640, 480).with_pixel_aspect(1.5, 1.0));

        config.save_to_file(&path).unwrap();
        let loaded = BridgeConfig::load_from_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_unsupported_extension() {
        let result = BridgeConfig::load_from_file("bridge.json");
        assert!(matches!(result, Err(ConfigError::UnsupportedFormat(_))));
    }
}
