//! Configuration for evap-plots.
//!
//! Figure geometry (resolution, physical size, column proportions) is
//! configurable; the scientific conventions of the figures (color classes,
//! zone order, year range, map extent) are fixed in code.
//!
//! Configuration sources, in order of precedence:
//! 1. JSON config file (via [`Config::load_from_file`])
//! 2. Default values

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{PlotError, Result};

/// Largest figure side, in pixels, that a render will allocate
pub const MAX_FIGURE_SIDE_PX: u32 = 16_384;

/// Physical figure size in inches
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FigureSize {
    pub width_in: f64,
    pub height_in: f64,
}

impl FigureSize {
    pub const fn new(width_in: f64, height_in: f64) -> Self {
        Self {
            width_in,
            height_in,
        }
    }

    /// Pixel dimensions at the given resolution
    pub fn pixels(&self, dpi: u32) -> (u32, u32) {
        (
            (self.width_in * dpi as f64).round() as u32,
            (self.height_in * dpi as f64).round() as u32,
        )
    }
}

/// Rendering configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Output resolution in dots per inch
    #[serde(default = "default_dpi")]
    pub dpi: u32,

    /// Size of the spatial bias figure
    #[serde(default = "default_spatial_size")]
    pub spatial_size: FigureSize,

    /// Size of the time-series/trend figure
    #[serde(default = "default_timeseries_size")]
    pub timeseries_size: FigureSize,

    /// Relative widths of the left and right figure columns
    #[serde(default = "default_width_ratios")]
    pub width_ratios: [f64; 2],

    /// Scatter marker radius in points
    #[serde(default = "default_marker_size")]
    pub marker_size_pt: f64,
}

impl RenderConfig {
    /// Convert a length in typographic points to pixels at the configured DPI
    pub fn pt(&self, points: f64) -> u32 {
        ((points * self.dpi as f64 / 72.0).round() as u32).max(1)
    }

    /// Width of the left figure column for a figure `total_width` pixels wide
    pub fn left_column_width(&self, total_width: u32) -> u32 {
        let [left, right] = self.width_ratios;
        (total_width as f64 * left / (left + right)).round() as u32
    }

    /// Validate the render settings
    pub fn validate(&self) -> Result<()> {
        if !(10..=1200).contains(&self.dpi) {
            return Err(PlotError::Config {
                message: format!("DPI must be between 10 and 1200, got {}", self.dpi),
            });
        }

        for (name, size) in [
            ("spatial_size", self.spatial_size),
            ("timeseries_size", self.timeseries_size),
        ] {
            if !(size.width_in > 0.0 && size.height_in > 0.0) {
                return Err(PlotError::Config {
                    message: format!("{} must be positive, got {:?}", name, size),
                });
            }

            let dpi = self.dpi as f64;
            for side in [size.width_in * dpi, size.height_in * dpi] {
                if !(1.0..=MAX_FIGURE_SIDE_PX as f64).contains(&side.round()) {
                    return Err(PlotError::Config {
                        message: format!(
                            "{} at {} dpi must be between 1 and {} pixels per side, got {:?}",
                            name, self.dpi, MAX_FIGURE_SIDE_PX, size
                        ),
                    });
                }
            }
        }

        if self.width_ratios.iter().any(|r| !(*r > 0.0)) {
            return Err(PlotError::Config {
                message: format!(
                    "Column width ratios must be positive, got {:?}",
                    self.width_ratios
                ),
            });
        }

        if !(self.marker_size_pt > 0.0) {
            return Err(PlotError::Config {
                message: "Marker size must be positive".to_string(),
            });
        }

        Ok(())
    }
}

/// Complete configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Rendering configuration
    #[serde(default)]
    pub render: RenderConfig,

    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Config {
    /// Load configuration from a JSON file, filling gaps with defaults
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        match self.log_level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(PlotError::Config {
                    message: format!(
                        "Invalid log level: {}. Must be one of: trace, debug, info, warn, error",
                        self.log_level
                    ),
                });
            }
        }

        self.render.validate()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            render: RenderConfig::default(),
            log_level: default_log_level(),
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            dpi: default_dpi(),
            spatial_size: default_spatial_size(),
            timeseries_size: default_timeseries_size(),
            width_ratios: default_width_ratios(),
            marker_size_pt: default_marker_size(),
        }
    }
}

// Default value functions for serde
fn default_dpi() -> u32 {
    300
}

fn default_spatial_size() -> FigureSize {
    FigureSize::new(7.0, 6.0)
}

fn default_timeseries_size() -> FigureSize {
    FigureSize::new(6.0, 4.5)
}

fn default_width_ratios() -> [f64; 2] {
    [1.2, 0.8]
}

fn default_marker_size() -> f64 {
    0.3
}

fn default_log_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.render.dpi, 300);
        assert_eq!(config.render.spatial_size.pixels(300), (2100, 1800));
        assert_eq!(config.render.timeseries_size.pixels(300), (1800, 1350));
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_point_conversion() {
        let render = RenderConfig::default();
        assert_eq!(render.pt(72.0), 300);
        assert_eq!(render.pt(8.0), 33);
        // Hairlines never vanish
        assert_eq!(render.pt(0.01), 1);
    }

    #[test]
    fn test_left_column_width() {
        let render = RenderConfig::default();
        assert_eq!(render.left_column_width(2000), 1200);
    }

    #[test]
    fn test_config_validation() {
        let config = Config::default();
        assert!(config.validate().is_ok());

        let mut config = Config::default();
        config.log_level = "invalid".to_string();
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.render.dpi = 0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.render.width_ratios = [1.0, 0.0];
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.render.spatial_size = FigureSize::new(-1.0, 6.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_oversized_figure_is_rejected() {
        let render = RenderConfig {
            dpi: 1200,
            spatial_size: FigureSize::new(1e7, 1e7),
            ..RenderConfig::default()
        };
        let err = render.validate().unwrap_err();
        assert!(matches!(err, PlotError::Config { .. }));
        assert!(err.to_string().contains("spatial_size"));

        // Largest default figure at the highest resolution still fits
        let render = RenderConfig {
            dpi: 1200,
            ..RenderConfig::default()
        };
        assert!(render.validate().is_ok());
    }

    #[test]
    fn test_figure_below_one_pixel_is_rejected() {
        let render = RenderConfig {
            dpi: 10,
            timeseries_size: FigureSize::new(6.0, 0.01),
            ..RenderConfig::default()
        };
        assert!(matches!(render.validate(), Err(PlotError::Config { .. })));
    }

    #[test]
    fn test_load_oversized_figure_from_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "render": {{ "spatial_size": {{ "width_in": 1e7, "height_in": 6.0 }} }} }}"#
        )
        .unwrap();

        assert!(matches!(
            Config::load_from_file(file.path()),
            Err(PlotError::Config { .. })
        ));
    }

    #[test]
    fn test_load_partial_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "render": {{ "dpi": 150 }} }}"#).unwrap();

        let config = Config::load_from_file(file.path()).unwrap();
        assert_eq!(config.render.dpi, 150);
        assert_eq!(config.render.width_ratios, [1.2, 0.8]);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_load_invalid_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        assert!(matches!(
            Config::load_from_file(file.path()),
            Err(PlotError::Json(_))
        ));
    }
}
