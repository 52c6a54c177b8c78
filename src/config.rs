//! Viewer settings.
//!
//! Everything has a default, so an absent or partial JSON file is fine.
//! The file is named by the `FRACTAL_VIEWER_CONFIG` environment variable.

use std::error::Error;
use std::fmt;
use std::path::Path;
use std::time::Duration;

use log::info;
use serde::Deserialize;

use crate::controllers::render::DEFAULT_SLOW_FRAME_THRESHOLD;
use crate::core::colour_map::ColourMapKind;
use crate::core::data::view_state::{DEFAULT_ZOOM, ViewStateError};
use crate::core::input::navigation::{LOWEST_MIN_ZOOM, NavigationSettings};

pub const CONFIG_ENV_VAR: &str = "FRACTAL_VIEWER_CONFIG";

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    InvalidValue { field: &'static str, value: f64 },
    InvalidWindowSize { width: u32, height: u32 },
    MinZoomOutOfRange { min_zoom: f64, initial_zoom: f64 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "failed to read config file: {}", e),
            Self::Parse(e) => write!(f, "failed to parse config: {}", e),
            Self::InvalidValue { field, value } => {
                write!(f, "{} must be finite and greater than zero, got {}", field, value)
            }
            Self::InvalidWindowSize { width, height } => {
                write!(f, "window size must be positive: {}x{}", width, height)
            }
            Self::MinZoomOutOfRange { min_zoom, initial_zoom } => write!(
                f,
                "navigation.min_zoom must lie between {:e} and initial_zoom ({}), got {:e}",
                LOWEST_MIN_ZOOM, initial_zoom, min_zoom
            ),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::InvalidValue { .. } | Self::InvalidWindowSize { .. } | Self::MinZoomOutOfRange { .. } => None,
        }
    }
}

impl From<ViewStateError> for ConfigError {
    fn from(error: ViewStateError) -> Self {
        match error {
            ViewStateError::InvalidZoom { zoom } => Self::InvalidValue {
                field: "initial_zoom",
                value: zoom,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ViewerConfig {
    pub initial_zoom: f64,
    pub initial_offset: [f64; 2],
    pub navigation: NavigationSettings,
    /// Frames slower than this are logged with the view that produced them.
    pub slow_frame_threshold_secs: f64,
    /// Window size in physical pixels; the primary monitor's size when absent.
    pub window_size: Option<[u32; 2]>,
    pub colour_map: ColourMapKind,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            initial_zoom: DEFAULT_ZOOM,
            initial_offset: [0.0, 0.0],
            navigation: NavigationSettings::default(),
            slow_frame_threshold_secs: DEFAULT_SLOW_FRAME_THRESHOLD.as_secs_f64(),
            window_size: None,
            colour_map: ColourMapKind::default(),
        }
    }
}

impl ViewerConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json).map_err(ConfigError::Parse)?;
        config.validate()?;

        Ok(config)
    }

    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(ConfigError::Io)?;
        Self::from_json(&json)
    }

    /// Reads the file named by [`CONFIG_ENV_VAR`], or returns the defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => {
                info!("Loading config from {}", Path::new(&path).display());
                Self::load_from_file(Path::new(&path))
            }
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let nav = &self.navigation;

        for (field, value) in [
            ("initial_zoom", self.initial_zoom),
            ("navigation.scroll_pan_factor", nav.scroll_pan_factor),
            ("navigation.scroll_zoom_factor", nav.scroll_zoom_factor),
            ("navigation.drag_pan_factor", nav.drag_pan_factor),
            ("navigation.min_zoom", nav.min_zoom),
            ("navigation.pixels_per_scroll_line", nav.pixels_per_scroll_line),
            ("slow_frame_threshold_secs", self.slow_frame_threshold_secs),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::InvalidValue { field, value });
            }
        }

        for (field, value) in [
            ("initial_offset[0]", self.initial_offset[0]),
            ("initial_offset[1]", self.initial_offset[1]),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::InvalidValue { field, value });
            }
        }

        // A floor above the start would turn the first zoom-in into a zoom-out.
        if nav.min_zoom < LOWEST_MIN_ZOOM || nav.min_zoom > self.initial_zoom {
            return Err(ConfigError::MinZoomOutOfRange {
                min_zoom: nav.min_zoom,
                initial_zoom: self.initial_zoom,
            });
        }

        if let Some([width, height]) = self.window_size {
            if width == 0 || height == 0 {
                return Err(ConfigError::InvalidWindowSize { width, height });
            }
        }

        Ok(())
    }

    #[must_use]
    pub fn slow_frame_threshold(&self) -> Duration {
        Duration::try_from_secs_f64(self.slow_frame_threshold_secs).unwrap_or(DEFAULT_SLOW_FRAME_THRESHOLD)
    }
}
