use std::error::Error;
use std::fmt;

use crate::core::data::frame_uniforms::FrameUniforms;

pub const DEFAULT_ZOOM: f64 = 2.5;

const BASE_ITERATIONS: f64 = 1000.0;
const ITERATION_GAIN: f64 = 10.0;
const ITERATION_EXPONENT: f64 = 0.3;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ViewStateError {
    InvalidZoom { zoom: f64 },
}

impl fmt::Display for ViewStateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidZoom { zoom } => {
                write!(f, "zoom must be finite and greater than zero: {}", zoom)
            }
        }
    }
}

impl Error for ViewStateError {}

/// Iteration depth used by the renderer at a given zoom.
///
/// Grows as the view is magnified (smaller zoom), never drops below one.
#[must_use]
pub fn iterations_for_zoom(zoom: f64) -> u32 {
    let depth = BASE_ITERATIONS + ITERATION_GAIN * (1.0 / zoom).powf(ITERATION_EXPONENT);

    // `as` saturates, so an extreme zoom can't wrap the count.
    (depth.round() as u32).max(1)
}

/// Current pan/zoom position in the fractal plane.
///
/// `max_iterations` is only ever written by [`ViewState::set_zoom`], so it is
/// always `iterations_for_zoom(zoom)`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewState {
    zoom: f64,
    offset_x: f64,
    offset_y: f64,
    max_iterations: u32,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            zoom: DEFAULT_ZOOM,
            offset_x: 0.0,
            offset_y: 0.0,
            max_iterations: iterations_for_zoom(DEFAULT_ZOOM),
        }
    }
}

impl ViewState {
    pub fn new(zoom: f64, offset_x: f64, offset_y: f64) -> Result<Self, ViewStateError> {
        if !zoom.is_finite() || zoom <= 0.0 {
            return Err(ViewStateError::InvalidZoom { zoom });
        }

        Ok(Self {
            zoom,
            offset_x,
            offset_y,
            max_iterations: iterations_for_zoom(zoom),
        })
    }

    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    #[must_use]
    pub fn offset_x(&self) -> f64 {
        self.offset_x
    }

    #[must_use]
    pub fn offset_y(&self) -> f64 {
        self.offset_y
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn uniforms(&self) -> FrameUniforms {
        FrameUniforms {
            zoom: self.zoom,
            offset_x: self.offset_x,
            offset_y: self.offset_y,
            max_iterations: self.max_iterations,
        }
    }

    /// Callers clamp first; a non-positive zoom here is a bug.
    pub(crate) fn set_zoom(&mut self, zoom: f64) {
        debug_assert!(zoom > 0.0, "zoom must stay positive, got {zoom}");

        self.zoom = zoom;
        self.max_iterations = iterations_for_zoom(zoom);
    }

    pub(crate) fn pan(&mut self, delta_x: f64, delta_y: f64) {
        self.offset_x += delta_x;
        self.offset_y += delta_y;
    }
}
