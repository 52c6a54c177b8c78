use serde::Deserialize;

pub const DEFAULT_SCROLL_PAN_FACTOR: f64 = 0.16;
pub const DEFAULT_SCROLL_ZOOM_FACTOR: f64 = 0.2;
pub const DEFAULT_DRAG_PAN_FACTOR: f64 = 0.001;
/// The GPU shader works in `f32`, so past a zoom of about `1e-4` neighbouring
/// pixels land on the same plane coordinate. Zooming further only enlarges
/// those blocks; the floor bounds the iteration depth, not the detail.
pub const DEFAULT_MIN_ZOOM: f64 = 1e-12;
/// Lowest floor a config may set. `iterations_for_zoom` is about 317 000 here
/// and saturates `u32` near `1e-29`.
pub const LOWEST_MIN_ZOOM: f64 = 1e-15;
pub const DEFAULT_PIXELS_PER_SCROLL_LINE: f64 = 40.0;

/// How raw pointer motion is turned into a drag delta.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DragQuantization {
    /// Truncate both positions to whole pixels, then subtract.
    ///
    /// Sub-pixel motion is dropped, even when it adds up to more than a
    /// pixel over several events.
    #[default]
    WholePixel,
    /// Subtract the raw positions directly.
    SubPixel,
}

impl DragQuantization {
    #[must_use]
    pub fn delta(self, (from_x, from_y): (f64, f64), (to_x, to_y): (f64, f64)) -> (f64, f64) {
        match self {
            Self::WholePixel => (to_x.trunc() - from_x.trunc(), to_y.trunc() - from_y.trunc()),
            Self::SubPixel => (to_x - from_x, to_y - from_y),
        }
    }
}

/// Tuning for how input moves the view.
#[derive(Debug, Copy, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NavigationSettings {
    /// Pan applied per scroll line, scaled by cursor offset and zoom.
    pub scroll_pan_factor: f64,
    /// Fraction of the zoom removed per scroll line.
    pub scroll_zoom_factor: f64,
    /// Pan per dragged pixel, scaled by zoom.
    pub drag_pan_factor: f64,
    /// Smallest zoom a scroll can reach.
    pub min_zoom: f64,
    pub drag_quantization: DragQuantization,
    /// Trackpads report scroll in pixels; this converts them to lines.
    pub pixels_per_scroll_line: f64,
}

impl Default for NavigationSettings {
    fn default() -> Self {
        Self {
            scroll_pan_factor: DEFAULT_SCROLL_PAN_FACTOR,
            scroll_zoom_factor: DEFAULT_SCROLL_ZOOM_FACTOR,
            drag_pan_factor: DEFAULT_DRAG_PAN_FACTOR,
            min_zoom: DEFAULT_MIN_ZOOM,
            drag_quantization: DragQuantization::default(),
            pixels_per_scroll_line: DEFAULT_PIXELS_PER_SCROLL_LINE,
        }
    }
}
