use crate::core::data::viewport::Viewport;

/// Maps a raw pixel position into `[-1, 1]` on both axes.
///
/// Pixel Y grows downward, normalized Y grows upward. Positions outside the
/// viewport (reported while a drag holds the pointer) are clamped to the edge.
#[must_use]
pub fn normalize_pointer(raw_x: f64, raw_y: f64, viewport: Viewport) -> (f64, f64) {
    let width = f64::from(viewport.width());
    let height = f64::from(viewport.height());

    let x = raw_x / width * 2.0 - 1.0;
    let y = -(raw_y / height * 2.0 - 1.0);

    (x.clamp(-1.0, 1.0), y.clamp(-1.0, 1.0))
}

/// Where the pointer is and whether the primary button is held.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct PointerState {
    normalized_x: f64,
    normalized_y: f64,
    previous_raw_x: f64,
    previous_raw_y: f64,
    pressed: bool,
}

impl PointerState {
    #[must_use]
    pub fn normalized(&self) -> (f64, f64) {
        (self.normalized_x, self.normalized_y)
    }

    #[must_use]
    pub fn previous_raw(&self) -> (f64, f64) {
        (self.previous_raw_x, self.previous_raw_y)
    }

    #[must_use]
    pub fn pressed(&self) -> bool {
        self.pressed
    }

    pub(crate) fn set_pressed(&mut self, pressed: bool) {
        self.pressed = pressed;
    }

    pub(crate) fn set_normalized(&mut self, (x, y): (f64, f64)) {
        self.normalized_x = x;
        self.normalized_y = y;
    }

    pub(crate) fn set_previous_raw(&mut self, raw_x: f64, raw_y: f64) {
        self.previous_raw_x = raw_x;
        self.previous_raw_y = raw_y;
    }
}
