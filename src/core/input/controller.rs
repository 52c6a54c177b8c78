//! Turns queued input events into pan/zoom updates.
//!
//! Every rule here is a plain function of the event, the current
//! [`ViewState`] and the current [`PointerState`]. Events are applied one at
//! a time, in the order they were queued.

use log::{debug, warn};

use crate::core::data::pointer_state::{PointerState, normalize_pointer};
use crate::core::data::view_state::ViewState;
use crate::core::data::viewport::Viewport;
use crate::core::input::events::{InputEvent, InputQueue, PointerButton};
use crate::core::input::navigation::NavigationSettings;

#[derive(Debug, Clone, Default)]
pub struct InputController {
    settings: NavigationSettings,
}

impl InputController {
    #[must_use]
    pub fn new(settings: NavigationSettings) -> Self {
        Self { settings }
    }

    #[must_use]
    pub fn settings(&self) -> &NavigationSettings {
        &self.settings
    }

    /// Applies every queued event, oldest first. Returns how many were applied.
    pub fn drain(&self, queue: &mut InputQueue, view: &mut ViewState, pointer: &mut PointerState) -> usize {
        let mut applied = 0;

        while let Some(event) = queue.pop() {
            self.apply(event, view, pointer);
            applied += 1;
        }

        if applied > 0 {
            debug!(
                "Applied {} input events: zoom {} offset ({}, {})",
                applied,
                view.zoom(),
                view.offset_x(),
                view.offset_y()
            );
        }

        applied
    }

    pub fn apply(&self, event: InputEvent, view: &mut ViewState, pointer: &mut PointerState) {
        match event {
            InputEvent::Scroll { delta } => self.scroll(delta, view, pointer),
            InputEvent::PointerMoved { x, y, viewport } => {
                self.pointer_moved(x, y, viewport, view, pointer);
            }
            InputEvent::Button { button, pressed } => Self::button(button, pressed, pointer),
        }
    }

    /// Zooms about the cursor.
    ///
    /// The offset moves toward the cursor first, using the zoom from before
    /// the scroll, so the point under the cursor stays roughly in place.
    pub fn scroll(&self, delta: f64, view: &mut ViewState, pointer: &PointerState) {
        if !delta.is_finite() {
            warn!("Ignoring non-finite scroll delta {}", delta);
            return;
        }

        let zoom = view.zoom();
        let (cursor_x, cursor_y) = pointer.normalized();

        view.pan(
            cursor_x * self.settings.scroll_pan_factor * zoom,
            cursor_y * self.settings.scroll_pan_factor * zoom,
        );

        let requested = zoom - delta * self.settings.scroll_zoom_factor * zoom;
        let clamped = clamp_zoom(requested, self.settings.min_zoom);

        if clamped != requested {
            warn!("Scroll of {} would set zoom to {}, clamped to {}", delta, requested, clamped);
        }

        view.set_zoom(clamped);
    }

    /// Tracks the cursor and, while the primary button is held, drags the view.
    ///
    /// X pans against the pointer motion and Y with it: normalized Y is
    /// already flipped relative to pixel Y, so the view follows the hand.
    pub fn pointer_moved(
        &self,
        raw_x: f64,
        raw_y: f64,
        viewport: Viewport,
        view: &mut ViewState,
        pointer: &mut PointerState,
    ) {
        if !raw_x.is_finite() || !raw_y.is_finite() {
            warn!("Ignoring non-finite pointer position ({}, {})", raw_x, raw_y);
            return;
        }

        pointer.set_normalized(normalize_pointer(raw_x, raw_y, viewport));

        if pointer.pressed() {
            let (delta_x, delta_y) = self
                .settings
                .drag_quantization
                .delta(pointer.previous_raw(), (raw_x, raw_y));

            if delta_x != 0.0 || delta_y != 0.0 {
                let zoom = view.zoom();
                view.pan(
                    -(delta_x * self.settings.drag_pan_factor * zoom),
                    delta_y * self.settings.drag_pan_factor * zoom,
                );
            }
        }

        pointer.set_previous_raw(raw_x, raw_y);
    }

    /// Only the primary button drags; the rest are ignored.
    pub fn button(button: PointerButton, pressed: bool, pointer: &mut PointerState) {
        if button == PointerButton::Primary {
            pointer.set_pressed(pressed);
        }
    }
}

fn clamp_zoom(zoom: f64, min_zoom: f64) -> f64 {
    if zoom.is_nan() || zoom < min_zoom {
        min_zoom
    } else if zoom > f64::MAX {
        f64::MAX
    } else {
        zoom
    }
}
