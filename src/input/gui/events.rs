//! Translation from winit window events to [`InputEvent`]s.

use winit::dpi::PhysicalSize;
use winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};

use crate::core::data::viewport::Viewport;
use crate::core::input::events::{InputEvent, PointerButton};

/// Vertical scroll in line units. Positive means away from the user.
#[must_use]
pub fn scroll_lines(delta: MouseScrollDelta, pixels_per_line: f64) -> f64 {
    match delta {
        MouseScrollDelta::LineDelta(_, y) => f64::from(y),
        MouseScrollDelta::PixelDelta(position) => position.y / pixels_per_line,
    }
}

#[must_use]
pub fn pointer_button(button: MouseButton) -> PointerButton {
    match button {
        MouseButton::Left => PointerButton::Primary,
        MouseButton::Right => PointerButton::Secondary,
        MouseButton::Middle => PointerButton::Middle,
        MouseButton::Back => PointerButton::Other(3),
        MouseButton::Forward => PointerButton::Other(4),
        MouseButton::Other(id) => PointerButton::Other(id),
    }
}

/// Returns `None` for events the viewer doesn't react to, and for pointer
/// motion while the window has no area.
#[must_use]
pub fn translate(event: &WindowEvent, inner_size: PhysicalSize<u32>, pixels_per_line: f64) -> Option<InputEvent> {
    match event {
        WindowEvent::MouseWheel { delta, .. } => Some(InputEvent::Scroll {
            delta: scroll_lines(*delta, pixels_per_line),
        }),
        WindowEvent::CursorMoved { position, .. } => {
            let viewport = Viewport::new(inner_size.width, inner_size.height).ok()?;

            Some(InputEvent::PointerMoved {
                x: position.x,
                y: position.y,
                viewport,
            })
        }
        WindowEvent::MouseInput { state, button, .. } => Some(InputEvent::Button {
            button: pointer_button(*button),
            pressed: *state == ElementState::Pressed,
        }),
        _ => None,
    }
}
