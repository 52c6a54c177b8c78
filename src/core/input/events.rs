use std::collections::VecDeque;

use crate::core::data::viewport::Viewport;

/// Pointer buttons as reported by the windowing layer.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
    Other(u16),
}

/// A single user input, in the order the platform delivered it.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum InputEvent {
    /// Vertical scroll in line units; positive scrolls away from the user (zoom in).
    Scroll { delta: f64 },
    /// Raw pointer position in pixels, with the viewport it was measured against.
    PointerMoved { x: f64, y: f64, viewport: Viewport },
    Button { button: PointerButton, pressed: bool },
}

/// FIFO of input events waiting for the controller.
#[derive(Debug, Default)]
pub struct InputQueue {
    events: VecDeque<InputEvent>,
}

impl InputQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: InputEvent) {
        self.events.push_back(event);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub(crate) fn pop(&mut self) -> Option<InputEvent> {
        self.events.pop_front()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn queue_pops_in_arrival_order() {
        let mut queue = InputQueue::new();
        let viewport = Viewport::new(10, 10).unwrap();

        queue.push(InputEvent::Scroll { delta: 1.0 });
        queue.push(InputEvent::PointerMoved {
            x: 1.0,
            y: 2.0,
            viewport,
        });
        queue.push(InputEvent::Button {
            button: PointerButton::Primary,
            pressed: true,
        });

        assert_eq!(queue.len(), 3);
        assert_eq!(queue.pop(), Some(InputEvent::Scroll { delta: 1.0 }));
        assert!(matches!(queue.pop(), Some(InputEvent::PointerMoved { .. })));
        assert!(matches!(queue.pop(), Some(InputEvent::Button { .. })));
        assert_eq!(queue.pop(), None);
        assert!(queue.is_empty());
    }
}
