use std::marker::PhantomData;

use crate::config::{ConfigError, ViewerConfig};
use crate::controllers::render::{RenderScheduler, Renderer, TickOutcome};
use crate::core::data::pointer_state::PointerState;
use crate::core::data::view_state::ViewState;
use crate::core::input::controller::InputController;
use crate::core::input::events::{InputEvent, InputQueue};

/// Everything the main loop owns: view, pointer, pending input and the
/// redraw trigger.
///
/// Not `Send`: windowing and GPU calls must stay on the thread that created
/// the event loop, so the session stays there too.
#[derive(Debug)]
pub struct ViewerSession {
    view: ViewState,
    pointer: PointerState,
    controller: InputController,
    queue: InputQueue,
    scheduler: RenderScheduler,
    _main_thread: PhantomData<*const ()>,
}

impl ViewerSession {
    pub fn from_config(config: &ViewerConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let [offset_x, offset_y] = config.initial_offset;
        let view = ViewState::new(config.initial_zoom, offset_x, offset_y)?;

        Ok(Self {
            view,
            pointer: PointerState::default(),
            controller: InputController::new(config.navigation),
            queue: InputQueue::new(),
            scheduler: RenderScheduler::new(config.slow_frame_threshold()),
            _main_thread: PhantomData,
        })
    }

    #[must_use]
    pub fn view(&self) -> &ViewState {
        &self.view
    }

    #[must_use]
    pub fn pointer(&self) -> &PointerState {
        &self.pointer
    }

    #[must_use]
    pub fn pending_events(&self) -> usize {
        self.queue.len()
    }

    pub fn queue_event(&mut self, event: InputEvent) {
        self.queue.push(event);
    }

    /// One loop iteration: apply all queued input, then redraw if the view moved.
    pub fn pump<R: Renderer>(&mut self, renderer: &mut R) -> Result<TickOutcome, R::Error> {
        self.controller
            .drain(&mut self.queue, &mut self.view, &mut self.pointer);

        self.scheduler.tick(&self.view, renderer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controllers::render::ports::renderer::recording::RecordingRenderer;
    use crate::core::data::viewport::Viewport;
    use crate::core::input::events::PointerButton;
    use crate::core::input::navigation::NavigationSettings;

    fn session() -> ViewerSession {
        ViewerSession::from_config(&ViewerConfig::default()).unwrap()
    }

    #[test]
    fn starts_at_configured_view() {
        let config = ViewerConfig {
            initial_zoom: 1.5,
            initial_offset: [-0.75, 0.1],
            ..ViewerConfig::default()
        };
        let session = ViewerSession::from_config(&config).unwrap();

        assert_eq!(session.view().zoom(), 1.5);
        assert_eq!(session.view().offset_x(), -0.75);
        assert_eq!(session.view().offset_y(), 0.1);
    }

    #[test]
    fn rejects_invalid_config() {
        let config = ViewerConfig {
            initial_zoom: 0.0,
            ..ViewerConfig::default()
        };

        assert!(ViewerSession::from_config(&config).is_err());
    }

    #[test]
    fn rejects_zoom_floor_above_initial_zoom() {
        let config = ViewerConfig {
            initial_zoom: 2.5,
            navigation: NavigationSettings {
                min_zoom: 10.0,
                ..NavigationSettings::default()
            },
            ..ViewerConfig::default()
        };

        assert!(matches!(
            ViewerSession::from_config(&config),
            Err(ConfigError::MinZoomOutOfRange { .. })
        ));
    }

    #[test]
    fn positive_scroll_at_the_floor_keeps_zoom() {
        let config = ViewerConfig {
            initial_zoom: 2.5,
            navigation: NavigationSettings {
                min_zoom: 2.5,
                ..NavigationSettings::default()
            },
            ..ViewerConfig::default()
        };
        let mut session = ViewerSession::from_config(&config).unwrap();
        let mut renderer = RecordingRenderer::default();
        let _ = session.pump(&mut renderer);

        session.queue_event(InputEvent::Scroll { delta: 1.0 });
        let _ = session.pump(&mut renderer);

        assert!(session.view().zoom() <= 2.5);
    }

    #[test]
    fn pump_renders_once_then_idles() {
        let mut session = session();
        let mut renderer = RecordingRenderer::default();

        assert_eq!(session.pump(&mut renderer), Ok(TickOutcome::Rendered));
        assert_eq!(session.pump(&mut renderer), Ok(TickOutcome::Idle));
        assert_eq!(session.pump(&mut renderer), Ok(TickOutcome::Idle));
        assert_eq!(renderer.frames, 1);
    }

    #[test]
    fn pump_drains_queue_before_rendering() {
        let mut session = session();
        let mut renderer = RecordingRenderer::default();
        let viewport = Viewport::new(800, 600).unwrap();
        let _ = session.pump(&mut renderer);

        session.queue_event(InputEvent::PointerMoved {
            x: 800.0,
            y: 0.0,
            viewport,
        });
        session.queue_event(InputEvent::Scroll { delta: 1.0 });
        assert_eq!(session.pending_events(), 2);

        assert_eq!(session.pump(&mut renderer), Ok(TickOutcome::Rendered));
        assert_eq!(session.pending_events(), 0);

        let last = renderer.uniforms.last().unwrap();
        assert!((last.zoom - 2.0).abs() < 1e-12);
        assert!((last.offset_x - 0.4).abs() < 1e-12);
        assert!((last.offset_y - 0.4).abs() < 1e-12);
        assert_eq!(last.max_iterations, 1008);
    }

    #[test]
    fn moves_without_press_do_not_render() {
        let mut session = session();
        let mut renderer = RecordingRenderer::default();
        let viewport = Viewport::new(800, 600).unwrap();
        let _ = session.pump(&mut renderer);

        for x in [10.0, 200.0, 790.0] {
            session.queue_event(InputEvent::PointerMoved { x, y: 50.0, viewport });
        }

        assert_eq!(session.pump(&mut renderer), Ok(TickOutcome::Idle));
        assert_eq!(renderer.frames, 1);
    }

    #[test]
    fn drag_renders_a_new_frame() {
        let mut session = session();
        let mut renderer = RecordingRenderer::default();
        let viewport = Viewport::new(800, 600).unwrap();
        let _ = session.pump(&mut renderer);

        session.queue_event(InputEvent::PointerMoved {
            x: 100.0,
            y: 100.0,
            viewport,
        });
        session.queue_event(InputEvent::Button {
            button: PointerButton::Primary,
            pressed: true,
        });
        session.queue_event(InputEvent::PointerMoved {
            x: 140.0,
            y: 100.0,
            viewport,
        });
        session.queue_event(InputEvent::Button {
            button: PointerButton::Primary,
            pressed: false,
        });

        assert_eq!(session.pump(&mut renderer), Ok(TickOutcome::Rendered));
        assert!(!session.pointer().pressed());
        assert!((session.view().offset_x() + 40.0 * 0.001 * 2.5).abs() < 1e-12);
    }
}
