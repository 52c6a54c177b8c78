use std::time::{Duration, Instant};

use log::{debug, info};

use crate::controllers::render::ports::Renderer;
use crate::core::data::view_state::ViewState;

pub const DEFAULT_SLOW_FRAME_THRESHOLD: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerState {
    /// The last produced frame shows the current view.
    Idle,
    /// The view moved since the last produced frame.
    Dirty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Rendered,
    Idle,
}

/// The parts of a view a frame depends on.
///
/// `max_iterations` is left out: it follows from `zoom`.
#[derive(Debug, Clone, Copy, PartialEq)]
struct RenderedView {
    zoom: f64,
    offset_x: f64,
    offset_y: f64,
}

impl From<&ViewState> for RenderedView {
    fn from(view: &ViewState) -> Self {
        Self {
            zoom: view.zoom(),
            offset_x: view.offset_x(),
            offset_y: view.offset_y(),
        }
    }
}

#[derive(Debug)]
pub struct RenderScheduler {
    last_rendered: Option<RenderedView>,
    slow_frame_threshold: Duration,
}

impl RenderScheduler {
    #[must_use]
    pub fn new(slow_frame_threshold: Duration) -> Self {
        Self {
            last_rendered: None,
            slow_frame_threshold,
        }
    }

    /// Compares with exact float equality: any change at all needs a frame.
    #[must_use]
    pub fn state(&self, view: &ViewState) -> SchedulerState {
        match self.last_rendered {
            Some(last) if last == RenderedView::from(view) => SchedulerState::Idle,
            _ => SchedulerState::Dirty,
        }
    }

    /// Produces one frame if the view changed since the last one.
    ///
    /// A failed draw leaves the scheduler dirty.
    pub fn tick<R: Renderer>(&mut self, view: &ViewState, renderer: &mut R) -> Result<TickOutcome, R::Error> {
        if self.state(view) == SchedulerState::Idle {
            return Ok(TickOutcome::Idle);
        }

        let uniforms = view.uniforms();
        renderer.set_uniforms(&uniforms);

        let start = Instant::now();
        renderer.draw_frame()?;
        let render_duration = start.elapsed();

        self.last_rendered = Some(RenderedView::from(view));

        if render_duration > self.slow_frame_threshold {
            info!(
                "Z: {} X: {} Y: {} N: {} in {:.6}s",
                uniforms.zoom,
                uniforms.offset_x,
                uniforms.offset_y,
                uniforms.max_iterations,
                render_duration.as_secs_f64()
            );
        } else {
            debug!("Frame rendered in {} ms", render_duration.as_millis());
        }

        Ok(TickOutcome::Rendered)
    }
}

impl Default for RenderScheduler {
    fn default() -> Self {
        Self::new(DEFAULT_SLOW_FRAME_THRESHOLD)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::{RenderScheduler, SchedulerState, TickOutcome};
    use crate::controllers::render::ports::Renderer;
    use crate::controllers::render::ports::renderer::recording::{DrawFailed, RecordingRenderer};
    use crate::core::data::frame_uniforms::FrameUniforms;
    use crate::core::data::view_state::ViewState;
    use crate::core::data::viewport::Viewport;

    struct SleepingRenderer {
        frame_time: Duration,
        frames: usize,
    }

    impl Renderer for SleepingRenderer {
        type Error = DrawFailed;

        fn set_viewport(&mut self, _viewport: Viewport) -> Result<(), Self::Error> {
            Ok(())
        }

        fn set_uniforms(&mut self, _uniforms: &FrameUniforms) {}

        fn draw_frame(&mut self) -> Result<(), Self::Error> {
            std::thread::sleep(self.frame_time);
            self.frames += 1;
            Ok(())
        }
    }

    #[test]
    fn first_tick_renders_initial_view() {
        let mut scheduler = RenderScheduler::default();
        let mut renderer = RecordingRenderer::default();
        let view = ViewState::default();

        assert_eq!(scheduler.state(&view), SchedulerState::Dirty);
        assert_eq!(scheduler.tick(&view, &mut renderer), Ok(TickOutcome::Rendered));
        assert_eq!(renderer.frames, 1);
        assert_eq!(renderer.uniforms, vec![view.uniforms()]);
        assert_eq!(scheduler.state(&view), SchedulerState::Idle);
    }

    #[test]
    fn identical_ticks_never_redraw() {
        let mut scheduler = RenderScheduler::default();
        let mut renderer = RecordingRenderer::default();
        let view = ViewState::default();

        let _ = scheduler.tick(&view, &mut renderer);

        for _ in 0..10 {
            assert_eq!(scheduler.tick(&view, &mut renderer), Ok(TickOutcome::Idle));
        }

        assert_eq!(renderer.frames, 1);
        assert_eq!(renderer.uniforms.len(), 1);
    }

    #[test]
    fn any_change_in_zoom_or_offset_redraws() {
        let mut scheduler = RenderScheduler::default();
        let mut renderer = RecordingRenderer::default();
        let mut view = ViewState::default();
        let _ = scheduler.tick(&view, &mut renderer);

        view.pan(f64::EPSILON, 0.0);
        assert_eq!(scheduler.tick(&view, &mut renderer), Ok(TickOutcome::Rendered));

        view.pan(0.0, 1e-300);
        assert_eq!(scheduler.tick(&view, &mut renderer), Ok(TickOutcome::Rendered));

        let zoom = view.zoom();
        view.set_zoom(f64::from_bits(zoom.to_bits() - 1));
        assert_eq!(scheduler.tick(&view, &mut renderer), Ok(TickOutcome::Rendered));

        assert_eq!(renderer.frames, 4);
    }

    #[test]
    fn change_and_change_back_before_tick_does_not_redraw() {
        let mut scheduler = RenderScheduler::default();
        let mut renderer = RecordingRenderer::default();
        let mut view = ViewState::default();
        let _ = scheduler.tick(&view, &mut renderer);

        view.pan(0.5, 0.0);
        view.pan(-0.5, 0.0);

        assert_eq!(scheduler.tick(&view, &mut renderer), Ok(TickOutcome::Idle));
        assert_eq!(renderer.frames, 1);
    }

    #[test]
    fn failed_draw_keeps_scheduler_dirty() {
        let mut scheduler = RenderScheduler::default();
        let mut renderer = RecordingRenderer {
            fail_next_draw: true,
            ..RecordingRenderer::default()
        };
        let view = ViewState::default();

        assert_eq!(scheduler.tick(&view, &mut renderer), Err(DrawFailed));
        assert_eq!(scheduler.state(&view), SchedulerState::Dirty);

        assert_eq!(scheduler.tick(&view, &mut renderer), Ok(TickOutcome::Rendered));
        assert_eq!(renderer.frames, 1);
    }

    #[test]
    fn uniforms_are_set_before_each_frame() {
        let mut scheduler = RenderScheduler::default();
        let mut renderer = RecordingRenderer::default();
        let mut view = ViewState::default();

        let _ = scheduler.tick(&view, &mut renderer);
        view.set_zoom(1.0);
        let _ = scheduler.tick(&view, &mut renderer);

        assert_eq!(renderer.uniforms.len(), renderer.frames);
        assert_eq!(renderer.uniforms[1].zoom, 1.0);
        assert_eq!(renderer.uniforms[1].max_iterations, view.max_iterations());
    }

    #[test]
    fn slow_frame_still_counts_as_rendered() {
        let mut scheduler = RenderScheduler::new(Duration::ZERO);
        let mut renderer = SleepingRenderer {
            frame_time: Duration::from_millis(2),
            frames: 0,
        };
        let view = ViewState::default();

        assert_eq!(scheduler.tick(&view, &mut renderer), Ok(TickOutcome::Rendered));
        assert_eq!(renderer.frames, 1);
        assert_eq!(scheduler.state(&view), SchedulerState::Idle);
        assert_eq!(scheduler.tick(&view, &mut renderer), Ok(TickOutcome::Idle));
    }
}
