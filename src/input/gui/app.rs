//! Window-side half of the main loop.

use log::debug;
use winit::event::WindowEvent;
use winit::window::Window;

use crate::controllers::render::{Renderer, TickOutcome};
use crate::controllers::session::ViewerSession;
use crate::core::data::viewport::Viewport;
use crate::input::gui::events::translate;
use crate::presenters::gpu::{GpuRenderer, GpuRendererError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Exit,
}

pub struct GuiApp {
    window: &'static Window,
    renderer: GpuRenderer,
    session: ViewerSession,
    pixels_per_scroll_line: f64,
}

impl GuiApp {
    /// Sizes the renderer to the window and draws the first frame.
    pub fn new(
        window: &'static Window,
        mut renderer: GpuRenderer,
        mut session: ViewerSession,
        pixels_per_scroll_line: f64,
    ) -> Result<Self, GpuRendererError> {
        let size = window.inner_size();

        if let Ok(viewport) = Viewport::new(size.width, size.height) {
            renderer.set_viewport(viewport)?;
        }

        session.pump(&mut renderer)?;

        Ok(Self {
            window,
            renderer,
            session,
            pixels_per_scroll_line,
        })
    }

    /// Queues input; only resize and expose touch the renderer directly.
    pub fn handle_window_event(&mut self, event: &WindowEvent) -> Result<LoopControl, GpuRendererError> {
        match event {
            WindowEvent::CloseRequested => return Ok(LoopControl::Exit),
            WindowEvent::Resized(size) => {
                // Zero while minimised; keep the old surface until it comes back.
                if let Ok(viewport) = Viewport::new(size.width, size.height) {
                    debug!("Viewport resized to {}x{}", size.width, size.height);
                    self.renderer.set_viewport(viewport)?;
                    self.renderer.draw_frame()?;
                }
            }
            WindowEvent::RedrawRequested => self.renderer.draw_frame()?,
            _ => {
                if let Some(input) = translate(event, self.window.inner_size(), self.pixels_per_scroll_line) {
                    self.session.queue_event(input);
                }
            }
        }

        Ok(LoopControl::Continue)
    }

    /// Called once the platform has no more events queued for this iteration.
    pub fn pump(&mut self) -> Result<TickOutcome, GpuRendererError> {
        self.session.pump(&mut self.renderer)
    }
}
