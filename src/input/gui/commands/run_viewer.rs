use std::error::Error;
use std::fmt;

use log::{error, info};
use winit::dpi::PhysicalSize;
use winit::error::{EventLoopError, OsError};
use winit::event::Event;
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::{Window, WindowBuilder};

use crate::config::{ConfigError, ViewerConfig};
use crate::controllers::session::ViewerSession;
use crate::input::gui::app::{GuiApp, LoopControl};
use crate::presenters::gpu::{GpuRenderer, GpuRendererError};

const FALLBACK_WINDOW_SIZE: PhysicalSize<u32> = PhysicalSize::new(800, 600);

#[derive(Debug)]
pub enum RunViewerError {
    Config(ConfigError),
    EventLoop(EventLoopError),
    Window(OsError),
    Renderer(GpuRendererError),
}

impl fmt::Display for RunViewerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "invalid configuration: {}", e),
            Self::EventLoop(e) => write!(f, "event loop error: {}", e),
            Self::Window(e) => write!(f, "failed to create window: {}", e),
            Self::Renderer(e) => write!(f, "renderer error: {}", e),
        }
    }
}

impl Error for RunViewerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::EventLoop(e) => Some(e),
            Self::Window(e) => Some(e),
            Self::Renderer(e) => Some(e),
        }
    }
}

/// Opens the viewer window and runs the event loop on the calling thread.
///
/// Must be called from the main thread; the windowing layer requires it.
pub struct RunViewerCommand {
    config: ViewerConfig,
}

impl RunViewerCommand {
    #[must_use]
    pub fn new(config: ViewerConfig) -> Self {
        Self { config }
    }

    /// Blocks until the window is closed. Any renderer failure ends the loop.
    pub fn execute(&self) -> Result<(), RunViewerError> {
        let session = ViewerSession::from_config(&self.config).map_err(RunViewerError::Config)?;

        let event_loop = EventLoop::new().map_err(RunViewerError::EventLoop)?;
        let window_size = self.window_size(&event_loop);

        // Leak the window to get a 'static reference for pixels
        let window: &'static Window = Box::leak(Box::new(
            WindowBuilder::new()
                .with_title("Fractal Viewer")
                .with_inner_size(window_size)
                .with_resizable(false)
                .build(&event_loop)
                .map_err(RunViewerError::Window)?,
        ));

        info!("Colour map: {}", self.config.colour_map);
        let renderer = GpuRenderer::new(window, &session.view().uniforms(), self.config.colour_map)
            .map_err(RunViewerError::Renderer)?;

        let mut app = GuiApp::new(
            window,
            renderer,
            session,
            self.config.navigation.pixels_per_scroll_line,
        )
        .map_err(RunViewerError::Renderer)?;

        let mut fatal: Option<GpuRendererError> = None;

        event_loop
            .run(|event, elwt| {
                elwt.set_control_flow(ControlFlow::Wait);

                let result = match event {
                    Event::WindowEvent {
                        ref event,
                        window_id,
                    } if window_id == window.id() => app.handle_window_event(event),
                    Event::AboutToWait => app.pump().map(|_| LoopControl::Continue),
                    _ => Ok(LoopControl::Continue),
                };

                match result {
                    Ok(LoopControl::Continue) => {}
                    Ok(LoopControl::Exit) => elwt.exit(),
                    Err(e) => {
                        error!("Rendering failed: {}", e);
                        fatal = Some(e);
                        elwt.exit();
                    }
                }
            })
            .map_err(RunViewerError::EventLoop)?;

        match fatal {
            Some(e) => Err(RunViewerError::Renderer(e)),
            None => Ok(()),
        }
    }

    fn window_size(&self, event_loop: &EventLoop<()>) -> PhysicalSize<u32> {
        if let Some([width, height]) = self.config.window_size {
            return PhysicalSize::new(width, height);
        }

        match event_loop.primary_monitor() {
            Some(monitor) => {
                let size = monitor.size();
                info!("Primary monitor resolution: {}x{}", size.width, size.height);
                size
            }
            None => FALLBACK_WINDOW_SIZE,
        }
    }
}
