//! Interactive Mandelbrot viewer.
//!
//! Scroll zooms about the cursor, dragging with the primary button pans.
//! Input is queued as [`InputEvent`]s, applied in order by the
//! [`InputController`], and the [`RenderScheduler`] asks the [`Renderer`]
//! for a frame only when the view has moved.
//!
//! The windowed front end lives behind the `gui` feature; everything else
//! runs without a window.

mod config;
mod controllers;
mod core;
#[cfg(feature = "gui")]
mod input;
#[cfg(feature = "gui")]
mod presenters;

pub use config::{CONFIG_ENV_VAR, ConfigError, ViewerConfig};
pub use controllers::render::{RenderScheduler, Renderer, SchedulerState, TickOutcome};
pub use controllers::session::ViewerSession;
pub use crate::core::colour_map::ColourMapKind;
pub use crate::core::data::frame_uniforms::FrameUniforms;
pub use crate::core::data::pointer_state::{PointerState, normalize_pointer};
pub use crate::core::data::view_state::{ViewState, ViewStateError, iterations_for_zoom};
pub use crate::core::data::viewport::{Viewport, ViewportError};
pub use crate::core::input::controller::InputController;
pub use crate::core::input::events::{InputEvent, InputQueue, PointerButton};
pub use crate::core::input::navigation::{DragQuantization, NavigationSettings};

#[cfg(feature = "gui")]
pub use input::gui::{RunViewerCommand, RunViewerError};
#[cfg(feature = "gui")]
pub use presenters::gpu::{GpuRenderer, GpuRendererError};
