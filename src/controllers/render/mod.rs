//! Change-driven frame production.
//!
//! The scheduler remembers the view it last rendered and only asks the
//! [`Renderer`] port for a new frame when the view has moved.

pub mod ports;
mod scheduler;

pub use ports::Renderer;
pub use scheduler::{DEFAULT_SLOW_FRAME_THRESHOLD, RenderScheduler, SchedulerState, TickOutcome};
