mod renderer;
mod uniforms;

pub use renderer::{GpuRenderer, GpuRendererError};
