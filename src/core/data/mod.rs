pub mod frame_uniforms;
pub mod pointer_state;
pub mod view_state;
pub mod viewport;
