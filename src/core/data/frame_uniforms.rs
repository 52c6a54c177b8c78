/// Per-frame shader parameters handed to a [`Renderer`](crate::Renderer).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FrameUniforms {
    pub zoom: f64,
    pub offset_x: f64,
    pub offset_y: f64,
    pub max_iterations: u32,
}
