use bytemuck::{Pod, Zeroable};

use crate::core::colour_map::ColourMapKind;
use crate::core::data::frame_uniforms::FrameUniforms;
use crate::core::data::viewport::Viewport;

/// Uniform block of `mandelbrot.wgsl`, field for field.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct ShaderUniforms {
    pub resolution: [f32; 2],
    pub offset: [f32; 2],
    pub zoom: f32,
    pub max_iterations: u32,
    pub colour_map: u32,
    pub _padding: u32,
}

impl ShaderUniforms {
    #[must_use]
    pub fn new(initial: &FrameUniforms, colour_map: ColourMapKind) -> Self {
        let mut uniforms = Self {
            colour_map: colour_map.shader_index(),
            ..Self::zeroed()
        };
        uniforms.set_frame(initial);
        uniforms
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.resolution = [viewport.width() as f32, viewport.height() as f32];
    }

    /// The shader works in f32, so very deep zooms lose detail here.
    pub fn set_frame(&mut self, frame: &FrameUniforms) {
        self.offset = [frame.offset_x as f32, frame.offset_y as f32];
        self.zoom = frame.zoom as f32;
        self.max_iterations = frame.max_iterations;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::view_state::ViewState;

    #[test]
    fn layout_matches_shader_block() {
        assert_eq!(std::mem::size_of::<ShaderUniforms>(), 32);
    }

    #[test]
    fn new_copies_frame_and_colour_map() {
        let frame = ViewState::new(2.0, 0.5, -0.25).unwrap().uniforms();
        let uniforms = ShaderUniforms::new(&frame, ColourMapKind::BlueWhiteGradient);

        assert_eq!(uniforms.zoom, 2.0);
        assert_eq!(uniforms.offset, [0.5, -0.25]);
        assert_eq!(uniforms.max_iterations, 1008);
        assert_eq!(uniforms.colour_map, 1);
        assert_eq!(uniforms.resolution, [0.0, 0.0]);
    }

    #[test]
    fn set_viewport_updates_resolution_only() {
        let frame = ViewState::default().uniforms();
        let mut uniforms = ShaderUniforms::new(&frame, ColourMapKind::FireGradient);

        uniforms.set_viewport(Viewport::new(1920, 1080).unwrap());

        assert_eq!(uniforms.resolution, [1920.0, 1080.0]);
        assert_eq!(uniforms.zoom, 2.5);
    }
}
