use std::sync::Arc;

use eframe::egui::mutex::Mutex;

use crate::geometry::{Corners, GeometryQuad};
use crate::gpu::{Gpu, UniformValue};
use crate::shader_program::{ShaderProgram, UNIFORM_MOUSE, UNIFORM_RESOLUTION, UNIFORM_TIME};
use crate::utils::StartupError;

/// Framebuffer clear colour behind the quad
pub const BACKGROUND: [f32; 4] = [0.12, 0.12, 0.12, 1.0];

/// Everything the GPU half of a frame needs, captured after the UI pass
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FramePlan {
    pub time: f32,
    /// Cursor in framebuffer pixels, origin top-left
    pub mouse: [f32; 2],
    pub framebuffer: [u32; 2],
    pub corners: Corners,
}

impl FramePlan {
    /// Replace the framebuffer size with the one reported at paint time
    pub fn with_framebuffer(mut self, framebuffer: [u32; 2]) -> Self {
        self.framebuffer = framebuffer;
        self
    }
}

/// Owns the quad and the active program. Both are released together,
/// once, by [`Renderer::release`].
pub struct Renderer<G: Gpu> {
    quad: GeometryQuad<G>,
    program: ShaderProgram<G>,
    frames_drawn: u64,
}

/// Renderer shared with the paint callback; `None` once released
pub type SharedRenderer<G> = Arc<Mutex<Option<Renderer<G>>>>;

/// Draw through a shared renderer. Does nothing after release.
pub fn draw_shared<G: Gpu>(renderer: &SharedRenderer<G>, gpu: &G, plan: &FramePlan) {
    match renderer.lock().as_mut() {
        Some(renderer) => renderer.draw(gpu, plan),
        None => log::trace!("Skipping draw, renderer already released"),
    }
}

impl<G: Gpu> Renderer<G> {
    pub fn new(gpu: &G, program: ShaderProgram<G>, corners: &Corners) -> Result<Self, StartupError> {
        let quad = match GeometryQuad::new(gpu, corners) {
            Ok(quad) => quad,
            Err(e) => {
                program.release(gpu);
                return Err(StartupError::Geometry(e));
            }
        };
        Ok(Self {
            quad,
            program,
            frames_drawn: 0,
        })
    }

    pub fn program(&self) -> &ShaderProgram<G> {
        &self.program
    }

    pub fn frames_drawn(&self) -> u64 {
        self.frames_drawn
    }

    /// Make `program` active and release the one it replaces
    pub fn swap_program(&mut self, gpu: &G, program: ShaderProgram<G>) {
        let previous = std::mem::replace(&mut self.program, program);
        previous.release(gpu);
    }

    /// Clear, rebuild the quad, bind the program, set uniforms, draw
    pub fn draw(&mut self, gpu: &G, plan: &FramePlan) {
        let [width, height] = plan.framebuffer;
        gpu.set_viewport(width, height);
        gpu.clear_frame(BACKGROUND);

        self.quad.rebuild(gpu, &plan.corners);

        self.program.bind(gpu);
        self.program.set_uniform(gpu, UNIFORM_TIME, UniformValue::Float(plan.time));
        self.program.set_uniform(gpu, UNIFORM_MOUSE, UniformValue::Vec2(plan.mouse));
        self.program.set_uniform(
            gpu,
            UNIFORM_RESOLUTION,
            UniformValue::Vec2([width as f32, height as f32]),
        );
        self.quad.draw(gpu);

        if self.frames_drawn == 0 {
            log::debug!("First shader frame drawn ({}x{})", width, height);
        }
        self.frames_drawn += 1;
    }

    pub fn release(self, gpu: &G) {
        self.quad.release(gpu);
        self.program.release(gpu);
    }
}
