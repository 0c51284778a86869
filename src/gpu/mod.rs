//! The slice of OpenGL the editor core talks to.
//!
//! `glow::Context` implements [`Gpu`] for the real window; tests drive the
//! same code through the recording fake in [`fake`].

mod glow_backend;

#[cfg(test)]
pub mod fake;

use crate::utils::CompileError;

/// Value written to a named uniform
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum UniformValue {
    Float(f32),
    Vec2([f32; 2]),
}

pub trait Gpu {
    type Program: Copy + std::fmt::Debug + PartialEq;
    type UniformLocation;
    type QuadBuffers: std::fmt::Debug;

    /// Compile both stages and link them. Intermediate shader objects are
    /// always deleted; on error no program object is left behind.
    fn build_program(
        &self,
        vertex_src: &str,
        fragment_src: &str,
    ) -> Result<Self::Program, CompileError>;
    fn release_program(&self, program: Self::Program);
    fn bind_program(&self, program: Self::Program);
    fn locate_uniform(&self, program: Self::Program, name: &str) -> Option<Self::UniformLocation>;
    fn write_uniform(&self, location: &Self::UniformLocation, value: UniformValue);

    /// Allocate vertex storage for `vertex_floats` floats and upload the
    /// fixed index list.
    fn create_quad(&self, vertex_floats: usize, indices: &[u32]) -> Result<Self::QuadBuffers, String>;
    /// Overwrite the vertex storage in place.
    fn update_quad(&self, quad: &Self::QuadBuffers, vertices: &[f32]);
    fn draw_quad(&self, quad: &Self::QuadBuffers, index_count: usize);
    fn release_quad(&self, quad: Self::QuadBuffers);

    fn set_viewport(&self, width: u32, height: u32);
    fn clear_frame(&self, color: [f32; 4]);
    /// Driver version string for the debug overlay
    fn describe(&self) -> String;
}
