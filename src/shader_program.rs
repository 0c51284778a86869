use crate::gpu::{Gpu, UniformValue};
use crate::utils::CompileError;

/// Pass-through vertex stage paired with every fragment shader
pub const VERTEX_SHADER: &str = r#"#version 330 core
layout (location = 0) in vec3 aPos;

void main() {
    gl_Position = vec4(aPos, 1.0);
}
"#;

/// Fragment shader used when no shader file is present
pub const DEFAULT_FRAGMENT: &str = r#"#version 330

uniform float time;
uniform vec2 resolution;
uniform vec2 mouse;

out vec4 fragColor;

void main() {
    fragColor = vec4(1.0, 1.0, 1.0, 1.0);
}
"#;

/// Uniform names a fragment shader may declare
pub const UNIFORM_TIME: &str = "time";
pub const UNIFORM_MOUSE: &str = "mouse";
pub const UNIFORM_RESOLUTION: &str = "resolution";

/// A linked program. Never mutated after linking: a new source produces a new
/// `ShaderProgram` and the old one is released.
pub struct ShaderProgram<G: Gpu> {
    handle: G::Program,
}

impl<G: Gpu> std::fmt::Debug for ShaderProgram<G> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("ShaderProgram").field(&self.handle).finish()
    }
}

impl<G: Gpu> ShaderProgram<G> {
    pub fn compile(gpu: &G, fragment_src: &str) -> Result<Self, CompileError> {
        log::debug!("Compiling fragment shader ({} bytes)", fragment_src.len());
        let handle = gpu.build_program(VERTEX_SHADER, fragment_src)?;
        Ok(Self { handle })
    }

    pub fn handle(&self) -> G::Program {
        self.handle
    }

    pub fn bind(&self, gpu: &G) {
        gpu.bind_program(self.handle);
    }

    /// Look up `name` and write `value`. The program must be bound.
    /// Uniforms the shader doesn't declare (or the driver optimized out)
    /// are skipped.
    pub fn set_uniform(&self, gpu: &G, name: &str, value: UniformValue) {
        match gpu.locate_uniform(self.handle, name) {
            Some(location) => gpu.write_uniform(&location, value),
            None => log::trace!("Uniform '{}' not active in program {:?}", name, self.handle),
        }
    }

    pub fn release(self, gpu: &G) {
        log::debug!("Releasing program {:?}", self.handle);
        gpu.release_program(self.handle);
    }
}
