use eframe::glow::{self, HasContext};

use super::{Gpu, UniformValue};
use crate::utils::{CompileError, CompileStage};

/// Vertex array plus its vertex and index buffers
#[derive(Debug)]
pub struct GlQuadBuffers {
    vao: glow::VertexArray,
    vbo: glow::Buffer,
    ebo: glow::Buffer,
}

unsafe fn compile_stage(
    gl: &glow::Context,
    kind: u32,
    stage: CompileStage,
    source: &str,
) -> Result<glow::Shader, CompileError> {
    let shader = gl
        .create_shader(kind)
        .map_err(|e| CompileError::new(CompileStage::Allocation, e))?;
    gl.shader_source(shader, source);
    gl.compile_shader(shader);
    if !gl.get_shader_compile_status(shader) {
        let log = gl.get_shader_info_log(shader);
        gl.delete_shader(shader);
        return Err(CompileError::new(stage, log));
    }
    Ok(shader)
}

impl Gpu for glow::Context {
    type Program = glow::Program;
    type UniformLocation = glow::UniformLocation;
    type QuadBuffers = GlQuadBuffers;

    fn build_program(
        &self,
        vertex_src: &str,
        fragment_src: &str,
    ) -> Result<glow::Program, CompileError> {
        unsafe {
            let vs = compile_stage(self, glow::VERTEX_SHADER, CompileStage::Vertex, vertex_src)?;
            let fs = match compile_stage(
                self,
                glow::FRAGMENT_SHADER,
                CompileStage::Fragment,
                fragment_src,
            ) {
                Ok(fs) => fs,
                Err(e) => {
                    self.delete_shader(vs);
                    return Err(e);
                }
            };

            let program = match self.create_program() {
                Ok(program) => program,
                Err(e) => {
                    self.delete_shader(vs);
                    self.delete_shader(fs);
                    return Err(CompileError::new(CompileStage::Allocation, e));
                }
            };

            self.attach_shader(program, vs);
            self.attach_shader(program, fs);
            self.link_program(program);
            let linked = self.get_program_link_status(program);

            self.detach_shader(program, vs);
            self.detach_shader(program, fs);
            self.delete_shader(vs);
            self.delete_shader(fs);

            if !linked {
                let log = self.get_program_info_log(program);
                self.delete_program(program);
                return Err(CompileError::new(CompileStage::Link, log));
            }

            log::debug!("Linked program {:?}", program);
            Ok(program)
        }
    }

    fn release_program(&self, program: glow::Program) {
        unsafe { self.delete_program(program) }
    }

    fn bind_program(&self, program: glow::Program) {
        unsafe { self.use_program(Some(program)) }
    }

    fn locate_uniform(&self, program: glow::Program, name: &str) -> Option<glow::UniformLocation> {
        unsafe { self.get_uniform_location(program, name) }
    }

    fn write_uniform(&self, location: &glow::UniformLocation, value: UniformValue) {
        unsafe {
            match value {
                UniformValue::Float(v) => self.uniform_1_f32(Some(location), v),
                UniformValue::Vec2([x, y]) => self.uniform_2_f32(Some(location), x, y),
            }
        }
    }

    fn create_quad(&self, vertex_floats: usize, indices: &[u32]) -> Result<GlQuadBuffers, String> {
        unsafe {
            let vao = self.create_vertex_array()?;
            let vbo = match self.create_buffer() {
                Ok(vbo) => vbo,
                Err(e) => {
                    self.delete_vertex_array(vao);
                    return Err(e);
                }
            };
            let ebo = match self.create_buffer() {
                Ok(ebo) => ebo,
                Err(e) => {
                    self.delete_buffer(vbo);
                    self.delete_vertex_array(vao);
                    return Err(e);
                }
            };

            self.bind_vertex_array(Some(vao));

            self.bind_buffer(glow::ARRAY_BUFFER, Some(vbo));
            let byte_len = (vertex_floats * std::mem::size_of::<f32>()) as i32;
            self.buffer_data_size(glow::ARRAY_BUFFER, byte_len, glow::DYNAMIC_DRAW);

            self.bind_buffer(glow::ELEMENT_ARRAY_BUFFER, Some(ebo));
            self.buffer_data_u8_slice(
                glow::ELEMENT_ARRAY_BUFFER,
                bytemuck::cast_slice(indices),
                glow::STATIC_DRAW,
            );

            // location 0: vec3 position, tightly packed
            let stride = 3 * std::mem::size_of::<f32>() as i32;
            self.vertex_attrib_pointer_f32(0, 3, glow::FLOAT, false, stride, 0);
            self.enable_vertex_attrib_array(0);

            self.bind_vertex_array(None);
            self.bind_buffer(glow::ARRAY_BUFFER, None);

            Ok(GlQuadBuffers { vao, vbo, ebo })
        }
    }

    fn update_quad(&self, quad: &GlQuadBuffers, vertices: &[f32]) {
        unsafe {
            self.bind_buffer(glow::ARRAY_BUFFER, Some(quad.vbo));
            self.buffer_sub_data_u8_slice(glow::ARRAY_BUFFER, 0, bytemuck::cast_slice(vertices));
            self.bind_buffer(glow::ARRAY_BUFFER, None);
        }
    }

    fn draw_quad(&self, quad: &GlQuadBuffers, index_count: usize) {
        unsafe {
            self.bind_vertex_array(Some(quad.vao));
            self.draw_elements(glow::TRIANGLES, index_count as i32, glow::UNSIGNED_INT, 0);
            self.bind_vertex_array(None);
        }
    }

    fn release_quad(&self, quad: GlQuadBuffers) {
        unsafe {
            self.delete_vertex_array(quad.vao);
            self.delete_buffer(quad.vbo);
            self.delete_buffer(quad.ebo);
        }
    }

    fn set_viewport(&self, width: u32, height: u32) {
        unsafe { self.viewport(0, 0, width as i32, height as i32) }
    }

    fn clear_frame(&self, [r, g, b, a]: [f32; 4]) {
        unsafe {
            self.clear_color(r, g, b, a);
            self.clear(glow::COLOR_BUFFER_BIT);
        }
    }

    fn describe(&self) -> String {
        unsafe { self.get_parameter_string(glow::VERSION) }
    }
}
