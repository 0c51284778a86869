//! Recording stand-in for the GL context used by unit tests.

use std::cell::RefCell;
use std::collections::BTreeSet;

use super::{Gpu, UniformValue};
use crate::utils::{CompileError, CompileStage};

#[derive(Clone, Debug, PartialEq)]
pub struct DrawCall {
    pub program: Option<u32>,
    pub index_count: usize,
    pub vertices: Vec<f32>,
}

#[derive(Default, Debug)]
pub struct FakeState {
    next_id: u32,
    /// Live programs with the uniform names their fragment stage declares
    programs: Vec<(u32, BTreeSet<String>)>,
    pub programs_built: usize,
    pub programs_released: Vec<u32>,
    pub bound_program: Option<u32>,
    pub uniform_writes: Vec<(u32, String, UniformValue)>,
    pub quads_created: usize,
    pub quads_released: usize,
    pub quad_uploads: usize,
    quad_vertices: Vec<f32>,
    pub draws: Vec<DrawCall>,
    pub clears: usize,
    pub viewport: Option<(u32, u32)>,
}

impl FakeState {
    pub fn live_programs(&self) -> Vec<u32> {
        self.programs.iter().map(|(id, _)| *id).collect()
    }
}

/// Compiles anything that has a `main` and no `INVALID` token
#[derive(Default)]
pub struct FakeGpu {
    pub state: RefCell<FakeState>,
}

#[derive(Debug)]
pub struct FakeQuad {
    id: u32,
}

fn declared_uniforms(src: &str) -> BTreeSet<String> {
    src.lines()
        .filter_map(|l| l.trim().strip_prefix("uniform "))
        .filter_map(|decl| decl.split_whitespace().nth(1))
        .map(|name| name.trim_end_matches(';').to_string())
        .collect()
}

impl FakeGpu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn writes_for(&self, name: &str) -> Vec<UniformValue> {
        self.state
            .borrow()
            .uniform_writes
            .iter()
            .filter(|(_, n, _)| n == name)
            .map(|(_, _, v)| *v)
            .collect()
    }
}

impl Gpu for FakeGpu {
    type Program = u32;
    type UniformLocation = (u32, String);
    type QuadBuffers = FakeQuad;

    fn build_program(&self, vertex_src: &str, fragment_src: &str) -> Result<u32, CompileError> {
        if !vertex_src.contains("void main") {
            return Err(CompileError::new(CompileStage::Vertex, "0:1(1): error: no main"));
        }
        if fragment_src.contains("INVALID") {
            return Err(CompileError::new(
                CompileStage::Fragment,
                "0:1(14): error: syntax error, unexpected NEW_IDENTIFIER",
            ));
        }
        if !fragment_src.contains("void main") {
            return Err(CompileError::new(CompileStage::Link, "error: main not defined"));
        }
        let mut state = self.state.borrow_mut();
        state.next_id += 1;
        let id = state.next_id;
        state.programs.push((id, declared_uniforms(fragment_src)));
        state.programs_built += 1;
        Ok(id)
    }

    fn release_program(&self, program: u32) {
        let mut state = self.state.borrow_mut();
        let before = state.programs.len();
        state.programs.retain(|(id, _)| *id != program);
        assert_eq!(before, state.programs.len() + 1, "program {program} released twice");
        state.programs_released.push(program);
        if state.bound_program == Some(program) {
            state.bound_program = None;
        }
    }

    fn bind_program(&self, program: u32) {
        let mut state = self.state.borrow_mut();
        assert!(
            state.programs.iter().any(|(id, _)| *id == program),
            "bound a released program"
        );
        state.bound_program = Some(program);
    }

    fn locate_uniform(&self, program: u32, name: &str) -> Option<(u32, String)> {
        let state = self.state.borrow();
        let (_, uniforms) = state.programs.iter().find(|(id, _)| *id == program)?;
        uniforms.contains(name).then(|| (program, name.to_string()))
    }

    fn write_uniform(&self, location: &(u32, String), value: UniformValue) {
        let mut state = self.state.borrow_mut();
        assert_eq!(state.bound_program, Some(location.0), "uniform written to unbound program");
        state
            .uniform_writes
            .push((location.0, location.1.clone(), value));
    }

    fn create_quad(&self, vertex_floats: usize, _indices: &[u32]) -> Result<FakeQuad, String> {
        let mut state = self.state.borrow_mut();
        state.next_id += 1;
        state.quads_created += 1;
        state.quad_vertices = vec![0.0; vertex_floats];
        Ok(FakeQuad { id: state.next_id })
    }

    fn update_quad(&self, _quad: &FakeQuad, vertices: &[f32]) {
        let mut state = self.state.borrow_mut();
        assert_eq!(state.quad_vertices.len(), vertices.len(), "quad storage resized");
        state.quad_vertices.copy_from_slice(vertices);
        state.quad_uploads += 1;
    }

    fn draw_quad(&self, _quad: &FakeQuad, index_count: usize) {
        let mut state = self.state.borrow_mut();
        let call = DrawCall {
            program: state.bound_program,
            index_count,
            vertices: state.quad_vertices.clone(),
        };
        state.draws.push(call);
    }

    fn release_quad(&self, quad: FakeQuad) {
        log::trace!("fake quad {} released", quad.id);
        self.state.borrow_mut().quads_released += 1;
    }

    fn set_viewport(&self, width: u32, height: u32) {
        self.state.borrow_mut().viewport = Some((width, height));
    }

    fn clear_frame(&self, _color: [f32; 4]) {
        self.state.borrow_mut().clears += 1;
    }

    fn describe(&self) -> String {
        "fake 3.3".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declared_uniforms() {
        let names = declared_uniforms("uniform float time;\n  uniform vec2 mouse;\nvoid main(){}");
        assert!(names.contains("time"));
        assert!(names.contains("mouse"));
        assert_eq!(names.len(), 2);
    }
}
