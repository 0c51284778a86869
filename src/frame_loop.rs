//! Per-frame orchestration: sampling, UI-driven state, save/quit commands and
//! the hand-off to the GPU pass.
//!
//! One iteration is
//! `begin_frame` → UI pass (mutates corners/overlay/buffer, `dispatch`es
//! commands) → `end_ui` → GPU pass with the returned [`FramePlan`].
//! Once an exit is requested, `end_ui` yields no plan and `begin_frame`
//! refuses to start another iteration.

use std::sync::Arc;

use eframe::egui::mutex::Mutex;

use crate::geometry::Corners;
use crate::gpu::Gpu;
use crate::overlay::{MenuCommand, UiOverlayState};
use crate::renderer::{FramePlan, Renderer, SharedRenderer};
use crate::shader_program::{ShaderProgram, DEFAULT_FRAGMENT};
use crate::text_buffer::TextBuffer;
use crate::utils::{Clipboard, CompileError, StartupError};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopState {
    Running,
    ExitRequested,
    Terminated,
}

/// Inputs sampled from the window at the top of an iteration
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct FrameSample {
    /// Seconds since startup
    pub time: f32,
    /// Cursor in framebuffer pixels; `None` when the pointer is outside the window
    pub cursor: Option<[f32; 2]>,
    pub framebuffer: [u32; 2],
    /// Smoothed frame time, for the FPS readout
    pub frame_dt: f32,
}

/// What a dispatched command did
#[derive(Debug, PartialEq)]
pub enum CommandOutcome {
    Done,
    Ignored,
    Compiled,
    CompileFailed(CompileError),
}

pub struct FrameLoop<G: Gpu> {
    state: LoopState,
    renderer: SharedRenderer<G>,
    pub corners: Corners,
    pub overlay: UiOverlayState,
    pub buffer: TextBuffer,
    last_error: Option<CompileError>,
    mouse: [f32; 2],
    sample: FrameSample,
    frame_index: u64,
    gpu_info: String,
}

impl<G: Gpu> FrameLoop<G> {
    /// Compile `source` and allocate the quad. A source that fails to compile
    /// is kept in the editor while the built-in template renders; failure of
    /// the template itself is fatal.
    pub fn start(gpu: &G, source: String) -> Result<Self, StartupError> {
        let gpu_info = gpu.describe();
        log::info!("GPU: {}", gpu_info);

        let (program, active, last_error) = match ShaderProgram::compile(gpu, &source) {
            Ok(program) => (program, source.clone(), None),
            Err(err) if source != DEFAULT_FRAGMENT => {
                log::warn!("Startup shader failed, rendering the built-in template instead: {}", err);
                let program = ShaderProgram::compile(gpu, DEFAULT_FRAGMENT)
                    .map_err(StartupError::DefaultShader)?;
                (program, DEFAULT_FRAGMENT.to_string(), Some(err))
            }
            Err(err) => return Err(StartupError::DefaultShader(err)),
        };

        let corners = Corners::default();
        let renderer = Renderer::new(gpu, program, &corners)?;
        log::info!("Frame loop ready");

        Ok(Self {
            state: LoopState::Running,
            renderer: Arc::new(Mutex::new(Some(renderer))),
            corners,
            overlay: UiOverlayState::default(),
            buffer: TextBuffer::new(source, active),
            last_error,
            mouse: [0.0, 0.0],
            sample: FrameSample::default(),
            frame_index: 0,
            gpu_info,
        })
    }

    #[cfg(test)]
    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }

    /// Top of an iteration. Returns false when the loop should not run
    /// another frame.
    pub fn begin_frame(&mut self, sample: FrameSample) -> bool {
        if !self.is_running() {
            return false;
        }
        if let Some(cursor) = sample.cursor {
            self.mouse = cursor;
        }
        self.sample = sample;
        self.frame_index += 1;
        true
    }

    /// Quit command or the window's close signal. Takes effect at the next
    /// iteration boundary.
    pub fn request_exit(&mut self) {
        if self.state == LoopState::Running {
            log::info!("Exit requested (frame {})", self.frame_index);
            self.state = LoopState::ExitRequested;
        }
    }

    pub fn dispatch(
        &mut self,
        gpu: &G,
        command: MenuCommand,
        clipboard: &mut dyn Clipboard,
    ) -> CommandOutcome {
        if !self.is_running() {
            log::debug!("Ignoring {:?}, loop is {:?}", command, self.state);
            return CommandOutcome::Ignored;
        }
        match command {
            MenuCommand::Save => {
                return match self.save(gpu) {
                    Ok(()) => CommandOutcome::Compiled,
                    Err(err) => CommandOutcome::CompileFailed(err),
                };
            }
            MenuCommand::ResetToTemplate => self.buffer.set_text(DEFAULT_FRAGMENT),
            MenuCommand::Quit => self.request_exit(),
            MenuCommand::Undo => self.buffer.undo(),
            MenuCommand::Redo => self.buffer.redo(),
            MenuCommand::Copy => self.buffer.copy(clipboard),
            MenuCommand::Cut => self.buffer.cut(clipboard),
            MenuCommand::Delete => self.buffer.delete(),
            MenuCommand::Paste => self.buffer.paste(clipboard),
            MenuCommand::SelectAll => self.buffer.select_all(),
            MenuCommand::SetPalette(palette) => self.overlay.palette = palette,
        }
        CommandOutcome::Done
    }

    /// Compile the editor text and, only on success, make it the active
    /// program. On failure the previous program keeps rendering.
    pub fn save(&mut self, gpu: &G) -> Result<(), CompileError> {
        let source = self.buffer.text().to_owned();
        log::info!("Save requested ({} bytes)", source.len());

        match ShaderProgram::compile(gpu, &source) {
            Ok(program) => {
                match self.renderer.lock().as_mut() {
                    Some(renderer) => renderer.swap_program(gpu, program),
                    None => {
                        program.release(gpu);
                        return Ok(());
                    }
                }
                self.buffer.mark_active(&source);
                self.last_error = None;
                log::info!("Shader compiled successfully");
                Ok(())
            }
            Err(err) => {
                log::error!("Shader compilation failed: {}", err);
                self.last_error = Some(err.clone());
                Err(err)
            }
        }
    }

    /// After the UI pass: the GPU work for this iteration, or `None` if an
    /// exit was requested during it.
    pub fn end_ui(&mut self) -> Option<FramePlan> {
        if !self.is_running() {
            return None;
        }
        Some(FramePlan {
            time: self.sample.time,
            mouse: self.mouse,
            framebuffer: self.sample.framebuffer,
            corners: self.corners,
        })
    }

    /// Release the quad and program. Safe to call more than once; only the
    /// first call frees anything.
    pub fn terminate(&mut self, gpu: &G) {
        if let Some(renderer) = self.renderer.lock().take() {
            renderer.release(gpu);
            log::info!("GPU resources released after {} frames", self.frame_index);
        }
        self.state = LoopState::Terminated;
    }

    /// Handle for the paint callback
    pub fn renderer(&self) -> SharedRenderer<G> {
        self.renderer.clone()
    }

    pub fn last_error(&self) -> Option<&CompileError> {
        self.last_error.as_ref()
    }

    pub fn sample(&self) -> &FrameSample {
        &self.sample
    }

    pub fn gpu_info(&self) -> &str {
        &self.gpu_info
    }

    /// Debug readout of the active program and frames drawn
    pub fn program_status(&self) -> String {
        match self.renderer.lock().as_ref() {
            Some(r) => format!("{:?}, {} frames drawn", r.program().handle(), r.frames_drawn()),
            None => "released".to_string(),
        }
    }
}

impl<G: Gpu> Drop for FrameLoop<G> {
    fn drop(&mut self) {
        if self.state != LoopState::Terminated {
            log::warn!("Frame loop dropped without terminate(); GPU objects were not released");
        }
    }
}
