//! The editor window: egui overlay on top of the live fragment shader.

use eframe::egui;
use eframe::egui_glow;
use eframe::glow;
use std::sync::Arc;
use std::time::Instant;

use crate::frame_loop::{CommandOutcome, FrameLoop, FrameSample};
use crate::overlay::MenuCommand;
use crate::renderer::{draw_shared, FramePlan, BACKGROUND};
use crate::theme::Theme;
use crate::ui_components::debug_panel::{self, DebugInfo};
use crate::ui_components::{menu_bar, options_panel, preview_window, shader_editor};
use crate::utils::{format_compile_error, Clipboard, EditorConfig, NotificationManager, SystemClipboard};

pub struct EditorApp {
    gl: Arc<glow::Context>,
    frame_loop: FrameLoop<glow::Context>,
    started: Instant,
    clipboard: SystemClipboard,
    notifications: NotificationManager,
    applied_theme: Option<Theme>,
    default_font_size: f32,
}

impl EditorApp {
    pub fn new(gl: Arc<glow::Context>, frame_loop: FrameLoop<glow::Context>, config: &EditorConfig) -> Self {
        log::info!("Initializing editor...");
        let mut app = Self {
            gl,
            frame_loop,
            started: Instant::now(),
            clipboard: SystemClipboard::new(),
            notifications: NotificationManager::new(),
            applied_theme: None,
            default_font_size: config.editor_font_size,
        };
        app.frame_loop.overlay.editor_font_size = config.editor_font_size;

        if let Some(err) = app.frame_loop.last_error() {
            let message = format!(
                "{} could not be compiled, showing the built-in template.\n\n{}",
                config.shader_path.display(),
                format_compile_error(err)
            );
            app.notifications.error(message);
        }
        log::info!("Editor initialization complete");
        app
    }

    fn sample(&self, ctx: &egui::Context) -> FrameSample {
        let ppp = ctx.pixels_per_point();
        let size = ctx.viewport_rect().size() * ppp;
        let (cursor, frame_dt) = ctx.input(|i| {
            let cursor = i.pointer.latest_pos().map(|p| [p.x * ppp, p.y * ppp]);
            (cursor, i.stable_dt)
        });
        FrameSample {
            time: self.started.elapsed().as_secs_f32(),
            cursor,
            framebuffer: [size.x.round() as u32, size.y.round() as u32],
            frame_dt,
        }
    }

    fn handle_shortcuts(&mut self, ctx: &egui::Context, commands: &mut Vec<MenuCommand>) {
        commands.extend(menu_bar::consume_shortcuts(ctx));
        match menu_bar::consume_font_shortcuts(ctx) {
            Some(Some(step)) => self.frame_loop.overlay.adjust_font_size(step),
            Some(None) => self.frame_loop.overlay.editor_font_size = self.default_font_size,
            None => {}
        }
    }

    fn draw_ui(&mut self, ctx: &egui::Context, commands: &mut Vec<MenuCommand>) {
        let framebuffer = self.frame_loop.sample().framebuffer;
        let can_paste = self.frame_loop.overlay.show_editor && self.clipboard.has_text();
        let fl = &mut self.frame_loop;

        options_panel::options_window(ctx, &mut fl.corners, &mut fl.overlay, framebuffer);

        if fl.overlay.show_editor {
            let title = if fl.buffer.is_dirty() { "Text Editor *" } else { "Text Editor" };
            let mut open = true;
            egui::Window::new(title)
                .id(egui::Id::new("text_editor_window"))
                .open(&mut open)
                .default_size([640.0, 520.0])
                .default_pos([320.0, 40.0])
                .show(ctx, |ui| {
                    commands.extend(menu_bar::render_menu_bar(ui, &fl.buffer, can_paste));
                    ui.separator();
                    shader_editor::render_shader_editor(
                        ui,
                        &mut fl.buffer,
                        fl.overlay.palette,
                        fl.overlay.editor_font_size,
                    );
                });
            fl.overlay.show_editor = open;
        }

        if fl.overlay.show_debug {
            let sample = *fl.sample();
            let info = DebugInfo {
                gpu_info: fl.gpu_info(),
                framebuffer: sample.framebuffer,
                time: sample.time,
                fps: if sample.frame_dt > 0.0 { 1.0 / sample.frame_dt } else { 0.0 },
                program_status: fl.program_status(),
                last_error: fl.last_error(),
            };
            let mut open = true;
            let mut placement = fl.overlay.debug_corner;
            debug_panel::debug_overlay(ctx, &mut open, &mut placement, &info);
            fl.overlay.show_debug = open;
            fl.overlay.debug_corner = placement;
        }

        if fl.overlay.show_preview {
            let size = [fl.overlay.preview_width, fl.overlay.preview_height];
            preview_window::preview_window(ctx, &mut fl.overlay.show_preview, size);
        }
    }

    fn run_command(&mut self, command: MenuCommand) {
        match self.frame_loop.dispatch(&self.gl, command, &mut self.clipboard) {
            CommandOutcome::Compiled => {
                self.notifications.dismiss_errors();
                self.notifications.success("Shader compiled");
            }
            CommandOutcome::CompileFailed(err) => self.notifications.compile_error(&err),
            CommandOutcome::Done if command == MenuCommand::ResetToTemplate => {
                self.notifications.info("Template restored, save to apply");
            }
            CommandOutcome::Done | CommandOutcome::Ignored => {}
        }
    }

    fn apply_theme(&mut self, ctx: &egui::Context) {
        let theme = self.frame_loop.overlay.theme;
        if self.applied_theme != Some(theme) {
            theme.apply(ctx);
            self.applied_theme = Some(theme);
        }
    }

    fn paint_shader(&self, ctx: &egui::Context, plan: FramePlan) {
        let renderer = self.frame_loop.renderer();
        let callback = egui::PaintCallback {
            rect: ctx.viewport_rect(),
            callback: Arc::new(egui_glow::CallbackFn::new(move |info, painter| {
                let plan = plan.with_framebuffer(info.screen_size_px);
                draw_shared(&renderer, painter.gl().as_ref(), &plan);
            })),
        };
        ctx.layer_painter(egui::LayerId::background()).add(callback);
    }
}

impl eframe::App for EditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // The shader animates every frame
        ctx.request_repaint();
        self.apply_theme(ctx);

        let sample = self.sample(ctx);
        if !self.frame_loop.begin_frame(sample) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }
        if ctx.input(|i| i.viewport().close_requested()) {
            self.frame_loop.request_exit();
        }

        let mut commands = Vec::new();
        self.handle_shortcuts(ctx, &mut commands);
        self.draw_ui(ctx, &mut commands);
        for command in commands {
            self.run_command(command);
        }
        self.notifications.render(ctx);

        match self.frame_loop.end_ui() {
            Some(plan) => self.paint_shader(ctx, plan),
            None => ctx.send_viewport_cmd(egui::ViewportCommand::Close),
        }
    }

    fn clear_color(&self, _visuals: &egui::Visuals) -> [f32; 4] {
        BACKGROUND
    }

    fn on_exit(&mut self, gl: Option<&glow::Context>) {
        let gl = gl.unwrap_or(self.gl.as_ref());
        self.frame_loop.terminate(gl);
        log::info!("Editor closed");
    }
}
