use eframe::{egui, NativeOptions};
use std::process::ExitCode;

mod frame_loop;
mod geometry;
mod gpu;
mod overlay;
mod renderer;
mod screens;
mod shader_program;
mod text_buffer;
mod theme;
mod ui_components;
mod utils;

use frame_loop::FrameLoop;
use utils::{EditorConfig, StartupError};

const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() -> ExitCode {
    // RUST_LOG=debug for per-frame detail
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .filter_module("egui_glow", log::LevelFilter::Warn)
        .init();

    log::info!("[Main] Starting glshard_editor v{}", APP_VERSION);
    let config = EditorConfig::load();

    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(config.title.clone())
            .with_inner_size([config.width, config.height]),
        renderer: eframe::Renderer::Glow,
        vsync: config.vsync,
        ..Default::default()
    };

    let title = config.title.clone();
    let result = eframe::run_native(
        &title,
        options,
        Box::new(move |cc| {
            let gl = cc.gl.clone().ok_or(StartupError::NoGlContext)?;
            log::info!("[Main] OpenGL context ready");

            utils::register_ui_font(&cc.egui_ctx, config.ui_font.as_deref());
            let source = utils::load_shader_source(&config.shader_path);
            let frame_loop = FrameLoop::start(gl.as_ref(), source)?;

            Ok(Box::new(screens::editor::EditorApp::new(gl, frame_loop, &config)))
        }),
    );

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("[Main] Application error: {}", e);
            ExitCode::FAILURE
        }
    }
}
