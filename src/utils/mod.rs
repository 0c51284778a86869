pub mod clipboard;
pub mod config;
pub mod errors;
pub mod files;
pub mod fonts;
#[cfg(feature = "code_editor")]
pub mod glsl_syntax;
pub mod notification;
pub mod text;

pub use clipboard::{Clipboard, SystemClipboard};
pub use config::EditorConfig;
pub use errors::{format_compile_error, CompileError, CompileStage, StartupError};
pub use files::load_shader_source;
pub use fonts::register_ui_font;
pub use notification::NotificationManager;
