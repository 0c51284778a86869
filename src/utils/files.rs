use std::fs;
use std::path::Path;

use crate::shader_program::DEFAULT_FRAGMENT;

/// Fragment shader loaded at startup when nothing else is configured
pub const DEFAULT_SHADER_PATH: &str = "shaders/default.fsh";

/// Startup fragment source: the file at `path` if it can be read as UTF-8,
/// otherwise the built-in template.
pub fn load_shader_source(path: &Path) -> String {
    match fs::read_to_string(path) {
        Ok(source) => {
            log::info!("Loaded fragment shader from {} ({} bytes)", path.display(), source.len());
            source
        }
        Err(e) => {
            log::info!(
                "Could not read {} ({}), starting from the built-in template",
                path.display(),
                e
            );
            DEFAULT_FRAGMENT.to_string()
        }
    }
}
