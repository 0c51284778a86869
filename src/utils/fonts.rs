use eframe::egui;
use std::fs;
use std::path::Path;

/// Put the configured TTF in front of egui's proportional fonts. Returns
/// false (and keeps the defaults) when no font is configured or it can't be read.
pub fn register_ui_font(ctx: &egui::Context, path: Option<&Path>) -> bool {
    let Some(path) = path else {
        return false;
    };
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            log::warn!("UI font {} unavailable, using egui defaults: {}", path.display(), e);
            return false;
        }
    };

    let mut defs = egui::FontDefinitions::default();
    defs.font_data
        .insert("UiFont".to_owned(), egui::FontData::from_owned(bytes).into());
    defs.families
        .entry(egui::FontFamily::Proportional)
        .or_default()
        .insert(0, "UiFont".to_owned());
    ctx.set_fonts(defs);
    log::info!("Registered UI font {}", path.display());
    true
}
