//! Fragment shader editor widget
//!
//! Keystrokes are handled by the widget itself; afterwards the new text and
//! cursor are written back into the [`TextBuffer`], and any selection set by a
//! menu command is pushed into the widget state.

use eframe::egui;
use eframe::egui::text::{CCursor, CCursorRange};

use crate::overlay::EditorPalette;
use crate::text_buffer::TextBuffer;

#[cfg(feature = "code_editor")]
use crate::utils::glsl_syntax;

const EDITOR_ID: &str = "fragment_editor";

pub fn render_shader_editor(
    ui: &mut egui::Ui,
    buffer: &mut TextBuffer,
    palette: EditorPalette,
    font_size: f32,
) {
    let mut text = buffer.text().to_owned();
    let output = show_widget(ui, &mut text, palette, font_size);

    if text != buffer.text() {
        buffer.record_edit(text);
    }

    match buffer.take_pending_selection() {
        Some(selection) => {
            let mut state = output.state;
            state.cursor.set_char_range(Some(CCursorRange::two(
                CCursor::new(selection.start),
                CCursor::new(selection.end),
            )));
            state.store(ui.ctx(), output.response.id);
            output.response.request_focus();
        }
        None => {
            if let Some(range) = output.cursor_range {
                buffer.sync_selection(range.as_sorted_char_range());
            }
        }
    }
}

#[cfg(feature = "code_editor")]
fn show_widget(
    ui: &mut egui::Ui,
    text: &mut String,
    palette: EditorPalette,
    font_size: f32,
) -> egui::text_edit::TextEditOutput {
    let theme = match palette {
        EditorPalette::Dark => egui_code_editor::ColorTheme::GITHUB_DARK,
        EditorPalette::Light => egui_code_editor::ColorTheme::GITHUB_LIGHT,
        EditorPalette::RetroBlue => egui_code_editor::ColorTheme::AYU_MIRAGE,
    };
    egui_code_editor::CodeEditor::default()
        .id_source(EDITOR_ID)
        .with_fontsize(font_size)
        .with_theme(theme)
        .with_syntax(glsl_syntax::glsl())
        .with_numlines(true)
        .vscroll(true)
        .auto_shrink(false)
        .show(ui, text)
}

#[cfg(not(feature = "code_editor"))]
fn show_widget(
    ui: &mut egui::Ui,
    text: &mut String,
    palette: EditorPalette,
    font_size: f32,
) -> egui::text_edit::TextEditOutput {
    use egui::Color32;

    ui.style_mut().text_styles.insert(
        egui::TextStyle::Monospace,
        egui::FontId::monospace(font_size),
    );
    let (background, foreground) = match palette {
        EditorPalette::Dark => (Color32::from_rgb(13, 17, 23), Color32::from_rgb(201, 209, 217)),
        EditorPalette::Light => (Color32::from_rgb(255, 255, 255), Color32::from_rgb(36, 41, 47)),
        EditorPalette::RetroBlue => (Color32::from_rgb(0, 0, 168), Color32::from_rgb(255, 255, 85)),
    };
    ui.visuals_mut().extreme_bg_color = background;

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            egui::TextEdit::multiline(text)
                .id(egui::Id::new(EDITOR_ID))
                .font(egui::TextStyle::Monospace)
                .text_color(foreground)
                .code_editor()
                .desired_width(f32::INFINITY)
                .desired_rows(30)
                .show(ui)
        })
        .inner
}
