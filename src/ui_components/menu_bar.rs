//! File / Edit / View menus of the text editor window

use eframe::egui;

use crate::overlay::{EditorPalette, MenuCommand};
use crate::text_buffer::TextBuffer;

/// Edit menu entries as (label, shortcut, enabled, command)
fn edit_items(buffer: &TextBuffer, can_paste: bool) -> [(&'static str, &'static str, bool, MenuCommand); 6] {
    let selection = buffer.has_selection();
    [
        ("Undo", "Ctrl+Z", buffer.can_undo(), MenuCommand::Undo),
        ("Redo", "Ctrl+Y", buffer.can_redo(), MenuCommand::Redo),
        ("Copy", "Ctrl+C", selection, MenuCommand::Copy),
        ("Cut", "Ctrl+X", selection, MenuCommand::Cut),
        ("Delete", "Del", selection, MenuCommand::Delete),
        ("Paste", "Ctrl+V", can_paste, MenuCommand::Paste),
    ]
}

/// Draws the menu bar and returns the command picked this frame, if any.
/// Paste is only offered when `can_paste` says the clipboard holds text.
pub fn render_menu_bar(ui: &mut egui::Ui, buffer: &TextBuffer, can_paste: bool) -> Option<MenuCommand> {
    let mut command = None;

    egui::MenuBar::new().ui(ui, |ui| {
        ui.menu_button("File", |ui| {
            if menu_item(ui, "Save", "Ctrl+S", true) {
                command = Some(MenuCommand::Save);
            }
            if menu_item(ui, "Reset to default", "", true) {
                command = Some(MenuCommand::ResetToTemplate);
            }
            ui.separator();
            if menu_item(ui, "Quit", "Alt+F4", true) {
                command = Some(MenuCommand::Quit);
            }
        });

        ui.menu_button("Edit", |ui| {
            for (label, shortcut, enabled, item) in edit_items(buffer, can_paste) {
                if menu_item(ui, label, shortcut, enabled) {
                    command = Some(item);
                }
                if label == "Redo" {
                    ui.separator();
                }
            }
            ui.separator();
            if menu_item(ui, "Select all", "Ctrl+A", !buffer.text().is_empty()) {
                command = Some(MenuCommand::SelectAll);
            }
        });

        ui.menu_button("View", |ui| {
            for palette in EditorPalette::ALL {
                if ui.button(palette.label()).clicked() {
                    command = Some(MenuCommand::SetPalette(palette));
                    ui.close();
                }
            }
        });
    });

    if let Some(cmd) = command {
        log::debug!("Menu command: {:?}", cmd);
    }
    command
}

fn menu_item(ui: &mut egui::Ui, label: &str, shortcut: &str, enabled: bool) -> bool {
    let button = egui::Button::new(label).shortcut_text(shortcut);
    let clicked = ui.add_enabled(enabled, button).clicked();
    if clicked {
        ui.close();
    }
    clicked
}

/// Shortcuts handled before the editor widget gets the key events
pub fn consume_shortcuts(ctx: &egui::Context) -> Option<MenuCommand> {
    use egui::{Key, Modifiers};

    let shift_command = Modifiers::COMMAND | Modifiers::SHIFT;
    ctx.input_mut(|i| {
        if i.consume_key(Modifiers::COMMAND, Key::S) {
            Some(MenuCommand::Save)
        } else if i.consume_key(shift_command, Key::Z) || i.consume_key(Modifiers::COMMAND, Key::Y) {
            Some(MenuCommand::Redo)
        } else if i.consume_key(Modifiers::COMMAND, Key::Z) {
            Some(MenuCommand::Undo)
        } else {
            None
        }
    })
}

/// Ctrl +/-/0 font size steps; `Some(None)` means reset to the default size
pub fn consume_font_shortcuts(ctx: &egui::Context) -> Option<Option<f32>> {
    use egui::{Key, Modifiers};

    ctx.input_mut(|i| {
        if i.consume_key(Modifiers::COMMAND, Key::Plus) || i.consume_key(Modifiers::COMMAND, Key::Equals) {
            Some(Some(2.0))
        } else if i.consume_key(Modifiers::COMMAND, Key::Minus) {
            Some(Some(-2.0))
        } else if i.consume_key(Modifiers::COMMAND, Key::Num0) {
            Some(None)
        } else {
            None
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key_event(key: egui::Key, modifiers: egui::Modifiers) -> egui::Event {
        egui::Event::Key {
            key,
            physical_key: None,
            pressed: true,
            repeat: false,
            modifiers,
        }
    }

    fn run_with_events<R>(events: Vec<egui::Event>, f: impl FnOnce(&egui::Context) -> R) -> R {
        let ctx = egui::Context::default();
        let input = egui::RawInput {
            events,
            ..Default::default()
        };
        let mut out = None;
        let mut f = Some(f);
        let _ = ctx.run(input, |ctx| {
            if let Some(f) = f.take() {
                out = Some(f(ctx));
            }
        });
        out.unwrap()
    }

    #[test]
    fn test_ctrl_s_saves() {
        let cmd = run_with_events(vec![key_event(egui::Key::S, egui::Modifiers::COMMAND)], consume_shortcuts);
        assert_eq!(cmd, Some(MenuCommand::Save));
    }

    #[test]
    fn test_ctrl_shift_z_redoes() {
        let mods = egui::Modifiers::COMMAND | egui::Modifiers::SHIFT;
        let cmd = run_with_events(vec![key_event(egui::Key::Z, mods)], consume_shortcuts);
        assert_eq!(cmd, Some(MenuCommand::Redo));
        let cmd = run_with_events(vec![key_event(egui::Key::Z, egui::Modifiers::COMMAND)], consume_shortcuts);
        assert_eq!(cmd, Some(MenuCommand::Undo));
    }

    #[test]
    fn test_ctrl_y_redoes() {
        let cmd = run_with_events(vec![key_event(egui::Key::Y, egui::Modifiers::COMMAND)], consume_shortcuts);
        assert_eq!(cmd, Some(MenuCommand::Redo));
    }

    #[test]
    fn test_plain_keys_ignored() {
        let cmd = run_with_events(vec![key_event(egui::Key::S, egui::Modifiers::NONE)], consume_shortcuts);
        assert_eq!(cmd, None);
    }

    #[test]
    fn test_font_shortcuts() {
        let step = run_with_events(
            vec![key_event(egui::Key::Minus, egui::Modifiers::COMMAND)],
            consume_font_shortcuts,
        );
        assert_eq!(step, Some(Some(-2.0)));
        let reset = run_with_events(
            vec![key_event(egui::Key::Num0, egui::Modifiers::COMMAND)],
            consume_font_shortcuts,
        );
        assert_eq!(reset, Some(None));
    }

    #[test]
    fn test_ctrl_plus_grows_font() {
        for key in [egui::Key::Plus, egui::Key::Equals] {
            let step = run_with_events(vec![key_event(key, egui::Modifiers::COMMAND)], consume_font_shortcuts);
            assert_eq!(step, Some(Some(2.0)), "{:?}", key);
        }
    }

    fn enabled(items: &[(&str, &str, bool, MenuCommand)], command: MenuCommand) -> bool {
        items
            .iter()
            .find(|(_, _, _, item)| *item == command)
            .map(|(_, _, enabled, _)| *enabled)
            .unwrap()
    }

    #[test]
    fn test_paste_follows_clipboard() {
        let buffer = TextBuffer::new("void main() {}".to_string(), "void main() {}".to_string());
        assert!(!enabled(&edit_items(&buffer, false), MenuCommand::Paste));
        assert!(enabled(&edit_items(&buffer, true), MenuCommand::Paste));
    }

    #[test]
    fn test_selection_items_need_selection() {
        let mut buffer = TextBuffer::new("void main() {}".to_string(), "void main() {}".to_string());
        for command in [MenuCommand::Copy, MenuCommand::Cut, MenuCommand::Delete] {
            assert!(!enabled(&edit_items(&buffer, true), command));
        }
        buffer.select_all();
        for command in [MenuCommand::Copy, MenuCommand::Cut, MenuCommand::Delete] {
            assert!(enabled(&edit_items(&buffer, true), command));
        }
    }
}
