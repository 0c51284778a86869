use eframe::egui;

use crate::geometry::{Axis, Corner, Corners};
use crate::overlay::UiOverlayState;
use crate::theme::Theme;

/// Options window: quad corners, preview size, UI style and panel toggles
pub fn options_window(
    ctx: &egui::Context,
    corners: &mut Corners,
    overlay: &mut UiOverlayState,
    framebuffer: [u32; 2],
) {
    egui::Window::new("Options")
        .default_pos(egui::pos2(10.0, 10.0))
        .default_width(280.0)
        .resizable(false)
        .show(ctx, |ui| {
            egui::CollapsingHeader::new("Position")
                .default_open(true)
                .show(ui, |ui| {
                    for corner in Corner::ALL {
                        ui.label(corner.label());
                        corner_slider(ui, corners, corner, Axis::X, "X");
                        corner_slider(ui, corners, corner, Axis::Y, "Y");
                    }
                    if ui.button("Reset quad").clicked() {
                        *corners = Corners::default();
                    }
                });

            if overlay.show_preview {
                overlay.clamp_preview(framebuffer);
                egui::CollapsingHeader::new("Shader Window Scale")
                    .default_open(true)
                    .show(ui, |ui| {
                        ui.add(
                            egui::Slider::new(&mut overlay.preview_width, 1..=framebuffer[0].max(1))
                                .text("Width"),
                        );
                        ui.add(
                            egui::Slider::new(&mut overlay.preview_height, 1..=framebuffer[1].max(1))
                                .text("Height"),
                        );
                    });
            }

            ui.separator();
            egui::ComboBox::from_label("Style")
                .selected_text(overlay.theme.label())
                .show_ui(ui, |ui| {
                    for theme in Theme::ALL {
                        ui.selectable_value(&mut overlay.theme, theme, theme.label());
                    }
                });

            ui.separator();
            ui.checkbox(&mut overlay.show_debug, "Debug Info");
            ui.checkbox(&mut overlay.show_editor, "Text Editor");
            ui.checkbox(&mut overlay.show_preview, "Shader preview window");
        });
}

fn corner_slider(ui: &mut egui::Ui, corners: &mut Corners, corner: Corner, axis: Axis, label: &str) {
    let [x, y] = corners.get(corner);
    let mut value = match axis {
        Axis::X => x,
        Axis::Y => y,
    };
    let slider = egui::Slider::new(&mut value, -1.0..=1.0).text(label);
    if ui.add(slider).changed() {
        corners.set(corner, axis, value);
    }
}
