use eframe::egui;

/// Resizable preview window. The shader still renders behind the UI; this
/// window only reserves the requested area.
pub fn preview_window(ctx: &egui::Context, open: &mut bool, size: [u32; 2]) {
    let ppp = ctx.pixels_per_point();
    let points = egui::vec2(size[0] as f32 / ppp, size[1] as f32 / ppp);

    egui::Window::new("Shader Preview")
        .open(open)
        .resizable(false)
        .collapsible(true)
        .show(ctx, |ui| {
            let (rect, _) = ui.allocate_exact_size(points, egui::Sense::hover());
            ui.painter().rect_filled(rect, 4.0, egui::Color32::from_black_alpha(160));
            ui.painter().text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                format!("{} x {}", size[0], size[1]),
                egui::FontId::proportional(16.0),
                egui::Color32::GRAY,
            );
        });
}
