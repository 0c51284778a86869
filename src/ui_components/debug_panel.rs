//! Semi-transparent debug readout

use eframe::egui;

use crate::overlay::DebugCorner;
use crate::utils::format_compile_error;

/// Values shown in the debug overlay, gathered by the app each frame
pub struct DebugInfo<'a> {
    pub gpu_info: &'a str,
    pub framebuffer: [u32; 2],
    pub time: f32,
    pub fps: f32,
    pub program_status: String,
    pub last_error: Option<&'a crate::utils::CompileError>,
}

const EDGE_OFFSET: f32 = 10.0;

/// Window anchor for a placement; `None` leaves the overlay movable
fn anchor(placement: DebugCorner) -> Option<(egui::Align2, egui::Vec2)> {
    let d = EDGE_OFFSET;
    match placement {
        DebugCorner::Custom => None,
        DebugCorner::Center => Some((egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)),
        DebugCorner::TopLeft => Some((egui::Align2::LEFT_TOP, egui::vec2(d, d))),
        DebugCorner::TopRight => Some((egui::Align2::RIGHT_TOP, egui::vec2(-d, d))),
        DebugCorner::BottomLeft => Some((egui::Align2::LEFT_BOTTOM, egui::vec2(d, -d))),
        DebugCorner::BottomRight => Some((egui::Align2::RIGHT_BOTTOM, egui::vec2(-d, -d))),
    }
}

/// Draws the overlay. Right-clicking it opens the placement menu; `open` is
/// cleared by the Close entry.
pub fn debug_overlay(
    ctx: &egui::Context,
    open: &mut bool,
    placement: &mut DebugCorner,
    info: &DebugInfo<'_>,
) {
    let frame = egui::Frame::window(&ctx.style()).fill(egui::Color32::from_black_alpha(89));
    let mut window = egui::Window::new("Debug Info")
        .frame(frame)
        .title_bar(false)
        .resizable(false)
        .auto_sized();

    window = match anchor(*placement) {
        Some((align, offset)) => window.anchor(align, offset),
        None => window.movable(true),
    };

    window.show(ctx, |ui| {
        let body = ui.scope_builder(egui::UiBuilder::new().sense(egui::Sense::click()), |ui| {
            readout(ui, info);
        });
        body.response.context_menu(|ui| {
            for corner in DebugCorner::ALL {
                if ui.selectable_label(*placement == corner, corner.label()).clicked() {
                    *placement = corner;
                    ui.close();
                }
            }
        });

        ui.separator();
        ui.horizontal(|ui| {
            ui.weak("Right-click to move");
            if ui.button("Close").clicked() {
                *open = false;
            }
        });
    });
}

fn readout(ui: &mut egui::Ui, info: &DebugInfo<'_>) {
    ui.label(format!("glshard_editor {}", env!("CARGO_PKG_VERSION")));
    ui.label(format!("GL: {}", info.gpu_info));
    ui.separator();
    ui.label(format!("Framebuffer: {} x {}", info.framebuffer[0], info.framebuffer[1]));
    ui.label(format!("Time: {:.2}s", info.time));
    ui.label(format!("FPS: {:.1}", info.fps));
    ui.label(format!("Program: {}", info.program_status));
    match info.last_error {
        Some(err) => {
            ui.colored_label(egui::Color32::from_rgb(255, 140, 140), "Last save failed:");
            ui.label(
                egui::RichText::new(format_compile_error(err))
                    .family(egui::FontFamily::Monospace)
                    .size(12.0),
            );
        }
        None => {
            ui.label("Shader OK");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_custom_is_movable() {
        for corner in DebugCorner::ALL {
            assert_eq!(anchor(corner).is_none(), corner == DebugCorner::Custom, "{:?}", corner);
        }
    }

    #[test]
    fn test_anchor_offsets_point_inward() {
        for corner in DebugCorner::ALL {
            let Some((align, offset)) = anchor(corner) else { continue };
            match align.x() {
                egui::Align::Min => assert!(offset.x > 0.0, "{:?}", corner),
                egui::Align::Max => assert!(offset.x < 0.0, "{:?}", corner),
                egui::Align::Center => assert_eq!(offset.x, 0.0),
            }
            match align.y() {
                egui::Align::Min => assert!(offset.y > 0.0, "{:?}", corner),
                egui::Align::Max => assert!(offset.y < 0.0, "{:?}", corner),
                egui::Align::Center => assert_eq!(offset.y, 0.0),
            }
        }
    }

    #[test]
    fn test_overlay_keeps_state_without_input() {
        let ctx = egui::Context::default();
        let info = DebugInfo {
            gpu_info: "test renderer",
            framebuffer: [640, 480],
            time: 1.5,
            fps: 60.0,
            program_status: "active".to_string(),
            last_error: None,
        };
        let mut open = true;
        let mut placement = DebugCorner::BottomRight;
        for _ in 0..2 {
            let _ = ctx.run(egui::RawInput::default(), |ctx| {
                debug_overlay(ctx, &mut open, &mut placement, &info);
            });
        }
        assert!(open);
        assert_eq!(placement, DebugCorner::BottomRight);
    }
}
