//! Compile result notifications, stacked in the bottom-right corner
//!
//! Success and info messages fade out on their own; errors stay until the
//! user closes them or the next successful save replaces them.

use eframe::egui::{self, Color32, Rect, Vec2};
use std::time::{Duration, Instant};

use crate::utils::errors::{format_compile_error, CompileError};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    Info,
}

#[derive(Clone, Debug)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    created_at: Instant,
    duration: Duration,
    pub sticky: bool,
    pub dismissed: bool,
}

impl Notification {
    pub fn new(message: impl Into<String>, kind: NotificationKind) -> Self {
        Self {
            message: message.into(),
            kind,
            created_at: Instant::now(),
            duration: Duration::from_secs(4),
            // Errors stay until dismissed
            sticky: kind == NotificationKind::Error,
            dismissed: false,
        }
    }

    pub fn is_expired(&self) -> bool {
        !self.sticky && self.created_at.elapsed() > self.duration
    }

    fn is_visible(&self) -> bool {
        !self.dismissed && !self.is_expired()
    }

    /// Fade in over 0.15s, out over the last 0.4s
    fn opacity(&self) -> f32 {
        if self.sticky {
            return 1.0;
        }
        let elapsed = self.created_at.elapsed().as_secs_f32();
        let total = self.duration.as_secs_f32();
        if elapsed < 0.15 {
            elapsed / 0.15
        } else if elapsed > total - 0.4 {
            ((total - elapsed) / 0.4).max(0.0)
        } else {
            1.0
        }
    }
}

#[derive(Default)]
pub struct NotificationManager {
    notifications: Vec<Notification>,
}

impl NotificationManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.show(Notification::new(message, NotificationKind::Success));
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.show(Notification::new(message, NotificationKind::Info));
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.show(Notification::new(message, NotificationKind::Error));
    }

    /// Replace any shown error with this compile failure
    pub fn compile_error(&mut self, err: &CompileError) {
        self.dismiss_errors();
        self.error(format_compile_error(err));
    }

    pub fn dismiss_errors(&mut self) {
        for n in &mut self.notifications {
            if n.kind == NotificationKind::Error {
                n.dismissed = true;
            }
        }
    }

    #[cfg(test)]
    pub fn active(&self) -> impl Iterator<Item = &Notification> {
        self.notifications.iter().filter(|n| n.is_visible())
    }

    pub fn render(&mut self, ctx: &egui::Context) {
        self.notifications.retain(Notification::is_visible);
        if self.notifications.is_empty() {
            return;
        }

        let screen = ctx.viewport_rect();
        let margin = 20.0;
        let spacing = 8.0;
        let mut bottom = screen.max.y - margin;

        for (index, n) in self.notifications.iter_mut().enumerate() {
            let size = match n.kind {
                NotificationKind::Error => {
                    let lines = n.message.lines().count().max(1) as f32;
                    Vec2::new(620.0, (lines * 18.0 + 70.0).clamp(140.0, 480.0))
                }
                _ => Vec2::new(280.0, 48.0),
            };
            bottom -= size.y;
            let rect = Rect::from_min_size(egui::pos2(screen.max.x - size.x - margin, bottom), size);
            bottom -= spacing;

            egui::Area::new(egui::Id::new(("notification", index)))
                .order(egui::Order::Foreground)
                .fixed_pos(rect.min)
                .show(ctx, |ui| {
                    ui.set_min_size(size);
                    draw_notification(ui, n, rect, index);
                });
        }

        ctx.request_repaint();
    }
}

fn draw_notification(ui: &mut egui::Ui, n: &mut Notification, rect: Rect, index: usize) {
    let visuals = ui.style().visuals.clone();
    let base = visuals.panel_fill;
    let tint = match n.kind {
        NotificationKind::Error => Color32::from_rgb(
            base.r().saturating_add(24),
            base.g().saturating_sub(12),
            base.b().saturating_sub(12),
        ),
        NotificationKind::Success => Color32::from_rgb(
            base.r().saturating_sub(8),
            base.g().saturating_add(16),
            base.b().saturating_sub(8),
        ),
        NotificationKind::Info => Color32::from_rgb(
            base.r().saturating_sub(8),
            base.g().saturating_sub(8),
            base.b().saturating_add(12),
        ),
    };
    let fill = tint.gamma_multiply(n.opacity());

    ui.painter().rect_filled(rect, 8.0, fill);
    ui.painter().rect_stroke(
        rect,
        8.0,
        visuals.window_stroke(),
        egui::StrokeKind::Outside,
    );

    let inner = rect.shrink2(Vec2::new(12.0, 8.0));
    let mut child = ui.new_child(
        egui::UiBuilder::new()
            .max_rect(inner)
            .layout(egui::Layout::top_down(egui::Align::Min)),
    );

    match n.kind {
        NotificationKind::Error => {
            child.horizontal(|row| {
                row.strong("⚠ Compile error");
                row.with_layout(egui::Layout::right_to_left(egui::Align::Center), |r| {
                    if r.button("✕").clicked() {
                        n.dismissed = true;
                    }
                });
            });
            child.add_space(4.0);
            let text = egui::RichText::new(&n.message)
                .family(egui::FontFamily::Monospace)
                .color(Color32::from_rgb(255, 180, 180))
                .size(13.0);
            egui::ScrollArea::vertical()
                .id_salt(("notification_scroll", index))
                .auto_shrink([false, false])
                .show(&mut child, |body| {
                    body.add(egui::Label::new(text).wrap().selectable(true));
                });
        }
        kind => {
            let (icon, color) = match kind {
                NotificationKind::Success => ("✓", Color32::from_rgb(150, 255, 150)),
                _ => ("ℹ", Color32::from_rgb(150, 200, 255)),
            };
            child.centered_and_justified(|c| {
                c.label(
                    egui::RichText::new(format!("{} {}", icon, n.message))
                        .size(14.0)
                        .color(color),
                );
            });
        }
    }
}
