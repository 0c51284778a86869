// theme.rs - UI styles selectable from the Options window
use eframe::egui::{self, Color32, Context, CornerRadius, Margin, Stroke, Visuals};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    PhocusGreen,
    Dark,
    Light,
    Monochrome,
    Midnight,
    Classic,
}

impl Theme {
    pub const ALL: [Theme; 6] = [
        Theme::PhocusGreen,
        Theme::Dark,
        Theme::Light,
        Theme::Monochrome,
        Theme::Midnight,
        Theme::Classic,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Theme::PhocusGreen => "Phocus Green",
            Theme::Dark => "Dark",
            Theme::Light => "Light",
            Theme::Monochrome => "Monochrome",
            Theme::Midnight => "Midnight",
            Theme::Classic => "Classic",
        }
    }

    pub fn apply(self, ctx: &Context) {
        let mut style = (*ctx.style()).clone();
        style.visuals = match self {
            Theme::PhocusGreen => phocus_green(),
            Theme::Dark => Visuals::dark(),
            Theme::Light => Visuals::light(),
            Theme::Monochrome => monochrome(),
            Theme::Midnight => midnight(),
            Theme::Classic => classic(),
        };

        // Rounded corners
        style.visuals.window_corner_radius = CornerRadius::same(8);
        style.visuals.widgets.inactive.corner_radius = CornerRadius::same(4);
        style.visuals.widgets.hovered.corner_radius = CornerRadius::same(4);
        style.visuals.widgets.active.corner_radius = CornerRadius::same(4);

        // Spacing
        style.spacing.item_spacing = egui::vec2(8.0, 6.0);
        style.spacing.window_margin = Margin::same(8);
        style.spacing.button_padding = egui::vec2(12.0, 6.0);

        ctx.set_style(style);
        log::debug!("Applied theme {}", self.label());
    }
}

fn phocus_green() -> Visuals {
    let mut v = Visuals::dark();
    let green = Color32::from_rgb(89, 199, 125);
    let green_hover = Color32::from_rgb(87, 214, 125);
    let salmon = Color32::from_rgb(255, 110, 89);

    v.window_fill = Color32::from_rgb(20, 24, 22);
    v.panel_fill = Color32::from_rgb(20, 24, 22);
    v.extreme_bg_color = Color32::from_rgb(12, 14, 13);
    v.code_bg_color = Color32::from_rgb(16, 18, 17);

    v.widgets.inactive.weak_bg_fill = Color32::from_rgb(38, 70, 50);
    v.widgets.hovered.weak_bg_fill = green;
    v.widgets.hovered.bg_stroke = Stroke::new(1.0, green_hover);
    v.widgets.active.weak_bg_fill = salmon;
    v.selection.bg_fill = green.linear_multiply(0.4);
    v.selection.stroke = Stroke::new(1.0, green);
    v
}

fn monochrome() -> Visuals {
    let mut v = Visuals::dark();
    let grey = |l: u8| Color32::from_rgb(l, l, l);
    v.window_fill = grey(24);
    v.panel_fill = grey(24);
    v.extreme_bg_color = grey(10);
    v.code_bg_color = grey(16);
    v.widgets.inactive.weak_bg_fill = grey(48);
    v.widgets.hovered.weak_bg_fill = grey(80);
    v.widgets.active.weak_bg_fill = grey(120);
    v.selection.bg_fill = grey(90);
    v.selection.stroke = Stroke::new(1.0, grey(220));
    v.hyperlink_color = grey(200);
    v
}

fn midnight() -> Visuals {
    let mut v = Visuals::dark();
    let accent = Color32::from_rgb(99, 102, 241);
    v.window_fill = Color32::from_rgb(24, 24, 30);
    v.panel_fill = Color32::from_rgb(17, 17, 21);
    v.extreme_bg_color = Color32::from_rgb(12, 12, 16);
    v.faint_bg_color = Color32::from_rgb(32, 32, 40);
    v.widgets.hovered.bg_stroke = Stroke::new(1.0, accent);
    v.widgets.active.weak_bg_fill = accent;
    v.selection.bg_fill = accent.linear_multiply(0.4);
    v.selection.stroke = Stroke::new(1.0, accent);
    v
}

// Blue-grey panels with violet highlights
fn classic() -> Visuals {
    let mut v = Visuals::dark();
    let violet = Color32::from_rgb(117, 117, 230);
    v.window_fill = Color32::from_rgba_unmultiplied(0, 0, 0, 217);
    v.panel_fill = Color32::from_rgb(28, 28, 36);
    v.extreme_bg_color = Color32::from_rgb(110, 110, 110).linear_multiply(0.4);
    v.faint_bg_color = Color32::from_rgb(38, 38, 51);
    v.window_stroke = Stroke::new(1.0, Color32::from_rgb(127, 127, 127));
    v.widgets.inactive.weak_bg_fill = Color32::from_rgb(89, 102, 156);
    v.widgets.hovered.weak_bg_fill = Color32::from_rgb(102, 122, 204);
    v.widgets.hovered.bg_stroke = Stroke::new(1.0, violet);
    v.widgets.active.weak_bg_fill = Color32::from_rgb(117, 138, 204);
    v.selection.bg_fill = Color32::from_rgb(0, 0, 255).linear_multiply(0.35);
    v.selection.stroke = Stroke::new(1.0, violet);
    v
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_are_unique() {
        let mut labels: Vec<&str> = Theme::ALL.iter().map(|t| t.label()).collect();
        labels.sort();
        labels.dedup();
        assert_eq!(labels.len(), Theme::ALL.len());
    }

    #[test]
    fn test_apply_sets_light_visuals() {
        let ctx = Context::default();
        Theme::Light.apply(&ctx);
        assert!(!ctx.style().visuals.dark_mode);
        Theme::Midnight.apply(&ctx);
        assert!(ctx.style().visuals.dark_mode);
    }

    #[test]
    fn test_classic_uses_its_own_fill() {
        let ctx = Context::default();
        Theme::Classic.apply(&ctx);
        assert!(ctx.style().visuals.dark_mode);
        assert_eq!(ctx.style().visuals.widgets.inactive.weak_bg_fill, Color32::from_rgb(89, 102, 156));
        assert!(Theme::ALL.contains(&Theme::Classic));
    }
}
