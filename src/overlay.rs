//! Panel visibility and small selections for the overlay UI, plus the
//! commands its menus emit.

use crate::theme::Theme;

/// Default size of the shader preview window, in pixels
pub const DEFAULT_PREVIEW_SIZE: [u32; 2] = [1280, 720];

/// Commands emitted by menus and shortcuts, executed by the frame loop
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuCommand {
    Save,
    ResetToTemplate,
    Quit,
    Undo,
    Redo,
    Copy,
    Cut,
    Delete,
    Paste,
    SelectAll,
    SetPalette(EditorPalette),
}

/// Syntax colours for the code editor
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum EditorPalette {
    #[default]
    Dark,
    Light,
    RetroBlue,
}

impl EditorPalette {
    pub const ALL: [EditorPalette; 3] = [
        EditorPalette::Dark,
        EditorPalette::Light,
        EditorPalette::RetroBlue,
    ];

    pub fn label(self) -> &'static str {
        match self {
            EditorPalette::Dark => "Dark palette",
            EditorPalette::Light => "Light palette",
            EditorPalette::RetroBlue => "Retro blue palette",
        }
    }
}

/// Where the debug overlay sits
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DebugCorner {
    /// Freely movable
    Custom,
    Center,
    #[default]
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl DebugCorner {
    pub const ALL: [DebugCorner; 6] = [
        DebugCorner::Custom,
        DebugCorner::Center,
        DebugCorner::TopLeft,
        DebugCorner::TopRight,
        DebugCorner::BottomLeft,
        DebugCorner::BottomRight,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DebugCorner::Custom => "Custom",
            DebugCorner::Center => "Center",
            DebugCorner::TopLeft => "Top-left",
            DebugCorner::TopRight => "Top-right",
            DebugCorner::BottomLeft => "Bottom-left",
            DebugCorner::BottomRight => "Bottom-right",
        }
    }
}

pub struct UiOverlayState {
    pub show_editor: bool,
    pub show_debug: bool,
    pub show_preview: bool,
    pub debug_corner: DebugCorner,
    pub preview_width: u32,
    pub preview_height: u32,
    pub theme: Theme,
    pub palette: EditorPalette,
    pub editor_font_size: f32,
}

impl Default for UiOverlayState {
    fn default() -> Self {
        Self {
            show_editor: true,
            show_debug: false,
            show_preview: false,
            debug_corner: DebugCorner::default(),
            preview_width: DEFAULT_PREVIEW_SIZE[0],
            preview_height: DEFAULT_PREVIEW_SIZE[1],
            theme: Theme::default(),
            palette: EditorPalette::default(),
            editor_font_size: 14.0,
        }
    }
}

impl UiOverlayState {
    /// Keep the preview size inside the current framebuffer
    pub fn clamp_preview(&mut self, framebuffer: [u32; 2]) {
        self.preview_width = self.preview_width.clamp(1, framebuffer[0].max(1));
        self.preview_height = self.preview_height.clamp(1, framebuffer[1].max(1));
    }

    pub fn adjust_font_size(&mut self, delta: f32) {
        self.editor_font_size = (self.editor_font_size + delta).clamp(12.0, 48.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_startup_layout() {
        let s = UiOverlayState::default();
        assert!(s.show_editor);
        assert!(!s.show_debug);
        assert!(!s.show_preview);
        assert_eq!((s.preview_width, s.preview_height), (1280, 720));
    }

    #[test]
    fn test_clamp_preview_to_framebuffer() {
        let mut s = UiOverlayState::default();
        s.clamp_preview([800, 600]);
        assert_eq!((s.preview_width, s.preview_height), (800, 600));

        s.preview_width = 0;
        s.clamp_preview([0, 0]);
        assert_eq!((s.preview_width, s.preview_height), (1, 1));
    }

    #[test]
    fn test_font_size_bounds() {
        let mut s = UiOverlayState::default();
        s.adjust_font_size(100.0);
        assert_eq!(s.editor_font_size, 48.0);
        s.adjust_font_size(-100.0);
        assert_eq!(s.editor_font_size, 12.0);
    }
}
