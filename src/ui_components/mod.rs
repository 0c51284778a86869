pub mod debug_panel;
pub mod menu_bar;
pub mod options_panel;
pub mod preview_window;
pub mod shader_editor;
