pub mod error_popup;
pub mod help_panel;
