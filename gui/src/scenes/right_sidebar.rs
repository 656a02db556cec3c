use crate::state::State;
use crate::widgets::error_popup::ErrorPopup;

use eframe::egui::{Align, FontId, Frame, Layout, RichText, TextStyle, Ui};
use gauss_mod::render::steps_to_latex_document;
use std::path::PathBuf;

pub struct RightSideBarState {}

impl RightSideBarState {
    pub fn setup() -> Self {
        Self {}
    }

    fn save_file_dialog(default_filename: &str, title: &str, filter: (&str, &str)) -> Option<PathBuf> {
        rfd::FileDialog::new()
            .set_file_name(default_filename)
            .set_title(title)
            .set_can_create_directories(true)
            .add_filter(filter.0, &[filter.1])
            .save_file()
    }

    fn open_file_dialog(title: &str) -> Option<PathBuf> {
        rfd::FileDialog::new()
            .set_title(title)
            .add_filter("Text Files", &["txt"])
            .add_filter("All Files", &["*"])
            .pick_file()
    }

    fn timestamped(prefix: &str, extension: &str) -> String {
        let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
        format!("{}_{}.{}", prefix, timestamp, extension)
    }

    fn write_file(path: &PathBuf, contents: String, notifications: &mut ErrorPopup) {
        match std::fs::write(path, contents) {
            Ok(()) => {
                log::info!("saved {}", path.display());
                notifications.show_success_timed(
                    format!("Saved to {:?}", path.file_name().unwrap_or_default()),
                    3.0,
                )
            }
            Err(e) => {
                log::warn!("writing {} failed: {}", path.display(), e);
                notifications.show_error_timed(format!("Could not write file: {}", e), 5.0)
            }
        }
    }

    fn handle_import(state: &mut State, notifications: &mut ErrorPopup) {
        let Some(path) = Self::open_file_dialog("Import matrix") else {
            return;
        };

        match std::fs::read_to_string(&path) {
            Ok(content) => {
                state.matrix_text = content;
                state.recompute();
                match &state.matrix_error {
                    Some(e) => {
                        log::warn!("imported {} does not parse: {}", path.display(), e);
                        notifications.show_error_timed(e.clone(), 5.0)
                    }
                    None => {
                        log::info!("imported matrix from {}", path.display());
                        notifications.show_success_timed(
                            format!("Imported {:?}", path.file_name().unwrap_or_default()),
                            3.0,
                        )
                    }
                }
            }
            Err(e) => {
                log::warn!("reading {} failed: {}", path.display(), e);
                notifications.show_error_timed(format!("Could not read file: {}", e), 5.0)
            }
        }
    }

    fn handle_export_json(state: &State, notifications: &mut ErrorPopup) {
        let Some(export) = state.export() else {
            notifications.show_error_timed("Nothing to export yet", 5.0);
            return;
        };

        let json = match serde_json::to_string_pretty(&export) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("serializing steps failed: {}", e);
                notifications.show_error_timed(format!("Serialization error: {}", e), 5.0);
                return;
            }
        };

        let filename = Self::timestamped("gauss_steps", "json");
        if let Some(path) = Self::save_file_dialog(&filename, "Export steps", ("JSON Files", "json")) {
            Self::write_file(&path, json, notifications);
        }
    }

    fn handle_export_latex(state: &State, notifications: &mut ErrorPopup) {
        let Some(steps) = state.steps() else {
            notifications.show_error_timed("Nothing to export yet", 5.0);
            return;
        };

        let document = format!(
            "\\documentclass{{article}}\n\\usepackage{{amsmath}}\n\\begin{{document}}\n\n{}\n\n\\end{{document}}\n",
            steps_to_latex_document(steps)
        );

        let filename = Self::timestamped("gauss_steps", "tex");
        if let Some(path) = Self::save_file_dialog(&filename, "Export LaTeX", ("TeX Files", "tex")) {
            Self::write_file(&path, document, notifications);
        }
    }

    pub fn render(&mut self, ui: &mut Ui, state: &mut State, notifications: &mut ErrorPopup) {
        ui.vertical_centered_justified(|ui| {
            ui.heading(RichText::new("Files").size(22.0));
            ui.add_space(20.0);

            Frame::default().show(ui, |ui| {
                let style = ui.style_mut();
                style.override_text_style = Some(TextStyle::Body);
                style.override_font_id = Some(FontId::proportional(18.0));

                let layout = Layout::top_down(Align::Center);

                ui.with_layout(layout, |ui| {
                    if ui.button(RichText::new("Import matrix").size(18.0)).clicked() {
                        Self::handle_import(state, notifications);
                    }
                });

                ui.add_space(15.0);

                ui.with_layout(layout, |ui| {
                    if ui.button(RichText::new("Export steps (JSON)").size(18.0)).clicked() {
                        Self::handle_export_json(state, notifications);
                    }
                });

                ui.add_space(15.0);

                ui.with_layout(layout, |ui| {
                    if ui.button(RichText::new("Export steps (LaTeX)").size(18.0)).clicked() {
                        Self::handle_export_latex(state, notifications);
                    }
                });
            });
        });
    }
}
