use crate::state::State;

use eframe::egui::{Color32, FontId, RichText, TextEdit, TextStyle, Ui};

const PLACEHOLDER: &str = "1 2 4 5\n4 5 6 7\n8 9 1 2";

pub struct InputPanelState {}

impl InputPanelState {
    pub fn setup() -> Self {
        Self {}
    }

    /// Matrix and modulus fields. Any edit triggers a recompute.
    pub fn render(&mut self, ui: &mut Ui, state: &mut State) {
        let style = ui.style_mut();
        style.override_text_style = Some(TextStyle::Body);
        style.override_font_id = Some(FontId::proportional(16.0));

        let mut changed = false;

        ui.label(RichText::new("Matrix").strong());
        ui.add_space(5.0);
        let matrix_edit = ui.add(
            TextEdit::multiline(&mut state.matrix_text)
                .hint_text(PLACEHOLDER)
                .font(TextStyle::Monospace)
                .desired_rows(4)
                .desired_width(320.0),
        );
        changed |= matrix_edit.changed();

        if let Some(e) = &state.matrix_error {
            ui.label(RichText::new("Parsing error").color(Color32::RED));
            ui.label(RichText::new(e).size(13.0).color(Color32::DARK_RED));
        }

        ui.add_space(15.0);

        ui.label(RichText::new("Modulo").strong());
        ui.add_space(5.0);
        let modulus_edit = ui.add(
            TextEdit::singleline(&mut state.modulus_text)
                .font(TextStyle::Monospace)
                .desired_width(320.0),
        );
        changed |= modulus_edit.changed();

        if let Some(e) = &state.modulus_error {
            ui.label(RichText::new(e).color(Color32::RED));
        }
        if let Some(e) = &state.run_error {
            ui.label(RichText::new(e).color(Color32::RED));
        }

        if changed {
            state.recompute();
        }
    }
}
