use crate::widgets::error_popup::ErrorPopup;

use eframe::egui;
use eframe::egui::{Button, Color32, RichText, ScrollArea, Ui};
use gauss_mod::Steps;
use gauss_mod::matrix::Matrix;
use gauss_mod::render::{matrix_to_latex, scalar_to_latex, step_label};

pub struct StepsViewState {}

impl StepsViewState {
    pub fn setup() -> Self {
        Self {}
    }

    pub fn render(
        &mut self,
        ui: &mut Ui,
        ctx: &egui::Context,
        steps: Option<&Steps>,
        notifications: &mut ErrorPopup,
    ) {
        let Some(steps) = steps else {
            ui.label(
                RichText::new("Enter a matrix to see the elimination steps.")
                    .color(Color32::DARK_GRAY),
            );
            return;
        };

        ui.heading(RichText::new("Output").size(22.0));
        ui.add_space(10.0);

        ScrollArea::vertical()
            .id_salt("steps_scroll")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                let total = steps.len();
                for (i, step) in steps.iter().enumerate() {
                    ui.horizontal(|ui| {
                        ui.label(RichText::new(step_label(i, total)).size(18.0).strong());
                        if let Some(operation) = &step.operation {
                            ui.label(RichText::new(operation.to_string()).size(16.0).monospace());
                        }
                        if ui.add(Button::new("Copy LaTeX").small()).clicked() {
                            ctx.copy_text(matrix_to_latex(&step.matrix));
                            notifications.show_success_timed("LaTeX copied to clipboard", 2.0);
                        }
                    });
                    ui.add_space(5.0);
                    Self::render_matrix(ui, &step.matrix, i);
                    ui.add_space(15.0);
                }
            });
    }

    fn render_matrix(ui: &mut Ui, matrix: &Matrix, index: usize) {
        if matrix.is_empty() {
            ui.label(RichText::new("( )").monospace());
            return;
        }

        ScrollArea::horizontal()
            .id_salt(format!("step_{}_scroll", index))
            .show(ui, |ui| {
                egui::Grid::new(format!("step_{}_grid", index))
                    .striped(true)
                    .spacing([12.0, 4.0])
                    .show(ui, |ui| {
                        for row in matrix.rows() {
                            for value in row {
                                ui.label(RichText::new(value.to_string()).size(15.0).monospace())
                                    .on_hover_text(scalar_to_latex(value));
                            }
                            ui.end_row();
                        }
                    });
            });
    }
}
