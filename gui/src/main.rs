mod scenes;
mod state;
mod widgets;

use state::State;

use std::time::Instant;

use crate::scenes::{InputPanelState, RightSideBarState, StepsViewState};
use crate::widgets::error_popup::ErrorPopup;
use crate::widgets::help_panel::HelpPanel;
use eframe::egui;
use eframe::egui::{CentralPanel, Color32, Frame, Margin, RichText, Vec2};

const DISCLAIMER: &str =
    "Disclaimer: no guarantee of correctness. Under a composite modulus a pivot without an \
     inverse is scaled by 0.";

pub struct App {
    state: State,
    last_render: Instant,
    help_panel: HelpPanel,
    notifications: ErrorPopup,
    input_panel: InputPanelState,
    steps_view: StepsViewState,
    right_sidebar: RightSideBarState,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self {
            state: State::new(),
            last_render: Instant::now(),
            help_panel: HelpPanel::new(),
            notifications: ErrorPopup::new(),
            input_panel: InputPanelState::setup(),
            steps_view: StepsViewState::setup(),
            right_sidebar: RightSideBarState::setup(),
        }
    }

    pub(crate) fn update(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        self.notifications.update(ctx);

        Frame::default()
            .outer_margin(Margin::same(40))
            .inner_margin(Margin::same(20))
            .show(ui, |ui| self.render_split(ui, ctx));
    }

    fn render_split(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        ui.horizontal_top(|ui| {
            let available_width = ui.available_width();
            let main_width = available_width * 0.8;
            let side_width = available_width * 0.2;

            // Inputs on top, steps below (80%)
            ui.allocate_ui_with_layout(
                egui::vec2(main_width, ui.available_height()),
                egui::Layout::top_down(egui::Align::Min),
                |ui| {
                    ui.heading(RichText::new("Gauss-Jordan algorithm").size(26.0));
                    ui.add_space(20.0);

                    self.input_panel.render(ui, &mut self.state);
                    ui.add_space(25.0);
                    ui.separator();

                    self.steps_view.render(
                        ui,
                        ctx,
                        self.state.steps(),
                        &mut self.notifications,
                    );
                },
            );

            // Import / export (20%)
            ui.allocate_ui_with_layout(
                egui::vec2(side_width, ui.available_height()),
                egui::Layout::top_down(egui::Align::Center),
                |ui| {
                    self.right_sidebar
                        .render(ui, &mut self.state, &mut self.notifications);
                },
            );
        });
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        log::trace!(
            "Frame rendering time: {}",
            self.last_render.elapsed().as_millis()
        );

        let page_frame = Frame {
            fill: Color32::from_rgb(248, 248, 248),
            shadow: eframe::epaint::Shadow::NONE,
            inner_margin: Margin::same(0),
            ..Default::default()
        };

        egui::TopBottomPanel::bottom("disclaimer")
            .frame(page_frame)
            .show(ctx, |ui| {
                ui.add_space(6.0);
                ui.label(RichText::new(DISCLAIMER).size(13.0).color(Color32::GRAY));
                ui.add_space(6.0);
            });

        CentralPanel::default().frame(page_frame).show(ctx, |ui| {
            self.update(ui, ctx);
        });

        self.help_panel.render(ctx);

        self.last_render = Instant::now();
    }
}

fn main() -> eframe::Result {
    // Log to stderr (if you run with `RUST_LOG=debug`).
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size(Vec2::new(1200.0, 900.0)),
        ..Default::default()
    };

    let app = App::new();
    eframe::run_native(
        "Gauss-Jordan stepper",
        options,
        Box::new(move |ctx| {
            let mut visuals = egui::Visuals::light();
            visuals.override_text_color = Some(Color32::BLACK);
            visuals.panel_fill = Color32::from_rgb(248, 248, 248);
            visuals.window_fill = Color32::from_rgb(255, 255, 255);
            visuals.extreme_bg_color = Color32::from_rgb(240, 240, 240);

            ctx.egui_ctx.set_visuals(visuals);

            Ok(Box::new(app))
        }),
    )
}
