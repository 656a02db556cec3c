use eframe::egui::{self, Event, Key};

#[cfg(target_os = "macos")]
const SHORTCUTS: [&str; 4] = [
    "F1 - show/hide this help",
    "Cmd+ - zoom in",
    "Cmd- - zoom out",
    "Tab - next input field",
];

#[cfg(not(target_os = "macos"))]
const SHORTCUTS: [&str; 4] = [
    "F1 - show/hide this help",
    "Ctrl+ - zoom in",
    "Ctrl- - zoom out",
    "Tab - next input field",
];

/// Keyboard shortcut overlay toggled with F1. Any other key, click or typed text hides it.
pub struct HelpPanel {
    visible: bool,
}

impl HelpPanel {
    pub fn new() -> Self {
        Self { visible: false }
    }

    pub fn render(&mut self, ctx: &egui::Context) {
        self.handle_input_events(ctx);

        let screen_rect = ctx.input(|i| i.screen_rect());
        let hint = ctx.fonts(|f| {
            f.layout_no_wrap(
                "F1 - help".to_string(),
                egui::FontId::proportional(16.0),
                egui::Color32::DARK_GRAY,
            )
        });
        let hint_pos = egui::pos2(
            screen_rect.max.x - hint.size().x - 10.0,
            screen_rect.max.y - hint.size().y - 10.0,
        );
        ctx.layer_painter(egui::LayerId::new(
            egui::Order::Foreground,
            egui::Id::new("help_hint"),
        ))
        .galley(hint_pos, hint, egui::Color32::DARK_GRAY);

        if !self.visible {
            return;
        }

        let panel_width = 300.0;
        let line_height = 24.0;
        let panel_height = SHORTCUTS.len() as f32 * line_height + 50.0;
        let panel_rect = egui::Rect::from_min_size(
            egui::pos2(
                (screen_rect.width() - panel_width) / 2.0,
                (screen_rect.height() - panel_height) / 2.0,
            ),
            egui::vec2(panel_width, panel_height),
        );

        let painter = ctx.layer_painter(egui::LayerId::new(
            egui::Order::Foreground,
            egui::Id::new("help_panel"),
        ));
        painter.rect_filled(
            panel_rect,
            8.0,
            egui::Color32::from_rgba_premultiplied(250, 250, 250, 240),
        );
        painter.rect_stroke(
            panel_rect,
            8.0,
            egui::Stroke::new(1.0, egui::Color32::DARK_GRAY),
            egui::StrokeKind::Middle,
        );

        let title = ctx.fonts(|f| {
            f.layout_no_wrap(
                "Keyboard shortcuts".to_string(),
                egui::FontId::proportional(18.0),
                egui::Color32::BLACK,
            )
        });
        let title_pos = egui::pos2(
            panel_rect.min.x + (panel_width - title.size().x) / 2.0,
            panel_rect.min.y + 10.0,
        );
        painter.galley(title_pos, title, egui::Color32::BLACK);

        for (i, shortcut) in SHORTCUTS.iter().enumerate() {
            let line = ctx.fonts(|f| {
                f.layout_no_wrap(
                    shortcut.to_string(),
                    egui::FontId::proportional(14.0),
                    egui::Color32::DARK_GRAY,
                )
            });
            let pos = egui::pos2(
                panel_rect.min.x + 20.0,
                panel_rect.min.y + 44.0 + i as f32 * line_height,
            );
            painter.galley(pos, line, egui::Color32::DARK_GRAY);
        }
    }

    fn handle_input_events(&mut self, ctx: &egui::Context) {
        ctx.input(|i| {
            for event in &i.events {
                match event {
                    Event::Key { key: Key::F1, pressed, .. } => {
                        if *pressed {
                            self.visible = !self.visible;
                        }
                        return;
                    }
                    Event::Key { .. } | Event::PointerButton { .. } | Event::Text(_) => {
                        self.visible = false;
                        return;
                    }
                    _ => {}
                }
            }
        });
    }
}
