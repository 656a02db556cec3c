use eframe::egui::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Error,
    Success,
}

impl NoticeKind {
    fn title(self) -> &'static str {
        match self {
            NoticeKind::Error => "Error",
            NoticeKind::Success => "Done",
        }
    }

    fn icon(self) -> (&'static str, Color32) {
        match self {
            NoticeKind::Error => ("✕", Color32::from_rgb(220, 53, 69)),
            NoticeKind::Success => ("✔", Color32::from_rgb(40, 167, 69)),
        }
    }
}

/// Notification window pinned to the top right corner, optionally closing itself.
#[derive(Clone, Debug)]
pub struct ErrorPopup {
    visible: bool,
    kind: NoticeKind,
    message: String,
    auto_close_timer: Option<f32>,
    start_time: Option<f64>,
}

impl Default for ErrorPopup {
    fn default() -> Self {
        Self {
            visible: false,
            kind: NoticeKind::Error,
            message: String::new(),
            auto_close_timer: None,
            start_time: None,
        }
    }
}

impl ErrorPopup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show_error_timed(&mut self, message: impl Into<String>, duration_secs: f32) {
        self.show(NoticeKind::Error, message.into(), duration_secs);
    }

    pub fn show_success_timed(&mut self, message: impl Into<String>, duration_secs: f32) {
        self.show(NoticeKind::Success, message.into(), duration_secs);
    }

    fn show(&mut self, kind: NoticeKind, message: String, duration_secs: f32) {
        self.kind = kind;
        self.message = message;
        self.visible = true;
        self.auto_close_timer = Some(duration_secs);
        self.start_time = None;
    }

    pub fn hide(&mut self) {
        self.visible = false;
        self.auto_close_timer = None;
        self.start_time = None;
    }

    /// Call once per frame.
    pub fn update(&mut self, ctx: &Context) {
        if !self.visible {
            return;
        }

        if let Some(duration) = self.auto_close_timer {
            let now = ctx.input(|i| i.time);
            let start = *self.start_time.get_or_insert(now);
            if now - start >= duration as f64 {
                self.hide();
                return;
            }
        }

        let mut open = true;
        Window::new(self.kind.title())
            .open(&mut open)
            .resizable(false)
            .collapsible(false)
            .anchor(Align2::RIGHT_TOP, Vec2::new(-20.0, 20.0))
            .auto_sized()
            .frame(Frame::popup(&ctx.style()))
            .show(ctx, |ui| {
                ui.set_min_width(300.0);
                ui.set_max_width(400.0);

                ui.horizontal(|ui| {
                    let (glyph, color) = self.kind.icon();
                    let (rect, _) = ui.allocate_exact_size(Vec2::splat(24.0), Sense::hover());
                    ui.painter().circle_filled(rect.center(), 12.0, color);
                    ui.painter().text(
                        rect.center(),
                        Align2::CENTER_CENTER,
                        glyph,
                        FontId::proportional(16.0),
                        Color32::WHITE,
                    );

                    ui.add_space(10.0);
                    ui.label(RichText::new(&self.message).size(16.0).color(Color32::BLACK));
                });

                ui.add_space(15.0);

                ui.with_layout(Layout::right_to_left(Align::Min), |ui| {
                    let close = ui.add_sized(
                        Vec2::new(80.0, 30.0),
                        Button::new(RichText::new("Close").size(14.0)),
                    );
                    if close.clicked() {
                        self.hide();
                    }
                });
            });

        if !open {
            self.hide();
        }

        if self.auto_close_timer.is_some() {
            ctx.request_repaint();
        }
    }
}
