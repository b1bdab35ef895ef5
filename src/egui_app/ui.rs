//! egui renderer for the application UI.
mod form_panel;
mod logs_panel;
mod result_panel;
pub mod style;

use crate::egui_app::controller::EguiController;
use eframe::egui::{self, Color32, Frame, Margin, RichText};

/// Renders the egui UI using the shared controller state.
pub struct EguiApp {
    controller: EguiController,
    visuals_set: bool,
}

impl EguiApp {
    pub fn new(controller: EguiController) -> Self {
        Self {
            controller,
            visuals_set: false,
        }
    }

    fn apply_visuals(&mut self, ctx: &egui::Context) {
        if self.visuals_set {
            return;
        }
        let mut visuals = egui::Visuals::dark();
        style::apply_visuals(&mut visuals);
        ctx.set_visuals(visuals);
        self.visuals_set = true;
    }

    fn render_top_bar(&mut self, ctx: &egui::Context) {
        let palette = style::palette();
        egui::TopBottomPanel::top("top_bar")
            .frame(Frame::new().fill(palette.surface).inner_margin(Margin::symmetric(8, 6)))
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new("Insurance Fraud Detection")
                            .heading()
                            .color(palette.text),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("Reset").clicked() {
                            self.controller.reset_form();
                        }
                    });
                });
            });
    }

    fn render_status(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar")
            .frame(Frame::new().fill(Color32::from_rgb(0, 0, 0)))
            .show(ctx, |ui| {
                let status = &self.controller.ui.status;
                ui.horizontal(|ui| {
                    ui.add_space(8.0);
                    ui.painter().circle_filled(
                        ui.cursor().min + egui::vec2(9.0, 11.0),
                        9.0,
                        status.badge_color,
                    );
                    ui.add_space(24.0);
                    ui.label(RichText::new(&status.badge_label).color(Color32::WHITE));
                    ui.separator();
                    ui.label(RichText::new(&status.text).color(Color32::WHITE));
                });
            });
    }

    fn render_center(&mut self, ui: &mut egui::Ui) {
        ui.label("Enter claim details to predict fraud.");
        ui.add_space(6.0);
        form_panel::render(ui, &mut self.controller.ui);
        ui.add_space(10.0);
        if ui
            .add(egui::Button::new(RichText::new("Predict").strong()).min_size(egui::vec2(120.0, 28.0)))
            .clicked()
        {
            self.controller.predict();
        }
        if let Some(result) = &self.controller.ui.result {
            ui.add_space(8.0);
            result_panel::render(ui, result);
        }
        ui.add_space(12.0);
        ui.separator();
        logs_panel::render(ui, &mut self.controller);
    }
}

impl eframe::App for EguiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_visuals(ctx);
        if ctx.input(|i| i.key_pressed(egui::Key::Enter) && i.modifiers.ctrl) {
            self.controller.predict();
        }
        self.render_top_bar(ctx);
        self.render_status(ctx);
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .id_salt("claim_scroll")
                .auto_shrink([false, false])
                .show(ui, |ui| self.render_center(ui));
        });
    }
}
