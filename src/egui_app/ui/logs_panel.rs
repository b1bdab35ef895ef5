use super::style;
use crate::egui_app::controller::EguiController;
use crate::egui_app::state::LogPanelView;
use eframe::egui::{self, RichText, Ui};

pub(super) fn render(ui: &mut Ui, controller: &mut EguiController) {
    let mut open = controller.ui.logs.open;
    ui.horizontal(|ui| {
        if ui.checkbox(&mut open, "Show inference logs").changed() {
            controller.set_logs_open(open);
        }
        if open && ui.small_button("Refresh").clicked() {
            controller.refresh_logs();
        }
    });
    if !controller.ui.logs.open {
        return;
    }
    let palette = style::palette();
    match &controller.ui.logs.view {
        LogPanelView::NotLoaded => {}
        LogPanelView::Missing => {
            ui.label(RichText::new("No logs found yet.").color(palette.text_dim));
        }
        LogPanelView::Failed(reason) => {
            ui.label(RichText::new(format!("Could not read logs: {reason}")).color(palette.caution));
        }
        LogPanelView::Rows { header, rows } => {
            ui.label(
                RichText::new(format!(
                    "Recent inference logs (last {})",
                    controller.recent_rows()
                ))
                .color(palette.text_dim),
            );
            egui::ScrollArea::horizontal()
                .id_salt("inference_log_scroll")
                .show(ui, |ui| {
                    egui::Grid::new("inference_log_grid")
                        .striped(true)
                        .spacing([10.0, 4.0])
                        .show(ui, |ui| {
                            for name in header {
                                ui.label(RichText::new(name).strong());
                            }
                            ui.end_row();
                            for row in rows {
                                for cell in row {
                                    ui.label(cell);
                                }
                                ui.end_row();
                            }
                        });
                });
        }
    }
}
