use super::style::{self, StatusTone};
use crate::egui_app::state::ResultState;
use eframe::egui::{Frame, Margin, RichText, Stroke, Ui};

pub(super) fn render(ui: &mut Ui, result: &ResultState) {
    let palette = style::palette();
    let accent = if result.fraudulent {
        palette.alert
    } else {
        palette.ok
    };
    Frame::new()
        .fill(palette.surface)
        .stroke(Stroke::new(1.0, accent))
        .inner_margin(Margin::same(8))
        .show(ui, |ui| {
            ui.label(RichText::new(&result.verdict).strong().color(accent));
            ui.label(&result.probability);
            if let Some(message) = &result.log_message {
                let color = match result.log_tone {
                    StatusTone::Warning | StatusTone::Error => palette.caution,
                    StatusTone::Idle | StatusTone::Info | StatusTone::Success => palette.text_dim,
                };
                ui.label(RichText::new(message).color(color));
            }
        });
}
