use super::style;
use crate::claim::choices::{CHOICE_FIELDS, COUNT_FIELDS, NUMERIC_FIELDS};
use crate::egui_app::state::UiState;
use eframe::egui::{self, RichText, Ui};

/// Numeric inputs shown in the left column; the rest follow the counts.
const LEFT_NUMERIC: usize = 10;
/// Categorical selectors shown in the left column.
const LEFT_CHOICES: usize = 8;
const INPUT_WIDTH: f32 = 180.0;

pub(super) fn render(ui: &mut Ui, state: &mut UiState) {
    ui.columns(2, |columns| {
        egui::Grid::new("numeric_left")
            .num_columns(2)
            .spacing([12.0, 6.0])
            .show(&mut columns[0], |ui| {
                for index in 0..LEFT_NUMERIC {
                    numeric_row(ui, state, index);
                }
            });
        egui::Grid::new("numeric_right")
            .num_columns(2)
            .spacing([12.0, 6.0])
            .show(&mut columns[1], |ui| {
                for index in 0..COUNT_FIELDS.len() {
                    count_row(ui, state, index);
                }
                for index in LEFT_NUMERIC..NUMERIC_FIELDS.len() {
                    numeric_row(ui, state, index);
                }
            });
    });
    ui.add_space(8.0);
    ui.separator();
    ui.columns(2, |columns| {
        egui::Grid::new("choices_left")
            .num_columns(2)
            .spacing([12.0, 6.0])
            .show(&mut columns[0], |ui| {
                for index in 0..LEFT_CHOICES {
                    choice_row(ui, state, index);
                }
            });
        egui::Grid::new("choices_right")
            .num_columns(2)
            .spacing([12.0, 6.0])
            .show(&mut columns[1], |ui| {
                for index in LEFT_CHOICES..CHOICE_FIELDS.len() {
                    choice_row(ui, state, index);
                }
            });
    });
}

fn numeric_row(ui: &mut Ui, state: &mut UiState, index: usize) {
    let field = NUMERIC_FIELDS[index];
    let invalid = state.is_invalid(field.column);
    let label = RichText::new(field.label);
    let label = if invalid {
        label.color(style::palette().caution)
    } else {
        label
    };
    ui.label(label).on_hover_text(field.hint);
    ui.add(
        egui::TextEdit::singleline(&mut state.form.numeric[index])
            .hint_text(field.hint)
            .desired_width(INPUT_WIDTH),
    );
    ui.end_row();
}

fn count_row(ui: &mut Ui, state: &mut UiState, index: usize) {
    let field = COUNT_FIELDS[index];
    ui.label(field.label);
    let selected = &mut state.form.counts[index];
    let current = field.options.get(*selected).copied().unwrap_or_default();
    egui::ComboBox::from_id_salt(field.column)
        .width(INPUT_WIDTH)
        .selected_text(current.to_string())
        .show_ui(ui, |ui| {
            for (option_index, option) in field.options.iter().enumerate() {
                ui.selectable_value(selected, option_index, option.to_string());
            }
        });
    ui.end_row();
}

fn choice_row(ui: &mut Ui, state: &mut UiState, index: usize) {
    let field = CHOICE_FIELDS[index];
    ui.label(field.label);
    let selected = &mut state.form.choices[index];
    let current = field.options.get(*selected).copied().unwrap_or_default();
    egui::ComboBox::from_id_salt(field.column)
        .width(INPUT_WIDTH)
        .selected_text(current)
        .show_ui(ui, |ui| {
            for (option_index, option) in field.options.iter().enumerate() {
                ui.selectable_value(selected, option_index, *option);
            }
        });
    ui.end_row();
}
