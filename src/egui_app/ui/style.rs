//! Colors and widget styling for the dashboard.

use eframe::egui::{Color32, CornerRadius, Stroke, Visuals, style::WidgetVisuals};

/// Named colors used across the dashboard panels.
#[derive(Clone, Copy, Debug)]
pub struct Palette {
    pub surface: Color32,
    pub surface_raised: Color32,
    pub field_fill: Color32,
    pub border: Color32,
    pub stripe: Color32,
    pub text: Color32,
    pub text_dim: Color32,
    pub accent: Color32,
    pub caution: Color32,
    pub alert: Color32,
    pub ok: Color32,
}

pub fn palette() -> Palette {
    Palette {
        surface: Color32::from_rgb(17, 21, 27),
        surface_raised: Color32::from_rgb(24, 30, 38),
        field_fill: Color32::from_rgb(33, 41, 52),
        border: Color32::from_rgb(52, 62, 76),
        stripe: Color32::from_rgb(28, 35, 44),
        text: Color32::from_rgb(214, 220, 228),
        text_dim: Color32::from_rgb(138, 150, 165),
        accent: Color32::from_rgb(94, 160, 230),
        caution: Color32::from_rgb(228, 168, 72),
        alert: Color32::from_rgb(224, 88, 80),
        ok: Color32::from_rgb(88, 184, 124),
    }
}

/// Apply the dashboard palette on top of egui's dark theme.
pub fn apply_visuals(visuals: &mut Visuals) {
    let palette = palette();
    visuals.window_fill = palette.surface;
    visuals.panel_fill = palette.surface_raised;
    visuals.extreme_bg_color = palette.field_fill;
    visuals.faint_bg_color = palette.stripe;
    visuals.override_text_color = Some(palette.text);
    visuals.hyperlink_color = palette.accent;
    visuals.error_fg_color = palette.alert;
    visuals.warn_fg_color = palette.caution;
    visuals.selection.bg_fill = palette.accent.linear_multiply(0.35);
    visuals.selection.stroke = Stroke::new(1.0, palette.accent);
    visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, palette.border);
    style_widget(&mut visuals.widgets.inactive, palette.field_fill, palette.border);
    style_widget(&mut visuals.widgets.hovered, palette.stripe, palette.accent);
    style_widget(&mut visuals.widgets.active, palette.field_fill, palette.accent);
    style_widget(&mut visuals.widgets.open, palette.field_fill, palette.accent);
    visuals.window_corner_radius = CornerRadius::same(4);
}

fn style_widget(widget: &mut WidgetVisuals, fill: Color32, outline: Color32) {
    widget.bg_fill = fill;
    widget.weak_bg_fill = fill;
    widget.bg_stroke = Stroke::new(1.0, outline);
    widget.corner_radius = CornerRadius::same(3);
}

/// Severity of a status or result message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusTone {
    Idle,
    Info,
    Success,
    Warning,
    Error,
}

pub fn status_badge_label(tone: StatusTone) -> &'static str {
    match tone {
        StatusTone::Idle => "Ready",
        StatusTone::Info => "Info",
        StatusTone::Success => "Logged",
        StatusTone::Warning => "Warning",
        StatusTone::Error => "Error",
    }
}

pub fn status_badge_color(tone: StatusTone) -> Color32 {
    let palette = palette();
    match tone {
        StatusTone::Idle => palette.border,
        StatusTone::Info => palette.accent,
        StatusTone::Success => palette.ok,
        StatusTone::Warning => palette.caution,
        StatusTone::Error => palette.alert,
    }
}
