//! Shared state types for the egui UI.

use crate::claim::{ClaimForm, ValidationError};
use crate::egui_app::ui::style::{self, StatusTone};
use egui::Color32;

/// Top-level UI model consumed by the egui renderer.
#[derive(Clone, Debug)]
pub struct UiState {
    pub form: ClaimForm,
    /// Inputs rejected by the last Predict press.
    pub validation: Option<ValidationError>,
    pub result: Option<ResultState>,
    pub logs: LogPanelState,
    pub status: StatusBarState,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            form: ClaimForm::default(),
            validation: None,
            result: None,
            logs: LogPanelState::default(),
            status: StatusBarState::idle(),
        }
    }
}

impl UiState {
    pub fn is_invalid(&self, column: &str) -> bool {
        self.validation
            .as_ref()
            .is_some_and(|err| err.contains(column))
    }
}

/// Last prediction as shown below the Predict button.
#[derive(Clone, Debug, PartialEq)]
pub struct ResultState {
    pub verdict: String,
    pub probability: String,
    pub fraudulent: bool,
    /// Log outcome or logging warning.
    pub log_message: Option<String>,
    pub log_tone: StatusTone,
}

/// What the inference log section currently shows.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum LogPanelView {
    #[default]
    NotLoaded,
    /// No log file yet.
    Missing,
    Rows {
        header: Vec<String>,
        rows: Vec<Vec<String>>,
    },
    Failed(String),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LogPanelState {
    /// Whether "Show inference logs" is ticked.
    pub open: bool,
    pub view: LogPanelView,
}

/// Status badge + text shown in the footer.
#[derive(Clone, Debug, PartialEq)]
pub struct StatusBarState {
    pub text: String,
    pub badge_label: String,
    pub badge_color: Color32,
}

impl StatusBarState {
    /// Status shown before the first prediction.
    pub fn idle() -> Self {
        Self::with_tone("Fill in the claim and press Predict", StatusTone::Idle)
    }

    pub fn with_tone(text: impl Into<String>, tone: StatusTone) -> Self {
        Self {
            text: text.into(),
            badge_label: style::status_badge_label(tone).into(),
            badge_color: style::status_badge_color(tone),
        }
    }
}
