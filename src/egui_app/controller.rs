use crate::claim::ClaimForm;
use crate::egui_app::state::*;
use crate::egui_app::ui::style::StatusTone;
use crate::inference_log::{LogOutcome, LogTail, log_header};
use crate::service::{FraudService, ScoreError, ScoreReport};

/// Maintains UI state and bridges the scoring service to the egui renderer.
pub struct EguiController {
    pub ui: UiState,
    service: FraudService,
}

impl EguiController {
    pub fn new(service: FraudService) -> Self {
        Self {
            ui: UiState::default(),
            service,
        }
    }

    /// Handle the Predict button.
    pub fn predict(&mut self) {
        match self.service.score_form(&self.ui.form) {
            Ok(report) => {
                self.ui.validation = None;
                self.show_report(&report);
            }
            Err(ScoreError::Invalid(err)) => {
                self.set_status(err.to_string(), StatusTone::Error);
                self.ui.validation = Some(err);
                self.ui.result = None;
            }
            Err(ScoreError::Model(err)) => {
                self.set_status(err.to_string(), StatusTone::Error);
                self.ui.validation = None;
                self.ui.result = None;
            }
        }
        if self.ui.logs.open {
            self.refresh_logs();
        }
    }

    /// Handle the "Show inference logs" toggle.
    pub fn set_logs_open(&mut self, open: bool) {
        self.ui.logs.open = open;
        if open {
            self.refresh_logs();
        } else {
            self.ui.logs.view = LogPanelView::NotLoaded;
        }
    }

    /// Re-read the tail of the inference log into the panel.
    pub fn refresh_logs(&mut self) {
        self.ui.logs.view = match self.service.recent_logs() {
            Ok(LogTail::Missing) => LogPanelView::Missing,
            Ok(LogTail::Rows(rows)) => LogPanelView::Rows {
                header: log_header().iter().map(|name| name.to_string()).collect(),
                rows: rows.iter().map(|row| row.to_cells()).collect(),
            },
            Err(err) => {
                tracing::warn!("Failed to read inference log: {err}");
                LogPanelView::Failed(err.to_string())
            }
        };
    }

    /// Restore every input to its default.
    pub fn reset_form(&mut self) {
        self.ui.form = ClaimForm::default();
        self.ui.validation = None;
    }

    pub fn recent_rows(&self) -> usize {
        self.service.recent_rows()
    }

    fn show_report(&mut self, report: &ScoreReport) {
        let (log_message, log_tone) = match &report.logging {
            Some(Ok(outcome)) => (
                Some(outcome.message().to_string()),
                match outcome {
                    LogOutcome::SkippedDuplicate => StatusTone::Info,
                    LogOutcome::FirstLogged | LogOutcome::Appended => StatusTone::Success,
                },
            ),
            Some(Err(_)) => (report.logging_text(), StatusTone::Warning),
            None => (None, StatusTone::Idle),
        };
        self.ui.result = Some(ResultState {
            verdict: report.verdict_text(),
            probability: report.probability_text(),
            fraudulent: report.prediction.label == crate::ml::FraudLabel::Fraudulent,
            log_message: log_message.clone(),
            log_tone,
        });
        let status = match log_message {
            Some(message) => format!("{} | {}", report.verdict_text(), message),
            None => report.verdict_text(),
        };
        self.set_status(status, log_tone);
    }

    fn set_status(&mut self, text: impl Into<String>, tone: StatusTone) {
        self.ui.status = StatusBarState::with_tone(text, tone);
    }
}
