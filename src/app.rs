// src/app.rs

use ratatui::widgets::ListState;
use std::time::Duration;
use tracing::{error, info};

use crate::config::Settings;
use crate::core::knowledge_base::ATTACK_VECTORS;
use crate::core::session::{ScanSession, ScanTicket};

pub const SPINNER_CHARS: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

/// Outcome of the last history export, shown in the footer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportStatus {
    Idle,
    Success(String),
    Error(String),
}

/// Which screen is on display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Scanner,
    AttackVectors,
}

pub struct App {
    pub should_quit: bool,
    pub show_disclaimer: bool,
    pub view: View,
    pub input: String,
    pub session: ScanSession,
    pub spinner_frame: usize,
    pub card_list_state: ListState,
    pub export_status: ExportStatus,
    pub settings: Settings,
}

impl App {
    pub fn new(settings: Settings) -> Self {
        Self {
            should_quit: false,
            show_disclaimer: true,
            view: View::Scanner,
            input: String::new(),
            session: ScanSession::new(),
            spinner_frame: 0,
            card_list_state: ListState::default().with_selected(Some(0)),
            export_status: ExportStatus::Idle,
            settings,
        }
    }

    /// Current position of the presentation clock.
    pub fn now(&self) -> Duration {
        self.session.now()
    }

    /// Advances animations to `elapsed` since start-up.
    pub fn on_tick(&mut self, elapsed: Duration) {
        self.session.advance(elapsed);
        if self.session.loading {
            self.spinner_frame = (self.spinner_frame + 1) % SPINNER_CHARS.len();
        }
    }

    pub fn acknowledge_disclaimer(&mut self) {
        self.show_disclaimer = false;
    }

    pub fn toggle_view(&mut self) {
        self.view = match self.view {
            View::Scanner => View::AttackVectors,
            View::AttackVectors => View::Scanner,
        };
    }

    pub fn select_previous_card(&mut self) {
        let current = self.card_list_state.selected().unwrap_or(0);
        self.card_list_state.select(Some(current.saturating_sub(1)));
    }

    pub fn select_next_card(&mut self) {
        let current = self.card_list_state.selected().unwrap_or(0);
        let last = ATTACK_VECTORS.len().saturating_sub(1);
        self.card_list_state.select(Some((current + 1).min(last)));
    }

    /// Starts a scan of the typed domain. A new scan also dismisses the last export result.
    pub fn start_scan(&mut self) -> Option<ScanTicket> {
        let ticket = self.session.begin(&self.input)?;
        self.export_status = ExportStatus::Idle;
        Some(ticket)
    }

    pub fn clear_history(&mut self) {
        self.session.clear_history();
        self.export_status = ExportStatus::Idle;
    }

    /// Writes the history to the configured export file.
    pub fn export_history(&mut self) {
        if self.session.history.is_empty() {
            self.export_status = ExportStatus::Error("No scans to export yet.".to_string());
            return;
        }
        let path = self.settings.export_path();
        self.export_status = match self.session.history.export_to(&path) {
            Ok(written) => {
                info!(path = %written.display(), "Export finished.");
                ExportStatus::Success(written.display().to_string())
            }
            Err(e) => {
                error!(path = %path.display(), error = %e, "Export failed.");
                ExportStatus::Error(format!("Export failed: {}", e))
            }
        };
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}
