// src/main.rs

use color_eyre::eyre::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::prelude::*;
use std::io::stdout;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tracing::{error, info};

mod app;
mod config;
mod core;
mod logging;
mod ui;

use crate::app::{App, View};
use crate::config::Settings;
use crate::core::errors::ScanError;
use crate::core::models::ScanOutcome;
use crate::core::scanner::HttpScanOrchestrator;
use crate::core::session::ScanTicket;

/// A finished network lookup on its way back to the UI loop.
type ScanReply = (ScanTicket, Result<ScanOutcome, ScanError>);

/// Redraw and timeline resolution.
const FRAME_INTERVAL: Duration = Duration::from_millis(50);

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let log_path = logging::initialize_logging()?;

    let settings = Settings::from_env();
    info!(
        log = %log_path.display(),
        resolver = %settings.resolver_url,
        geo = %settings.geo_url,
        "Starting up."
    );
    let orchestrator = Arc::new(HttpScanOrchestrator::from_settings(&settings)?);

    // --- Setup ---
    stdout().execute(EnterAlternateScreen)?;
    enable_raw_mode()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
    terminal.clear()?;

    let result = run(&mut terminal, settings, orchestrator).await;

    // --- Restore Terminal ---
    stdout().execute(LeaveAlternateScreen)?;
    disable_raw_mode()?;
    if let Err(e) = &result {
        error!(error = %e, "Exited with an error.");
    }
    result
}

async fn run<B: Backend>(
    terminal: &mut Terminal<B>,
    settings: Settings,
    orchestrator: Arc<HttpScanOrchestrator>,
) -> Result<()> {
    let mut app = App::new(settings);
    let (tx, mut rx) = mpsc::channel::<ScanReply>(4);
    let started = Instant::now();

    while !app.should_quit {
        app.on_tick(started.elapsed());
        terminal.draw(|frame| ui::render(&mut app, frame))?;

        if event::poll(FRAME_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    handle_key(&mut app, key, &tx, &orchestrator);
                }
            }
        }

        while let Ok((ticket, outcome)) = rx.try_recv() {
            app.session.complete(&ticket, outcome);
        }
    }

    info!("Shutting down.");
    Ok(())
}

fn handle_key(
    app: &mut App,
    key: KeyEvent,
    tx: &mpsc::Sender<ScanReply>,
    orchestrator: &Arc<HttpScanOrchestrator>,
) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    if key.code == KeyCode::Esc || (ctrl && key.code == KeyCode::Char('c')) {
        app.quit();
        return;
    }

    if app.show_disclaimer {
        if key.code == KeyCode::Enter {
            app.acknowledge_disclaimer();
        }
        return;
    }

    if key.code == KeyCode::Tab {
        app.toggle_view();
        return;
    }

    match app.view {
        View::Scanner => handle_scanner_input(app, key, ctrl, tx, orchestrator),
        View::AttackVectors => match key.code {
            KeyCode::Up => app.select_previous_card(),
            KeyCode::Down => app.select_next_card(),
            _ => {}
        },
    }
}

/// Keys of the scanner view: editing the domain, submitting, and history actions.
fn handle_scanner_input(
    app: &mut App,
    key: KeyEvent,
    ctrl: bool,
    tx: &mpsc::Sender<ScanReply>,
    orchestrator: &Arc<HttpScanOrchestrator>,
) {
    match key.code {
        KeyCode::Char('l') if ctrl => app.clear_history(),
        KeyCode::Char('e') if ctrl => app.export_history(),
        KeyCode::Char(c) if !ctrl => app.input.push(c),
        KeyCode::Backspace => {
            app.input.pop();
        }
        KeyCode::Enter => {
            let Some(ticket) = app.start_scan() else {
                return;
            };
            let tx = tx.clone();
            let orchestrator = Arc::clone(orchestrator);
            tokio::spawn(async move {
                let outcome = orchestrator.run(&ticket.request).await;
                let _ = tx.send((ticket, outcome)).await;
            });
        }
        _ => {}
    }
}
