// src/ui/widgets/simulation.rs

use crate::app::App;
use crate::core::simulation::{StageStatus, ATTACK_STAGES};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Gauge, Paragraph},
};

const ACCENT: Color = Color::Rgb(0, 255, 242);

/// Renders the staged attack simulation: one row per stage, with the active
/// stage's description, rotating detail and progress bar.
pub fn render_simulation(frame: &mut Frame, app: &App, area: Rect) {
    let simulation = &app.session.simulation;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(ACCENT))
        .title(Span::styled("🛡 Attack Simulation", Style::default().fg(ACCENT).bold()));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(inner);

    let mut lines = Vec::new();
    for (index, stage) in ATTACK_STAGES.iter().enumerate() {
        let status = simulation.stage_status(index);
        let (marker, style) = match status {
            StageStatus::Complete => ("✓", Style::default().fg(Color::Green)),
            StageStatus::Active => ("▶", Style::default().fg(ACCENT).bold()),
            StageStatus::Pending => ("·", Style::default().fg(Color::DarkGray)),
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{} ", marker), style),
            Span::styled(stage.name, style),
        ]));

        if status == StageStatus::Active {
            lines.push(Line::from(Span::styled(
                format!("    {}", stage.description),
                Style::default().fg(ACCENT),
            )));
            if let Some(detail) = simulation.detail_text() {
                lines.push(Line::from(Span::styled(
                    format!("    {}", detail),
                    Style::default().fg(Color::Gray).italic(),
                )));
            }
        }
    }
    frame.render_widget(Paragraph::new(lines), chunks[0]);

    if simulation.active_stage().is_some() {
        let gauge = Gauge::default()
            .ratio(simulation.progress(app.now()))
            .label("")
            .gauge_style(Style::default().fg(ACCENT).bg(Color::Rgb(0, 40, 40)));
        frame.render_widget(gauge, chunks[1]);
    }
}
