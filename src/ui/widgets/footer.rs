// src/ui/widgets/footer.rs

use crate::app::{App, ExportStatus, View};
use ratatui::{prelude::*, widgets::Paragraph};

fn key(label: &str) -> Span<'_> {
    Span::styled(label, Style::new().bold().fg(Color::Yellow))
}

/// Renders the footer: key hints for the current view, or the last export result.
pub fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let line = match (&app.export_status, app.view) {
        (ExportStatus::Success(path), View::Scanner) => Line::from(vec![
            Span::styled("✓ ", Style::new().fg(Color::Green).bold()),
            Span::raw(format!("History exported to {}", path)),
        ]),
        (ExportStatus::Error(message), View::Scanner) => Line::from(vec![
            Span::styled("✗ ", Style::new().fg(Color::Red).bold()),
            Span::styled(message.as_str(), Style::new().fg(Color::Red)),
        ]),
        (_, View::Scanner) if app.session.loading => Line::from(vec![
            Span::raw("Scanning... "),
            key("Esc"),
            Span::raw(" quit"),
        ]),
        (_, View::Scanner) => Line::from(vec![
            key("Enter"),
            Span::raw(" scan  "),
            key("Ctrl+E"),
            Span::raw(" export  "),
            key("Ctrl+L"),
            Span::raw(" clear  "),
            key("Tab"),
            Span::raw(" attack vectors  "),
            key("Esc"),
            Span::raw(" quit"),
        ]),
        (_, View::AttackVectors) => Line::from(vec![
            key("↑ ↓"),
            Span::raw(" select  "),
            key("Tab"),
            Span::raw(" scanner  "),
            key("Esc"),
            Span::raw(" quit"),
        ]),
    };

    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}
