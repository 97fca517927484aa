// src/ui/widgets/input.rs
use ratatui::{prelude::*, widgets::{Block, Borders, Paragraph}};
use crate::app::{App, SPINNER_CHARS};

/// Renders the domain input box.
pub fn render_input(frame: &mut Frame, app: &App, area: Rect) {
    let title = if app.session.loading {
        format!("Target Domain {} Scanning...", SPINNER_CHARS[app.spinner_frame])
    } else {
        "Target Domain".to_string()
    };
    let input_block = Block::default().borders(Borders::ALL).title(title);

    let input_paragraph = if app.input.is_empty() {
        Paragraph::new("Enter domain name (e.g., google.com)...")
            .style(Style::default().fg(Color::DarkGray))
    } else {
        Paragraph::new(app.input.as_str()).style(Style::default().fg(Color::Yellow))
    };
    frame.render_widget(input_paragraph.block(input_block), area);

    // The cursor is only useful while a new domain can be typed.
    if !app.session.loading && !app.show_disclaimer {
        frame.set_cursor_position(cursor_position(area, &app.input));
    }
}

/// Cursor cell after the typed text, kept inside the box borders.
fn cursor_position(area: Rect, input: &str) -> (u16, u16) {
    let typed = u16::try_from(input.chars().count()).unwrap_or(u16::MAX);
    let offset = typed.min(area.width.saturating_sub(3));
    (area.x.saturating_add(1).saturating_add(offset), area.y.saturating_add(1))
}

/// Renders the one-line status under the input: the scan error, if any.
pub fn render_status(frame: &mut Frame, app: &App, area: Rect) {
    if let Some(message) = &app.session.error {
        let line = Line::from(vec![
            Span::styled("✗ ", Style::default().fg(Color::Red).bold()),
            Span::styled(message.as_str(), Style::default().fg(Color::Red)),
        ]);
        frame.render_widget(Paragraph::new(line), area);
    }
}
