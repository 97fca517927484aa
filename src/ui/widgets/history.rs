// src/ui/widgets/history.rs

use crate::app::App;
use crate::core::models::ScanHistoryEntry;
use chrono::{DateTime, Local};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

/// Local wall-clock rendering of a stored RFC 3339 timestamp.
/// Falls back to the raw string if it does not parse.
pub fn local_time(timestamp: &str) -> String {
    DateTime::parse_from_rfc3339(timestamp)
        .map(|parsed| parsed.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|_| timestamp.to_string())
}

fn history_item(entry: &ScanHistoryEntry) -> ListItem<'_> {
    ListItem::new(vec![
        Line::from(vec![
            Span::styled(entry.domain.as_str(), Style::default().fg(Color::Yellow).bold()),
            Span::raw("  "),
            Span::styled(entry.address.as_str(), Style::default().fg(Color::Cyan)),
        ]),
        Line::from(Span::styled(
            format!("  {}  {}", local_time(&entry.timestamp), entry.info.location()),
            Style::default().fg(Color::DarkGray),
        )),
    ])
}

/// Renders the scan history, oldest first.
pub fn render_history(frame: &mut Frame, app: &App, area: Rect) {
    let history = &app.session.history;
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!("Scan History ({})", history.len()));

    if history.is_empty() {
        let placeholder = Paragraph::new("No scans yet.")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(placeholder, area);
        return;
    }

    let items: Vec<ListItem> = history.entries().iter().map(history_item).collect();
    frame.render_widget(List::new(items).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unparseable_timestamp_is_shown_verbatim() {
        assert_eq!(local_time("yesterday"), "yesterday");
    }

    #[test]
    fn rfc3339_timestamp_is_reformatted() {
        let shown = local_time("2024-05-01T12:00:00.000Z");
        assert_eq!(shown.len(), "2024-05-01 12:00:00".len());
        assert!(!shown.contains('T'));
    }
}
