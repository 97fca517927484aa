// src/ui/widgets/attack_cards.rs

use crate::app::App;
use crate::core::knowledge_base::ATTACK_VECTORS;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
};

const ACCENT: Color = Color::Rgb(0, 255, 242);

/// Renders the attack vector catalog: names on the left, the selected card on the right.
pub fn render_attack_list(frame: &mut Frame, app: &mut App, area: Rect) {
    let items: Vec<ListItem> = ATTACK_VECTORS
        .iter()
        .map(|vector| {
            ListItem::new(Line::from(vec![
                Span::styled(format!("{} ", vector.icon.glyph()), Style::default().fg(ACCENT)),
                Span::raw(vector.name),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Attack Vectors (↑ ↓)"))
        .highlight_style(Style::new().bg(Color::DarkGray).add_modifier(Modifier::BOLD));

    frame.render_stateful_widget(list, area, &mut app.card_list_state);
}

pub fn render_attack_detail(frame: &mut Frame, app: &App, area: Rect) {
    let Some(vector) = app
        .card_list_state
        .selected()
        .and_then(|index| ATTACK_VECTORS.get(index))
    else {
        let block = Block::default().borders(Borders::ALL).title("Details");
        let p = Paragraph::new("Select a card to see details.")
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(p, area);
        return;
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(ACCENT))
        .title(format!("{} {}", vector.icon.glyph(), vector.name));

    let mut text = vec![
        Line::from(vector.description),
        Line::from(""),
        Line::from("EXAMPLE:".yellow().bold()),
        Line::from(vec![
            Span::styled("$ ", Style::default().fg(Color::Green).bold()),
            Span::styled(vector.command, Style::default().fg(Color::Green)),
        ]),
    ];
    text.extend(
        vector
            .output
            .split('\n')
            .map(|line| Line::from(Span::styled(line, Style::default().fg(Color::Gray)))),
    );

    let p = Paragraph::new(text).wrap(Wrap { trim: false }).block(block);
    frame.render_widget(p, area);
}
