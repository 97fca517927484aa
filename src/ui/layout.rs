// src/ui/layout.rs

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Areas of the scanner view.
///
/// Panels that are not on screen yet get an empty `Rect`.
pub struct ScannerLayout {
    pub input: Rect,
    pub status: Rect,
    pub globe: Rect,
    pub simulation: Rect,
    pub result: Rect,
    pub details: Rect,
    pub history: Rect,
    pub footer: Rect,
}

/// Areas of the attack-vector view.
pub struct CardsLayout {
    pub list: Rect,
    pub detail: Rect,
    pub footer: Rect,
}

/// Splits the frame into input, status line, content and footer, then the
/// content into the globe column (left) and the information column (right).
///
/// The simulation panel only takes room under the globe once it is showing.
pub fn create_scanner_layout(frame_size: Rect, show_simulation: bool) -> ScannerLayout {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame_size);

    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
        .split(main_chunks[2]);

    let left_constraints = if show_simulation {
        vec![Constraint::Min(0), Constraint::Length(11)]
    } else {
        vec![Constraint::Min(0)]
    };
    let left_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(left_constraints)
        .split(content_chunks[0]);

    let right_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6),
            Constraint::Length(6),
            Constraint::Min(0),
        ])
        .split(content_chunks[1]);

    ScannerLayout {
        input: main_chunks[0],
        status: main_chunks[1],
        globe: left_chunks[0],
        simulation: if show_simulation { left_chunks[1] } else { Rect::default() },
        result: right_chunks[0],
        details: right_chunks[1],
        history: right_chunks[2],
        footer: main_chunks[3],
    }
}

pub fn create_cards_layout(frame_size: Rect) -> CardsLayout {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(frame_size);

    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(main_chunks[0]);

    CardsLayout {
        list: content_chunks[0],
        detail: content_chunks[1],
        footer: main_chunks[1],
    }
}
