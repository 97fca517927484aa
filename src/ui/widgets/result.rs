// src/ui/widgets/result.rs

use crate::app::{App, SPINNER_CHARS};
use crate::core::terrain::{solar_utc_offset, terrain_band};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

const ACCENT: Color = Color::Rgb(0, 255, 242);

fn info_line<'a>(label: &'a str, value: String) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("{:<11}", label), Style::default().fg(Color::DarkGray)),
        Span::styled(value, Style::default().fg(Color::White)),
    ])
}

/// Renders the scan result. It stays hidden until the simulation has finished.
pub fn render_result(frame: &mut Frame, app: &App, area: Rect) {
    let session = &app.session;
    let block = Block::default().borders(Borders::ALL).title("Result");

    let content = match (&session.result, session.show_results) {
        (Some(info), true) => Paragraph::new(vec![
            info_line("IP Address", session.address.clone().unwrap_or_else(|| info.ip.clone())),
            info_line("Location", info.location()),
            info_line("ISP", info.org.clone()),
            info_line("Region", info.region.clone()),
        ])
        .wrap(Wrap { trim: true }),
        _ if session.loading => Paragraph::new(Line::from(vec![
            Span::styled(format!("{} ", SPINNER_CHARS[app.spinner_frame]), Style::default().fg(Color::Cyan)),
            Span::raw("Resolving target..."),
        ]))
        .alignment(Alignment::Center),
        (Some(_), false) => Paragraph::new("Analysis in progress...")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center),
        (None, _) => Paragraph::new("Scan results will appear here...")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center),
    };

    frame.render_widget(content.block(block), area);
}

/// Renders the terrain analysis panel once the globe has revealed it.
pub fn render_details(frame: &mut Frame, app: &App, area: Rect) {
    let globe = &app.session.globe;
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled("Advanced Terrain Analysis", Style::default().fg(ACCENT)));

    let Some(target) = app.session.target.filter(|_| globe.details_visible()) else {
        frame.render_widget(block, area);
        return;
    };

    let text = vec![
        info_line("Lat", format!("{:.6}°N", target.latitude)),
        info_line("Lng", format!("{:.6}°E", target.longitude)),
        info_line("Terrain", terrain_band(target.latitude).to_string()),
        info_line("Time Zone", solar_utc_offset(target.longitude)),
    ];
    frame.render_widget(Paragraph::new(text).block(block), area);
}
