// src/ui/widgets/globe.rs

use crate::app::App;
use crate::core::globe::{CameraPose, GlobePhase};
use crate::core::models::ATTACK_ORIGINS;
use ratatui::{
    prelude::*,
    symbols::Marker,
    widgets::{
        canvas::{Canvas, Line as CanvasLine, Map, MapResolution},
        Block, Borders,
    },
};

const ACCENT: Color = Color::Rgb(0, 255, 242);
const LAND: Color = Color::Rgb(0, 110, 105);

/// Longitude span visible at altitude 5 (the whole world).
const FULL_SPAN_DEGREES: f64 = 360.0;
const FULL_SPAN_ALTITUDE: f64 = 5.0;
const MIN_SPAN_DEGREES: f64 = 8.0;

/// Visible `(x_bounds, y_bounds)` in degrees for a camera pose.
///
/// The world map is flat, so altitude becomes a zoom factor. The latitude span
/// follows the panel's aspect ratio; a terminal cell is about twice as tall as wide.
pub fn viewport(camera: CameraPose, area: Rect) -> ([f64; 2], [f64; 2]) {
    let lng_span = (FULL_SPAN_DEGREES * camera.altitude / FULL_SPAN_ALTITUDE)
        .clamp(MIN_SPAN_DEGREES, FULL_SPAN_DEGREES);
    let aspect = f64::from(area.height.max(1)) * 2.0 / f64::from(area.width.max(1));
    let lat_span = (lng_span * aspect).clamp(MIN_SPAN_DEGREES / 2.0, 180.0);

    (
        [camera.lng - lng_span / 2.0, camera.lng + lng_span / 2.0],
        [camera.lat - lat_span / 2.0, camera.lat + lat_span / 2.0],
    )
}

fn title_for(phase: GlobePhase) -> &'static str {
    match phase {
        GlobePhase::Idle | GlobePhase::Rotating => "Globe",
        GlobePhase::Approaching { .. } => "Globe · Approaching target",
        GlobePhase::Locked => "Globe · Locked on",
    }
}

/// Renders the world map through the scripted camera, with the target and revealed arcs.
pub fn render_globe(frame: &mut Frame, app: &App, area: Rect) {
    let session = &app.session;
    let globe = &session.globe;
    let now = app.now();

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(title_for(globe.phase()));
    if let (true, Some(target)) = (globe.target_visible(), globe.target()) {
        block = block.title_bottom(
            Line::from(format!(
                " Target Located: {:.2}°N, {:.2}°E ",
                target.latitude, target.longitude
            ))
            .style(Style::default().fg(ACCENT)),
        );
    }

    let inner = block.inner(area);
    let (x_bounds, y_bounds) = viewport(globe.camera(now), inner);
    let revealed = globe.arcs_revealed().min(session.attack_lines.len());
    let arcs = &session.attack_lines[..revealed];
    let target = globe.target().filter(|_| globe.target_visible());

    let canvas = Canvas::default()
        .block(block)
        .marker(Marker::Braille)
        .x_bounds(x_bounds)
        .y_bounds(y_bounds)
        .paint(|ctx| {
            ctx.draw(&Map { color: LAND, resolution: MapResolution::High });
            ctx.layer();

            for arc in arcs {
                let color = arc.color.parse::<Color>().unwrap_or(ACCENT);
                ctx.draw(&CanvasLine {
                    x1: arc.start_lng,
                    y1: arc.start_lat,
                    x2: arc.end_lng,
                    y2: arc.end_lat,
                    color,
                });
            }
            for origin in ATTACK_ORIGINS.iter().take(revealed) {
                ctx.print(
                    origin.coordinates.longitude,
                    origin.coordinates.latitude,
                    Span::styled("•", Style::default().fg(ACCENT)),
                );
            }
            if let Some(target) = target {
                ctx.print(
                    target.longitude,
                    target.latitude,
                    Span::styled("◉", Style::default().fg(Color::Red).bold()),
                );
            }
        });

    frame.render_widget(canvas, area);
}
