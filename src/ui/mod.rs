// src/ui/mod.rs

use crate::app::{App, View};
use ratatui::prelude::*;

mod layout;
mod widgets;

pub fn render(app: &mut App, frame: &mut Frame) {
    match app.view {
        View::Scanner => render_scanner(app, frame),
        View::AttackVectors => render_attack_vectors(app, frame),
    }

    if app.show_disclaimer {
        let area = frame.area();
        widgets::disclaimer_popup::render_disclaimer_popup(frame, area);
    }
}

fn render_scanner(app: &App, frame: &mut Frame) {
    let layout = layout::create_scanner_layout(frame.area(), app.session.show_simulation);

    widgets::input::render_input(frame, app, layout.input);
    widgets::input::render_status(frame, app, layout.status);
    widgets::globe::render_globe(frame, app, layout.globe);
    if app.session.show_simulation {
        widgets::simulation::render_simulation(frame, app, layout.simulation);
    }
    widgets::result::render_result(frame, app, layout.result);
    widgets::result::render_details(frame, app, layout.details);
    widgets::history::render_history(frame, app, layout.history);
    widgets::footer::render_footer(frame, app, layout.footer);
}

fn render_attack_vectors(app: &mut App, frame: &mut Frame) {
    let layout = layout::create_cards_layout(frame.area());

    widgets::attack_cards::render_attack_list(frame, app, layout.list);
    widgets::attack_cards::render_attack_detail(frame, app, layout.detail);
    widgets::footer::render_footer(frame, app, layout.footer);
}
