//! UI module for rendering the TUI

mod compliance;
mod components;
mod forms;
mod home;
mod layout;
mod playbooks;

use crate::app::App;
use crate::state::View;
use components::render_error_dialog;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let screen = layout::create_layout(frame.area());

    layout::draw_header(frame, screen.header, app);

    match app.state.current_view {
        View::Home => home::draw(frame, screen.main, app),
        View::Nurse => forms::draw_wizard(frame, screen.main, &app.state.nurse),
        View::Employer => forms::draw_wizard(frame, screen.main, &app.state.employer),
        View::Playbooks => playbooks::draw(frame, screen.main, app),
        View::Compliance => compliance::draw(frame, screen.main, app),
    }

    layout::draw_footer(frame, screen.footer);
    layout::draw_status_bar(frame, screen.status, app);

    // Error dialog overlays everything
    if let Some(error) = app.state.current_error() {
        render_error_dialog(frame, error, app.state.error_count().saturating_sub(1));
    }
}
