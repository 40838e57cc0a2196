//! Rendering, one screen per [`LoadState`].
pub mod components;
pub mod users;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};

use crate::app::{AppState, LoadState};

pub fn render(f: &mut Frame, app: &mut AppState) {
    let root = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(5), Constraint::Length(1)].as_ref())
        .split(f.area());

    match app.load_state {
        LoadState::Loading => {
            components::render_title(f, root[0], app);
            components::render_loading(f, root[1], app);
        }
        LoadState::Error => {
            components::render_title(f, root[0], app);
            components::render_error(f, root[1], app);
        }
        LoadState::Ready => {
            components::render_search_bar(f, root[0], app);
            let body = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(60), Constraint::Percentage(40)].as_ref())
                .split(root[1]);
            users::render_users_table(f, body[0], app);
            users::render_user_details(f, body[1], app);
        }
    }

    components::render_status_bar(f, root[2], app);
}
