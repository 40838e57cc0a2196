//! The reducer: `(AppState, Msg) -> AppState`.

use tracing::{debug, error, info, warn};

use crate::app::{AppState, LoadState};
use crate::error::LoadError;
use crate::remote::UserRecord;
use crate::search::apply_search;

/// Everything that can change the application state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Msg {
    /// The single load finished.
    Loaded(Result<Vec<UserRecord>, LoadError>),
    /// Replace the whole query.
    QueryChanged(String),
    InsertChar(char),
    DeleteChar,
    ClearQuery,
    SelectPrev,
    SelectNext,
    PageUp,
    PageDown,
    SelectFirst,
    SelectLast,
    /// Spinner frame advance while loading.
    Tick,
    Quit,
}

/// Apply one message and return the next state.
///
/// Query and navigation messages only act once the list is `Ready`; a load
/// result only acts while `Loading`.
pub fn update(mut app: AppState, msg: Msg) -> AppState {
    let ready = app.is_ready();
    match msg {
        Msg::Quit => app.should_quit = true,
        Msg::Tick => {
            if app.load_state == LoadState::Loading {
                app.spinner_frame = app.spinner_frame.wrapping_add(1);
            }
        }
        Msg::Loaded(result) => on_loaded(&mut app, result),
        _ if !ready => debug!(?msg, state = ?app.load_state, "input ignored until ready"),
        Msg::QueryChanged(query) => set_query(&mut app, query),
        Msg::InsertChar(c) => {
            let mut query = app.search_query.clone();
            query.push(c);
            set_query(&mut app, query);
        }
        Msg::DeleteChar => {
            let mut query = app.search_query.clone();
            if query.pop().is_some() {
                set_query(&mut app, query);
            }
        }
        Msg::ClearQuery => {
            if !app.search_query.is_empty() {
                set_query(&mut app, String::new());
            }
        }
        Msg::SelectPrev => {
            app.selected_user_index = app.selected_user_index.saturating_sub(1);
        }
        Msg::SelectNext => {
            if app.selected_user_index + 1 < app.users.len() {
                app.selected_user_index += 1;
            }
        }
        Msg::PageUp => {
            let rpp = app.rows_per_page.max(1);
            app.selected_user_index = app.selected_user_index.saturating_sub(rpp);
        }
        Msg::PageDown => {
            let rpp = app.rows_per_page.max(1);
            let new_idx = app.selected_user_index.saturating_add(rpp);
            app.selected_user_index = new_idx.min(app.users.len().saturating_sub(1));
        }
        Msg::SelectFirst => app.selected_user_index = 0,
        Msg::SelectLast => app.selected_user_index = app.users.len().saturating_sub(1),
    }
    app
}

fn on_loaded(app: &mut AppState, result: Result<Vec<UserRecord>, LoadError>) {
    if app.load_state != LoadState::Loading {
        warn!(state = ?app.load_state, "ignoring repeated load result");
        return;
    }
    match result {
        Ok(users) => {
            info!(count = users.len(), "user list ready");
            app.users_all = users.into();
            app.load_state = LoadState::Ready;
            apply_search(app);
        }
        Err(err) => {
            error!(%err, "user list unavailable");
            app.load_state = LoadState::Error;
        }
    }
}

fn set_query(app: &mut AppState, query: String) {
    app.search_query = query;
    apply_search(app);
    debug!(query = %app.search_query, visible = app.users.len(), "query applied");
}
