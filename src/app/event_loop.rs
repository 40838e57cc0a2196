//! The event loop: one `select!` over terminal input, the spinner tick and the
//! single in-flight load.

use std::io;
use std::time::Duration;

use anyhow::Context;
use crossterm::event::{Event, KeyEventKind};
use futures::{Stream, StreamExt};
use ratatui::Terminal;
use ratatui::backend::Backend;
use tracing::{debug, info};

use crate::app::keymap::key_to_msg;
use crate::app::update::{Msg, update};
use crate::app::{AppState, LoadState};
use crate::error::Result;
use crate::remote::UserLoader;
use crate::ui;

const SPINNER_INTERVAL: Duration = Duration::from_millis(100);

/// Drive the UI from `events` until the operator quits, returning the last
/// state.
///
/// The load future is created once, here, and is only polled while the state
/// is `Loading`; the reducer leaves `Loading` on its result, so it never runs
/// twice. The binary passes crossterm's `EventStream`.
pub async fn run_app<B, S>(
    terminal: &mut Terminal<B>,
    mut app: AppState,
    loader: UserLoader,
    mut events: S,
) -> Result<AppState>
where
    B: Backend,
    S: Stream<Item = io::Result<Event>> + Unpin,
{
    info!(endpoint = %loader.endpoint(), "starting");
    let mut ticks = tokio::time::interval(SPINNER_INTERVAL);
    let load = loader.load();
    tokio::pin!(load);

    loop {
        terminal.draw(|f| ui::render(f, &mut app))?;

        let loading = app.load_state == LoadState::Loading;
        let msg = tokio::select! {
            result = &mut load, if loading => Some(Msg::Loaded(result)),
            _ = ticks.tick(), if loading => Some(Msg::Tick),
            event = events.next() => match event {
                Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                    key_to_msg(&app, &key)
                }
                // resize and the rest only need a redraw
                Some(Ok(_)) => None,
                Some(Err(err)) => return Err(err).context("read terminal event"),
                None => Some(Msg::Quit),
            },
        };

        if let Some(msg) = msg {
            app = update(app, msg);
        }
        if app.should_quit {
            debug!("quit requested");
            break;
        }
    }

    Ok(app)
}
