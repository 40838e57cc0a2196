//! Application state types and entry glue.
//!
//! Defines the state value the reducer in [`update`] transforms, the colour
//! theme, and re-exports the event loop as `run`.
//!
pub mod keymap;
pub mod event_loop;
pub mod update;

use std::sync::Arc;

use ratatui::style::Color;

use crate::cli::ThemeName;
use crate::remote::UserRecord;
use keymap::Keymap;

/// Where the one-shot load stands. `Ready` and `Error` are final.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Error,
    Ready,
}

/// Color palette for theming the TUI.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    pub text: Color,
    pub muted: Color,
    pub title: Color,
    pub border: Color,
    pub header_bg: Color,
    pub header_fg: Color,
    pub status_bg: Color,
    pub status_fg: Color,
    pub highlight_fg: Color,
    pub highlight_bg: Color,
    pub accent: Color,
    pub error: Color,
}

impl Theme {
    /// Plain terminal colours.
    pub fn dark() -> Self {
        Self {
            text: Color::Gray,
            muted: Color::DarkGray,
            title: Color::Cyan,
            border: Color::Gray,
            header_bg: Color::Black,
            header_fg: Color::Cyan,
            status_bg: Color::DarkGray,
            status_fg: Color::Black,
            highlight_fg: Color::Yellow,
            highlight_bg: Color::Reset,
            accent: Color::Magenta,
            error: Color::Red,
        }
    }

    /// Catppuccin Mocha.
    pub fn mocha() -> Self {
        // Palette reference: https://github.com/catppuccin/catppuccin
        Self {
            text: Color::Rgb(0xcd, 0xd6, 0xf4),         // text
            muted: Color::Rgb(0x7f, 0x84, 0x9c),        // overlay1
            title: Color::Rgb(0xcb, 0xa6, 0xf7),        // mauve
            border: Color::Rgb(0x58, 0x5b, 0x70),       // surface2
            header_bg: Color::Rgb(0x31, 0x32, 0x44),    // surface0
            header_fg: Color::Rgb(0xb4, 0xbe, 0xfe),    // lavender
            status_bg: Color::Rgb(0x45, 0x47, 0x5a),    // surface1
            status_fg: Color::Rgb(0xcd, 0xd6, 0xf4),    // text
            highlight_fg: Color::Rgb(0xf9, 0xe2, 0xaf), // yellow
            highlight_bg: Color::Rgb(0x45, 0x47, 0x5a), // surface1
            accent: Color::Rgb(0x89, 0xb4, 0xfa),       // blue
            error: Color::Rgb(0xf3, 0x8b, 0xa8),        // red
        }
    }

    pub fn from_name(name: ThemeName) -> Self {
        match name {
            ThemeName::Mocha => Self::mocha(),
            ThemeName::Dark => Self::dark(),
        }
    }
}

/// Everything the UI shows, replaced by [`update::update`] on every message.
#[derive(Clone, Debug)]
pub struct AppState {
    pub load_state: LoadState,
    /// The loaded list. Empty until `Ready`, never changed after.
    pub users_all: Arc<[UserRecord]>,
    /// `users_all` filtered by `search_query`.
    pub users: Vec<UserRecord>,
    pub search_query: String,
    pub selected_user_index: usize,
    pub rows_per_page: usize,
    pub spinner_frame: usize,
    pub theme: Theme,
    pub keymap: Keymap,
    pub should_quit: bool,
}

impl AppState {
    pub fn new(theme: Theme) -> Self {
        Self {
            load_state: LoadState::Loading,
            users_all: Arc::from(Vec::new()),
            users: Vec::new(),
            search_query: String::new(),
            selected_user_index: 0,
            rows_per_page: 10,
            spinner_frame: 0,
            theme,
            keymap: Keymap::default(),
            should_quit: false,
        }
    }

    pub fn is_ready(&self) -> bool {
        self.load_state == LoadState::Ready
    }

    pub fn selected_user(&self) -> Option<&UserRecord> {
        self.users.get(self.selected_user_index)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Theme::mocha())
    }
}

/// Re-export the application event loop entry function.
pub use event_loop::run_app as run;
