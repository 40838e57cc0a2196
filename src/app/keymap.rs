//! Keybindings: map key presses to semantic actions, and actions to messages.
//!
//! Printable characters are not in the table; they edit the query once the
//! list is ready (see [`key_to_msg`]).

use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::AppState;
use crate::app::update::Msg;

/// Semantic keyboard actions that can be bound to key combinations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyAction {
    /// Exit the application.
    Quit,
    /// Clear a non-empty query, otherwise quit.
    Cancel,
    /// Empty the search query.
    ClearQuery,
    /// Remove the last query character.
    DeleteChar,
    MoveUp,
    MoveDown,
    PageUp,
    PageDown,
    MoveFirst,
    MoveLast,
}

/// Mapping from `(KeyModifiers, KeyCode)` pairs to [`KeyAction`]s.
#[derive(Clone, Debug)]
pub struct Keymap {
    bindings: HashMap<(KeyModifiers, KeyCode), KeyAction>,
}

impl Keymap {
    /// Create a keymap with default keybindings.
    pub fn new_defaults() -> Self {
        use KeyCode::*;
        use KeyModifiers as M;
        let mut bindings = HashMap::new();
        bindings.insert((M::CONTROL, Char('c')), KeyAction::Quit);
        bindings.insert((M::NONE, Esc), KeyAction::Cancel);
        bindings.insert((M::CONTROL, Char('u')), KeyAction::ClearQuery);
        bindings.insert((M::NONE, Backspace), KeyAction::DeleteChar);
        bindings.insert((M::NONE, Up), KeyAction::MoveUp);
        bindings.insert((M::NONE, Down), KeyAction::MoveDown);
        // Ctrl+p / Ctrl+n, since plain letters belong to the query
        bindings.insert((M::CONTROL, Char('p')), KeyAction::MoveUp);
        bindings.insert((M::CONTROL, Char('n')), KeyAction::MoveDown);
        bindings.insert((M::NONE, PageUp), KeyAction::PageUp);
        bindings.insert((M::NONE, PageDown), KeyAction::PageDown);
        bindings.insert((M::NONE, Home), KeyAction::MoveFirst);
        bindings.insert((M::NONE, End), KeyAction::MoveLast);
        Self { bindings }
    }

    /// Resolve a key event to its corresponding action, if bound.
    pub fn resolve(&self, key: &KeyEvent) -> Option<KeyAction> {
        self.bindings.get(&(key.modifiers, key.code)).copied()
    }

    /// Rebind a key combination, replacing any previous action for it.
    pub fn bind(&mut self, mods: KeyModifiers, code: KeyCode, action: KeyAction) {
        self.bindings.insert((mods, code), action);
    }

    /// All keys bound to `action`, formatted and sorted.
    pub fn keys_for(&self, action: KeyAction) -> Vec<String> {
        let mut keys: Vec<String> = self
            .bindings
            .iter()
            .filter(|(_, a)| **a == action)
            .map(|((mods, code), _)| Self::format_key(*mods, *code))
            .collect();
        keys.sort();
        keys
    }

    /// Format a key (modifiers + code) into a human-readable spec like "Ctrl+u".
    pub fn format_key(mods: KeyModifiers, code: KeyCode) -> String {
        use KeyCode::*;
        let base = match code {
            Esc => "Esc".to_string(),
            Backspace => "Backspace".to_string(),
            Up => "Up".to_string(),
            Down => "Down".to_string(),
            PageUp => "PgUp".to_string(),
            PageDown => "PgDn".to_string(),
            Home => "Home".to_string(),
            End => "End".to_string(),
            Char(c) => c.to_string(),
            _ => format!("{code:?}"),
        };
        if mods.contains(KeyModifiers::CONTROL) {
            format!("Ctrl+{base}")
        } else {
            base
        }
    }
}

impl Default for Keymap {
    fn default() -> Self {
        Self::new_defaults()
    }
}

/// Translate a key press into a reducer message for the current state.
pub fn key_to_msg(app: &AppState, key: &KeyEvent) -> Option<Msg> {
    if let Some(action) = app.keymap.resolve(key) {
        return Some(match action {
            KeyAction::Quit => Msg::Quit,
            KeyAction::Cancel if app.is_ready() && !app.search_query.is_empty() => Msg::ClearQuery,
            KeyAction::Cancel => Msg::Quit,
            KeyAction::ClearQuery => Msg::ClearQuery,
            KeyAction::DeleteChar => Msg::DeleteChar,
            KeyAction::MoveUp => Msg::SelectPrev,
            KeyAction::MoveDown => Msg::SelectNext,
            KeyAction::PageUp => Msg::PageUp,
            KeyAction::PageDown => Msg::PageDown,
            KeyAction::MoveFirst => Msg::SelectFirst,
            KeyAction::MoveLast => Msg::SelectLast,
        });
    }
    match key.code {
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            if app.is_ready() {
                Some(Msg::InsertChar(c))
            } else if c == 'q' {
                Some(Msg::Quit)
            } else {
                None
            }
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::LoadState;

    fn key(mods: KeyModifiers, code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, mods)
    }

    fn ready() -> AppState {
        let mut app = AppState::default();
        app.load_state = LoadState::Ready;
        app
    }

    #[test]
    fn printable_keys_edit_the_query_when_ready() {
        let app = ready();
        assert_eq!(
            key_to_msg(&app, &key(KeyModifiers::NONE, KeyCode::Char('q'))),
            Some(Msg::InsertChar('q'))
        );
        assert_eq!(
            key_to_msg(&app, &key(KeyModifiers::SHIFT, KeyCode::Char('A'))),
            Some(Msg::InsertChar('A'))
        );
    }

    #[test]
    fn q_quits_before_ready() {
        let app = AppState::default();
        assert_eq!(
            key_to_msg(&app, &key(KeyModifiers::NONE, KeyCode::Char('q'))),
            Some(Msg::Quit)
        );
        assert_eq!(key_to_msg(&app, &key(KeyModifiers::NONE, KeyCode::Char('x'))), None);
    }

    #[test]
    fn esc_clears_then_quits() {
        let mut app = ready();
        app.search_query = "ab".into();
        let esc = key(KeyModifiers::NONE, KeyCode::Esc);
        assert_eq!(key_to_msg(&app, &esc), Some(Msg::ClearQuery));
        app.search_query.clear();
        assert_eq!(key_to_msg(&app, &esc), Some(Msg::Quit));
    }

    #[test]
    fn control_chords_resolve_through_the_table() {
        let app = ready();
        assert_eq!(
            key_to_msg(&app, &key(KeyModifiers::CONTROL, KeyCode::Char('c'))),
            Some(Msg::Quit)
        );
        assert_eq!(
            key_to_msg(&app, &key(KeyModifiers::CONTROL, KeyCode::Char('u'))),
            Some(Msg::ClearQuery)
        );
        assert_eq!(key_to_msg(&app, &key(KeyModifiers::CONTROL, KeyCode::Char('z'))), None);
    }

    #[test]
    fn rebinding_overrides_defaults() {
        let mut app = ready();
        app.keymap
            .bind(KeyModifiers::CONTROL, KeyCode::Char('k'), KeyAction::MoveUp);
        assert_eq!(
            key_to_msg(&app, &key(KeyModifiers::CONTROL, KeyCode::Char('k'))),
            Some(Msg::SelectPrev)
        );
        assert_eq!(app.keymap.keys_for(KeyAction::MoveUp), ["Ctrl+k", "Ctrl+p", "Up"]);
    }

    #[test]
    fn format_key_names() {
        assert_eq!(Keymap::format_key(KeyModifiers::CONTROL, KeyCode::Char('u')), "Ctrl+u");
        assert_eq!(Keymap::format_key(KeyModifiers::NONE, KeyCode::PageDown), "PgDn");
    }
}
