//! Shared UI components (header, status bar, loading and error screens).
//!
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::keymap::KeyAction;
use crate::app::{AppState, LoadState};

const SPINNER_FRAMES: [&str; 10] = [
    "⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏",
];

pub fn spinner_symbol(frame: usize) -> &'static str {
    SPINNER_FRAMES[frame % SPINNER_FRAMES.len()]
}

fn header_block(app: &AppState, title: &'static str) -> Block<'static> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.border))
}

/// Title-only header, used while the search input is suppressed.
pub fn render_title(f: &mut Frame, area: Rect, app: &AppState) {
    let p = Paragraph::new("Remote user directory")
        .block(header_block(app, "user-search"))
        .style(Style::default().fg(app.theme.header_fg).bg(app.theme.header_bg));
    f.render_widget(p, area);
}

/// The search input, bound to the query.
pub fn render_search_bar(f: &mut Frame, area: Rect, app: &AppState) {
    let line = if app.search_query.is_empty() {
        Line::from(vec![
            Span::raw("> "),
            Span::styled("search", Style::default().fg(app.theme.muted)),
        ])
    } else {
        Line::from(vec![
            Span::raw("> "),
            Span::styled(app.search_query.clone(), Style::default().fg(app.theme.text)),
            Span::styled("▏", Style::default().fg(app.theme.accent)),
        ])
    };
    let p = Paragraph::new(line)
        .block(header_block(app, "Search"))
        .style(Style::default().fg(app.theme.header_fg).bg(app.theme.header_bg));
    f.render_widget(p, area);
}

pub fn render_loading(f: &mut Frame, area: Rect, app: &AppState) {
    let rect = centered_rect(30, 3, area);
    let text = format!("{} Loading users…", spinner_symbol(app.spinner_frame));
    let p = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(app.theme.accent).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.border)),
        );
    f.render_widget(p, rect);
}

pub fn render_error(f: &mut Frame, area: Rect, app: &AppState) {
    let rect = centered_rect(36, 3, area);
    let p = Paragraph::new("Error in fetching data")
        .alignment(Alignment::Center)
        .style(Style::default().fg(app.theme.error).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.error)),
        );
    f.render_widget(p, rect);
}

/// Render the bottom status bar with state, counts and key hints.
pub fn render_status_bar(f: &mut Frame, area: Rect, app: &AppState) {
    let hint = |action: KeyAction| app.keymap.keys_for(action).join("/");
    // outside Ready, `q` and Cancel quit too (see `key_to_msg`)
    let quit_hint = format!("q/{}/{}", hint(KeyAction::Cancel), hint(KeyAction::Quit));
    let msg = match app.load_state {
        LoadState::Loading => format!("loading  {quit_hint}: quit"),
        LoadState::Error => format!("failed  {quit_hint}: quit"),
        LoadState::Ready => format!(
            "shown:{}/{}  {}: move  {}: page  {}: clear  {}: quit",
            app.users.len(),
            app.users_all.len(),
            hint(KeyAction::MoveUp),
            hint(KeyAction::PageDown),
            hint(KeyAction::ClearQuery),
            hint(KeyAction::Quit),
        ),
    };
    let p = Paragraph::new(msg).style(
        Style::default()
            .fg(app.theme.status_fg)
            .bg(app.theme.status_bg),
    );
    f.render_widget(p, area);
}

/// A `width` x `height` rect centered in `area`, clipped to it.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect {
        x,
        y,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}
