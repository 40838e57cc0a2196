use crate::app::AppState;
use crate::remote::UserRecord;

/// Recompute `app.users` from `app.users_all` for the current query.
///
/// The selection stays on the same user when it is still visible, otherwise it
/// moves to the first row.
pub fn apply_search(app: &mut AppState) {
    let selected_id = app.selected_user().map(|u| u.id.clone());
    app.users = filter(&app.users_all, &app.search_query);
    app.selected_user_index = selected_id
        .and_then(|id| app.users.iter().position(|u| u.id == id))
        .unwrap_or(0);
}

/// Whether `user` matches an already-lowercased query.
///
/// Names are compared case-insensitively; the email is compared as stored, so
/// an address with uppercase letters never matches a lowercased query on those
/// letters.
pub fn matches(user: &UserRecord, lowered_query: &str) -> bool {
    user.first_name.to_lowercase().contains(lowered_query)
        || user.last_name.to_lowercase().contains(lowered_query)
        || user.email.contains(lowered_query)
}

/// Derive the visible list from the full list.
///
/// Always rescans `users_all`; the result keeps the original order.
pub fn filter(users_all: &[UserRecord], query: &str) -> Vec<UserRecord> {
    let q = query.to_lowercase();
    users_all
        .iter()
        .filter(|u| matches(u, &q))
        .cloned()
        .collect()
}
