// Unit tests for user-search
// These tests work with the public API only

#[cfg(test)]
mod search_tests {
    use pretty_assertions::assert_eq;
    use user_search::search::{filter, matches};
    use user_search::UserRecord;

    fn create_test_user(id: &str, first: &str, last: &str, email: &str) -> UserRecord {
        UserRecord {
            id: id.to_string(),
            first_name: first.to_string(),
            last_name: last.to_string(),
            email: email.to_string(),
            thumbnail_url: format!("https://img.test/{}.jpg", id),
        }
    }

    fn dataset() -> Vec<UserRecord> {
        vec![
            create_test_user("ada", "Ada", "Lovelace", "ada@x.com"),
            create_test_user("bob", "Bob", "Stone", "bob@y.com"),
        ]
    }

    #[test]
    fn test_last_name_substring() {
        let d = dataset();
        assert_eq!(filter(&d, "lov"), vec![d[0].clone()]);
    }

    #[test]
    fn test_email_substring() {
        let d = dataset();
        assert_eq!(filter(&d, "y.com"), vec![d[1].clone()]);
    }

    #[test]
    fn test_no_match() {
        assert!(filter(&dataset(), "z").is_empty());
    }

    #[test]
    fn test_empty_query_is_identity() {
        let d = dataset();
        assert_eq!(filter(&d, ""), d);
    }

    #[test]
    fn test_first_name_any_case() {
        let d = dataset();
        assert_eq!(filter(&d, "ada").len(), 1);
        assert_eq!(filter(&d, "ADA").len(), 1);
        assert_eq!(filter(&d, "aDa")[0].id, "ada");
    }

    #[test]
    fn test_uppercase_email_not_matched_by_lowercase_query() {
        let d = vec![create_test_user("bob", "Robert", "Smith", "Bob@X.com")];
        assert!(filter(&d, "bob@x.com").is_empty());
        assert!(!matches(&d[0], "bob@x.com"));
    }

    #[test]
    fn test_uppercase_query_never_matches_through_email() {
        // the query is lowercased, the email is not
        let d = vec![create_test_user("q", "Quinn", "Ray", "Q@EXAMPLE.COM")];
        assert!(filter(&d, "EXAMPLE").is_empty());
        assert_eq!(filter(&d, "QUINN").len(), 1);
    }

    #[test]
    fn test_filter_leaves_input_untouched() {
        let d = dataset();
        let before = d.clone();
        let _ = filter(&d, "bob");
        assert_eq!(d, before);
    }
}

#[cfg(test)]
mod state_tests {
    use user_search::app::update::{update, Msg};
    use user_search::app::{AppState, LoadState};
    use user_search::{LoadError, UserRecord};

    fn user(id: &str, first: &str) -> UserRecord {
        UserRecord {
            id: id.to_string(),
            first_name: first.to_string(),
            last_name: "Tester".to_string(),
            email: format!("{}@test.dev", id),
            thumbnail_url: String::new(),
        }
    }

    #[test]
    fn test_initial_state_is_loading() {
        let app = AppState::default();
        assert_eq!(app.load_state, LoadState::Loading);
    }

    #[test]
    fn test_loading_to_ready() {
        let app = update(
            AppState::default(),
            Msg::Loaded(Ok(vec![user("a", "Al"), user("b", "Bea")])),
        );
        assert_eq!(app.load_state, LoadState::Ready);
        assert_eq!(app.users.len(), 2);
        assert_eq!(app.users[0].id, "a");
        assert_eq!(app.users[1].id, "b");
    }

    #[test]
    fn test_loading_to_error() {
        let app = update(AppState::default(), Msg::Loaded(Err(LoadError::new("offline"))));
        assert_eq!(app.load_state, LoadState::Error);
        assert!(app.users.is_empty());
        assert!(app.users_all.is_empty());
    }

    #[test]
    fn test_query_is_suppressed_on_error() {
        let app = update(AppState::default(), Msg::Loaded(Err(LoadError::new("offline"))));
        let app = update(app, Msg::InsertChar('a'));
        let app = update(app, Msg::SelectNext);
        assert!(app.search_query.is_empty());
        assert_eq!(app.selected_user_index, 0);
        assert_eq!(app.load_state, LoadState::Error);
    }

    #[test]
    fn test_full_list_survives_filtering() {
        let app = update(
            AppState::default(),
            Msg::Loaded(Ok(vec![user("a", "Al"), user("b", "Bea")])),
        );
        let full = app.users_all.clone();
        let app = update(app, Msg::QueryChanged("bea".to_string()));
        assert_eq!(app.users.len(), 1);
        assert_eq!(app.users_all, full);
    }
}
