//! Behavior of the "chapter not found" page.

use std::time::Duration;
use url::Url;

pub const SEARCH_PARAM: &str = "search";
pub const SEARCH_FOCUS_DELAY: Duration = Duration::from_millis(1_000);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shortcut {
    Home,
    FocusSearch,
    Back,
}

/// Maps a `KeyboardEvent.key` value. Letters are ignored while the user is
/// typing into a field so the search box stays usable.
pub fn shortcut_for_key(key: &str, typing_in_field: bool) -> Option<Shortcut> {
    if key == "Escape" {
        return Some(Shortcut::Back);
    }
    if typing_in_field {
        return None;
    }

    match key {
        "h" | "H" => Some(Shortcut::Home),
        "s" | "S" => Some(Shortcut::FocusSearch),
        _ => None,
    }
}

pub fn normalize_query(raw: &str) -> Option<String> {
    let query = raw.trim().to_lowercase();
    (!query.is_empty()).then_some(query)
}

/// Home page URL that pre-fills the blog search with `raw`, or `None` for a
/// blank query.
pub fn search_redirect(origin: &str, raw: &str) -> Option<String> {
    let query = normalize_query(raw)?;
    let mut home = Url::parse(origin).ok()?.join("/").ok()?;
    home.query_pairs_mut().append_pair(SEARCH_PARAM, &query);
    Some(home.to_string())
}

/// Reads the `search` parameter a redirect from this page left behind.
pub fn search_from_location(href: &str) -> Option<String> {
    let url = Url::parse(href).ok()?;
    let value = url
        .query_pairs()
        .find(|(key, _)| key == SEARCH_PARAM)
        .map(|(_, value)| value.into_owned())?;
    normalize_query(&value)
}
