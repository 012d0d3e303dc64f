//! Console verbosity switch read from the page address.

use tracing::Level;
use url::Url;

pub const DEBUG_PARAM: &str = "debug";

/// `?debug` anywhere in the query string turns on debug output; everything
/// else, including an unparsable address, logs at info.
pub fn console_level(href: &str) -> Level {
    let debug = Url::parse(href)
        .map(|url| url.query_pairs().any(|(key, _)| key == DEBUG_PARAM))
        .unwrap_or(false);

    if debug {
        Level::DEBUG
    } else {
        Level::INFO
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_address_logs_at_info() {
        assert_eq!(console_level("https://example.com/"), Level::INFO);
        assert_eq!(console_level("https://example.com/?search=travel"), Level::INFO);
    }

    #[test]
    fn debug_key_raises_level() {
        assert_eq!(console_level("https://example.com/?debug"), Level::DEBUG);
        assert_eq!(console_level("https://example.com/?search=travel&debug=1"), Level::DEBUG);
    }

    #[test]
    fn lookalike_keys_and_bad_addresses_stay_at_info() {
        assert_eq!(console_level("https://example.com/?debugging"), Level::INFO);
        assert_eq!(console_level("https://example.com/#debug"), Level::INFO);
        assert_eq!(console_level("not a url"), Level::INFO);
    }
}
