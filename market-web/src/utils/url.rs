//! URL utility functions for reading query parameters

use std::collections::HashMap;

use web_sys::window;

/// Split a `?a=1&b=two` query string into decoded pairs.
///
/// A key without `=` maps to an empty string. Later duplicates win.
pub fn parse_query(search: &str) -> HashMap<String, String> {
    let query_string = search.strip_prefix('?').unwrap_or(search);

    query_string
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            let decoded = urlencoding::decode(value)
                .map(|v| v.into_owned())
                .unwrap_or_else(|_| value.to_string());
            (key.to_string(), decoded)
        })
        .collect()
}

/// Query parameters of the current page, read from `window.location.search`
pub fn get_query_params() -> HashMap<String, String> {
    window()
        .and_then(|w| w.location().search().ok())
        .map(|search| parse_query(&search))
        .unwrap_or_default()
}
