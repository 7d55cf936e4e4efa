//! Greeting resource served under `greeting://{name}`.

pub const GREETING_SCHEME: &str = "greeting://";
pub const GREETING_URI_TEMPLATE: &str = "greeting://{name}";

/// Get a personalized greeting.
pub fn get_greeting(name: &str) -> String {
    format!("Hello, {}!", name)
}

/// Extract the name from a `greeting://{name}` URI.
///
/// The name is taken verbatim and must be a single non-empty path segment.
pub fn parse_greeting_uri(uri: &str) -> Option<&str> {
    uri.strip_prefix(GREETING_SCHEME)
        .filter(|name| !name.is_empty() && !name.contains('/'))
}
