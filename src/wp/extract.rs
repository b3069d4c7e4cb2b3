//! Scraping structured facts out of wp-cli's human-oriented output.

use std::sync::LazyLock;

use regex::Regex;

static PASSWORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Password: (\S+)").expect("static password pattern"));

/// Pull the generated password out of `user create` output.
///
/// wp-cli prints it as `Password: <token>` on success; anything else
/// (user exists, site unreachable) yields `None`.
pub fn extract_password(output: &str) -> Option<String> {
    PASSWORD_RE
        .captures(output)
        .map(|captures| captures[1].to_string())
}
