//! Typed wp-cli command descriptions.
//!
//! A [`WpCommand`] is an argv vector plus an optional target site. Building
//! the vector here is the only escaping boundary: execution hands the args
//! to the OS one by one, no shell in between. The [`Display`] impl quotes
//! purely for log readability.

use std::borrow::Cow;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WpCommand {
    site_url: Option<String>,
    args: Vec<String>,
}

impl WpCommand {
    fn global<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            site_url: None,
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    fn for_site<I, S>(site_url: &str, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            site_url: Some(site_url.to_string()),
            ..Self::global(args)
        }
    }

    /// Args in execution order, with the `--url` scope appended when the
    /// command targets one site of the network.
    pub fn to_argv(&self) -> Vec<String> {
        let mut argv = self.args.clone();
        if let Some(site_url) = &self.site_url {
            argv.push(format!("--url={site_url}"));
        }
        argv
    }

    // ── Constructors, one per collaborator command ──────────────────

    /// List every site of the network as JSON records.
    pub fn site_list() -> Self {
        Self::global(["site", "list", "--fields=url", "--format=json"])
    }

    /// Create the person's administrator account on their site. Output
    /// carries the generated password.
    pub fn user_create(
        site_url: &str,
        username: &str,
        email: &str,
        display_name: &str,
        first_name: &str,
        last_name: &str,
    ) -> Self {
        Self::for_site(
            site_url,
            [
                "user".to_string(),
                "create".to_string(),
                username.to_string(),
                email.to_string(),
                "--role=administrator".to_string(),
                format!("--display_name={display_name}"),
                format!("--user_nicename={username}"),
                format!("--first_name={first_name}"),
                format!("--last_name={last_name}"),
                "--send-email=false".to_string(),
            ],
        )
    }

    pub fn option_update(site_url: &str, key: &str, value: &str) -> Self {
        Self::for_site(site_url, ["option", "update", key, value])
    }

    /// Update one path inside a serialized option value.
    pub fn option_patch_update(site_url: &str, key: &str, path: &[&str], value: &str) -> Self {
        let mut args = vec!["option", "patch", "update", key];
        args.extend_from_slice(path);
        args.push(value);
        Self::for_site(site_url, args)
    }

    /// Delete one path inside a serialized option value.
    pub fn option_patch_delete(site_url: &str, key: &str, path: &[&str]) -> Self {
        let mut args = vec!["option", "patch", "delete", key];
        args.extend_from_slice(path);
        Self::for_site(site_url, args)
    }

    pub fn post_meta_update(site_url: &str, post_id: u64, key: &str, value: &str) -> Self {
        let id = post_id.to_string();
        Self::for_site(
            site_url,
            ["post", "meta", "update", id.as_str(), key, value],
        )
    }

    /// Delete a post skipping the trash.
    pub fn post_delete(site_url: &str, post_id: u64) -> Self {
        let id = post_id.to_string();
        Self::for_site(site_url, ["post", "delete", id.as_str(), "--force"])
    }

    /// Replace a string across the site's tables.
    pub fn search_replace(site_url: &str, from: &str, to: &str) -> Self {
        Self::for_site(site_url, ["search-replace", from, to])
    }

    pub fn cache_flush(site_url: &str) -> Self {
        Self::for_site(site_url, ["cache", "flush"])
    }

    pub fn plugin_activate(site_url: &str, plugin: &str) -> Self {
        Self::for_site(site_url, ["plugin", "activate", plugin])
    }
}

impl fmt::Display for WpCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "wp")?;
        for arg in self.to_argv() {
            write!(f, " {}", shell_quote(&arg))?;
        }
        Ok(())
    }
}

/// Quote an arg for display if it contains anything a shell would chew on.
fn shell_quote(arg: &str) -> Cow<'_, str> {
    let plain = !arg.is_empty()
        && arg
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "_-=./:@+,".contains(c));
    if plain {
        Cow::Borrowed(arg)
    } else {
        Cow::Owned(format!("'{}'", arg.replace('\'', r"'\''")))
    }
}
