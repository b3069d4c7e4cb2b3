//! Configuration types.

use crate::request::Language;

/// Blog id of the person template site to duplicate, German network.
pub const PERSON_TEMPLATE_SITE_DE: u64 = 4;
/// Blog id of the person template site to duplicate, French network.
pub const PERSON_TEMPLATE_SITE_FR: u64 = 8;

/// Post id of the front page on a freshly duplicated person site.
pub const PERSON_FRONT_PAGE_ID: u64 = 513;

/// Post ids of the placeholder "offer" pages removed on every new site.
pub const PERSON_OFFER_PAGE_IDS: [u64; 3] = [653, 624, 648];

/// Orchestrator configuration, built from environment variables.
#[derive(Debug, Clone)]
pub struct OnboardConfig {
    /// Binary of the external site-management tool.
    pub wp_bin: String,
    /// Base URL of the multisite network, no trailing slash.
    pub network_url: String,
}

impl OnboardConfig {
    /// Build config from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        let wp_bin = std::env::var("ONBOARD_WP_BIN").unwrap_or_else(|_| "wp".to_string());
        let network_url = std::env::var("ONBOARD_NETWORK_URL")
            .unwrap_or_else(|_| "https://www.gruene.ch".to_string());

        Self {
            wp_bin,
            network_url: network_url.trim_end_matches('/').to_string(),
        }
    }

    /// URL of the network admin page where the operator duplicates sites.
    pub fn network_admin_url(&self) -> String {
        format!("{}/wp-admin/network/sites.php", self.network_url)
    }

    /// Blog id of the person template site for the given language.
    pub fn template_site_id(&self, language: Language) -> u64 {
        match language {
            Language::De => PERSON_TEMPLATE_SITE_DE,
            Language::Fr => PERSON_TEMPLATE_SITE_FR,
        }
    }
}

impl Default for OnboardConfig {
    fn default() -> Self {
        Self {
            wp_bin: "wp".to_string(),
            network_url: "https://www.gruene.ch".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_points_at_network() {
        let config = OnboardConfig::default();
        assert_eq!(config.wp_bin, "wp");
        assert_eq!(config.network_url, "https://www.gruene.ch");
        assert_eq!(
            config.network_admin_url(),
            "https://www.gruene.ch/wp-admin/network/sites.php"
        );
    }

    #[test]
    fn template_site_per_language() {
        let config = OnboardConfig::default();
        assert_eq!(config.template_site_id(Language::De), 4);
        assert_eq!(config.template_site_id(Language::Fr), 8);
    }
}
