//! The onboarding flow itself.
//!
//! [`Onboarder`] drives the wp-cli steps strictly in sequence; the command
//! runner and the confirmation prompt come in as trait objects so the whole
//! flow can run against scripted fakes.

pub mod email;
pub mod report;

use std::sync::Arc;

use secrecy::SecretString;
use tracing::info;

use crate::config::{
    OnboardConfig, PERSON_FRONT_PAGE_ID, PERSON_OFFER_PAGE_IDS,
};
use crate::error::OnboardError;
use crate::messages::{self, FOOTER_ADDRESS_TEMPLATE};
use crate::prompt::Confirmer;
use crate::request::{Language, OnboardingRequest, SiteProfile};
use crate::wp::{extract, site, CommandRunner, WpCommand};

use report::OnboardingReport;

/// Plugin slug providing the maintenance page.
const COMING_SOON_PLUGIN: &str = "coming-soon";
/// Serialized settings option of that plugin.
const COMING_SOON_OPTION: &str = "seed_csp4_settings_content";
/// Footer contact widget, one entry per social network.
const SOCIAL_OPTION: &str = "widget_supt_contact_widget-2_social_media";
/// The widget offers three slots.
const SOCIAL_SLOTS: usize = 3;

pub struct Onboarder {
    config: OnboardConfig,
    runner: Arc<dyn CommandRunner>,
    confirmer: Arc<dyn Confirmer>,
}

impl Onboarder {
    pub fn new(
        config: OnboardConfig,
        runner: Arc<dyn CommandRunner>,
        confirmer: Arc<dyn Confirmer>,
    ) -> Self {
        Self {
            config,
            runner,
            confirmer,
        }
    }

    /// Run the whole person flow and return the report to print.
    pub async fn onboard_person(
        &self,
        request: &OnboardingRequest,
    ) -> Result<OnboardingReport, OnboardError> {
        let site_url = self.resolve_site(request).await?;
        info!(site = %site_url, "site resolved");

        let password = self.create_user(request, &site_url).await?;
        info!(username = %request.username(), "administrator account created");

        self.runner
            .run(&WpCommand::option_update(
                &site_url,
                "admin_email",
                &request.admin_email,
            ))
            .await?;

        self.delete_offer_pages(&site_url).await?;
        self.enable_coming_soon(request.language, &site_url).await?;

        if let Some(profile) = &request.profile {
            self.apply_profile(request, profile, &site_url).await?;
            info!("site content personalized");
        }

        self.runner.run(&WpCommand::cache_flush(&site_url)).await?;

        Ok(OnboardingReport {
            full_name: request.full_name(),
            email: email::compose(request, &site_url),
            username: request.username(),
            password,
            site_url,
        })
    }

    // ── Steps ───────────────────────────────────────────────────────

    /// Find the person's site, walking the operator through a manual
    /// template duplication when it does not exist yet.
    async fn resolve_site(&self, request: &OnboardingRequest) -> Result<String, OnboardError> {
        let expected_url = self.expected_site_url(request);
        if let Some(url) = self.find_site(&expected_url).await? {
            return Ok(url);
        }

        self.print_duplication_instructions(request, &expected_url);
        let confirmed = self
            .confirmer
            .confirm("Duplicated and ready to continue?")
            .await
            .map_err(OnboardError::Prompt)?;
        if !confirmed {
            return Err(OnboardError::DuplicationDeclined);
        }

        match self.find_site(&expected_url).await? {
            Some(url) => Ok(url),
            None => Err(OnboardError::SiteNotFound { expected_url }),
        }
    }

    fn expected_site_url(&self, request: &OnboardingRequest) -> String {
        format!("{}/{}/", self.config.network_url, request.site_slug())
    }

    async fn find_site(&self, expected_url: &str) -> Result<Option<String>, OnboardError> {
        let output = self.runner.run(&WpCommand::site_list()).await?;
        let records = site::parse_site_list(&output)?;
        Ok(site::find_site_url(&records, expected_url))
    }

    fn print_duplication_instructions(&self, request: &OnboardingRequest, expected_url: &str) {
        println!("Site {expected_url} does not exist yet.");
        println!("Duplicate the template site first:");
        println!("  1. Open {}", self.config.network_admin_url());
        println!(
            "  2. Duplicate site {} to address \"{}\" with title \"{}\"",
            self.config.template_site_id(request.language),
            request.site_slug(),
            request.full_name()
        );
    }

    async fn create_user(
        &self,
        request: &OnboardingRequest,
        site_url: &str,
    ) -> Result<SecretString, OnboardError> {
        let output = self
            .runner
            .run(&WpCommand::user_create(
                site_url,
                &request.username(),
                &request.email,
                &request.full_name(),
                &request.first_name,
                &request.last_name,
            ))
            .await?;
        match extract::extract_password(&output) {
            Some(password) => Ok(SecretString::from(password)),
            None => Err(OnboardError::PasswordNotFound { output }),
        }
    }

    /// The template site ships service-offer pages that do not apply to
    /// person sites.
    async fn delete_offer_pages(&self, site_url: &str) -> Result<(), OnboardError> {
        for page_id in PERSON_OFFER_PAGE_IDS {
            self.runner
                .run(&WpCommand::post_delete(site_url, page_id))
                .await?;
        }
        Ok(())
    }

    /// Keep the site unpublished behind a localized maintenance page until
    /// the person is ready to launch.
    async fn enable_coming_soon(
        &self,
        language: Language,
        site_url: &str,
    ) -> Result<(), OnboardError> {
        let bundle = messages::bundle(language);
        self.runner
            .run(&WpCommand::plugin_activate(site_url, COMING_SOON_PLUGIN))
            .await?;
        for (path, value) in [
            ("status", "1"),
            ("page_title", bundle.coming_soon_page_title),
            ("headline", bundle.coming_soon_headline),
            ("description", ""),
            ("mode", "coming_soon"),
        ] {
            self.runner
                .run(&WpCommand::option_patch_update(
                    site_url,
                    COMING_SOON_OPTION,
                    &[path],
                    value,
                ))
                .await?;
        }
        Ok(())
    }

    /// Full-service content pass: tagline, campaign front page, footer
    /// widgets, social media and the placeholder rewrite.
    async fn apply_profile(
        &self,
        request: &OnboardingRequest,
        profile: &SiteProfile,
        site_url: &str,
    ) -> Result<(), OnboardError> {
        let bundle = messages::bundle(request.language);
        let full_name = request.full_name();

        self.runner
            .run(&WpCommand::option_update(
                site_url,
                "blogdescription",
                &profile.tagline,
            ))
            .await?;

        self.runner
            .run(&WpCommand::post_meta_update(
                site_url,
                PERSON_FRONT_PAGE_ID,
                "campaign_bars_headlines_green_0_bar",
                &full_name,
            ))
            .await?;
        let cta = bundle
            .cta_description
            .replace("{{first_name}}", &request.first_name);
        self.runner
            .run(&WpCommand::post_meta_update(
                site_url,
                PERSON_FRONT_PAGE_ID,
                "campaign_call_to_action_description",
                &cta,
            ))
            .await?;

        self.runner
            .run(&WpCommand::option_update(
                site_url,
                "widget_supt_link_list_widget-2_list_1_label",
                &profile.party_name,
            ))
            .await?;
        self.runner
            .run(&WpCommand::option_update(
                site_url,
                "widget_supt_link_list_widget-2_list_1_link",
                &profile.party_url,
            ))
            .await?;

        self.apply_social_slots(profile, site_url).await?;

        let address = FOOTER_ADDRESS_TEMPLATE
            .replace("{{full_name}}", &full_name)
            .replace("{{city}}", &profile.city)
            .replace("{{email}}", &request.email)
            .replace("{{send_email}}", bundle.send_email);
        self.runner
            .run(&WpCommand::option_update(
                site_url,
                "widget_supt_contact_widget-2_address",
                &address,
            ))
            .await?;

        for (from, to) in [
            (bundle.placeholder_full_name, full_name.as_str()),
            (bundle.placeholder_first_name, request.first_name.as_str()),
            (bundle.placeholder_email, request.email.as_str()),
        ] {
            self.runner
                .run(&WpCommand::search_replace(site_url, from, to))
                .await?;
        }
        Ok(())
    }

    /// Present networks fill the widget slots from index 0 up, leftover
    /// slots are deleted. Either way all three slots end up accounted for.
    async fn apply_social_slots(
        &self,
        profile: &SiteProfile,
        site_url: &str,
    ) -> Result<(), OnboardError> {
        let slots = social_slots(profile);
        for (index, slot) in slots.iter().enumerate() {
            let index_str = index.to_string();
            self.runner
                .run(&WpCommand::option_update(
                    site_url,
                    &format!("{SOCIAL_OPTION}_{index}_link"),
                    &slot.link,
                ))
                .await?;
            self.runner
                .run(&WpCommand::option_patch_update(
                    site_url,
                    SOCIAL_OPTION,
                    &[&index_str],
                    slot.network,
                ))
                .await?;
            self.runner
                .run(&WpCommand::option_patch_update(
                    site_url,
                    "wpseo_social",
                    &[slot.seo_field],
                    &slot.seo_value,
                ))
                .await?;
        }
        for index in slots.len()..SOCIAL_SLOTS {
            self.runner
                .run(&WpCommand::option_patch_delete(
                    site_url,
                    SOCIAL_OPTION,
                    &[&index.to_string()],
                ))
                .await?;
        }
        Ok(())
    }
}

/// Party sites still go through the old manual checklist.
pub fn onboard_party() -> Result<(), OnboardError> {
    Err(OnboardError::PartyNotImplemented)
}

struct SocialSlot {
    network: &'static str,
    link: String,
    seo_field: &'static str,
    seo_value: String,
}

/// Order is fixed: facebook, twitter, instagram. Absent networks drop out
/// and the rest close ranks.
fn social_slots(profile: &SiteProfile) -> Vec<SocialSlot> {
    let mut slots = Vec::new();
    if let Some(url) = &profile.facebook_url {
        slots.push(SocialSlot {
            network: "facebook",
            link: url.clone(),
            seo_field: "facebook_site",
            seo_value: url.clone(),
        });
    }
    if let Some(handle) = &profile.twitter_handle {
        slots.push(SocialSlot {
            network: "twitter",
            link: format!("https://twitter.com/{handle}"),
            seo_field: "twitter_site",
            seo_value: handle.clone(),
        });
    }
    if let Some(url) = &profile.instagram_url {
        slots.push(SocialSlot {
            network: "instagram",
            link: url.clone(),
            seo_field: "instagram_url",
            seo_value: url.clone(),
        });
    }
    slots
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> SiteProfile {
        SiteProfile {
            city: "Bern".into(),
            tagline: "Petra Muster in den Nationalrat".into(),
            party_name: "GRÜNE Kt. Bern".into(),
            party_url: "https://www.gruenebern.ch".into(),
            facebook_url: None,
            twitter_handle: None,
            instagram_url: None,
        }
    }

    #[test]
    fn all_networks_fill_all_slots() {
        let mut profile = profile();
        profile.facebook_url = Some("https://www.facebook.com/petra".into());
        profile.twitter_handle = Some("petramuster".into());
        profile.instagram_url = Some("https://www.instagram.com/petra".into());

        let slots = social_slots(&profile);
        let networks: Vec<_> = slots.iter().map(|slot| slot.network).collect();
        assert_eq!(networks, ["facebook", "twitter", "instagram"]);
    }

    #[test]
    fn missing_networks_close_ranks() {
        let mut profile = profile();
        profile.instagram_url = Some("https://www.instagram.com/petra".into());

        let slots = social_slots(&profile);
        assert_eq!(slots.len(), 1);
        assert_eq!(slots[0].network, "instagram");
    }

    #[test]
    fn twitter_slot_links_to_profile_and_keeps_bare_handle_for_seo() {
        let mut profile = profile();
        profile.twitter_handle = Some("petramuster".into());

        let slots = social_slots(&profile);
        assert_eq!(slots[0].link, "https://twitter.com/petramuster");
        assert_eq!(slots[0].seo_value, "petramuster");
    }
}
