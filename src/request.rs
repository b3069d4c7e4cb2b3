//! The validated onboarding request.
//!
//! Raw CLI strings go in, a fully validated [`OnboardingRequest`] comes out.
//! Every check here runs before the first external command, so a bad
//! invocation never touches the multisite installation.

use std::sync::LazyLock;

use regex::Regex;

use crate::cli::PersonArgs;
use crate::error::ValidationError;
use crate::slug;

/// Service plan selected by the operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Plan {
    /// Full provisioning: content rewrite, widgets, social media, footer.
    FullService,
    /// Bare site: credentials and maintenance mode only.
    Minimal,
}

impl Plan {
    pub fn as_str(&self) -> &'static str {
        match self {
            Plan::FullService => "full-service",
            Plan::Minimal => "minimal",
        }
    }

    fn parse(value: &str) -> Result<Self, ValidationError> {
        match value.to_lowercase().as_str() {
            "full-service" => Ok(Plan::FullService),
            "minimal" => Ok(Plan::Minimal),
            _ => Err(ValidationError::InvalidPlan {
                value: value.to_string(),
            }),
        }
    }
}

/// Site language. The multisite hosts one person template per language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    De,
    Fr,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::De => "de",
            Language::Fr => "fr",
        }
    }

    fn parse(value: &str) -> Result<Self, ValidationError> {
        match value.to_lowercase().as_str() {
            "de" => Ok(Language::De),
            "fr" => Ok(Language::Fr),
            _ => Err(ValidationError::InvalidLanguage {
                value: value.to_string(),
            }),
        }
    }
}

/// Content fields applied only under the full-service plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteProfile {
    pub city: String,
    /// Blog tagline, e.g. "Petra Muster in den Nationalrat".
    pub tagline: String,
    pub party_name: String,
    pub party_url: String,
    pub facebook_url: Option<String>,
    /// Bare handle, normalized from whatever the operator pasted.
    pub twitter_handle: Option<String>,
    pub instagram_url: Option<String>,
}

/// A validated request to onboard one person site.
///
/// Immutable once built; values derived during the run (site URL, generated
/// password) are produced into the final report instead of being written
/// back here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OnboardingRequest {
    pub plan: Plan,
    pub language: Language,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub admin_email: String,
    /// Present iff `plan` is full-service.
    pub profile: Option<SiteProfile>,
}

impl OnboardingRequest {
    /// Validate raw CLI arguments into a request, or fail naming the
    /// offending option.
    pub fn from_args(args: &PersonArgs) -> Result<Self, ValidationError> {
        let plan = Plan::parse(require(&args.plan, "plan")?)?;
        let language = Language::parse(require(&args.lang, "lang")?)?;

        let first_name = slug::capitalize_first(require(&args.first_name, "first-name")?);
        let last_name = slug::capitalize_first(require(&args.last_name, "last-name")?);
        let email = validate_email(require(&args.email, "email")?, "email")?;
        let admin_email = validate_email(require(&args.admin_email, "admin-email")?, "admin-email")?;

        let profile = match plan {
            Plan::FullService => Some(SiteProfile {
                city: require(&args.city, "city")?.to_string(),
                tagline: require(&args.tagline, "tagline")?.to_string(),
                party_name: require(&args.party_name, "party-name")?.to_string(),
                party_url: validate_url(require(&args.party_url, "party-url")?, "party-url")?,
                facebook_url: optional(&args.facebook_url)
                    .map(|url| validate_url(url, "facebook-url"))
                    .transpose()?,
                twitter_handle: optional(&args.twitter).map(normalize_social_handle),
                instagram_url: optional(&args.instagram_url)
                    .map(|url| validate_url(url, "instagram-url"))
                    .transpose()?,
            }),
            Plan::Minimal => {
                forbid_for_minimal(&args.city, "city")?;
                forbid_for_minimal(&args.tagline, "tagline")?;
                forbid_for_minimal(&args.party_name, "party-name")?;
                forbid_for_minimal(&args.party_url, "party-url")?;
                forbid_for_minimal(&args.facebook_url, "facebook-url")?;
                forbid_for_minimal(&args.twitter, "twitter")?;
                forbid_for_minimal(&args.instagram_url, "instagram-url")?;
                None
            }
        };

        Ok(Self {
            plan,
            language,
            first_name,
            last_name,
            email,
            admin_email,
            profile,
        })
    }

    /// Display name, e.g. "Petra Muster".
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Site slug derived from the concatenated names, matching what the
    /// installation produces when the template site is duplicated.
    pub fn site_slug(&self) -> String {
        slug::slugify(&format!("{}{}", self.first_name, self.last_name))
    }

    /// Login name on the new site: the slug without hyphens.
    pub fn username(&self) -> String {
        self.site_slug().replace('-', "")
    }
}

// ── Field checks ────────────────────────────────────────────────────

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("static email pattern")
});

static URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://[^\s/]+[^\s]*$").expect("static url pattern"));

/// Return the trimmed value of a required option, or fail naming it.
fn require<'a>(value: &'a Option<String>, option: &str) -> Result<&'a str, ValidationError> {
    match value {
        None => Err(ValidationError::MissingOption {
            option: option.to_string(),
        }),
        Some(raw) => {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                Err(ValidationError::BlankOption {
                    option: option.to_string(),
                })
            } else {
                Ok(trimmed)
            }
        }
    }
}

/// Trimmed value of an optional option; blank counts as absent.
fn optional(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|trimmed| !trimmed.is_empty())
}

/// Reject full-service-only options under the minimal plan.
fn forbid_for_minimal(value: &Option<String>, option: &str) -> Result<(), ValidationError> {
    if optional(value).is_some() {
        return Err(ValidationError::NotAllowedForPlan {
            option: option.to_string(),
        });
    }
    Ok(())
}

/// Check address syntax and lowercase the result.
fn validate_email(value: &str, option: &str) -> Result<String, ValidationError> {
    let email = value.to_lowercase();
    if !EMAIL_RE.is_match(&email) {
        return Err(ValidationError::InvalidEmail {
            option: option.to_string(),
            value: value.to_string(),
        });
    }
    Ok(email)
}

/// Check http(s) URL syntax.
fn validate_url(value: &str, option: &str) -> Result<String, ValidationError> {
    if !URL_RE.is_match(value) {
        return Err(ValidationError::InvalidUrl {
            option: option.to_string(),
            value: value.to_string(),
        });
    }
    Ok(value.to_string())
}

/// Reduce a pasted Twitter/X value to the bare handle.
///
/// Accepts `https://twitter.com/foo`, `www.twitter.com/foo/`, `x.com/foo`,
/// `@foo`, or already-bare `foo`.
pub fn normalize_social_handle(raw: &str) -> String {
    let mut handle = raw.trim();

    for scheme in ["https://", "http://"] {
        if let Some(rest) = handle.strip_prefix(scheme) {
            handle = rest;
            break;
        }
    }
    if let Some(rest) = handle.strip_prefix("www.") {
        handle = rest;
    }
    for domain in ["twitter.com/", "x.com/"] {
        if let Some(rest) = handle.strip_prefix(domain) {
            handle = rest;
            break;
        }
    }
    handle = handle.strip_prefix('@').unwrap_or(handle);

    let end = handle
        .find(['/', '?', '#'])
        .unwrap_or(handle.len());
    handle[..end].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_args() -> PersonArgs {
        PersonArgs {
            plan: Some("full-service".into()),
            lang: Some("de".into()),
            first_name: Some("petra".into()),
            last_name: Some("muster".into()),
            email: Some("Petra.Muster@Example.com".into()),
            admin_email: Some("admin@example.com".into()),
            city: Some("Bern".into()),
            tagline: Some("Petra Muster in den Nationalrat".into()),
            party_name: Some("GRÜNE Kt. Bern".into()),
            party_url: Some("https://www.gruenebern.ch".into()),
            facebook_url: Some("https://www.facebook.com/petramuster".into()),
            twitter: Some("https://twitter.com/petramuster".into()),
            instagram_url: Some("https://www.instagram.com/petramuster".into()),
            yes: false,
        }
    }

    fn minimal_args() -> PersonArgs {
        PersonArgs {
            plan: Some("minimal".into()),
            lang: Some("fr".into()),
            first_name: Some("Claude".into()),
            last_name: Some("Rochat".into()),
            email: Some("claude.rochat@example.com".into()),
            admin_email: Some("admin@example.com".into()),
            city: None,
            tagline: None,
            party_name: None,
            party_url: None,
            facebook_url: None,
            twitter: None,
            instagram_url: None,
            yes: false,
        }
    }

    #[test]
    fn full_service_request_accepted() {
        let request = OnboardingRequest::from_args(&full_args()).unwrap();
        assert_eq!(request.plan, Plan::FullService);
        assert_eq!(request.language, Language::De);
        assert_eq!(request.first_name, "Petra");
        assert_eq!(request.last_name, "Muster");
        assert_eq!(request.email, "petra.muster@example.com");

        let profile = request.profile.expect("full-service profile");
        assert_eq!(profile.city, "Bern");
        assert_eq!(profile.twitter_handle.as_deref(), Some("petramuster"));
    }

    #[test]
    fn minimal_request_has_no_profile() {
        let request = OnboardingRequest::from_args(&minimal_args()).unwrap();
        assert_eq!(request.plan, Plan::Minimal);
        assert_eq!(request.language, Language::Fr);
        assert!(request.profile.is_none());
    }

    #[test]
    fn missing_required_option_names_it() {
        let mut args = minimal_args();
        args.first_name = None;
        let err = OnboardingRequest::from_args(&args).unwrap_err();
        assert_eq!(
            err,
            ValidationError::MissingOption {
                option: "first-name".into()
            }
        );
    }

    #[test]
    fn blank_required_option_rejected() {
        let mut args = minimal_args();
        args.last_name = Some("   ".into());
        let err = OnboardingRequest::from_args(&args).unwrap_err();
        assert_eq!(
            err,
            ValidationError::BlankOption {
                option: "last-name".into()
            }
        );
    }

    #[test]
    fn unknown_plan_lists_allowed_values() {
        let mut args = minimal_args();
        args.plan = Some("gold".into());
        let err = OnboardingRequest::from_args(&args).unwrap_err();
        assert!(err.to_string().contains("full-service, minimal"), "{err}");
    }

    #[test]
    fn unknown_language_lists_allowed_values() {
        let mut args = minimal_args();
        args.lang = Some("it".into());
        let err = OnboardingRequest::from_args(&args).unwrap_err();
        assert!(err.to_string().contains("de, fr"), "{err}");
    }

    #[test]
    fn malformed_email_rejected() {
        let mut args = minimal_args();
        args.email = Some("not-an-email".into());
        let err = OnboardingRequest::from_args(&args).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidEmail { .. }));
    }

    #[test]
    fn malformed_url_rejected() {
        let mut args = full_args();
        args.party_url = Some("ht!tp://bad".into());
        let err = OnboardingRequest::from_args(&args).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidUrl { .. }));
    }

    #[test]
    fn valid_url_accepted() {
        assert_eq!(
            validate_url("https://www.gruenebern.ch", "party-url").unwrap(),
            "https://www.gruenebern.ch"
        );
    }

    #[test]
    fn social_handle_normalized_from_all_shapes() {
        assert_eq!(normalize_social_handle("https://twitter.com/foo"), "foo");
        assert_eq!(normalize_social_handle("www.twitter.com/foo/"), "foo");
        assert_eq!(normalize_social_handle("foo"), "foo");
        assert_eq!(normalize_social_handle("@foo"), "foo");
        assert_eq!(normalize_social_handle("x.com/foo?lang=de"), "foo");
    }

    #[test]
    fn full_service_fields_required_under_full_service() {
        let mut args = full_args();
        args.city = None;
        let err = OnboardingRequest::from_args(&args).unwrap_err();
        assert_eq!(
            err,
            ValidationError::MissingOption {
                option: "city".into()
            }
        );
    }

    #[test]
    fn social_fields_optional_under_full_service() {
        let mut args = full_args();
        args.facebook_url = None;
        args.twitter = None;
        args.instagram_url = None;
        let request = OnboardingRequest::from_args(&args).unwrap();
        let profile = request.profile.unwrap();
        assert!(profile.facebook_url.is_none());
        assert!(profile.twitter_handle.is_none());
        assert!(profile.instagram_url.is_none());
    }

    #[test]
    fn full_service_option_rejected_under_minimal() {
        let mut args = minimal_args();
        args.city = Some("Bern".into());
        let err = OnboardingRequest::from_args(&args).unwrap_err();
        assert_eq!(
            err,
            ValidationError::NotAllowedForPlan {
                option: "city".into()
            }
        );
    }

    #[test]
    fn slug_and_username_derivation() {
        let request = OnboardingRequest::from_args(&full_args()).unwrap();
        assert_eq!(request.full_name(), "Petra Muster");
        assert_eq!(request.site_slug(), "petramuster");
        assert_eq!(request.username(), "petramuster");
    }

    #[test]
    fn hyphenated_first_name_keeps_hyphen_in_slug_only() {
        let mut args = minimal_args();
        args.first_name = Some("Anne-Marie".into());
        args.last_name = Some("Graf".into());
        let request = OnboardingRequest::from_args(&args).unwrap();
        assert_eq!(request.site_slug(), "anne-mariegraf");
        assert_eq!(request.username(), "annemariegraf");
    }

    #[test]
    fn umlauts_fold_in_slug() {
        let mut args = minimal_args();
        args.first_name = Some("Jürg".into());
        args.last_name = Some("Müller".into());
        let request = OnboardingRequest::from_args(&args).unwrap();
        assert_eq!(request.site_slug(), "juergmueller");
    }
}
