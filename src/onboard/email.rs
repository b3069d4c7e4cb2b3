//! The welcome email the operator copies into their mail client.

use crate::messages;
use crate::request::OnboardingRequest;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WelcomeEmail {
    pub subject: String,
    pub body: String,
}

/// Fill the language bundle's template with the person's data.
pub fn compose(request: &OnboardingRequest, site_url: &str) -> WelcomeEmail {
    let bundle = messages::bundle(request.language);
    let links = format!("{site_url}\n{site_url}wp-admin");
    let body = bundle
        .welcome_body
        .replace("{{first_name}}", &request.first_name)
        .replace("{{links}}", &links)
        .replace("{{email}}", &request.email)
        .replace("{{support}}", bundle.support(request.plan));
    WelcomeEmail {
        subject: bundle.welcome_subject.to_string(),
        body,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::PersonArgs;

    fn request(plan: &str, lang: &str) -> OnboardingRequest {
        let args = PersonArgs {
            plan: Some(plan.into()),
            lang: Some(lang.into()),
            first_name: Some("Petra".into()),
            last_name: Some("Muster".into()),
            email: Some("petra.muster@example.com".into()),
            admin_email: Some("admin@example.com".into()),
            city: None,
            tagline: None,
            party_name: None,
            party_url: None,
            facebook_url: None,
            twitter: None,
            instagram_url: None,
            yes: false,
        };
        OnboardingRequest::from_args(&args).unwrap()
    }

    #[test]
    fn body_carries_links_and_login_email() {
        let email = compose(
            &request("minimal", "de"),
            "https://www.gruene.ch/petramuster/",
        );
        assert!(email.body.contains("Hallo Petra"));
        assert!(email.body.contains("https://www.gruene.ch/petramuster/\nhttps://www.gruene.ch/petramuster/wp-admin"));
        assert!(email.body.contains("petra.muster@example.com"));
        assert!(!email.body.contains("{{"), "unfilled placeholder: {}", email.body);
    }

    #[test]
    fn support_blurb_follows_plan_and_language() {
        let minimal = compose(
            &request("minimal", "fr"),
            "https://www.gruene.ch/petramuster/",
        );
        assert!(minimal.body.contains("Bonjour Petra"));
        assert!(minimal.body.contains("encore vide"));
    }
}
