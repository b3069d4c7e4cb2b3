//! Final run summary shown to the operator.

use secrecy::{ExposeSecret, SecretString};

use crate::onboard::email::WelcomeEmail;

/// Everything produced by a successful run. The password lives here and
/// nowhere else; it is exposed exactly once, when the summary is rendered.
#[derive(Debug)]
pub struct OnboardingReport {
    pub full_name: String,
    /// Site URL with trailing slash.
    pub site_url: String,
    pub username: String,
    pub password: SecretString,
    pub email: WelcomeEmail,
}

impl OnboardingReport {
    pub fn admin_url(&self) -> String {
        format!("{}wp-admin", self.site_url)
    }

    pub fn print(&self) {
        println!("{}", self.render());
    }

    fn render(&self) -> String {
        format!(
            "Success: {full_name} onboarded.\n\
             \n  \
             Site:     {site_url}\n  \
             Admin:    {admin_url}\n  \
             Username: {username}\n  \
             Password: {password}\n\
             \n\
             Welcome email to send:\n\
             \n\
             Subject: {subject}\n\
             \n\
             {body}",
            full_name = self.full_name,
            site_url = self.site_url,
            admin_url = self.admin_url(),
            username = self.username,
            password = self.password.expose_secret(),
            subject = self.email.subject,
            body = self.email.body,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report() -> OnboardingReport {
        OnboardingReport {
            full_name: "Petra Muster".into(),
            site_url: "https://www.gruene.ch/petramuster/".into(),
            username: "petramuster".into(),
            password: SecretString::from("xK9!vQ2p".to_string()),
            email: WelcomeEmail {
                subject: "Deine neue Website ist bereit".into(),
                body: "Hallo Petra".into(),
            },
        }
    }

    #[test]
    fn admin_url_extends_site_url() {
        assert_eq!(
            report().admin_url(),
            "https://www.gruene.ch/petramuster/wp-admin"
        );
    }

    #[test]
    fn summary_shows_credentials_and_email() {
        let rendered = report().render();
        assert!(rendered.contains("Username: petramuster"));
        assert!(rendered.contains("Password: xK9!vQ2p"));
        assert!(rendered.contains("Subject: Deine neue Website ist bereit"));
        assert!(rendered.contains("Hallo Petra"));
    }

    #[test]
    fn debug_does_not_leak_the_password() {
        let debugged = format!("{:?}", report());
        assert!(!debugged.contains("xK9!vQ2p"));
    }
}
