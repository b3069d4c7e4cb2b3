//! Localized content written into the new site and into the welcome email.
//!
//! Everything here is static. The bundles carry `{{placeholder}}` markers
//! that get filled at run time; [`verify_bundles`] checks at startup that
//! no template lost its markers in an edit.

use crate::request::{Language, Plan};

/// All localized strings for one site language.
pub struct MessageBundle {
    /// Title of the maintenance page shown while the site is unpublished.
    pub coming_soon_page_title: &'static str,
    pub coming_soon_headline: &'static str,
    /// Campaign call-to-action, takes `{{first_name}}`.
    pub cta_description: &'static str,
    /// Label of the mailto button in the footer.
    pub send_email: &'static str,
    /// Placeholder person living on the template site; the rewrite passes
    /// replace these with the real person's data.
    pub placeholder_full_name: &'static str,
    pub placeholder_first_name: &'static str,
    pub placeholder_email: &'static str,
    pub welcome_subject: &'static str,
    /// Takes `{{first_name}}`, `{{links}}`, `{{email}}` and `{{support}}`.
    pub welcome_body: &'static str,
    pub support_full_service: &'static str,
    pub support_minimal: &'static str,
}

impl MessageBundle {
    pub fn support(&self, plan: Plan) -> &'static str {
        match plan {
            Plan::FullService => self.support_full_service,
            Plan::Minimal => self.support_minimal,
        }
    }
}

/// Footer widget address, shared across languages apart from the button label.
pub const FOOTER_ADDRESS_TEMPLATE: &str = "<b>{{full_name}}</b>\n{{city}}\n\n<a class='a-button a-button--primary' href='mailto:{{email}}'>{{send_email}}</a>";

static DE: MessageBundle = MessageBundle {
    coming_soon_page_title: "Bald verfügbar",
    coming_soon_headline: "Diese Website ist bald online.",
    cta_description: "Darum trete ich dem Unterstützungskomitee bei und zeige mit meinem Namen, dass {{first_name}} eine gute Wahl ist.",
    send_email: "Email senden",
    placeholder_full_name: "Ursula Beispiel",
    placeholder_first_name: "Ursula",
    placeholder_email: "ursula.beispiel@gruene.ch",
    welcome_subject: "Deine neue Website ist bereit",
    welcome_body: "Hallo {{first_name}}\n\nDeine neue Website ist eingerichtet:\n\n{{links}}\n\nDer Login erfolgt mit deinem Benutzernamen oder der E-Mail-Adresse {{email}}. Das Passwort stellen wir dir separat zu.\n\n{{support}}\n\nGrüne Grüsse\nDein Webteam",
    support_full_service: "Wir haben die Website bereits mit deinen Angaben eingerichtet. Melde dich bei uns, falls etwas fehlt.",
    support_minimal: "Die Website ist noch leer. Melde dich bei uns, wenn du Unterstützung beim Einrichten brauchst.",
};

static FR: MessageBundle = MessageBundle {
    coming_soon_page_title: "Bientôt disponible",
    coming_soon_headline: "Ce site sera bientôt en ligne.",
    cta_description: "C'est pourquoi je rejoins le comité de soutien et je montre avec mon nom que {{first_name}} est un bon choix.",
    send_email: "Envoyer un e-mail",
    placeholder_full_name: "Claude Exemple",
    placeholder_first_name: "Claude",
    placeholder_email: "claude.exemple@verts.ch",
    welcome_subject: "Ton nouveau site web est prêt",
    welcome_body: "Bonjour {{first_name}}\n\nTon nouveau site web est prêt :\n\n{{links}}\n\nConnecte-toi avec ton nom d'utilisateur ou l'adresse e-mail {{email}}. Le mot de passe te sera transmis séparément.\n\n{{support}}\n\nSalutations vertes\nTon équipe web",
    support_full_service: "Le site a déjà été configuré avec tes informations. Contacte-nous s'il manque quelque chose.",
    support_minimal: "Le site est encore vide. Contacte-nous si tu as besoin d'aide pour le configurer.",
};

pub fn bundle(language: Language) -> &'static MessageBundle {
    match language {
        Language::De => &DE,
        Language::Fr => &FR,
    }
}

/// Check that every bundle still carries the placeholders its consumers
/// substitute. Returns the first missing `template: placeholder` pair.
pub fn verify_bundles() -> Result<(), String> {
    for language in [Language::De, Language::Fr] {
        let bundle = bundle(language);
        let lang = language.as_str();
        check(lang, "cta_description", bundle.cta_description, &["{{first_name}}"])?;
        check(
            lang,
            "welcome_body",
            bundle.welcome_body,
            &["{{first_name}}", "{{links}}", "{{email}}", "{{support}}"],
        )?;
    }
    check(
        "shared",
        "footer_address",
        FOOTER_ADDRESS_TEMPLATE,
        &["{{full_name}}", "{{city}}", "{{email}}", "{{send_email}}"],
    )
}

fn check(
    lang: &str,
    name: &str,
    template: &str,
    placeholders: &[&str],
) -> Result<(), String> {
    for placeholder in placeholders {
        if !template.contains(placeholder) {
            return Err(format!("{lang} {name} lost {placeholder}"));
        }
    }
    Ok(())
}
