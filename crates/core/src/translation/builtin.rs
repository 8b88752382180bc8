use std::sync::LazyLock;

use serde_json::json;

use crate::config::LanguageTag;

use super::Dictionary;

static EN: LazyLock<Dictionary> = LazyLock::new(|| {
    serde_json::from_value(json!({
        "title": "KYC Verification",
        "subtitle": "Please provide your information to continue",
        "fields": {
            "firstName": { "label": "First Name", "placeholder": "Enter your first name" },
            "lastName": { "label": "Last Name", "placeholder": "Enter your last name" },
            "email": { "label": "Email", "placeholder": "Enter your email address" }
        },
        "actions": {
            "submit": "Submit",
            "reset": "Reset"
        },
        "errors": {
            "required": "{field} is required"
        }
    }))
    .expect("builtin English dictionary is valid")
});

static DE: LazyLock<Dictionary> = LazyLock::new(|| {
    serde_json::from_value(json!({
        "title": "KYC-Verifizierung",
        "subtitle": "Bitte geben Sie Ihre Daten ein, um fortzufahren",
        "fields": {
            "firstName": { "label": "Vorname", "placeholder": "Vornamen eingeben" },
            "lastName": { "label": "Nachname", "placeholder": "Nachnamen eingeben" },
            "email": { "label": "E-Mail", "placeholder": "E-Mail-Adresse eingeben" }
        },
        "actions": {
            "submit": "Absenden",
            "reset": "Zurücksetzen"
        },
        "errors": {
            "required": "{field} ist erforderlich"
        }
    }))
    .expect("builtin German dictionary is valid")
});

/// Returns the builtin dictionary for a language, matched by base code.
pub fn builtin_dictionary(lang: &LanguageTag) -> Option<Dictionary> {
    match lang.base().as_str() {
        "en" => Some(EN.clone()),
        "de" => Some(DE.clone()),
        _ => None,
    }
}

/// The builtin English dictionary, the final fallback.
pub fn default_dictionary() -> Dictionary {
    EN.clone()
}
