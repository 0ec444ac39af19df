//! Per-field validation rules

use super::field::{FieldId, FieldValue};
use regex::Regex;
use std::sync::LazyLock;

pub const REQUIRED: &str = "Required";
pub const INVALID_EMAIL: &str = "Invalid email";
pub const PASSWORD_TOO_SHORT: &str = "Must be at least 6 characters";

/// Minimum password length accepted for submission
pub const PASSWORD_MIN_LEN: usize = 6;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

/// Validation rule applied to a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Non-empty after trimming, a selected option, or a non-empty set
    Required,
    Email,
    Password,
    FileSelected,
    Optional,
}

/// Rule table keyed by field
pub fn rule_for(field: FieldId) -> Rule {
    match field {
        FieldId::FullName | FieldId::OrganizationName | FieldId::Country | FieldId::Roles => {
            Rule::Required
        }
        FieldId::Email | FieldId::Contact => Rule::Email,
        FieldId::Password => Rule::Password,
        FieldId::LicenseFile => Rule::FileSelected,
        FieldId::LicenseNumber
        | FieldId::Specialty
        | FieldId::PreferredLocations
        | FieldId::Availability
        | FieldId::HiringLocations
        | FieldId::Notes => Rule::Optional,
    }
}

/// Validate a single field, returning the message to show when invalid
pub fn validate(field: FieldId, value: &FieldValue) -> Option<&'static str> {
    match rule_for(field) {
        Rule::Optional => None,
        Rule::Required | Rule::FileSelected => value.is_empty().then_some(REQUIRED),
        Rule::Email => {
            let email = value.as_text().trim();
            if email.is_empty() {
                Some(REQUIRED)
            } else if !EMAIL_PATTERN.is_match(email) {
                Some(INVALID_EMAIL)
            } else {
                None
            }
        }
        Rule::Password => {
            let password = value.as_text();
            if password.is_empty() {
                Some(REQUIRED)
            } else if password.chars().count() < PASSWORD_MIN_LEN {
                Some(PASSWORD_TOO_SHORT)
            } else {
                None
            }
        }
    }
}

/// Cosmetic strength label shown next to password inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordStrength {
    Weak,
    Medium,
    Strong,
}

impl PasswordStrength {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Weak => "Weak",
            Self::Medium => "Medium",
            Self::Strong => "Strong",
        }
    }
}

/// Score a password by length and character-class variety. Never gates submission.
pub fn password_strength(password: &str) -> PasswordStrength {
    let len = password.chars().count();
    let has_lower = password.chars().any(|c| c.is_lowercase());
    let has_upper = password.chars().any(|c| c.is_uppercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_symbol = password.chars().any(|c| !c.is_alphanumeric());

    let score = [
        len >= 8,
        len >= 12,
        has_lower && has_upper,
        has_digit,
        has_symbol,
    ]
    .into_iter()
    .filter(|hit| *hit)
    .count();

    match score {
        0..=1 => PasswordStrength::Weak,
        2..=3 => PasswordStrength::Medium,
        _ => PasswordStrength::Strong,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const REQUIRED_FIELDS: &[FieldId] = &[
        FieldId::FullName,
        FieldId::Email,
        FieldId::Country,
        FieldId::LicenseFile,
        FieldId::OrganizationName,
        FieldId::Contact,
        FieldId::Password,
        FieldId::Roles,
    ];

    mod required {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_empty_required_fields_report_required() {
            for field in REQUIRED_FIELDS {
                assert_eq!(
                    validate(*field, &field.default_value()),
                    Some(REQUIRED),
                    "{field:?}"
                );
            }
        }

        #[test]
        fn test_whitespace_name_is_required() {
            assert_eq!(validate(FieldId::FullName, &FieldValue::text("   ")), Some(REQUIRED));
            assert_eq!(validate(FieldId::FullName, &FieldValue::text("Jane")), None);
        }

        #[test]
        fn test_roles_require_text() {
            assert_eq!(validate(FieldId::Roles, &FieldValue::text("\n")), Some(REQUIRED));
            assert_eq!(validate(FieldId::Roles, &FieldValue::text("2 ICU RNs")), None);
        }

        #[test]
        fn test_country_requires_selection() {
            assert_eq!(validate(FieldId::Country, &FieldValue::text("")), Some(REQUIRED));
            assert_eq!(validate(FieldId::Country, &FieldValue::text("Canada")), None);
        }

        #[test]
        fn test_license_file_requires_selection() {
            assert_eq!(
                validate(FieldId::LicenseFile, &FieldValue::File(None)),
                Some(REQUIRED)
            );
            assert_eq!(validate(FieldId::LicenseFile, &FieldValue::file("cert.pdf")), None);
        }

        #[test]
        fn test_optional_fields_never_error() {
            assert_eq!(validate(FieldId::Notes, &FieldValue::text("")), None);
            assert_eq!(
                validate(FieldId::PreferredLocations, &FieldId::PreferredLocations.default_value()),
                None
            );
        }
    }

    mod email {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_missing_tld_is_invalid() {
            assert_eq!(validate(FieldId::Email, &FieldValue::text("a@b")), Some(INVALID_EMAIL));
        }

        #[test]
        fn test_well_formed_email_is_valid() {
            assert_eq!(validate(FieldId::Email, &FieldValue::text("a@b.com")), None);
            assert_eq!(validate(FieldId::Contact, &FieldValue::text("hr@clinic.co.uk")), None);
        }

        #[test]
        fn test_empty_email_prefers_required() {
            assert_eq!(validate(FieldId::Email, &FieldValue::text("")), Some(REQUIRED));
        }

        #[test]
        fn test_embedded_space_is_invalid() {
            assert_eq!(
                validate(FieldId::Contact, &FieldValue::text("jane doe@x.com")),
                Some(INVALID_EMAIL)
            );
        }
    }

    mod password {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_short_password_is_rejected() {
            assert_eq!(
                validate(FieldId::Password, &FieldValue::text("abc")),
                Some(PASSWORD_TOO_SHORT)
            );
        }

        #[test]
        fn test_six_characters_is_enough() {
            assert_eq!(validate(FieldId::Password, &FieldValue::text("abcdef")), None);
        }

        #[test]
        fn test_strength_labels() {
            assert_eq!(password_strength("abc"), PasswordStrength::Weak);
            assert_eq!(password_strength("abcdefgh1"), PasswordStrength::Medium);
            assert_eq!(password_strength("Abcdefgh1234!"), PasswordStrength::Strong);
        }

        #[test]
        fn test_strength_does_not_affect_validity() {
            assert_eq!(password_strength("aaaaaa"), PasswordStrength::Weak);
            assert_eq!(validate(FieldId::Password, &FieldValue::text("aaaaaa")), None);
        }
    }
}
