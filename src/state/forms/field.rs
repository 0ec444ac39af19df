//! Form field identifiers and value objects

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Options offered by every country selector
pub const COUNTRY_OPTIONS: &[&str] = &["United States", "United Kingdom", "Canada", "Australia"];

/// Options offered by the location multi-selects
pub const LOCATION_OPTIONS: &[&str] = COUNTRY_OPTIONS;

/// How a field accepts input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text { multiline: bool },
    Secret,
    Choice(&'static [&'static str]),
    MultiChoice(&'static [&'static str]),
    File,
}

/// Closed set of field identifiers across both intake flows
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldId {
    // Nurse
    FullName,
    Email,
    Country,
    LicenseFile,
    LicenseNumber,
    Specialty,
    PreferredLocations,
    Availability,
    // Employer
    OrganizationName,
    Contact,
    Password,
    Roles,
    HiringLocations,
    Notes,
}

impl FieldId {
    /// Key used for this field in submitted documents
    pub fn key(self) -> &'static str {
        match self {
            Self::FullName => "fullName",
            Self::Email => "email",
            Self::Country => "country",
            Self::LicenseFile => "licenseFile",
            Self::LicenseNumber => "licenseNumber",
            Self::Specialty => "specialty",
            Self::PreferredLocations => "preferredLocations",
            Self::Availability => "availability",
            Self::OrganizationName => "organizationName",
            Self::Contact => "contact",
            Self::Password => "password",
            Self::Roles => "roles",
            Self::HiringLocations => "locations",
            Self::Notes => "notes",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::FullName => "Full name",
            Self::Email => "Email",
            Self::Country => "Country of qualification",
            Self::LicenseFile => "License document (path)",
            Self::LicenseNumber => "License number",
            Self::Specialty => "Specialty",
            Self::PreferredLocations => "Preferred locations",
            Self::Availability => "Availability",
            Self::OrganizationName => "Organization name",
            Self::Contact => "Contact email",
            Self::Password => "Password",
            Self::Roles => "Roles needed",
            Self::HiringLocations => "Hiring locations",
            Self::Notes => "Notes",
        }
    }

    pub fn kind(self) -> FieldKind {
        match self {
            Self::Country => FieldKind::Choice(COUNTRY_OPTIONS),
            Self::PreferredLocations | Self::HiringLocations => {
                FieldKind::MultiChoice(LOCATION_OPTIONS)
            }
            Self::LicenseFile => FieldKind::File,
            Self::Password => FieldKind::Secret,
            Self::Roles | Self::Notes => FieldKind::Text { multiline: true },
            _ => FieldKind::Text { multiline: false },
        }
    }

    pub fn is_multiline(self) -> bool {
        matches!(self.kind(), FieldKind::Text { multiline: true })
    }

    pub fn is_secret(self) -> bool {
        matches!(self.kind(), FieldKind::Secret)
    }

    /// Empty value for this field's kind
    pub fn default_value(self) -> FieldValue {
        match self.kind() {
            FieldKind::MultiChoice(_) => FieldValue::Choices(BTreeSet::new()),
            FieldKind::File => FieldValue::File(None),
            _ => FieldValue::Text(String::new()),
        }
    }
}

/// A file picked from the local filesystem. Only `name` leaves the process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRef {
    pub name: String,
    pub path: PathBuf,
}

impl FileRef {
    /// Build a reference from a path, using its final component as the name
    pub fn from_path(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();
        let name = path.file_name()?.to_str()?.to_string();
        Some(Self {
            name,
            path: path.to_path_buf(),
        })
    }
}

/// Type-safe field values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Choices(BTreeSet<String>),
    File(Option<FileRef>),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        FieldValue::Text(value.into())
    }

    #[cfg(test)]
    pub fn file(name: &str) -> Self {
        FieldValue::File(FileRef::from_path(name))
    }

    #[cfg(test)]
    pub fn choices<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        FieldValue::Choices(values.into_iter().map(Into::into).collect())
    }

    /// Get the text value (returns empty string for non-text values)
    pub fn as_text(&self) -> &str {
        match self {
            FieldValue::Text(s) => s,
            _ => "",
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Text(s) => s.trim().is_empty(),
            FieldValue::Choices(set) => set.is_empty(),
            FieldValue::File(file) => file.is_none(),
        }
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        match self {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Choices(set) => set.iter().cloned().collect::<Vec<_>>().join(", "),
            FieldValue::File(Some(file)) => file.name.clone(),
            FieldValue::File(None) => String::new(),
        }
    }
}
