//! Declarative definitions of the nurse and employer flows

use crate::state::forms::{FieldId, FormState};

/// One screen of a flow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepSpec {
    pub title: &'static str,
    /// Fields rendered on this step
    pub fields: &'static [FieldId],
    /// Fields that must be valid before leaving this step
    pub required: &'static [FieldId],
}

impl StepSpec {
    /// The read-only review step has no fields of its own
    pub fn is_review(&self) -> bool {
        self.fields.is_empty()
    }
}

const NURSE_FIELDS: &[FieldId] = &[
    FieldId::FullName,
    FieldId::Email,
    FieldId::Country,
    FieldId::LicenseFile,
    FieldId::LicenseNumber,
    FieldId::Specialty,
    FieldId::PreferredLocations,
    FieldId::Availability,
];

const NURSE_REQUIRED: &[FieldId] = &[FieldId::FullName, FieldId::Email, FieldId::Country];

const NURSE_STEPS: &[StepSpec] = &[
    StepSpec {
        title: "Profile",
        fields: &[FieldId::FullName, FieldId::Email, FieldId::Country],
        required: &[FieldId::FullName, FieldId::Email, FieldId::Country],
    },
    StepSpec {
        title: "Credentials",
        fields: &[FieldId::LicenseFile, FieldId::LicenseNumber],
        required: &[FieldId::LicenseFile],
    },
    StepSpec {
        title: "Preferences",
        fields: &[
            FieldId::Specialty,
            FieldId::PreferredLocations,
            FieldId::Availability,
        ],
        required: &[],
    },
    StepSpec {
        title: "Review",
        fields: &[],
        required: &[],
    },
];

const EMPLOYER_FIELDS: &[FieldId] = &[
    FieldId::OrganizationName,
    FieldId::Contact,
    FieldId::Password,
    FieldId::Country,
    FieldId::Roles,
    FieldId::HiringLocations,
    FieldId::Notes,
];

const EMPLOYER_REQUIRED: &[FieldId] = &[
    FieldId::OrganizationName,
    FieldId::Contact,
    FieldId::Password,
    FieldId::Country,
];

const EMPLOYER_STEPS: &[StepSpec] = &[
    StepSpec {
        title: "Profile",
        fields: &[
            FieldId::OrganizationName,
            FieldId::Contact,
            FieldId::Password,
            FieldId::Country,
        ],
        required: &[
            FieldId::OrganizationName,
            FieldId::Contact,
            FieldId::Password,
            FieldId::Country,
        ],
    },
    StepSpec {
        title: "Positions",
        fields: &[FieldId::Roles, FieldId::HiringLocations, FieldId::Notes],
        required: &[FieldId::Roles],
    },
    StepSpec {
        title: "Review",
        fields: &[],
        required: &[],
    },
];

/// A complete intake wizard experience
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flow {
    Nurse,
    Employer,
}

impl Flow {
    pub fn title(self) -> &'static str {
        match self {
            Self::Nurse => "Nurse Application",
            Self::Employer => "Employer Intake",
        }
    }

    pub fn subtitle(self) -> &'static str {
        match self {
            Self::Nurse => "Create a profile, upload credentials, and get matched faster.",
            Self::Employer => "Tell us about your organization and the roles you need filled.",
        }
    }

    pub fn steps(self) -> &'static [StepSpec] {
        match self {
            Self::Nurse => NURSE_STEPS,
            Self::Employer => EMPLOYER_STEPS,
        }
    }

    pub fn fields(self) -> &'static [FieldId] {
        match self {
            Self::Nurse => NURSE_FIELDS,
            Self::Employer => EMPLOYER_FIELDS,
        }
    }

    /// Fixed required set behind the form's `is_valid`
    pub fn required_fields(self) -> &'static [FieldId] {
        match self {
            Self::Nurse => NURSE_REQUIRED,
            Self::Employer => EMPLOYER_REQUIRED,
        }
    }

    /// Every field some step gates on, the fixed required set included
    pub fn gated_fields(self) -> Vec<FieldId> {
        let mut fields = self.required_fields().to_vec();
        for field in self.steps().iter().flat_map(|step| step.required) {
            if !fields.contains(field) {
                fields.push(*field);
            }
        }
        fields
    }

    /// Collection that receives this flow's submissions
    pub fn collection(self) -> &'static str {
        match self {
            Self::Nurse => "nurses",
            Self::Employer => "employers",
        }
    }

    pub fn confirmation_message(self) -> &'static str {
        match self {
            Self::Nurse => "Application submitted — we will verify and match you.",
            Self::Employer => "Request submitted — our team will be in touch shortly.",
        }
    }

    pub fn failure_message(self) -> &'static str {
        match self {
            Self::Nurse => "Error submitting application.",
            Self::Employer => "Error submitting request.",
        }
    }

    /// Empty form over this flow's fields
    pub fn new_form(self) -> FormState {
        FormState::new(self.fields(), self.required_fields().to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_step_counts() {
        assert_eq!(Flow::Nurse.steps().len(), 4);
        assert_eq!(Flow::Employer.steps().len(), 3);
    }

    #[test]
    fn test_last_step_is_review() {
        for flow in [Flow::Nurse, Flow::Employer] {
            let steps = flow.steps();
            assert!(steps[steps.len() - 1].is_review());
            assert!(steps[..steps.len() - 1].iter().all(|s| !s.is_review()));
        }
    }

    #[test]
    fn test_step_fields_belong_to_flow() {
        for flow in [Flow::Nurse, Flow::Employer] {
            for step in flow.steps() {
                for field in step.fields {
                    assert!(flow.fields().contains(field), "{flow:?} {field:?}");
                }
                for field in step.required {
                    assert!(step.fields.contains(field), "{flow:?} {field:?}");
                }
            }
        }
    }

    #[test]
    fn test_nurse_required_set_excludes_license() {
        assert_eq!(
            Flow::Nurse.required_fields(),
            &[FieldId::FullName, FieldId::Email, FieldId::Country]
        );
    }

    #[test]
    fn test_gated_fields_add_step_requirements() {
        assert_eq!(
            Flow::Nurse.gated_fields(),
            vec![
                FieldId::FullName,
                FieldId::Email,
                FieldId::Country,
                FieldId::LicenseFile
            ]
        );
        assert_eq!(
            Flow::Employer.gated_fields(),
            vec![
                FieldId::OrganizationName,
                FieldId::Contact,
                FieldId::Password,
                FieldId::Country,
                FieldId::Roles
            ]
        );
    }

    #[test]
    fn test_collections() {
        assert_eq!(Flow::Nurse.collection(), "nurses");
        assert_eq!(Flow::Employer.collection(), "employers");
    }
}
