//! Static marketing content: country licensing playbooks and compliance policies

/// Licensing pathway for nurses moving into one country
#[derive(Debug, Clone, Copy)]
pub struct Playbook {
    pub country: &'static str,
    pub regulator: &'static str,
    pub summary: &'static str,
    pub steps: &'static [&'static str],
    pub typical_timeline: &'static str,
}

pub const PLAYBOOKS: &[Playbook] = &[
    Playbook {
        country: "United States",
        regulator: "State Boards of Nursing (NCSBN)",
        summary: "Licensure is granted state by state; multistate compact licenses cover member states.",
        steps: &[
            "Credential evaluation (CGFNS / VisaScreen)",
            "Apply to a state board of nursing",
            "Pass the NCLEX-RN",
            "English proficiency (IELTS / OET / TOEFL) where required",
            "Immigrant or H-1B visa sponsorship by employer",
        ],
        typical_timeline: "9–18 months",
    },
    Playbook {
        country: "United Kingdom",
        regulator: "Nursing and Midwifery Council (NMC)",
        summary: "Overseas nurses register with the NMC through a two-part test of competence.",
        steps: &[
            "English language test (IELTS 7.0 / OET B)",
            "NMC eligibility application",
            "Computer-based test (CBT)",
            "Health and Care Worker visa with employer certificate of sponsorship",
            "OSCE clinical exam after arrival",
        ],
        typical_timeline: "4–8 months",
    },
    Playbook {
        country: "Canada",
        regulator: "Provincial regulators via NNAS",
        summary: "Credentials are assessed nationally, then licensed by the provincial college.",
        steps: &[
            "Open an NNAS application and submit documents",
            "Choose a provincial regulator (e.g. CNO, BCCNM)",
            "Competency assessment or bridging program if requested",
            "Pass the NCLEX-RN",
            "Work permit or Express Entry permanent residence",
        ],
        typical_timeline: "12–24 months",
    },
    Playbook {
        country: "Australia",
        regulator: "NMBA / AHPRA",
        summary: "Internationally qualified nurses follow the NMBA self-check and outcomes-based assessment.",
        steps: &[
            "Complete the NMBA self-check",
            "English language test (IELTS 7.0 / OET B)",
            "Outcomes-based assessment: MCQ then OSCE",
            "AHPRA registration",
            "Employer-sponsored or skilled migration visa",
        ],
        typical_timeline: "6–12 months",
    },
];

/// One section of the compliance page
#[derive(Debug, Clone, Copy)]
pub struct Policy {
    pub title: &'static str,
    pub body: &'static str,
}

pub const POLICIES: &[Policy] = &[
    Policy {
        title: "Ethical international recruitment",
        body: "We follow the WHO Global Code of Practice on the International Recruitment of Health Personnel and do not actively recruit from countries on the WHO health workforce support and safeguards list.",
    },
    Policy {
        title: "No fees to candidates",
        body: "Nurses never pay placement or recruitment fees. Employers cover recruitment costs under written agreements.",
    },
    Policy {
        title: "Transparent contracts",
        body: "Every offer states salary, hours, relocation support and any repayment clauses in writing before a candidate accepts.",
    },
    Policy {
        title: "Secure credentialing",
        body: "License documents are verified directly with the issuing regulator. Only the document name is recorded with an application.",
    },
    Policy {
        title: "Data handling",
        body: "Application data is used only for matching and verification, and can be deleted on request by writing to hello@nurseconnect.example.",
    },
];

/// Footer contact line
pub const CONTACT: &str = "hello@nurseconnect.example  ·  +1 (555) 123-4567";

pub const TAGLINE: &str = "Connecting nurses to hospitals & homes, locally & internationally";

pub const HERO_TITLE: &str = "Healthcare staffing that crosses borders, responsibly";

pub const HERO_BODY: &str = "We match licensed, vetted nurses to hospitals and patients across the US, UK, Canada and Australia. Dual-path funnels for nurses and employers make matching fast and compliant.";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{FieldId, FieldKind};

    #[test]
    fn test_one_playbook_per_country_option() {
        let FieldKind::Choice(options) = FieldId::Country.kind() else {
            panic!("country is a single choice");
        };
        let countries: Vec<_> = PLAYBOOKS.iter().map(|p| p.country).collect();
        assert_eq!(countries, options);
    }

    #[test]
    fn test_playbooks_have_steps() {
        assert!(PLAYBOOKS.iter().all(|p| !p.steps.is_empty()));
    }
}
