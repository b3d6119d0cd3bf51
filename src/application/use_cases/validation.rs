//! Declarative field validation.
//!
//! All required-field policy lives in rule tables here, keyed by wizard step
//! or form, so the per-step components cannot drift apart. List-building
//! steps validate at the point of insertion instead (see `domain::profile`).

use once_cell::sync::Lazy;
use regex::Regex;

use crate::application::use_cases::profile_wizard::WizardStep;
use crate::domain::job_post::JobPostRecord;
use crate::domain::profile::{BasicInfo, ProfileRecord};
use crate::domain::validation::ValidationErrors;

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

#[derive(Debug, Clone, Copy)]
pub enum Rule {
    /// The field must be non-empty after trimming.
    Required(&'static str),
    /// The field, when non-empty, must look like `<local>@<domain>.<tld>`.
    Email(&'static str),
}

pub struct FieldRule<T> {
    pub field: &'static str,
    pub get: fn(&T) -> &str,
    pub rules: &'static [Rule],
}

pub fn apply<T>(value: &T, table: &[FieldRule<T>]) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    for field_rule in table {
        let raw = (field_rule.get)(value);
        for rule in field_rule.rules {
            match rule {
                Rule::Required(message) => {
                    if raw.trim().is_empty() {
                        errors.insert(field_rule.field, message);
                    }
                }
                Rule::Email(message) => {
                    if !raw.trim().is_empty() && !EMAIL_PATTERN.is_match(raw.trim()) {
                        errors.insert(field_rule.field, message);
                    }
                }
            }
        }
    }
    errors
}

pub static BASIC_INFO_RULES: &[FieldRule<BasicInfo>] = &[
    FieldRule {
        field: "firstName",
        get: |info: &BasicInfo| info.first_name.as_str(),
        rules: &[Rule::Required("First name is required")],
    },
    FieldRule {
        field: "lastName",
        get: |info: &BasicInfo| info.last_name.as_str(),
        rules: &[Rule::Required("Last name is required")],
    },
    FieldRule {
        field: "email",
        get: |info: &BasicInfo| info.email.as_str(),
        rules: &[
            Rule::Required("Email is required"),
            Rule::Email("Email is invalid"),
        ],
    },
    FieldRule {
        field: "phone",
        get: |info: &BasicInfo| info.phone.as_str(),
        rules: &[Rule::Required("Phone number is required")],
    },
    FieldRule {
        field: "location",
        get: |info: &BasicInfo| info.location.as_str(),
        rules: &[Rule::Required("Location is required")],
    },
];

pub static JOB_POST_RULES: &[FieldRule<JobPostRecord>] = &[
    FieldRule {
        field: "jobTitle",
        get: |record: &JobPostRecord| record.job_title.as_str(),
        rules: &[Rule::Required("This field is required")],
    },
    FieldRule {
        field: "company",
        get: |record: &JobPostRecord| record.company.as_str(),
        rules: &[Rule::Required("This field is required")],
    },
    FieldRule {
        field: "location",
        get: |record: &JobPostRecord| record.location.as_str(),
        rules: &[Rule::Required("This field is required")],
    },
    FieldRule {
        field: "description",
        get: |record: &JobPostRecord| record.description.as_str(),
        rules: &[Rule::Required("This field is required")],
    },
    FieldRule {
        field: "requirements",
        get: |record: &JobPostRecord| record.requirements.as_str(),
        rules: &[Rule::Required("This field is required")],
    },
    FieldRule {
        field: "contactEmail",
        get: |record: &JobPostRecord| record.contact_email.as_str(),
        rules: &[
            Rule::Required("This field is required"),
            Rule::Email("Please enter a valid email address"),
        ],
    },
];

/// Step-keyed wizard validation. Only the basic-info step carries
/// required-field rules; the data-capture and list-building steps always
/// produce an empty map.
pub fn validate_step(step: WizardStep, record: &ProfileRecord) -> ValidationErrors {
    match step {
        WizardStep::BasicInfo => apply(&record.basic_info, BASIC_INFO_RULES),
        WizardStep::ProfessionalInfo
        | WizardStep::SkillsEducation
        | WizardStep::Experience
        | WizardStep::AdditionalInfo => ValidationErrors::new(),
    }
}

/// Job-post validation: the rule table plus the salary cross-field check.
pub fn validate_job_post(record: &JobPostRecord) -> ValidationErrors {
    let mut errors = apply(record, JOB_POST_RULES);

    // Min must not exceed max when both bounds are present and numeric.
    if !record.salary_range_min.is_empty() && !record.salary_range_max.is_empty() {
        if let (Ok(min), Ok(max)) = (
            record.salary_range_min.trim().parse::<f64>(),
            record.salary_range_max.trim().parse::<f64>(),
        ) {
            if min > max {
                errors.insert(
                    "salaryRangeMin",
                    "Minimum salary cannot be greater than maximum",
                );
            }
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_basic_info() -> BasicInfo {
        BasicInfo {
            first_name: "John".into(),
            last_name: "Doe".into(),
            email: "john.doe@example.com".into(),
            phone: "+1 (555) 123-4567".into(),
            location: "New York, NY".into(),
        }
    }

    #[test]
    fn test_basic_info_all_fields_required() {
        let errors = apply(&BasicInfo::default(), BASIC_INFO_RULES);
        assert_eq!(errors.len(), 5);
        assert_eq!(errors.get("firstName"), Some("First name is required"));
        assert_eq!(errors.get("email"), Some("Email is required"));
    }

    #[test]
    fn test_basic_info_valid_passes() {
        assert!(apply(&valid_basic_info(), BASIC_INFO_RULES).is_empty());
    }

    #[test]
    fn test_email_pattern_requires_domain_and_tld() {
        let mut info = valid_basic_info();
        for bad in ["not-an-email", "a@b", "a b@c.com", "@example.com"] {
            info.email = bad.into();
            let errors = apply(&info, BASIC_INFO_RULES);
            assert_eq!(errors.get("email"), Some("Email is invalid"), "{}", bad);
        }
        info.email = "jane@sub.example.co".into();
        assert!(apply(&info, BASIC_INFO_RULES).is_empty());
    }

    #[test]
    fn test_job_post_contact_email_invalid() {
        let record = JobPostRecord {
            job_title: "Senior React Developer".into(),
            company: "TalentBridge LLC".into(),
            location: "Remote".into(),
            description: "Build things".into(),
            requirements: "React".into(),
            contact_email: "not-an-email".into(),
            ..Default::default()
        };
        let errors = validate_job_post(&record);
        assert_eq!(
            errors.get("contactEmail"),
            Some("Please enter a valid email address")
        );
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_job_post_salary_min_greater_than_max() {
        let record = JobPostRecord {
            job_title: "Engineer".into(),
            company: "Acme".into(),
            location: "Austin, TX".into(),
            description: "Work".into(),
            requirements: "Rust".into(),
            contact_email: "jobs@acme.com".into(),
            salary_range_min: "200000".into(),
            salary_range_max: "100000".into(),
            ..Default::default()
        };
        let errors = validate_job_post(&record);
        assert_eq!(
            errors.get("salaryRangeMin"),
            Some("Minimum salary cannot be greater than maximum")
        );
    }

    #[test]
    fn test_job_post_salary_check_skipped_when_non_numeric_or_absent() {
        let mut record = JobPostRecord {
            job_title: "Engineer".into(),
            company: "Acme".into(),
            location: "Austin, TX".into(),
            description: "Work".into(),
            requirements: "Rust".into(),
            contact_email: "jobs@acme.com".into(),
            salary_range_min: "lots".into(),
            salary_range_max: "100000".into(),
            ..Default::default()
        };
        assert!(validate_job_post(&record).is_empty());

        record.salary_range_min = "90000".into();
        record.salary_range_max = String::new();
        assert!(validate_job_post(&record).is_empty());
    }
}
