use serde::{Deserialize, Serialize};

/// Flat field map backing the job-posting form. Created empty on mount,
/// mutated per keystroke, validated on submit, discarded afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPostRecord {
    #[serde(default)]
    pub job_title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub location: String,
    #[serde(default = "default_job_type")]
    pub job_type: String,
    #[serde(default)]
    pub salary_range_min: String,
    #[serde(default)]
    pub salary_range_max: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub requirements: String,
    #[serde(default)]
    pub benefits: String,
    #[serde(default)]
    pub contact_email: String,
    #[serde(default)]
    pub application_deadline: String,
}

fn default_job_type() -> String {
    "Full-time".to_string()
}

impl Default for JobPostRecord {
    fn default() -> Self {
        Self {
            job_title: String::new(),
            company: String::new(),
            location: String::new(),
            job_type: default_job_type(),
            salary_range_min: String::new(),
            salary_range_max: String::new(),
            description: String::new(),
            requirements: String::new(),
            benefits: String::new(),
            contact_email: String::new(),
            application_deadline: String::new(),
        }
    }
}
