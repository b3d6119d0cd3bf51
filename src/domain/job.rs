use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobType {
    #[serde(rename = "Full-time")]
    FullTime,
    #[serde(rename = "Part-time")]
    PartTime,
    Contract,
    Remote,
}

impl JobType {
    pub const ALL: [JobType; 4] = [
        JobType::FullTime,
        JobType::PartTime,
        JobType::Contract,
        JobType::Remote,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            JobType::FullTime => "Full-time",
            JobType::PartTime => "Part-time",
            JobType::Contract => "Contract",
            JobType::Remote => "Remote",
        }
    }
}

/// One listing from the fixed in-memory catalog. Immutable for the process
/// lifetime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobListing {
    pub id: u32,
    pub title: String,
    pub company: String,
    pub location: String,
    pub salary: String,
    pub job_type: JobType,
    pub posted: String,
    pub description: String,
    pub requirements: Vec<String>,
    pub company_info: String,
    pub logo: String,
}

/// The transient query/location/type triple driving a search. Consumed
/// synchronously by the filter; never persisted.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchCriteria {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub job_type: Option<JobType>,
}

impl SearchCriteria {
    pub fn is_unfiltered(&self) -> bool {
        self.query.is_empty() && self.location.is_empty() && self.job_type.is_none()
    }

    /// Stable AND-composed filter over the catalog; catalog order is
    /// preserved and no re-ranking happens.
    pub fn filter<'a>(&self, catalog: &'a [JobListing]) -> Vec<&'a JobListing> {
        let query = self.query.to_lowercase();
        catalog
            .iter()
            .filter(|job| {
                if !query.is_empty() {
                    let matches = job.title.to_lowercase().contains(&query)
                        || job.company.to_lowercase().contains(&query)
                        || job.description.to_lowercase().contains(&query);
                    if !matches {
                        return false;
                    }
                }
                if !self.location.is_empty() && job.location != self.location {
                    return false;
                }
                if let Some(job_type) = self.job_type {
                    if job.job_type != job_type {
                        return false;
                    }
                }
                true
            })
            .collect()
    }
}
