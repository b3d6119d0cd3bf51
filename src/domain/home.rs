use serde::{Deserialize, Serialize};

use crate::domain::route::Route;

/// Static view-model for the landing page, served by the core so the shell
/// carries no copy of its own.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeContent {
    pub headline: String,
    pub tagline: String,
    pub tabs: Vec<AudienceTab>,
    pub stats: Vec<Stat>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Audience {
    JobSeeker,
    Employer,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AudienceTab {
    pub audience: Audience,
    pub label: String,
    pub icon: &'static str,
    pub features: Vec<Feature>,
    pub call_to_action: CallToAction,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Feature {
    pub icon: &'static str,
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CallToAction {
    pub label: String,
    pub icon: &'static str,
    pub target: Route,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stat {
    pub value: String,
    pub label: String,
}

impl HomeContent {
    pub fn build() -> Self {
        let job_seeker_features = [
            "Create a professional profile to showcase your skills",
            "Upload and manage your resume and portfolio",
            "Search and apply for positions matching your expertise",
            "Track application status and receive updates",
        ];
        let employer_features = [
            "Post job listings with detailed requirements",
            "Search candidate profiles based on skills and experience",
            "Manage applications through an intuitive dashboard",
            "Schedule interviews and communicate with candidates",
        ];

        Self {
            headline: "Connect with Your Dream Career or Perfect Talent".to_string(),
            tagline: "TalentBridge connects qualified professionals with companies looking \
                      for talent. Whether you're seeking new opportunities or recruiting top \
                      candidates, we've got you covered."
                .to_string(),
            tabs: vec![
                AudienceTab {
                    audience: Audience::JobSeeker,
                    label: "Job Seekers".to_string(),
                    icon: crate::shared::icons::resolve("User"),
                    features: features_from(&job_seeker_features),
                    call_to_action: CallToAction {
                        label: "Find a Job".to_string(),
                        icon: crate::shared::icons::resolve("User"),
                        target: Route::ProfileCreate,
                    },
                },
                AudienceTab {
                    audience: Audience::Employer,
                    label: "Employers".to_string(),
                    icon: crate::shared::icons::resolve("Building"),
                    features: features_from(&employer_features),
                    call_to_action: CallToAction {
                        label: "Hire Talent".to_string(),
                        icon: crate::shared::icons::resolve("Building"),
                        target: Route::JobPost,
                    },
                },
            ],
            stats: vec![
                stat("4.8K+", "Companies"),
                stat("28K+", "Job Seekers"),
                stat("12K+", "Placements"),
                stat("95%", "Satisfaction"),
            ],
        }
    }
}

fn features_from(texts: &[&str]) -> Vec<Feature> {
    texts
        .iter()
        .map(|text| Feature {
            icon: crate::shared::icons::resolve("CheckCircle"),
            text: text.to_string(),
        })
        .collect()
}

fn stat(value: &str, label: &str) -> Stat {
    Stat {
        value: value.to_string(),
        label: label.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_content_tabs_target_the_two_flows() {
        let content = HomeContent::build();
        assert_eq!(content.tabs.len(), 2);
        assert_eq!(content.tabs[0].call_to_action.target, Route::ProfileCreate);
        assert_eq!(content.tabs[1].call_to_action.target, Route::JobPost);
        assert!(content.tabs.iter().all(|tab| tab.features.len() == 4));
    }
}
