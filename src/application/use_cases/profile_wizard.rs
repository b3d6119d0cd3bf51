use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::application::use_cases::notifier::Notifier;
use crate::application::use_cases::validation;
use crate::domain::error::{AppError, Result};
use crate::domain::profile::{
    EducationEntry, ExperienceEntry, LanguageEntry, ProfileRecord, SectionUpdate,
};
use crate::domain::validation::ValidationErrors;

/// The wizard's five steps, 1-indexed to match the step pointer the shell
/// displays. Steps are only reachable sequentially.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WizardStep {
    BasicInfo,
    ProfessionalInfo,
    SkillsEducation,
    Experience,
    AdditionalInfo,
}

impl WizardStep {
    pub const COUNT: u8 = 5;

    pub fn pointer(&self) -> u8 {
        match self {
            WizardStep::BasicInfo => 1,
            WizardStep::ProfessionalInfo => 2,
            WizardStep::SkillsEducation => 3,
            WizardStep::Experience => 4,
            WizardStep::AdditionalInfo => 5,
        }
    }

    fn from_pointer(pointer: u8) -> WizardStep {
        match pointer {
            1 => WizardStep::BasicInfo,
            2 => WizardStep::ProfessionalInfo,
            3 => WizardStep::SkillsEducation,
            4 => WizardStep::Experience,
            _ => WizardStep::AdditionalInfo,
        }
    }

    /// The following step, clamped at the final step.
    pub fn next(self) -> WizardStep {
        Self::from_pointer(self.pointer().saturating_add(1).min(Self::COUNT))
    }

    /// The previous step, clamped at the first step.
    pub fn prev(self) -> WizardStep {
        Self::from_pointer(self.pointer().saturating_sub(1).max(1))
    }

    pub fn title(&self) -> &'static str {
        match self {
            WizardStep::BasicInfo => "Basic Information",
            WizardStep::ProfessionalInfo => "Professional Information",
            WizardStep::SkillsEducation => "Skills & Education",
            WizardStep::Experience => "Work Experience",
            WizardStep::AdditionalInfo => "Additional Details",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            WizardStep::BasicInfo => "Your contact information",
            WizardStep::ProfessionalInfo => "Your work experience and expertise",
            WizardStep::SkillsEducation => "Your abilities and academic background",
            WizardStep::Experience => "Your previous jobs and responsibilities",
            WizardStep::AdditionalInfo => "Languages, resume, and social links",
        }
    }
}

/// External collaborator that receives the finished profile.
#[async_trait]
pub trait ProfileSubmitter: Send + Sync {
    async fn submit(&self, record: &ProfileRecord) -> Result<()>;
}

/// Bundled submitter: logs the handoff and succeeds. Stands in for a real
/// backend integration.
pub struct LoggingSubmitter;

#[async_trait]
impl ProfileSubmitter for LoggingSubmitter {
    async fn submit(&self, record: &ProfileRecord) -> Result<()> {
        info!(
            name = %format!("{} {}", record.basic_info.first_name, record.basic_info.last_name),
            skills = record.skills_education.skills.len(),
            experiences = record.experience.experiences.len(),
            "profile submitted"
        );
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WizardSnapshot {
    pub step: u8,
    pub total_steps: u8,
    pub title: &'static str,
    pub description: &'static str,
    pub record: ProfileRecord,
}

struct WizardState {
    step: WizardStep,
    record: ProfileRecord,
}

/// Owns the step pointer and the composite profile record for the lifetime of
/// the creation flow. The record is discarded with the use case; nothing is
/// persisted partially.
pub struct ProfileWizardUseCase {
    state: Mutex<WizardState>,
    submitter: Arc<dyn ProfileSubmitter>,
    notifier: Notifier,
}

impl ProfileWizardUseCase {
    pub fn new(submitter: Arc<dyn ProfileSubmitter>, notifier: Notifier) -> Self {
        Self {
            state: Mutex::new(WizardState {
                step: WizardStep::BasicInfo,
                record: ProfileRecord::default(),
            }),
            submitter,
            notifier,
        }
    }

    pub fn snapshot(&self) -> WizardSnapshot {
        let state = self.state.lock().unwrap();
        WizardSnapshot {
            step: state.step.pointer(),
            total_steps: WizardStep::COUNT,
            title: state.step.title(),
            description: state.step.description(),
            record: state.record.clone(),
        }
    }

    pub fn step(&self) -> WizardStep {
        self.state.lock().unwrap().step
    }

    /// Validates the current step against its rule table, then advances.
    /// Advancing itself never validates; the step's rules gate the call.
    pub fn try_advance(&self) -> Result<WizardStep> {
        let mut state = self.state.lock().unwrap();
        let errors = validation::validate_step(state.step, &state.record);
        if !errors.is_empty() {
            return Err(AppError::Validation(errors));
        }
        state.step = state.step.next();
        Ok(state.step)
    }

    pub fn retreat(&self) -> WizardStep {
        let mut state = self.state.lock().unwrap();
        state.step = state.step.prev();
        state.step
    }

    /// Total replacement of one section of the record.
    pub fn update_section(&self, update: SectionUpdate) {
        self.state.lock().unwrap().record.replace_section(update);
    }

    pub fn validate_current_step(&self) -> ValidationErrors {
        let state = self.state.lock().unwrap();
        validation::validate_step(state.step, &state.record)
    }

    // Insertion-validated list operations. An invalid entry is dropped
    // silently; the returned flag tells the shell whether to clear its input.

    pub fn add_skill(&self, skill: &str) -> bool {
        self.state
            .lock()
            .unwrap()
            .record
            .skills_education
            .add_skill(skill)
    }

    pub fn remove_skill(&self, index: usize) {
        self.state
            .lock()
            .unwrap()
            .record
            .skills_education
            .remove_skill(index);
    }

    pub fn add_education(&self, entry: EducationEntry) -> bool {
        self.state
            .lock()
            .unwrap()
            .record
            .skills_education
            .add_education(entry)
    }

    pub fn remove_education(&self, index: usize) {
        self.state
            .lock()
            .unwrap()
            .record
            .skills_education
            .remove_education(index);
    }

    pub fn add_experience(&self, entry: ExperienceEntry) -> bool {
        self.state
            .lock()
            .unwrap()
            .record
            .experience
            .add_experience(entry)
    }

    pub fn remove_experience(&self, index: usize) {
        self.state
            .lock()
            .unwrap()
            .record
            .experience
            .remove_experience(index);
    }

    pub fn add_language(&self, entry: LanguageEntry) -> bool {
        self.state
            .lock()
            .unwrap()
            .record
            .additional_info
            .add_language(entry)
    }

    pub fn remove_language(&self, index: usize) {
        self.state
            .lock()
            .unwrap()
            .record
            .additional_info
            .remove_language(index);
    }

    pub fn attach_resume(&self, name: String, size: u64) {
        self.state
            .lock()
            .unwrap()
            .record
            .additional_info
            .attach_resume(name, size);
    }

    pub fn clear_resume(&self) {
        self.state
            .lock()
            .unwrap()
            .record
            .additional_info
            .clear_resume();
    }

    /// Hands the composite record to the submission collaborator. Only
    /// available from the final step.
    pub async fn submit(&self) -> Result<()> {
        let record = {
            let state = self.state.lock().unwrap();
            if state.step != WizardStep::AdditionalInfo {
                return Err(AppError::Internal(
                    "Profile submission is only available from the final step".to_string(),
                ));
            }
            state.record.clone()
        };

        match self.submitter.submit(&record).await {
            Ok(()) => {
                self.notifier
                    .success("Profile created successfully!", "Party");
                Ok(())
            }
            Err(err) => {
                self.notifier
                    .error("Something went wrong. Please try again.", "Cross");
                Err(err)
            }
        }
    }
}
