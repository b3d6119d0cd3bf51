use serde::{Deserialize, Serialize};

/// Composite candidate profile, built one section per wizard step.
/// Never persisted; lives only for the duration of the creation flow.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileRecord {
    pub basic_info: BasicInfo,
    pub professional_info: ProfessionalInfo,
    pub skills_education: SkillsEducation,
    pub experience: Experience,
    pub additional_info: AdditionalInfo,
}

/// Total replacement payload for one section of the record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SectionUpdate {
    BasicInfo(BasicInfo),
    ProfessionalInfo(ProfessionalInfo),
    SkillsEducation(SkillsEducation),
    Experience(Experience),
    AdditionalInfo(AdditionalInfo),
}

impl ProfileRecord {
    pub fn replace_section(&mut self, update: SectionUpdate) {
        match update {
            SectionUpdate::BasicInfo(data) => self.basic_info = data,
            SectionUpdate::ProfessionalInfo(data) => self.professional_info = data,
            SectionUpdate::SkillsEducation(data) => self.skills_education = data,
            SectionUpdate::Experience(data) => self.experience = data,
            SectionUpdate::AdditionalInfo(data) => self.additional_info = data,
        }
    }
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BasicInfo {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfessionalInfo {
    pub job_title: String,
    pub years_of_experience: Option<u32>,
    pub summary: String,
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillsEducation {
    pub skills: Vec<String>,
    pub education: Vec<EducationEntry>,
}

impl SkillsEducation {
    /// Appends a skill if it is non-empty after trimming. Duplicates are
    /// permitted. Returns false when the input was rejected.
    pub fn add_skill(&mut self, skill: &str) -> bool {
        let trimmed = skill.trim();
        if trimmed.is_empty() {
            return false;
        }
        self.skills.push(trimmed.to_string());
        true
    }

    pub fn remove_skill(&mut self, index: usize) {
        if index < self.skills.len() {
            self.skills.remove(index);
        }
    }

    /// Appends an education entry when both degree and institution are
    /// non-empty after trimming. Invalid entries are dropped silently.
    pub fn add_education(&mut self, entry: EducationEntry) -> bool {
        if entry.degree.trim().is_empty() || entry.institution.trim().is_empty() {
            return false;
        }
        self.education.push(entry);
        true
    }

    pub fn remove_education(&mut self, index: usize) {
        if index < self.education.len() {
            self.education.remove(index);
        }
    }
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationEntry {
    pub degree: String,
    pub institution: String,
    pub year: String,
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub experiences: Vec<ExperienceEntry>,
}

impl Experience {
    /// Appends an experience entry when both title and company are non-empty
    /// after trimming. A current position never carries an end date.
    pub fn add_experience(&mut self, mut entry: ExperienceEntry) -> bool {
        if entry.title.trim().is_empty() || entry.company.trim().is_empty() {
            return false;
        }
        if entry.current {
            entry.end_date.clear();
        }
        self.experiences.push(entry);
        true
    }

    pub fn remove_experience(&mut self, index: usize) {
        if index < self.experiences.len() {
            self.experiences.remove(index);
        }
    }
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceEntry {
    pub title: String,
    pub company: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    pub current: bool,
    pub description: String,
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdditionalInfo {
    pub languages: Vec<LanguageEntry>,
    pub resume: Option<ResumeFile>,
    pub linkedin: String,
    pub github: String,
    pub portfolio: String,
}

impl AdditionalInfo {
    /// Appends a language when the name is non-empty after trimming.
    pub fn add_language(&mut self, entry: LanguageEntry) -> bool {
        if entry.name.trim().is_empty() {
            return false;
        }
        self.languages.push(entry);
        true
    }

    pub fn remove_language(&mut self, index: usize) {
        if index < self.languages.len() {
            self.languages.remove(index);
        }
    }

    /// Records filename and byte size only. File content is never read.
    pub fn attach_resume(&mut self, name: String, size: u64) {
        self.resume = Some(ResumeFile { name, size });
    }

    pub fn clear_resume(&mut self) {
        self.resume = None;
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageEntry {
    pub name: String,
    pub proficiency: Proficiency,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Proficiency {
    #[default]
    Basic,
    Conversational,
    Proficient,
    Fluent,
    Native,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeFile {
    pub name: String,
    pub size: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_skill_rejects_whitespace() {
        let mut section = SkillsEducation::default();
        assert!(!section.add_skill("   "));
        assert!(!section.add_skill(""));
        assert!(section.skills.is_empty());
    }

    #[test]
    fn test_add_then_remove_skill() {
        let mut section = SkillsEducation::default();
        assert!(section.add_skill("Go"));
        section.remove_skill(0);
        assert!(section.skills.is_empty());
    }

    #[test]
    fn test_add_skill_trims_and_allows_duplicates() {
        let mut section = SkillsEducation::default();
        assert!(section.add_skill("  Rust "));
        assert!(section.add_skill("Rust"));
        assert_eq!(section.skills, vec!["Rust", "Rust"]);
    }

    #[test]
    fn test_remove_skill_out_of_range_is_ignored() {
        let mut section = SkillsEducation::default();
        section.add_skill("Rust");
        section.remove_skill(5);
        assert_eq!(section.skills.len(), 1);
    }

    #[test]
    fn test_add_education_requires_degree_and_institution() {
        let mut section = SkillsEducation::default();
        assert!(!section.add_education(EducationEntry {
            degree: "BSc".into(),
            institution: "  ".into(),
            year: "2020".into(),
        }));
        assert!(!section.add_education(EducationEntry {
            degree: String::new(),
            institution: "MIT".into(),
            year: String::new(),
        }));
        assert!(section.add_education(EducationEntry {
            degree: "BSc".into(),
            institution: "MIT".into(),
            year: "2020".into(),
        }));
        assert_eq!(section.education.len(), 1);
    }

    #[test]
    fn test_add_experience_requires_title_and_company() {
        let mut section = Experience::default();
        assert!(!section.add_experience(ExperienceEntry {
            title: " ".into(),
            company: "Acme".into(),
            ..Default::default()
        }));
        assert!(section.add_experience(ExperienceEntry {
            title: "Engineer".into(),
            company: "Acme".into(),
            ..Default::default()
        }));
    }

    #[test]
    fn test_current_experience_clears_end_date() {
        let mut section = Experience::default();
        assert!(section.add_experience(ExperienceEntry {
            title: "Engineer".into(),
            company: "Acme".into(),
            end_date: "2024-01-01".into(),
            current: true,
            ..Default::default()
        }));
        assert!(section.experiences[0].end_date.is_empty());
    }

    #[test]
    fn test_add_language_requires_name() {
        let mut section = AdditionalInfo::default();
        assert!(!section.add_language(LanguageEntry {
            name: "  ".into(),
            proficiency: Proficiency::Fluent,
        }));
        assert!(section.add_language(LanguageEntry {
            name: "Spanish".into(),
            proficiency: Proficiency::Conversational,
        }));
    }

    #[test]
    fn test_resume_records_name_and_size_only() {
        let mut section = AdditionalInfo::default();
        section.attach_resume("resume.pdf".into(), 52_431);
        let resume = section.resume.as_ref().unwrap();
        assert_eq!(resume.name, "resume.pdf");
        assert_eq!(resume.size, 52_431);
        section.clear_resume();
        assert!(section.resume.is_none());
    }

    #[test]
    fn test_replace_section_is_total() {
        let mut record = ProfileRecord::default();
        record.skills_education.add_skill("Rust");
        record.replace_section(SectionUpdate::SkillsEducation(SkillsEducation::default()));
        assert!(record.skills_education.skills.is_empty());
    }
}
