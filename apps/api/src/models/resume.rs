use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::scoring::ats::compute_ats_score;

/// A résumé as it exists while being built: every field may be missing.
///
/// An empty string and a missing key are both treated as absent by the
/// accessor methods, which is what the scorers go through.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResumeDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(deserialize_with = "null_as_empty")]
    pub skills: Vec<String>,
    #[serde(deserialize_with = "null_as_empty")]
    pub languages: Vec<String>,
    #[serde(deserialize_with = "null_as_empty")]
    pub experience: Vec<ExperienceEntry>,
    #[serde(deserialize_with = "null_as_empty")]
    pub education: Vec<EducationEntry>,
    #[serde(deserialize_with = "null_as_empty")]
    pub certifications: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExperienceEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    /// Bullet lines, counted as given (blank lines included).
    #[serde(deserialize_with = "null_as_empty")]
    pub description: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EducationEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub degree: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub institution: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

impl ResumeDraft {
    pub fn full_name(&self) -> Option<&str> {
        present(&self.full_name)
    }

    pub fn job_title(&self) -> Option<&str> {
        present(&self.job_title)
    }

    pub fn email(&self) -> Option<&str> {
        present(&self.email)
    }

    pub fn phone(&self) -> Option<&str> {
        present(&self.phone)
    }

    pub fn location(&self) -> Option<&str> {
        present(&self.location)
    }

    pub fn summary(&self) -> Option<&str> {
        present(&self.summary)
    }

    /// Summary length in characters; 0 when absent.
    pub fn summary_len(&self) -> usize {
        self.summary().map(|s| s.chars().count()).unwrap_or(0)
    }

    /// Every description line across all experience entries, in order.
    pub fn description_lines(&self) -> impl Iterator<Item = &str> {
        self.experience
            .iter()
            .flat_map(|e| e.description.iter().map(String::as_str))
    }
}

impl ExperienceEntry {
    pub fn company(&self) -> Option<&str> {
        present(&self.company)
    }
}

/// A persisted résumé.
///
/// `ats_score` is private: it is only ever produced by `compute_ats_score`,
/// through `new` or `rescore`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeRecord {
    pub id: String,
    #[serde(flatten)]
    pub draft: ResumeDraft,
    ats_score: u8,
    #[serde(default)]
    pub likes: u32,
    #[serde(default)]
    pub is_liked: bool,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl ResumeRecord {
    pub fn new(id: impl Into<String>, draft: ResumeDraft) -> Self {
        let ats_score = compute_ats_score(&draft);
        Self {
            id: id.into(),
            draft,
            ats_score,
            likes: 0,
            is_liked: false,
            is_active: false,
            created_at: None,
        }
    }

    pub fn ats_score(&self) -> u8 {
        self.ats_score
    }

    /// Replaces the content and recomputes the score.
    pub fn replace_draft(&mut self, draft: ResumeDraft) {
        self.draft = draft;
        self.rescore();
    }

    pub fn rescore(&mut self) {
        self.ats_score = compute_ats_score(&self.draft);
    }

    /// Flips `is_liked` and moves `likes` with it. Never goes below zero.
    pub fn toggle_like(&mut self) {
        self.is_liked = !self.is_liked;
        self.likes = if self.is_liked {
            self.likes.saturating_add(1)
        } else {
            self.likes.saturating_sub(1)
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_strings_are_absent() {
        let draft = ResumeDraft {
            full_name: Some(String::new()),
            summary: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(draft.full_name(), None);
        assert_eq!(draft.summary(), None);
        assert_eq!(draft.summary_len(), 0);
    }

    #[test]
    fn test_draft_deserializes_camel_case_and_nulls() {
        let draft: ResumeDraft = serde_json::from_value(json!({
            "fullName": "Alex Johnson",
            "jobTitle": "Senior Frontend Developer",
            "skills": null,
            "experience": [{ "company": "TechCorp Inc.", "startDate": "Jan 2020" }]
        }))
        .unwrap();

        assert_eq!(draft.full_name(), Some("Alex Johnson"));
        assert!(draft.skills.is_empty());
        assert_eq!(draft.experience[0].company(), Some("TechCorp Inc."));
        assert_eq!(draft.experience[0].start_date.as_deref(), Some("Jan 2020"));
        assert!(draft.experience[0].description.is_empty());
    }

    #[test]
    fn test_record_serializes_with_flat_camel_case_fields() {
        let record = ResumeRecord::new(
            "abc",
            ResumeDraft {
                full_name: Some("Alex".to_string()),
                ..Default::default()
            },
        );
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["id"], "abc");
        assert_eq!(value["fullName"], "Alex");
        assert_eq!(value["atsScore"], 10);
        assert_eq!(value["isLiked"], false);
        assert_eq!(value["isActive"], false);
        assert!(value.get("createdAt").is_none());
    }

    #[test]
    fn test_new_record_is_scored() {
        let record = ResumeRecord::new(
            "1",
            ResumeDraft {
                email: Some("a@b.c".to_string()),
                phone: Some("555".to_string()),
                ..Default::default()
            },
        );
        assert_eq!(record.ats_score(), 10);
    }

    #[test]
    fn test_replace_draft_rescores() {
        let mut record = ResumeRecord::new("1", ResumeDraft::default());
        assert_eq!(record.ats_score(), 0);
        record.replace_draft(ResumeDraft {
            full_name: Some("Alex".to_string()),
            ..Default::default()
        });
        assert_eq!(record.ats_score(), 10);
    }

    #[test]
    fn test_toggle_like_moves_in_lockstep() {
        let mut record = ResumeRecord::new("1", ResumeDraft::default());
        record.toggle_like();
        assert!(record.is_liked);
        assert_eq!(record.likes, 1);
        record.toggle_like();
        assert!(!record.is_liked);
        assert_eq!(record.likes, 0);
    }

    #[test]
    fn test_unlike_never_goes_negative() {
        let mut record = ResumeRecord::new("1", ResumeDraft::default());
        record.is_liked = true;
        record.likes = 0;
        record.toggle_like();
        assert_eq!(record.likes, 0);
        assert!(!record.is_liked);
    }
}
