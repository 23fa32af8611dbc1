//! Suggestion engine: rule-based résumé feedback.
//!
//! Pure and total: a sparse draft produces fewer suggestions, never an error.

use serde::{Deserialize, Serialize};

use crate::models::resume::ResumeDraft;
use crate::scoring::ats::{compute_preliminary_score, has_quantifiable_results};
use crate::scoring::keywords::{is_weak_phrasing, suggested_keywords};

const SUMMARY_REWRITE_BELOW: usize = 100;
const SUMMARY_FORMAT_MIN: usize = 50;
const SUMMARY_TIP_MIN: usize = 70;
const MIN_BULLETS: usize = 3;
const MIN_SKILLS: usize = 5;
const KEYWORDS_IN_TIP: usize = 3;
const SKILLS_IN_SUMMARY: usize = 3;

const SUMMARY_CLOSING: &str =
    "Committed to delivering high-quality results through effective problem-solving and collaboration.";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionBundle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enhanced_summary: Option<String>,
    pub keyword_suggestions: Vec<String>,
    pub format_suggestions: Vec<String>,
    pub ats_score: u8,
    pub improvement_tips: Vec<String>,
}

/// Runs every rule against the draft and bundles the results.
pub fn analyze_resume(draft: &ResumeDraft) -> SuggestionBundle {
    let missing = missing_keywords(draft);
    let improvement_tips = improvement_tips(draft, &missing);

    let enhanced_summary =
        (draft.summary_len() < SUMMARY_REWRITE_BELOW).then(|| enhanced_summary(draft));

    SuggestionBundle {
        enhanced_summary,
        keyword_suggestions: missing,
        format_suggestions: format_suggestions(draft),
        ats_score: compute_preliminary_score(draft),
        improvement_tips,
    }
}

/// Keywords for the draft's job title that appear neither in its skills
/// (exact match) nor in its summary (case-insensitive substring).
pub fn missing_keywords(draft: &ResumeDraft) -> Vec<String> {
    let summary = draft.summary().map(str::to_lowercase);

    suggested_keywords(draft.job_title().unwrap_or_default())
        .into_iter()
        .filter(|keyword| !draft.skills.iter().any(|s| s == keyword))
        .filter(|keyword| {
            summary
                .as_deref()
                .map_or(true, |s| !s.contains(&keyword.to_lowercase()))
        })
        .map(str::to_string)
        .collect()
}

pub fn format_suggestions(draft: &ResumeDraft) -> Vec<String> {
    let mut suggestions = Vec::new();

    if draft.summary_len() < SUMMARY_FORMAT_MIN {
        suggestions.push("Add a more detailed professional summary (100-150 words)".to_string());
    }

    if draft.experience.is_empty() {
        suggestions.push("Add work experience with detailed accomplishments".to_string());
    } else {
        if draft
            .experience
            .iter()
            .any(|e| e.description.len() < MIN_BULLETS)
        {
            suggestions.push(
                "Add more bullet points (3-5) to your work experience descriptions".to_string(),
            );
        }
        if !has_quantifiable_results(draft) {
            suggestions.push(
                "Add quantifiable achievements (%, $, metrics) to demonstrate impact".to_string(),
            );
        }
    }

    if draft.skills.len() < MIN_SKILLS {
        suggestions.push("List at least 8-10 relevant skills".to_string());
    }

    suggestions
}

pub fn improvement_tips(draft: &ResumeDraft, missing_keywords: &[String]) -> Vec<String> {
    let mut tips = Vec::new();

    if !missing_keywords.is_empty() {
        let top: Vec<&str> = missing_keywords
            .iter()
            .take(KEYWORDS_IN_TIP)
            .map(String::as_str)
            .collect();
        tips.push(format!("Consider adding these keywords: {}", top.join(", ")));
    }

    if draft.education.is_empty() {
        tips.push("Add your educational background for a complete profile".to_string());
    }

    if draft.summary_len() < SUMMARY_TIP_MIN {
        tips.push("Expand your professional summary to highlight your expertise".to_string());
    }

    if draft.description_lines().any(is_weak_phrasing) {
        tips.push(
            "Use strong action verbs and focus on achievements rather than responsibilities"
                .to_string(),
        );
    }

    if draft.certifications.is_empty() {
        tips.push("Add relevant certifications to boost your credibility".to_string());
    }

    tips
}

/// Templated summary built from title, tenure, top skills, and first employer.
pub fn enhanced_summary(draft: &ResumeDraft) -> String {
    let opening = match draft.job_title() {
        Some(title) => format!("Experienced {title} "),
        None => "Professional ".to_string(),
    };

    let entries = draft.experience.len();
    let tenure = match entries {
        0 => String::new(),
        n if n > 3 => format!("with over {n}+ years of experience"),
        n => format!("with {n}+ years of experience"),
    };

    let top_skills = draft
        .skills
        .iter()
        .take(SKILLS_IN_SUMMARY)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    let specialization = if top_skills.is_empty() {
        String::new()
    } else {
        format!(", specializing in {top_skills}")
    };

    let highlight = draft
        .experience
        .first()
        .map(|e| format!("Previously at {}", e.company().unwrap_or_default()))
        .unwrap_or_default();

    format!("{opening}{tenure}{specialization}. {highlight}. {SUMMARY_CLOSING}")
}
