//! ATS scoring: two independent point tables over a résumé draft.
//!
//! `compute_ats_score` is the persisted score stored on every record.
//! `compute_preliminary_score` is the advisory score shown while a draft is
//! still being edited. They are different formulas used at different points
//! in the flow and must not be merged.

use serde::{Deserialize, Serialize};

use crate::models::resume::ResumeDraft;
use crate::scoring::keywords::is_quantifiable_achievement;

const MAX_SCORE: usize = 100;
const PRELIMINARY_BASE: usize = 60;

/// Additive completeness score in [0, 100]. Absent fields contribute zero.
///
/// | Condition | Points |
/// |---|---|
/// | full name | 10 |
/// | email, phone, location | 5 each |
/// | summary > 50 chars | 10 |
/// | skills | min(n × 2, 15) |
/// | experience entries | min(n × 10, 30) |
/// | each entry's description lines | min(lines × 2, 10) |
/// | education entries | min(n × 5, 10) |
/// | certifications | min(n × 2, 10) |
pub fn compute_ats_score(draft: &ResumeDraft) -> u8 {
    let mut score = 0usize;

    if draft.full_name().is_some() {
        score += 10;
    }
    if draft.email().is_some() {
        score += 5;
    }
    if draft.phone().is_some() {
        score += 5;
    }
    if draft.location().is_some() {
        score += 5;
    }
    if draft.summary_len() > 50 {
        score += 10;
    }

    score += (draft.skills.len() * 2).min(15);
    score += (draft.experience.len() * 10).min(30);
    score += draft
        .experience
        .iter()
        .map(|e| (e.description.len() * 2).min(10))
        .sum::<usize>();
    score += (draft.education.len() * 5).min(10);
    score += (draft.certifications.len() * 2).min(10);

    score.min(MAX_SCORE) as u8
}

/// Advisory score: base 60 plus fixed bonuses, capped at 100.
pub fn compute_preliminary_score(draft: &ResumeDraft) -> u8 {
    let mut score = PRELIMINARY_BASE;

    if draft.summary_len() > 70 {
        score += 5;
    }
    if draft.skills.len() >= 5 {
        score += 5;
    }
    if draft.experience.len() >= 2 {
        score += 5;
    }
    if !draft.education.is_empty() {
        score += 5;
    }
    if !draft.certifications.is_empty() {
        score += 5;
    }

    let has_detailed_entry = draft.experience.iter().any(|e| {
        e.description.len() >= 3 && e.description.iter().any(|d| d.chars().count() > 40)
    });
    if has_detailed_entry {
        score += 5;
    }

    if has_quantifiable_results(draft) {
        score += 10;
    }

    score.min(MAX_SCORE) as u8
}

/// True when any experience description line reads as a measurable outcome.
pub fn has_quantifiable_results(draft: &ResumeDraft) -> bool {
    draft.description_lines().any(is_quantifiable_achievement)
}

/// Display band for a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreTier {
    Excellent,
    Good,
    Fair,
    NeedsWork,
}

impl ScoreTier {
    pub fn from_score(score: u8) -> Self {
        match score {
            s if s >= 90 => ScoreTier::Excellent,
            s if s >= 75 => ScoreTier::Good,
            s if s >= 60 => ScoreTier::Fair,
            _ => ScoreTier::NeedsWork,
        }
    }
}
