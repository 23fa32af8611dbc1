//! Keyword tables and text detectors shared by both scorers and the suggestion engine.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Soft-skill terms suggested for every job title.
pub const COMMON_KEYWORDS: &[&str] = &[
    "team management",
    "problem-solving",
    "communication",
    "collaboration",
    "leadership",
    "project management",
];

const TECH_KEYWORDS: &[&str] = &[
    "API integration",
    "continuous integration",
    "agile methodology",
    "unit testing",
    "code review",
    "debugging",
    "software development lifecycle",
    "version control",
    "CI/CD",
    "cloud services",
];

const DESIGN_KEYWORDS: &[&str] = &[
    "user experience",
    "wireframing",
    "prototyping",
    "user research",
    "visual design",
    "design systems",
    "accessibility",
    "user testing",
];

const PRODUCT_KEYWORDS: &[&str] = &[
    "product strategy",
    "user stories",
    "market research",
    "product roadmap",
    "stakeholder management",
    "feature prioritization",
    "A/B testing",
];

const MANAGEMENT_KEYWORDS: &[&str] = &[
    "team leadership",
    "performance evaluation",
    "strategic planning",
    "resource allocation",
    "budget management",
    "stakeholder communication",
];

/// Keyword category derived from a job title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobCategory {
    Tech,
    Design,
    Product,
    Management,
    General,
}

impl JobCategory {
    /// Case-insensitive substring match, first match wins:
    /// developer/engineer, designer, product, manager, then general.
    ///
    /// "Product Engineer" is `Tech`: the order is fixed, not a best-match policy.
    pub fn classify(job_title: &str) -> Self {
        let title = job_title.to_lowercase();
        if title.contains("developer") || title.contains("engineer") {
            JobCategory::Tech
        } else if title.contains("designer") {
            JobCategory::Design
        } else if title.contains("product") {
            JobCategory::Product
        } else if title.contains("manager") {
            JobCategory::Management
        } else {
            JobCategory::General
        }
    }

    fn keywords(self) -> &'static [&'static str] {
        match self {
            JobCategory::Tech => TECH_KEYWORDS,
            JobCategory::Design => DESIGN_KEYWORDS,
            JobCategory::Product => PRODUCT_KEYWORDS,
            JobCategory::Management => MANAGEMENT_KEYWORDS,
            JobCategory::General => &[],
        }
    }
}

/// Common keywords followed by the category list for `job_title`.
pub fn suggested_keywords(job_title: &str) -> Vec<&'static str> {
    let category = JobCategory::classify(job_title);
    COMMON_KEYWORDS
        .iter()
        .chain(category.keywords())
        .copied()
        .collect()
}

static QUANTIFIABLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i-u)[0-9]+%|[0-9]+ percent|increased|decreased|improved|reduced|generated|\$[0-9]+|[0-9]+ million|[0-9]+ thousand",
    )
    .expect("quantifiable achievement pattern is valid")
});

static WEAK_OPENING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i-u)^(?:responsible for|worked on|helped with)")
        .expect("weak opening pattern is valid")
});

/// Percentages, dollar amounts, "N million/thousand", or an outcome verb.
pub fn is_quantifiable_achievement(line: &str) -> bool {
    QUANTIFIABLE.is_match(line)
}

/// Short (< 40 chars) or opens with a responsibility phrase.
pub fn is_weak_phrasing(line: &str) -> bool {
    line.chars().count() < 40 || WEAK_OPENING.is_match(line)
}
