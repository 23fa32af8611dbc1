// ATS scoring and suggestion engine.
// The scorers and the suggestion rules are pure functions over `ResumeDraft`;
// `analyzer` is the async seam handlers go through. `assistant` holds the
// scripted chat and topic advice.

pub mod analyzer;
pub mod assistant;
pub mod ats;
pub mod handlers;
pub mod keywords;
pub mod suggestions;
