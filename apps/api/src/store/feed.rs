use serde::{Deserialize, Serialize};

use crate::models::resume::ResumeRecord;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedTab {
    /// Only the active résumé, unless a search or filter is applied.
    Home,
    #[default]
    Dashboard,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FeedQuery {
    /// Free-text search over name, job title, and skills.
    #[serde(default)]
    pub q: Option<String>,
    /// `all`, `liked`, or a keyword matched against skills and job title.
    #[serde(default)]
    pub filter: Option<String>,
    #[serde(default)]
    pub tab: FeedTab,
}

impl FeedQuery {
    fn search(&self) -> Option<String> {
        self.q
            .as_deref()
            .filter(|q| !q.is_empty())
            .map(str::to_lowercase)
    }

    fn filter(&self) -> &str {
        self.filter
            .as_deref()
            .filter(|f| !f.is_empty())
            .unwrap_or("all")
    }
}

/// Applies search, filter, and the home-tab rule to a newest-first list.
///
/// When nothing is active the newest record is presented as active; the
/// stored copy is not touched.
pub fn build_feed(mut records: Vec<ResumeRecord>, query: &FeedQuery) -> Vec<ResumeRecord> {
    if !records.iter().any(|r| r.is_active) {
        if let Some(first) = records.first_mut() {
            first.is_active = true;
        }
    }

    let search = query.search();
    let filter = query.filter();
    let home_only = query.tab == FeedTab::Home && search.is_none() && filter == "all";

    records
        .into_iter()
        .filter(|r| search.as_deref().map_or(true, |q| matches_search(r, q)))
        .filter(|r| matches_filter(r, filter))
        .filter(|r| !home_only || r.is_active)
        .collect()
}

fn lower(field: Option<&str>) -> String {
    field.unwrap_or_default().to_lowercase()
}

fn matches_search(record: &ResumeRecord, needle: &str) -> bool {
    lower(record.draft.full_name()).contains(needle)
        || lower(record.draft.job_title()).contains(needle)
        || record
            .draft
            .skills
            .iter()
            .any(|s| s.to_lowercase().contains(needle))
}

fn matches_filter(record: &ResumeRecord, filter: &str) -> bool {
    match filter {
        "all" => true,
        "liked" => record.is_liked,
        keyword => {
            let keyword = keyword.to_lowercase();
            record
                .draft
                .skills
                .iter()
                .any(|s| s.to_lowercase().contains(&keyword))
                || lower(record.draft.job_title()).contains(&keyword)
        }
    }
}
