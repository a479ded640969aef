//! Cross-content search results.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SearchKind {
    Post,
    Project,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
/// A single hit, already shaped for the search dialog.
pub struct SearchResult {
    pub kind: SearchKind,
    pub id: i64,
    pub title: String,
    pub description: String,
    /// Client route of the matching page.
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tech_stack: Option<Vec<String>>,
    /// Post creation date or project start date, as displayed.
    pub date: String,
}

impl SearchResult {
    pub fn post_date(date: NaiveDate) -> String {
        date.format("%Y-%m-%d").to_string()
    }
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams, ToSchema)]
pub struct SearchQuery {
    pub q: Option<String>,
}
