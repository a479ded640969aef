//! Author profile shown on the About page and edited from the admin area.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum TimelineKind {
    Project,
    Work,
    Education,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct TimelineEntry {
    #[validate(length(min = 1, max = 20))]
    pub year: String,
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub kind: TimelineKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
/// Named group of skills, e.g. `Frontend`.
pub struct SkillGroup {
    #[validate(length(min = 1, max = 50))]
    pub name: String,
    #[serde(default)]
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub location: String,
    #[validate(email)]
    pub email: String,
    #[serde(default)]
    pub experience: String,
    #[validate(url)]
    pub github_url: Option<String>,
    #[validate(url)]
    pub linkedin_url: Option<String>,
    #[serde(default)]
    #[validate(nested)]
    pub skills: Vec<SkillGroup>,
    #[serde(default)]
    #[validate(nested)]
    pub timeline: Vec<TimelineEntry>,
}
