//! Result types for the remote resources the pages display. The backend owns
//! them; these are read-only snapshots of the last fetch.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Child {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub xp: i64,
    #[serde(default)]
    pub gold: i64,
    #[serde(default)]
    pub parent_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Quest {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub xp: i64,
    #[serde(default)]
    pub gold: i64,
    #[serde(default)]
    pub parent_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Reward {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub xp_threshold: i64,
    #[serde(default)]
    pub parent_id: Option<String>,
}

/// The part of a quest embedded in an assignment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuestSummary {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub xp: Option<i64>,
    #[serde(default)]
    pub gold: Option<i64>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AssignmentStatus {
    Assigned,
    Completed,
    #[serde(other)]
    Unknown,
}

impl AssignmentStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Assigned => "ASSIGNED",
            Self::Completed => "COMPLETED",
            Self::Unknown => "UNKNOWN",
        }
    }

    pub const fn is_completed(self) -> bool {
        matches!(self, Self::Completed)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    pub id: String,
    pub status: AssignmentStatus,
    #[serde(default)]
    pub child_id: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub completed_at: Option<String>,
    pub quest: QuestSummary,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionStatus {
    pub active: bool,
    #[serde(default)]
    pub current_period_end: Option<String>,
}

impl SubscriptionStatus {
    /// "Active (until 2025-01-31)" / "Inactive"
    pub fn describe(&self) -> String {
        let state = if self.active { "Active" } else { "Inactive" };
        match &self.current_period_end {
            Some(end) => format!("{state} (until {end})"),
            None => state.to_string(),
        }
    }
}
