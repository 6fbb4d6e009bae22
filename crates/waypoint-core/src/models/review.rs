use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// An append-only journal entry for one week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct WeeklyReview {
    pub id: String,
    pub week_start_date: jiff::Timestamp,
    pub summary: String,
    #[serde(default)]
    pub priorities: Vec<String>,
    /// Snapshot taken at submission. Later goal deletions do not touch it.
    #[serde(default)]
    pub completed_goal_ids: Vec<String>,
    pub created_at: jiff::Timestamp,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct NewWeeklyReview {
    pub week_start_date: jiff::Timestamp,
    pub summary: String,
    #[serde(default)]
    pub priorities: Vec<String>,
    #[serde(default)]
    pub completed_goal_ids: Vec<String>,
}

impl NewWeeklyReview {
    pub fn into_review(self, id: String, created_at: jiff::Timestamp) -> WeeklyReview {
        WeeklyReview {
            id,
            week_start_date: self.week_start_date,
            summary: self.summary,
            priorities: self.priorities,
            completed_goal_ids: self.completed_goal_ids,
            created_at,
        }
    }
}
