use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Planning horizon of a goal.
///
/// Variants are declared coarse-to-fine, so the derived `Ord` puts the
/// longest horizon first. Display grouping relies on that order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Timeframe {
    #[serde(rename = "5y")]
    FiveYear,
    #[serde(rename = "1y")]
    OneYear,
    #[serde(rename = "6m")]
    SixMonth,
    #[serde(rename = "monthly")]
    Monthly,
}

impl Timeframe {
    pub const ALL: [Timeframe; 4] = [
        Timeframe::FiveYear,
        Timeframe::OneYear,
        Timeframe::SixMonth,
        Timeframe::Monthly,
    ];

    /// Wire value, identical to the serde representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Timeframe::FiveYear => "5y",
            Timeframe::OneYear => "1y",
            Timeframe::SixMonth => "6m",
            Timeframe::Monthly => "monthly",
        }
    }

    /// Section heading used when goals are grouped by timeframe.
    pub fn title(self) -> &'static str {
        match self {
            Timeframe::FiveYear => "5-Year Vision",
            Timeframe::OneYear => "1-Year Goals",
            Timeframe::SixMonth => "6-Month Focus",
            Timeframe::Monthly => "Monthly Action",
        }
    }

    pub fn tagline(self) -> &'static str {
        match self {
            Timeframe::FiveYear => "The North Star",
            Timeframe::OneYear => "Major Milestones",
            Timeframe::SixMonth => "Core Momentum",
            Timeframe::Monthly => "Tactical Steps",
        }
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Timeframe {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "5y" | "5-year" | "five-year" => Ok(Timeframe::FiveYear),
            "1y" | "1-year" | "one-year" => Ok(Timeframe::OneYear),
            "6m" | "6-month" | "six-month" => Ok(Timeframe::SixMonth),
            "monthly" | "1m" | "month" => Ok(Timeframe::Monthly),
            other => Err(CoreError::UnknownTimeframe(other.to_string())),
        }
    }
}

/// A concrete objective scoped to one timeframe, optionally linked to the
/// coarser goal it supports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Goal {
    pub id: String,
    pub career_path_id: String,
    pub title: String,
    pub timeframe: Timeframe,
    /// Not validated: may point at a goal that no longer exists.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_goal_id: Option<String>,
    pub is_completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(as = "Option<String>")]
    pub due_date: Option<jiff::civil::Date>,
    pub created_at: jiff::Timestamp,
}

/// Caller-supplied fields for a new goal.
///
/// Carries no completion flag. New goals always start open, and an
/// `isCompleted` key in incoming JSON is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct NewGoal {
    pub career_path_id: String,
    pub title: String,
    pub timeframe: Timeframe,
    #[serde(default)]
    pub parent_goal_id: Option<String>,
    #[serde(default)]
    #[ts(as = "Option<String>")]
    pub due_date: Option<jiff::civil::Date>,
}

impl NewGoal {
    pub fn into_goal(self, id: String, created_at: jiff::Timestamp) -> Goal {
        Goal {
            id,
            career_path_id: self.career_path_id,
            title: self.title,
            timeframe: self.timeframe,
            parent_goal_id: self.parent_goal_id,
            is_completed: false,
            due_date: self.due_date,
            created_at,
        }
    }
}

/// Partial update for a goal. Identity and creation time are excluded.
///
/// `parent_goal_id` and `due_date` follow the same leave / clear / set
/// convention as [`CareerPathPatch`](super::CareerPathPatch).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct GoalPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub career_path_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeframe: Option<Timeframe>,
    #[serde(
        default,
        deserialize_with = "crate::models::double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub parent_goal_id: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_completed: Option<bool>,
    #[serde(
        default,
        deserialize_with = "crate::models::double_option",
        skip_serializing_if = "Option::is_none"
    )]
    #[ts(as = "Option<Option<String>>")]
    pub due_date: Option<Option<jiff::civil::Date>>,
}

impl GoalPatch {
    pub fn is_empty(&self) -> bool {
        self.career_path_id.is_none()
            && self.title.is_none()
            && self.timeframe.is_none()
            && self.parent_goal_id.is_none()
            && self.is_completed.is_none()
            && self.due_date.is_none()
    }
}

impl Goal {
    pub fn apply(&mut self, patch: GoalPatch) {
        if let Some(career_path_id) = patch.career_path_id {
            self.career_path_id = career_path_id;
        }
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(timeframe) = patch.timeframe {
            self.timeframe = timeframe;
        }
        if let Some(parent_goal_id) = patch.parent_goal_id {
            self.parent_goal_id = parent_goal_id;
        }
        if let Some(is_completed) = patch.is_completed {
            self.is_completed = is_completed;
        }
        if let Some(due_date) = patch.due_date {
            self.due_date = due_date;
        }
    }
}
