//! Serializable views derived from the current tracker state.
//!
//! Built fresh for every command; nothing here is cached between calls.

use serde::Serialize;

use waypoint_core::models::{CareerPath, Goal, Timeframe};
use waypoint_core::progress::{self, Progress};
use waypoint_core::state::TrackerState;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PathCard {
    pub id: String,
    pub title: String,
    pub description: String,
    pub color: String,
    pub progress: Progress,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub progress: Progress,
    pub paths: Vec<PathCard>,
    pub active_monthly_goals: Vec<Goal>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeframeSection {
    pub timeframe: Timeframe,
    pub title: &'static str,
    pub tagline: &'static str,
    pub goals: Vec<Goal>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PathDetail {
    pub path: CareerPath,
    pub progress: Progress,
    pub sections: Vec<TimeframeSection>,
}

pub fn path_cards(state: &TrackerState) -> Vec<PathCard> {
    progress::goals_by_path(&state.career_paths, &state.goals)
        .into_iter()
        .map(|summary| PathCard {
            id: summary.path.id.clone(),
            title: summary.path.title.clone(),
            description: summary.path.description.clone(),
            color: summary.path.color.clone(),
            progress: summary.progress,
        })
        .collect()
}

pub fn dashboard(state: &TrackerState) -> Dashboard {
    Dashboard {
        progress: progress::overall_progress(&state.goals),
        paths: path_cards(state),
        active_monthly_goals: progress::active_monthly_goals(&state.goals)
            .into_iter()
            .cloned()
            .collect(),
    }
}

pub fn path_detail(state: &TrackerState, path_id: &str) -> Option<PathDetail> {
    let path = state.career_path(path_id)?;
    let sections = progress::goals_by_timeframe(&state.goals, path_id)
        .into_iter()
        .map(|group| TimeframeSection {
            timeframe: group.timeframe,
            title: group.timeframe.title(),
            tagline: group.timeframe.tagline(),
            goals: group.goals.into_iter().cloned().collect(),
        })
        .collect();

    Some(PathDetail {
        path: path.clone(),
        progress: progress::path_progress(&state.goals, path_id),
        sections,
    })
}

/// Filters accepted by `goal list`.
#[derive(Debug, Clone, Default)]
pub struct GoalFilter {
    pub path: Option<String>,
    pub timeframe: Option<Timeframe>,
    pub completed: Option<bool>,
}

impl GoalFilter {
    pub fn matches(&self, goal: &Goal) -> bool {
        self.path.as_ref().is_none_or(|p| &goal.career_path_id == p)
            && self.timeframe.is_none_or(|tf| goal.timeframe == tf)
            && self.completed.is_none_or(|done| goal.is_completed == done)
    }

    pub fn apply<'a>(&self, goals: &'a [Goal]) -> Vec<&'a Goal> {
        goals.iter().filter(|g| self.matches(g)).collect()
    }
}
