//! Read-side derivations over the current collections.
//!
//! Views never keep their own copy of tracker data; they re-derive
//! everything here by scanning and filtering.

use serde::Serialize;
use ts_rs::TS;

use crate::models::{CareerPath, Goal, Timeframe};

/// Completion summary for a set of goals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct Progress {
    pub completed: usize,
    pub total: usize,
    /// `round(completed / total * 100)`, or 0 for an empty set.
    pub percent: u32,
}

impl Progress {
    pub fn of<'a>(goals: impl IntoIterator<Item = &'a Goal>) -> Self {
        let (completed, total) = goals
            .into_iter()
            .fold((0, 0), |(done, total), g| (done + usize::from(g.is_completed), total + 1));
        Self {
            completed,
            total,
            percent: percent(completed, total),
        }
    }
}

pub fn percent(completed: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((completed as f64 / total as f64) * 100.0).round() as u32
}

pub fn overall_progress(goals: &[Goal]) -> Progress {
    Progress::of(goals)
}

pub fn path_progress(goals: &[Goal], path_id: &str) -> Progress {
    Progress::of(goals.iter().filter(|g| g.career_path_id == path_id))
}

pub fn goals_for_path<'a>(goals: &'a [Goal], path_id: &str) -> Vec<&'a Goal> {
    goals.iter().filter(|g| g.career_path_id == path_id).collect()
}

/// One timeframe section of a path detail view.
#[derive(Debug, Clone)]
pub struct TimeframeGroup<'a> {
    pub timeframe: Timeframe,
    pub goals: Vec<&'a Goal>,
}

/// Goals of one path, grouped by timeframe from the longest horizon down.
/// Every timeframe is present, even when it has no goals.
pub fn goals_by_timeframe<'a>(goals: &'a [Goal], path_id: &str) -> Vec<TimeframeGroup<'a>> {
    Timeframe::ALL
        .iter()
        .map(|&timeframe| TimeframeGroup {
            timeframe,
            goals: goals
                .iter()
                .filter(|g| g.career_path_id == path_id && g.timeframe == timeframe)
                .collect(),
        })
        .collect()
}

/// A career path with its goals and completion summary.
#[derive(Debug, Clone)]
pub struct PathSummary<'a> {
    pub path: &'a CareerPath,
    pub goals: Vec<&'a Goal>,
    pub progress: Progress,
}

/// Goals grouped by owning path, in path insertion order. Goals whose path
/// is missing are not included.
pub fn goals_by_path<'a>(paths: &'a [CareerPath], goals: &'a [Goal]) -> Vec<PathSummary<'a>> {
    paths
        .iter()
        .map(|path| {
            let owned = goals_for_path(goals, &path.id);
            let progress = Progress::of(owned.iter().copied());
            PathSummary {
                path,
                goals: owned,
                progress,
            }
        })
        .collect()
}

/// Monthly goals still open, the dashboard's action list.
pub fn active_monthly_goals(goals: &[Goal]) -> Vec<&Goal> {
    goals
        .iter()
        .filter(|g| g.timeframe == Timeframe::Monthly && !g.is_completed)
        .collect()
}

/// Ids of completed goals in collection order, as captured by a review.
pub fn completed_goal_ids(goals: &[Goal]) -> Vec<String> {
    goals
        .iter()
        .filter(|g| g.is_completed)
        .map(|g| g.id.clone())
        .collect()
}
