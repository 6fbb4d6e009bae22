//! Placeholder content used when no snapshot has been persisted yet.

use crate::models::{CareerPath, Goal, Timeframe};
use crate::state::TrackerState;

const IMAGE_BASE: &str = "https://storage.googleapis.com/dala-prod-public-storage/generated-images/42e95c56-4525-4d12-a02d-2eb0bd5219e6";

/// Build the seed state with every `created_at` set to `now`.
///
/// Three career paths and seven goals. Goals `g1`..`g4` belong to path `1`
/// and chain through `parent_goal_id`; `g5`..`g7` belong to path `2`.
/// `g4` and `g7` start completed. Path `3` has no goals.
pub fn seed_state(now: jiff::Timestamp) -> TrackerState {
    TrackerState {
        career_paths: seed_career_paths(now),
        goals: seed_goals(now),
        reviews: Vec::new(),
    }
}

fn seed_career_paths(now: jiff::Timestamp) -> Vec<CareerPath> {
    let path = |id: &str, title: &str, description: &str, motivation: &str, color: &str, image: &str| {
        CareerPath {
            id: id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            motivation: Some(motivation.to_string()),
            color: color.to_string(),
            image: format!("{IMAGE_BASE}/{image}"),
            created_at: now,
        }
    };

    vec![
        path(
            "1",
            "Software Architect",
            "Mastering distributed systems and cloud infrastructure.",
            "To build resilient systems that serve millions.",
            "bg-indigo-500",
            "vision-1-indigo-38e23525-1772018734398.webp",
        ),
        path(
            "2",
            "Technical Writer",
            "Sharing knowledge through clear, concise documentation.",
            "To make complex technology accessible to everyone.",
            "bg-emerald-500",
            "vision-2-emerald-bfb2f5b3-1772018733887.webp",
        ),
        path(
            "3",
            "Data Scientist",
            "Becoming an expert in machine learning and data storytelling.",
            "To uncover insights that drive meaningful change.",
            "bg-violet-500",
            "vision-3-violet-fbd1631f-1772018733999.webp",
        ),
    ]
}

fn seed_goals(now: jiff::Timestamp) -> Vec<Goal> {
    let goal = |id: &str, path: &str, title: &str, timeframe: Timeframe, parent: Option<&str>, done: bool| Goal {
        id: id.to_string(),
        career_path_id: path.to_string(),
        title: title.to_string(),
        timeframe,
        parent_goal_id: parent.map(str::to_string),
        is_completed: done,
        due_date: None,
        created_at: now,
    };

    vec![
        goal("g1", "1", "Senior Software Architect Role", Timeframe::FiveYear, None, false),
        goal("g2", "1", "Master Distributed Systems Design", Timeframe::OneYear, Some("g1"), false),
        goal("g3", "1", "Complete Advanced Kubernetes Cert", Timeframe::SixMonth, Some("g2"), false),
        goal("g4", "1", "Study CAP Theorem & Consensus", Timeframe::Monthly, Some("g3"), true),
        goal("g5", "2", "Publish Best-Selling Tech Book", Timeframe::FiveYear, None, false),
        goal("g6", "2", "Write 24 Deep-Dive Blog Posts", Timeframe::OneYear, Some("g5"), false),
        goal("g7", "2", "Establish Writing Daily Habit", Timeframe::Monthly, None, true),
    ]
}
