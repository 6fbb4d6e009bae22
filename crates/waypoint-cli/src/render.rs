//! Plain-text rendering for human output.

use std::fmt::Write;

use waypoint_core::models::{CareerPath, Goal, WeeklyReview};
use waypoint_core::progress::Progress;

use crate::views::{Dashboard, PathCard, PathDetail};

const BAR_WIDTH: usize = 20;

pub fn progress_bar(progress: &Progress) -> String {
    let filled = (progress.percent as usize * BAR_WIDTH).div_ceil(100).min(BAR_WIDTH);
    format!(
        "[{}{}] {:>3}% ({}/{})",
        "#".repeat(filled),
        "-".repeat(BAR_WIDTH - filled),
        progress.percent,
        progress.completed,
        progress.total
    )
}

pub fn goal_line(goal: &Goal) -> String {
    let mark = if goal.is_completed { "x" } else { " " };
    let mut line = format!("[{mark}] {} ({}) {}", goal.title, goal.timeframe, goal.id);
    if let Some(due) = goal.due_date {
        let _ = write!(line, " due {due}");
    }
    if let Some(parent) = &goal.parent_goal_id {
        let _ = write!(line, " <- {parent}");
    }
    line
}

fn path_card(out: &mut String, card: &PathCard) {
    let _ = writeln!(out, "  {} [{}]", card.title, card.id);
    let _ = writeln!(out, "    {}", card.description);
    let _ = writeln!(out, "    {}", progress_bar(&card.progress));
}

pub fn dashboard(view: &Dashboard) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Overall {}", progress_bar(&view.progress));
    let _ = writeln!(out);
    let _ = writeln!(out, "Career paths:");
    for card in &view.paths {
        path_card(&mut out, card);
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "Monthly actions:");
    if view.active_monthly_goals.is_empty() {
        let _ = writeln!(out, "  All caught up.");
    }
    for goal in &view.active_monthly_goals {
        let _ = writeln!(out, "  {}", goal_line(goal));
    }
    out
}

pub fn path_list(cards: &[PathCard]) -> String {
    if cards.is_empty() {
        return "No career paths yet.\n".to_string();
    }
    let mut out = String::new();
    for card in cards {
        path_card(&mut out, card);
    }
    out
}

pub fn path_detail(view: &PathDetail) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} [{}]", view.path.title, view.path.id);
    let _ = writeln!(out, "{}", view.path.description);
    if let Some(motivation) = &view.path.motivation {
        let _ = writeln!(out, "Why: {motivation}");
    }
    let _ = writeln!(out, "{}", progress_bar(&view.progress));
    for section in &view.sections {
        let _ = writeln!(out);
        let _ = writeln!(out, "{} - {}", section.title, section.tagline);
        if section.goals.is_empty() {
            let _ = writeln!(out, "  (none)");
        }
        for goal in &section.goals {
            let _ = writeln!(out, "  {}", goal_line(goal));
        }
    }
    out
}

pub fn career_path(path: &CareerPath) -> String {
    format!("{} [{}]\n", path.title, path.id)
}

pub fn goal_list(goals: &[&Goal]) -> String {
    if goals.is_empty() {
        return "No goals match.\n".to_string();
    }
    goals.iter().map(|g| format!("{}\n", goal_line(g))).collect()
}

pub fn review(review: &WeeklyReview) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Week of {} [{}]",
        review.week_start_date.strftime("%Y-%m-%d"),
        review.id
    );
    let _ = writeln!(out, "  {}", review.summary);
    for (i, priority) in review.priorities.iter().enumerate() {
        let _ = writeln!(out, "  {}. {priority}", i + 1);
    }
    let _ = writeln!(
        out,
        "  Completed goals: {}",
        if review.completed_goal_ids.is_empty() {
            "none".to_string()
        } else {
            review.completed_goal_ids.join(", ")
        }
    );
    out
}

pub fn review_list(reviews: &[WeeklyReview]) -> String {
    if reviews.is_empty() {
        return "No reviews logged yet.\n".to_string();
    }
    reviews.iter().map(review).collect()
}
