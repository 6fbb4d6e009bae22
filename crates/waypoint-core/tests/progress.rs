use waypoint_core::models::Timeframe;
use waypoint_core::progress::{
    active_monthly_goals, completed_goal_ids, goals_by_path, goals_by_timeframe, overall_progress,
    path_progress, percent, Progress,
};
use waypoint_core::seed::seed_state;

fn seeded() -> waypoint_core::state::TrackerState {
    seed_state(jiff::Timestamp::UNIX_EPOCH)
}

#[test]
fn seed_overall_progress_is_29_percent() {
    let state = seeded();
    assert_eq!(
        overall_progress(&state.goals),
        Progress {
            completed: 2,
            total: 7,
            percent: 29
        }
    );
}

#[test]
fn empty_goal_set_is_zero_percent() {
    assert_eq!(overall_progress(&[]).percent, 0);
    assert_eq!(percent(0, 0), 0);
}

#[test]
fn percent_rounds_half_up() {
    assert_eq!(percent(1, 7), 14);
    assert_eq!(percent(1, 8), 13);
    assert_eq!(percent(1, 2), 50);
    assert_eq!(percent(2, 3), 67);
    assert_eq!(percent(3, 3), 100);
}

#[test]
fn per_path_progress() {
    let state = seeded();
    assert_eq!(path_progress(&state.goals, "1").percent, 25);
    assert_eq!(path_progress(&state.goals, "2").percent, 33);
    assert_eq!(path_progress(&state.goals, "3").total, 0);
    assert_eq!(path_progress(&state.goals, "3").percent, 0);
}

#[test]
fn timeframe_groups_cover_all_horizons_in_order() {
    let state = seeded();
    let groups = goals_by_timeframe(&state.goals, "2");
    let order: Vec<_> = groups.iter().map(|g| g.timeframe).collect();
    assert_eq!(order, Timeframe::ALL.to_vec());

    let ids: Vec<Vec<&str>> = groups
        .iter()
        .map(|g| g.goals.iter().map(|goal| goal.id.as_str()).collect())
        .collect();
    assert_eq!(ids, vec![vec!["g5"], vec!["g6"], vec![], vec!["g7"]]);
}

#[test]
fn goals_grouped_by_path_keep_path_order() {
    let state = seeded();
    let summaries = goals_by_path(&state.career_paths, &state.goals);
    let titles: Vec<_> = summaries.iter().map(|s| s.path.title.as_str()).collect();
    assert_eq!(titles, ["Software Architect", "Technical Writer", "Data Scientist"]);
    assert_eq!(summaries[0].goals.len(), 4);
    assert_eq!(summaries[1].goals.len(), 3);
    assert!(summaries[2].goals.is_empty());
    assert_eq!(summaries[1].progress.completed, 1);
}

#[test]
fn dashboard_action_list_is_open_monthly_goals() {
    let mut state = seeded();
    assert!(active_monthly_goals(&state.goals).is_empty());

    state.goals[3].is_completed = false;
    let active: Vec<_> = active_monthly_goals(&state.goals)
        .into_iter()
        .map(|g| g.id.as_str())
        .collect();
    assert_eq!(active, ["g4"]);
}

#[test]
fn review_snapshot_lists_completed_ids_in_order() {
    let state = seeded();
    assert_eq!(completed_goal_ids(&state.goals), ["g4", "g7"]);
}
