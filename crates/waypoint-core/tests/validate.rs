use waypoint_core::models::{NewCareerPath, NewGoal, NewWeeklyReview, Timeframe};
use waypoint_core::seed::seed_state;
use waypoint_core::validate::{
    validate_new_career_path, validate_new_goal, validate_new_review, ValidationError,
};

fn new_path(title: &str, description: &str) -> NewCareerPath {
    NewCareerPath {
        title: title.to_string(),
        description: description.to_string(),
        motivation: None,
        color: "bg-rose-500".to_string(),
        image: String::new(),
    }
}

fn new_goal(path: &str, title: &str) -> NewGoal {
    NewGoal {
        career_path_id: path.to_string(),
        title: title.to_string(),
        timeframe: Timeframe::Monthly,
        parent_goal_id: None,
        due_date: None,
    }
}

#[test]
fn career_path_needs_title_and_description() {
    assert!(validate_new_career_path(&new_path("Chef", "Cook things")).is_ok());
    assert_eq!(
        validate_new_career_path(&new_path("   ", "Cook things")),
        Err(ValidationError::MissingPathFields)
    );
    assert_eq!(
        validate_new_career_path(&new_path("Chef", "")),
        Err(ValidationError::MissingPathFields)
    );
}

#[test]
fn goal_needs_title_and_existing_path() {
    let state = seed_state(jiff::Timestamp::UNIX_EPOCH);
    assert!(validate_new_goal(&new_goal("3", "Learn PyTorch"), &state.career_paths).is_ok());
    assert_eq!(
        validate_new_goal(&new_goal("3", "\t"), &state.career_paths),
        Err(ValidationError::MissingGoalTitle)
    );
    assert_eq!(
        validate_new_goal(&new_goal("nope", "Learn PyTorch"), &state.career_paths),
        Err(ValidationError::UnknownCareerPath("nope".to_string()))
    );
}

#[test]
fn review_needs_reflection() {
    let review = NewWeeklyReview {
        week_start_date: jiff::Timestamp::UNIX_EPOCH,
        summary: "  ".to_string(),
        priorities: vec![],
        completed_goal_ids: vec![],
    };
    let err = validate_new_review(&review).unwrap_err();
    assert_eq!(err.to_string(), "Please record your mindset reflection.");
}
