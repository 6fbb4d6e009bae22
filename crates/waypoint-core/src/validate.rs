//! Caller-side checks run before a store operation is invoked.
//!
//! The tracker itself never validates; these are the presence checks the
//! entry forms apply. Each error message is the notice shown to the user.

use thiserror::Error;

use crate::models::{CareerPath, NewCareerPath, NewGoal, NewWeeklyReview};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill in the title and description")]
    MissingPathFields,

    #[error("Please enter a goal title")]
    MissingGoalTitle,

    #[error("unknown career path: {0}")]
    UnknownCareerPath(String),

    #[error("Please record your mindset reflection.")]
    MissingReflection,
}

fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

pub fn validate_new_career_path(path: &NewCareerPath) -> Result<(), ValidationError> {
    if is_blank(&path.title) || is_blank(&path.description) {
        return Err(ValidationError::MissingPathFields);
    }
    Ok(())
}

/// A goal needs a title and must name one of the existing `paths`.
pub fn validate_new_goal(goal: &NewGoal, paths: &[CareerPath]) -> Result<(), ValidationError> {
    if is_blank(&goal.title) {
        return Err(ValidationError::MissingGoalTitle);
    }
    if !paths.iter().any(|p| p.id == goal.career_path_id) {
        return Err(ValidationError::UnknownCareerPath(goal.career_path_id.clone()));
    }
    Ok(())
}

pub fn validate_new_review(review: &NewWeeklyReview) -> Result<(), ValidationError> {
    if is_blank(&review.summary) {
        return Err(ValidationError::MissingReflection);
    }
    Ok(())
}
