pub mod career_path;
pub mod goal;
pub mod review;

use serde::{Deserialize, Deserializer};

pub use career_path::{CareerPath, CareerPathPatch, NewCareerPath};
pub use goal::{Goal, GoalPatch, NewGoal, Timeframe};
pub use review::{NewWeeklyReview, WeeklyReview};

/// Generate a fresh record id. Ids are UUID v4 strings, so they never
/// collide with each other or with the short seed ids.
pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Field deserializer for patch fields that can be cleared. A present key
/// becomes `Some(_)`, so `null` reads as `Some(None)`; an absent key falls
/// back to the field default of `None`.
pub(crate) fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
