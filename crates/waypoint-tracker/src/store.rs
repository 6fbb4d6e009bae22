use jiff::Timestamp;
use serde_json::json;
use tracing::{error, info, warn};

use waypoint_core::models::{
    new_id, CareerPath, CareerPathPatch, Goal, GoalPatch, NewCareerPath, NewGoal,
    NewWeeklyReview, WeeklyReview,
};
use waypoint_core::seed::seed_state;
use waypoint_core::state::TrackerState;
use waypoint_storage::error::StorageError;
use waypoint_storage::state::{load_state, save_state};
use waypoint_storage::StateSlot;

use crate::error::TrackerError;
use crate::events::{Entity, StoreEvent};

/// Owner of all tracker state.
///
/// Operations are synchronous and total: an unknown id is a silent no-op,
/// never an error. Each mutation ends with a full snapshot save to the
/// slot. A failed save does not fail the mutation; it is logged and kept
/// for [`GoalStore::take_persist_error`].
pub struct GoalStore<S: StateSlot> {
    state: TrackerState,
    slot: S,
    persist_error: Option<TrackerError>,
}

impl<S: StateSlot> GoalStore<S> {
    /// Load the snapshot from `slot`, or start from seed data when the slot
    /// is empty or holds something that does not parse.
    ///
    /// Any other read failure is returned as [`TrackerError::Load`]: the
    /// snapshot may still be intact, and seeding here would overwrite it on
    /// the next save.
    pub fn open(slot: S) -> Result<Self, TrackerError> {
        let state = match load_state::<TrackerState>(&slot) {
            Ok(Some(state)) => {
                info!(
                    slot = %slot.describe(),
                    career_paths = state.career_paths.len(),
                    goals = state.goals.len(),
                    reviews = state.reviews.len(),
                    "loaded tracker snapshot"
                );
                state
            }
            Ok(None) => {
                info!(slot = %slot.describe(), "no snapshot found, starting from seed data");
                seed_state(Timestamp::now())
            }
            Err(StorageError::Serialization(e)) => {
                warn!(slot = %slot.describe(), error = %e, "snapshot malformed, starting from seed data");
                seed_state(Timestamp::now())
            }
            Err(e) => {
                error!(slot = %slot.describe(), error = %e, "failed to read tracker snapshot");
                return Err(TrackerError::Load(e));
            }
        };

        Ok(Self::with_state(slot, state))
    }

    /// Start from `state` without reading the slot.
    pub fn with_state(slot: S, state: TrackerState) -> Self {
        Self {
            state,
            slot,
            persist_error: None,
        }
    }

    pub fn state(&self) -> &TrackerState {
        &self.state
    }

    pub fn career_paths(&self) -> &[CareerPath] {
        &self.state.career_paths
    }

    pub fn goals(&self) -> &[Goal] {
        &self.state.goals
    }

    pub fn reviews(&self) -> &[WeeklyReview] {
        &self.state.reviews
    }

    pub fn career_path(&self, id: &str) -> Option<&CareerPath> {
        self.state.career_path(id)
    }

    pub fn goal(&self, id: &str) -> Option<&Goal> {
        self.state.goal(id)
    }

    pub fn slot(&self) -> &S {
        &self.slot
    }

    pub fn add_career_path(&mut self, new: NewCareerPath) -> CareerPath {
        let path = new.into_career_path(new_id(), Timestamp::now());
        self.state.career_paths.push(path.clone());

        StoreEvent::new("add", Entity::CareerPath, &path.id).emit();
        self.persist();
        path
    }

    /// Remove a path together with every goal that belongs to it. Returns
    /// whether the path existed.
    pub fn delete_career_path(&mut self, id: &str) -> bool {
        let paths_before = self.state.career_paths.len();
        let goals_before = self.state.goals.len();

        self.state.career_paths.retain(|p| p.id != id);
        self.state.goals.retain(|g| g.career_path_id != id);

        let removed = self.state.career_paths.len() != paths_before;
        let cascaded = goals_before - self.state.goals.len();

        StoreEvent::new("delete", Entity::CareerPath, id)
            .applied(removed)
            .with_details(json!({ "cascaded_goals": cascaded }))
            .emit();
        self.persist();
        removed
    }

    pub fn update_career_path(&mut self, id: &str, patch: CareerPathPatch) -> bool {
        let updated = match self.state.career_paths.iter_mut().find(|p| p.id == id) {
            Some(path) => {
                path.apply(patch);
                true
            }
            None => false,
        };

        StoreEvent::new("update", Entity::CareerPath, id)
            .applied(updated)
            .emit();
        self.persist();
        updated
    }

    /// Append a goal. The new goal always starts open; the referenced path
    /// is not checked.
    pub fn add_goal(&mut self, new: NewGoal) -> Goal {
        let goal = new.into_goal(new_id(), Timestamp::now());
        self.state.goals.push(goal.clone());

        StoreEvent::new("add", Entity::Goal, &goal.id)
            .with_details(json!({
                "career_path_id": goal.career_path_id,
                "timeframe": goal.timeframe,
            }))
            .emit();
        self.persist();
        goal
    }

    /// Flip completion. Returns the new value, or `None` if no goal matched.
    pub fn toggle_goal(&mut self, id: &str) -> Option<bool> {
        let toggled = self.state.goals.iter_mut().find(|g| g.id == id).map(|goal| {
            goal.is_completed = !goal.is_completed;
            goal.is_completed
        });

        let mut event = StoreEvent::new("toggle", Entity::Goal, id).applied(toggled.is_some());
        if let Some(done) = toggled {
            event = event.with_details(json!({ "is_completed": done }));
        }
        event.emit();
        self.persist();
        toggled
    }

    pub fn update_goal(&mut self, id: &str, patch: GoalPatch) -> bool {
        let updated = match self.state.goals.iter_mut().find(|g| g.id == id) {
            Some(goal) => {
                goal.apply(patch);
                true
            }
            None => false,
        };

        StoreEvent::new("update", Entity::Goal, id)
            .applied(updated)
            .emit();
        self.persist();
        updated
    }

    /// Remove one goal. Goals naming it as parent keep their (now
    /// dangling) `parent_goal_id`.
    pub fn delete_goal(&mut self, id: &str) -> bool {
        let before = self.state.goals.len();
        self.state.goals.retain(|g| g.id != id);
        let removed = self.state.goals.len() != before;

        StoreEvent::new("delete", Entity::Goal, id)
            .applied(removed)
            .emit();
        self.persist();
        removed
    }

    /// Append a review. `completed_goal_ids` is stored verbatim.
    pub fn add_review(&mut self, new: NewWeeklyReview) -> WeeklyReview {
        let review = new.into_review(new_id(), Timestamp::now());
        self.state.reviews.push(review.clone());

        StoreEvent::new("add", Entity::Review, &review.id)
            .with_details(json!({ "completed_goals": review.completed_goal_ids.len() }))
            .emit();
        self.persist();
        review
    }

    /// Save the current snapshot now, reporting any storage failure.
    pub fn flush(&mut self) -> Result<(), TrackerError> {
        save_state(&mut self.slot, &self.state)?;
        self.persist_error = None;
        Ok(())
    }

    /// The most recent save failure, if the last save did not succeed.
    pub fn take_persist_error(&mut self) -> Option<TrackerError> {
        self.persist_error.take()
    }

    pub fn into_parts(self) -> (TrackerState, S) {
        (self.state, self.slot)
    }

    fn persist(&mut self) {
        match save_state(&mut self.slot, &self.state) {
            Ok(()) => self.persist_error = None,
            Err(e) => {
                warn!(slot = %self.slot.describe(), error = %e, "failed to persist tracker snapshot");
                self.persist_error = Some(e.into());
            }
        }
    }
}
