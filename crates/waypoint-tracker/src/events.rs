use tracing::info;

/// Record type a store event refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    CareerPath,
    Goal,
    Review,
}

impl Entity {
    pub fn as_str(self) -> &'static str {
        match self {
            Entity::CareerPath => "career_path",
            Entity::Goal => "goal",
            Entity::Review => "review",
        }
    }
}

/// A structured event for one store mutation.
///
/// Logged via `tracing` so mutations show up alongside the rest of the
/// application's logs.
#[derive(Debug, Clone)]
pub struct StoreEvent {
    pub action: &'static str,
    pub entity: Entity,
    pub entity_id: String,
    /// False when the target id was not found and nothing changed.
    pub applied: bool,
    pub details: Option<serde_json::Value>,
}

impl StoreEvent {
    pub fn new(action: &'static str, entity: Entity, entity_id: impl Into<String>) -> Self {
        Self {
            action,
            entity,
            entity_id: entity_id.into(),
            applied: true,
            details: None,
        }
    }

    pub fn applied(mut self, applied: bool) -> Self {
        self.applied = applied;
        self
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Emit this event via tracing.
    pub fn emit(&self) {
        match &self.details {
            Some(details) => info!(
                store.action = self.action,
                store.entity = self.entity.as_str(),
                store.entity_id = %self.entity_id,
                store.applied = self.applied,
                store.details = %details,
                "store event"
            ),
            None => info!(
                store.action = self.action,
                store.entity = self.entity.as_str(),
                store.entity_id = %self.entity_id,
                store.applied = self.applied,
                "store event"
            ),
        }
    }
}
