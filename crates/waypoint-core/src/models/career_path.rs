use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A top-level domain of ambition the user is pursuing (e.g. a career role).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CareerPath {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub motivation: Option<String>,
    /// Presentation tag, opaque to the tracker.
    pub color: String,
    /// Presentation image reference, opaque to the tracker.
    pub image: String,
    pub created_at: jiff::Timestamp,
}

/// Caller-supplied fields for a new career path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct NewCareerPath {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub motivation: Option<String>,
    pub color: String,
    pub image: String,
}

impl NewCareerPath {
    pub fn into_career_path(self, id: String, created_at: jiff::Timestamp) -> CareerPath {
        CareerPath {
            id,
            title: self.title,
            description: self.description,
            motivation: self.motivation,
            color: self.color,
            image: self.image,
            created_at,
        }
    }
}

/// Partial update for a career path. `id` and `created_at` are not part of
/// the patchable set.
///
/// `motivation` is doubly optional: `None` leaves it alone, `Some(None)`
/// clears it and `Some(Some(_))` replaces it. Over JSON that is an absent
/// key, `null` and a string respectively.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct CareerPathPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(
        default,
        deserialize_with = "crate::models::double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub motivation: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl CareerPathPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.motivation.is_none()
            && self.color.is_none()
            && self.image.is_none()
    }
}

impl CareerPath {
    /// Merge a patch onto this path.
    pub fn apply(&mut self, patch: CareerPathPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(motivation) = patch.motivation {
            self.motivation = motivation;
        }
        if let Some(color) = patch.color {
            self.color = color;
        }
        if let Some(image) = patch.image {
            self.image = image;
        }
    }
}
