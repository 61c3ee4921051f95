use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An active participant of the mess for one accounting period.
///
/// Identity is owned by the Record Store; the engine assumes `id` is stable
/// within a period and never enforces uniqueness itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub id: Uuid,
    pub display_name: String,
}

impl Member {
    /// Creates a member with a fresh id.
    pub fn new(display_name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            display_name: display_name.into(),
        }
    }

    /// Creates a member with a caller-supplied id.
    pub fn with_id(id: Uuid, display_name: impl Into<String>) -> Self {
        Self {
            id,
            display_name: display_name.into(),
        }
    }
}
