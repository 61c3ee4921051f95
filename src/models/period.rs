use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One accounting cycle ("month") over which meals, deposits, and costs are
/// tallied. The engine operates on exactly one period at a time and has no
/// notion of period sequencing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    pub id: Uuid,
    pub is_active: bool,
}

impl Period {
    /// Creates a new active period.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            is_active: true,
        }
    }

    /// Closes the period for new records.
    pub fn close(&mut self) {
        self.is_active = false;
    }
}

impl Default for Period {
    fn default() -> Self {
        Self::new()
    }
}
