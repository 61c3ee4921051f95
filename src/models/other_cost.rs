use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// How a non-meal cost is attributed to members.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CostScope {
    /// Split equally across all active members of the period, regardless of
    /// which member the record names.
    Shared,
    /// Attributed entirely to the named member.
    Individual,
}

impl CostScope {
    /// Returns true if the cost is split across the roster.
    pub fn is_shared(&self) -> bool {
        matches!(self, CostScope::Shared)
    }
}

/// A non-meal expense for the period: utilities, cleaning supplies, a
/// member's personal purchase, and so on.
///
/// For shared costs `member_id` names the payer of record; for individual
/// costs it names the member who bears the charge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OtherCost {
    pub id: Uuid,
    pub period_id: Uuid,
    pub member_id: Uuid,
    pub amount: Decimal,
    pub date: NaiveDate,
    pub scope: CostScope,
    pub metadata: Option<serde_json::Value>,
}

impl OtherCost {
    /// Creates a cost split equally across the roster.
    pub fn shared(period_id: Uuid, member_id: Uuid, amount: Decimal, date: NaiveDate) -> Self {
        Self::new(period_id, member_id, amount, date, CostScope::Shared)
    }

    /// Creates a cost charged entirely to one member.
    pub fn individual(period_id: Uuid, member_id: Uuid, amount: Decimal, date: NaiveDate) -> Self {
        Self::new(period_id, member_id, amount, date, CostScope::Individual)
    }

    fn new(
        period_id: Uuid,
        member_id: Uuid,
        amount: Decimal,
        date: NaiveDate,
        scope: CostScope,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            period_id,
            member_id,
            amount,
            date,
            scope,
            metadata: None,
        }
    }

    /// Attaches free-form metadata carried through from the Record Store.
    pub fn with_metadata(mut self, metadata: serde_json::Value) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Returns true if the cost is split across the roster.
    pub fn is_shared(&self) -> bool {
        self.scope.is_shared()
    }
}
