use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Money a member paid into the mess fund during a period.
///
/// A valid deposit has `amount > 0`; validation is a Record Store concern.
/// The engine tolerates non-positive amounts by treating them as zero
/// contribution (see [`Deposit::contribution`]) without rejecting the
/// record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deposit {
    pub id: Uuid,
    pub period_id: Uuid,
    pub member_id: Uuid,
    pub amount: Decimal,
    pub date: NaiveDate,
    pub metadata: Option<serde_json::Value>,
}

impl Deposit {
    /// Creates a deposit record.
    pub fn new(period_id: Uuid, member_id: Uuid, amount: Decimal, date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            period_id,
            member_id,
            amount,
            date,
            metadata: None,
        }
    }

    /// Attaches free-form metadata carried through from the Record Store.
    pub fn with_metadata(mut self, metadata: serde_json::Value) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Amount this deposit contributes to the mess's cash position.
    ///
    /// Non-positive amounts contribute zero. Both the period total and the
    /// per-member totals sum this value, so the conservation identity holds
    /// even for degenerate records.
    pub fn contribution(&self) -> Decimal {
        self.amount.max(Decimal::ZERO)
    }
}
