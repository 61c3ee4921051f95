use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Money spent on groceries consumed by the whole mess.
///
/// `member_id` records who purchased, for provenance and display only. The
/// purchaser is not exempt from meal-rate charges; everyone pays
/// `meal_count x meal_rate` regardless of who carried the shopping bags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealCost {
    pub id: Uuid,
    pub period_id: Uuid,
    /// Purchaser of record.
    pub member_id: Uuid,
    pub amount: Decimal,
    pub date: NaiveDate,
    pub metadata: Option<serde_json::Value>,
}

impl MealCost {
    /// Creates a meal-cost record.
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
}
