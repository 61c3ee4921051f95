use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Collective month summary for one accounting period.
///
/// Recomputed from scratch on every call; carries no timestamps so identical
/// inputs always produce identical summaries. `meal_rate` is carried at full
/// precision and is never pre-rounded; display rounding happens outside the
/// engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodSummary {
    pub period_id: Uuid,
    /// `total_deposit - total_meal_cost - total_individual_cost - total_shared_cost`.
    pub mess_balance: Decimal,
    pub total_deposit: Decimal,
    pub total_meals: Decimal,
    pub total_meal_cost: Decimal,
    /// `total_meal_cost / total_meals`, or zero when no meals were logged.
    pub meal_rate: Decimal,
    pub total_individual_cost: Decimal,
    pub total_shared_cost: Decimal,
}

impl PeriodSummary {
    /// Total money spent in the period across all cost categories.
    pub fn total_cost(&self) -> Decimal {
        self.total_meal_cost + self.total_individual_cost + self.total_shared_cost
    }

    /// Returns true if the mess holds more cash than it spent.
    pub fn is_surplus(&self) -> bool {
        self.mess_balance > Decimal::ZERO
    }
}
