use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One member's settlement row for a period.
///
/// `balance` is the member's net position: deposits minus their share of
/// meal, individual, and shared costs. Positive means credit; negative means
/// the member owes the mess.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberBalance {
    pub member_id: Uuid,
    pub display_name: String,
    pub total_meals: Decimal,
    pub total_deposit: Decimal,
    pub meal_cost: Decimal,
    pub individual_cost: Decimal,
    pub shared_cost: Decimal,
    pub balance: Decimal,
}

impl MemberBalance {
    /// Everything the member is charged for the period.
    pub fn total_charges(&self) -> Decimal {
        self.meal_cost + self.individual_cost + self.shared_cost
    }

    /// Returns true if the member holds credit with the mess.
    pub fn is_creditor(&self) -> bool {
        self.balance > Decimal::ZERO
    }

    /// Returns true if the member owes the mess.
    pub fn is_debtor(&self) -> bool {
        self.balance < Decimal::ZERO
    }
}
