use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One member's logged meals for one date within a period.
///
/// Units are non-negative rationals; fractional meals (0.5 for a shared
/// guest plate, for example) are valid. The Record Store should keep at most
/// one record per `(member_id, date)`, but if duplicates slip through the
/// engine sums them rather than rejecting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealRecord {
    pub id: Uuid,
    pub period_id: Uuid,
    pub member_id: Uuid,
    pub date: NaiveDate,
    pub breakfast_units: Decimal,
    pub lunch_units: Decimal,
    pub dinner_units: Decimal,
}

impl MealRecord {
    /// Creates a meal record with the given per-slot units.
    pub fn new(
        period_id: Uuid,
        member_id: Uuid,
        date: NaiveDate,
        breakfast_units: Decimal,
        lunch_units: Decimal,
        dinner_units: Decimal,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            period_id,
            member_id,
            date,
            breakfast_units,
            lunch_units,
            dinner_units,
        }
    }

    /// Creates an empty record (no meals logged) for the date.
    pub fn empty(period_id: Uuid, member_id: Uuid, date: NaiveDate) -> Self {
        Self::new(
            period_id,
            member_id,
            date,
            Decimal::ZERO,
            Decimal::ZERO,
            Decimal::ZERO,
        )
    }

    /// Total meal units across all three slots.
    pub fn total_units(&self) -> Decimal {
        self.breakfast_units + self.lunch_units + self.dinner_units
    }

    /// Returns true if no meals were logged.
    pub fn is_empty(&self) -> bool {
        self.total_units().is_zero()
    }
}
