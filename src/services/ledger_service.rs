use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{LedgerError, Result};
use crate::models::{Deposit, MealCost, MealRecord, Member, MemberBalance, OtherCost, PeriodSummary};
use crate::services::balance_service::{
    compute_member_balances, off_roster_activity, OffRosterActivity,
};
use crate::services::roster::Roster;
use crate::services::summary_service::compute_period_summary;

/// Complete settlement output for one period: the collective summary, one
/// balance row per roster member, and the off-roster activity that affects
/// the mess balance without appearing on any row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodLedger {
    pub summary: PeriodSummary,
    pub balances: Vec<MemberBalance>,
    pub off_roster: OffRosterActivity,
}

impl PeriodLedger {
    /// Sum of all roster members' balances.
    pub fn attributed_balance_total(&self) -> Decimal {
        self.balances.iter().map(|b| b.balance).sum()
    }

    /// Shared cost that was charged to no one (empty roster, plus any
    /// division residue at the precision limit).
    pub fn undistributed_shared_cost(&self) -> Decimal {
        let charged: Decimal = self.balances.iter().map(|b| b.shared_cost).sum();
        self.summary.total_shared_cost - charged
    }

    /// Meal cost that was charged to no one: the zero-meal case, division
    /// residue, and nothing else (off-roster consumption is reported
    /// separately).
    pub fn undistributed_meal_cost(&self) -> Decimal {
        let charged: Decimal = self.balances.iter().map(|b| b.meal_cost).sum();
        self.summary.total_meal_cost - charged - self.off_roster.meal_cost
    }

    /// Checks the conservation identity: the mess balance equals the sum of
    /// roster balances plus every amount accounted for outside them
    /// (off-roster deposits and charges, undistributed meal and shared
    /// cost), within `tolerance`.
    ///
    /// The identity holds exactly in real arithmetic; `tolerance` absorbs
    /// the division rounding at the 28-digit mantissa.
    pub fn verify_conservation(&self, tolerance: Decimal) -> bool {
        let member_meal: Decimal = self.balances.iter().map(|b| b.meal_cost).sum();
        let member_shared: Decimal = self.balances.iter().map(|b| b.shared_cost).sum();

        let residual = self.summary.mess_balance
            - self.attributed_balance_total()
            - self.off_roster.deposit_total
            + (self.summary.total_meal_cost - member_meal)
            + (self.summary.total_shared_cost - member_shared)
            + self.off_roster.individual_cost;

        residual.abs() <= tolerance
    }
}

/// Settles one period: resolves the roster, computes the summary and the
/// per-member balance sheet, and aggregates off-roster activity.
///
/// Stateless and idempotent; the same inputs always produce the same output.
pub fn settle_period(
    period_id: Uuid,
    members: &[Member],
    meals: &[MealRecord],
    deposits: &[Deposit],
    meal_costs: &[MealCost],
    other_costs: &[OtherCost],
) -> PeriodLedger {
    let roster = Roster::resolve(members);
    let summary = compute_period_summary(period_id, meals, deposits, meal_costs, other_costs);
    let balances = compute_member_balances(&roster, meals, deposits, other_costs, summary.meal_rate);
    let off_roster = off_roster_activity(&roster, meals, deposits, other_costs, summary.meal_rate);

    tracing::debug!(
        %period_id,
        roster_size = roster.len(),
        mess_balance = %summary.mess_balance,
        "period settled"
    );

    PeriodLedger {
        summary,
        balances,
        off_roster,
    }
}

/// Validates the Record Store contract before records enter the engine.
///
/// The compute functions are total and never call this; callers invoke it
/// once at the boundary when pulling a period's records from their store.
pub fn validate_period_records(
    period_id: Uuid,
    members: &[Member],
    meals: &[MealRecord],
    deposits: &[Deposit],
    meal_costs: &[MealCost],
    other_costs: &[OtherCost],
) -> Result<()> {
    for member in members {
        if member.display_name.trim().is_empty() {
            return Err(LedgerError::Contract(format!(
                "member '{}' has a blank display name",
                member.id
            )));
        }
    }

    for record in meals {
        if record.period_id != period_id {
            return Err(LedgerError::Contract(format!(
                "meal record '{}' belongs to period '{}', not '{}'",
                record.id, record.period_id, period_id
            )));
        }
        if record.breakfast_units < Decimal::ZERO
            || record.lunch_units < Decimal::ZERO
            || record.dinner_units < Decimal::ZERO
        {
            return Err(LedgerError::Contract(format!(
                "meal record '{}' has negative units",
                record.id
            )));
        }
    }

    for deposit in deposits {
        if deposit.period_id != period_id {
            return Err(LedgerError::Contract(format!(
                "deposit '{}' belongs to period '{}', not '{}'",
                deposit.id, deposit.period_id, period_id
            )));
        }
        if deposit.amount <= Decimal::ZERO {
            return Err(LedgerError::Contract(format!(
                "deposit '{}' amount must be positive",
                deposit.id
            )));
        }
    }

    for cost in meal_costs {
        if cost.period_id != period_id {
            return Err(LedgerError::Contract(format!(
                "meal cost '{}' belongs to period '{}', not '{}'",
                cost.id, cost.period_id, period_id
            )));
        }
        if cost.amount <= Decimal::ZERO {
            return Err(LedgerError::Contract(format!(
                "meal cost '{}' amount must be positive",
                cost.id
            )));
        }
    }

    for cost in other_costs {
        if cost.period_id != period_id {
            return Err(LedgerError::Contract(format!(
                "other cost '{}' belongs to period '{}', not '{}'",
                cost.id, cost.period_id, period_id
            )));
        }
        if cost.amount <= Decimal::ZERO {
            return Err(LedgerError::Contract(format!(
                "other cost '{}' amount must be positive",
                cost.id
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 12).unwrap()
    }

    fn meal(period: Uuid, member: Uuid, units: Decimal) -> MealRecord {
        MealRecord::new(period, member, date(), units, Decimal::ZERO, Decimal::ZERO)
    }

    const TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 6);

    #[test]
    fn test_settle_basic_period() {
        let period = Uuid::new_v4();
        let alice = Member::new("Alice");
        let bob = Member::new("Bob");

        let ledger = settle_period(
            period,
            &[alice.clone(), bob.clone()],
            &[meal(period, alice.id, dec!(20)), meal(period, bob.id, dec!(10))],
            &[
                Deposit::new(period, alice.id, dec!(500), date()),
                Deposit::new(period, bob.id, dec!(300), date()),
            ],
            &[MealCost::new(period, alice.id, dec!(300), date())],
            &[],
        );

        assert_eq!(ledger.summary.meal_rate, dec!(10));
        assert_eq!(ledger.summary.mess_balance, dec!(500));
        assert_eq!(ledger.attributed_balance_total(), dec!(500));
        assert!(ledger.off_roster.is_zero());
        assert!(ledger.verify_conservation(TOLERANCE));
    }

    #[test]
    fn test_conservation_with_off_roster_records() {
        let period = Uuid::new_v4();
        let alice = Member::new("Alice");
        let removed = Uuid::new_v4();

        let ledger = settle_period(
            period,
            &[alice.clone()],
            &[meal(period, alice.id, dec!(10)), meal(period, removed, dec!(5))],
            &[
                Deposit::new(period, alice.id, dec!(500), date()),
                Deposit::new(period, removed, dec!(200), date()),
            ],
            &[MealCost::new(period, alice.id, dec!(300), date())],
            &[
                OtherCost::shared(period, alice.id, dec!(90), date()),
                OtherCost::individual(period, removed, dec!(40), date()),
            ],
        );

        // Removed member's meals affect the rate for everyone.
        assert_eq!(ledger.summary.meal_rate, dec!(20));
        assert_eq!(ledger.balances.len(), 1);
        assert_eq!(ledger.off_roster.meal_cost, dec!(100));
        assert_eq!(ledger.off_roster.deposit_total, dec!(200));
        assert_eq!(ledger.off_roster.individual_cost, dec!(40));
        assert!(ledger.verify_conservation(TOLERANCE));
    }

    #[test]
    fn test_empty_roster_shared_cost_undistributed() {
        let period = Uuid::new_v4();

        let ledger = settle_period(
            period,
            &[],
            &[],
            &[],
            &[],
            &[OtherCost::shared(period, Uuid::new_v4(), dec!(120), date())],
        );

        assert!(ledger.balances.is_empty());
        assert_eq!(ledger.summary.mess_balance, dec!(-120));
        assert_eq!(ledger.undistributed_shared_cost(), dec!(120));
        assert!(ledger.verify_conservation(TOLERANCE));
    }

    #[test]
    fn test_zero_meals_undistributed_meal_cost() {
        let period = Uuid::new_v4();
        let alice = Member::new("Alice");

        let ledger = settle_period(
            period,
            &[alice.clone()],
            &[],
            &[Deposit::new(period, alice.id, dec!(100), date())],
            &[MealCost::new(period, alice.id, dec!(200), date())],
            &[],
        );

        assert_eq!(ledger.summary.meal_rate, Decimal::ZERO);
        assert_eq!(ledger.balances[0].meal_cost, Decimal::ZERO);
        assert_eq!(ledger.summary.mess_balance, dec!(-100));
        assert_eq!(ledger.undistributed_meal_cost(), dec!(200));
        assert!(ledger.verify_conservation(TOLERANCE));
    }

    #[test]
    fn test_validate_accepts_well_formed_records() {
        let period = Uuid::new_v4();
        let alice = Member::new("Alice");

        let result = validate_period_records(
            period,
            &[alice.clone()],
            &[meal(period, alice.id, dec!(2))],
            &[Deposit::new(period, alice.id, dec!(100), date())],
            &[MealCost::new(period, alice.id, dec!(50), date())],
            &[OtherCost::shared(period, alice.id, dec!(30), date())],
        );

        assert!(result.is_ok());
    }

    #[test]
    fn test_validate_rejects_foreign_period() {
        let period = Uuid::new_v4();
        let other_period = Uuid::new_v4();
        let alice = Member::new("Alice");

        let result = validate_period_records(
            period,
            &[alice.clone()],
            &[meal(other_period, alice.id, dec!(2))],
            &[],
            &[],
            &[],
        );

        assert!(matches!(result, Err(LedgerError::Contract(_))));
    }

    #[test]
    fn test_validate_rejects_negative_units() {
        let period = Uuid::new_v4();
        let alice = Member::new("Alice");
        let record = MealRecord::new(period, alice.id, date(), dec!(-1), dec!(0), dec!(0));

        let result = validate_period_records(period, &[alice], &[record], &[], &[], &[]);

        assert!(matches!(result, Err(LedgerError::Contract(_))));
    }

    #[test]
    fn test_validate_rejects_non_positive_deposit() {
        let period = Uuid::new_v4();
        let alice = Member::new("Alice");
        let deposit = Deposit::new(period, alice.id, Decimal::ZERO, date());

        let result = validate_period_records(period, &[alice], &[], &[deposit], &[], &[]);

        assert!(matches!(result, Err(LedgerError::Contract(_))));
    }

    #[test]
    fn test_validate_rejects_blank_member_name() {
        let period = Uuid::new_v4();
        let blank = Member::new("   ");

        let result = validate_period_records(period, &[blank], &[], &[], &[], &[]);

        assert!(matches!(result, Err(LedgerError::Contract(_))));
    }

    #[test]
    fn test_settlement_is_deterministic() {
        let period = Uuid::new_v4();
        let alice = Member::new("Alice");
        let bob = Member::new("Bob");
        let members = [alice.clone(), bob.clone()];
        let meals = [meal(period, alice.id, dec!(7)), meal(period, bob.id, dec!(3))];
        let deposits = [Deposit::new(period, alice.id, dec!(400), date())];
        let meal_costs = [MealCost::new(period, bob.id, dec!(250), date())];
        let other_costs = [OtherCost::shared(period, alice.id, dec!(60), date())];

        let first = settle_period(period, &members, &meals, &deposits, &meal_costs, &other_costs);
        let second = settle_period(period, &members, &meals, &deposits, &meal_costs, &other_costs);

        assert_eq!(first, second);
    }
}
