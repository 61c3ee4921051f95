use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{Deposit, MealRecord, MemberBalance, OtherCost};
use crate::services::roster::Roster;

/// Computes one settlement row per roster member, in roster order.
///
/// `meal_rate` is the period rate from the summary computation; it is not
/// recomputed here. Records referencing members outside the roster are
/// ignored for balance rows (removed members get no settlement row) but are
/// reported by [`off_roster_activity`].
pub fn compute_member_balances(
    roster: &Roster,
    meals: &[MealRecord],
    deposits: &[Deposit],
    other_costs: &[OtherCost],
    meal_rate: Decimal,
) -> Vec<MemberBalance> {
    let mut meal_units: HashMap<Uuid, Decimal> = HashMap::new();
    for record in meals {
        *meal_units.entry(record.member_id).or_insert(Decimal::ZERO) += record.total_units();
    }

    let mut deposit_totals: HashMap<Uuid, Decimal> = HashMap::new();
    for deposit in deposits {
        *deposit_totals.entry(deposit.member_id).or_insert(Decimal::ZERO) +=
            deposit.contribution();
    }

    let mut individual_totals: HashMap<Uuid, Decimal> = HashMap::new();
    let mut total_shared = Decimal::ZERO;
    for cost in other_costs {
        if cost.is_shared() {
            total_shared += cost.amount;
        } else {
            *individual_totals.entry(cost.member_id).or_insert(Decimal::ZERO) += cost.amount;
        }
    }

    // Equal division across the roster; no proportional splitting, no
    // remainder redistribution.
    let shared_cost = if roster.is_empty() {
        Decimal::ZERO
    } else {
        total_shared / roster.divisor()
    };

    roster
        .iter()
        .map(|member| {
            let total_meals = meal_units.get(&member.id).copied().unwrap_or(Decimal::ZERO);
            let total_deposit = deposit_totals
                .get(&member.id)
                .copied()
                .unwrap_or(Decimal::ZERO);
            let meal_cost = total_meals * meal_rate;
            let individual_cost = individual_totals
                .get(&member.id)
                .copied()
                .unwrap_or(Decimal::ZERO);
            let balance = total_deposit - meal_cost - individual_cost - shared_cost;

            MemberBalance {
                member_id: member.id,
                display_name: member.display_name.clone(),
                total_meals,
                total_deposit,
                meal_cost,
                individual_cost,
                shared_cost,
                balance,
            }
        })
        .collect()
}

/// Totals for records whose member is not on the roster.
///
/// This money affects the mess balance but appears on no settlement row:
/// deposits from removed members, their meal consumption charged at the
/// period rate, and their individual costs. Surfacing it keeps the
/// conservation check honest instead of silently dropping the difference.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OffRosterActivity {
    pub deposit_total: Decimal,
    pub meal_units: Decimal,
    /// `meal_units x meal_rate`.
    pub meal_cost: Decimal,
    pub individual_cost: Decimal,
}

impl OffRosterActivity {
    /// Returns true if every off-roster total is zero.
    pub fn is_zero(&self) -> bool {
        self.deposit_total.is_zero()
            && self.meal_units.is_zero()
            && self.meal_cost.is_zero()
            && self.individual_cost.is_zero()
    }
}

/// Aggregates the records attributable to members outside the roster.
pub fn off_roster_activity(
    roster: &Roster,
    meals: &[MealRecord],
    deposits: &[Deposit],
    other_costs: &[OtherCost],
    meal_rate: Decimal,
) -> OffRosterActivity {
    let meal_units: Decimal = meals
        .iter()
        .filter(|r| !roster.contains(r.member_id))
        .map(MealRecord::total_units)
        .sum();

    let deposit_total: Decimal = deposits
        .iter()
        .filter(|d| !roster.contains(d.member_id))
        .map(Deposit::contribution)
        .sum();

    let individual_cost: Decimal = other_costs
        .iter()
        .filter(|c| !c.is_shared() && !roster.contains(c.member_id))
        .map(|c| c.amount)
        .sum();

    OffRosterActivity {
        deposit_total,
        meal_units,
        meal_cost: meal_units * meal_rate,
        individual_cost,
    }
}
