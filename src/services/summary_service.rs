use rust_decimal::Decimal;
use uuid::Uuid;

use crate::models::{Deposit, MealCost, MealRecord, OtherCost, PeriodSummary};

/// Computes the collective month summary for one period.
///
/// Pure fold over the supplied records; the caller scopes them to the
/// period. Deposits from members no longer on the roster still count toward
/// the mess's cash position, and meal cost with zero logged meals still
/// reduces the mess balance even though no one is charged for it.
pub fn compute_period_summary(
    period_id: Uuid,
    meals: &[MealRecord],
    deposits: &[Deposit],
    meal_costs: &[MealCost],
    other_costs: &[OtherCost],
) -> PeriodSummary {
    let total_deposit: Decimal = deposits.iter().map(Deposit::contribution).sum();
    let total_meals: Decimal = meals.iter().map(MealRecord::total_units).sum();
    let total_meal_cost: Decimal = meal_costs.iter().map(|c| c.amount).sum();

    let meal_rate = meal_rate(total_meal_cost, total_meals);

    let total_individual_cost: Decimal = other_costs
        .iter()
        .filter(|c| !c.is_shared())
        .map(|c| c.amount)
        .sum();
    let total_shared_cost: Decimal = other_costs
        .iter()
        .filter(|c| c.is_shared())
        .map(|c| c.amount)
        .sum();

    let mess_balance = total_deposit - total_meal_cost - total_individual_cost - total_shared_cost;

    tracing::debug!(
        %period_id,
        %total_deposit,
        %total_meals,
        %meal_rate,
        %mess_balance,
        "period summary computed"
    );

    PeriodSummary {
        period_id,
        mess_balance,
        total_deposit,
        total_meals,
        total_meal_cost,
        meal_rate,
        total_individual_cost,
        total_shared_cost,
    }
}

/// Per-meal charge for the period.
///
/// Defined as zero whenever no positive meal count exists, so the division
/// can never run against a zero or negative unit count.
pub fn meal_rate(total_meal_cost: Decimal, total_meals: Decimal) -> Decimal {
    if total_meals > Decimal::ZERO {
        total_meal_cost / total_meals
    } else {
        Decimal::ZERO
    }
}
