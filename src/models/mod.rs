pub mod deposit;
pub mod meal_cost;
pub mod meal_record;
pub mod member;
pub mod member_balance;
pub mod other_cost;
pub mod period;
pub mod period_summary;

pub use deposit::Deposit;
pub use meal_cost::MealCost;
pub use meal_record::MealRecord;
pub use member::Member;
pub use member_balance::MemberBalance;
pub use other_cost::{CostScope, OtherCost};
pub use period::Period;
pub use period_summary::PeriodSummary;
