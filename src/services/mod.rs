pub mod balance_service;
pub mod ledger_service;
pub mod roster;
pub mod summary_service;

pub use balance_service::{compute_member_balances, off_roster_activity, OffRosterActivity};
pub use ledger_service::{settle_period, validate_period_records, PeriodLedger};
pub use roster::Roster;
pub use summary_service::compute_period_summary;
