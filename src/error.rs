use thiserror::Error;

/// Errors surfaced by the crate.
///
/// The computation functions themselves are total and never fail; errors
/// only arise at the Record Store boundary (`validate_period_records`) or
/// when loading configuration.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// A record violates the caller's data contract (wrong period id,
    /// negative meal units, non-positive amounts, blank member names).
    #[error("record contract violation: {0}")]
    Contract(String),

    /// Configuration could not be loaded or parsed.
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

pub type Result<T> = std::result::Result<T, LedgerError>;
