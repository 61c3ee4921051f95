use rust_decimal::Decimal;
use serde::Deserialize;

/// Crate settings for the embedding application.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub ledger: LedgerSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApplicationSettings {
    pub log_level: String,
    pub log_format: String,
}

/// Knobs for the ledger computation itself.
#[derive(Debug, Clone, Deserialize)]
pub struct LedgerSettings {
    /// Maximum residual accepted by the conservation check. Division for
    /// the meal rate and shared splits rounds at the 28-digit mantissa, so
    /// the identity is exact only up to this tolerance.
    pub conservation_tolerance: Decimal,
}

impl Settings {
    /// Loads settings from `config/default`, an optional `config/local`
    /// overlay, and `APP__`-prefixed environment variables. Every key has a
    /// default, so loading succeeds with no files present.
    pub fn new() -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            .set_default("application.log_level", "info")?
            .set_default("application.log_format", "pretty")?
            .set_default("ledger.conservation_tolerance", "0.000001")?
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(config::Environment::with_prefix("APP").separator("__"));

        builder.build()?.try_deserialize()
    }
}
