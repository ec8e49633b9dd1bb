//! Application configuration management.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Income filter codes.
    #[serde(default)]
    pub income: IncomeConfig,
    /// Benefit-history upstream settings.
    #[serde(default)]
    pub benefit_history: BenefitHistoryConfig,
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Regulatory filter codes sent to the income registry.
#[derive(Debug, Clone, Deserialize)]
pub struct IncomeConfig {
    /// Filter used for the employment and income overview.
    #[serde(default = "default_overview_filter")]
    pub overview_filter: String,
    /// Filter selecting income for the calculation basis.
    #[serde(default = "default_calculation_basis_filter")]
    pub calculation_basis_filter: String,
    /// Filter selecting income for the comparison basis.
    #[serde(default = "default_comparison_basis_filter")]
    pub comparison_basis_filter: String,
}

fn default_overview_filter() -> String {
    "ForeldrepengerA-Inntekt".to_string()
}

fn default_calculation_basis_filter() -> String {
    "8-28".to_string()
}

fn default_comparison_basis_filter() -> String {
    "8-30".to_string()
}

impl Default for IncomeConfig {
    fn default() -> Self {
        Self {
            overview_filter: default_overview_filter(),
            calculation_basis_filter: default_calculation_basis_filter(),
            comparison_basis_filter: default_comparison_basis_filter(),
        }
    }
}

/// Benefit-history upstream configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct BenefitHistoryConfig {
    /// Fault message fragment signalling that the registry's databases are down.
    #[serde(default = "default_unavailable_marker")]
    pub unavailable_marker: String,
}

fn default_unavailable_marker() -> String {
    "Basene i Infotrygd er ikke tilgjengelige".to_string()
}

impl Default for BenefitHistoryConfig {
    fn default() -> Self {
        Self {
            unavailable_marker: default_unavailable_marker(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub filter: String,
    /// Emit JSON lines instead of human readable output.
    #[serde(default)]
    pub json: bool,
}

fn default_log_filter() -> String {
    "sickpay=info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
            json: false,
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenvy::dotenv().ok();

        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("SICKPAY").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.income.overview_filter, "ForeldrepengerA-Inntekt");
        assert_eq!(config.income.calculation_basis_filter, "8-28");
        assert_eq!(config.income.comparison_basis_filter, "8-30");
        assert_eq!(
            config.benefit_history.unavailable_marker,
            "Basene i Infotrygd er ikke tilgjengelige"
        );
        assert!(!config.logging.json);
    }

    #[test]
    fn test_load_without_sources_uses_defaults() {
        temp_env::with_vars_unset(
            ["SICKPAY__INCOME__CALCULATION_BASIS_FILTER", "RUN_MODE"],
            || {
                let config = AppConfig::load().unwrap();
                assert_eq!(config.income.calculation_basis_filter, "8-28");
            },
        );
    }

    #[test]
    fn test_load_reads_environment_overrides() {
        temp_env::with_vars(
            [
                ("SICKPAY__INCOME__CALCULATION_BASIS_FILTER", Some("8-28-test")),
                ("SICKPAY__LOGGING__FILTER", Some("debug")),
            ],
            || {
                let config = AppConfig::load().unwrap();
                assert_eq!(config.income.calculation_basis_filter, "8-28-test");
                assert_eq!(config.income.comparison_basis_filter, "8-30");
                assert_eq!(config.logging.filter, "debug");
            },
        );
    }
}
