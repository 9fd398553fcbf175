//! Pricing configuration

use serde::Deserialize;

use core_kernel::Currency;

use crate::calculation::TaxMethod;

/// Pricing configuration
///
/// The calculation method defaults to tax-inclusive pricing, which is how
/// the business enters prices today. Deployments that quote pre-tax prices
/// set `PRICING_CALCULATION_METHOD=add` instead; nothing else in the
/// engine changes.
#[derive(Debug, Clone, Deserialize)]
pub struct TaxSettings {
    /// How entered prices relate to tax
    #[serde(default)]
    pub calculation_method: TaxMethod,
    /// Currency newly assembled orders and invoices are priced in
    #[serde(default = "default_currency")]
    pub currency: Currency,
}

fn default_currency() -> Currency {
    Currency::USD
}

impl Default for TaxSettings {
    fn default() -> Self {
        Self {
            calculation_method: TaxMethod::Reverse,
            currency: default_currency(),
        }
    }
}

impl TaxSettings {
    /// Loads configuration from environment variables with the `PRICING_`
    /// prefix (e.g. `PRICING_CALCULATION_METHOD`, `PRICING_CURRENCY`)
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::Environment::with_prefix("PRICING"))
            .build()?
            .try_deserialize()
    }
}
