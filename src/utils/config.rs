use std::env;

use crate::models::PricePolicy;

pub const MAX_PRICE_PRECISION: usize = 6;

#[derive(Debug, Clone)]
pub struct Config {
    pub log_level: String,
    pub environment: String,
    pub allow_negative_prices: bool,
    pub price_precision: usize,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenv::dotenv().ok();
        let config = Self::from_lookup(|key| env::var(key).ok())?;

        tracing::info!("Config: successfully loaded for {} environment", config.environment);
        Ok(config)
    }

    /// Builds the config from any key lookup, `from_env` passes the process environment.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let allow_negative_prices = match lookup("ALLOW_NEGATIVE_PRICES") {
            Some(value) => parse_bool(&value).ok_or_else(|| {
                anyhow::anyhow!("ALLOW_NEGATIVE_PRICES must be true or false, got '{}'", value)
            })?,
            None => true,
        };

        let price_precision = match lookup("PRICE_PRECISION") {
            Some(value) => value.trim().parse::<usize>().map_err(|_| {
                anyhow::anyhow!("PRICE_PRECISION must be a non-negative integer, got '{}'", value)
            })?,
            None => 2,
        };

        let config = Config {
            log_level: lookup("LOG_LEVEL").unwrap_or("info".to_string()),
            environment: lookup("APP_ENV").unwrap_or("development".to_string()),
            allow_negative_prices,
            price_precision,
        };

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), anyhow::Error> {
        if self.log_level.trim().is_empty() {
            return Err(anyhow::anyhow!("LOG_LEVEL must not be empty"));
        }

        if self.price_precision > MAX_PRICE_PRECISION {
            return Err(anyhow::anyhow!(
                "PRICE_PRECISION must be at most {}",
                MAX_PRICE_PRECISION
            ));
        }

        Ok(())
    }

    pub fn price_policy(&self) -> PricePolicy {
        PricePolicy {
            allow_negative: self.allow_negative_prices,
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> anyhow::Result<Config> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.log_level, "info");
        assert_eq!(config.environment, "development");
        assert!(config.allow_negative_prices);
        assert_eq!(config.price_precision, 2);
        assert!(!config.is_production());
        assert_eq!(config.price_policy(), PricePolicy::default());
    }

    #[test]
    fn test_strict_prices_from_env() {
        let config = config_from(&[("ALLOW_NEGATIVE_PRICES", "false"), ("APP_ENV", "production")])
            .unwrap();
        assert_eq!(config.price_policy(), PricePolicy::strict());
        assert!(config.is_production());
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        assert!(config_from(&[("ALLOW_NEGATIVE_PRICES", "maybe")]).is_err());
        assert!(config_from(&[("PRICE_PRECISION", "-1")]).is_err());
        assert!(config_from(&[("PRICE_PRECISION", "9")]).is_err());
        assert!(config_from(&[("LOG_LEVEL", " ")]).is_err());
    }
}
