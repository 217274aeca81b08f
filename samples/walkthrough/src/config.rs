//! Walkthrough configuration.
//!
//! Values come from command line flags, falling back to environment
//! variables and then to the defaults below.
//!
//! # Environment Variables
//!
//! - `WALKTHROUGH_DEMO`: which demo to run (default: `all`)
//! - `WALKTHROUGH_EULER_LIMIT`: upper bound for the Euler demo (default: 1000)
//! - `WALKTHROUGH_BASE_URL`: base for relative links (default: `https://davemateer.com`)
//! - `WALKTHROUGH_ALLOWED_SUFFIXES`: comma separated suffixes accepted by the
//!   url validation (default: none)

use clap::{Parser, ValueEnum};
use thiserror::Error;

use crate::demos::UrlPolicy;

/// Configuration error types.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// A measurement must be strictly positive and finite.
    #[error("Invalid value for {key}: {value} is not a positive number")]
    NotPositive {
        /// The flag name.
        key: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// The base url must be absolute.
    #[error("Invalid value for base-url: {0:?} does not start with http")]
    RelativeBaseUrl(String),
}

/// Selectable demos.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Demo {
    /// Every demo in order.
    All,
    /// Filter, sort and map over 1..=100.
    Percentages,
    /// Sum of multiples of 3 or 5.
    Euler,
    /// Pure primality check.
    Primes,
    /// BMI with injected input and output.
    Bmi,
    /// Immutable updates.
    Person,
    /// Counter threaded through arguments.
    Greeting,
    /// Optional and Either around page fetches.
    Html,
    /// Optional names with bind and map2.
    Names,
    /// Href resolution with sequence bind.
    Urls,
    /// Railway url validation.
    Validation,
}

impl Demo {
    /// Every individual demo, in walkthrough order.
    pub const EACH: [Self; 10] = [
        Self::Percentages,
        Self::Euler,
        Self::Primes,
        Self::Bmi,
        Self::Person,
        Self::Greeting,
        Self::Html,
        Self::Names,
        Self::Urls,
        Self::Validation,
    ];
}

/// Command line of the `walkthrough` binary.
#[derive(Debug, Clone, PartialEq, Parser)]
#[command(name = "walkthrough")]
#[command(about = "Walk through functional idioms built on fp-abstractions")]
pub struct WalkthroughConfig {
    /// Demo to run
    #[arg(long, value_enum, env = "WALKTHROUGH_DEMO", default_value_t = Demo::All)]
    pub demo: Demo,

    /// Exclusive upper bound for the Euler demo
    #[arg(long, env = "WALKTHROUGH_EULER_LIMIT", default_value_t = 1000)]
    pub euler_limit: u64,

    /// Base url prepended to relative links
    #[arg(long, env = "WALKTHROUGH_BASE_URL", default_value = "https://davemateer.com")]
    pub base_url: String,

    /// Suffixes accepted by the url validation
    #[arg(
        long = "allowed-suffix",
        env = "WALKTHROUGH_ALLOWED_SUFFIXES",
        value_delimiter = ','
    )]
    pub allowed_suffixes: Vec<String>,

    /// Height in metres for the BMI demo
    #[arg(long, default_value_t = 1.80)]
    pub height: f64,

    /// Weight in kilograms for the BMI demo
    #[arg(long, default_value_t = 77.0)]
    pub weight: f64,
}

impl Default for WalkthroughConfig {
    fn default() -> Self {
        Self {
            demo: Demo::All,
            euler_limit: 1000,
            base_url: "https://davemateer.com".to_string(),
            allowed_suffixes: Vec::new(),
            height: 1.80,
            weight: 77.0,
        }
    }
}

impl WalkthroughConfig {
    /// Checks values clap cannot check on its own.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotPositive` for a non-positive height or weight
    /// and `ConfigError::RelativeBaseUrl` when the base url is not absolute.
    pub fn validate(self) -> Result<Self, ConfigError> {
        let height = positive("height", self.height)?;
        let weight = positive("weight", self.weight)?;
        if !self.base_url.starts_with("http") {
            return Err(ConfigError::RelativeBaseUrl(self.base_url));
        }
        Ok(Self {
            height,
            weight,
            ..self
        })
    }

    /// Url policy built from the allowed suffixes.
    pub fn url_policy(&self) -> UrlPolicy {
        UrlPolicy::new(self.allowed_suffixes.iter().map(String::as_str))
    }
}

fn positive(key: &'static str, value: f64) -> Result<f64, ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ConfigError::NotPositive { key, value })
    }
}
