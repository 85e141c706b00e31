//! Shop configuration.
//!
//! A config file is optional; every section falls back to defaults that
//! reproduce the stock ShopHub store.
//!
//! ```toml
//! catalog = "products.toml"
//!
//! [store]
//! name = "ShopHub"
//! currency = "USD"
//! shipping_fee = 5.99
//!
//! [logging]
//! level = "debug"
//! format = "human"
//! sink = "memory"
//! memory_capacity = 500
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use shophub_commerce::cart::ShippingPolicy;
use shophub_commerce::catalog::Catalog;
use shophub_commerce::money::{Currency, Money};
use shophub_observability::{
    LogFormat, LogLevel, LogSink, SessionId, StructuredLogger, DEFAULT_MEMORY_CAPACITY,
};

use crate::error::{ShopError, ShopResult};

/// Top-level shop configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ShopConfig {
    /// Catalog file to load instead of the built-in products.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog: Option<PathBuf>,

    /// Store settings.
    #[serde(default)]
    pub store: StoreConfig,

    /// Session logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Store settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct StoreConfig {
    /// Name shown in the header.
    pub name: String,
    /// Currency all prices are read in.
    pub currency: Currency,
    /// Flat shipping fee as a decimal amount.
    pub shipping_fee: f64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            name: "ShopHub".to_string(),
            currency: Currency::USD,
            shipping_fee: 5.99,
        }
    }
}

/// Where session log entries go.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SinkKind {
    #[default]
    Stderr,
    Memory,
    Tracing,
    Discard,
}

/// Session logging settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
    pub format: LogFormat,
    pub sink: SinkKind,
    /// Entries the memory sink keeps before dropping the oldest.
    pub memory_capacity: usize,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::default(),
            format: LogFormat::default(),
            sink: SinkKind::default(),
            memory_capacity: DEFAULT_MEMORY_CAPACITY,
        }
    }
}

impl ShopConfig {
    /// Load config from a file. `.json` files are parsed as JSON, anything
    /// else as TOML. A relative catalog path is resolved against the
    /// config file's directory.
    pub fn load(path: impl AsRef<Path>) -> ShopResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ShopError::ConfigRead {
            path: path.display().to_string(),
            source,
        })?;

        let is_json = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("json"))
            .unwrap_or(false);
        let mut config = if is_json {
            serde_json::from_str::<Self>(&content).map_err(|e| ShopError::ConfigParse {
                path: path.display().to_string(),
                message: e.to_string(),
            })?
        } else {
            toml::from_str::<Self>(&content).map_err(|e| ShopError::ConfigParse {
                path: path.display().to_string(),
                message: e.to_string(),
            })?
        };

        if let (Some(catalog), Some(dir)) = (config.catalog.as_mut(), path.parent()) {
            if catalog.is_relative() {
                *catalog = dir.join(&*catalog);
            }
        }

        config.validate()?;
        Ok(config)
    }

    /// Parse a TOML config.
    pub fn from_toml_str(content: &str) -> ShopResult<Self> {
        let config: Self = toml::from_str(content).map_err(|e| ShopError::ConfigParse {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a JSON config.
    pub fn from_json_str(content: &str) -> ShopResult<Self> {
        let config: Self = serde_json::from_str(content).map_err(|e| ShopError::ConfigParse {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Render as TOML.
    pub fn to_toml_string(&self) -> ShopResult<String> {
        toml::to_string_pretty(self).map_err(|e| ShopError::InvalidConfig(e.to_string()))
    }

    /// Check values serde cannot.
    pub fn validate(&self) -> ShopResult<()> {
        if self.store.name.trim().is_empty() {
            return Err(ShopError::InvalidConfig("store name is empty".to_string()));
        }
        if Money::try_from_decimal(self.store.shipping_fee, self.store.currency).is_none() {
            return Err(ShopError::InvalidConfig(format!(
                "shipping fee must be a non-negative amount, got {}",
                self.store.shipping_fee
            )));
        }
        if self.logging.memory_capacity == 0 {
            return Err(ShopError::InvalidConfig(
                "logging memory_capacity must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn currency(&self) -> Currency {
        self.store.currency
    }

    /// Shipping policy for the configured fee.
    pub fn shipping_policy(&self) -> ShippingPolicy {
        ShippingPolicy::flat(Money::from_decimal(
            self.store.shipping_fee,
            self.store.currency,
        ))
    }

    /// Load the configured catalog, or the built-in one.
    pub fn load_catalog(&self) -> ShopResult<Catalog> {
        match self.catalog {
            Some(ref path) => {
                let catalog = Catalog::load(path, self.store.currency)?;
                tracing::debug!(path = %path.display(), products = catalog.len(), "loaded catalog");
                Ok(catalog)
            }
            None => Ok(Catalog::builtin_in(self.store.currency)),
        }
    }

    /// A session logger configured from the `[logging]` section.
    pub fn logger(&self, session_id: SessionId) -> StructuredLogger {
        let sink = match self.logging.sink {
            SinkKind::Stderr => LogSink::Stderr,
            SinkKind::Memory => LogSink::memory_with_capacity(self.logging.memory_capacity),
            SinkKind::Tracing => LogSink::Tracing,
            SinkKind::Discard => LogSink::Discard,
        };
        StructuredLogger::new(session_id)
            .with_min_level(self.logging.level)
            .with_format(self.logging.format)
            .with_sink(sink)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_stock_store() {
        let config = ShopConfig::default();
        assert_eq!(config.store.name, "ShopHub");
        assert_eq!(config.currency(), Currency::USD);
        assert_eq!(
            config.shipping_policy().flat_fee,
            Money::new(599, Currency::USD)
        );
        assert_eq!(config.load_catalog().unwrap().len(), 8);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = ShopConfig::from_toml_str(
            r#"
            [store]
            shipping_fee = 4.5

            [logging]
            level = "debug"
            format = "human"
            sink = "memory"
            "#,
        )
        .unwrap();
        assert_eq!(config.store.name, "ShopHub");
        assert_eq!(config.shipping_policy().flat_fee.amount_cents, 450);
        assert_eq!(config.logging.level, LogLevel::Debug);
        assert_eq!(config.logging.format, LogFormat::Human);
        assert!(matches!(
            config.logger(SessionId::from_string("t")).sink(),
            LogSink::Memory(_)
        ));
    }

    #[test]
    fn test_json_config() {
        let config =
            ShopConfig::from_json_str(r#"{"store": {"name": "Corner Shop", "currency": "EUR"}}"#)
                .unwrap();
        assert_eq!(config.store.name, "Corner Shop");
        assert_eq!(config.currency(), Currency::EUR);
        let catalog = config.load_catalog().unwrap();
        assert_eq!(catalog.currency(), Currency::EUR);
    }

    #[test]
    fn test_rejects_negative_fee() {
        let err = ShopConfig::from_toml_str("[store]\nshipping_fee = -1.0").unwrap_err();
        assert!(matches!(err, ShopError::InvalidConfig(_)));
    }

    #[test]
    fn test_rejects_out_of_range_fee() {
        let err = ShopConfig::from_toml_str("[store]\nshipping_fee = 1e30").unwrap_err();
        assert!(matches!(err, ShopError::InvalidConfig(_)));
        let err = ShopConfig::from_toml_str("[store]\nshipping_fee = nan").unwrap_err();
        assert!(matches!(err, ShopError::InvalidConfig(_)));
    }

    #[test]
    fn test_memory_capacity() {
        let config = ShopConfig::from_toml_str(
            "[logging]\nsink = \"memory\"\nmemory_capacity = 2",
        )
        .unwrap();
        let logger = config.logger(SessionId::from_string("t"));
        for n in 0..5 {
            logger.warn(&format!("entry {n}"));
        }
        let messages: Vec<String> = logger
            .sink()
            .entries()
            .into_iter()
            .map(|e| e.message)
            .collect();
        assert_eq!(messages, vec!["entry 3", "entry 4"]);

        let err = ShopConfig::from_toml_str("[logging]\nmemory_capacity = 0").unwrap_err();
        assert!(matches!(err, ShopError::InvalidConfig(_)));
    }

    #[test]
    fn test_rejects_bad_toml() {
        let err = ShopConfig::from_toml_str("[store\nname = 1").unwrap_err();
        assert!(matches!(err, ShopError::ConfigParse { .. }));
    }

    #[test]
    fn test_toml_round_trip() {
        let config = ShopConfig::default();
        let text = config.to_toml_string().unwrap();
        assert_eq!(ShopConfig::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn test_missing_file() {
        let err = ShopConfig::load("/nonexistent/shophub.toml").unwrap_err();
        assert!(matches!(err, ShopError::ConfigRead { .. }));
    }
}
