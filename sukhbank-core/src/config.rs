//! Configuration management
//!
//! Settings live in `settings.json` inside the data directory:
//! ```json
//! {
//!   "app": { "currencySymbol": "₹", "autoReceipt": true }
//! }
//! ```

use std::collections::HashMap;
use std::path::Path;

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Raw settings.json structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SettingsFile {
    #[serde(default)]
    app: AppSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AppSettings {
    #[serde(default = "default_currency_symbol")]
    currency_symbol: String,
    #[serde(default = "default_auto_receipt")]
    auto_receipt: bool,
    #[serde(flatten)]
    other: HashMap<String, serde_json::Value>,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency_symbol(),
            auto_receipt: default_auto_receipt(),
            other: HashMap::new(),
        }
    }
}

fn default_currency_symbol() -> String {
    "₹".to_string()
}

fn default_auto_receipt() -> bool {
    true
}

/// Sukhbank configuration (simplified view of settings)
#[derive(Debug, Clone)]
pub struct Config {
    pub currency_symbol: String,
    pub auto_receipt: bool,
    // Raw settings kept for preservation when saving
    _raw_settings: SettingsFile,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency_symbol(),
            auto_receipt: default_auto_receipt(),
            _raw_settings: SettingsFile::default(),
        }
    }
}

impl Config {
    /// Load config from the data directory
    ///
    /// The receipt toggle can be overridden via the SUKHBANK_AUTO_RECEIPT
    /// environment variable (for CI/testing). A malformed settings file
    /// falls back to defaults.
    pub fn load(data_dir: &Path) -> Result<Self> {
        let settings_path = data_dir.join("settings.json");

        let raw: SettingsFile = if settings_path.exists() {
            let content = std::fs::read_to_string(&settings_path)?;
            serde_json::from_str(&content).unwrap_or_default()
        } else {
            SettingsFile::default()
        };

        let auto_receipt = match std::env::var("SUKHBANK_AUTO_RECEIPT").ok().as_deref() {
            Some("true" | "1" | "yes") => true,
            Some("false" | "0" | "no") => false,
            _ => raw.app.auto_receipt,
        };

        Ok(Self {
            currency_symbol: raw.app.currency_symbol.clone(),
            auto_receipt,
            _raw_settings: raw,
        })
    }

    /// Save config to the data directory
    /// Preserves settings that the app doesn't manage
    pub fn save(&self, data_dir: &Path) -> Result<()> {
        let settings_path = data_dir.join("settings.json");

        let mut settings = if settings_path.exists() {
            let content = std::fs::read_to_string(&settings_path)?;
            serde_json::from_str::<SettingsFile>(&content).unwrap_or_default()
        } else {
            SettingsFile::default()
        };

        settings.app.currency_symbol = self.currency_symbol.clone();
        settings.app.auto_receipt = self.auto_receipt;

        let content = serde_json::to_string_pretty(&settings)?;
        std::fs::write(&settings_path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults_when_no_settings_file() {
        let dir = tempdir().unwrap();
        let config = Config::load(dir.path()).unwrap();

        assert_eq!(config.currency_symbol, "₹");
        assert!(config.auto_receipt);
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempdir().unwrap();

        let mut config = Config::load(dir.path()).unwrap();
        config.currency_symbol = "$".to_string();
        config.auto_receipt = false;
        config.save(dir.path()).unwrap();

        let reloaded = Config::load(dir.path()).unwrap();
        assert_eq!(reloaded.currency_symbol, "$");
        assert!(!reloaded.auto_receipt);
    }

    #[test]
    fn test_malformed_settings_fall_back_to_defaults() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("settings.json"), "{broken").unwrap();

        let config = Config::load(dir.path()).unwrap();
        assert_eq!(config.currency_symbol, "₹");
    }

    #[test]
    fn test_save_preserves_unmanaged_settings() {
        let dir = tempdir().unwrap();
        std::fs::write(
            dir.path().join("settings.json"),
            r#"{"app": {"currencySymbol": "€", "theme": "dark"}}"#,
        )
        .unwrap();

        let config = Config::load(dir.path()).unwrap();
        config.save(dir.path()).unwrap();

        let content = std::fs::read_to_string(dir.path().join("settings.json")).unwrap();
        assert!(content.contains("dark"));
        assert!(content.contains("€"));
    }
}
