//! # Application Configuration
//!
//! Settings are layered, later layers win:
//!
//! 1. [`AppConfig::default`] - explicit resolution policy, English notices
//! 2. Inline JSON in `<script id="market-config" type="application/json">`
//! 3. URL query: `?policy=explicit|best-effort&lang=en|ko`
//!
//! A layer that fails to parse is logged and skipped, so loading always succeeds.
//!
//! ```json
//! { "policy": "best-effort", "locale": "ko" }
//! ```

use std::collections::HashMap;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::services::wallet::ResolutionPolicy;
use crate::utils::constants::CONFIG_ELEMENT_ID;
use crate::utils::url::get_query_params;

/// Language for notices and prices
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "ko")]
    Korean,
}

impl FromStr for Locale {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "en-us" | "english" => Ok(Locale::English),
            "ko" | "ko-kr" | "korean" => Ok(Locale::Korean),
            other => Err(ConfigError::InvalidLocale(other.to_string())),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub policy: ResolutionPolicy,
    pub locale: Locale,
}

impl AppConfig {
    /// Defaults, then the embedded JSON block, then the URL query.
    pub fn load() -> Self {
        let mut config = match read_embedded_json() {
            Some(json) => Self::from_json(&json).unwrap_or_else(|e| {
                log::warn!("Ignoring #{}: {}", CONFIG_ELEMENT_ID, e);
                Self::default()
            }),
            None => Self::default(),
        };

        for e in config.apply_query(&get_query_params()) {
            log::warn!("Ignoring query override: {}", e);
        }

        log::info!("Config: policy={:?}, locale={:?}", config.policy, config.locale);
        config
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Apply `policy` and `lang` overrides, returning the ones that did not parse.
    pub fn apply_query(&mut self, params: &HashMap<String, String>) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if let Some(raw) = params.get("policy") {
            match raw.parse() {
                Ok(policy) => self.policy = policy,
                Err(e) => errors.push(e),
            }
        }
        if let Some(raw) = params.get("lang") {
            match raw.parse() {
                Ok(locale) => self.locale = locale,
                Err(e) => errors.push(e),
            }
        }

        errors
    }
}

fn read_embedded_json() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let element = document.get_element_by_id(CONFIG_ELEMENT_ID)?;
    element.text_content().filter(|text| !text.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.policy, ResolutionPolicy::Explicit);
        assert_eq!(config.locale, Locale::English);
    }

    #[test]
    fn test_from_json() {
        let config = AppConfig::from_json(r#"{ "policy": "best-effort", "locale": "ko" }"#).unwrap();
        assert_eq!(config.policy, ResolutionPolicy::BestEffort);
        assert_eq!(config.locale, Locale::Korean);
    }

    #[test]
    fn test_from_json_partial_keeps_defaults() {
        let config = AppConfig::from_json(r#"{ "locale": "ko" }"#).unwrap();
        assert_eq!(config.policy, ResolutionPolicy::Explicit);
        assert_eq!(config.locale, Locale::Korean);
    }

    #[test]
    fn test_from_json_rejects_unknown_policy() {
        assert!(matches!(AppConfig::from_json(r#"{ "policy": "random" }"#), Err(ConfigError::Json(_))));
    }

    #[test]
    fn test_query_overrides() {
        let mut config = AppConfig::default();
        let errors = config.apply_query(&params(&[("policy", "best-effort"), ("lang", "ko")]));

        assert!(errors.is_empty());
        assert_eq!(config.policy, ResolutionPolicy::BestEffort);
        assert_eq!(config.locale, Locale::Korean);
    }

    #[test]
    fn test_bad_query_value_is_reported_and_skipped() {
        let mut config = AppConfig::default();
        let errors = config.apply_query(&params(&[("policy", "sideways"), ("lang", "ko")]));

        assert_eq!(errors.len(), 1);
        assert!(matches!(&errors[0], ConfigError::InvalidPolicy(p) if p == "sideways"));
        assert_eq!(config.policy, ResolutionPolicy::Explicit);
        assert_eq!(config.locale, Locale::Korean);
    }
}
