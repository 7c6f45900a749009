//! Playground configuration
//!
//! Loaded from YAML or JSON (or a JS object on the WASM side). Every field
//! has a default, so an empty object is a valid configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::compose::SANDBOX_POLICY;
use crate::format::DEFAULT_INDENT;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid YAML configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid JSON configuration: {0}")]
    Json(#[from] serde_json::Error),

    /// Indent unit must be non-empty and made of whitespace only
    #[error("Invalid indent unit: {0:?} (must be non-empty whitespace)")]
    InvalidIndent(String),

    /// Preview sandbox must run scripts and stay isolated from the host page
    #[error("Invalid sandbox policy: {0:?} ({1})")]
    InvalidSandbox(String, &'static str),
}

/// Sandbox tokens that would let preview code reach the host page
const ESCAPING_SANDBOX_TOKENS: &[&str] = &["allow-same-origin", "allow-top-navigation"];

/// Runtime settings for a playground session
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct PlaygroundConfig {
    /// One indentation level in formatted output
    pub indent_unit: String,
    /// Prefix for persisted keys (`<prefix>:html`, ...)
    pub storage_prefix: String,
    /// Whether buffers are loaded from and written to storage
    pub persist: bool,
    /// `sandbox` attribute for the preview frame
    pub sandbox: String,
    /// Suggested file name for JSON exports
    pub export_filename: String,
}

impl Default for PlaygroundConfig {
    fn default() -> Self {
        Self {
            indent_unit: DEFAULT_INDENT.to_string(),
            storage_prefix: "playground".to_string(),
            persist: true,
            sandbox: SANDBOX_POLICY.to_string(),
            export_filename: "playground.json".to_string(),
        }
    }
}

impl PlaygroundConfig {
    /// Parse and validate a YAML configuration
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a JSON configuration
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check field constraints that serde cannot express
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.indent_unit.is_empty() || !self.indent_unit.chars().all(char::is_whitespace) {
            return Err(ConfigError::InvalidIndent(self.indent_unit.clone()));
        }
        validate_sandbox(&self.sandbox)
    }
}

fn validate_sandbox(policy: &str) -> Result<(), ConfigError> {
    let invalid = |reason: &'static str| ConfigError::InvalidSandbox(policy.to_string(), reason);

    let mut tokens = policy.split_whitespace();
    if !tokens.clone().any(|token| token == SANDBOX_POLICY) {
        return Err(invalid("scripts must be allowed"));
    }
    // Prefix match also covers allow-top-navigation-by-user-activation etc.
    if tokens.any(|token| ESCAPING_SANDBOX_TOKENS.iter().any(|escape| token.starts_with(escape))) {
        return Err(invalid("preview must stay isolated from the host page"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PlaygroundConfig::default();
        assert_eq!(config.indent_unit, "  ");
        assert_eq!(config.sandbox, "allow-scripts");
        assert!(config.persist);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_yaml_partial_override() {
        let config = PlaygroundConfig::from_yaml("storage_prefix: demo\npersist: false\n").unwrap();
        assert_eq!(config.storage_prefix, "demo");
        assert!(!config.persist);
        assert_eq!(config.indent_unit, "  ");
    }

    #[test]
    fn test_json_empty_object_is_default() {
        let config = PlaygroundConfig::from_json("{}").unwrap();
        assert_eq!(config, PlaygroundConfig::default());
    }

    #[test]
    fn test_rejects_non_whitespace_indent() {
        let err = PlaygroundConfig::from_json(r#"{"indent_unit": "->"}"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidIndent(ref unit) if unit == "->"));
    }

    #[test]
    fn test_rejects_empty_indent() {
        let err = PlaygroundConfig::from_yaml("indent_unit: ''\n").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidIndent(_)));
    }

    #[test]
    fn test_rejects_sandbox_that_escapes_isolation() {
        let err = PlaygroundConfig::from_json(
            r#"{"sandbox": "allow-scripts allow-same-origin allow-top-navigation"}"#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidSandbox(..)));

        let err = PlaygroundConfig::from_yaml(
            "sandbox: allow-scripts allow-top-navigation-by-user-activation\n",
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidSandbox(..)));
    }

    #[test]
    fn test_rejects_sandbox_without_scripts() {
        let err = PlaygroundConfig::from_yaml("sandbox: ''\n").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidSandbox(ref policy, _) if policy.is_empty()));

        let err = PlaygroundConfig::from_json(r#"{"sandbox": "allow-forms"}"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidSandbox(..)));
    }

    #[test]
    fn test_accepts_stricter_extra_tokens() {
        let config = PlaygroundConfig::from_json(r#"{"sandbox": "allow-scripts allow-modals"}"#).unwrap();
        assert_eq!(config.sandbox, "allow-scripts allow-modals");
    }

    #[test]
    fn test_malformed_yaml() {
        let err = PlaygroundConfig::from_yaml("persist: [unterminated").unwrap_err();
        assert!(matches!(err, ConfigError::Yaml(_)));
    }
}
