//! Lexer configuration.
//!
//! The only knob is the [`Mode`]: lenient scans turn every problem into a
//! passthrough token, strict scans surface the first problem as a
//! [`LexerError`](chi_util::LexerError).
//!
//! Configuration can be embedded in a TOML file:
//!
//! ```
//! use chi_lex::config::{LexerConfig, Mode};
//!
//! let config = LexerConfig::from_toml_str("mode = \"strict\"").unwrap();
//! assert_eq!(config.mode, Mode::Strict);
//!
//! let config = LexerConfig::from_toml_str("").unwrap();
//! assert_eq!(config, LexerConfig::default());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How the lexer reacts to illegal input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Emit illegal or truncated tokens and keep going.
    #[default]
    Lenient,
    /// Report the first error from [`Lexer::try_next_token`](crate::Lexer::try_next_token).
    Strict,
}

/// Lexer configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexerConfig {
    /// Error handling mode.
    #[serde(default)]
    pub mode: Mode,
}

/// Error when a configuration cannot be read.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The text is not valid TOML or has the wrong shape.
    #[error("invalid lexer configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// The configuration could not be rendered as TOML.
    #[error("cannot serialize lexer configuration: {0}")]
    Serialize(#[from] toml::ser::Error),
}

impl LexerConfig {
    /// A strict configuration.
    pub fn strict() -> Self {
        Self { mode: Mode::Strict }
    }

    /// Returns true when errors should stop the scan.
    #[inline]
    pub fn is_strict(&self) -> bool {
        self.mode == Mode::Strict
    }

    /// Parses a configuration from TOML. Missing keys take their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Renders the configuration as TOML.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_lenient() {
        let config = LexerConfig::default();
        assert_eq!(config.mode, Mode::Lenient);
        assert!(!config.is_strict());
    }

    #[test]
    fn test_strict_constructor() {
        assert!(LexerConfig::strict().is_strict());
    }

    #[test]
    fn test_parse_modes() {
        let lenient = LexerConfig::from_toml_str("mode = \"lenient\"").unwrap();
        assert_eq!(lenient.mode, Mode::Lenient);

        let strict = LexerConfig::from_toml_str("mode = \"strict\"").unwrap();
        assert_eq!(strict.mode, Mode::Strict);
    }

    #[test]
    fn test_parse_rejects_unknown_mode() {
        let err = LexerConfig::from_toml_str("mode = \"pedantic\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().starts_with("invalid lexer configuration"));
    }

    #[test]
    fn test_toml_round_trip() {
        let config = LexerConfig::strict();
        let text = config.to_toml_string().unwrap();
        assert_eq!(text.trim(), "mode = \"strict\"");
        assert_eq!(LexerConfig::from_toml_str(&text).unwrap(), config);
    }
}
