use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Options for [`crate::to_rgb`].
///
/// Serialized with the camelCase key `gamutCorrectIfNeeded`; the snake_case
/// spelling is accepted on input. A missing key means `false`.
///
/// # Example
///
/// ```
/// use oklch::ConversionOptions;
///
/// let options = ConversionOptions::new().gamut_correct_if_needed(true);
/// assert!(options.gamut_correct_if_needed);
///
/// let parsed = ConversionOptions::from_yaml_str("gamutCorrectIfNeeded: true").unwrap();
/// assert_eq!(parsed, options);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConversionOptions {
    /// Reduce chroma until the color is displayable instead of reporting
    /// that it has no sRGB representation.
    ///
    /// Default: `false`
    #[serde(alias = "gamut_correct_if_needed")]
    pub gamut_correct_if_needed: bool,
}

impl ConversionOptions {
    /// Options with every flag at its default.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn gamut_correct_if_needed(mut self, enabled: bool) -> Self {
        self.gamut_correct_if_needed = enabled;
        self
    }

    /// Parse options from a YAML document.
    pub fn from_yaml_str(text: &str) -> Result<Self, ConfigError> {
        let options: Self = serde_yaml::from_str(text)?;
        tracing::debug!(
            gamut_correct_if_needed = options.gamut_correct_if_needed,
            "Loaded conversion options from YAML"
        );
        Ok(options)
    }

    /// Parse options from a JSON document.
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        let options: Self = serde_json::from_str(text)?;
        tracing::debug!(
            gamut_correct_if_needed = options.gamut_correct_if_needed,
            "Loaded conversion options from JSON"
        );
        Ok(options)
    }
}
