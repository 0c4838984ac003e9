use thiserror::Error;

/// Invalid argument passed to the OKLCH to RGB direction.
///
/// Gamut-unrepresentable colors are not errors; see [`crate::to_rgb`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConversionError {
    #[error("Lightness must be at least 0 and at most 1, got {lightness}")]
    InvalidLightness { lightness: f64 },

    #[error("Chroma must be at least 0, got {chroma}")]
    InvalidChroma { chroma: f64 },
}

/// Failure to load [`crate::ConversionOptions`] from text.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}
