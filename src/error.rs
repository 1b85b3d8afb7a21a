use crate::dimension::{Dimension, RegistryError};

/// Result alias used throughout the crate
pub type Result<T, E = UnitsError> = std::result::Result<T, E>;

/// Error types for dimension, unit and catalogue operations
#[derive(Debug, thiserror::Error)]
pub enum UnitsError {
    /// Operands or a requested unit measure a different dimension
    #[error("Dimensions do not match: expected {expected}, found {found}")]
    DimensionMismatch { expected: Dimension, found: Dimension },

    /// An offset unit such as °C cannot be combined or rescaled
    #[error("Invalid unit combination: cannot combine an offset unit ({symbol})")]
    InvalidUnitCombination { symbol: String },

    /// No registered unit has the requested symbol
    #[error("Unit not found: {0}")]
    UnitNotFound(String),

    /// No registered dimension has the requested name
    #[error("Dimension not found: {0}")]
    DimensionNotFound(String),

    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// Malformed TOML catalogue
    #[error("Configuration error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl UnitsError {
    pub(crate) fn check_dimension(expected: Dimension, found: Dimension) -> Result<()> {
        if expected == found {
            Ok(())
        } else {
            Err(UnitsError::DimensionMismatch { expected, found })
        }
    }
}
