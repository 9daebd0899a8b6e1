use thiserror::Error;

/// Errors raised outside the naming tables: config files and text arguments.
/// Looking up a name never produces one of these.
#[derive(Error, Debug)]
pub enum NamesError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unknown code kind: {kind}")]
    UnknownKindError { kind: String },

    #[error("Unknown rescattering category: {category}")]
    UnknownCategoryError { category: String },
}

impl NamesError {
    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            NamesError::IoError(_) => "Check that the configuration file exists and is readable",
            NamesError::SerializationError(_) => "Report this as a bug; output could not be encoded",
            NamesError::ConfigValidationError { .. } => "Check the TOML syntax of the configuration file",
            NamesError::InvalidConfigValueError { .. } => "Fix the highlighted configuration value",
            NamesError::UnknownKindError { .. } => {
                "Use one of: particle, status, origin, ccnc, mode, interaction, rescattering"
            }
            NamesError::UnknownCategoryError { .. } => "Use one of: genie_inuke_fate_ha, genie, larsoft_default, default",
        }
    }
}

pub type Result<T> = std::result::Result<T, NamesError>;
