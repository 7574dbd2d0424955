use super::ConfigError;

/// Top-level error for every Quell operation.
#[derive(Debug, thiserror::Error)]
pub enum QuellError {
    /// A suppression state violates its invariants. Fatal to the call; the
    /// caller has to fix the configuration before evaluating again.
    #[error("configuration error: {field} = {value}, expected {expected}")]
    Configuration {
        field: &'static str,
        value: String,
        expected: &'static str,
    },

    /// The state has no anomaly baseline yet.
    #[error("invalid suppression state: {reason}")]
    InvalidState { reason: String },

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl QuellError {
    /// Whether this error stems from misconfiguration rather than caller state.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration { .. } | Self::Config(_))
    }
}

impl From<toml::de::Error> for QuellError {
    fn from(err: toml::de::Error) -> Self {
        Self::Config(err.into())
    }
}

pub type QuellResult<T> = Result<T, QuellError>;
