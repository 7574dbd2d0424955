/// Errors raised while loading or resolving configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config parse error: {message}")]
    Parse { message: String },

    #[error("failed to read config file {path}: {message}")]
    Io { path: String, message: String },

    #[error("environment variable {name} is not a number: {value:?}")]
    InvalidEnvValue { name: String, value: String },

    #[error("config field {field} = {value} out of range, expected {expected}")]
    OutOfRange {
        field: String,
        value: String,
        expected: String,
    },
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        Self::Parse {
            message: err.to_string(),
        }
    }
}
