mod config_error;
mod quell_error;

pub use config_error::ConfigError;
pub use quell_error::{QuellError, QuellResult};
