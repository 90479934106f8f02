//! Domain error types.

use std::path::PathBuf;

/// Top-level error type for typedconf.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not find key {key} in section {section}")]
    MissingKey { section: String, key: String },

    #[error("no section named [{section}]")]
    UnknownSection { section: String },

    #[error("config parse error in {file}: {reason}")]
    Parse { file: String, reason: String },

    #[error("I/O error accessing config at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl From<&ConfigError> for std::process::ExitCode {
    fn from(err: &ConfigError) -> Self {
        let code: u8 = match err {
            ConfigError::Io { .. } => 1,
            ConfigError::MissingKey { .. }
            | ConfigError::UnknownSection { .. }
            | ConfigError::Parse { .. } => 2,
        };
        std::process::ExitCode::from(code)
    }
}
