use crate::config::ConfigError;

/// Exit code used for every fatal error. Kept apart from the `1` of a
/// sentence that did not match.
pub const FATAL_EXIT_CODE: u8 = 2;

#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    #[error("Usage error: {0}")]
    Usage(#[from] ConfigError),

    #[error("Network error: {0}")]
    Network(#[source] reqwest::Error),

    #[error("Read error: {0}")]
    Read(#[source] reqwest::Error),
}

impl CheckError {
    pub fn exit_code(&self) -> u8 {
        FATAL_EXIT_CODE
    }
}
