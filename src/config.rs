//! Check configuration.
//!
//! `CheckConfig` holds everything a single run needs, which today is only the
//! endpoint to query. It is normally built from the command line with
//! [`CheckConfig::from_args`], or by hand through [`CheckConfig::builder()`].
//!
//! # Examples
//!
//! ```rust
//! use sentence_check::CheckConfig;
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let cfg = CheckConfig::builder()
//!     .endpoint("http://127.0.0.1:8080/sentence")
//!     .build()?;
//! assert_eq!(cfg.endpoint, "http://127.0.0.1:8080/sentence");
//! # Ok(()) }
//! ```
//!
//! The endpoint is not parsed here. Whatever the HTTP client rejects surfaces
//! later as a network error.

use std::fmt;

#[derive(Debug, Clone, Default)]
pub struct CheckConfig {
    /// URL that is queried with a single GET request
    pub endpoint: String,
}

impl CheckConfig {
    pub fn builder() -> CheckConfigBuilder {
        CheckConfigBuilder::default()
    }

    /// Builds the config from program arguments, without the program name.
    ///
    /// The first argument is the endpoint; anything after it is ignored.
    pub fn from_args<I, S>(args: I) -> Result<CheckConfig, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let endpoint = args.into_iter().next().ok_or(ConfigError::MissingEndpoint)?;
        Self::builder().endpoint(endpoint).build()
    }
}

#[derive(Debug, Clone, Default)]
pub struct CheckConfigBuilder {
    inner: CheckConfig,
}

impl CheckConfigBuilder {
    #[inline]
    fn map(mut self, f: impl FnOnce(&mut CheckConfig)) -> Self {
        f(&mut self.inner);
        self
    }

    pub fn endpoint<S: Into<String>>(self, url: S) -> Self { self.map(|c| c.endpoint = url.into()) }

    /// Validate and build the final config.
    pub fn build(self) -> Result<CheckConfig, ConfigError> {
        validate(&self.inner)?;
        Ok(self.inner)
    }
}

// ---------- Validation ----------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    MissingEndpoint,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::MissingEndpoint =>
                write!(f, "You must pass the endpoint to query as the first argument."),
        }
    }
}
impl std::error::Error for ConfigError {}

fn validate(c: &CheckConfig) -> Result<(), ConfigError> {
    if c.endpoint.is_empty() {
        return Err(ConfigError::MissingEndpoint);
    }
    Ok(())
}
