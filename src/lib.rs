pub mod config;
pub mod errors;
pub mod net;
pub mod runner;
pub mod validate;

pub use config::{CheckConfig, ConfigError};
pub use errors::CheckError;
pub use runner::{check, run};
pub use validate::{is_valid_sentence, Verdict};
