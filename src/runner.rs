//! The check itself: read the endpoint, fetch it once, validate the body.

use crate::config::CheckConfig;
use crate::errors::CheckError;
use crate::net::fetch;
use crate::validate::Verdict;

/// Runs a check from program arguments (without the program name).
///
/// A missing endpoint fails before any network activity.
pub async fn run<I, S>(args: I) -> Result<Verdict, CheckError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let config = CheckConfig::from_args(args)?;
    check(&config).await
}

/// Fetches the configured endpoint and validates its whole body.
pub async fn check(config: &CheckConfig) -> Result<Verdict, CheckError> {
    let response = fetch(&config.endpoint).await?;
    let sentence = response.text();

    let verdict = Verdict::of(&sentence);
    match verdict {
        Verdict::Valid => log::info!("response: '{}' is valid.", sentence),
        Verdict::Invalid => log::info!("response: '{}' is not valid.", sentence),
    }

    Ok(verdict)
}
