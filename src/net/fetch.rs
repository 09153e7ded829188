use crate::errors::CheckError;
use crate::net::Response;

/// Loads an URL with a default client and buffers the whole response.
///
/// Failing to send the request (bad URL, DNS, refused connection) is a
/// [`CheckError::Network`]; failing while reading the body is a
/// [`CheckError::Read`].
pub async fn fetch(url: &str) -> Result<Response, CheckError> {
    let client = reqwest::Client::new();
    let res = client.get(url).send().await.map_err(CheckError::Network)?;

    // Fetch results
    let final_url = res.url().clone();
    let status = res.status().as_u16();
    let status_text = res.status().canonical_reason().unwrap_or("Unknown").to_string();
    let headers = res.headers().clone();

    // Consumes the response, so the connection is released here on both paths
    let body = res.bytes().await.map_err(CheckError::Read)?.to_vec();

    log::debug!("fetched {} ({} {}), {} bytes", final_url, status, status_text, body.len());

    Ok(Response {
        url: final_url,
        status,
        status_text,
        headers,
        body,
    })
}
