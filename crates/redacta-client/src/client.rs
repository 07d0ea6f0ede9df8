//! Shared HTTP plumbing for the service clients.

use std::time::Duration;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::ClientError;

/// Build a `reqwest` client with a per-request timeout.
pub fn build_client(timeout: Duration) -> Result<reqwest::Client, ClientError> {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| ClientError::Config(e.to_string()))
}

/// Join a base URL and a path without doubling the slash.
pub fn endpoint(base_url: &str, path: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), path.trim_start_matches('/'))
}

/// POST `body` as JSON and decode a JSON reply. Non-2xx is an error.
pub async fn post_json<B, R>(
    http: &reqwest::Client,
    service: &'static str,
    url: &str,
    body: &B,
) -> Result<R, ClientError>
where
    B: Serialize + ?Sized,
    R: DeserializeOwned,
{
    let response = http
        .post(url)
        .json(body)
        .send()
        .await
        .map_err(|e| ClientError::Transport {
            service,
            message: e.to_string(),
        })?;

    let response = ensure_success(service, response).await?;

    response
        .json::<R>()
        .await
        .map_err(|e| ClientError::ResponseParse(format!("{service}: {e}")))
}

/// GET `url` and succeed on any 2xx.
pub async fn get_ok(
    http: &reqwest::Client,
    service: &'static str,
    url: &str,
) -> Result<(), ClientError> {
    let response = http
        .get(url)
        .send()
        .await
        .map_err(|e| ClientError::Transport {
            service,
            message: e.to_string(),
        })?;

    ensure_success(service, response).await.map(|_| ())
}

async fn ensure_success(
    service: &'static str,
    response: reqwest::Response,
) -> Result<reqwest::Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(ClientError::Status {
        service,
        status: status.as_u16(),
        body,
    })
}
