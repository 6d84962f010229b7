//! API Bindings
//!
//! Frontend bindings to the clinic's REST API, organized by domain. Every
//! binding is a thin async function returning `Result<T, ApiError>`; the
//! shared plumbing here adds the base URL, a client-side timeout, and
//! uniform decoding of JSON error bodies.

mod dashboard;
mod notifications;
mod patients;
mod schedules;
mod tasks;

use futures::future::{select, Either};
use gloo_net::http::{Request, Response};
use gloo_timers::future::TimeoutFuture;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;

use crate::config;

// Re-export all public bindings
pub use dashboard::*;
pub use notifications::*;
pub use patients::*;
pub use schedules::*;
pub use tasks::*;

/// Client-side request timeout. The source API does not specify one; expiry
/// is reported like any other failure.
const REQUEST_TIMEOUT_MS: u32 = 10_000;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport-level failure (offline, DNS, refused connection)
    #[error("network error: {0}")]
    Network(String),
    /// Non-2xx response; message comes from the JSON error body when present
    #[error("server error ({code}): {message}")]
    Status { code: u16, message: String },
    /// 2xx response whose body did not match the expected shape
    #[error("malformed response: {0}")]
    Decode(String),
    #[error("request timed out")]
    Timeout,
    /// Required identifier missing before any request was sent
    #[error("no {0} identifier available")]
    MissingId(&'static str),
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => ApiError::Decode(e.to_string()),
            other => ApiError::Network(other.to_string()),
        }
    }
}

/// Shape of the API's JSON error body
#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

/// Send a built request, racing it against the client-side timeout.
async fn send(request: Request) -> Result<Response, ApiError> {
    let send = Box::pin(request.send());
    let timeout = Box::pin(TimeoutFuture::new(REQUEST_TIMEOUT_MS));
    match select(send, timeout).await {
        Either::Left((result, _)) => Ok(result?),
        Either::Right(_) => Err(ApiError::Timeout),
    }
}

/// Pull the message out of a JSON error body, or `None` when the body is
/// not the expected shape (HTML error pages, empty bodies).
fn error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body).ok().map(|b| b.message)
}

/// Turn a non-2xx response into `ApiError::Status`, pulling the message out
/// of the JSON error body when the server sent one.
async fn status_error(response: Response) -> ApiError {
    let code = response.status();
    let message = response
        .text()
        .await
        .ok()
        .and_then(|body| error_message(&body))
        .unwrap_or_else(|| response.status_text());
    ApiError::Status { code, message }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if !response.ok() {
        return Err(status_error(response).await);
    }
    response.json::<T>().await.map_err(ApiError::from)
}

/// GET `{base}{path}` and decode the JSON body.
pub(crate) async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let request = Request::get(&config::api_url(path)).build()?;
    decode(send(request).await?).await
}

/// Send a bodyless request and ignore any response body.
pub(crate) async fn send_empty(request: Request) -> Result<(), ApiError> {
    let response = send(request).await?;
    if !response.ok() {
        return Err(status_error(response).await);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::error_message;

    #[test]
    fn test_error_message_from_json_body() {
        assert_eq!(
            error_message(r#"{"message":"patient not found"}"#),
            Some("patient not found".to_string())
        );
    }

    #[test]
    fn test_error_message_falls_back_on_non_json_body() {
        assert_eq!(error_message("<html>502 Bad Gateway</html>"), None);
        assert_eq!(error_message(""), None);
    }
}
