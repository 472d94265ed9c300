//! HTTP API Client
//!
//! Thin wrappers around `gloo-net` for talking JSON to the Ledgerly REST API.
//! Every failure is normalized into [`ApiError`] and logged to the browser
//! console; response bodies decode into concrete types so a shape mismatch
//! surfaces as `Deserialization` instead of a partially filled object.

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::api::error::{ApiError, ApiResult};

/// Default API base URL (same origin).
pub const DEFAULT_API_BASE: &str = "/api";

const API_URL_STORAGE_KEY: &str = "ledgerly_api_url";

/// Get the API base URL from local storage or use the default.
pub fn get_api_base() -> String {
    let url = if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item(API_URL_STORAGE_KEY) {
                url
            } else {
                DEFAULT_API_BASE.to_string()
            }
        } else {
            DEFAULT_API_BASE.to_string()
        }
    } else {
        DEFAULT_API_BASE.to_string()
    };
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

/// GET a collection or a single resource.
pub async fn get_json<T: DeserializeOwned>(url: &str) -> ApiResult<T> {
    let response = Request::get(url).send().await.map_err(network_error)?;
    decode_json(response).await
}

/// POST a resource, decoding the created resource from the response.
pub async fn post_json<B: Serialize, T: DeserializeOwned>(url: &str, body: &B) -> ApiResult<T> {
    let response = Request::post(url)
        .json(body)
        .map_err(network_error)?
        .send()
        .await
        .map_err(network_error)?;
    decode_json(response).await
}

/// PUT a resource. The server acknowledges with an empty body.
pub async fn put_json<B: Serialize>(url: &str, body: &B) -> ApiResult<()> {
    let response = Request::put(url)
        .json(body)
        .map_err(network_error)?
        .send()
        .await
        .map_err(network_error)?;
    expect_ok(response).await
}

/// DELETE a resource. The server acknowledges with an empty body.
pub async fn delete(url: &str) -> ApiResult<()> {
    let response = Request::delete(url).send().await.map_err(network_error)?;
    expect_ok(response).await
}

async fn decode_json<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
    let response = check_status(response).await?;

    let body = response
        .text()
        .await
        .map_err(|e| log(ApiError::Network(e.to_string())))?;

    serde_json::from_str(&body).map_err(|e| log(ApiError::Deserialization(e.to_string())))
}

async fn expect_ok(response: Response) -> ApiResult<()> {
    check_status(response).await.map(|_| ())
}

async fn check_status(response: Response) -> ApiResult<Response> {
    if response.ok() {
        return Ok(response);
    }

    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Err(log(status_error(status, &body)))
}

/// Classify a non-2xx response.
///
/// A 422 is expected to carry `{"errors": ["..."]}`; if the body does not
/// parse, the status alone is reported and the UI falls back to its generic
/// message.
fn status_error(status: u16, body: &str) -> ApiError {
    if status == 422 {
        if let Ok(validation) = serde_json::from_str::<ValidationBody>(body) {
            return ApiError::Validation(validation.errors);
        }
    }
    ApiError::Status(status)
}

fn network_error(err: gloo_net::Error) -> ApiError {
    log(ApiError::Network(err.to_string()))
}

fn log(err: ApiError) -> ApiError {
    web_sys::console::error_1(&format!("api request failed: {err}").into());
    err
}

#[derive(serde::Deserialize)]
struct ValidationBody {
    errors: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_422_with_errors_body() {
        let err = status_error(422, r#"{"errors":["name is required"]}"#);
        assert_eq!(
            err,
            ApiError::Validation(vec!["name is required".to_string()])
        );
    }

    #[test]
    fn malformed_422_body_degrades_to_status() {
        assert_eq!(status_error(422, "<html>oops</html>"), ApiError::Status(422));
        assert_eq!(status_error(422, ""), ApiError::Status(422));
    }

    #[test]
    fn other_statuses_keep_their_code() {
        assert_eq!(status_error(404, ""), ApiError::Status(404));
        assert_eq!(status_error(500, r#"{"errors":["x"]}"#), ApiError::Status(500));
    }
}
