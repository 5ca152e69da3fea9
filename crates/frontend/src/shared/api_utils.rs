//! API utilities for frontend-backend communication
//!
//! Every request goes out with `credentials: include` and a JSON content type.
//! Responses are decoded once here: HTTP status and the `success`/`error`
//! envelope are folded into [`ApiError`] so call sites only match on `Result`.

use contracts::shared::envelope::ApiEnvelope;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::RequestCredentials;

use crate::shared::config::config;
use crate::shared::error::{ApiError, GENERIC_ERROR};

/// Get the base URL for API requests
///
/// Uses the configured base URL; when it is empty the URL is derived from the
/// current window location, using port 5003 for the API server.
pub fn api_base() -> String {
    let configured = &config().api.base_url;
    if !configured.is_empty() {
        return configured.clone();
    }

    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:5003/api", protocol, hostname)
}

/// Build a full API URL from a path like "/products"
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Encode a value for use as a single path segment.
pub fn path_segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

/// Append a serialized query string to a path; empty queries add nothing.
pub fn with_query<Q: Serialize>(path: &str, query: &Q) -> Result<String, ApiError> {
    let qs = serde_qs::to_string(query).map_err(|e| ApiError::Encode(e.to_string()))?;
    if qs.is_empty() {
        Ok(path.to_string())
    } else {
        Ok(format!("{}?{}", path, qs))
    }
}

fn with_defaults(builder: RequestBuilder) -> RequestBuilder {
    builder
        .credentials(RequestCredentials::Include)
        .header("Content-Type", "application/json")
        .header("Accept", "application/json")
}

/// Decode a response body given its HTTP status.
pub fn decode_body<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, ApiError> {
    let ok_status = (200..300).contains(&status);

    let value: serde_json::Value = match serde_json::from_str(body) {
        Ok(value) => value,
        Err(_) if !ok_status => {
            return Err(ApiError::Http {
                status,
                message: GENERIC_ERROR.to_string(),
            })
        }
        Err(e) => return Err(ApiError::Decode(e.to_string())),
    };

    let envelope: ApiEnvelope = serde_json::from_value(value.clone()).unwrap_or_default();
    let message = envelope.error_text().unwrap_or(GENERIC_ERROR).to_string();

    if !ok_status {
        return Err(ApiError::Http { status, message });
    }
    if !envelope.success {
        return Err(ApiError::Rejected(message));
    }

    serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}

async fn read_response<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))?;
    decode_body(status, &body)
}

/// `GET` a JSON resource.
pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let response = with_defaults(Request::get(&api_url(path)))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    read_response(response).await
}

/// `POST` a JSON body.
pub async fn post_json<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, ApiError> {
    send_body(Request::post(&api_url(path)), body).await
}

/// `PUT` a JSON body.
pub async fn put_json<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, ApiError> {
    send_body(Request::put(&api_url(path)), body).await
}

async fn send_body<B: Serialize, T: DeserializeOwned>(
    builder: RequestBuilder,
    body: &B,
) -> Result<T, ApiError> {
    let response = with_defaults(builder)
        .json(body)
        .map_err(|e| ApiError::Encode(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    read_response(response).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_product::dto::{FilterSet, ProductListQuery, ProductListResponse};

    #[test]
    fn test_decode_success_payload() {
        let body = r#"{"success": true, "products": [{"product_id": "P1"}], "total": 1}"#;
        let resp: ProductListResponse = decode_body(200, body).unwrap();
        assert_eq!(resp.total, 1);
        assert_eq!(resp.products[0].product_id, "P1");
    }

    #[test]
    fn test_decode_http_error_uses_error_field() {
        let body = r#"{"success": false, "error": "Product not found"}"#;
        let err = decode_body::<ProductListResponse>(404, body).unwrap_err();
        assert_eq!(
            err,
            ApiError::Http {
                status: 404,
                message: "Product not found".into()
            }
        );
    }

    #[test]
    fn test_decode_http_error_without_body() {
        let err = decode_body::<ProductListResponse>(502, "<html>Bad Gateway</html>").unwrap_err();
        assert_eq!(
            err,
            ApiError::Http {
                status: 502,
                message: GENERIC_ERROR.into()
            }
        );
    }

    #[test]
    fn test_decode_rejected_with_ok_status() {
        let err = decode_body::<ProductListResponse>(200, r#"{"success": false}"#).unwrap_err();
        assert_eq!(err, ApiError::Rejected(GENERIC_ERROR.into()));
    }

    #[test]
    fn test_decode_malformed_body() {
        let err = decode_body::<ProductListResponse>(200, "not json").unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn test_query_string_omits_absent_filters() {
        let query = ProductListQuery::new(12, 0, &FilterSet::default());
        let url = with_query("/products", &query).unwrap();
        assert_eq!(url, "/products?limit=12&offset=0");

        let filters = FilterSet {
            search: Some("vitamin c".into()),
            in_stock: Some(true),
            ..Default::default()
        };
        let url = with_query("/products", &ProductListQuery::new(12, 24, &filters)).unwrap();
        assert!(url.starts_with("/products?limit=12&offset=24&search=vitamin"));
        assert!(url.ends_with("&in_stock=true"));
        assert!(!url.contains("category"));
        assert!(!url.contains("max_price"));
    }

    #[test]
    fn test_path_segment_is_encoded() {
        assert_eq!(path_segment("P 1/2"), "P%201%2F2");
    }
}
