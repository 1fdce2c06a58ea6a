use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::{HeaderMap, Uri, header::CONTENT_TYPE},
};
use axum_macros::FromRequestParts;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ApiError;

/// `axum::extract::Path` with rejections rendered as [`ApiError`].
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ApiError))]
pub struct Path<T>(pub T);

/// JSON request body.
///
/// A request without a JSON content type, an empty body or a top-level JSON
/// array yields `T::default()`, so that the handler's own field checks decide
/// the outcome. Only objects are deserialized into `T`; any other JSON value,
/// or an object that does not fit `T`, is rejected with 400.
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_json = has_json_content_type(req.headers());
        let bytes = Bytes::from_request(req, state).await?;

        if !is_json || bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self(T::default()));
        }

        let value: Value =
            serde_json::from_slice(&bytes).map_err(|e| ApiError::MalformedBody(e.to_string()))?;

        // An array carries none of the named fields
        match value {
            Value::Object(_) => serde_json::from_value(value)
                .map(Self)
                .map_err(|e| ApiError::MalformedBody(e.to_string())),
            Value::Array(_) => Ok(Self(T::default())),
            _ => Err(ApiError::MalformedBody(
                "request body must be a JSON object".to_string(),
            )),
        }
    }
}

fn has_json_content_type(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .map(str::trim)
        .is_some_and(|mime| {
            mime.eq_ignore_ascii_case("application/json")
                || (mime.starts_with("application/") && mime.ends_with("+json"))
        })
}

/// `Location` value for a freshly created resource: the request path with
/// the new id appended.
pub fn location(original_uri: &Uri, id: i64) -> String {
    format!("{}/{}", original_uri.path().trim_end_matches('/'), id)
}
