use axum::{extract::Request, http::HeaderValue, middleware::Next, response::Response};
use uuid::Uuid;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Newtype wrapping a request ID string, stored as a request extension.
#[derive(Debug, Clone)]
pub struct RequestId(pub String);

/// Axum middleware that extracts or generates a request ID.
///
/// A non-empty incoming `x-request-id` is reused; otherwise a new `UUIDv4`
/// is generated. The ID is inserted into request extensions as
/// [`RequestId`] and echoed on the response.
pub async fn request_id(mut req: Request, next: Next) -> Response {
    let id = incoming_request_id(req.headers().get(REQUEST_ID_HEADER))
        .map_or_else(|| Uuid::new_v4().to_string(), ToOwned::to_owned);

    req.extensions_mut().insert(RequestId(id.clone()));

    let mut res = next.run(req).await;

    if let Ok(val) = HeaderValue::from_str(&id) {
        res.headers_mut().insert(REQUEST_ID_HEADER, val);
    }

    res
}

fn incoming_request_id(value: Option<&HeaderValue>) -> Option<&str> {
    value
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn incoming_id_is_reused() {
        let header = HeaderValue::from_static("req-123");
        assert_eq!(incoming_request_id(Some(&header)), Some("req-123"));
    }

    #[test]
    fn blank_incoming_id_is_ignored() {
        let header = HeaderValue::from_static("   ");
        assert_eq!(incoming_request_id(Some(&header)), None);
        assert_eq!(incoming_request_id(None), None);
    }
}
