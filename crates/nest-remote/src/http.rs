//! Shared HTTP response helper for the backend function clients.
//!
//! Centralizes the status-code check (non-success → [`RemoteError::Api`]) so
//! the endpoint methods stay focused on request construction and response
//! mapping.

use crate::error::RemoteError;

/// Check an HTTP response for error status.
///
/// Returns the response unchanged on success. Any non-success status maps to
/// [`RemoteError::Api`] with the status code and response body.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, RemoteError> {
    if !resp.status().is_success() {
        return Err(RemoteError::Api {
            status: resp.status().as_u16(),
            message: resp.text().await.unwrap_or_default(),
        });
    }
    Ok(resp)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mock_response(status: u16, body: &'static str) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(status)
                .body(body)
                .unwrap(),
        )
    }

    #[tokio::test]
    async fn check_response_success() {
        let resp = mock_response(200, "");
        assert!(check_response(resp).await.is_ok());
    }

    #[tokio::test]
    async fn check_response_client_error() {
        let resp = mock_response(401, "invalid token");
        let err = check_response(resp).await.unwrap_err();
        match err {
            RemoteError::Api { status, message } => {
                assert_eq!(status, 401);
                assert_eq!(message, "invalid token");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn check_response_server_error() {
        let resp = mock_response(500, "");
        let err = check_response(resp).await.unwrap_err();
        assert!(matches!(err, RemoteError::Api { status: 500, .. }));
    }
}
