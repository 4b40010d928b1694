//! # nest-remote
//!
//! HTTP clients for the three Tasknest backend functions:
//!
//! - `generate-embedding` — computes and stores a title embedding server-side.
//!   Invoked once per task creation, fire-and-forget via
//!   [`RemoteClient::dispatch_embedding`].
//! - `suggest-subtasks` — returns candidate subtask titles for a task title.
//! - `smart-search` — embeds a query and returns tasks ranked by similarity,
//!   already thresholded and ordered server-side.
//!
//! All endpoints are `POST` with JSON bodies and a bearer credential. There
//! are no retries anywhere; a failed call surfaces once and the user
//! re-triggers manually.

mod error;
mod http;

pub use error::RemoteError;

use serde::{Deserialize, Serialize};

use nest_core::responses::SearchResult;

use crate::http::check_response;

// ── Wire types ─────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct EmbeddingRequest<'a> {
    task_id: &'a str,
    task_title: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SuggestRequest<'a> {
    task_title: &'a str,
}

#[derive(Debug, Deserialize)]
struct SuggestResponse {
    subtasks: Vec<String>,
}

#[derive(Debug, Serialize)]
struct SearchRequest<'a> {
    query: &'a str,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    results: Vec<SearchResult>,
}

// ── Client ─────────────────────────────────────────────────────────

/// HTTP client for the Tasknest backend functions.
///
/// Cheap to clone (the inner `reqwest::Client` is reference-counted), which
/// is what the detached embedding dispatch relies on.
#[derive(Clone)]
pub struct RemoteClient {
    http: reqwest::Client,
    base_url: String,
    bearer_token: String,
}

impl RemoteClient {
    /// Create a new client for the function endpoint at `base_url`.
    ///
    /// # Panics
    ///
    /// Panics if the underlying `reqwest::Client` fails to build.
    #[must_use]
    pub fn new(base_url: impl Into<String>, bearer_token: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::builder()
                .user_agent("tasknest/0.1")
                .timeout(std::time::Duration::from_secs(10))
                .build()
                .expect("reqwest client should build"),
            base_url: base_url.into(),
            bearer_token: bearer_token.into(),
        }
    }

    fn endpoint(&self, name: &str) -> String {
        format!("{}/{name}", self.base_url.trim_end_matches('/'))
    }

    /// Ask the backend to compute and store the embedding for a task title.
    ///
    /// The response body is never consulted; only the status matters.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteError`] on transport failure or non-2xx status.
    pub async fn generate_embedding(
        &self,
        task_id: &str,
        task_title: &str,
    ) -> Result<(), RemoteError> {
        let resp = self
            .http
            .post(self.endpoint("generate-embedding"))
            .bearer_auth(&self.bearer_token)
            .json(&EmbeddingRequest {
                task_id,
                task_title,
            })
            .send()
            .await?;
        check_response(resp).await?;
        Ok(())
    }

    /// Dispatch embedding generation as a detached task.
    ///
    /// At-most-once: no retry, no join by the caller. Failure is logged and
    /// swallowed; a task without an embedding is a tolerated gap that only
    /// keeps it out of search results. The returned handle exists for tests;
    /// production callers drop it.
    pub fn dispatch_embedding(
        &self,
        task_id: String,
        task_title: String,
    ) -> tokio::task::JoinHandle<()> {
        let client = self.clone();
        tokio::spawn(async move {
            if let Err(error) = client.generate_embedding(&task_id, &task_title).await {
                tracing::warn!(%task_id, %error, "embedding generation failed");
            }
        })
    }

    /// Fetch candidate subtask titles for a task title.
    ///
    /// Returns the candidates in the order the generator produced them; no
    /// local re-ranking.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteError`] on transport failure or non-2xx status.
    pub async fn suggest_subtasks(&self, task_title: &str) -> Result<Vec<String>, RemoteError> {
        let resp = self
            .http
            .post(self.endpoint("suggest-subtasks"))
            .bearer_auth(&self.bearer_token)
            .json(&SuggestRequest { task_title })
            .send()
            .await?;
        let resp = check_response(resp).await?;
        let body: SuggestResponse = resp.json().await?;
        Ok(body.subtasks)
    }

    /// Run a smart search for the given query.
    ///
    /// The backend embeds the query, compares against stored task embeddings,
    /// applies the similarity cutoff, and returns results ranked descending.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteError`] on transport failure or non-2xx status.
    pub async fn smart_search(&self, query: &str) -> Result<Vec<SearchResult>, RemoteError> {
        let resp = self
            .http
            .post(self.endpoint("smart-search"))
            .bearer_auth(&self.bearer_token)
            .json(&SearchRequest { query })
            .send()
            .await?;
        let resp = check_response(resp).await?;
        let body: SearchResponse = resp.json().await?;
        Ok(body.results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::thread;
    use tiny_http::{Response, Server, StatusCode};

    struct StubServer {
        base: String,
        requests: Arc<AtomicUsize>,
        handle: thread::JoinHandle<Vec<(String, String, String)>>,
    }

    /// Spawn a one-endpoint stub that answers every request with `status` and
    /// `body`, recording (url, authorization, request body) triples.
    fn spawn_stub(status: u16, body: &'static str) -> StubServer {
        let server = Server::http("127.0.0.1:0").expect("http server");
        let base = format!("http://{}", server.server_addr());
        let requests = Arc::new(AtomicUsize::new(0));
        let requests_clone = Arc::clone(&requests);
        let handle = thread::spawn(move || {
            let mut seen = Vec::new();
            loop {
                let mut req = match server.recv_timeout(std::time::Duration::from_millis(500)) {
                    Ok(Some(req)) => req,
                    Ok(None) | Err(_) => break,
                };
                let url = req.url().to_string();
                let auth = req
                    .headers()
                    .iter()
                    .find(|h| h.field.equiv("Authorization"))
                    .map(|h| h.value.as_str().to_string())
                    .unwrap_or_default();
                let mut request_body = String::new();
                let _ = req.as_reader().read_to_string(&mut request_body);
                seen.push((url, auth, request_body));
                requests_clone.fetch_add(1, Ordering::Relaxed);
                let _ = req.respond(
                    Response::from_string(body).with_status_code(StatusCode(status)),
                );
            }
            seen
        });
        StubServer {
            base,
            requests,
            handle,
        }
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn suggest_subtasks_roundtrip() {
        let stub = spawn_stub(200, r#"{"subtasks":["Buy milk","Buy eggs"]}"#);
        let client = RemoteClient::new(&stub.base, "anon-key");

        let subtasks = client.suggest_subtasks("Buy groceries").await.unwrap();
        assert_eq!(subtasks, vec!["Buy milk", "Buy eggs"]);

        let seen = stub.handle.join().unwrap();
        assert_eq!(seen.len(), 1);
        let (url, auth, body) = &seen[0];
        assert_eq!(url, "/suggest-subtasks");
        assert_eq!(auth, "Bearer anon-key");
        assert_eq!(body, r#"{"taskTitle":"Buy groceries"}"#);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn suggest_subtasks_non_2xx() {
        let stub = spawn_stub(500, "generator unavailable");
        let client = RemoteClient::new(&stub.base, "anon-key");

        let err = client.suggest_subtasks("Buy groceries").await.unwrap_err();
        assert!(matches!(err, RemoteError::Api { status: 500, .. }));
        drop(stub);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn smart_search_roundtrip() {
        let stub = spawn_stub(
            200,
            r#"{"results":[
                {"id":"tsk-1","title":"Buy groceries","priority":"high","status":"pending","similarity":0.91},
                {"id":"tsk-2","title":"Plan meals","priority":"low","status":"done","similarity":0.74}
            ]}"#,
        );
        let client = RemoteClient::new(&stub.base, "anon-key");

        let results = client.smart_search("groceries").await.unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].id, "tsk-1");
        assert!(results[0].similarity > results[1].similarity);

        let seen = stub.handle.join().unwrap();
        assert_eq!(seen[0].0, "/smart-search");
        assert_eq!(seen[0].2, r#"{"query":"groceries"}"#);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn dispatch_embedding_posts_once() {
        let stub = spawn_stub(200, "{}");
        let client = RemoteClient::new(&stub.base, "anon-key");

        let handle =
            client.dispatch_embedding("tsk-1".to_string(), "Buy groceries".to_string());
        handle.await.unwrap();

        assert_eq!(stub.requests.load(Ordering::Relaxed), 1);
        let seen = stub.handle.join().unwrap();
        let (url, _, body) = &seen[0];
        assert_eq!(url, "/generate-embedding");
        assert_eq!(body, r#"{"taskId":"tsk-1","taskTitle":"Buy groceries"}"#);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn dispatch_embedding_swallows_failure() {
        let stub = spawn_stub(500, "boom");
        let client = RemoteClient::new(&stub.base, "anon-key");

        // The detached task must complete cleanly even when the endpoint
        // fails; the error is logged, never propagated.
        let handle = client.dispatch_embedding("tsk-1".to_string(), "title".to_string());
        handle.await.unwrap();
        drop(stub);
    }

    #[test]
    fn endpoint_joins_cleanly() {
        let client = RemoteClient::new("https://api.example/functions/v1/", "k");
        assert_eq!(
            client.endpoint("smart-search"),
            "https://api.example/functions/v1/smart-search"
        );
    }
}
