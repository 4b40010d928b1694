//! # nest-search
//!
//! Semantic search over task titles.
//!
//! [`SearchEngine::search`] delegates the heavy lifting to the smart-search
//! endpoint: the backend embeds the query, compares it against stored task
//! embeddings, applies the similarity cutoff, and returns results ranked
//! descending. The engine's own responsibilities are small and strict:
//!
//! - short-circuit blank queries without any backend call,
//! - trust the delegated ordering (no local re-sort),
//! - enforce the fixed [`SIMILARITY_THRESHOLD`] so no sub-threshold result
//!   ever reaches the caller, even from a misbehaving backend.
//!
//! Tasks whose embedding never materialized (the fire-and-forget generation
//! failed or has not completed) are simply absent from results.

mod error;

pub use error::SearchError;

use nest_core::responses::SearchResult;
use nest_remote::RemoteClient;

/// Fixed similarity cutoff. Applied server-side and re-checked here; not a
/// tunable.
pub const SIMILARITY_THRESHOLD: f64 = 0.7;

/// Semantic search over the calling user's tasks.
pub struct SearchEngine {
    remote: RemoteClient,
}

impl SearchEngine {
    /// Create an engine over a remote client.
    #[must_use]
    pub const fn new(remote: RemoteClient) -> Self {
        Self { remote }
    }

    /// Run a smart search.
    ///
    /// A blank query returns an empty list immediately, without any backend
    /// call. An empty list from the backend is likewise a valid, non-error
    /// outcome.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Remote`] if the endpoint call fails.
    pub async fn search(&self, query: &str) -> Result<Vec<SearchResult>, SearchError> {
        if query.trim().is_empty() {
            return Ok(Vec::new());
        }

        let results = self.remote.smart_search(query).await?;

        // Ordering is the backend's contract; only the cutoff is enforced
        // locally.
        let kept: Vec<SearchResult> = results
            .into_iter()
            .filter(|r| r.similarity >= SIMILARITY_THRESHOLD)
            .collect();

        tracing::debug!(query, results = kept.len(), "smart search completed");
        Ok(kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::thread;
    use tiny_http::{Response, Server, StatusCode};

    struct Stub {
        base: String,
        requests: Arc<AtomicUsize>,
    }

    fn spawn_stub(status: u16, body: &'static str) -> Stub {
        let server = Server::http("127.0.0.1:0").expect("http server");
        let base = format!("http://{}", server.server_addr());
        let requests = Arc::new(AtomicUsize::new(0));
        let requests_clone = Arc::clone(&requests);
        thread::spawn(move || {
            loop {
                let req = match server.recv_timeout(std::time::Duration::from_millis(500)) {
                    Ok(Some(req)) => req,
                    Ok(None) | Err(_) => break,
                };
                requests_clone.fetch_add(1, Ordering::Relaxed);
                let _ =
                    req.respond(Response::from_string(body).with_status_code(StatusCode(status)));
            }
        });
        Stub { base, requests }
    }

    fn engine(base: &str) -> SearchEngine {
        SearchEngine::new(RemoteClient::new(base, "anon-key"))
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn blank_query_short_circuits() {
        let stub = spawn_stub(200, "{}");
        let engine = engine(&stub.base);

        for query in ["", "   ", "\t\n"] {
            let results = engine.search(query).await.unwrap();
            assert!(results.is_empty());
        }

        // The short-circuit must not touch the backend at all.
        assert_eq!(stub.requests.load(Ordering::Relaxed), 0);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn results_keep_backend_order() {
        let stub = spawn_stub(
            200,
            r#"{"results":[
                {"id":"tsk-1","title":"Buy groceries","priority":"high","status":"pending","similarity":0.93},
                {"id":"tsk-2","title":"Meal prep","priority":"medium","status":"in-progress","similarity":0.81},
                {"id":"tsk-3","title":"Order takeout","priority":"low","status":"done","similarity":0.72}
            ]}"#,
        );
        let engine = engine(&stub.base);

        let results = engine.search("groceries").await.unwrap();
        let ids: Vec<&str> = results.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["tsk-1", "tsk-2", "tsk-3"]);
        assert_eq!(stub.requests.load(Ordering::Relaxed), 1);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn sub_threshold_results_never_surface() {
        // A misbehaving backend leaks sub-cutoff rows; the engine drops them.
        let stub = spawn_stub(
            200,
            r#"{"results":[
                {"id":"tsk-1","title":"Buy groceries","priority":"high","status":"pending","similarity":0.95},
                {"id":"tsk-2","title":"Water plants","priority":"low","status":"pending","similarity":0.42}
            ]}"#,
        );
        let engine = engine(&stub.base);

        let results = engine.search("groceries").await.unwrap();
        assert_eq!(results.len(), 1);
        assert!(results.iter().all(|r| r.similarity >= SIMILARITY_THRESHOLD));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn threshold_boundary_is_inclusive() {
        let stub = spawn_stub(
            200,
            r#"{"results":[
                {"id":"tsk-1","title":"Edge case","priority":"low","status":"pending","similarity":0.7}
            ]}"#,
        );
        let engine = engine(&stub.base);

        let results = engine.search("edge").await.unwrap();
        assert_eq!(results.len(), 1);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn empty_results_are_not_an_error() {
        let stub = spawn_stub(200, r#"{"results":[]}"#);
        let engine = engine(&stub.base);

        let results = engine.search("nothing matches this").await.unwrap();
        assert!(results.is_empty());
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn endpoint_failure_is_an_error() {
        let stub = spawn_stub(500, "search unavailable");
        let engine = engine(&stub.base);

        let result = engine.search("groceries").await;
        assert!(matches!(result, Err(SearchError::Remote(_))));
        drop(stub);
    }
}
