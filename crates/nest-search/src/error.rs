//! Search error types.

use thiserror::Error;

use nest_remote::RemoteError;

/// Errors from a smart-search run.
///
/// An empty result list is a valid outcome and is never represented as an
/// error.
#[derive(Debug, Error)]
pub enum SearchError {
    /// The smart-search endpoint call failed.
    #[error(transparent)]
    Remote(#[from] RemoteError),
}
