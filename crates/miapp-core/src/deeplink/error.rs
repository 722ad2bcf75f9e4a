//! Deep-link pipeline errors.

use thiserror::Error;

/// Errors from the deep-link pipeline. A malformed link is logged and the
/// pipeline aborts for that event; it never propagates as a crash.
#[derive(Debug, Error)]
pub enum DeepLinkError {
    /// The input string is not a syntactically valid URL.
    #[error("malformed link {raw:?}: {source}")]
    Malformed {
        raw: String,
        #[source]
        source: url::ParseError,
    },
}
