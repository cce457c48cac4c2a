use thiserror::Error;

/// Failure modes of one resolution call.
///
/// Per-record problems (unparsable coordinates, unparsable prices) are
/// never errors: the record is excluded or the fuel treated as
/// unavailable, and the call still succeeds. An empty match list is a
/// successful `Ok(vec![])`.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ResolveError {
    /// `true` for transport-class failures (could not reach the provider
    /// or it refused the request), `false` when the provider answered but
    /// with an unexpected body shape. Lets a UI pick between "retry" and
    /// "report a feed problem" without matching every variant.
    #[must_use]
    pub fn is_transport(&self) -> bool {
        match self {
            ResolveError::Http(_) | ResolveError::UnexpectedStatus { .. } => true,
            ResolveError::Deserialize { .. } => false,
        }
    }
}
