//! Application-wide error types.
//!
//! Library modules return [`Error`] via `thiserror`, while the CLI and
//! `main` use `anyhow` for convenient error propagation.
//!
//! # Design
//!
//! - [`Error`]: top-level error enum for the model, collection and writer
//! - [`RemoteError`]: transport-level failures of the remote music service,
//!   wrapped into [`Error::RemoteFetch`] by the export pipeline
//!
//! A track reference without an album id is NOT an error; the pipeline
//! handles it with a warning.

/// Application-wide result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level application error.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Invalid user configuration (output format, subject selection, token).
    ///
    /// Always raised before any network or file I/O.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A serialized record lacks required structure.
    #[error("Malformed {kind} record: {message}")]
    MalformedRecord { kind: &'static str, message: String },

    /// `MustOpt::must` called on an absent value.
    #[error("Accessed empty optional value of type {type_name}")]
    EmptyValueAccess { type_name: &'static str },

    /// A remote call failed; fatal for the current export run.
    #[error("Remote fetch failed while {operation} ({items} items): {source}")]
    RemoteFetch {
        operation: String,
        items: usize,
        #[source]
        source: RemoteError,
    },

    /// File I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding/decoding error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML encoding/decoding error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Generic error with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<Error>,
    },
}

/// Errors raised by the remote music service client.
#[derive(Debug, Clone, thiserror::Error)]
pub enum RemoteError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("API request failed: {0}")]
    Api(String),

    #[error("Unauthorized - check the access token")]
    Unauthorized,

    #[error("Failed to parse response: {0}")]
    Parse(String),

    #[error("Failed to process cover image: {0}")]
    Image(String),

    #[error("Client is not initialized")]
    NotInitialized,
}

impl Error {
    /// Create a config error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a malformed record error.
    pub fn malformed(kind: &'static str, message: impl Into<String>) -> Self {
        Self::MalformedRecord {
            kind,
            message: message.into(),
        }
    }

    /// Wrap a remote failure with the operation and batch size it belongs to.
    pub fn remote(operation: impl Into<String>, items: usize, source: RemoteError) -> Self {
        Self::RemoteFetch {
            operation: operation.into(),
            items,
            source,
        }
    }

    /// Add context to an error.
    pub fn context(self, ctx: impl Into<String>) -> Self {
        Self::WithContext {
            context: ctx.into(),
            source: Box::new(self),
        }
    }
}

/// Extension trait for adding context to Results.
pub trait ResultExt<T> {
    /// Add context to an error result.
    fn with_context(self, ctx: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn with_context(self, ctx: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.context(ctx))
    }
}

impl<T> ResultExt<T> for std::result::Result<T, std::io::Error> {
    fn with_context(self, ctx: impl Into<String>) -> Result<T> {
        self.map_err(|e| Error::Io(e).context(ctx))
    }
}
