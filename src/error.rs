use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Fatal failure classes for a harvest run.
///
/// Recoverable conditions (a flaky page, a detached element, a missing deep
/// link) are absorbed at their visit boundary and never surface here.
#[derive(Debug, Error)]
pub enum HarvestError {
    /// The run configuration is unusable
    #[error("{message}")]
    Config { message: String },

    /// No WebDriver endpoint accepted a session
    #[error("failed to establish a WebDriver session via {url}")]
    Connect { url: String },

    /// An output artifact could not be serialized
    #[error("failed to serialize {artifact}: {source}")]
    Serialize {
        artifact: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// An output artifact could not be written
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
