use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Everything that can abort a forcewind run.
///
/// Classification and value ordering never fail; only reading the generated
/// CSS and writing the results can.
#[derive(Debug, Error)]
pub enum ForcewindError {
    #[error("failed to read generated CSS from {origin}")]
    ReadInput {
        origin: String,
        #[source]
        source: io::Error,
    },

    /// LightningCSS rejected the generated stylesheet.
    #[error("failed to parse generated CSS: {0}")]
    Parse(String),

    #[error("failed to write {}", path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to serialize {}", path.display())]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, ForcewindError>;
