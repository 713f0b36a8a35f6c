// Error taxonomy for the pruning pipeline.
//
// Mirrors the kinds spec'd in the original design: malformed CSV fields,
// rejected domains, refused trie insertions, and I/O failures. Allocation
// failure has no catchable counterpart here; Rust's global allocator aborts
// the process on OOM, which already satisfies "fatal to the process".

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum PruneError {
    #[error("malformed input on line {line}: {reason}")]
    MalformedInput { line: u64, reason: String },

    #[error("domain rejected: {reason}")]
    DomainRejected { reason: String },

    #[error("trie insertion refused: {reason}")]
    TrieRejection { reason: String },

    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration: {reason}")]
    InvalidConfig { reason: String },
}

impl PruneError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PruneError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type PruneResult<T> = Result<T, PruneError>;
