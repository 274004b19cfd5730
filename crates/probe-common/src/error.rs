//! Error types for gridprobe operations.

use thiserror::Error;

/// Result type alias using ProbeError.
pub type ProbeResult<T> = Result<T, ProbeError>;

/// Primary error type for probe operations.
///
/// Fatal variants carry enough context (file, byte offset, record index)
/// to reproduce the failure without re-running the whole query.
#[derive(Debug, Error)]
pub enum ProbeError {
    // === Cube index format errors (fatal to the query) ===
    #[error("malformed cube index {path} at byte {offset}: {reason}")]
    Format {
        path: String,
        offset: usize,
        reason: String,
    },

    #[error("invalid grid definition #{index} in {path}: {reason}")]
    InvalidGrid {
        path: String,
        index: usize,
        reason: String,
    },

    // === I/O errors (fatal to one input file) ===
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    // === Coded-string errors (recovered per-cell) ===
    #[error("undecodable coded string {raw:?}: {reason}")]
    Decode { raw: String, reason: String },

    // === Projection errors ===
    #[error("projection error: {0}")]
    Projection(String),

    // === Query construction errors ===
    #[error("invalid query: {0}")]
    InvalidQuery(String),

    #[error("no readable inputs remain")]
    NoInputs,
}

impl ProbeError {
    /// Create a Format error with byte-offset context.
    pub fn format(path: impl Into<String>, offset: usize, reason: impl Into<String>) -> Self {
        Self::Format {
            path: path.into(),
            offset,
            reason: reason.into(),
        }
    }

    /// Create an Io error tagged with the file it occurred on.
    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// True if this error should abort the whole query rather than just
    /// the input file that produced it.
    pub fn is_fatal_to_query(&self) -> bool {
        matches!(
            self,
            Self::Format { .. } | Self::InvalidGrid { .. } | Self::InvalidQuery(_) | Self::NoInputs
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_error_carries_context() {
        let err = ProbeError::format("nightly.ind", 1042, "truncated PDS block");
        let msg = err.to_string();
        assert!(msg.contains("nightly.ind"));
        assert!(msg.contains("1042"));
        assert!(err.is_fatal_to_query());
    }

    #[test]
    fn io_error_is_not_fatal_to_query() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = ProbeError::io("maxt.dat", io);
        assert!(!err.is_fatal_to_query());
        assert!(err.to_string().contains("maxt.dat"));
    }
}
