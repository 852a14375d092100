use std::path::PathBuf;
use thiserror::Error;

/// All errors produced by the failure chart pipeline.
#[derive(Error, Debug)]
pub enum ChartError {
    /// The input log file does not exist.
    #[error("Log file {0} not found")]
    SourceNotFound(PathBuf),

    /// The input log file exists but could not be read from disk.
    #[error("Failed to read log file {path}: {source}")]
    SourceRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input log is present but structurally invalid: not a JSON array
    /// of run entries, or a job record missing a required field.
    #[error("Malformed log data in {path}: {detail}")]
    MalformedSource { path: PathBuf, detail: String },

    /// The chart image could not be produced.
    #[error("Failed to render chart to {path}: {detail}")]
    Render { path: PathBuf, detail: String },
}

/// Convenience alias used throughout the chart crates.
pub type Result<T> = std::result::Result<T, ChartError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_source_not_found() {
        let err = ChartError::SourceNotFound(PathBuf::from("/some/py.log"));
        assert_eq!(err.to_string(), "Log file /some/py.log not found");
    }

    #[test]
    fn test_error_display_source_read() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = ChartError::SourceRead {
            path: PathBuf::from("/some/py.log"),
            source: io_err,
        };
        let msg = err.to_string();
        assert!(msg.contains("Failed to read log file"));
        assert!(msg.contains("/some/py.log"));
        assert!(msg.contains("denied"));
    }

    #[test]
    fn test_error_display_malformed_source() {
        let err = ChartError::MalformedSource {
            path: PathBuf::from("results.json"),
            detail: "missing field `failures`".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("Malformed log data in results.json"));
        assert!(msg.contains("missing field `failures`"));
    }

    #[test]
    fn test_error_display_render() {
        let err = ChartError::Render {
            path: PathBuf::from("out.png"),
            detail: "backend failure".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("Failed to render chart to out.png"));
        assert!(msg.contains("backend failure"));
    }

    #[test]
    fn test_source_error_chain() {
        use std::error::Error as _;
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = ChartError::SourceRead {
            path: PathBuf::from("x.json"),
            source: io_err,
        };
        assert!(err.source().is_some());
    }
}
