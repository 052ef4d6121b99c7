/// Comprehensive error types for YApi Forge
///
/// This module provides typed error handling throughout the application,
/// eliminating the use of generic String errors and unwrap() calls.

use thiserror::Error;

/// Main error type for YApi Forge operations
#[derive(Error, Debug)]
pub enum ForgeError {
    // ========================================
    // Configuration Errors
    // ========================================

    #[error("App data directory is unavailable")]
    AppDataDirUnavailable,

    #[error("No project has been registered yet")]
    NoKnownProject,

    #[error("Project config at '{path}' has no base_url - initialize the config first")]
    ConfigNotInitialized {
        path: String,
    },

    #[error("Failed to read config file '{path}': {source}")]
    ConfigRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write config file '{path}': {source}")]
    ConfigWrite {
        path: String,
        #[source]
        source: std::io::Error,
    },

    // ========================================
    // Upstream (YApi server) Errors
    // ========================================

    #[error("Upstream request to '{url}' failed: {source}")]
    UpstreamRequest {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Upstream rejected the request (errcode {errcode}): {errmsg}")]
    UpstreamRejected {
        errcode: i64,
        errmsg: String,
    },

    #[error("Invalid proxy address '{0}'")]
    InvalidProxy(String),

    // ========================================
    // Codegen Errors
    // ========================================

    #[error("Interface '{title}' has no response body")]
    EmptyResponseBody {
        title: String,
    },

    // ========================================
    // Queue Errors
    // ========================================

    #[error("A batch task is already running")]
    BatchRunning,

    // ========================================
    // IO Errors
    // ========================================

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    // ========================================
    // Serialization Errors
    // ========================================

    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),

    // ========================================
    // Generic Errors
    // ========================================

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for YApi Forge operations
pub type Result<T> = std::result::Result<T, ForgeError>;

// ========================================
// Unit Tests
// ========================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error as IoError, ErrorKind};

    #[test]
    fn test_config_read_error() {
        let io_err = IoError::new(ErrorKind::NotFound, "missing");
        let err = ForgeError::ConfigRead {
            path: "/work/yapi.json".to_string(),
            source: io_err,
        };

        assert!(err.to_string().contains("/work/yapi.json"));
        assert!(err.to_string().contains("missing"));
    }

    #[test]
    fn test_upstream_rejected_error() {
        let err = ForgeError::UpstreamRejected {
            errcode: 40011,
            errmsg: "token invalid".to_string(),
        };

        assert!(err.to_string().contains("40011"));
        assert!(err.to_string().contains("token invalid"));
    }

    #[test]
    fn test_config_not_initialized_error() {
        let err = ForgeError::ConfigNotInitialized {
            path: "/work".to_string(),
        };

        assert!(err.to_string().contains("base_url"));
    }

    #[test]
    fn test_error_source_chain() {
        let io_err = IoError::new(ErrorKind::PermissionDenied, "denied");
        let err = ForgeError::ConfigWrite {
            path: "/work/yapi.json".to_string(),
            source: io_err,
        };

        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_result_type_usage() {
        fn example_function() -> Result<String> {
            Err(ForgeError::NoKnownProject)
        }

        match example_function() {
            Ok(_) => panic!("Should have returned error"),
            Err(e) => assert!(matches!(e, ForgeError::NoKnownProject)),
        }
    }
}
