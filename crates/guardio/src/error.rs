//! Failure taxonomy for the guarded open and length operations.
//!
//! Both taxonomies are closed on purpose: callers match exhaustively, the
//! compiler flags the missed arm, and no failure can slip through as a
//! stringly-typed afterthought. Any native failure outside the enumerated
//! set maps to [`OpenError::Os`] with the originating error code attached —
//! a failure signal is never dropped and never converted to success.

use std::io;
use std::path::Path;

use thiserror::Error;

/// Result type for resource-opening operations.
pub type OpenResult<T> = std::result::Result<T, OpenError>;

/// Result type for size queries.
pub type SizeResult<T> = std::result::Result<T, SizeError>;

/// Classified failure of an open attempt.
///
/// The set of kinds is fixed; growing it is a taxonomy revision, not an
/// ad-hoc string match. The enum is deliberately not `#[non_exhaustive]`:
/// exhaustive matching at call sites is the whole point of the layer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OpenError {
    /// The locator does not resolve to an existing resource.
    #[error("no such resource: {path}")]
    NotFound {
        /// The locator that failed to resolve.
        path: String,
    },

    /// The locator resolves to a directory where a stream was required.
    #[error("'{path}' is a directory, not an openable stream")]
    IsDirectory {
        /// The locator that resolved to a directory.
        path: String,
    },

    /// A path component expected to be a directory is not one.
    #[error("a path component of '{path}' is not a directory")]
    NotDirectory {
        /// The locator with the offending component.
        path: String,
    },

    /// The caller lacks the rights the requested mode needs.
    #[error("permission denied: {path}")]
    PermissionDenied {
        /// The locator that was refused.
        path: String,
    },

    /// Exclusive create was requested but the resource already exists.
    #[error("resource already exists: {path}")]
    AlreadyExists {
        /// The locator that already exists.
        path: String,
    },

    /// The mode string, buffering value, or encoding/newline combination is
    /// malformed or mutually inconsistent.
    #[error("invalid open request: {reason}")]
    InvalidArgument {
        /// What was inconsistent about the request.
        reason: String,
    },

    /// A configuration value has the wrong shape for the requested mode,
    /// e.g. an encoding supplied together with binary framing.
    #[error("configuration does not fit the requested mode: {reason}")]
    TypeMismatch {
        /// Which configuration value did not fit.
        reason: String,
    },

    /// Any other operating-system-level failure.
    #[error("os-level failure: {message}")]
    Os {
        /// Originating system error code, when the platform reported one.
        code: Option<i32>,
        /// Human-readable description from the platform.
        message: String,
    },
}

impl OpenError {
    /// Classify a native failure signal into exactly one taxonomy member.
    ///
    /// Total over [`io::ErrorKind`]: anything outside the recognized set
    /// falls through to [`OpenError::Os`], never to success.
    pub(crate) fn classify(err: &io::Error, path: &Path) -> Self {
        let path = path.display().to_string();
        match err.kind() {
            io::ErrorKind::NotFound => Self::NotFound { path },
            io::ErrorKind::IsADirectory => Self::IsDirectory { path },
            io::ErrorKind::NotADirectory => Self::NotDirectory { path },
            io::ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            io::ErrorKind::AlreadyExists => Self::AlreadyExists { path },
            io::ErrorKind::InvalidInput | io::ErrorKind::InvalidData => Self::InvalidArgument {
                reason: err.to_string(),
            },
            _ => Self::Os {
                code: err.raw_os_error(),
                message: err.to_string(),
            },
        }
    }

    pub(crate) fn invalid_argument(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }

    pub(crate) fn type_mismatch(reason: impl Into<String>) -> Self {
        Self::TypeMismatch {
            reason: reason.into(),
        }
    }

    /// The originating system error code, for [`OpenError::Os`] failures
    /// that carried one.
    ///
    /// This is the sanctioned way to refine the residual kind without the
    /// taxonomy growing sub-kinds.
    pub fn os_code(&self) -> Option<i32> {
        match self {
            Self::Os { code, .. } => *code,
            _ => None,
        }
    }
}

/// Classified failure of a size query.
///
/// A value that exposes no size operation at all is a compile-time caller
/// error (it will not implement [`crate::Measurable`]), so overflow is the
/// single runtime case.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SizeError {
    /// The true length does not fit the platform's size integer.
    #[error("length {actual} does not fit into the {width}-bit platform size", width = usize::BITS)]
    Overflow {
        /// The true length as reported by the value.
        actual: u128,
    },
}
