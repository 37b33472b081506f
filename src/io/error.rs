//! Error types for worksheet export and layout

use std::fmt;
use std::path::PathBuf;

/// Main error type for worksheet operations
///
/// Bad user input never ends up here; it is replaced by defaults during
/// sanitizing. These variants cover failures that cannot be corrected.
#[derive(Debug)]
pub enum WorksheetError {
    /// Failed to encode or save a worksheet image
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image encoding error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Parameter combination that cannot be honored
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Problem count does not fit the requested grid
    Layout {
        /// Requested grid rows
        rows: usize,
        /// Requested grid columns
        columns: usize,
        /// Number of cells supplied
        found: usize,
        /// Description from the array backend
        reason: String,
    },
}

impl fmt::Display for WorksheetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export worksheet image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::Layout {
                rows,
                columns,
                found,
                reason,
            } => {
                write!(
                    f,
                    "Cannot lay out {found} problems in a {rows}x{columns} grid: {reason}"
                )
            }
        }
    }
}

impl std::error::Error for WorksheetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for worksheet results
pub type Result<T> = std::result::Result<T, WorksheetError>;

impl From<image::ImageError> for WorksheetError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageExport {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for WorksheetError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> WorksheetError {
    WorksheetError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Attach a path and operation to an I/O failure
pub fn file_system_error(
    path: impl Into<PathBuf>,
    operation: &'static str,
) -> impl FnOnce(std::io::Error) -> WorksheetError {
    let path = path.into();
    move |source| WorksheetError::FileSystem {
        path,
        operation,
        source,
    }
}
