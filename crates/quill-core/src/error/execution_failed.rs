use super::Error;

/// A statement failed while being executed.
///
/// The execution facility wraps every driver failure in this kind, with the
/// driver error as its cause, so callers match on a single kind regardless
/// of backend.
#[derive(Debug)]
pub(super) struct ExecutionFailed {
    statement: &'static str,
    table: Box<str>,
}

impl std::error::Error for ExecutionFailed {}

impl core::fmt::Display for ExecutionFailed {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "failed to execute {} on `{}`",
            self.statement, self.table
        )
    }
}

impl Error {
    /// Creates an execution failure for the given statement kind and table.
    ///
    /// Use with [`Error::context`] so the driver error becomes the cause.
    pub fn execution_failed(statement: &'static str, table: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::ExecutionFailed(ExecutionFailed {
            statement,
            table: table.into().into(),
        }))
    }

    /// Returns `true` if this error is an execution failure.
    pub fn is_execution_failed(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::ExecutionFailed(_))
    }
}
