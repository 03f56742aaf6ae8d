use super::Error;

/// An expression node appeared where the compiler cannot translate it.
///
/// Projections only accept column references, casts of column references
/// and constructor projections. Anything else fails here instead of
/// producing malformed SQL.
#[derive(Debug)]
pub(super) struct UnsupportedExpression {
    found: Box<str>,
}

impl std::error::Error for UnsupportedExpression {}

impl core::fmt::Display for UnsupportedExpression {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "unsupported expression: only column references/projections are supported; found {}",
            self.found
        )
    }
}

impl Error {
    /// Creates an unsupported expression error describing the offending node.
    pub fn unsupported_expression(found: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnsupportedExpression(
            UnsupportedExpression {
                found: found.into().into(),
            },
        ))
    }

    /// Returns `true` if this error is an unsupported expression error.
    pub fn is_unsupported_expression(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnsupportedExpression(_))
    }
}
