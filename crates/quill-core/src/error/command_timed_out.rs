use std::time::Duration;

use super::{Error, ErrorKind};

#[derive(Debug)]
pub(super) struct CommandTimedOut {
    duration: Duration,
}

impl Error {
    /// Creates an error reporting that a statement did not finish within the
    /// per-call command timeout.
    pub fn command_timed_out(duration: Duration) -> Error {
        ErrorKind::CommandTimedOut(CommandTimedOut { duration }).into()
    }

    /// Returns `true` if this error is a command timeout.
    pub fn is_command_timed_out(&self) -> bool {
        matches!(self.kind(), ErrorKind::CommandTimedOut(_))
    }
}

impl std::error::Error for CommandTimedOut {}

impl core::fmt::Display for CommandTimedOut {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "command timed out after {:?}", self.duration)
    }
}
