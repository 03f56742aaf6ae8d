use super::Error;

/// The transaction coordinator was used in a way its state does not allow,
/// e.g. completing a scope whose transaction was already rolled back.
#[derive(Debug)]
pub(super) struct TransactionState {
    message: Box<str>,
}

impl std::error::Error for TransactionState {}

impl core::fmt::Display for TransactionState {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "transaction state: {}", self.message)
    }
}

impl Error {
    pub fn transaction_state(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::TransactionState(TransactionState {
            message: message.into().into(),
        }))
    }

    pub fn is_transaction_state(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::TransactionState(_))
    }
}
