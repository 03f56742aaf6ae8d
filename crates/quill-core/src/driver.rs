mod response;
pub use response::{Response, Rows};

pub mod operation;
pub use operation::Operation;

use crate::async_trait;

use std::fmt::Debug;

/// Opens physical connections to a database.
///
/// Quill never talks to sockets itself; a driver turns compiled statements
/// into whatever the backend's client library needs.
#[async_trait]
pub trait Driver: Debug + Send + Sync + 'static {
    /// Open a new physical connection.
    async fn connect(&self) -> crate::Result<Box<dyn Connection>>;
}

/// One physical connection.
#[async_trait]
pub trait Connection: Debug + Send + 'static {
    /// Execute a database operation
    async fn exec(&mut self, op: Operation) -> crate::Result<Response>;
}
