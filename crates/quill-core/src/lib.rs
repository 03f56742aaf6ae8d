#[macro_use]
mod macros;

pub mod driver;
pub use driver::{Connection, Driver};

mod error;
pub use error::{Error, IntoError};

pub mod schema;
pub use schema::{Model, ModelDef};

pub mod stmt;

/// A Result type alias that uses Quill's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

pub use async_trait::async_trait;
