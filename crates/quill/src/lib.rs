mod db;
pub use db::{Builder, Db};

pub mod transaction;
pub use transaction::TransactionScope;

pub mod driver {
    pub use quill_core::driver::*;
}

pub mod schema {
    pub use quill_core::schema::*;
}

pub mod stmt {
    pub use quill_core::stmt::*;
    pub use quill_sql::stmt::{Assignment, Compiled, OrderBy, Statement};
}

pub use quill_sql::{naming, query, Flavor, NamingStrategy, Path, Probe, Query, Serializer, StorageTypes};

pub use quill_core::{async_trait, bail, err, Error, Model, ModelDef, Result};
