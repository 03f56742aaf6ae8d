pub mod naming;
pub use naming::NamingStrategy;

pub mod query;
pub use query::{Path, Query};

pub mod serializer;
pub use serializer::{Flavor, Probe, Serializer, StorageTypes};

pub mod stmt;
pub use stmt::{Compiled, Statement};
