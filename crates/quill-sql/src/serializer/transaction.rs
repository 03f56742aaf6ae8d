use super::{Flavor, Serializer};

use quill_core::driver::operation::Transaction;

impl Serializer {
    /// SQL text for a transaction control operation.
    pub fn serialize_transaction(&self, op: &Transaction) -> String {
        match (op, self.flavor) {
            (Transaction::Start, Flavor::Mysql) => "START TRANSACTION",
            (Transaction::Start, Flavor::SqlServer) => "BEGIN TRANSACTION",
            (Transaction::Start, _) => "BEGIN",
            (Transaction::Commit, Flavor::SqlServer) => "COMMIT TRANSACTION",
            (Transaction::Commit, _) => "COMMIT",
            (Transaction::Rollback, Flavor::SqlServer) => "ROLLBACK TRANSACTION",
            (Transaction::Rollback, _) => "ROLLBACK",
        }
        .to_string()
    }
}
