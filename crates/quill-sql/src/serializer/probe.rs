use super::{Flavor, Serializer};

use crate::stmt::Compiled;

use indexmap::IndexMap;
use quill_core::{
    schema::ModelDef,
    stmt::{DbType, Intent, TypedValue, Value},
    Error, Result,
};

/// Answer to an existence check.
///
/// Some flavors can answer without touching the database; the others
/// return a `COUNT(*)` query to run as a scalar.
#[derive(Debug, Clone, PartialEq)]
pub enum Probe {
    Query(Compiled),
    Constant(bool),
}

impl Probe {
    pub fn is_constant(&self) -> bool {
        matches!(self, Probe::Constant(_))
    }
}

impl Serializer {
    /// Checks whether the table backing `model` exists.
    pub fn table_exists(&self, model: &ModelDef) -> Probe {
        let table = self.table_name(model);
        let schema = model.schema.as_deref();

        let sql = match self.flavor {
            Flavor::Sqlite => {
                "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = {0}"
            }
            Flavor::Postgresql => match schema {
                Some(_) => {
                    "SELECT COUNT(*) FROM information_schema.tables WHERE table_name = {0} AND table_schema = {1}"
                }
                None => {
                    "SELECT COUNT(*) FROM information_schema.tables WHERE table_name = {0} AND table_schema = current_schema()"
                }
            },
            Flavor::Mysql => match schema {
                Some(_) => {
                    "SELECT COUNT(*) FROM information_schema.tables WHERE table_name = {0} AND table_schema = {1}"
                }
                None => {
                    "SELECT COUNT(*) FROM information_schema.tables WHERE table_name = {0} AND table_schema = DATABASE()"
                }
            },
            Flavor::SqlServer => match schema {
                Some(_) => {
                    "SELECT COUNT(*) FROM INFORMATION_SCHEMA.TABLES WHERE TABLE_NAME = {0} AND TABLE_SCHEMA = {1}"
                }
                None => "SELECT COUNT(*) FROM INFORMATION_SCHEMA.TABLES WHERE TABLE_NAME = {0}",
            },
        };

        // SQLite has no schemas
        let schema = schema.filter(|_| self.flavor != Flavor::Sqlite);

        Probe::Query(self.catalog_query(sql, Some(table.as_str()).into_iter().chain(schema)))
    }

    /// Checks whether a sequence exists. Only PostgreSQL has sequences
    /// separate from identity columns; every other flavor reports `true`.
    pub fn sequence_exists(&self, name: &str, schema: Option<&str>) -> Probe {
        if self.flavor != Flavor::Postgresql {
            return Probe::Constant(true);
        }

        let sql = match schema {
            Some(_) => {
                "SELECT COUNT(*) FROM information_schema.sequences WHERE sequence_name = {0} AND sequence_schema = {1}"
            }
            None => "SELECT COUNT(*) FROM information_schema.sequences WHERE sequence_name = {0}",
        };

        Probe::Query(self.catalog_query(sql, Some(name).into_iter().chain(schema)))
    }

    /// Query returning the identity generated by the last insert on the
    /// current connection.
    pub fn last_insert_id(&self) -> Result<Compiled> {
        let sql = match self.flavor {
            Flavor::Sqlite => "SELECT last_insert_rowid();",
            Flavor::Mysql => "SELECT LAST_INSERT_ID();",
            Flavor::SqlServer => "SELECT SCOPE_IDENTITY();",
            Flavor::Postgresql => {
                return Err(Error::unsupported_feature(
                    "PostgreSQL returns generated keys with RETURNING; there is no last-insert-id query",
                ))
            }
        };

        Ok(Compiled::raw(sql, Intent::Scalar))
    }

    /// Fills `{i}` in `template` with placeholders bound to `args`.
    fn catalog_query<'a>(&self, template: &str, args: impl Iterator<Item = &'a str>) -> Compiled {
        let mut sql = template.to_string();
        let mut params = IndexMap::new();

        for (i, arg) in args.enumerate() {
            let name = self.param_name(i);
            sql = sql.replace(&format!("{{{i}}}"), &name);
            params.insert(name, TypedValue::new(Value::from(arg), Some(DbType::String)));
        }

        sql.push(';');

        Compiled {
            sql,
            params,
            intent: Intent::Scalar,
        }
    }
}
