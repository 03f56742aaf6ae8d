#[macro_use]
mod fmt;
use fmt::ToSql;

mod delim;
use delim::{Comma, Delimited, Period};

mod flavor;
pub use flavor::Flavor;

mod ident;
use ident::{ColumnName, ColumnRef, Ident, TableName};

mod params;
pub use params::{Params, Placeholder};

mod probe;
pub use probe::Probe;

mod storage;
pub use storage::StorageTypes;

// Fragment serializers
mod alter;
mod column_def;
mod create_index;
mod create_table;
mod delete;
mod drop_table;
mod expr;
mod insert;
mod projection;
mod select;
mod transaction;
mod ty;
mod update;
mod value;

use crate::{naming::NamingStrategy, stmt::Compiled, Statement};

use indexmap::IndexMap;
use quill_core::{
    schema::{FieldDef, ModelDef},
    stmt::{Type, TypedValue},
    Result,
};
use std::{fmt::Debug, sync::Arc};

/// Compiles statement descriptors into SQL text for one flavor.
///
/// A serializer holds no mutable state; compiling the same statement twice
/// yields the same SQL and the same parameters.
#[derive(Debug, Clone)]
pub struct Serializer {
    /// The database flavor handles the differences between SQL dialects and
    /// supported features.
    flavor: Flavor,

    /// Maps logical table and column names to SQL names
    naming: Arc<dyn NamingStrategy>,

    /// Type mapper defaults
    storage: StorageTypes,

    /// Appended after `PRIMARY KEY` for a single auto-increment key
    auto_increment_keyword: String,

    /// Template for a column default; `{}` is replaced with the value
    default_value_format: String,

    /// Type mapper overrides
    column_types: IndexMap<Type, String>,
}

struct Formatter<'a, P> {
    /// Handle to the serializer
    serializer: &'a Serializer,

    /// Where to write the serialized SQL
    dst: &'a mut String,

    /// Where to store parameters
    params: &'a mut P,

    /// Qualify column references with their table name
    prefix_table: bool,

    /// Aggregate functions are only valid in projections and HAVING
    allow_aggregates: bool,
}

impl Serializer {
    /// Compile a statement to SQL text and its ordered parameter map.
    pub fn serialize(&self, stmt: &Statement) -> Result<Compiled> {
        let mut sql = String::new();
        let mut params = Vec::<TypedValue>::new();

        let mut fmt = Formatter {
            serializer: self,
            dst: &mut sql,
            params: &mut params,
            prefix_table: false,
            allow_aggregates: false,
        };

        stmt.to_sql(&mut fmt)?;

        sql.push(';');

        let params = params
            .into_iter()
            .enumerate()
            .map(|(i, value)| (self.param_name(i), value))
            .collect();

        Ok(Compiled {
            sql,
            params,
            intent: stmt.intent(),
        })
    }

    /// Replaces the naming strategy. Identity by default.
    pub fn naming_strategy(mut self, naming: impl NamingStrategy + 'static) -> Self {
        self.naming = Arc::new(naming);
        self
    }

    pub fn auto_increment_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.auto_increment_keyword = keyword.into();
        self
    }

    /// Sets the column default template, e.g. `" DEFAULT ({})"`.
    pub fn default_value_format(mut self, format: impl Into<String>) -> Self {
        self.default_value_format = format.into();
        self
    }

    pub fn storage_types(mut self, storage: StorageTypes) -> Self {
        self.storage = storage;
        self
    }

    /// Maps every column of logical type `ty` to `sql`, bypassing the
    /// flavor's default mapping.
    pub fn register_column_type(mut self, ty: Type, sql: impl Into<String>) -> Self {
        self.column_types.insert(ty, sql.into());
        self
    }

    pub fn storage(&self) -> &StorageTypes {
        &self.storage
    }

    fn field<'a>(&self, model: &'a ModelDef, name: &str) -> Result<&'a FieldDef> {
        model.field(name).ok_or_else(|| {
            quill_core::Error::invalid_statement(format!(
                "`{}` has no field named `{name}`",
                model.name
            ))
        })
    }
}

impl ToSql for &Statement {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        match self {
            Statement::AddColumn(stmt) => stmt.to_sql(f),
            Statement::AddForeignKey(stmt) => stmt.to_sql(f),
            Statement::AlterColumn(stmt) => stmt.to_sql(f),
            Statement::ChangeColumn(stmt) => stmt.to_sql(f),
            Statement::Count(stmt) => stmt.to_sql(f),
            Statement::CreateIndex(stmt) => stmt.to_sql(f),
            Statement::CreateTable(stmt) => stmt.to_sql(f),
            Statement::Delete(stmt) => stmt.to_sql(f),
            Statement::DropTable(stmt) => stmt.to_sql(f),
            Statement::Insert(stmt) => stmt.to_sql(f),
            Statement::Select(stmt) => stmt.to_sql(f),
            Statement::Update(stmt) => stmt.to_sql(f),
        }
    }
}
