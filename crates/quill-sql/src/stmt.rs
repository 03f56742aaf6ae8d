mod alter;
pub use alter::{AddColumn, AddForeignKey, AlterColumn, ChangeColumn};

mod compiled;
pub use compiled::Compiled;

mod count;
pub use count::Count;

mod create_index;
pub use create_index::{CreateIndex, IndexColumn};

mod create_table;
pub use create_table::CreateTable;

mod delete;
pub use delete::Delete;

mod drop_table;
pub use drop_table::DropTable;

mod insert;
pub use insert::Insert;

mod select;
pub use select::{OrderBy, Select};

mod update;
pub use update::{Assignment, Update};

use quill_core::{schema::ModelDef, stmt::Intent};

/// A fully specified SQL operation against one mapped table.
#[derive(Debug, Clone)]
pub enum Statement {
    AddColumn(AddColumn),
    AddForeignKey(AddForeignKey),
    AlterColumn(AlterColumn),
    ChangeColumn(ChangeColumn),
    Count(Count),
    CreateIndex(CreateIndex),
    CreateTable(CreateTable),
    Delete(Delete),
    DropTable(DropTable),
    Insert(Insert),
    Select(Select),
    Update(Update),
}

impl Statement {
    /// The table the statement targets.
    pub fn model(&self) -> &ModelDef {
        match self {
            Statement::AddColumn(stmt) => &stmt.model,
            Statement::AddForeignKey(stmt) => &stmt.model,
            Statement::AlterColumn(stmt) => &stmt.model,
            Statement::ChangeColumn(stmt) => &stmt.model,
            Statement::Count(stmt) => &stmt.model,
            Statement::CreateIndex(stmt) => &stmt.model,
            Statement::CreateTable(stmt) => &stmt.model,
            Statement::Delete(stmt) => &stmt.model,
            Statement::DropTable(stmt) => &stmt.model,
            Statement::Insert(stmt) => &stmt.model,
            Statement::Select(stmt) => &stmt.model,
            Statement::Update(stmt) => &stmt.model,
        }
    }

    /// Leading SQL keyword(s), used when reporting failures.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Statement::AddColumn(_)
            | Statement::AddForeignKey(_)
            | Statement::AlterColumn(_)
            | Statement::ChangeColumn(_) => "ALTER TABLE",
            Statement::Count(_) | Statement::Select(_) => "SELECT",
            Statement::CreateIndex(_) => "CREATE INDEX",
            Statement::CreateTable(_) => "CREATE TABLE",
            Statement::Delete(_) => "DELETE",
            Statement::DropTable(_) => "DROP TABLE",
            Statement::Insert(_) => "INSERT",
            Statement::Update(_) => "UPDATE",
        }
    }

    /// What the execution facility should expect back.
    pub fn intent(&self) -> Intent {
        match self {
            Statement::Count(_) => Intent::Scalar,
            Statement::Insert(insert) if insert.fetch_identity => Intent::Scalar,
            Statement::Select(_) => Intent::Query,
            _ => Intent::Execute,
        }
    }

    pub fn is_insert(&self) -> bool {
        matches!(self, Statement::Insert(_))
    }

    pub fn is_update(&self) -> bool {
        matches!(self, Statement::Update(_))
    }
}
