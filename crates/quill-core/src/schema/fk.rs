use super::{FieldDef, ModelDef, ModelRef};

use std::fmt;

/// Foreign key from one column to the primary key of another model.
#[derive(Debug, Clone, PartialEq)]
pub struct ForeignKey {
    /// The referenced model.
    pub references: ModelRef,

    pub on_delete: Option<ReferentialAction>,

    pub on_update: Option<ReferentialAction>,

    /// Explicit constraint name. When absent, one is derived from both
    /// tables and the column.
    pub name: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferentialAction {
    Cascade,
    SetNull,
    SetDefault,
    Restrict,
    NoAction,
}

impl ForeignKey {
    pub fn new(references: ModelRef) -> ForeignKey {
        ForeignKey {
            references,
            on_delete: None,
            on_update: None,
            name: None,
        }
    }

    /// The constraint name, `FK_{table}_{referenced table}_{column}` unless
    /// an explicit one was given. Uses effective (aliased) names.
    pub fn constraint_name(&self, table: &ModelDef, column: &FieldDef) -> String {
        if let Some(name) = &self.name {
            return name.clone();
        }

        let referenced = self.references.resolve();
        format!(
            "FK_{}_{}_{}",
            table.effective_name(),
            referenced.effective_name(),
            column.effective_name()
        )
    }
}

impl ReferentialAction {
    pub fn as_sql(self) -> &'static str {
        match self {
            ReferentialAction::Cascade => "CASCADE",
            ReferentialAction::SetNull => "SET NULL",
            ReferentialAction::SetDefault => "SET DEFAULT",
            ReferentialAction::Restrict => "RESTRICT",
            ReferentialAction::NoAction => "NO ACTION",
        }
    }

    pub fn is_restrict(self) -> bool {
        matches!(self, ReferentialAction::Restrict)
    }
}

impl fmt::Display for ReferentialAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_sql())
    }
}
