use super::{Serializer, StorageTypes};

use std::fmt;

/// SQL dialect targeted by a [`Serializer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flavor {
    Sqlite,
    Postgresql,
    Mysql,
    SqlServer,
}

impl Flavor {
    /// Character wrapped around identifiers.
    pub fn quote_char(self) -> char {
        match self {
            Flavor::Mysql => '`',
            _ => '"',
        }
    }

    /// Prefix of named parameter placeholders.
    pub fn param_prefix(self) -> &'static str {
        match self {
            Flavor::Postgresql => ":",
            _ => "@",
        }
    }

    pub fn auto_increment_keyword(self) -> &'static str {
        match self {
            Flavor::Sqlite => "AUTOINCREMENT",
            // Identity columns are declared through the SERIAL types instead.
            Flavor::Postgresql => "",
            Flavor::Mysql => "AUTO_INCREMENT",
            Flavor::SqlServer => "IDENTITY(1,1)",
        }
    }

    pub fn storage_types(self) -> StorageTypes {
        match self {
            Flavor::Sqlite => StorageTypes::SQLITE,
            Flavor::Postgresql => StorageTypes::POSTGRESQL,
            Flavor::Mysql => StorageTypes::MYSQL,
            Flavor::SqlServer => StorageTypes::SQL_SERVER,
        }
    }
}

impl fmt::Display for Flavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Flavor::Sqlite => "sqlite",
            Flavor::Postgresql => "postgresql",
            Flavor::Mysql => "mysql",
            Flavor::SqlServer => "sqlserver",
        })
    }
}

impl Serializer {
    pub fn new(flavor: Flavor) -> Serializer {
        Serializer {
            flavor,
            naming: std::sync::Arc::new(crate::naming::Identity),
            storage: flavor.storage_types(),
            auto_increment_keyword: flavor.auto_increment_keyword().to_string(),
            default_value_format: " DEFAULT {}".to_string(),
            column_types: Default::default(),
        }
    }

    pub fn sqlite() -> Serializer {
        Serializer::new(Flavor::Sqlite)
    }

    pub fn postgresql() -> Serializer {
        Serializer::new(Flavor::Postgresql)
    }

    pub fn mysql() -> Serializer {
        Serializer::new(Flavor::Mysql)
    }

    pub fn sql_server() -> Serializer {
        Serializer::new(Flavor::SqlServer)
    }

    pub fn flavor(&self) -> Flavor {
        self.flavor
    }

    pub fn is_sqlite(&self) -> bool {
        self.flavor == Flavor::Sqlite
    }

    pub fn is_postgresql(&self) -> bool {
        self.flavor == Flavor::Postgresql
    }

    pub fn is_mysql(&self) -> bool {
        self.flavor == Flavor::Mysql
    }

    pub fn is_sql_server(&self) -> bool {
        self.flavor == Flavor::SqlServer
    }

    /// Name of the `index`-th parameter, e.g. `@p_0`.
    pub fn param_name(&self, index: usize) -> String {
        format!("{}p_{}", self.flavor.param_prefix(), index)
    }
}
