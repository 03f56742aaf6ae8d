use super::{Flavor, Serializer};

use quill_core::{
    schema::FieldDef,
    stmt::{DbType, Type},
};

impl Serializer {
    /// Column type text for `field`.
    ///
    /// A per-field override wins, then a type registered with
    /// [`register_column_type`](Serializer::register_column_type), then the
    /// flavor's mapping.
    pub fn column_type(&self, field: &FieldDef) -> String {
        if let Some(column_type) = &field.column_type {
            return column_type.clone();
        }

        if let Some(column_type) = self.column_types.get(&field.ty) {
            return column_type.clone();
        }

        if field.auto_increment && self.flavor == Flavor::Postgresql {
            match field.ty {
                Type::I8 | Type::I16 | Type::U8 | Type::I32 => return "SERIAL".to_string(),
                Type::U16 | Type::I64 | Type::U32 | Type::U64 => {
                    return "BIGSERIAL".to_string()
                }
                _ => {}
            }
        }

        self.map_type(field.ty, field.length, field.scale)
    }

    /// Parameter binding kind for values of a column of type `ty`.
    pub fn db_type(&self, ty: Type) -> DbType {
        DbType::from(ty)
    }

    fn map_type(&self, ty: Type, length: Option<u32>, scale: Option<u32>) -> String {
        use Flavor::*;

        let storage = &self.storage;

        match ty {
            Type::String => self.string_type("VARCHAR", "NVARCHAR", length),
            Type::Char => self.string_type("CHAR", "NCHAR", length),
            Type::Xml => match self.flavor {
                Postgresql | SqlServer => "XML".to_string(),
                Sqlite | Mysql => self.string_type("VARCHAR", "NVARCHAR", length),
            },
            Type::Bytes | Type::Object => match self.flavor {
                Sqlite => "BLOB",
                Postgresql => "BYTEA",
                Mysql => "LONGBLOB",
                SqlServer => "VARBINARY(MAX)",
            }
            .to_string(),
            Type::Decimal | Type::Currency => format!(
                "DECIMAL({},{})",
                length.unwrap_or(storage.default_precision),
                scale.unwrap_or(storage.default_scale)
            ),
            ty => self.fixed_type(ty).to_string(),
        }
    }

    fn fixed_type(&self, ty: Type) -> &'static str {
        use Flavor::*;

        match (self.flavor, ty) {
            // SQLite has a single integer storage class; AUTOINCREMENT
            // requires the column to be declared INTEGER.
            (Sqlite, ty) if ty.is_integer() => "INTEGER",
            (Sqlite, Type::Bool) => "INTEGER",
            (Sqlite, Type::F32 | Type::F64) => "REAL",
            (Sqlite, Type::Uuid) => "CHAR(36)",
            (Sqlite, Type::Date) => "DATE",
            (Sqlite, Type::Time) => "TIME",
            (Sqlite, Type::DateTime | Type::DateTimeOffset) => "DATETIME",
            (Sqlite, Type::Duration) => "INTEGER",

            (Postgresql, Type::Bool) => "BOOLEAN",
            (Postgresql, Type::I8 | Type::U8 | Type::I16) => "SMALLINT",
            (Postgresql, Type::U16 | Type::I32) => "INTEGER",
            (Postgresql, Type::U32 | Type::I64) => "BIGINT",
            (Postgresql, Type::U64) => "NUMERIC(20,0)",
            (Postgresql, Type::F32) => "REAL",
            (Postgresql, Type::F64) => "DOUBLE PRECISION",
            (Postgresql, Type::Uuid) => "UUID",
            (Postgresql, Type::Date) => "DATE",
            (Postgresql, Type::Time) => "TIME",
            (Postgresql, Type::DateTime) => "TIMESTAMP",
            (Postgresql, Type::DateTimeOffset) => "TIMESTAMPTZ",
            (Postgresql, Type::Duration) => "INTERVAL",

            (Mysql, Type::Bool) => "TINYINT(1)",
            (Mysql, Type::I8) => "TINYINT",
            (Mysql, Type::U8) => "TINYINT UNSIGNED",
            (Mysql, Type::I16) => "SMALLINT",
            (Mysql, Type::U16) => "SMALLINT UNSIGNED",
            (Mysql, Type::I32) => "INT",
            (Mysql, Type::U32) => "INT UNSIGNED",
            (Mysql, Type::I64) => "BIGINT",
            (Mysql, Type::U64) => "BIGINT UNSIGNED",
            (Mysql, Type::F32) => "FLOAT",
            (Mysql, Type::F64) => "DOUBLE",
            (Mysql, Type::Uuid) => "CHAR(36)",
            (Mysql, Type::Date) => "DATE",
            (Mysql, Type::Time) => "TIME",
            (Mysql, Type::DateTime | Type::DateTimeOffset) => "DATETIME",
            (Mysql, Type::Duration) => "BIGINT",

            (SqlServer, Type::Bool) => "BIT",
            (SqlServer, Type::I8 | Type::I16) => "SMALLINT",
            (SqlServer, Type::U8) => "TINYINT",
            (SqlServer, Type::U16 | Type::I32) => "INT",
            (SqlServer, Type::U32 | Type::I64) => "BIGINT",
            (SqlServer, Type::U64) => "DECIMAL(20,0)",
            (SqlServer, Type::F32) => "REAL",
            (SqlServer, Type::F64) => "FLOAT",
            (SqlServer, Type::Uuid) => "UNIQUEIDENTIFIER",
            (SqlServer, Type::Date) => "DATE",
            (SqlServer, Type::Time) => "TIME",
            (SqlServer, Type::DateTime) => "DATETIME2",
            (SqlServer, Type::DateTimeOffset) => "DATETIMEOFFSET",
            (SqlServer, Type::Duration) => "BIGINT",

            // Variable length types are handled by `map_type`
            (
                _,
                Type::String
                | Type::Char
                | Type::Xml
                | Type::Bytes
                | Type::Object
                | Type::Decimal
                | Type::Currency,
            ) => "TEXT",

            // Integer types on SQLite are matched by the guard above
            (Sqlite, _) => "INTEGER",
        }
    }

    fn string_type(&self, ansi: &str, national: &str, length: Option<u32>) -> String {
        let storage = &self.storage;
        let length = length.unwrap_or(storage.default_string_length);

        let name = if storage.unicode && self.flavor == Flavor::SqlServer {
            national
        } else {
            ansi
        };

        if length <= storage.max_varchar_length {
            format!("{name}({length})")
        } else if length <= storage.max_medium_text_length {
            self.medium_text_type().to_string()
        } else {
            self.long_text_type().to_string()
        }
    }

    fn medium_text_type(&self) -> &'static str {
        match self.flavor {
            Flavor::Mysql => "MEDIUMTEXT",
            Flavor::SqlServer if self.storage.unicode => "NVARCHAR(MAX)",
            Flavor::SqlServer => "VARCHAR(MAX)",
            Flavor::Sqlite | Flavor::Postgresql => "TEXT",
        }
    }

    fn long_text_type(&self) -> &'static str {
        match self.flavor {
            Flavor::Mysql => "LONGTEXT",
            _ => self.medium_text_type(),
        }
    }
}
