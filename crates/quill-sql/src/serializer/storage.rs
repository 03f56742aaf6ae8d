/// Type mapper defaults of a flavor.
///
/// Lengths are in characters. A string column whose length is at most
/// `max_varchar_length` becomes `VARCHAR(n)`; up to `max_medium_text_length`
/// it becomes the flavor's medium text type, and beyond that its long text
/// type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StorageTypes {
    /// Length used when a string field declares none
    pub default_string_length: u32,

    pub max_varchar_length: u32,

    pub max_medium_text_length: u32,

    /// Decimal precision used when a field declares none
    pub default_precision: u32,

    /// Decimal scale used when a field declares none
    pub default_scale: u32,

    /// Use the national character types where the flavor has them
    pub unicode: bool,
}

impl StorageTypes {
    pub const SQLITE: StorageTypes = StorageTypes {
        default_string_length: 255,
        max_varchar_length: 8000,
        max_medium_text_length: u32::MAX,
        default_precision: 18,
        default_scale: 12,
        unicode: false,
    };

    pub const POSTGRESQL: StorageTypes = StorageTypes {
        default_string_length: 255,
        // Largest length PostgreSQL accepts for VARCHAR(n)
        max_varchar_length: 10_485_760,
        max_medium_text_length: u32::MAX,
        default_precision: 38,
        default_scale: 6,
        unicode: false,
    };

    pub const MYSQL: StorageTypes = StorageTypes {
        default_string_length: 255,
        // 65,535 byte row limit with 4-byte utf8mb4 characters
        max_varchar_length: 16_383,
        max_medium_text_length: 16_777_215,
        default_precision: 38,
        default_scale: 6,
        unicode: false,
    };

    pub const SQL_SERVER: StorageTypes = StorageTypes {
        default_string_length: 255,
        max_varchar_length: 4000,
        max_medium_text_length: u32::MAX,
        default_precision: 38,
        default_scale: 6,
        unicode: true,
    };
}
