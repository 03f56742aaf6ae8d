use super::{Formatter, Params, Period, Serializer, ToSql};

use quill_core::{
    schema::{FieldDef, ModelDef},
    Result,
};

/// A quoted identifier, written as-is apart from escaping.
pub(super) struct Ident<S>(pub(super) S);

/// A table name after the naming strategy, qualified with its schema.
pub(super) struct TableName<'a>(pub(super) &'a ModelDef);

/// A column name after the naming strategy.
pub(super) struct ColumnName<'a>(pub(super) &'a FieldDef);

/// A column name qualified with its table when the formatter asks for it.
pub(super) struct ColumnRef<'a>(pub(super) &'a ModelDef, pub(super) &'a FieldDef);

impl<S: AsRef<str>> ToSql for Ident<S> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        let quoted = f.serializer.quote(self.0.as_ref());
        f.dst.push_str(&quoted);
        Ok(())
    }
}

impl ToSql for TableName<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        let name = f.serializer.table_name(self.0);
        match &self.0.schema {
            Some(schema) => fmt!(f, Period([Ident(schema.as_str()), Ident(name.as_str())])),
            None => fmt!(f, Ident(name)),
        }
        Ok(())
    }
}

impl ToSql for ColumnName<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        let name = f.serializer.column_name(self.0);
        fmt!(f, Ident(name));
        Ok(())
    }
}

impl ToSql for ColumnRef<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        if f.prefix_table {
            fmt!(f, TableName(self.0) ".");
        }
        fmt!(f, ColumnName(self.1));
        Ok(())
    }
}

impl Serializer {
    /// Wraps `raw` in the flavor's identifier quotes, doubling any quote
    /// character inside it.
    pub fn quote(&self, raw: &str) -> String {
        let q = self.flavor.quote_char();
        let mut quoted = String::with_capacity(raw.len() + 2);
        quoted.push(q);
        for c in raw.chars() {
            if c == q {
                quoted.push(q);
            }
            quoted.push(c);
        }
        quoted.push(q);
        quoted
    }

    /// Reverses [`quote`](Self::quote). Returns `None` when `quoted` is not a
    /// well-formed quoted identifier.
    pub fn unquote(&self, quoted: &str) -> Option<String> {
        let q = self.flavor.quote_char();
        let inner = quoted.strip_prefix(q)?.strip_suffix(q)?;

        let mut raw = String::with_capacity(inner.len());
        let mut chars = inner.chars();
        while let Some(c) = chars.next() {
            if c == q {
                // A lone quote would have ended the identifier.
                if chars.next() != Some(q) {
                    return None;
                }
            }
            raw.push(c);
        }
        Some(raw)
    }

    /// Table name after the naming strategy, unquoted.
    pub fn table_name(&self, model: &ModelDef) -> String {
        self.naming.table_name(model.effective_name())
    }

    /// Column name after the naming strategy, unquoted.
    pub fn column_name(&self, field: &FieldDef) -> String {
        self.naming.column_name(field.effective_name())
    }
}
