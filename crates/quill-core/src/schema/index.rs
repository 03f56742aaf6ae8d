/// An index spanning one or more columns.
#[derive(Debug, Clone, PartialEq)]
pub struct CompositeIndex {
    /// Explicit index name. When absent, one is derived from the sorted
    /// field names.
    pub name: Option<String>,

    pub fields: Vec<IndexField>,

    pub unique: bool,
}

/// One column of a composite index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexField {
    /// Logical field name.
    pub field: String,

    pub descending: bool,
}

impl IndexField {
    /// Parses a field spec such as `"Name"` or `"CreatedAt DESC"`.
    pub fn parse(spec: &str) -> IndexField {
        let spec = spec.trim();
        let mut parts = spec.rsplitn(2, char::is_whitespace);
        let last = parts.next().unwrap_or(spec);
        let rest = parts.next().map(str::trim_end);

        match rest {
            Some(field) if last.eq_ignore_ascii_case("DESC") => IndexField {
                field: field.to_string(),
                descending: true,
            },
            Some(field) if last.eq_ignore_ascii_case("ASC") => IndexField {
                field: field.to_string(),
                descending: false,
            },
            _ => IndexField {
                field: spec.to_string(),
                descending: false,
            },
        }
    }
}

impl CompositeIndex {
    pub fn new<'a>(fields: impl IntoIterator<Item = &'a str>, unique: bool) -> CompositeIndex {
        CompositeIndex {
            name: None,
            fields: fields.into_iter().map(IndexField::parse).collect(),
            unique,
        }
    }

    /// Field names sorted and joined with `_`; the suffix of a derived index
    /// name.
    pub fn derived_suffix(&self) -> String {
        let mut names: Vec<&str> = self.fields.iter().map(|f| f.field.as_str()).collect();
        names.sort_unstable();
        names.join("_")
    }
}
