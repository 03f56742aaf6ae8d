/// What the execution facility should expect back from a statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// DDL or DML without output; the response is a row count.
    Execute,

    /// The statement produces a single value, e.g. `COUNT(*)` or a fetched
    /// identity.
    Scalar,

    /// The statement produces rows.
    Query,
}

impl Intent {
    pub fn is_execute(self) -> bool {
        matches!(self, Intent::Execute)
    }

    pub fn is_scalar(self) -> bool {
        matches!(self, Intent::Scalar)
    }

    pub fn is_query(self) -> bool {
        matches!(self, Intent::Query)
    }
}
