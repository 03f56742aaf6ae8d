use crate::{stmt::Value, Error, Result};

#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    pub rows: Rows,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Rows {
    /// Number of rows impacted by the operation
    Count(u64),

    /// A single value, e.g. an aggregate or a fetched identity
    Scalar(Value),

    /// Result rows, one `Vec` of column values per row
    Values(Vec<Vec<Value>>),
}

impl Response {
    pub fn count(count: u64) -> Self {
        Self {
            rows: Rows::Count(count),
        }
    }

    pub fn scalar(value: impl Into<Value>) -> Self {
        Self {
            rows: Rows::Scalar(value.into()),
        }
    }

    pub fn values(rows: Vec<Vec<Value>>) -> Self {
        Self {
            rows: Rows::Values(rows),
        }
    }
}

impl Rows {
    pub fn is_count(&self) -> bool {
        matches!(self, Self::Count(_))
    }

    pub fn is_scalar(&self) -> bool {
        matches!(self, Self::Scalar(_))
    }

    pub fn is_values(&self) -> bool {
        matches!(self, Self::Values(_))
    }

    pub fn into_count(self) -> Result<u64> {
        match self {
            Rows::Count(count) => Ok(count),
            rows => Err(unexpected("row count", &rows)),
        }
    }

    /// Returns the scalar value. A one-row, one-column result is accepted
    /// too.
    pub fn into_scalar(self) -> Result<Value> {
        match self {
            Rows::Scalar(value) => Ok(value),
            Rows::Values(mut rows) if rows.len() == 1 && rows[0].len() == 1 => {
                Ok(rows.remove(0).remove(0))
            }
            rows => Err(unexpected("scalar", &rows)),
        }
    }

    pub fn into_values(self) -> Result<Vec<Vec<Value>>> {
        match self {
            Rows::Values(rows) => Ok(rows),
            rows => Err(unexpected("rows", &rows)),
        }
    }
}

fn unexpected(expected: &str, rows: &Rows) -> Error {
    crate::err!("driver returned an unexpected response; expected {expected}, got {rows:?}")
}
