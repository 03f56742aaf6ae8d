use super::{Formatter, Params};

use quill_core::Result;

macro_rules! fmt {
    ($f:expr, $( $fragments:expr )*) => {{
        $(
            $fragments.to_sql($f)?;
        )*
    }};
}

pub(super) trait ToSql {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()>;
}

impl ToSql for &str {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        f.dst.push_str(self);
        Ok(())
    }
}

impl ToSql for &String {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        f.dst.push_str(self);
        Ok(())
    }
}

impl ToSql for u64 {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        use std::fmt::Write;

        write!(f.dst, "{self}")?;
        Ok(())
    }
}
