mod db_type;
pub use db_type::DbType;

mod expr;
pub use expr::Expr;

mod expr_aggregate;
pub use expr_aggregate::{AggregateFunc, ExprAggregate};

mod expr_and;
pub use expr_and::ExprAnd;

mod expr_binary_op;
pub use expr_binary_op::ExprBinaryOp;

mod expr_cast;
pub use expr_cast::ExprCast;

mod expr_column;
pub use expr_column::ExprColumn;

mod expr_func;
pub use expr_func::{ExprFunc, Func};

mod expr_in_list;
pub use expr_in_list::ExprInList;

mod expr_is_null;
pub use expr_is_null::ExprIsNull;

mod expr_new;
pub use expr_new::{ExprNew, NewField};

mod expr_not;
pub use expr_not::ExprNot;

mod expr_or;
pub use expr_or::ExprOr;

mod expr_pattern;
pub use expr_pattern::{ExprPattern, PatternKind};

mod intent;
pub use intent::Intent;

mod op_binary;
pub use op_binary::BinaryOp;

mod ty;
pub use ty::Type;

mod typed_value;
pub use typed_value::TypedValue;

mod value;
pub use value::Value;
