/// Implements `FieldType` and the `Value`/`Expr` conversions for a Rust type that
/// maps one-to-one onto a `Value` variant.
macro_rules! impl_primitive {
    ( $( $ty:ty => $variant:ident, $logical:ident $(, $reference:literal)? ; )+ ) => {
        $(
            impl From<$ty> for $crate::stmt::Value {
                fn from(src: $ty) -> $crate::stmt::Value {
                    $crate::stmt::Value::$variant(src)
                }
            }

            impl From<&$ty> for $crate::stmt::Value {
                fn from(src: &$ty) -> $crate::stmt::Value {
                    $crate::stmt::Value::$variant(src.clone())
                }
            }

            impl From<$ty> for $crate::stmt::Expr {
                fn from(src: $ty) -> $crate::stmt::Expr {
                    $crate::stmt::Expr::Value(src.into())
                }
            }

            impl $crate::schema::FieldType for $ty {
                const TYPE: $crate::stmt::Type = $crate::stmt::Type::$logical;
                $( const REFERENCE: bool = $reference; )?

                fn to_value(&self) -> $crate::stmt::Value {
                    $crate::stmt::Value::$variant(self.clone())
                }
            }
        )+
    };
}
