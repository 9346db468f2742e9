/// Builds a [`Value`](crate::Value) from a JSON-like literal.
///
/// Parenthesized lists with at least one comma become tuples. Items and
/// object values may be negative literals (`[-1, 2]`, `{"t": -0.5}`); other
/// compound expressions must be parenthesized. Anything that is not a literal
/// form goes through [`to_value`](crate::to_value), and an expression whose
/// serialization fails becomes [`Value::Null`](crate::Value::Null). Call
/// `to_value` directly to see the error.
#[macro_export]
macro_rules! xml {
    (@items [$($done:expr,)*]) => {
        vec![$($done,)*]
    };

    (@items [$($done:expr,)*] - $lit:literal $(, $($rest:tt)*)?) => {
        $crate::xml!(@items [$($done,)* $crate::xml!(- $lit),] $($($rest)*)?)
    };

    (@items [$($done:expr,)*] $next:tt $(, $($rest:tt)*)?) => {
        $crate::xml!(@items [$($done,)* $crate::xml!($next),] $($($rest)*)?)
    };

    (@object $object:ident) => {};

    (@object $object:ident $key:literal : - $lit:literal $(, $($rest:tt)*)?) => {
        $object.insert($key.to_string(), $crate::xml!(- $lit));
        $crate::xml!(@object $object $($($rest)*)?);
    };

    (@object $object:ident $key:literal : $value:tt $(, $($rest:tt)*)?) => {
        $object.insert($key.to_string(), $crate::xml!($value));
        $crate::xml!(@object $object $($($rest)*)?);
    };

    (null) => {
        $crate::Value::Null
    };

    (true) => {
        $crate::Value::Bool(true)
    };

    (false) => {
        $crate::Value::Bool(false)
    };

    ([]) => {
        $crate::Value::Array(vec![])
    };

    ([ $($tt:tt)+ ]) => {
        $crate::Value::Array($crate::xml!(@items [] $($tt)+))
    };

    (( - $first:literal , $($rest:tt)* )) => {
        $crate::Value::Tuple($crate::xml!(@items [] - $first, $($rest)*))
    };

    (( $first:tt , $($rest:tt)* )) => {
        $crate::Value::Tuple($crate::xml!(@items [] $first, $($rest)*))
    };

    ({}) => {
        $crate::Value::Object($crate::XmlMap::new())
    };

    ({ $($tt:tt)+ }) => {{
        let mut object = $crate::XmlMap::new();
        $crate::xml!(@object object $($tt)+);
        $crate::Value::Object(object)
    }};

    (- $lit:literal) => {{
        $crate::to_value(&-$lit).unwrap_or($crate::Value::Null)
    }};

    ($s:expr) => {{
        $crate::to_value(&$s).unwrap_or($crate::Value::Null)
    }};
}
