//! Dynamic value representation for encoder input.
//!
//! This module provides the [`Value`] enum, the structure the encoder walks,
//! together with [`Number`] and the [`Kind`] tags the type registry is keyed by.
//!
//! ## Core Types
//!
//! - [`Value`]: null, bool, number, string, array, tuple, object, plus
//!   [`Value::Custom`] for types that serialize themselves and
//!   [`Value::Opaque`] for foreign values that need a registered handler
//! - [`Number`]: integers, arbitrary-size integers and floats
//! - [`Kind`]: the runtime category of a value
//!
//! ## Usage Patterns
//!
//! ```rust
//! use serde_toxml::{Kind, Value};
//!
//! let value = Value::from(42);
//! assert_eq!(value.kind(), Kind::Integer);
//!
//! // Booleans are their own kind, never a number
//! assert_eq!(Value::from(true).kind(), Kind::Bool);
//! ```
//!
//! ### Converting from Rust Types
//!
//! ```rust
//! use serde_toxml::{to_value, Value};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Point { x: i32, y: i32 }
//!
//! let value: Value = to_value(&Point { x: 10, y: 20 }).unwrap();
//! assert!(value.is_object());
//! ```

use crate::protocol::ToXml;
use crate::XmlMap;
use num_bigint::BigInt;
use serde::{Serialize, Serializer};
use std::any::{self, Any};
use std::fmt;
use std::sync::Arc;

/// A dynamically-typed value the encoder can turn into XML.
///
/// # Examples
///
/// ```rust
/// use serde_toxml::{Value, Number};
///
/// let null = Value::Null;
/// let num = Value::Number(Number::Integer(42));
/// let text = Value::String("hello".to_string());
///
/// assert!(null.is_null());
/// assert!(num.is_number());
/// assert!(text.is_string());
/// ```
#[derive(Clone, Debug, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Array(Vec<Value>),
    Tuple(Vec<Value>),
    Object(XmlMap),
    /// A value that drives its own conversion through [`ToXml`].
    Custom(Arc<dyn ToXml>),
    /// A foreign value with no conversion of its own.
    Opaque(Opaque),
}

/// A numeric value.
///
/// Values that do not fit in an `i64` are kept exactly as [`Number::BigInt`].
///
/// # Examples
///
/// ```rust
/// use serde_toxml::Number;
///
/// assert_eq!(Number::Integer(42).to_string(), "42");
/// assert_eq!(Number::Float(2.3).to_string(), "2.3");
/// assert_eq!(Number::Float(2.0).to_string(), "2.0");
/// assert_eq!(Number::from(u64::MAX).to_string(), "18446744073709551615");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Number {
    Integer(i64),
    BigInt(BigInt),
    Float(f64),
}

impl Number {
    #[inline]
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Number::Integer(_) | Number::BigInt(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_float(&self) -> bool {
        matches!(self, Number::Float(_))
    }

    /// Converts this number to an `i64` if it is an integer in range.
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Number::Integer(i) => Some(*i),
            Number::BigInt(bi) => i64::try_from(bi).ok(),
            Number::Float(_) => None,
        }
    }

    #[must_use]
    pub fn kind(&self) -> Kind {
        match self {
            Number::Integer(_) => Kind::Integer,
            Number::BigInt(_) => Kind::BigInt,
            Number::Float(_) => Kind::Float,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(i) => write!(f, "{}", i),
            Number::BigInt(bi) => write!(f, "{}", bi),
            Number::Float(fl) => write_float(f, *fl),
        }
    }
}

/// Shortest round-trip digits. Positional notation for decimal exponents in
/// `-4..16` (always with a fractional digit), scientific notation with a
/// signed two-digit exponent otherwise.
fn write_float(f: &mut fmt::Formatter<'_>, fl: f64) -> fmt::Result {
    if fl.is_nan() {
        return f.write_str("nan");
    }
    if fl.is_infinite() {
        return f.write_str(if fl > 0.0 { "inf" } else { "-inf" });
    }

    let scientific = format!("{:e}", fl);
    let (mantissa, exponent) = scientific
        .split_once('e')
        .unwrap_or((scientific.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if (-4..16).contains(&exponent) {
        let positional = fl.to_string();
        if positional.contains('.') {
            f.write_str(&positional)
        } else {
            write!(f, "{}.0", positional)
        }
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        write!(f, "{}e{}{:02}", mantissa, sign, exponent.unsigned_abs())
    }
}

macro_rules! number_from_small_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Number {
                fn from(value: $ty) -> Self {
                    Number::Integer(i64::from(value))
                }
            }

            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::Number(Number::from(value))
                }
            }
        )*
    };
}

number_from_small_int!(i8, i16, i32, i64, u8, u16, u32);

macro_rules! number_from_wide_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Number {
                fn from(value: $ty) -> Self {
                    match i64::try_from(value) {
                        Ok(i) => Number::Integer(i),
                        Err(_) => Number::BigInt(BigInt::from(value)),
                    }
                }
            }

            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::Number(Number::from(value))
                }
            }
        )*
    };
}

number_from_wide_int!(u64, i128, u128, isize, usize);

impl From<f32> for Number {
    fn from(value: f32) -> Self {
        Number::Float(f64::from(value))
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}

impl From<BigInt> for Number {
    fn from(value: BigInt) -> Self {
        match i64::try_from(&value) {
            Ok(i) => Number::Integer(i),
            Err(_) => Number::BigInt(value),
        }
    }
}

/// The runtime category of a [`Value`], used as the type registry key.
///
/// Built-in kinds are plain variants. Custom and opaque values are keyed by
/// their Rust type name through [`Kind::of`].
///
/// # Examples
///
/// ```rust
/// use serde_toxml::{CData, Kind, Value};
///
/// assert_eq!(Value::from(vec![Value::from(1)]).kind(), Kind::Array);
/// assert_eq!(Value::from(CData::new("x")).kind(), Kind::of::<CData>());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Kind {
    Null,
    Bool,
    Integer,
    BigInt,
    Float,
    String,
    Array,
    Tuple,
    Object,
    Other(&'static str),
}

impl Kind {
    /// Every numeric kind.
    pub const NUMBERS: [Kind; 3] = [Kind::Integer, Kind::BigInt, Kind::Float];

    /// Every sequence kind.
    pub const SEQUENCES: [Kind; 2] = [Kind::Array, Kind::Tuple];

    /// The kind of custom or opaque values of type `T`.
    #[must_use]
    pub fn of<T: ?Sized>() -> Self {
        Kind::Other(any::type_name::<T>())
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Kind::Null => "null",
            Kind::Bool => "bool",
            Kind::Integer => "integer",
            Kind::BigInt => "bigint",
            Kind::Float => "float",
            Kind::String => "string",
            Kind::Array => "array",
            Kind::Tuple => "tuple",
            Kind::Object => "object",
            Kind::Other(name) => name,
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A foreign value carried through the structure untouched.
///
/// Opaque values have no conversion of their own; encoding one fails with
/// [`Error::UnknownType`](crate::Error::UnknownType) unless a handler is
/// registered for [`Kind::of::<T>()`](Kind::of).
///
/// # Examples
///
/// ```rust
/// use serde_toxml::{Kind, Opaque, Value};
///
/// struct Celsius(f64);
///
/// let value = Value::from(Opaque::new(Celsius(21.5)));
/// assert_eq!(value.kind(), Kind::of::<Celsius>());
/// ```
#[derive(Clone)]
pub struct Opaque {
    type_name: &'static str,
    inner: Arc<dyn Any + Send + Sync>,
}

impl Opaque {
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Opaque {
            type_name: any::type_name::<T>(),
            inner: Arc::new(value),
        }
    }

    #[must_use]
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    #[must_use]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.inner.downcast_ref::<T>()
    }
}

impl fmt::Debug for Opaque {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Opaque({})", self.type_name)
    }
}

impl Value {
    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    #[inline]
    #[must_use]
    pub const fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    /// Returns `true` for arrays and tuples.
    #[inline]
    #[must_use]
    pub const fn is_sequence(&self) -> bool {
        matches!(self, Value::Array(_) | Value::Tuple(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    /// Returns the registry key for this value.
    #[must_use]
    pub fn kind(&self) -> Kind {
        match self {
            Value::Null => Kind::Null,
            Value::Bool(_) => Kind::Bool,
            Value::Number(n) => n.kind(),
            Value::String(_) => Kind::String,
            Value::Array(_) => Kind::Array,
            Value::Tuple(_) => Kind::Tuple,
            Value::Object(_) => Kind::Object,
            Value::Custom(custom) => Kind::Other(custom.kind_name()),
            Value::Opaque(opaque) => Kind::Other(opaque.type_name()),
        }
    }

    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_number(&self) -> Option<&Number> {
        match self {
            Value::Number(n) => Some(n),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        self.as_number().and_then(Number::as_i64)
    }

    /// Returns the items of an array or tuple.
    #[inline]
    #[must_use]
    pub fn as_sequence(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) | Value::Tuple(items) => Some(items),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_object(&self) -> Option<&XmlMap> {
        match self {
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }

    /// Returns the custom serialization of this value, if it has one.
    #[must_use]
    pub fn as_to_xml(&self) -> Option<&dyn ToXml> {
        match self {
            Value::Custom(custom) => Some(custom.as_ref()),
            _ => None,
        }
    }

    /// Wraps a [`ToXml`] implementor.
    pub fn custom<T: ToXml + 'static>(value: T) -> Self {
        Value::Custom(Arc::new(value))
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Array(a), Value::Array(b)) | (Value::Tuple(a), Value::Tuple(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => a == b,
            // Identity, not structure: custom values are not comparable.
            (Value::Custom(a), Value::Custom(b)) => Arc::ptr_eq(a, b),
            (Value::Opaque(a), Value::Opaque(b)) => Arc::ptr_eq(&a.inner, &b.inner),
            _ => false,
        }
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::{Error, SerializeMap, SerializeSeq, SerializeTuple};

        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(Number::Integer(i)) => serializer.serialize_i64(*i),
            Value::Number(Number::BigInt(bi)) => {
                if let Ok(i) = i128::try_from(bi) {
                    serializer.serialize_i128(i)
                } else if let Ok(u) = u128::try_from(bi) {
                    serializer.serialize_u128(u)
                } else {
                    serializer.serialize_str(&bi.to_string())
                }
            }
            Value::Number(Number::Float(f)) => serializer.serialize_f64(*f),
            Value::String(s) => serializer.serialize_str(s),
            Value::Array(arr) => {
                let mut seq = serializer.serialize_seq(Some(arr.len()))?;
                for element in arr {
                    seq.serialize_element(element)?;
                }
                seq.end()
            }
            Value::Tuple(items) => {
                let mut tuple = serializer.serialize_tuple(items.len())?;
                for element in items {
                    tuple.serialize_element(element)?;
                }
                tuple.end()
            }
            Value::Object(obj) => {
                let mut map = serializer.serialize_map(Some(obj.len()))?;
                for (k, v) in obj.iter() {
                    map.serialize_entry(k, v)?;
                }
                map.end()
            }
            Value::Custom(_) | Value::Opaque(_) => Err(S::Error::custom(format!(
                "{} values cannot be serialized through serde",
                self.kind()
            ))),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Number(Number::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(Number::Float(value))
    }
}

impl From<Number> for Value {
    fn from(value: Number) -> Self {
        Value::Number(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::Array(value)
    }
}

impl From<XmlMap> for Value {
    fn from(value: XmlMap) -> Self {
        Value::Object(value)
    }
}

impl From<Opaque> for Value {
    fn from(value: Opaque) -> Self {
        Value::Opaque(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bool_is_not_a_number_kind() {
        assert_eq!(Value::from(true).kind(), Kind::Bool);
        assert!(!Kind::NUMBERS.contains(&Value::from(false).kind()));
    }

    #[test]
    fn test_number_kinds() {
        assert_eq!(Value::from(1i32).kind(), Kind::Integer);
        assert_eq!(Value::from(1.5f64).kind(), Kind::Float);
        assert_eq!(Value::from(u64::MAX).kind(), Kind::BigInt);
        assert_eq!(Value::from(7u64).kind(), Kind::Integer);
    }

    #[test]
    fn test_number_display() {
        assert_eq!(Number::Integer(-12).to_string(), "-12");
        assert_eq!(Number::Float(2.3).to_string(), "2.3");
        assert_eq!(Number::Float(-4.0).to_string(), "-4.0");
        assert_eq!(Number::Float(f64::INFINITY).to_string(), "inf");
        assert_eq!(Number::Float(f64::NEG_INFINITY).to_string(), "-inf");
        assert_eq!(Number::Float(f64::NAN).to_string(), "nan");
        assert_eq!(
            Number::from(i128::MIN).to_string(),
            "-170141183460469231731687303715884105728"
        );
    }

    #[test]
    fn test_float_notation_switches_at_exponent_bounds() {
        let cases = [
            (0.0, "0.0"),
            (-0.0, "-0.0"),
            (0.0001, "0.0001"),
            (0.00001, "1e-05"),
            (1.5e-7, "1.5e-07"),
            (123456.789, "123456.789"),
            (1e15, "1000000000000000.0"),
            (1e16, "1e+16"),
            (-2.5e20, "-2.5e+20"),
            (1.7976931348623157e308, "1.7976931348623157e+308"),
        ];
        for (value, text) in cases {
            assert_eq!(Number::Float(value).to_string(), text, "{:?}", value);
        }
    }

    #[test]
    fn test_bigint_narrows_when_it_fits() {
        assert_eq!(Number::from(BigInt::from(5)), Number::Integer(5));
    }

    #[test]
    fn test_sequence_accessors() {
        let arr = Value::Array(vec![Value::from(1)]);
        let tuple = Value::Tuple(vec![Value::from(1)]);
        assert!(arr.is_sequence());
        assert!(tuple.is_sequence());
        assert_eq!(arr.as_sequence(), tuple.as_sequence());
        assert_ne!(arr, tuple);
    }

    #[test]
    fn test_opaque_kind_and_downcast() {
        struct Meters(u32);
        let opaque = Opaque::new(Meters(3));
        assert_eq!(Value::from(opaque.clone()).kind(), Kind::of::<Meters>());
        assert_eq!(opaque.downcast_ref::<Meters>().map(|m| m.0), Some(3));
        assert!(opaque.downcast_ref::<u32>().is_none());
    }

    #[test]
    fn test_option_conversion() {
        assert_eq!(Value::from(None::<i32>), Value::Null);
        assert_eq!(Value::from(Some("x")), Value::from("x"));
    }
}
