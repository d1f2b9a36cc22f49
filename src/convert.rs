//! Type-directed conversion: raw environment strings into field values.
//!
//! Conversion happens in two steps. [`convert`] is a closed dispatch over
//! [`Kind`]: it parses the raw string into a [`Value`], using the widest
//! integer width for numbers. [`FromValue`] then stores that value into the
//! field's concrete Rust type, narrowing integers to the declared width.
//! Sequences recurse through the same dispatch for each element.

use std::time::Duration;

use url::Url;

use crate::error::ConversionError;
use crate::tag;
use crate::types::{Kind, SpecialType};

/// A converted value, not yet narrowed to its field's type.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Text(String),
    Bool(bool),
    Signed(i128),
    Unsigned(u128),
    Duration(Duration),
    Url(Url),
    Seq(Vec<Value>),
}

impl Value {
    fn describe(&self) -> &'static str {
        match self {
            Value::Text(_) => "text",
            Value::Bool(_) => "boolean",
            Value::Signed(_) => "signed integer",
            Value::Unsigned(_) => "unsigned integer",
            Value::Duration(_) => "duration",
            Value::Url(_) => "URL",
            Value::Seq(_) => "sequence",
        }
    }
}

/// Convert `raw` according to `kind`.
///
/// Returns `Ok(None)` when the kind has no conversion rule; the caller decides
/// whether that is an error.
pub fn convert(kind: &Kind, raw: &str) -> Result<Option<Value>, ConversionError> {
    if !kind.is_supported() {
        return Ok(None);
    }

    let value = match kind {
        Kind::Special(special) => convert_special(*special, raw)?,
        Kind::Text => Value::Text(raw.to_string()),
        Kind::Bool => Value::Bool(raw == "true" || raw == "1"),
        Kind::Signed => Value::Signed(parse_int(raw)?),
        Kind::Unsigned => Value::Unsigned(parse_int(raw)?),
        Kind::Seq(element) => convert_seq(element, raw)?,
        Kind::Optional(inner) => return convert(inner, raw),
        Kind::Other => return Ok(None),
    };
    Ok(Some(value))
}

fn convert_special(special: SpecialType, raw: &str) -> Result<Value, ConversionError> {
    match special {
        SpecialType::Duration => humantime::parse_duration(raw)
            .map(Value::Duration)
            .map_err(|source| ConversionError::InvalidDuration {
                input: raw.to_string(),
                source,
            }),
        SpecialType::Url => Url::parse(raw)
            .map(Value::Url)
            .map_err(|source| ConversionError::InvalidUrl {
                input: raw.to_string(),
                source,
            }),
    }
}

fn convert_seq(element: &Kind, raw: &str) -> Result<Value, ConversionError> {
    let items = tag::segments(raw)
        .into_iter()
        // Element support was checked up front, so `None` cannot occur here.
        .filter_map(|item| convert(element, item).transpose())
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Value::Seq(items))
}

fn parse_int<N>(raw: &str) -> Result<N, ConversionError>
where
    N: std::str::FromStr<Err = std::num::ParseIntError>,
{
    raw.parse::<N>()
        .map_err(|source| ConversionError::InvalidInteger {
            input: raw.to_string(),
            source,
        })
}

/// Store a converted [`Value`] as a concrete field type.
pub trait FromValue: Sized {
    fn from_value(value: Value) -> Result<Self, ConversionError>;
}

fn mismatch<T>(expected: &'static str, found: &Value) -> Result<T, ConversionError> {
    Err(ConversionError::KindMismatch {
        expected,
        found: found.describe(),
    })
}

impl FromValue for String {
    fn from_value(value: Value) -> Result<Self, ConversionError> {
        match value {
            Value::Text(s) => Ok(s),
            other => mismatch("text", &other),
        }
    }
}

impl FromValue for bool {
    fn from_value(value: Value) -> Result<Self, ConversionError> {
        match value {
            Value::Bool(b) => Ok(b),
            other => mismatch("boolean", &other),
        }
    }
}

macro_rules! narrow_from_value {
    ($variant:ident, $expected:literal: $($ty:ty),+) => {
        $(
            impl FromValue for $ty {
                fn from_value(value: Value) -> Result<Self, ConversionError> {
                    match value {
                        Value::$variant(n) => <$ty>::try_from(n).map_err(|_| {
                            ConversionError::OutOfRange {
                                value: n.to_string(),
                                target: stringify!($ty),
                            }
                        }),
                        other => mismatch($expected, &other),
                    }
                }
            }
        )+
    };
}

narrow_from_value!(Signed, "signed integer": i8, i16, i32, i64, i128, isize);
narrow_from_value!(Unsigned, "unsigned integer": u8, u16, u32, u64, u128, usize);

impl FromValue for Duration {
    fn from_value(value: Value) -> Result<Self, ConversionError> {
        match value {
            Value::Duration(d) => Ok(d),
            other => mismatch("duration", &other),
        }
    }
}

impl FromValue for Url {
    fn from_value(value: Value) -> Result<Self, ConversionError> {
        match value {
            Value::Url(u) => Ok(u),
            other => mismatch("URL", &other),
        }
    }
}

impl<T: FromValue> FromValue for Vec<T> {
    fn from_value(value: Value) -> Result<Self, ConversionError> {
        match value {
            Value::Seq(items) => items.into_iter().map(T::from_value).collect(),
            other => mismatch("sequence", &other),
        }
    }
}

impl<T: FromValue> FromValue for Option<T> {
    fn from_value(value: Value) -> Result<Self, ConversionError> {
        T::from_value(value).map(Some)
    }
}
