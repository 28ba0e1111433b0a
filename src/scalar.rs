//! Numeric coercion for sequence elements.
//!
//! Accumulating operations ([`sum`](crate::stats::sum),
//! [`mean`](crate::stats::mean), [`variance`](crate::stats::variance)) accept
//! any element type implementing [`Scalar`], so mixed sequences can be
//! aggregated without a separate conversion pass.
//!
//! # Coercion rules
//!
//! | Element | `to_number()` |
//! |---|---|
//! | floats, integers | the value (integers widened to `f64`) |
//! | `true` / `false` | `1.0` / `0.0` |
//! | text | trimmed, then parsed; empty → `0.0`, unparsable → NaN |
//! | `None` / [`Value::Null`] | `0.0` |
//!
//! A failed coercion yields NaN, which then poisons any aggregate it flows
//! into. Nothing is filtered.

use std::fmt;

/// The kind of an element, as reported by [`count_by_type`](crate::frequency::count_by_type).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Kind {
    Number,
    String,
    Boolean,
    Null,
}

impl Kind {
    /// Lowercase name of the kind.
    pub fn as_str(self) -> &'static str {
        match self {
            Kind::Number => "number",
            Kind::String => "string",
            Kind::Boolean => "boolean",
            Kind::Null => "null",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An element that can be coerced to `f64` and classified by [`Kind`].
pub trait Scalar {
    /// Coerces the element to a number following the module-level rules.
    fn to_number(&self) -> f64;

    /// Classifies the element.
    fn kind(&self) -> Kind;
}

macro_rules! impl_scalar_for_number {
    ($($t:ty),* $(,)?) => {
        $(
            impl Scalar for $t {
                #[inline]
                fn to_number(&self) -> f64 {
                    *self as f64
                }

                #[inline]
                fn kind(&self) -> Kind {
                    Kind::Number
                }
            }
        )*
    };
}

impl_scalar_for_number!(f64, f32, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl Scalar for bool {
    fn to_number(&self) -> f64 {
        if *self {
            1.0
        } else {
            0.0
        }
    }

    fn kind(&self) -> Kind {
        Kind::Boolean
    }
}

impl Scalar for str {
    fn to_number(&self) -> f64 {
        parse_number(self)
    }

    fn kind(&self) -> Kind {
        Kind::String
    }
}

impl Scalar for String {
    fn to_number(&self) -> f64 {
        parse_number(self)
    }

    fn kind(&self) -> Kind {
        Kind::String
    }
}

impl<T: Scalar + ?Sized> Scalar for &T {
    fn to_number(&self) -> f64 {
        (**self).to_number()
    }

    fn kind(&self) -> Kind {
        (**self).kind()
    }
}

impl<T: Scalar> Scalar for Option<T> {
    fn to_number(&self) -> f64 {
        self.as_ref().map_or(0.0, Scalar::to_number)
    }

    fn kind(&self) -> Kind {
        self.as_ref().map_or(Kind::Null, Scalar::kind)
    }
}

/// Parses decimal text; surrounding whitespace is ignored.
fn parse_number(text: &str) -> f64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    trimmed.parse().unwrap_or(f64::NAN)
}

/// A dynamically typed sequence element.
///
/// # Examples
/// ```
/// use u_quickstats::scalar::{Kind, Scalar, Value};
/// let v = Value::from("2.5");
/// assert_eq!(v.kind(), Kind::String);
/// assert_eq!(v.to_number(), 2.5);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Number(f64),
    Text(String),
    Bool(bool),
    Null,
}

impl Scalar for Value {
    fn to_number(&self) -> f64 {
        match self {
            Value::Number(x) => *x,
            Value::Text(s) => parse_number(s),
            Value::Bool(b) => b.to_number(),
            Value::Null => 0.0,
        }
    }

    fn kind(&self) -> Kind {
        match self {
            Value::Number(_) => Kind::Number,
            Value::Text(_) => Kind::String,
            Value::Bool(_) => Kind::Boolean,
            Value::Null => Kind::Null,
        }
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Number(x)
    }
}

impl From<i64> for Value {
    fn from(x: i64) -> Self {
        Value::Number(x as f64)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}
