//! Argument values carried by step argument variants.

use std::fmt;

/// A single argument value supplied to a parameterised step.
///
/// Lists model array-like arguments. They are passed to the step method as
/// declared but flattened into one ordered sequence when a title is rendered.
///
/// # Examples
///
/// ```
/// use stepscan_patterns::StepArg;
///
/// assert_eq!(StepArg::from(42).to_string(), "42");
/// assert_eq!(StepArg::from(19.99).to_string(), "19.99");
/// assert_eq!(StepArg::from(vec![1, 2]).to_string(), "1, 2");
/// assert_eq!(StepArg::Null.to_string(), "");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum StepArg {
    /// Absence of a value; renders as empty text.
    Null,
    /// Boolean flag.
    Bool(bool),
    /// Signed integer.
    Int(i64),
    /// Unsigned integer too large for [`StepArg::Int`] or declared unsigned.
    UInt(u64),
    /// Floating-point number.
    Float(f64),
    /// Single character.
    Char(char),
    /// Text.
    Str(String),
    /// Nested array-like group of values.
    List(Vec<StepArg>),
}

impl StepArg {
    /// Borrow the text payload of a [`StepArg::Str`].
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(text) => Some(text),
            _ => None,
        }
    }

    /// Read an integer payload as `i64`.
    ///
    /// Unsigned payloads convert when they fit.
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(value) => Some(*value),
            Self::UInt(value) => i64::try_from(*value).ok(),
            _ => None,
        }
    }

    /// Read an integer payload as `u64`.
    ///
    /// Signed payloads convert when they are not negative.
    #[must_use]
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Self::UInt(value) => Some(*value),
            Self::Int(value) => u64::try_from(*value).ok(),
            _ => None,
        }
    }

    /// Read the payload of a [`StepArg::Float`].
    #[must_use]
    pub const fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(value) => Some(*value),
            _ => None,
        }
    }

    /// Read the payload of a [`StepArg::Bool`].
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            _ => None,
        }
    }

    /// Borrow the items of a [`StepArg::List`].
    #[must_use]
    pub fn as_list(&self) -> Option<&[Self]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    /// Returns `true` for [`StepArg::Null`].
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl fmt::Display for StepArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => Ok(()),
            Self::Bool(value) => fmt::Display::fmt(value, f),
            Self::Int(value) => fmt::Display::fmt(value, f),
            Self::UInt(value) => fmt::Display::fmt(value, f),
            Self::Float(value) => fmt::Display::fmt(value, f),
            Self::Char(value) => fmt::Display::fmt(value, f),
            Self::Str(value) => f.write_str(value),
            Self::List(items) => f.write_str(&crate::join_args(&flatten_args(items))),
        }
    }
}

/// Flatten nested lists into a single ordered sequence.
///
/// Nesting is removed at every depth; scalar values keep their relative order.
///
/// # Examples
///
/// ```
/// use stepscan_patterns::{StepArg, flatten_args};
///
/// let args = vec![
///     StepArg::from("a"),
///     StepArg::List(vec![StepArg::from(1), StepArg::List(vec![StepArg::from(2)])]),
/// ];
/// assert_eq!(
///     flatten_args(&args),
///     vec![StepArg::from("a"), StepArg::from(1), StepArg::from(2)]
/// );
/// ```
#[must_use]
pub fn flatten_args(args: &[StepArg]) -> Vec<StepArg> {
    let mut flat = Vec::with_capacity(args.len());
    push_flattened(args, &mut flat);
    flat
}

fn push_flattened(args: &[StepArg], flat: &mut Vec<StepArg>) {
    for arg in args {
        match arg {
            StepArg::List(items) => push_flattened(items, flat),
            other => flat.push(other.clone()),
        }
    }
}

macro_rules! from_signed {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for StepArg {
                fn from(value: $ty) -> Self {
                    Self::Int(i64::from(value))
                }
            }
        )*
    };
}

macro_rules! from_unsigned {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for StepArg {
                fn from(value: $ty) -> Self {
                    Self::UInt(u64::from(value))
                }
            }
        )*
    };
}

from_signed!(i8, i16, i32, i64);
from_unsigned!(u8, u16, u32, u64);

impl From<usize> for StepArg {
    fn from(value: usize) -> Self {
        u64::try_from(value).map_or_else(|_| Self::Str(value.to_string()), Self::UInt)
    }
}

impl From<isize> for StepArg {
    fn from(value: isize) -> Self {
        i64::try_from(value).map_or_else(|_| Self::Str(value.to_string()), Self::Int)
    }
}

impl From<f32> for StepArg {
    fn from(value: f32) -> Self {
        Self::Float(f64::from(value))
    }
}

impl From<f64> for StepArg {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for StepArg {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<char> for StepArg {
    fn from(value: char) -> Self {
        Self::Char(value)
    }
}

impl From<&str> for StepArg {
    fn from(value: &str) -> Self {
        Self::Str(value.to_owned())
    }
}

impl From<String> for StepArg {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl<T: Into<StepArg>> From<Vec<T>> for StepArg {
    fn from(values: Vec<T>) -> Self {
        Self::List(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<StepArg>> From<Option<T>> for StepArg {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

/// Build a `Vec<StepArg>` from heterogeneous values.
///
/// Every expression is converted with [`StepArg::from`].
///
/// # Examples
///
/// ```
/// use stepscan_patterns::{StepArg, step_args};
///
/// let args = step_args![42, "apples", 1.5, vec![1, 2]];
/// assert_eq!(args.len(), 4);
/// assert_eq!(args.first(), Some(&StepArg::from(42)));
/// assert!(step_args![].is_empty());
/// ```
#[macro_export]
macro_rules! step_args {
    () => {
        ::std::vec::Vec::<$crate::StepArg>::new()
    };
    ($($value:expr),+ $(,)?) => {
        ::std::vec![$($crate::StepArg::from($value)),+]
    };
}
