//! Declaration and implementation of the decoded DICOM primitive value.

use crate::tag::Tag;
use smallvec::SmallVec;
use std::borrow::Cow;

/// An aggregation of one or more values of the same type.
pub type C<T> = SmallVec<[T; 2]>;

/// The decoded form of a data element's value.
///
/// The converter produces the variant appropriate to the element's
/// value representation. Multi-valued elements are contained in a
/// [`smallvec`] vector, conveniently aliased to the type [`C`].
/// Single-valued text elements are kept as a plain [`Str`](Self::Str).
#[derive(Debug, PartialEq, Clone)]
pub enum PrimitiveValue {
    /// No data. Employed for zero-length values.
    Empty,

    /// A single string.
    /// Used for single-valued text elements, and for ST, LT and UT,
    /// which are never multi-valued.
    Str(String),

    /// A sequence of strings, from a `\`-separated text value.
    Strs(C<String>),

    /// A sequence of attribute tags. Used specifically for AT.
    Tags(C<Tag>),

    /// A sequence of raw bytes.
    /// Used for OB, OW, OF, UN, unrecognized representations,
    /// and undecoded sequence payloads.
    U8(C<u8>),

    /// A sequence of signed 16-bit integers. Used for SS.
    I16(C<i16>),

    /// A sequence of unsigned 16-bit integers. Used for US.
    U16(C<u16>),

    /// A sequence of signed 32-bit integers. Used for SL and IS.
    I32(C<i32>),

    /// A sequence of unsigned 32-bit integers. Used for UL.
    U32(C<u32>),

    /// A sequence of 32-bit floating point numbers. Used for FL.
    F32(C<f32>),

    /// A sequence of 64-bit floating point numbers. Used for FD and DS.
    F64(C<f64>),
}

impl PrimitiveValue {
    /// The number of individual values in this value.
    pub fn multiplicity(&self) -> u32 {
        use PrimitiveValue::*;
        match self {
            Empty => 0,
            Str(_) => 1,
            Strs(c) => c.len() as u32,
            Tags(c) => c.len() as u32,
            U8(c) => c.len() as u32,
            I16(c) => c.len() as u32,
            U16(c) => c.len() as u32,
            I32(c) => c.len() as u32,
            U32(c) => c.len() as u32,
            F32(c) => c.len() as u32,
            F64(c) => c.len() as u32,
        }
    }

    /// Render the value as a string.
    ///
    /// Multiple values are joined by `\`, as in the standard's text
    /// encoding. Numeric values are rendered in decimal.
    pub fn to_str(&self) -> Cow<'_, str> {
        fn join<T: ToString>(values: &[T]) -> String {
            values
                .iter()
                .map(|v| v.to_string())
                .collect::<Vec<_>>()
                .join("\\")
        }

        use PrimitiveValue::*;
        match self {
            Empty => Cow::from(""),
            Str(s) => Cow::from(s.as_str()),
            Strs(c) if c.len() == 1 => Cow::from(c[0].as_str()),
            Strs(c) => Cow::from(join(c)),
            Tags(c) => Cow::from(join(c)),
            U8(c) => Cow::from(join(c)),
            I16(c) => Cow::from(join(c)),
            U16(c) => Cow::from(join(c)),
            I32(c) => Cow::from(join(c)),
            U32(c) => Cow::from(join(c)),
            F32(c) => Cow::from(join(c)),
            F64(c) => Cow::from(join(c)),
        }
    }

    /// Read the first value as a 64-bit float, if the value is numeric
    /// or a string in decimal notation.
    pub fn to_f64(&self) -> Option<f64> {
        use PrimitiveValue::*;
        match self {
            F64(c) => c.first().copied(),
            F32(c) => c.first().map(|&v| f64::from(v)),
            I32(c) => c.first().map(|&v| f64::from(v)),
            U32(c) => c.first().map(|&v| f64::from(v)),
            I16(c) => c.first().map(|&v| f64::from(v)),
            U16(c) => c.first().map(|&v| f64::from(v)),
            U8(c) => c.first().map(|&v| f64::from(v)),
            Str(s) => s.trim().parse().ok(),
            Strs(c) => c.first().and_then(|s| s.trim().parse().ok()),
            _ => None,
        }
    }

    /// Read the first value as a signed 64-bit integer, if the value is
    /// integral or a string in decimal notation.
    pub fn to_i64(&self) -> Option<i64> {
        use PrimitiveValue::*;
        match self {
            I32(c) => c.first().map(|&v| i64::from(v)),
            U32(c) => c.first().map(|&v| i64::from(v)),
            I16(c) => c.first().map(|&v| i64::from(v)),
            U16(c) => c.first().map(|&v| i64::from(v)),
            U8(c) => c.first().map(|&v| i64::from(v)),
            Str(s) => s.trim().parse().ok(),
            Strs(c) => c.first().and_then(|s| s.trim().parse().ok()),
            _ => None,
        }
    }

    /// Read the first value as an unsigned 16-bit integer.
    pub fn to_u16(&self) -> Option<u16> {
        self.to_i64().and_then(|v| u16::try_from(v).ok())
    }

    /// Obtain the value's bytes, when it holds raw byte data.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            PrimitiveValue::U8(c) => Some(c),
            _ => None,
        }
    }
}

impl From<&str> for PrimitiveValue {
    fn from(s: &str) -> Self {
        PrimitiveValue::Str(s.to_owned())
    }
}

impl From<String> for PrimitiveValue {
    fn from(s: String) -> Self {
        PrimitiveValue::Str(s)
    }
}
