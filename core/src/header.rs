//! Element headers, value lengths, and the parsed data element type.

use crate::dictionary::TagInfo;
use crate::tag::Tag;
use crate::value::PrimitiveValue;
use crate::vr::VR;
use std::borrow::Cow;
use std::fmt;

/// A trait for types which carry a DICOM element header.
pub trait Header {
    /// Retrieve the element's tag as a `(group, element)` pair.
    fn tag(&self) -> Tag;

    /// Retrieve the element's value representation.
    fn vr(&self) -> VR;

    /// Retrieve the value length as specified by the element header,
    /// in bytes.
    fn length(&self) -> Length;
}

/// A type for representing data element value lengths, in bytes.
///
/// An internal value of `0xFFFF_FFFF` represents an undefined
/// (unspecified) length, typical of sequences and encapsulated pixel
/// data, which this reader recognizes but does not traverse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Length(pub u32);

const UNDEFINED_LEN: u32 = 0xFFFF_FFFF;

impl Length {
    /// A length that is undefined.
    pub const UNDEFINED: Self = Length(UNDEFINED_LEN);

    /// Check whether this length is undefined (unspecified).
    #[inline]
    pub fn is_undefined(self) -> bool {
        self.0 == UNDEFINED_LEN
    }

    /// Fetch the concrete length value, if defined.
    #[inline]
    pub fn get(self) -> Option<u32> {
        if self.is_undefined() {
            None
        } else {
            Some(self.0)
        }
    }

    /// Whether the length is defined and even.
    ///
    /// The standard requires element values to span an even number of
    /// bytes; odd lengths are tolerated by this reader but reported.
    #[inline]
    pub fn is_even(self) -> bool {
        !self.is_undefined() && self.0 % 2 == 0
    }
}

impl From<u32> for Length {
    #[inline]
    fn from(o: u32) -> Self {
        Length(o)
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_undefined() {
            f.write_str("U/L")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// A data element header, as decoded directly from the byte stream.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct DataElementHeader {
    /// the element's attribute tag
    pub tag: Tag,
    /// the element's value representation
    pub vr: VR,
    /// the length of the value data
    pub len: Length,
}

impl DataElementHeader {
    /// Create a new data element header with the given properties.
    pub fn new<T: Into<Tag>>(tag: T, vr: VR, len: Length) -> DataElementHeader {
        DataElementHeader {
            tag: tag.into(),
            vr,
            len,
        }
    }
}

impl Header for DataElementHeader {
    #[inline]
    fn tag(&self) -> Tag {
        self.tag
    }

    #[inline]
    fn vr(&self) -> VR {
        self.vr
    }

    #[inline]
    fn length(&self) -> Length {
        self.len
    }
}

/// A parsed data element.
///
/// Elements are created once during parsing and never mutated. Aside
/// from the decoded header, each element keeps the raw value bytes
/// exactly as found in the stream, the converted [`PrimitiveValue`],
/// and the dictionary information resolved for its tag.
#[derive(Debug, PartialEq, Clone)]
pub struct DataElement {
    header: DataElementHeader,
    keyword: Cow<'static, str>,
    name: Cow<'static, str>,
    multiplicity: Cow<'static, str>,
    retired: bool,
    data: Vec<u8>,
    value: PrimitiveValue,
}

impl DataElement {
    /// Construct a data element from its parsed parts.
    pub fn new(
        header: DataElementHeader,
        info: TagInfo,
        data: Vec<u8>,
        value: PrimitiveValue,
    ) -> Self {
        DataElement {
            header,
            keyword: info.keyword,
            name: info.name,
            multiplicity: info.vm,
            retired: info.retired,
            data,
            value,
        }
    }

    /// The element's header.
    #[inline]
    pub fn header(&self) -> &DataElementHeader {
        &self.header
    }

    /// The dictionary keyword for this element's tag,
    /// `"Unknown"` for unrecognized tags,
    /// or `"Unknown-PrivateTag"` for private tags.
    #[inline]
    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    /// The dictionary name for this element's tag.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The dictionary value multiplicity descriptor (e.g. `"1"`, `"1-n"`).
    #[inline]
    pub fn multiplicity(&self) -> &str {
        &self.multiplicity
    }

    /// Whether the attribute is retired in the standard's dictionary.
    #[inline]
    pub fn retired(&self) -> bool {
        self.retired
    }

    /// The raw value bytes, exactly as found in the stream.
    #[inline]
    pub fn raw_value(&self) -> &[u8] {
        &self.data
    }

    /// The converted value.
    #[inline]
    pub fn value(&self) -> &PrimitiveValue {
        &self.value
    }
}

impl Header for DataElement {
    #[inline]
    fn tag(&self) -> Tag {
        self.header.tag
    }

    #[inline]
    fn vr(&self) -> VR {
        self.header.vr
    }

    #[inline]
    fn length(&self) -> Length {
        self.header.len
    }
}
