#![deny(unsafe_code)]
#![warn(missing_docs)]
//! This crate contains the foundational types of the `dicom-lite`
//! reader: the attribute tag, value representation and length types,
//! element headers and parsed elements, the decoded primitive value,
//! the static attribute dictionary, and well-known transfer syntax
//! unique identifiers.
//!
//! No parsing happens here; see the `dicom-lite-parser` and
//! `dicom-lite-object` crates.

pub mod dictionary;
pub mod header;
pub mod tag;
pub mod uids;
pub mod value;
pub mod vr;

pub use crate::header::{DataElement, DataElementHeader, Header, Length};
pub use crate::tag::Tag;
pub use crate::value::{PrimitiveValue, C};
pub use crate::vr::VR;
