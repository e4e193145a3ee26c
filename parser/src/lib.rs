#![deny(unsafe_code)]
#![warn(missing_docs)]
//! Byte-level DICOM parsing for the `dicom-lite` reader.
//!
//! This crate turns a byte buffer into data elements: it provides the
//! bounded [`ByteCursor`] over the input, primitive decoding in either
//! byte order, element header decoding for the explicit and implicit
//! VR forms, conversion of raw values into typed [`PrimitiveValue`]s,
//! discovery of the data set encoding, and the [`DataSetReader`] loop
//! which ties these together.
//!
//! Reading is permissive by design: anomalies are logged through
//! `tracing` and recovery is local wherever the original bytes allow
//! it, so a damaged file still yields every element parsed before the
//! damage.
//!
//! [`PrimitiveValue`]: dicom_lite_core::PrimitiveValue

pub mod convert;
pub mod dataset;
pub mod decode;
pub mod detect;
pub mod source;

pub use byteordered::Endianness;

pub use crate::convert::convert_value;
pub use crate::dataset::{DataSetReader, StopWhen};
pub use crate::source::ByteCursor;
