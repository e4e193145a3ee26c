#![deny(unsafe_code)]
#![warn(missing_docs)]
//! High-level DICOM file reading for the `dicom-lite` reader.
//!
//! The entry point is [`read_file`], which takes the file's bytes and
//! produces a [`FileDataSet`]: the main dataset, the file meta
//! information block, any command set elements, the preamble, and the
//! encoding discovered for the main dataset.
//!
//! Reading is permissive. Anything recoverable (a missing magic
//! marker, a truncated element, content the reader cannot traverse)
//! is logged and reading carries on with what the bytes allow, so the
//! caller always receives every element parsed up to a failure point.
//! The only fatal condition is an empty input buffer.
//!
//! ```no_run
//! use dicom_lite_object::read_file;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let bytes = std::fs::read("image.dcm")?;
//! let obj = read_file(&bytes)?;
//! if let Some(elem) = obj.element("PatientName") {
//!     println!("patient: {}", elem.value().to_str());
//! }
//! # Ok(())
//! # }
//! ```

pub mod attribute;
pub mod mem;
pub mod meta;

use dicom_lite_core::{Header, Tag};
use dicom_lite_parser::dataset::{outside_command_set, outside_file_meta};
use dicom_lite_parser::{detect, ByteCursor, DataSetReader, Endianness};
use snafu::{ensure, Backtrace, Snafu};

pub use crate::attribute::ElementSelector;
pub use crate::mem::{DataSet, FileDataSet};

/// An error produced when reading a DICOM file.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum ReadError {
    /// The input buffer holds no bytes at all.
    #[snafu(display("cannot read a data set from an empty buffer"))]
    EmptyInput {
        /// backtrace of the failure
        backtrace: Backtrace,
    },
}

/// Result alias for file reading.
pub type Result<T, E = ReadError> = std::result::Result<T, E>;

/// The transfer syntax UID attribute in the file meta block.
const TRANSFER_SYNTAX_UID: Tag = Tag(0x0002, 0x0010);

/// Read a DICOM file from an in-memory byte buffer.
///
/// The reading order is: preamble and magic marker, file meta block
/// (explicit VR little endian, group `0x0002`), command set elements
/// (group `0x0000`), then the main dataset in the encoding named by
/// the meta block's Transfer Syntax UID, or guessed from the bytes
/// when no transfer syntax is present.
pub fn read_file(buf: &[u8]) -> Result<FileDataSet> {
    ensure!(!buf.is_empty(), EmptyInputSnafu);

    let (preamble, position) = meta::read_preamble(buf);

    // file meta: explicit VR little endian by definition
    let cursor = ByteCursor::with_position(buf, position);
    let mut reader =
        DataSetReader::new(cursor, false, Endianness::Little, Some(outside_file_meta));
    let meta: DataSet = reader.by_ref().collect();
    let position = reader.position();

    // command set elements, when present
    let cursor = ByteCursor::with_position(buf, position);
    let mut reader =
        DataSetReader::new(cursor, false, Endianness::Little, Some(outside_command_set));
    let command: DataSet = reader.by_ref().collect();
    let position = reader.position();

    // the encoding of the main dataset is governed by the meta block
    let transfer_syntax = meta
        .elements()
        .find(|elem| elem.tag() == TRANSFER_SYNTAX_UID)
        .map(|elem| elem.value().to_str().into_owned());
    let cursor = ByteCursor::with_position(buf, position);
    let (implicit_vr, little_endian) =
        detect::read_or_guess_encoding(&cursor, transfer_syntax.as_deref());
    let endianness = if little_endian {
        Endianness::Little
    } else {
        Endianness::Big
    };

    let reader = DataSetReader::new(cursor, implicit_vr, endianness, None);
    let dataset: DataSet = reader.collect();

    Ok(FileDataSet {
        preamble,
        meta,
        command,
        dataset,
        implicit_vr,
        little_endian,
    })
}
