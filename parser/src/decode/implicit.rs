//! Implicit VR element header decoding.

use super::{BasicDecoder, DecodeFieldSnafu, ReadHeaderSnafu, Result};
use crate::source::ByteCursor;
use byteordered::Endianness;
use dicom_lite_core::dictionary;
use dicom_lite_core::{DataElementHeader, Length};
use snafu::ResultExt;

/// A decoder for element headers in the implicit VR form:
/// `group(u16) element(u16) length(u32)`, 8 bytes.
///
/// The header carries no VR; it is resolved through the attribute
/// dictionary, which yields `UL` for group length elements and `UN`
/// for private and unrecognized tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImplicitVrDecoder {
    basic: BasicDecoder,
}

impl ImplicitVrDecoder {
    /// Create an implicit VR header decoder for the given byte order.
    pub fn new(endianness: Endianness) -> Self {
        ImplicitVrDecoder {
            basic: BasicDecoder::new(endianness),
        }
    }

    /// Decode one element header at the cursor position,
    /// without advancing the cursor.
    ///
    /// Returns the header and its encoded size in bytes (always 8).
    pub fn decode_header(&self, cursor: &ByteCursor) -> Result<(DataElementHeader, usize)> {
        let position = cursor.position();
        let buf = cursor.peek(8).context(ReadHeaderSnafu { position })?;
        let tag = self
            .basic
            .read_tag(&buf[0..4])
            .context(DecodeFieldSnafu { position })?;
        let len = self
            .basic
            .read_u32(&buf[4..8])
            .context(DecodeFieldSnafu { position })?;
        let vr = dictionary::resolve(tag).vr;
        Ok((DataElementHeader::new(tag, vr, Length(len)), 8))
    }
}
