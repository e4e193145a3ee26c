//! Explicit VR element header decoding.

use super::{
    BasicDecoder, DecodeFieldSnafu, ImplicitVrDecoder, ReadExtendedLengthSnafu, ReadHeaderSnafu,
    Result,
};
use crate::source::ByteCursor;
use byteordered::Endianness;
use dicom_lite_core::{DataElementHeader, Length, VR};
use snafu::ResultExt;
use tracing::warn;

/// A decoder for element headers in the explicit VR form.
///
/// The short form is `group(u16) element(u16) vr(2×ascii) length(u16)`,
/// 8 bytes. Representations with extended length (`OB OW OF SQ UT UN`)
/// reuse the 16-bit length position as a reserved field and carry the
/// actual length in the following 4 bytes, for a 12-byte header.
///
/// When the two VR bytes are not both uppercase ASCII letters, the
/// element is taken to be implicit VR after all and the same 8 bytes
/// are re-decoded in that form. This is the defensive fallback for
/// streams which intermix encoding modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExplicitVrDecoder {
    basic: BasicDecoder,
    fallback: ImplicitVrDecoder,
}

impl ExplicitVrDecoder {
    /// Create an explicit VR header decoder for the given byte order.
    pub fn new(endianness: Endianness) -> Self {
        ExplicitVrDecoder {
            basic: BasicDecoder::new(endianness),
            fallback: ImplicitVrDecoder::new(endianness),
        }
    }

    /// Decode one element header at the cursor position,
    /// without advancing the cursor.
    ///
    /// Returns the header and its encoded size in bytes (8 or 12).
    pub fn decode_header(&self, cursor: &ByteCursor) -> Result<(DataElementHeader, usize)> {
        let position = cursor.position();
        let buf = cursor.peek(8).context(ReadHeaderSnafu { position })?;
        let tag = self
            .basic
            .read_tag(&buf[0..4])
            .context(DecodeFieldSnafu { position })?;

        let vr_bytes = [buf[4], buf[5]];
        if !vr_bytes.iter().all(u8::is_ascii_uppercase) {
            warn!(
                "element {} at position {} carries no VR code, re-reading header as implicit VR",
                tag, position
            );
            return self.fallback.decode_header(cursor);
        }

        // an unrecognized code always takes the short length form,
        // so membership in the extended-length set is checked before
        // the fallback to UN
        let parsed_vr = VR::from_binary(vr_bytes);
        let extended_length = parsed_vr.map(VR::has_extended_length).unwrap_or(false);
        let vr = parsed_vr.unwrap_or_else(|| {
            warn!(
                "element {} at position {} has unrecognized VR code {:?}, reading value as unknown",
                tag,
                position,
                std::str::from_utf8(&vr_bytes).unwrap_or("??"),
            );
            VR::UN
        });

        if extended_length {
            // the 16-bit length position is a reserved field here;
            // the true length is the 4 bytes that follow
            let len_buf = cursor
                .slice_at(position + 8, 4)
                .context(ReadExtendedLengthSnafu { position })?;
            let len = self
                .basic
                .read_u32(len_buf)
                .context(DecodeFieldSnafu { position })?;
            Ok((DataElementHeader::new(tag, vr, Length(len)), 12))
        } else {
            let len = self
                .basic
                .read_u16(&buf[6..8])
                .context(DecodeFieldSnafu { position })?;
            Ok((DataElementHeader::new(tag, vr, Length(u32::from(len))), 8))
        }
    }
}
