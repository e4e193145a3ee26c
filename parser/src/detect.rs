//! Discovery of the data set encoding: implicit vs explicit VR,
//! and little vs big endian.

use crate::decode::BasicDecoder;
use crate::source::ByteCursor;
use dicom_lite_core::uids;
use dicom_lite_core::VR;
use tracing::{debug, warn};

/// Probe the bytes at the cursor to decide whether the upcoming
/// elements are encoded in implicit VR.
///
/// The 2 bytes which would hold a VR code in explicit encoding are
/// inspected: when they do not look like a code (a broad uppercase
/// test, `0x40..=0x5A`), the stream is taken to be implicit. Inside a
/// sequence the caller's assumption is trusted as-is, and when not
/// enough bytes remain the assumption is returned unchanged.
pub fn is_implicit_vr(cursor: &ByteCursor, assumed: bool, is_sequence: bool) -> bool {
    if is_sequence && assumed {
        return true;
    }
    let probe = match cursor.peek(6) {
        Ok(probe) => probe,
        Err(_) => return assumed,
    };
    !probe[4..6].iter().all(|&b| (0x40..0x5B).contains(&b))
}

/// Determine the data set encoding as the pair
/// `(implicit_vr, little_endian)`.
///
/// When a transfer syntax UID is known it is authoritative; otherwise
/// the bytes at the cursor are probed: a valid VR code means explicit
/// encoding, and a probed group number of `0x0400` or above is taken
/// as a big endian hint. The byte probe is a fallback of last resort
/// and its big endian heuristic is weak by nature.
pub fn read_or_guess_encoding(cursor: &ByteCursor, transfer_syntax: Option<&str>) -> (bool, bool) {
    if cursor.is_empty() {
        return (true, true);
    }
    let Some(uid) = transfer_syntax else {
        return guess_encoding(cursor);
    };
    match uid.trim_end_matches(['\0', ' ']) {
        uids::IMPLICIT_VR_LITTLE_ENDIAN => (true, true),
        uids::EXPLICIT_VR_LITTLE_ENDIAN => (false, true),
        uids::EXPLICIT_VR_BIG_ENDIAN => (false, false),
        uids::DEFLATED_EXPLICIT_VR_LITTLE_ENDIAN => {
            warn!("deflated transfer syntax is not implemented");
            (true, true)
        }
        other => {
            debug!(
                "unrecognized transfer syntax {:?}, assuming explicit VR little endian",
                other
            );
            (false, true)
        }
    }
}

fn guess_encoding(cursor: &ByteCursor) -> (bool, bool) {
    let probe = match cursor.peek(6) {
        Ok(probe) => probe,
        Err(_) => return (true, true),
    };
    if VR::from_binary([probe[4], probe[5]]).is_none() {
        return (true, true);
    }
    let basic = BasicDecoder::little_endian();
    match basic.read_u16(&probe[0..2]) {
        // reading a big endian group little-endian inflates it
        Ok(group) if group >= 0x0400 => (false, false),
        Ok(_) => (false, true),
        Err(_) => (true, true),
    }
}
