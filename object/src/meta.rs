//! Handling of the file preamble and magic marker.

use tracing::warn;

/// The magic marker which follows the preamble.
pub const DICM_MAGIC_CODE: [u8; 4] = *b"DICM";

/// The size of the opaque file preamble, in bytes.
pub const PREAMBLE_LENGTH: usize = 128;

/// Read the 128-byte preamble and check the `DICM` magic marker.
///
/// Returns the preamble bytes and the position at which element
/// reading should start. When the marker is absent (or the buffer is
/// too short to hold it), the mismatch is logged and reading restarts
/// at offset 0 with an empty preamble; files missing the preamble
/// entirely still parse when they open with a valid meta group.
pub fn read_preamble(buf: &[u8]) -> (Vec<u8>, usize) {
    let magic_end = PREAMBLE_LENGTH + DICM_MAGIC_CODE.len();
    if buf.len() >= magic_end && buf[PREAMBLE_LENGTH..magic_end] == DICM_MAGIC_CODE {
        (buf[..PREAMBLE_LENGTH].to_vec(), magic_end)
    } else {
        warn!("the DICM magic marker is missing, reading from the start of the buffer");
        (Vec::new(), 0)
    }
}
