//! Reading of flat data sets from a byte buffer.

pub mod read;

use dicom_lite_core::{Length, VR};

pub use self::read::DataSetReader;

/// A predicate deciding whether a data set read should stop *before*
/// consuming the probed element header.
///
/// The arguments are the probed element's group number, its VR when
/// the encoding provides one, and its announced value length.
pub type StopWhen = fn(u16, Option<VR>, Length) -> bool;

/// Stop predicate for the file meta block: stop at the first element
/// outside group `0x0002`.
pub fn outside_file_meta(group: u16, _vr: Option<VR>, _len: Length) -> bool {
    group != 0x0002
}

/// Stop predicate for the command set block: stop at the first element
/// outside group `0x0000`.
pub fn outside_command_set(group: u16, _vr: Option<VR>, _len: Length) -> bool {
    group != 0x0000
}
