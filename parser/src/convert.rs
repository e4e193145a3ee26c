//! Conversion of raw element values into typed primitive values,
//! directed by the element's value representation.

use crate::decode::BasicDecoder;
use byteordered::Endianness;
use dicom_lite_core::{PrimitiveValue, C, VR};
use smallvec::SmallVec;
use tracing::warn;

/// Convert an element's raw value bytes into a [`PrimitiveValue`],
/// according to its value representation and byte order.
///
/// Conversion never fails: numeric text items which do not parse are
/// reported and dropped, and representations with no decoding rule
/// keep their raw bytes. A trailing chunk shorter than the value's
/// fixed width is reported and dropped as well.
pub fn convert_value(vr: VR, data: &[u8], endianness: Endianness) -> PrimitiveValue {
    if data.is_empty() {
        return PrimitiveValue::Empty;
    }
    let basic = BasicDecoder::new(endianness);
    match vr {
        VR::AE
        | VR::AS
        | VR::CS
        | VR::DA
        | VR::DT
        | VR::LO
        | VR::PN
        | VR::SH
        | VR::TM
        | VR::UI => convert_strings(data),
        // never multi-valued
        VR::ST | VR::LT | VR::UT => PrimitiveValue::Str(trim_text(
            String::from_utf8_lossy(data).as_ref(),
        )),
        VR::IS => {
            let values: C<i32> = parse_numeric_items(data, VR::IS);
            PrimitiveValue::I32(values)
        }
        VR::DS => {
            let values: C<f64> = parse_numeric_items(data, VR::DS);
            PrimitiveValue::F64(values)
        }
        VR::US => PrimitiveValue::U16(convert_binary(data, 2, vr, |c| basic.read_u16(c))),
        VR::SS => PrimitiveValue::I16(convert_binary(data, 2, vr, |c| basic.read_i16(c))),
        VR::UL => PrimitiveValue::U32(convert_binary(data, 4, vr, |c| basic.read_u32(c))),
        VR::SL => PrimitiveValue::I32(convert_binary(data, 4, vr, |c| basic.read_i32(c))),
        VR::FL => PrimitiveValue::F32(convert_binary(data, 4, vr, |c| basic.read_f32(c))),
        VR::FD => PrimitiveValue::F64(convert_binary(data, 8, vr, |c| basic.read_f64(c))),
        VR::AT => PrimitiveValue::Tags(convert_binary(data, 4, vr, |c| basic.read_tag(c))),
        // kept as raw bytes: no conversion is defined (OB/OW/OF/UN),
        // or the payload is not decoded by this reader (SQ)
        VR::OB | VR::OW | VR::OF | VR::UN | VR::SQ => {
            PrimitiveValue::U8(SmallVec::from_slice(data))
        }
    }
}

/// Remove the trailing NUL and space padding of a text value.
fn trim_text(text: &str) -> String {
    text.trim_end_matches(['\0', ' ']).to_owned()
}

fn convert_strings(data: &[u8]) -> PrimitiveValue {
    let text = String::from_utf8_lossy(data);
    let mut items: C<String> = text.split('\\').map(trim_text).collect();
    if items.len() == 1 {
        PrimitiveValue::Str(items.remove(0))
    } else {
        PrimitiveValue::Strs(items)
    }
}

fn parse_numeric_items<T: std::str::FromStr>(data: &[u8], vr: VR) -> C<T> {
    let text = String::from_utf8_lossy(data);
    text.split('\\')
        .filter_map(|item| {
            let item = item.trim_matches(['\0', ' ']);
            if item.is_empty() {
                return None;
            }
            match item.parse() {
                Ok(value) => Some(value),
                Err(_) => {
                    warn!("ignoring {} item {:?}: not a valid number", vr, item);
                    None
                }
            }
        })
        .collect()
}

fn convert_binary<T>(
    data: &[u8],
    width: usize,
    vr: VR,
    read: impl Fn(&[u8]) -> std::io::Result<T>,
) -> C<T> {
    if data.len() % width != 0 {
        warn!(
            "{} value of {} bytes is not a multiple of {}, dropping the trailing bytes",
            vr,
            data.len(),
            width
        );
    }
    data.chunks_exact(width)
        .filter_map(|chunk| read(chunk).ok())
        .collect()
}
