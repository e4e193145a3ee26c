//! The data set reading loop.

use super::StopWhen;
use crate::convert::convert_value;
use crate::decode::{ExplicitVrDecoder, ImplicitVrDecoder};
use crate::detect;
use crate::source::ByteCursor;
use byteordered::Endianness;
use dicom_lite_core::dictionary;
use dicom_lite_core::{DataElement, Header};
use tracing::warn;

/// A reader which yields the data elements of one flat data set,
/// in stream order.
///
/// The reader is an iterator over [`DataElement`]s. It terminates at
/// the end of the buffer, when the stop predicate matches an element
/// header (which is then left unconsumed, so a following block can be
/// read from [`position`](Self::position)), or upon content it cannot
/// traverse (an undefined or empty value length, or a truncated
/// element). Termination is never an error: everything parsed up to
/// that point stands, and the cause is logged.
#[derive(Debug)]
pub struct DataSetReader<'a> {
    cursor: ByteCursor<'a>,
    endianness: Endianness,
    implicit: ImplicitVrDecoder,
    explicit: ExplicitVrDecoder,
    implicit_vr: bool,
    stop_when: Option<StopWhen>,
    hard_break: bool,
}

impl<'a> DataSetReader<'a> {
    /// Create a data set reader starting at the given cursor.
    ///
    /// `implicit_vr_assumed` is the encoding suggested by the caller
    /// (from the transfer syntax, or the conventions of the block
    /// being read); the bytes at the cursor are probed and may
    /// override it when they clearly disagree.
    pub fn new(
        cursor: ByteCursor<'a>,
        implicit_vr_assumed: bool,
        endianness: Endianness,
        stop_when: Option<StopWhen>,
    ) -> Self {
        let implicit_vr = detect::is_implicit_vr(&cursor, implicit_vr_assumed, true);
        if implicit_vr != implicit_vr_assumed {
            warn!(
                "data set at position {} looks {} VR, overriding the caller's assumption",
                cursor.position(),
                if implicit_vr { "implicit" } else { "explicit" },
            );
        }
        DataSetReader {
            cursor,
            endianness,
            implicit: ImplicitVrDecoder::new(endianness),
            explicit: ExplicitVrDecoder::new(endianness),
            implicit_vr,
            stop_when,
            hard_break: false,
        }
    }

    /// The current position in the underlying buffer.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// Whether this reader settled on implicit VR decoding.
    pub fn is_implicit_vr(&self) -> bool {
        self.implicit_vr
    }

    /// The byte order this reader decodes in.
    pub fn endianness(&self) -> Endianness {
        self.endianness
    }
}

impl Iterator for DataSetReader<'_> {
    type Item = DataElement;

    fn next(&mut self) -> Option<DataElement> {
        if self.hard_break || self.cursor.remaining() < 8 {
            return None;
        }

        let decoded = if self.implicit_vr {
            self.implicit.decode_header(&self.cursor)
        } else {
            self.explicit.decode_header(&self.cursor)
        };
        let (header, header_size) = match decoded {
            Ok(decoded) => decoded,
            Err(e) => {
                warn!(
                    "stopping data set read at position {}: {}",
                    self.cursor.position(),
                    e
                );
                self.hard_break = true;
                return None;
            }
        };

        if let Some(stop_when) = self.stop_when {
            let vr = if self.implicit_vr {
                None
            } else {
                Some(header.vr())
            };
            if stop_when(header.tag().group(), vr, header.length()) {
                // the probed header stays unconsumed
                self.hard_break = true;
                return None;
            }
        }
        self.cursor.advance(header_size);

        let len = match header.length().get() {
            None => {
                warn!(
                    "element {} has undefined length; sequence content is not traversed, \
                     stopping data set read",
                    header.tag()
                );
                self.hard_break = true;
                return None;
            }
            Some(0) => {
                warn!(
                    "element {} ({}) has an empty value, stopping data set read",
                    header.tag(),
                    header.vr()
                );
                self.hard_break = true;
                return None;
            }
            Some(len) => len as usize,
        };
        if !header.length().is_even() {
            warn!("element {} has odd value length {}", header.tag(), len);
        }

        let data = match self.cursor.take(len) {
            Ok(data) => data,
            Err(e) => {
                warn!("element {} value is truncated: {}", header.tag(), e);
                self.hard_break = true;
                return None;
            }
        };

        let info = dictionary::resolve(header.tag());
        let value = convert_value(header.vr(), data, self.endianness);
        Some(DataElement::new(header, info, data.to_vec(), value))
    }
}

impl std::iter::FusedIterator for DataSetReader<'_> {}

#[cfg(test)]
mod tests {
    use super::DataSetReader;
    use crate::dataset::{outside_command_set, outside_file_meta};
    use crate::source::ByteCursor;
    use byteordered::Endianness;
    use dicom_lite_core::{Header, PrimitiveValue, Tag, VR};

    // two file meta elements followed by the first data set element:
    //  (0002,0010) UI, length 20, "1.2.840.10008.1.2.1\0"
    //  (0002,0013) SH, length 6, "dl-01\0"
    //  (0008,0060) CS, length 2, "CT"
    const RAW_META: &[u8] = &[
        0x02, 0x00, 0x10, 0x00, b'U', b'I', 0x14, 0x00, b'1', b'.', b'2', b'.', b'8', b'4', b'0',
        b'.', b'1', b'0', b'0', b'0', b'8', b'.', b'1', b'.', b'2', b'.', b'1', 0x00, 0x02, 0x00,
        0x13, 0x00, b'S', b'H', 0x06, 0x00, b'd', b'l', b'-', b'0', b'1', 0x00, 0x08, 0x00, 0x60,
        0x00, b'C', b'S', 0x02, 0x00, b'C', b'T',
    ];

    #[test]
    fn stops_before_the_first_foreign_group() {
        let cursor = ByteCursor::new(RAW_META);
        let mut reader =
            DataSetReader::new(cursor, false, Endianness::Little, Some(outside_file_meta));

        let elem = reader.next().expect("should read the transfer syntax");
        assert_eq!(elem.tag(), Tag(0x0002, 0x0010));
        assert_eq!(elem.keyword(), "TransferSyntaxUID");
        assert_eq!(
            elem.value(),
            &PrimitiveValue::Str("1.2.840.10008.1.2.1".into()),
        );

        let elem = reader.next().expect("should read the version name");
        assert_eq!(elem.tag(), Tag(0x0002, 0x0013));

        // the (0008,0060) header must not be consumed
        assert!(reader.next().is_none());
        assert_eq!(reader.position(), RAW_META.len() - 10);
        assert!(reader.next().is_none());
    }

    #[test]
    fn continues_into_the_next_block() {
        let cursor = ByteCursor::new(RAW_META);
        let mut reader =
            DataSetReader::new(cursor, false, Endianness::Little, Some(outside_file_meta));
        for _ in reader.by_ref() {}

        let cursor = ByteCursor::with_position(RAW_META, reader.position());
        let mut reader = DataSetReader::new(cursor, false, Endianness::Little, None);
        let elem = reader.next().expect("should read the modality");
        assert_eq!(elem.tag(), Tag(0x0008, 0x0060));
        assert_eq!(elem.value(), &PrimitiveValue::Str("CT".into()));
        assert!(reader.next().is_none());
    }

    #[test]
    fn empty_command_set_reads_as_nothing() {
        let cursor = ByteCursor::new(RAW_META);
        let mut reader =
            DataSetReader::new(cursor, false, Endianness::Little, Some(outside_command_set));
        assert!(reader.next().is_none());
        assert_eq!(reader.position(), 0);
    }

    #[test]
    fn reads_implicit_vr_despite_explicit_assumption() {
        //  (0010,0020) length 8, "ID123   ", implicit VR little endian
        let raw = [
            0x10, 0x00, 0x20, 0x00, 0x08, 0x00, 0x00, 0x00, b'I', b'D', b'1', b'2', b'3', b' ',
            b' ', b' ',
        ];
        let mut reader =
            DataSetReader::new(ByteCursor::new(&raw), false, Endianness::Little, None);
        assert!(reader.is_implicit_vr());
        let elem = reader.next().expect("should read the patient ID");
        assert_eq!(elem.tag(), Tag(0x0010, 0x0020));
        assert_eq!(elem.vr(), VR::LO);
        assert_eq!(elem.value(), &PrimitiveValue::Str("ID123".into()));
    }

    #[test]
    fn undefined_length_terminates_the_read() {
        //  (0008,0060) CS "CT", then an SQ of undefined length
        let raw = [
            0x08, 0x00, 0x60, 0x00, b'C', b'S', 0x02, 0x00, b'C', b'T', 0x08, 0x00, 0x3F, 0x10,
            b'S', b'Q', 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF,
        ];
        let mut reader =
            DataSetReader::new(ByteCursor::new(&raw), false, Endianness::Little, None);
        assert!(reader.next().is_some());
        assert!(reader.next().is_none());
    }

    #[test]
    fn truncated_value_yields_a_partial_data_set() {
        //  (0008,0060) CS "CT", then a header announcing more bytes
        //  than the buffer holds
        let raw = [
            0x08, 0x00, 0x60, 0x00, b'C', b'S', 0x02, 0x00, b'C', b'T', 0x10, 0x00, 0x10, 0x00,
            b'P', b'N', 0x20, 0x00, b'D', b'O', b'E',
        ];
        let mut reader =
            DataSetReader::new(ByteCursor::new(&raw), false, Endianness::Little, None);
        let elem = reader.next().expect("the first element is intact");
        assert_eq!(elem.tag(), Tag(0x0008, 0x0060));
        assert!(reader.next().is_none());
    }

    #[test]
    fn private_elements_pass_through() {
        //  (0009,1001) UN, length 4, 0xDEADBEEF
        let raw = [
            0x09, 0x00, 0x01, 0x10, b'U', b'N', 0x00, 0x00, 0x04, 0x00, 0x00, 0x00, 0xDE, 0xAD,
            0xBE, 0xEF,
        ];
        let mut reader =
            DataSetReader::new(ByteCursor::new(&raw), false, Endianness::Little, None);
        let elem = reader.next().expect("should read the private element");
        assert_eq!(elem.keyword(), "Unknown-PrivateTag");
        assert_eq!(elem.raw_value(), &[0xDE, 0xAD, 0xBE, 0xEF]);
    }

    #[test]
    fn big_endian_values() {
        //  (0028,0010) US, length 2, value 512, explicit VR big endian
        let raw = [0x00, 0x28, 0x00, 0x10, b'U', b'S', 0x00, 0x02, 0x02, 0x00];
        let mut reader = DataSetReader::new(ByteCursor::new(&raw), false, Endianness::Big, None);
        let elem = reader.next().expect("should read the rows attribute");
        assert_eq!(elem.tag(), Tag(0x0028, 0x0010));
        assert_eq!(elem.value().to_u16(), Some(512));
    }
}
