//! Decoding of primitive fixed-width values in either byte order.

use byteordered::{ByteOrdered, Endianness};
use dicom_lite_core::Tag;

type Result<T> = std::io::Result<T>;

/// A decoder of DICOM primitive values from byte slices,
/// with the byte order resolved at run time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BasicDecoder {
    endianness: Endianness,
}

impl BasicDecoder {
    /// Create a basic decoder for the given byte order.
    pub fn new(endianness: Endianness) -> Self {
        BasicDecoder { endianness }
    }

    /// Create a little endian basic decoder.
    pub fn little_endian() -> Self {
        BasicDecoder::new(Endianness::Little)
    }

    /// Create a big endian basic decoder.
    pub fn big_endian() -> Self {
        BasicDecoder::new(Endianness::Big)
    }

    /// The byte order this decoder reads in.
    pub fn endianness(&self) -> Endianness {
        self.endianness
    }

    /// Decode an unsigned 16-bit integer from the start of the slice.
    pub fn read_u16(&self, data: &[u8]) -> Result<u16> {
        ByteOrdered::runtime(data, self.endianness).read_u16()
    }

    /// Decode an unsigned 32-bit integer from the start of the slice.
    pub fn read_u32(&self, data: &[u8]) -> Result<u32> {
        ByteOrdered::runtime(data, self.endianness).read_u32()
    }

    /// Decode a signed 16-bit integer from the start of the slice.
    pub fn read_i16(&self, data: &[u8]) -> Result<i16> {
        ByteOrdered::runtime(data, self.endianness).read_i16()
    }

    /// Decode a signed 32-bit integer from the start of the slice.
    pub fn read_i32(&self, data: &[u8]) -> Result<i32> {
        ByteOrdered::runtime(data, self.endianness).read_i32()
    }

    /// Decode a 32-bit floating point number from the start of the slice.
    pub fn read_f32(&self, data: &[u8]) -> Result<f32> {
        ByteOrdered::runtime(data, self.endianness).read_f32()
    }

    /// Decode a 64-bit floating point number from the start of the slice.
    pub fn read_f64(&self, data: &[u8]) -> Result<f64> {
        ByteOrdered::runtime(data, self.endianness).read_f64()
    }

    /// Decode an attribute tag (two consecutive 16-bit integers)
    /// from the start of the slice.
    pub fn read_tag(&self, data: &[u8]) -> Result<Tag> {
        let mut source = ByteOrdered::runtime(data, self.endianness);
        let group = source.read_u16()?;
        let element = source.read_u16()?;
        Ok(Tag(group, element))
    }
}
