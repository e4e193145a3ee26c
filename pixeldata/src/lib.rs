#![deny(unsafe_code)]
#![warn(missing_docs)]
//! Grayscale pixel reconstruction for the `dicom-lite` reader.
//!
//! [`pixel_colors`] turns the raw Pixel Data bytes of a parsed object
//! into displayable pixels: samples are assembled according to the
//! object's bit layout and signedness, passed through the modality
//! rescale and window level transforms, inverted for MONOCHROME1, and
//! rendered as `"#RRGGBB"` grayscale color strings, one per pixel, in
//! the order the samples appear in the data (no image geometry is
//! applied).
//!
//! Encapsulated (compressed) pixel data, multi-frame organization and
//! color photometric interpretations are out of scope.

pub mod attribute;
pub mod transform;

use dicom_lite_object::FileDataSet;
use snafu::{Backtrace, OptionExt, ResultExt, Snafu};
use tracing::warn;

pub use crate::attribute::ImagePixelModule;
pub use crate::transform::{Rescale, WindowLevel};

/// Photometric interpretation with low values rendering bright.
const MONOCHROME1: &str = "MONOCHROME1";

/// An error producing pixel colors from a parsed object.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum Error {
    /// The image pixel description is incomplete.
    #[snafu(display("could not gather the pixel description attributes"))]
    GetAttribute {
        /// the underlying attribute failure
        #[snafu(backtrace)]
        source: attribute::GetAttributeError,
    },

    /// The object carries no Pixel Data element.
    #[snafu(display("the object has no pixel data"))]
    MissingPixelData {
        /// backtrace of the failure
        backtrace: Backtrace,
    },

    /// The sample width is not one this reader can assemble.
    #[snafu(display("unsupported bit depth {} bits allocated", bits_allocated))]
    UnsupportedBitDepth {
        /// the announced bits allocated
        bits_allocated: u16,
        /// backtrace of the failure
        backtrace: Backtrace,
    },
}

/// Result alias for pixel reconstruction.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Reconstruct the object's pixels as grayscale CSS-style color
/// strings (`"#RRGGBB"` with equal channels), in sample order.
pub fn pixel_colors(obj: &FileDataSet) -> Result<Vec<String>> {
    let module = ImagePixelModule::from_object(obj).context(GetAttributeSnafu)?;
    let pixel_data = obj
        .element("PixelData")
        .context(MissingPixelDataSnafu)?
        .raw_value();

    let bytes_per_pixel = module.bytes_per_pixel();
    if !(1..=4).contains(&bytes_per_pixel) {
        return UnsupportedBitDepthSnafu {
            bits_allocated: module.bits_allocated,
        }
        .fail();
    }

    // when the high bit closes the stored range the sample bytes are
    // in little endian order, otherwise they are taken as big endian
    let little_endian_samples = module.high_bit + 1 == module.bits_stored;
    let invert = module.photometric_interpretation == MONOCHROME1;

    let chunks = pixel_data.chunks_exact(bytes_per_pixel);
    if !chunks.remainder().is_empty() {
        warn!(
            "pixel data of {} bytes is not a multiple of {}, dropping the trailing bytes",
            pixel_data.len(),
            bytes_per_pixel
        );
    }

    let colors = chunks
        .map(|chunk| {
            let sample = assemble_sample(chunk, little_endian_samples);
            let value = if module.is_signed() {
                sign_extend(sample, bytes_per_pixel * 8) as f64
            } else {
                sample as f64
            };
            let mut level = module.window.apply(module.rescale.apply(value));
            if invert {
                level = transform::invert(level);
            }
            format!("#{:02X}{:02X}{:02X}", level, level, level)
        })
        .collect();
    Ok(colors)
}

/// Assemble one unsigned sample from its bytes.
fn assemble_sample(chunk: &[u8], little_endian: bool) -> u64 {
    if little_endian {
        chunk
            .iter()
            .rev()
            .fold(0u64, |acc, &b| (acc << 8) | u64::from(b))
    } else {
        chunk.iter().fold(0u64, |acc, &b| (acc << 8) | u64::from(b))
    }
}

/// Reinterpret the low `bits` of a sample as two's complement.
fn sign_extend(sample: u64, bits: usize) -> i64 {
    let shift = 64 - bits;
    ((sample << shift) as i64) >> shift
}
