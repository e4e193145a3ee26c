//! Extraction of the image pixel description attributes
//! from a parsed object.

use crate::transform::{Rescale, WindowLevel};
use dicom_lite_object::FileDataSet;
use snafu::{Backtrace, OptionExt, Snafu};

/// Window center applied when the object carries none.
pub const DEFAULT_WINDOW_CENTER: f64 = 610.;
/// Window width applied when the object carries none.
pub const DEFAULT_WINDOW_WIDTH: f64 = 1221.;

/// An error fetching a pixel description attribute.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum GetAttributeError {
    /// A required attribute is absent or holds no usable value.
    #[snafu(display("missing required attribute `{}`", name))]
    MissingRequiredField {
        /// the attribute keyword
        name: &'static str,
        /// backtrace of the failure
        backtrace: Backtrace,
    },
}

/// Result alias for attribute extraction.
pub type Result<T, E = GetAttributeError> = std::result::Result<T, E>;

/// The image pixel description of an object: the attributes of group
/// `0x0028` which drive sample assembly and display mapping.
///
/// Bit layout, signedness and the photometric interpretation are
/// required; the window and rescale parameters fall back to fixed
/// defaults when the object does not carry them.
#[derive(Debug, Clone, PartialEq)]
pub struct ImagePixelModule {
    /// number of bits allocated per sample
    pub bits_allocated: u16,
    /// number of significant bits per sample
    pub bits_stored: u16,
    /// index of the most significant bit
    pub high_bit: u16,
    /// 0 for unsigned samples, 1 for two's complement
    pub pixel_representation: u16,
    /// the photometric interpretation code string
    pub photometric_interpretation: String,
    /// the window level for display mapping
    pub window: WindowLevel,
    /// the modality rescale function
    pub rescale: Rescale,
}

impl ImagePixelModule {
    /// Collect the pixel description attributes from a parsed object.
    pub fn from_object(obj: &FileDataSet) -> Result<Self> {
        let bits_allocated = required_u16(obj, "BitsAllocated")?;
        let bits_stored = required_u16(obj, "BitsStored")?;
        let high_bit = required_u16(obj, "HighBit")?;
        let pixel_representation = required_u16(obj, "PixelRepresentation")?;
        let photometric_interpretation = obj
            .element("PhotometricInterpretation")
            .map(|elem| elem.value().to_str().into_owned())
            .context(MissingRequiredFieldSnafu {
                name: "PhotometricInterpretation",
            })?;

        let center = numeric_or(obj, "WindowCenter", DEFAULT_WINDOW_CENTER);
        let width = numeric_or(obj, "WindowWidth", DEFAULT_WINDOW_WIDTH);
        let slope = numeric_or(obj, "RescaleSlope", 1.);
        let intercept = numeric_or(obj, "RescaleIntercept", 0.);

        Ok(ImagePixelModule {
            bits_allocated,
            bits_stored,
            high_bit,
            pixel_representation,
            photometric_interpretation,
            window: WindowLevel::new(center, width),
            rescale: Rescale::new(slope, intercept),
        })
    }

    /// Bytes per pixel sample, rounding the allocated bits up to
    /// whole bytes.
    pub fn bytes_per_pixel(&self) -> usize {
        (usize::from(self.bits_allocated) + 7) / 8
    }

    /// Whether the stored samples are in two's complement.
    pub fn is_signed(&self) -> bool {
        self.pixel_representation == 1
    }
}

fn required_u16(obj: &FileDataSet, name: &'static str) -> Result<u16> {
    obj.element(name)
        .and_then(|elem| elem.value().to_u16())
        .context(MissingRequiredFieldSnafu { name })
}

fn numeric_or(obj: &FileDataSet, name: &str, default: f64) -> f64 {
    obj.element(name)
        .and_then(|elem| elem.value().to_f64())
        .unwrap_or(default)
}
