//! Element header decoding, for the explicit and implicit VR forms
//! in either byte order.

pub mod basic;
pub mod explicit;
pub mod implicit;

use crate::source::OutOfBounds;
use snafu::{Backtrace, Snafu};

pub use self::basic::BasicDecoder;
pub use self::explicit::ExplicitVrDecoder;
pub use self::implicit::ImplicitVrDecoder;

/// An error decoding an element header from the byte stream.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum Error {
    /// Fewer than 8 bytes were available for the element header.
    #[snafu(display("could not read element header at position {}", position))]
    ReadHeader {
        /// position of the attempted header read
        position: usize,
        /// the underlying bounds failure
        #[snafu(backtrace)]
        source: OutOfBounds,
    },

    /// The 32-bit extended length field was truncated.
    #[snafu(display("could not read extended value length at position {}", position))]
    ReadExtendedLength {
        /// position of the element whose length was requested
        position: usize,
        /// the underlying bounds failure
        #[snafu(backtrace)]
        source: OutOfBounds,
    },

    /// A fixed-width header field could not be decoded.
    #[snafu(display("could not decode header field at position {}", position))]
    DecodeField {
        /// position of the element being decoded
        position: usize,
        /// the underlying read failure
        source: std::io::Error,
        /// backtrace of the failure
        backtrace: Backtrace,
    },
}

/// Result alias for element header decoding.
pub type Result<T, E = Error> = std::result::Result<T, E>;
