//! Value Representation declarations.

use std::fmt;
use std::str::{from_utf8, FromStr};

/// An enum type for a DICOM value representation.
///
/// Only the representations which this reader can convert are listed;
/// an unrecognized code encountered in a data stream is decoded as
/// [`UN`](VR::UN), which keeps the value's raw bytes.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, PartialOrd, Ord)]
pub enum VR {
    /// Application Entity
    AE,
    /// Age String
    AS,
    /// Attribute Tag
    AT,
    /// Code String
    CS,
    /// Date
    DA,
    /// Decimal String
    DS,
    /// Date Time
    DT,
    /// Floating Point Single
    FL,
    /// Floating Point Double
    FD,
    /// Integer String
    IS,
    /// Long String
    LO,
    /// Long Text
    LT,
    /// Other Byte
    OB,
    /// Other Float
    OF,
    /// Other Word
    OW,
    /// Person Name
    PN,
    /// Short String
    SH,
    /// Signed Long
    SL,
    /// Sequence of Items
    SQ,
    /// Signed Short
    SS,
    /// Short Text
    ST,
    /// Time
    TM,
    /// Unique Identifier (UID)
    UI,
    /// Unsigned Long
    UL,
    /// Unknown
    UN,
    /// Unsigned Short
    US,
    /// Unlimited Text
    UT,
}

impl VR {
    /// Obtain the value representation corresponding to the given two bytes.
    /// Each byte should represent an alphabetic character in upper case.
    pub fn from_binary(chars: [u8; 2]) -> Option<Self> {
        from_utf8(chars.as_ref())
            .ok()
            .and_then(|s| VR::from_str(s).ok())
    }

    /// Retrieve a string representation of this VR.
    pub fn to_string(self) -> &'static str {
        use VR::*;
        match self {
            AE => "AE",
            AS => "AS",
            AT => "AT",
            CS => "CS",
            DA => "DA",
            DS => "DS",
            DT => "DT",
            FL => "FL",
            FD => "FD",
            IS => "IS",
            LO => "LO",
            LT => "LT",
            OB => "OB",
            OF => "OF",
            OW => "OW",
            PN => "PN",
            SH => "SH",
            SL => "SL",
            SQ => "SQ",
            SS => "SS",
            ST => "ST",
            TM => "TM",
            UI => "UI",
            UL => "UL",
            UN => "UN",
            US => "US",
            UT => "UT",
        }
    }

    /// Retrieve a copy of this VR's byte representation.
    /// The function returns two alphabetic characters in upper case.
    pub fn to_bytes(self) -> [u8; 2] {
        let bytes = self.to_string().as_bytes();
        [bytes[0], bytes[1]]
    }

    /// Whether the representation uses the extended explicit-VR header
    /// form, in which a 32-bit length follows a 2-byte reserved field.
    pub fn has_extended_length(self) -> bool {
        matches!(self, VR::OB | VR::OW | VR::OF | VR::SQ | VR::UT | VR::UN)
    }
}

/// An error type for invalid VR parsing from a string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseVrError;

impl fmt::Display for ParseVrError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("no such value representation")
    }
}

impl std::error::Error for ParseVrError {}

impl FromStr for VR {
    type Err = ParseVrError;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        use VR::*;
        match string {
            "AE" => Ok(AE),
            "AS" => Ok(AS),
            "AT" => Ok(AT),
            "CS" => Ok(CS),
            "DA" => Ok(DA),
            "DS" => Ok(DS),
            "DT" => Ok(DT),
            "FL" => Ok(FL),
            "FD" => Ok(FD),
            "IS" => Ok(IS),
            "LO" => Ok(LO),
            "LT" => Ok(LT),
            "OB" => Ok(OB),
            "OF" => Ok(OF),
            "OW" => Ok(OW),
            "PN" => Ok(PN),
            "SH" => Ok(SH),
            "SL" => Ok(SL),
            "SQ" => Ok(SQ),
            "SS" => Ok(SS),
            "ST" => Ok(ST),
            "TM" => Ok(TM),
            "UI" => Ok(UI),
            "UL" => Ok(UL),
            "UN" => Ok(UN),
            "US" => Ok(US),
            "UT" => Ok(UT),
            _ => Err(ParseVrError),
        }
    }
}

impl fmt::Display for VR {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(VR::to_string(*self))
    }
}

#[cfg(test)]
mod tests {
    use super::VR;

    #[test]
    fn vr_from_binary() {
        assert_eq!(VR::from_binary([b'U', b'I']), Some(VR::UI));
        assert_eq!(VR::from_binary([b'P', b'N']), Some(VR::PN));
        assert_eq!(VR::from_binary([b'O', b'B']), Some(VR::OB));
        // alphabetic but not a known code
        assert_eq!(VR::from_binary([b'Z', b'Z']), None);
        // not alphabetic at all
        assert_eq!(VR::from_binary([0x10, 0x00]), None);
    }

    #[test]
    fn vr_binary_round_trip() {
        for vr in [VR::AE, VR::DS, VR::OW, VR::SQ, VR::UT] {
            assert_eq!(VR::from_binary(vr.to_bytes()), Some(vr));
        }
    }

    #[test]
    fn extended_length_set() {
        for vr in [VR::OB, VR::OW, VR::OF, VR::SQ, VR::UT, VR::UN] {
            assert!(vr.has_extended_length(), "{} takes a 32-bit length", vr);
        }
        for vr in [VR::UI, VR::CS, VR::US, VR::PN, VR::DS, VR::AT] {
            assert!(!vr.has_extended_length(), "{} takes a 16-bit length", vr);
        }
    }
}
