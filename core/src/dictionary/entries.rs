//! The static table of attribute dictionary entries.
//!
//! This is the subset of the standard's data element registry which the
//! reader needs to name and type the attributes it works with: the
//! command set group, the file meta group, common identification and
//! study attributes, the image pixel description group, and the pixel
//! data element itself. Ambiguous representations ("US or SS",
//! "OW or OB") are listed under their first alternative.

use super::DictionaryEntry as E;
use crate::tag::Tag;
use crate::vr::VR;

pub(crate) const ENTRIES: &[E] = &[
    // group 0x0000: command set
    E { tag: Tag(0x0000, 0x0002), keyword: "AffectedSOPClassUID", name: "Affected SOP Class UID", vr: VR::UI, vm: "1", retired: false },
    E { tag: Tag(0x0000, 0x0003), keyword: "RequestedSOPClassUID", name: "Requested SOP Class UID", vr: VR::UI, vm: "1", retired: false },
    E { tag: Tag(0x0000, 0x0100), keyword: "CommandField", name: "Command Field", vr: VR::US, vm: "1", retired: false },
    E { tag: Tag(0x0000, 0x0110), keyword: "MessageID", name: "Message ID", vr: VR::US, vm: "1", retired: false },
    E { tag: Tag(0x0000, 0x0120), keyword: "MessageIDBeingRespondedTo", name: "Message ID Being Responded To", vr: VR::US, vm: "1", retired: false },
    E { tag: Tag(0x0000, 0x0800), keyword: "CommandDataSetType", name: "Command Data Set Type", vr: VR::US, vm: "1", retired: false },
    E { tag: Tag(0x0000, 0x0900), keyword: "Status", name: "Status", vr: VR::US, vm: "1", retired: false },
    // group 0x0002: file meta information
    E { tag: Tag(0x0002, 0x0001), keyword: "FileMetaInformationVersion", name: "File Meta Information Version", vr: VR::OB, vm: "1", retired: false },
    E { tag: Tag(0x0002, 0x0002), keyword: "MediaStorageSOPClassUID", name: "Media Storage SOP Class UID", vr: VR::UI, vm: "1", retired: false },
    E { tag: Tag(0x0002, 0x0003), keyword: "MediaStorageSOPInstanceUID", name: "Media Storage SOP Instance UID", vr: VR::UI, vm: "1", retired: false },
    E { tag: Tag(0x0002, 0x0010), keyword: "TransferSyntaxUID", name: "Transfer Syntax UID", vr: VR::UI, vm: "1", retired: false },
    E { tag: Tag(0x0002, 0x0012), keyword: "ImplementationClassUID", name: "Implementation Class UID", vr: VR::UI, vm: "1", retired: false },
    E { tag: Tag(0x0002, 0x0013), keyword: "ImplementationVersionName", name: "Implementation Version Name", vr: VR::SH, vm: "1", retired: false },
    E { tag: Tag(0x0002, 0x0016), keyword: "SourceApplicationEntityTitle", name: "Source Application Entity Title", vr: VR::AE, vm: "1", retired: false },
    // group 0x0008: identification
    E { tag: Tag(0x0008, 0x0005), keyword: "SpecificCharacterSet", name: "Specific Character Set", vr: VR::CS, vm: "1-n", retired: false },
    E { tag: Tag(0x0008, 0x0008), keyword: "ImageType", name: "Image Type", vr: VR::CS, vm: "2-n", retired: false },
    E { tag: Tag(0x0008, 0x0010), keyword: "RecognitionCode", name: "Recognition Code", vr: VR::SH, vm: "1", retired: true },
    E { tag: Tag(0x0008, 0x0016), keyword: "SOPClassUID", name: "SOP Class UID", vr: VR::UI, vm: "1", retired: false },
    E { tag: Tag(0x0008, 0x0018), keyword: "SOPInstanceUID", name: "SOP Instance UID", vr: VR::UI, vm: "1", retired: false },
    E { tag: Tag(0x0008, 0x0020), keyword: "StudyDate", name: "Study Date", vr: VR::DA, vm: "1", retired: false },
    E { tag: Tag(0x0008, 0x0021), keyword: "SeriesDate", name: "Series Date", vr: VR::DA, vm: "1", retired: false },
    E { tag: Tag(0x0008, 0x0022), keyword: "AcquisitionDate", name: "Acquisition Date", vr: VR::DA, vm: "1", retired: false },
    E { tag: Tag(0x0008, 0x0030), keyword: "StudyTime", name: "Study Time", vr: VR::TM, vm: "1", retired: false },
    E { tag: Tag(0x0008, 0x0031), keyword: "SeriesTime", name: "Series Time", vr: VR::TM, vm: "1", retired: false },
    E { tag: Tag(0x0008, 0x0050), keyword: "AccessionNumber", name: "Accession Number", vr: VR::SH, vm: "1", retired: false },
    E { tag: Tag(0x0008, 0x0060), keyword: "Modality", name: "Modality", vr: VR::CS, vm: "1", retired: false },
    E { tag: Tag(0x0008, 0x0070), keyword: "Manufacturer", name: "Manufacturer", vr: VR::LO, vm: "1", retired: false },
    E { tag: Tag(0x0008, 0x0080), keyword: "InstitutionName", name: "Institution Name", vr: VR::LO, vm: "1", retired: false },
    E { tag: Tag(0x0008, 0x0090), keyword: "ReferringPhysicianName", name: "Referring Physician's Name", vr: VR::PN, vm: "1", retired: false },
    E { tag: Tag(0x0008, 0x1030), keyword: "StudyDescription", name: "Study Description", vr: VR::LO, vm: "1", retired: false },
    E { tag: Tag(0x0008, 0x103E), keyword: "SeriesDescription", name: "Series Description", vr: VR::LO, vm: "1", retired: false },
    E { tag: Tag(0x0008, 0x1090), keyword: "ManufacturerModelName", name: "Manufacturer's Model Name", vr: VR::LO, vm: "1", retired: false },
    // group 0x0010: patient
    E { tag: Tag(0x0010, 0x0010), keyword: "PatientName", name: "Patient's Name", vr: VR::PN, vm: "1", retired: false },
    E { tag: Tag(0x0010, 0x0020), keyword: "PatientID", name: "Patient ID", vr: VR::LO, vm: "1", retired: false },
    E { tag: Tag(0x0010, 0x0030), keyword: "PatientBirthDate", name: "Patient's Birth Date", vr: VR::DA, vm: "1", retired: false },
    E { tag: Tag(0x0010, 0x0040), keyword: "PatientSex", name: "Patient's Sex", vr: VR::CS, vm: "1", retired: false },
    E { tag: Tag(0x0010, 0x1010), keyword: "PatientAge", name: "Patient's Age", vr: VR::AS, vm: "1", retired: false },
    // group 0x0018: acquisition
    E { tag: Tag(0x0018, 0x0050), keyword: "SliceThickness", name: "Slice Thickness", vr: VR::DS, vm: "1", retired: false },
    E { tag: Tag(0x0018, 0x0060), keyword: "KVP", name: "KVP", vr: VR::DS, vm: "1", retired: false },
    E { tag: Tag(0x0018, 0x1151), keyword: "XRayTubeCurrent", name: "X-Ray Tube Current", vr: VR::IS, vm: "1", retired: false },
    E { tag: Tag(0x0018, 0x5100), keyword: "PatientPosition", name: "Patient Position", vr: VR::CS, vm: "1", retired: false },
    // group 0x0020: study and image relationship
    E { tag: Tag(0x0020, 0x000D), keyword: "StudyInstanceUID", name: "Study Instance UID", vr: VR::UI, vm: "1", retired: false },
    E { tag: Tag(0x0020, 0x000E), keyword: "SeriesInstanceUID", name: "Series Instance UID", vr: VR::UI, vm: "1", retired: false },
    E { tag: Tag(0x0020, 0x0010), keyword: "StudyID", name: "Study ID", vr: VR::SH, vm: "1", retired: false },
    E { tag: Tag(0x0020, 0x0011), keyword: "SeriesNumber", name: "Series Number", vr: VR::IS, vm: "1", retired: false },
    E { tag: Tag(0x0020, 0x0013), keyword: "InstanceNumber", name: "Instance Number", vr: VR::IS, vm: "1", retired: false },
    E { tag: Tag(0x0020, 0x0032), keyword: "ImagePositionPatient", name: "Image Position (Patient)", vr: VR::DS, vm: "3", retired: false },
    E { tag: Tag(0x0020, 0x0037), keyword: "ImageOrientationPatient", name: "Image Orientation (Patient)", vr: VR::DS, vm: "6", retired: false },
    E { tag: Tag(0x0020, 0x1041), keyword: "SliceLocation", name: "Slice Location", vr: VR::DS, vm: "1", retired: false },
    // group 0x0028: image pixel description
    E { tag: Tag(0x0028, 0x0002), keyword: "SamplesPerPixel", name: "Samples per Pixel", vr: VR::US, vm: "1", retired: false },
    E { tag: Tag(0x0028, 0x0004), keyword: "PhotometricInterpretation", name: "Photometric Interpretation", vr: VR::CS, vm: "1", retired: false },
    E { tag: Tag(0x0028, 0x0005), keyword: "ImageDimensions", name: "Image Dimensions", vr: VR::US, vm: "1", retired: true },
    E { tag: Tag(0x0028, 0x0008), keyword: "NumberOfFrames", name: "Number of Frames", vr: VR::IS, vm: "1", retired: false },
    E { tag: Tag(0x0028, 0x0010), keyword: "Rows", name: "Rows", vr: VR::US, vm: "1", retired: false },
    E { tag: Tag(0x0028, 0x0011), keyword: "Columns", name: "Columns", vr: VR::US, vm: "1", retired: false },
    E { tag: Tag(0x0028, 0x0030), keyword: "PixelSpacing", name: "Pixel Spacing", vr: VR::DS, vm: "2", retired: false },
    E { tag: Tag(0x0028, 0x0100), keyword: "BitsAllocated", name: "Bits Allocated", vr: VR::US, vm: "1", retired: false },
    E { tag: Tag(0x0028, 0x0101), keyword: "BitsStored", name: "Bits Stored", vr: VR::US, vm: "1", retired: false },
    E { tag: Tag(0x0028, 0x0102), keyword: "HighBit", name: "High Bit", vr: VR::US, vm: "1", retired: false },
    E { tag: Tag(0x0028, 0x0103), keyword: "PixelRepresentation", name: "Pixel Representation", vr: VR::US, vm: "1", retired: false },
    E { tag: Tag(0x0028, 0x0106), keyword: "SmallestImagePixelValue", name: "Smallest Image Pixel Value", vr: VR::US, vm: "1", retired: false },
    E { tag: Tag(0x0028, 0x0107), keyword: "LargestImagePixelValue", name: "Largest Image Pixel Value", vr: VR::US, vm: "1", retired: false },
    E { tag: Tag(0x0028, 0x1050), keyword: "WindowCenter", name: "Window Center", vr: VR::DS, vm: "1-n", retired: false },
    E { tag: Tag(0x0028, 0x1051), keyword: "WindowWidth", name: "Window Width", vr: VR::DS, vm: "1-n", retired: false },
    E { tag: Tag(0x0028, 0x1052), keyword: "RescaleIntercept", name: "Rescale Intercept", vr: VR::DS, vm: "1", retired: false },
    E { tag: Tag(0x0028, 0x1053), keyword: "RescaleSlope", name: "Rescale Slope", vr: VR::DS, vm: "1", retired: false },
    E { tag: Tag(0x0028, 0x1054), keyword: "RescaleType", name: "Rescale Type", vr: VR::LO, vm: "1", retired: false },
    E { tag: Tag(0x0028, 0x2110), keyword: "LossyImageCompression", name: "Lossy Image Compression", vr: VR::CS, vm: "1", retired: false },
    // group 0x7FE0: pixel data
    E { tag: Tag(0x7FE0, 0x0010), keyword: "PixelData", name: "Pixel Data", vr: VR::OW, vm: "1", retired: false },
];
