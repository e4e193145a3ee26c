//! Whole-file reading scenarios over synthetic DICOM buffers.

use dicom_lite_core::{Header, PrimitiveValue, Tag};
use dicom_lite_object::read_file;

/// 128 zero bytes and the DICM magic marker.
fn preamble() -> Vec<u8> {
    let mut out = vec![0u8; 128];
    out.extend_from_slice(b"DICM");
    out
}

/// Encode one element in explicit VR little endian.
fn element_le(group: u16, element: u16, vr: &[u8; 2], value: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();
    out.extend_from_slice(&group.to_le_bytes());
    out.extend_from_slice(&element.to_le_bytes());
    out.extend_from_slice(vr);
    if matches!(vr, b"OB" | b"OW" | b"OF" | b"SQ" | b"UT" | b"UN") {
        out.extend_from_slice(&[0, 0]);
        out.extend_from_slice(&(value.len() as u32).to_le_bytes());
    } else {
        out.extend_from_slice(&(value.len() as u16).to_le_bytes());
    }
    out.extend_from_slice(value);
    out
}

/// Encode one element in explicit VR big endian.
fn element_be(group: u16, element: u16, vr: &[u8; 2], value: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();
    out.extend_from_slice(&group.to_be_bytes());
    out.extend_from_slice(&element.to_be_bytes());
    out.extend_from_slice(vr);
    if matches!(vr, b"OB" | b"OW" | b"OF" | b"SQ" | b"UT" | b"UN") {
        out.extend_from_slice(&[0, 0]);
        out.extend_from_slice(&(value.len() as u32).to_be_bytes());
    } else {
        out.extend_from_slice(&(value.len() as u16).to_be_bytes());
    }
    out.extend_from_slice(value);
    out
}

/// Encode one element in implicit VR little endian.
fn element_implicit_le(group: u16, element: u16, value: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();
    out.extend_from_slice(&group.to_le_bytes());
    out.extend_from_slice(&element.to_le_bytes());
    out.extend_from_slice(&(value.len() as u32).to_le_bytes());
    out.extend_from_slice(value);
    out
}

fn meta_block(transfer_syntax: &str) -> Vec<u8> {
    let mut out = element_le(0x0002, 0x0002, b"UI", b"1.2.840.10008.5.1.4.1.1.7\0");
    out.extend(element_le(0x0002, 0x0010, b"UI", transfer_syntax.as_bytes()));
    out
}

#[test]
fn minimal_explicit_le_file() {
    let mut file = preamble();
    file.extend(meta_block("1.2.840.10008.1.2.1\0"));
    file.extend(element_le(0x0010, 0x0010, b"PN", b"DOE^JOHN "));

    let obj = read_file(&file).expect("file should read");
    assert!(!obj.is_implicit_vr());
    assert!(obj.is_little_endian());
    assert_eq!(obj.preamble().len(), 128);

    let elem = obj
        .dataset()
        .get("PatientName-1")
        .expect("the patient name should be in the main dataset");
    assert_eq!(elem.tag(), Tag(0x0010, 0x0010));
    assert_eq!(elem.name(), "Patient's Name");
    // trailing space padding is trimmed from the converted value
    assert_eq!(elem.value(), &PrimitiveValue::Str("DOE^JOHN".into()));
    assert_eq!(elem.raw_value(), b"DOE^JOHN ");

    let ts = obj
        .meta()
        .get("TransferSyntaxUID-1")
        .expect("the transfer syntax should be in the meta block");
    assert_eq!(ts.value(), &PrimitiveValue::Str("1.2.840.10008.1.2.1".into()));
}

#[test]
fn implicit_vr_dataset() {
    let mut file = preamble();
    file.extend(meta_block("1.2.840.10008.1.2\0"));
    file.extend(element_implicit_le(0x0010, 0x0020, b"ID123   "));

    let obj = read_file(&file).expect("file should read");
    assert!(obj.is_implicit_vr());
    assert!(obj.is_little_endian());

    let elem = obj.dataset().get("PatientID-1").expect("should be present");
    // the VR comes from the dictionary in implicit mode
    assert_eq!(elem.vr(), dicom_lite_core::VR::LO);
    assert_eq!(elem.value(), &PrimitiveValue::Str("ID123".into()));
}

#[test]
fn big_endian_dataset() {
    let mut file = preamble();
    file.extend(meta_block("1.2.840.10008.1.2.2\0"));
    file.extend(element_be(0x0028, 0x0010, b"US", &[0x02, 0x00]));

    let obj = read_file(&file).expect("file should read");
    assert!(!obj.is_implicit_vr());
    assert!(!obj.is_little_endian());

    let elem = obj.dataset().get("Rows-1").expect("should be present");
    assert_eq!(elem.value().to_u16(), Some(512));
}

#[test]
fn missing_magic_reads_from_offset_zero() {
    // no preamble at all: the file opens directly with the meta block
    let mut file = meta_block("1.2.840.10008.1.2.1\0");
    file.extend(element_le(0x0010, 0x0010, b"PN", b"DOE^JOHN "));

    let obj = read_file(&file).expect("file should still read");
    assert!(obj.preamble().is_empty());
    assert!(obj.dataset().get("PatientName-1").is_some());
    assert!(obj.meta().get("TransferSyntaxUID-1").is_some());
}

#[test]
fn garbage_input_yields_an_empty_object() {
    let file = vec![0x42u8; 160];
    let obj = read_file(&file).expect("a partial (empty) result, not an error");
    assert!(obj.dataset().is_empty());
    assert!(obj.meta().is_empty());
    assert!(obj.command().is_empty());
}

#[test]
fn empty_input_is_the_only_fatal_case() {
    assert!(read_file(&[]).is_err());
}

#[test]
fn private_elements_are_kept_opaque() {
    let mut file = preamble();
    file.extend(meta_block("1.2.840.10008.1.2.1\0"));
    file.extend(element_le(0x0009, 0x1001, b"UN", &[0xDE, 0xAD, 0xBE, 0xEF]));

    let obj = read_file(&file).expect("file should read");
    let elem = obj
        .dataset()
        .get("Unknown-PrivateTag-1")
        .expect("the private element should be present");
    assert_eq!(elem.keyword(), "Unknown-PrivateTag");
    assert_eq!(elem.raw_value(), &[0xDE, 0xAD, 0xBE, 0xEF]);
}

#[test]
fn truncated_dataset_is_partial_not_fatal() {
    let mut file = preamble();
    file.extend(meta_block("1.2.840.10008.1.2.1\0"));
    file.extend(element_le(0x0008, 0x0060, b"CS", b"CT"));
    // a header announcing far more bytes than the buffer holds
    let mut broken = element_le(0x0010, 0x0010, b"PN", b"DOE^JOHN ");
    broken.truncate(broken.len() - 4);
    file.extend(broken);

    let obj = read_file(&file).expect("file should read");
    assert!(obj.dataset().get("Modality-1").is_some());
    assert!(obj.dataset().get("PatientName-1").is_none());
}

#[test]
fn command_set_elements_are_reachable() {
    // command set elements precede the main dataset, without preamble
    let mut file = element_le(0x0000, 0x0100, b"US", &[0x20, 0x00]);
    file.extend(element_le(0x0008, 0x0060, b"CS", b"MR"));

    let obj = read_file(&file).expect("file should read");
    let elem = obj.command().get("CommandField-1").expect("should be present");
    assert_eq!(elem.value().to_u16(), Some(0x0020));
    assert_eq!(
        obj.dataset().get("Modality-1").unwrap().value(),
        &PrimitiveValue::Str("MR".into()),
    );
}

#[test]
fn lookup_forms_and_block_priority() {
    let mut file = preamble();
    file.extend(meta_block("1.2.840.10008.1.2.1\0"));
    file.extend(element_le(0x0010, 0x0010, b"PN", b"DOE^JOHN "));
    file.extend(element_le(0x0028, 0x0100, b"US", &[16, 0]));

    let obj = read_file(&file).expect("file should read");
    assert!(obj.element((0x0010, 0x0010)).is_some());
    assert!(obj.element(["0010", "0010"]).is_some());
    assert!(obj.element("Patient's Name").is_some());
    assert!(obj.element("(0010,0010)").is_some());
    // meta elements are reachable through the same lookup
    assert!(obj.element("TransferSyntaxUID").is_some());
    assert_eq!(obj.element("BitsAllocated").unwrap().value().to_u16(), Some(16));
    assert!(obj.element("WindowCenter").is_none());
}

#[test]
fn group_submap_uses_lower_camel_keys() {
    let mut file = preamble();
    file.extend(meta_block("1.2.840.10008.1.2.1\0"));
    file.extend(element_le(0x0028, 0x0100, b"US", &[16, 0]));
    file.extend(element_le(0x0028, 0x0101, b"US", &[12, 0]));
    file.extend(element_le(0x0028, 0x1050, b"DS", b"40"));

    let obj = read_file(&file).expect("file should read");
    let group = obj.group_elements("0028");
    assert_eq!(group.len(), 3);
    assert_eq!(group["bitsAllocated"].value().to_u16(), Some(16));
    assert_eq!(group["bitsStored"].value().to_u16(), Some(12));
    assert_eq!(group["windowCenter"].value().to_f64(), Some(40.0));
    assert!(obj.group_elements("7fe0").is_empty());
}
