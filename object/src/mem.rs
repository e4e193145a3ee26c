//! In-memory datasets and the full parsed file product.

use crate::attribute::{lower_camel, ElementSelector};
use dicom_lite_core::{DataElement, Header};
use indexmap::IndexMap;

/// An ordered mapping of safe keys to parsed data elements.
///
/// Elements are kept in the order they were encountered in the byte
/// stream. The key for an element is derived from its dictionary
/// keyword as `"{keyword}-{n}"`, with `n` the smallest number from 1
/// up that is still free, so three elements sharing a keyword get the
/// keys `keyword-1`, `keyword-2` and `keyword-3`. The bare keyword is
/// never used as a key.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct DataSet {
    entries: IndexMap<String, DataElement>,
}

impl DataSet {
    /// Create an empty dataset.
    pub fn new() -> Self {
        DataSet::default()
    }

    /// Insert an element under the next safe key for its keyword,
    /// returning the chosen key.
    pub fn insert(&mut self, elem: DataElement) -> &str {
        let key = self.safe_key(elem.keyword());
        let (index, _) = self.entries.insert_full(key, elem);
        self.entries
            .get_index(index)
            .map(|(key, _)| key.as_str())
            .unwrap_or_default()
    }

    fn safe_key(&self, keyword: &str) -> String {
        let mut n = 1usize;
        loop {
            let key = format!("{}-{}", keyword, n);
            if !self.entries.contains_key(&key) {
                return key;
            }
            n += 1;
        }
    }

    /// Fetch an element by its safe key.
    pub fn get(&self, key: &str) -> Option<&DataElement> {
        self.entries.get(key)
    }

    /// Fetch the first element addressed by the given query.
    pub fn element<'a>(&self, selector: impl Into<ElementSelector<'a>>) -> Option<&DataElement> {
        let selector = selector.into();
        self.elements().find(|elem| selector.matches(elem))
    }

    /// Iterate over `(safe key, element)` pairs in stream order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &DataElement)> {
        self.entries.iter().map(|(key, elem)| (key.as_str(), elem))
    }

    /// Iterate over the elements in stream order.
    pub fn elements(&self) -> impl Iterator<Item = &DataElement> {
        self.entries.values()
    }

    /// The number of elements in the dataset.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the dataset holds no elements.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Extend<DataElement> for DataSet {
    fn extend<T: IntoIterator<Item = DataElement>>(&mut self, iter: T) {
        for elem in iter {
            self.insert(elem);
        }
    }
}

impl FromIterator<DataElement> for DataSet {
    fn from_iter<T: IntoIterator<Item = DataElement>>(iter: T) -> Self {
        let mut dataset = DataSet::new();
        dataset.extend(iter);
        dataset
    }
}

impl<'a> IntoIterator for &'a DataSet {
    type Item = (&'a str, &'a DataElement);
    type IntoIter = Box<dyn Iterator<Item = (&'a str, &'a DataElement)> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.entries.iter().map(|(key, elem)| (key.as_str(), elem)))
    }
}

/// The full product of reading one DICOM file:
/// the main dataset, the file meta information block, the command set
/// elements, the raw preamble, and the encoding that was discovered
/// for the main dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct FileDataSet {
    pub(crate) preamble: Vec<u8>,
    pub(crate) meta: DataSet,
    pub(crate) command: DataSet,
    pub(crate) dataset: DataSet,
    pub(crate) implicit_vr: bool,
    pub(crate) little_endian: bool,
}

impl FileDataSet {
    /// The main dataset.
    pub fn dataset(&self) -> &DataSet {
        &self.dataset
    }

    /// The file meta information block (group `0x0002`).
    pub fn meta(&self) -> &DataSet {
        &self.meta
    }

    /// The command set elements (group `0x0000`), usually empty for
    /// files.
    pub fn command(&self) -> &DataSet {
        &self.command
    }

    /// The opaque 128-byte preamble, or empty when the magic marker
    /// was missing.
    pub fn preamble(&self) -> &[u8] {
        &self.preamble
    }

    /// Whether the main dataset was decoded as implicit VR.
    pub fn is_implicit_vr(&self) -> bool {
        self.implicit_vr
    }

    /// Whether the main dataset was decoded as little endian.
    pub fn is_little_endian(&self) -> bool {
        self.little_endian
    }

    /// Fetch the first element addressed by the given query,
    /// searching the main dataset first, then the file meta block,
    /// then the command set.
    pub fn element<'a>(&self, selector: impl Into<ElementSelector<'a>>) -> Option<&DataElement> {
        let selector = selector.into();
        self.dataset
            .elements()
            .chain(self.meta.elements())
            .chain(self.command.elements())
            .find(|elem| selector.matches(elem))
    }

    /// Collect the elements of one group, re-keyed by the lower camel
    /// case form of their keyword.
    ///
    /// The group is given as a 4-digit hex string, matched case
    /// insensitively. All three blocks are searched in the same
    /// priority order as [`element`](Self::element).
    pub fn group_elements(&self, hex_group: &str) -> IndexMap<String, &DataElement> {
        let wanted = hex_group.to_lowercase();
        let mut submap = IndexMap::new();
        let all = self
            .dataset
            .elements()
            .chain(self.meta.elements())
            .chain(self.command.elements());
        for elem in all {
            if elem.tag().group_hex_string() == wanted {
                submap
                    .entry(lower_camel(elem.keyword()))
                    .or_insert(elem);
            }
        }
        submap
    }
}

#[cfg(test)]
mod tests {
    use super::DataSet;
    use dicom_lite_core::dictionary;
    use dicom_lite_core::{DataElement, DataElementHeader, Length, PrimitiveValue, Tag, VR};

    fn element(tag: Tag, vr: VR, text: &str) -> DataElement {
        DataElement::new(
            DataElementHeader::new(tag, vr, Length(text.len() as u32)),
            dictionary::resolve(tag),
            text.as_bytes().to_vec(),
            PrimitiveValue::from(text),
        )
    }

    #[test]
    fn keys_always_carry_a_suffix() {
        let mut dataset = DataSet::new();
        let key = dataset
            .insert(element(Tag(0x0010, 0x0010), VR::PN, "DOE^JOHN"))
            .to_owned();
        assert_eq!(key, "PatientName-1");
        assert!(dataset.get("PatientName").is_none());
        assert!(dataset.get("PatientName-1").is_some());
    }

    #[test]
    fn duplicate_keywords_are_disambiguated() {
        let mut dataset = DataSet::new();
        for text in ["A", "B", "C"] {
            dataset.insert(element(Tag(0x0010, 0x0010), VR::PN, text));
        }
        assert_eq!(dataset.len(), 3);
        assert_eq!(
            dataset.get("PatientName-1").unwrap().value(),
            &PrimitiveValue::from("A"),
        );
        assert_eq!(
            dataset.get("PatientName-2").unwrap().value(),
            &PrimitiveValue::from("B"),
        );
        assert_eq!(
            dataset.get("PatientName-3").unwrap().value(),
            &PrimitiveValue::from("C"),
        );
    }

    #[test]
    fn iteration_preserves_stream_order() {
        let mut dataset = DataSet::new();
        dataset.insert(element(Tag(0x0010, 0x0020), VR::LO, "ID123"));
        dataset.insert(element(Tag(0x0008, 0x0060), VR::CS, "CT"));
        dataset.insert(element(Tag(0x0010, 0x0010), VR::PN, "DOE^JOHN"));
        let keys: Vec<_> = dataset.iter().map(|(key, _)| key).collect();
        assert_eq!(keys, ["PatientID-1", "Modality-1", "PatientName-1"]);
    }

    #[test]
    fn lookup_by_selector() {
        let mut dataset = DataSet::new();
        dataset.insert(element(Tag(0x0010, 0x0010), VR::PN, "DOE^JOHN"));
        assert!(dataset.element((0x0010, 0x0010)).is_some());
        assert!(dataset.element("Patient's Name").is_some());
        assert!(dataset.element("Modality").is_none());
    }
}
