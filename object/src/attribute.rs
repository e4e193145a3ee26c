//! Element lookup queries over parsed datasets.

use dicom_lite_core::{DataElement, Header, Tag};

/// A query identifying one element in a dataset.
///
/// Queries can address elements by numeric tag, by a pair of 4-digit
/// hex strings, or by free text matched against the dictionary
/// keyword, the display name, and the canonical tag string. Hex and
/// text queries are case insensitive, and a text query ignores
/// whitespace and the `(`, `)` and `,` characters, so `"(0010,0010)"`
/// and `"PatientName"` address the same element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ElementSelector<'a> {
    /// Match by numeric attribute tag.
    Tag(Tag),
    /// Match by group and element hex strings.
    HexPair(&'a str, &'a str),
    /// Match by keyword, name, or canonical tag text.
    Text(&'a str),
}

impl ElementSelector<'_> {
    /// Whether the given element is addressed by this query.
    pub fn matches(&self, elem: &DataElement) -> bool {
        match *self {
            ElementSelector::Tag(tag) => elem.tag() == tag,
            ElementSelector::HexPair(group, element) => {
                match (
                    u16::from_str_radix(group, 16),
                    u16::from_str_radix(element, 16),
                ) {
                    (Ok(group), Ok(element)) => elem.tag() == Tag(group, element),
                    _ => false,
                }
            }
            ElementSelector::Text(text) => {
                let wanted = normalize(text);
                wanted == elem.keyword().to_lowercase()
                    || wanted == normalize(elem.name())
                    || wanted == elem.tag().to_hex_string()
            }
        }
    }
}

/// Lowercase the text and strip whitespace and tag punctuation.
fn normalize(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_whitespace() && !matches!(c, '(' | ')' | ','))
        .flat_map(char::to_lowercase)
        .collect()
}

impl From<Tag> for ElementSelector<'_> {
    fn from(tag: Tag) -> Self {
        ElementSelector::Tag(tag)
    }
}

impl From<(u16, u16)> for ElementSelector<'_> {
    fn from(pair: (u16, u16)) -> Self {
        ElementSelector::Tag(Tag::from(pair))
    }
}

impl From<[u16; 2]> for ElementSelector<'_> {
    fn from(pair: [u16; 2]) -> Self {
        ElementSelector::Tag(Tag::from(pair))
    }
}

impl<'a> From<(&'a str, &'a str)> for ElementSelector<'a> {
    fn from(pair: (&'a str, &'a str)) -> Self {
        ElementSelector::HexPair(pair.0, pair.1)
    }
}

impl<'a> From<[&'a str; 2]> for ElementSelector<'a> {
    fn from(pair: [&'a str; 2]) -> Self {
        ElementSelector::HexPair(pair[0], pair[1])
    }
}

impl<'a> From<&'a str> for ElementSelector<'a> {
    fn from(text: &'a str) -> Self {
        ElementSelector::Text(text)
    }
}

/// Lower the first character of a dictionary keyword,
/// yielding the lower camel case form used for group submaps.
pub(crate) fn lower_camel(keyword: &str) -> String {
    let mut chars = keyword.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}
