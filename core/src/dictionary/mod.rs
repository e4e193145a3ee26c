//! The attribute dictionary: a static lookup from attribute tags to
//! value representation, multiplicity, name, and keyword.
//!
//! The dictionary is a singleton built on first use. It is queried,
//! never mutated.

mod entries;

use crate::tag::Tag;
use crate::vr::VR;
use once_cell::sync::Lazy;
use std::borrow::Cow;
use std::collections::HashMap;

use self::entries::ENTRIES;

/// A reference to a single attribute dictionary entry.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct DictionaryEntry {
    /// the attribute tag
    pub tag: Tag,
    /// the attribute keyword, in upper camel case
    pub keyword: &'static str,
    /// the attribute's display name
    pub name: &'static str,
    /// the attribute's value representation
    pub vr: VR,
    /// the attribute's value multiplicity descriptor
    pub vm: &'static str,
    /// whether the attribute is retired in the standard
    pub retired: bool,
}

/// Generic group length dictionary entry,
/// used whenever the element number is `0x0000`, regardless of group.
static GROUP_LENGTH_ENTRY: DictionaryEntry = DictionaryEntry {
    tag: Tag(0x0000, 0x0000),
    keyword: "GroupLength",
    name: "Group Length",
    vr: VR::UL,
    vm: "1",
    retired: false,
};

static DICT: Lazy<DictionaryRegistry> = Lazy::new(DictionaryRegistry::new);

/// The data struct actually containing the dictionary indexes.
#[derive(Debug)]
struct DictionaryRegistry {
    by_tag: HashMap<Tag, &'static DictionaryEntry>,
    by_keyword: HashMap<&'static str, &'static DictionaryEntry>,
}

impl DictionaryRegistry {
    fn new() -> Self {
        let mut by_tag = HashMap::with_capacity(ENTRIES.len());
        let mut by_keyword = HashMap::with_capacity(ENTRIES.len());
        for entry in ENTRIES {
            by_tag.insert(entry.tag, entry);
            by_keyword.insert(entry.keyword, entry);
        }
        DictionaryRegistry { by_tag, by_keyword }
    }
}

/// Look up a dictionary entry by exact tag.
///
/// This does not apply the group-length or private-tag rules;
/// see [`resolve`] for the full resolution protocol.
pub fn by_tag(tag: Tag) -> Option<&'static DictionaryEntry> {
    DICT.by_tag.get(&tag).copied()
}

/// Look up a dictionary entry by its keyword (case sensitive).
pub fn by_keyword(keyword: &str) -> Option<&'static DictionaryEntry> {
    DICT.by_keyword.get(keyword).copied()
}

/// The dictionary information resolved for one parsed element's tag.
#[derive(Debug, PartialEq, Clone)]
pub struct TagInfo {
    /// the resolved value representation
    pub vr: VR,
    /// the attribute keyword, or an `Unknown` marker
    pub keyword: Cow<'static, str>,
    /// the attribute display name, or an `Unknown` marker
    pub name: Cow<'static, str>,
    /// the value multiplicity descriptor
    pub vm: Cow<'static, str>,
    /// whether the attribute is retired
    pub retired: bool,
}

impl From<&'static DictionaryEntry> for TagInfo {
    fn from(entry: &'static DictionaryEntry) -> Self {
        TagInfo {
            vr: entry.vr,
            keyword: Cow::Borrowed(entry.keyword),
            name: Cow::Borrowed(entry.name),
            vm: Cow::Borrowed(entry.vm),
            retired: entry.retired,
        }
    }
}

/// Keyword and name reported for private tags, which are treated as
/// opaque and never consult the dictionary table.
pub const UNKNOWN_PRIVATE: &str = "Unknown-PrivateTag";

/// Keyword and name reported for unrecognized non-private tags.
pub const UNKNOWN: &str = "Unknown";

/// Resolve the dictionary information for a tag.
///
/// Resolution order: group length elements (element number `0x0000`)
/// map to the generic group length entry; private tags short-circuit
/// to the opaque [`UNKNOWN_PRIVATE`] information without a table
/// lookup; known tags map to their entry; anything else is reported
/// as [`UNKNOWN`] with VR `UN`.
pub fn resolve(tag: Tag) -> TagInfo {
    if tag.element() == 0x0000 {
        return TagInfo::from(&GROUP_LENGTH_ENTRY);
    }
    if tag.is_private() {
        return TagInfo {
            vr: VR::UN,
            keyword: Cow::Borrowed(UNKNOWN_PRIVATE),
            name: Cow::Borrowed(UNKNOWN_PRIVATE),
            vm: Cow::Borrowed("1"),
            retired: false,
        };
    }
    match by_tag(tag) {
        Some(entry) => TagInfo::from(entry),
        None => TagInfo {
            vr: VR::UN,
            keyword: Cow::Borrowed(UNKNOWN),
            name: Cow::Borrowed(UNKNOWN),
            vm: Cow::Borrowed("1"),
            retired: false,
        },
    }
}
