//! HTML attribute maps and their opening-tag serialization.
//!
//! An [`AttrMap`] collects `name="value"` pairs in insertion order and
//! serializes them into the text spliced inside an opening tag, e.g.
//! ` class="card" href="/about"`. Serialization sorts keys for
//! deterministic output; values that themselves contain a double quote
//! are wrapped in single quotes instead.

use compact_str::{CompactString, ToCompactString};
use smallvec::SmallVec;

/// Most tags carry only a handful of attributes, so entries live inline.
type Entries = SmallVec<[(CompactString, CompactString); 8]>;

/// An attribute name → value mapping for one element.
///
/// Keys are unique: adding a value onto an existing key merges it into
/// the stored value (see [`AttrMap::add`] and [`AttrMap::add_concat`]),
/// which is how repeated `class` additions accumulate.
#[derive(Debug, Clone, Default)]
pub struct AttrMap {
    entries: Entries,
}

impl AttrMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an attribute, merging with a separating space if the key
    /// already exists.
    pub fn add(&mut self, name: &str, value: &str) {
        self.insert_or_merge(name, value, true);
    }

    /// Add an attribute, merging directly (no separator) if the key
    /// already exists.
    pub fn add_concat(&mut self, name: &str, value: &str) {
        self.insert_or_merge(name, value, false);
    }

    /// Current value stored for `name`, if any.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n.as_str() == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Serialize in sorted key order.
    ///
    /// Empty-valued entries are skipped entirely. The result carries a
    /// leading space per emitted entry and no trailing space, so it can
    /// be spliced directly after a tag name; an empty (or all-empty) map
    /// renders to `""`.
    pub fn render(&self) -> String {
        let mut sorted: Vec<&(CompactString, CompactString)> = self.entries.iter().collect();
        sorted.sort_by(|a, b| a.0.cmp(&b.0));
        serialize(sorted.into_iter())
    }

    /// Serialize in insertion order, for callers that lay out attributes
    /// themselves.
    pub fn render_unsorted(&self) -> String {
        serialize(self.entries.iter())
    }

    fn insert_or_merge(&mut self, name: &str, value: &str, separate: bool) {
        if let Some((_, existing)) = self.entries.iter_mut().find(|(n, _)| n.as_str() == name) {
            if separate {
                existing.push(' ');
            }
            existing.push_str(value);
        } else {
            self.entries
                .push((name.to_compact_string(), value.to_compact_string()));
        }
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for AttrMap {
    fn from_iter<T: IntoIterator<Item = (&'a str, &'a str)>>(iter: T) -> Self {
        let mut map = Self::new();
        for (name, value) in iter {
            map.add(name, value);
        }
        map
    }
}

/// A value containing `"` is wrapped in single quotes with no further
/// escaping; a value containing both quote kinds comes out malformed,
/// matching the behavior pages already rely on.
fn serialize<'a>(entries: impl Iterator<Item = &'a (CompactString, CompactString)>) -> String {
    let mut out = String::new();
    for (name, value) in entries {
        if value.is_empty() {
            continue;
        }
        out.push(' ');
        out.push_str(name);
        if value.contains('"') {
            out.push_str("='");
            out.push_str(value);
            out.push('\'');
        } else {
            out.push_str("=\"");
            out.push_str(value);
            out.push('"');
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_sorts_keys() {
        let map = AttrMap::from_iter([("href", "/a"), ("class", "x"), ("id", "top")]);
        assert_eq!(map.render(), r#" class="x" href="/a" id="top""#);
    }

    #[test]
    fn test_render_unsorted_keeps_insertion_order() {
        let map = AttrMap::from_iter([("href", "/a"), ("class", "x")]);
        assert_eq!(map.render_unsorted(), r#" href="/a" class="x""#);
    }

    #[test]
    fn test_empty_map_renders_empty() {
        assert_eq!(AttrMap::new().render(), "");
    }

    #[test]
    fn test_empty_values_are_skipped() {
        let map = AttrMap::from_iter([("class", ""), ("id", "top")]);
        assert_eq!(map.render(), r#" id="top""#);
    }

    #[test]
    fn test_all_empty_values_render_empty() {
        let map = AttrMap::from_iter([("class", ""), ("id", "")]);
        assert_eq!(map.render(), "");
    }

    #[test]
    fn test_double_quoted_value_switches_to_single_quotes() {
        let mut map = AttrMap::new();
        map.add("onclick", r#"alert("hi")"#);
        assert_eq!(map.render(), r#" onclick='alert("hi")'"#);
    }

    #[test]
    fn test_value_without_double_quote_uses_double_quotes() {
        let mut map = AttrMap::new();
        map.add("title", "it's fine");
        assert_eq!(map.render(), r#" title="it's fine""#);
    }

    #[test]
    fn test_add_merges_with_space() {
        let mut map = AttrMap::new();
        map.add("class", "a");
        map.add("class", "b");
        assert_eq!(map.get("class"), Some("a b"));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_add_concat_merges_without_space() {
        let mut map = AttrMap::new();
        map.add("data-id", "12");
        map.add_concat("data-id", "34");
        assert_eq!(map.get("data-id"), Some("1234"));
    }

    #[test]
    fn test_get_missing_key() {
        let map = AttrMap::new();
        assert_eq!(map.get("class"), None);
        assert!(map.is_empty());
    }
}
