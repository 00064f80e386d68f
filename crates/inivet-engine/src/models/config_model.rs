use serde::{Deserialize, Serialize};

/// One `key = value` assignment within a section, both halves trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyValueEntry {
    pub key: String,
    pub value: String,
}

/// A named `[section]` scoping the key-value pairs that follow it.
///
/// Entries keep first-seen order; re-assigning a key overwrites the value
/// in place without moving the entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    name: String,
    entries: Vec<KeyValueEntry>,
}

impl Section {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Look up the value for a key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.key == key)
            .map(|e| e.value.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|e| e.key == key)
    }

    /// All entries, in first-seen order
    pub fn entries(&self) -> &[KeyValueEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Set or overwrite a key's value.
    ///
    /// Returns `true` if the key already existed and its value was replaced.
    pub(crate) fn set(&mut self, key: String, value: String) -> bool {
        match self.entries.iter_mut().find(|e| e.key == key) {
            Some(entry) => {
                entry.value = value;
                true
            }
            None => {
                self.entries.push(KeyValueEntry { key, value });
                false
            }
        }
    }
}

/// In-memory model of a validated configuration file.
///
/// Sections keep declaration order; section names are unique, with later
/// re-declarations merging into the existing section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigModel {
    sections: Vec<Section>,
}

impl ConfigModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// All sections, in declaration order
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Look up a section by name
    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.name == name)
    }

    pub fn contains_section(&self, name: &str) -> bool {
        self.sections.iter().any(|s| s.name == name)
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Position of the named section, creating an empty one at the end if
    /// it does not exist yet.
    pub(crate) fn ensure_section(&mut self, name: &str) -> usize {
        match self.sections.iter().position(|s| s.name == name) {
            Some(index) => index,
            None => {
                self.sections.push(Section::new(name));
                self.sections.len() - 1
            }
        }
    }

    pub(crate) fn section_at_mut(&mut self, index: usize) -> &mut Section {
        &mut self.sections[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_overwrites_in_place() {
        let mut section = Section::new("server");
        assert!(!section.set("port".to_owned(), "80".to_owned()));
        assert!(!section.set("host".to_owned(), "localhost".to_owned()));
        assert!(section.set("port".to_owned(), "8080".to_owned()));

        assert_eq!(section.get("port"), Some("8080"));
        // overwrite must not move the entry
        assert_eq!(section.entries()[0].key, "port");
        assert_eq!(section.len(), 2);
    }

    #[test]
    fn ensure_section_reuses_existing() {
        let mut model = ConfigModel::new();
        let first = model.ensure_section("a");
        let second = model.ensure_section("b");
        assert_eq!(model.ensure_section("a"), first);
        assert_eq!(model.ensure_section("b"), second);
        assert_eq!(model.len(), 2);
    }
}
