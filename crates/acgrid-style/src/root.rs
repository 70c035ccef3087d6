#![forbid(unsafe_code)]

//! The global style root that theme variables are written to.
//!
//! In a browser host this is the document element's inline style; headless
//! hosts and tests use [`InMemoryStyleRoot`].

use crate::css::{CssVariableMap, to_css_rule};

/// A mutable set of CSS custom properties.
///
/// Writes are last-write-wins per property name.
pub trait StyleRoot {
    /// Set (or overwrite) a custom property.
    fn set_property(&mut self, name: &str, value: &str);

    /// Current value of a custom property.
    fn property(&self, name: &str) -> Option<String>;

    /// Remove a custom property, returning its previous value.
    fn remove_property(&mut self, name: &str) -> Option<String>;
}

/// Style root backed by an ordered map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InMemoryStyleRoot {
    properties: CssVariableMap,
}

impl InMemoryStyleRoot {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of properties currently set.
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// All properties, ordered by name.
    pub fn properties(&self) -> &CssVariableMap {
        &self.properties
    }

    pub fn clear(&mut self) {
        self.properties.clear();
    }

    /// Render the current properties as a `:root` rule.
    pub fn to_css(&self) -> String {
        to_css_rule(&self.properties, ":root")
    }
}

impl StyleRoot for InMemoryStyleRoot {
    fn set_property(&mut self, name: &str, value: &str) {
        self.properties.insert(name.to_owned(), value.to_owned());
    }

    fn property(&self, name: &str) -> Option<String> {
        self.properties.get(name).cloned()
    }

    fn remove_property(&mut self, name: &str) -> Option<String> {
        self.properties.remove(name)
    }
}

impl<R: StyleRoot + ?Sized> StyleRoot for &mut R {
    fn set_property(&mut self, name: &str, value: &str) {
        (**self).set_property(name, value);
    }

    fn property(&self, name: &str) -> Option<String> {
        (**self).property(name)
    }

    fn remove_property(&mut self, name: &str) -> Option<String> {
        (**self).remove_property(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_root_is_empty() {
        let root = InMemoryStyleRoot::new();
        assert!(root.is_empty());
        assert_eq!(root.len(), 0);
    }

    #[test]
    fn set_and_get_property() {
        let mut root = InMemoryStyleRoot::new();
        root.set_property("--ac-grid-primary", "#2563eb");
        assert_eq!(root.property("--ac-grid-primary").as_deref(), Some("#2563eb"));
        assert!(root.property("--ac-grid-missing").is_none());
    }

    #[test]
    fn last_write_wins() {
        let mut root = InMemoryStyleRoot::new();
        root.set_property("--ac-grid-primary", "#000");
        root.set_property("--ac-grid-primary", "#fff");
        assert_eq!(root.len(), 1);
        assert_eq!(root.property("--ac-grid-primary").as_deref(), Some("#fff"));
    }

    #[test]
    fn remove_property_returns_previous() {
        let mut root = InMemoryStyleRoot::new();
        root.set_property("--ac-grid-border", "#ccc");
        assert_eq!(root.remove_property("--ac-grid-border").as_deref(), Some("#ccc"));
        assert!(root.remove_property("--ac-grid-border").is_none());
    }

    #[test]
    fn mutable_reference_forwards_writes() {
        fn write<R: StyleRoot>(mut target: R) {
            target.set_property("--ac-grid-info", "#3b82f6");
        }

        let mut root = InMemoryStyleRoot::new();
        write(&mut root);
        assert_eq!(root.property("--ac-grid-info").as_deref(), Some("#3b82f6"));
    }

    #[test]
    fn to_css_renders_root_rule() {
        let mut root = InMemoryStyleRoot::new();
        root.set_property("--ac-grid-primary", "#fff");
        assert_eq!(root.to_css(), ":root {\n  --ac-grid-primary: #fff;\n}");
    }
}
