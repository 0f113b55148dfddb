//! Named style registry owned by the manager

use std::collections::HashMap;
use crate::error::UiError;
use super::{Style, StyleRef};

/// Styles by name
#[derive(Clone, Debug, Default)]
pub struct StyleRegistry {
    styles: HashMap<String, Style>,
}

impl StyleRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a style, returning the one it replaced
    pub fn insert(&mut self, name: impl Into<String>, style: Style) -> Option<Style> {
        self.styles.insert(name.into(), style)
    }

    /// Look up a style by name
    pub fn get(&self, name: &str) -> Option<&Style> {
        self.styles.get(name)
    }

    /// Check if a style is registered
    pub fn contains(&self, name: &str) -> bool {
        self.styles.contains_key(name)
    }

    /// Number of registered styles
    pub fn len(&self) -> usize {
        self.styles.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    /// Materialize a style reference. Fails on the first unknown name.
    pub fn resolve(&self, reference: &StyleRef) -> Result<Style, UiError> {
        let mut merged = Style::default();
        for name in reference.names() {
            let style = self.get(name).ok_or_else(|| UiError::lookup(name))?;
            merged.merge(style);
        }
        Ok(merged)
    }

    /// Materialize a style reference, skipping unknown names.
    ///
    /// Returns `None` when no name matched, together with one
    /// [`UiError::Lookup`] per missing name.
    pub fn resolve_known(&self, reference: &StyleRef) -> (Option<Style>, Vec<UiError>) {
        let mut merged: Option<Style> = None;
        let mut missing = Vec::new();

        for name in reference.names() {
            match self.get(name) {
                Some(style) => merged.get_or_insert_with(Style::default).merge(style),
                None => missing.push(UiError::lookup(name)),
            }
        }

        (merged, missing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> StyleRegistry {
        let mut registry = StyleRegistry::new();
        registry.insert(
            "base",
            Style {
                fill: Some("black".to_string()),
                blur: true,
                ..Default::default()
            },
        );
        registry.insert(
            "light",
            Style {
                fill: Some("white".to_string()),
                ..Default::default()
            },
        );
        registry
    }

    #[test]
    fn test_resolve_single() {
        let style = registry().resolve(&StyleRef::from("base")).unwrap();
        assert_eq!(style.fill.as_deref(), Some("black"));
    }

    #[test]
    fn test_resolve_list_merges_in_order() {
        let style = registry()
            .resolve(&StyleRef::from(vec!["base", "light"]))
            .unwrap();
        assert_eq!(style.fill.as_deref(), Some("white"));
        assert!(style.blur);
    }

    #[test]
    fn test_resolve_unknown_is_strict() {
        let err = registry()
            .resolve(&StyleRef::from(vec!["base", "nope"]))
            .unwrap_err();
        assert_eq!(err, UiError::lookup("nope"));
    }

    #[test]
    fn test_resolve_known_degrades() {
        let registry = registry();

        let (style, missing) = registry.resolve_known(&StyleRef::from(vec!["nope", "light"]));
        assert_eq!(style.unwrap().fill.as_deref(), Some("white"));
        assert_eq!(missing, vec![UiError::lookup("nope")]);

        let (style, missing) = registry.resolve_known(&StyleRef::from("nope"));
        assert!(style.is_none());
        assert_eq!(missing.len(), 1);
    }
}
