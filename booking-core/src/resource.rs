//! Bookable resources, business locations and the resource selection.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A bookable entity appointments are assigned to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    pub id: String,
    pub name: String,
    pub kind: ResourceKind,
    /// Whether the resource currently takes bookings
    #[serde(default = "default_available")]
    pub available: bool,
}

fn default_available() -> bool {
    true
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Workstation,
    Professional,
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceKind::Workstation => write!(f, "workstation"),
            ResourceKind::Professional => write!(f, "professional"),
        }
    }
}

/// A physical business location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub id: String,
    pub name: String,
    pub address: String,
}

/// Ordered set of selected resource ids.
///
/// Order is the order in which resources were selected and drives the
/// left-to-right order of resource columns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceSelection {
    ids: Vec<String>,
}

impl ResourceSelection {
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut selection = ResourceSelection::default();
        for id in ids {
            selection.insert(id.into());
        }
        selection
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|s| s == id)
    }

    /// Adds `id` at the end. Returns false if it was already selected.
    pub fn insert(&mut self, id: String) -> bool {
        if self.contains(&id) {
            return false;
        }
        self.ids.push(id);
        true
    }

    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.ids.len();
        self.ids.retain(|s| s != id);
        self.ids.len() != before
    }

    /// Deselect if selected, otherwise append.
    pub fn toggle(&mut self, id: &str) {
        if !self.remove(id) {
            self.ids.push(id.to_string());
        }
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for ResourceSelection {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        ResourceSelection::new(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_deduplicates_and_keeps_order() {
        let selection = ResourceSelection::new(["e-working", "e-3444802", "e-working"]);
        assert_eq!(selection.ids(), ["e-working", "e-3444802"]);
        assert_eq!(selection.len(), 2);
    }

    #[test]
    fn test_toggle_appends_then_removes() {
        let mut selection = ResourceSelection::new(["e-working"]);

        selection.toggle("e-3444804");
        assert_eq!(selection.ids(), ["e-working", "e-3444804"]);

        selection.toggle("e-working");
        assert_eq!(selection.ids(), ["e-3444804"]);
        assert!(!selection.contains("e-working"));
    }

    #[test]
    fn test_resource_available_defaults_true() {
        let resource: Resource = toml::from_str(
            r#"
            id = "e-working"
            name = "Estação de Trabalho 1"
            kind = "workstation"
            "#,
        )
        .unwrap();

        assert!(resource.available);
        assert_eq!(resource.kind, ResourceKind::Workstation);
    }
}
