//! In-memory movie catalog
//!
//! Holds the ordered list of movie titles for the lifetime of the process.
//! Every mutation goes through `add`, `edit`, or `delete`; blank input is
//! rejected at this boundary so stored titles are never blank. Duplicates are
//! allowed, and edit/delete act on every entry equal to the given title.

use tracing::debug;

/// Ordered collection of movie titles, insertion order preserved.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<String>,
}

impl Catalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append a title to the end of the catalog.
    ///
    /// Returns `false` without touching the catalog when the title is blank
    /// after trimming. The stored title is the trimmed form.
    pub fn add(&mut self, title: &str) -> bool {
        let title = title.trim();
        if title.is_empty() {
            debug!("add rejected: blank title");
            return false;
        }
        self.entries.push(title.to_string());
        debug!(title, total = self.entries.len(), "title added");
        true
    }

    /// Replace every entry equal to `old` with `new`, positions preserved.
    ///
    /// Returns `None` without touching the catalog when either title is blank
    /// after trimming. Otherwise returns the number of entries replaced,
    /// which is zero when nothing matched.
    pub fn edit(&mut self, old: &str, new: &str) -> Option<usize> {
        let old = old.trim();
        let new = new.trim();
        if old.is_empty() || new.is_empty() {
            debug!("edit rejected: blank title");
            return None;
        }

        let mut replaced = 0;
        for entry in self.entries.iter_mut().filter(|e| *e == old) {
            *entry = new.to_string();
            replaced += 1;
        }
        debug!(old, new, replaced, "edit applied");
        Some(replaced)
    }

    /// Remove every entry equal to `title`, returning how many were removed.
    ///
    /// Entries are never blank, so a blank `title` matches nothing.
    pub fn delete(&mut self, title: &str) -> usize {
        let before = self.entries.len();
        self.entries.retain(|e| e != title);
        let removed = before - self.entries.len();
        debug!(title, removed, "delete applied");
        removed
    }

    /// Current titles in insertion order.
    pub fn titles(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog_of(titles: &[&str]) -> Catalog {
        let mut catalog = Catalog::new();
        for title in titles {
            assert!(catalog.add(title));
        }
        catalog
    }

    #[test]
    fn starts_empty() {
        let catalog = Catalog::new();
        assert!(catalog.is_empty());
        assert_eq!(catalog.titles(), &[] as &[String]);
    }

    #[test]
    fn add_appends_in_order() {
        let catalog = catalog_of(&["A", "B"]);
        assert_eq!(catalog.titles(), ["A", "B"]);
    }

    #[test]
    fn add_rejects_blank_titles() {
        let mut catalog = catalog_of(&["Dune"]);
        assert!(!catalog.add(""));
        assert!(!catalog.add("   "));
        assert_eq!(catalog.titles(), ["Dune"]);
    }

    #[test]
    fn add_trims_surrounding_whitespace() {
        let mut catalog = Catalog::new();
        assert!(catalog.add("  Dune  "));
        assert_eq!(catalog.titles(), ["Dune"]);
    }

    #[test]
    fn add_allows_duplicates() {
        let catalog = catalog_of(&["A", "A"]);
        assert_eq!(catalog.titles(), ["A", "A"]);
    }

    #[test]
    fn edit_replaces_all_matches_in_place() {
        let mut catalog = catalog_of(&["A", "B", "A"]);
        assert_eq!(catalog.edit("A", "Z"), Some(2));
        assert_eq!(catalog.titles(), ["Z", "B", "Z"]);
    }

    #[test]
    fn edit_without_match_changes_nothing() {
        let mut catalog = catalog_of(&["A", "B"]);
        assert_eq!(catalog.edit("X", "Z"), Some(0));
        assert_eq!(catalog.titles(), ["A", "B"]);
    }

    #[test]
    fn edit_rejects_blank_titles() {
        let mut catalog = catalog_of(&["A"]);
        assert_eq!(catalog.edit("", "Z"), None);
        assert_eq!(catalog.edit("A", "   "), None);
        assert_eq!(catalog.titles(), ["A"]);
    }

    #[test]
    fn delete_removes_all_matches() {
        let mut catalog = catalog_of(&["A", "B", "A"]);
        assert_eq!(catalog.delete("A"), 2);
        assert_eq!(catalog.titles(), ["B"]);
    }

    #[test]
    fn delete_blank_or_missing_is_a_noop() {
        let mut catalog = catalog_of(&["A", "B"]);
        assert_eq!(catalog.delete(""), 0);
        assert_eq!(catalog.delete("X"), 0);
        assert_eq!(catalog.titles(), ["A", "B"]);
    }
}
