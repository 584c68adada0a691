//! Ordered class maps.
use smol_str::SmolStr;

use std::fmt;

/// An ordered set of CSS class names, each with an enabled flag.
///
/// Mirrors the behavior of a templating `classMap`: a name keeps the position
/// of its first insertion while the last flag written for it wins. Only
/// enabled names are rendered.
///
/// # Example
/// ```
/// use spectrum_markup_core::ClassList;
///
/// let classes = ClassList::new()
///     .with("spectrum-Menu-item")
///     .toggle("is-selected", true)
///     .toggle("is-disabled", false);
///
/// assert_eq!(classes.to_string(), "spectrum-Menu-item is-selected");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList {
    entries: Vec<(SmolStr, bool)>,
}

impl ClassList {
    /// Creates an empty [`ClassList`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an always-enabled class name.
    #[must_use]
    pub fn with(self, name: impl Into<SmolStr>) -> Self {
        self.toggle(name, true)
    }

    /// Adds a class name that is only rendered when `enabled` is `true`.
    #[must_use]
    pub fn toggle(mut self, name: impl Into<SmolStr>, enabled: bool) -> Self {
        self.set(name, enabled);
        self
    }

    /// Adds every class name of the iterator, enabled.
    #[must_use]
    pub fn extend<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<SmolStr>,
    {
        for name in names {
            self.set(name, true);
        }
        self
    }

    /// Sets the flag of a class name in place.
    pub fn set(&mut self, name: impl Into<SmolStr>, enabled: bool) {
        let name = name.into();

        // Empty names would render as stray whitespace.
        if name.is_empty() {
            return;
        }

        match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            Some(entry) => entry.1 = enabled,
            None => self.entries.push((name, enabled)),
        }
    }

    /// Returns `true` if the class name is present and enabled.
    pub fn contains(&self, name: &str) -> bool {
        self.entries
            .iter()
            .any(|(existing, enabled)| *enabled && existing == name)
    }

    /// Returns `true` if no class name would be rendered.
    pub fn is_empty(&self) -> bool {
        self.entries.iter().all(|(_, enabled)| !enabled)
    }

    /// Iterates over the enabled class names, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter(|(_, enabled)| *enabled)
            .map(|(name, _)| name.as_str())
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, name) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(name)?;
        }
        Ok(())
    }
}

impl<S> FromIterator<S> for ClassList
where
    S: Into<SmolStr>,
{
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new().extend(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_classes_are_skipped() {
        let classes = ClassList::new()
            .with("spectrum-Menu")
            .toggle("is-selectable", false);

        assert_eq!(classes.to_string(), "spectrum-Menu");
        assert!(!classes.contains("is-selectable"));
    }

    #[test]
    fn test_repeated_name_keeps_first_position() {
        let classes = ClassList::new()
            .toggle("a", false)
            .with("b")
            .toggle("a", true);

        assert_eq!(classes.to_string(), "a b");
    }

    #[test]
    fn test_last_flag_wins() {
        let classes = ClassList::new().with("a").toggle("a", false);

        assert!(classes.is_empty());
        assert_eq!(classes.to_string(), "");
    }

    #[test]
    fn test_empty_names_are_ignored() {
        let classes: ClassList = ["", "x", ""].into_iter().collect();

        assert_eq!(classes.iter().collect::<Vec<_>>(), vec!["x"]);
    }
}
