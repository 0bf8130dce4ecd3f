use crate::extract::Category;
use std::collections::BTreeSet;

/// Category names a caller asked for.
///
/// Names are kept verbatim. A name that is not one of the four categories is
/// allowed and simply never matches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestedKinds {
    names: BTreeSet<String>,
}

impl RequestedKinds {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request every category.
    pub fn all() -> Self {
        Category::ALL.iter().map(|c| c.as_str()).collect()
    }

    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        self.names.insert(name.into())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn accepts(&self, category: Category) -> bool {
        self.contains(category.as_str())
    }

    /// True when no requested name is a known category, so nothing can match.
    pub fn is_disjoint_from_categories(&self) -> bool {
        !Category::ALL.into_iter().any(|c| self.accepts(c))
    }

    /// Requested names that do not name a category.
    pub fn unknown_names(&self) -> impl Iterator<Item = &str> {
        self.names
            .iter()
            .map(String::as_str)
            .filter(|name| Category::from_name(name).is_none())
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for RequestedKinds {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().map(Into::into).collect(),
        }
    }
}
