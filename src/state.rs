use crate::normalize::Article;

/// Label for the synthetic "no filter" selector entry.
pub const ALL_PUBLICATIONS: &str = "All";

/// The active publication filter.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    All,
    Publication(String),
}

impl Selection {
    pub fn from_name(name: &str) -> Self {
        if name == ALL_PUBLICATIONS {
            Selection::All
        } else {
            Selection::Publication(name.to_string())
        }
    }

    pub fn matches(&self, publication: &str) -> bool {
        match self {
            Selection::All => true,
            Selection::Publication(name) => name == publication,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Selection::All => ALL_PUBLICATIONS,
            Selection::Publication(name) => name,
        }
    }
}

/// Interactive state for the widget: the publication filter plus at most one
/// expanded accordion item.
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    selection: Selection,
    expanded: Option<String>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Choose a publication filter. A name with no matching articles is
    /// allowed; the filtered view is then simply empty.
    pub fn select(&mut self, name: &str) {
        self.selection = Selection::from_name(name);
    }

    pub fn expanded_key(&self) -> Option<&str> {
        self.expanded.as_deref()
    }

    /// Exclusive expansion: toggling the expanded key collapses it; toggling
    /// any other key expands it and collapses whatever was expanded before.
    pub fn toggle(&mut self, key: &str) {
        if self.expanded.as_deref() == Some(key) {
            self.expanded = None;
        } else {
            self.expanded = Some(key.to_string());
        }
    }
}

/// Derived view: articles passing the current filter, in load order.
pub fn filter_articles<'a>(articles: &'a [Article], selection: &Selection) -> Vec<&'a Article> {
    articles
        .iter()
        .filter(|a| selection.matches(&a.publication))
        .collect()
}
