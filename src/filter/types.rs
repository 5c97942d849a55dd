//! Filter state types
//!
//! The browser's filter state is two independent scalars: the free-text
//! query and the selected category. Together they form a simple Cartesian
//! state space; neither depends on the other.

use std::fmt;

/// Text label of the category control that clears the category filter
pub const ALL_CATEGORIES: &str = "all";

/// Category half of the filter state
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    /// No category restriction
    #[default]
    All,
    /// Only products whose category equals this label exactly
    Only(String),
}

impl CategoryFilter {
    /// Interpret a category label, treating `"all"` as the reset sentinel
    #[must_use]
    pub fn parse(label: &str) -> Self {
        if label == ALL_CATEGORIES {
            Self::All
        } else {
            Self::Only(label.to_string())
        }
    }

    /// Whether a product category passes this filter (case-sensitive)
    #[must_use]
    pub fn matches(&self, category: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(selected) => selected == category,
        }
    }

    /// Label shown on the matching category control
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::All => ALL_CATEGORIES,
            Self::Only(selected) => selected,
        }
    }

    #[must_use]
    pub const fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }
}

impl From<&str> for CategoryFilter {
    fn from(label: &str) -> Self {
        Self::parse(label)
    }
}

impl From<String> for CategoryFilter {
    fn from(label: String) -> Self {
        if label == ALL_CATEGORIES {
            Self::All
        } else {
            Self::Only(label)
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Current query and category selection
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    query: String,
    category: CategoryFilter,
}

impl FilterState {
    #[must_use]
    pub fn new(query: impl Into<String>, category: CategoryFilter) -> Self {
        Self {
            query: query.into(),
            category,
        }
    }

    /// Raw query text as typed
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub const fn category(&self) -> &CategoryFilter {
        &self.category
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn set_category(&mut self, category: CategoryFilter) {
        self.category = category;
    }
}
