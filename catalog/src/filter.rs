//! Category filtering over in-memory item lists

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::types::{Categorized, CategoryOption};

/// Identifier of the catch-all category
pub const ALL: &str = "all";

/// Current category selection of a list view
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    /// Parse a selection; absent, empty and `"all"` mean no filtering
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            None => CategoryFilter::All,
            Some(v) if v.is_empty() || v == ALL => CategoryFilter::All,
            Some(v) => CategoryFilter::Only(v.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            CategoryFilter::All => ALL,
            CategoryFilter::Only(category) => category,
        }
    }

    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(selected) => selected == category,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for CategoryFilter {
    fn from(value: &str) -> Self {
        CategoryFilter::parse(Some(value))
    }
}

impl Serialize for CategoryFilter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for CategoryFilter {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Option::<String>::deserialize(deserializer)?;
        Ok(CategoryFilter::parse(value.as_deref()))
    }
}

/// Ordered subsequence of `items` matching `filter`.
///
/// Stable: relative order of the source list is preserved. An unknown
/// category yields an empty result.
pub fn filter_items<'a, T: Categorized>(items: &'a [T], filter: &CategoryFilter) -> Vec<&'a T> {
    items.iter().filter(|item| filter.matches(item.category())).collect()
}

/// `"all"` followed by the distinct categories of `items` in first-seen order
pub fn derive_categories<T: Categorized>(items: &[T]) -> Vec<CategoryOption> {
    let mut options = vec![CategoryOption::new(ALL, capitalize(ALL))];
    for item in items {
        let category = item.category();
        if !options.iter().any(|o| o.id == category) {
            options.push(CategoryOption::new(category, capitalize(category)));
        }
    }
    options
}

fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Fixed filter menu rendered as tabs or buttons
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryMenu {
    pub options: Vec<CategoryOption>,
}

impl CategoryMenu {
    pub fn new(options: Vec<CategoryOption>) -> Self {
        Self { options }
    }

    pub fn from_items<T: Categorized>(items: &[T]) -> Self {
        Self::new(derive_categories(items))
    }

    pub fn is_selected(&self, id: &str, filter: &CategoryFilter) -> bool {
        filter.as_str() == id
    }

    /// Label for a category id, falling back to the id itself
    pub fn label_for<'a>(&'a self, id: &'a str) -> &'a str {
        self.options
            .iter()
            .find(|o| o.id == id)
            .map(|o| o.label.as_str())
            .unwrap_or(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CategoryOption> {
        self.options.iter()
    }
}
