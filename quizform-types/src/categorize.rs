use serde::{Deserialize, Serialize};

use crate::PayloadError;

/// Payload of a sorting question: respondents drag items into categories.
///
/// Both lists are non-empty. Labels need not be unique; duplicates stay
/// distinguishable by position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorizePayload {
    pub categories: Vec<String>,
    pub items: Vec<String>,
}

impl CategorizePayload {
    pub fn new(categories: Vec<String>, items: Vec<String>) -> Self {
        Self { categories, items }
    }

    pub fn validate(&self) -> Result<(), PayloadError> {
        if self.categories.is_empty() {
            return Err(PayloadError::NoCategories);
        }
        if self.items.is_empty() {
            return Err(PayloadError::NoItems);
        }
        Ok(())
    }

    /// Position of the first category with the given label.
    pub fn category_index(&self, label: &str) -> Option<usize> {
        self.categories.iter().position(|c| c == label)
    }

    /// Position of the first item with the given label.
    pub fn item_index(&self, label: &str) -> Option<usize> {
        self.items.iter().position(|i| i == label)
    }

    /// Append a category labelled `Category N`.
    pub fn add_category(&self) -> Self {
        let mut next = self.clone();
        next.categories
            .push(format!("Category {}", self.categories.len() + 1));
        next
    }

    pub fn rename_category(&self, index: usize, label: impl Into<String>) -> Self {
        let mut next = self.clone();
        if let Some(category) = next.categories.get_mut(index) {
            *category = label.into();
        }
        next
    }

    /// Remove a category. The last remaining category cannot be removed.
    pub fn remove_category(&self, index: usize) -> Self {
        let mut next = self.clone();
        if index < next.categories.len() && next.categories.len() > 1 {
            next.categories.remove(index);
        }
        next
    }

    /// Append an item labelled `Item N`.
    pub fn add_item(&self) -> Self {
        let mut next = self.clone();
        next.items.push(format!("Item {}", self.items.len() + 1));
        next
    }

    pub fn rename_item(&self, index: usize, label: impl Into<String>) -> Self {
        let mut next = self.clone();
        if let Some(item) = next.items.get_mut(index) {
            *item = label.into();
        }
        next
    }

    /// Remove an item. The last remaining item cannot be removed.
    pub fn remove_item(&self, index: usize) -> Self {
        let mut next = self.clone();
        if index < next.items.len() && next.items.len() > 1 {
            next.items.remove(index);
        }
        next
    }
}
