//! Item Picker
//!
//! Incremental-search combobox state shared by the buy and sell forms.
//! Filtering runs over the in-memory item list; no request per keystroke.

use thiserror::Error;

use crate::models::Item;

/// Which items may be committed as a selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionPolicy {
    /// Any item (buying is how stock increases)
    AnyItem,
    /// Only items with stock left
    InStockOnly,
}

impl SelectionPolicy {
    pub fn allows(&self, item: &Item) -> bool {
        match self {
            SelectionPolicy::AnyItem => true,
            SelectionPolicy::InStockOnly => item.in_stock(),
        }
    }
}

/// A committed item reference plus the stock seen at selection time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub item_id: u32,
    pub name: String,
    pub stock_snapshot: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PickError {
    #[error("{0} is out of stock")]
    OutOfStock(String),
}

/// Lazy case-insensitive substring filter over a slice of items.
///
/// Cloning restarts the scan from the current position, so a caller can
/// count matches and then iterate them again.
#[derive(Debug, Clone)]
pub struct Matches<'a> {
    items: std::slice::Iter<'a, Item>,
    needle: String,
}

impl<'a> Iterator for Matches<'a> {
    type Item = &'a Item;

    fn next(&mut self) -> Option<Self::Item> {
        let needle = &self.needle;
        self.items
            .by_ref()
            .find(|item| item.name.to_lowercase().contains(needle.as_str()))
    }
}

/// Filter `items` by `query`; an empty query matches everything.
pub fn filter_by_name<'a>(items: &'a [Item], query: &str) -> Matches<'a> {
    Matches {
        items: items.iter(),
        needle: query.to_lowercase(),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ItemPicker {
    query: String,
    selection: Option<Selection>,
    open: bool,
    policy: SelectionPolicy,
}

impl ItemPicker {
    pub fn new(policy: SelectionPolicy) -> Self {
        Self {
            query: String::new(),
            selection: None,
            open: false,
            policy,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    /// User typed in the search box. Any previous selection is dropped so the
    /// item must be picked again before submit.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.selection = None;
        self.open = true;
    }

    /// Every item matching the current query
    pub fn matches<'a>(&self, items: &'a [Item]) -> Matches<'a> {
        filter_by_name(items, &self.query)
    }

    /// Suggestions to render, or `None` when the list should be hidden:
    /// empty query, closed by a selection, or nothing matches.
    pub fn suggestions<'a>(&self, items: &'a [Item]) -> Option<Matches<'a>> {
        if !self.open || self.query.is_empty() {
            return None;
        }
        let matches = self.matches(items);
        matches.clone().next()?;
        Some(matches)
    }

    pub fn can_select(&self, item: &Item) -> bool {
        self.policy.allows(item)
    }

    /// Commit `item`: query becomes its exact name, stock is snapshotted and
    /// the suggestion list closes.
    pub fn select(&mut self, item: &Item) -> Result<&Selection, PickError> {
        if !self.can_select(item) {
            return Err(PickError::OutOfStock(item.name.clone()));
        }
        self.query = item.name.clone();
        self.open = false;
        Ok(self.selection.insert(Selection {
            item_id: item.id,
            name: item.name.clone(),
            stock_snapshot: item.no_of_available_item,
        }))
    }
}
