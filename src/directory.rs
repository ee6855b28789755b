//! Item Directory State
//!
//! Catalog listing with optional server-side search.

use reactive_stores::Store;

use crate::api::ApiError;
use crate::models::Item;

pub const FETCH_FAILED: &str = "Failed to fetch items. Please try again.";
pub const NO_ITEMS: &str = "No items found.";

/// Directory state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct DirectoryState {
    /// Last successfully fetched items
    pub items: Vec<Item>,
    /// Search box contents
    pub search: String,
    /// A fetch is in flight
    pub loading: bool,
    /// Banner for the last failed fetch
    pub error: Option<String>,
}

/// One rendered table row
#[derive(Debug, Clone, PartialEq)]
pub enum DirectoryRow {
    Item(Item),
    Placeholder(&'static str),
}

impl DirectoryState {
    /// Mark a fetch as started. Returns `None` while another one is still in
    /// flight, otherwise the search term to send (if any).
    pub fn begin_fetch(&mut self) -> Option<Option<String>> {
        if self.loading {
            return None;
        }
        self.loading = true;
        let term = self.search.trim();
        Some((!term.is_empty()).then(|| term.to_string()))
    }

    /// A failure keeps whatever list was showing before.
    pub fn finish_fetch(&mut self, result: Result<Vec<Item>, ApiError>) {
        self.loading = false;
        match result {
            Ok(items) => {
                self.items = items;
                self.error = None;
            }
            Err(e) => {
                log::warn!(target: "DIRECTORY", "Failed to fetch items: {e}");
                self.error = Some(FETCH_FAILED.to_string());
            }
        }
    }

    pub fn rows(&self) -> Vec<DirectoryRow> {
        if self.items.is_empty() {
            return vec![DirectoryRow::Placeholder(NO_ITEMS)];
        }
        self.items.iter().cloned().map(DirectoryRow::Item).collect()
    }
}
