//! Frontend Models
//!
//! Data structures matching the inventory REST API.

use serde::{Deserialize, Serialize};

/// Stock item (matches backend)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: u32,
    pub name: String,
    pub no_of_available_item: u32,
}

impl Item {
    pub fn in_stock(&self) -> bool {
        self.no_of_available_item > 0
    }

    /// Label used in picker suggestions, e.g. `Widget (Available: 5)`
    pub fn suggestion_label(&self) -> String {
        format!("{} (Available: {})", self.name, self.no_of_available_item)
    }
}

/// Body of the create-item request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewItem {
    pub name: String,
    pub no_of_available_item: u32,
}

impl NewItem {
    /// New items always start with empty stock; buying is how stock grows.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            no_of_available_item: 0,
        }
    }
}

/// Direction of a stock transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionKind {
    Buy,
    Sell,
}

impl TransactionKind {
    pub fn endpoint(&self) -> &'static str {
        match self {
            TransactionKind::Buy => "/api/buying-transactions/",
            TransactionKind::Sell => "/api/selling-transactions/",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            TransactionKind::Buy => "Add Buying Transaction",
            TransactionKind::Sell => "Add Selling Transaction",
        }
    }

    /// Lowest accepted unit price
    pub fn min_unit_price(&self) -> f64 {
        match self {
            TransactionKind::Buy => 0.01,
            TransactionKind::Sell => 0.0,
        }
    }

    /// Whether the quantity is capped by the selected item's stock
    pub fn caps_quantity(&self) -> bool {
        matches!(self, TransactionKind::Sell)
    }
}

/// Body of a buy/sell request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransactionRequest {
    pub item: u32,
    pub no_of_item: u32,
    pub price_of_one_piece: f64,
}
