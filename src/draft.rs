//! Transaction Draft
//!
//! Client-only state behind the buy and sell forms: picker, quantity and
//! unit price as typed, and the derived total.

use thiserror::Error;

use crate::api::{ApiError, ApiResult};
use crate::models::{Item, TransactionKind, TransactionRequest};
use crate::picker::{ItemPicker, PickError, SelectionPolicy};

pub const DEFAULT_QUANTITY: &str = "1";
pub const DEFAULT_UNIT_PRICE: &str = "0";

pub const LOAD_ITEMS_FAILED: &str = "Failed to load items.";
pub const SUBMIT_FAILED: &str = "Failed to submit transaction. Please try again.";
pub const SUBMIT_SUCCEEDED: &str = "Transaction recorded successfully!";

/// Reasons a draft cannot be submitted yet
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DraftError {
    #[error("Please select an item")]
    NoItemSelected,
    #[error("Quantity must be a whole number of at least 1.")]
    InvalidQuantity,
    #[error("Price per unit must be at least {min}.")]
    InvalidUnitPrice { min: f64 },
    #[error("Not enough items in stock. Available: {available}")]
    NotEnoughStock { available: u32 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct TransactionDraft {
    kind: TransactionKind,
    pub picker: ItemPicker,
    quantity_text: String,
    unit_price_text: String,
    /// Error banner; any field edit dismisses it
    error: Option<String>,
}

impl TransactionDraft {
    pub fn new(kind: TransactionKind) -> Self {
        let policy = match kind {
            TransactionKind::Buy => SelectionPolicy::AnyItem,
            TransactionKind::Sell => SelectionPolicy::InStockOnly,
        };
        Self {
            kind,
            picker: ItemPicker::new(policy),
            quantity_text: DEFAULT_QUANTITY.to_string(),
            unit_price_text: DEFAULT_UNIT_PRICE.to_string(),
            error: None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn show_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    /// User typed in the item search box
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.picker.set_query(query);
        self.error = None;
    }

    pub fn quantity_text(&self) -> &str {
        &self.quantity_text
    }

    pub fn unit_price_text(&self) -> &str {
        &self.unit_price_text
    }

    pub fn set_quantity_text(&mut self, text: impl Into<String>) {
        self.quantity_text = text.into();
        self.error = None;
    }

    pub fn set_unit_price_text(&mut self, text: impl Into<String>) {
        self.unit_price_text = text.into();
        self.error = None;
    }

    pub fn quantity(&self) -> Option<u32> {
        self.quantity_text.trim().parse().ok()
    }

    pub fn unit_price(&self) -> Option<f64> {
        self.unit_price_text
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|p| p.is_finite())
    }

    /// quantity x unit price; unparseable fields count as zero
    pub fn total(&self) -> f64 {
        f64::from(self.quantity().unwrap_or(0)) * self.unit_price().unwrap_or(0.0)
    }

    /// Upper bound for the quantity input, when the flow caps it
    pub fn max_quantity(&self) -> Option<u32> {
        if !self.kind.caps_quantity() {
            return None;
        }
        self.picker.selection().map(|s| s.stock_snapshot)
    }

    /// Select `item`. Sell drafts clamp the quantity to the snapshot stock.
    pub fn select_item(&mut self, item: &Item) -> Result<(), PickError> {
        let stock = self.picker.select(item)?.stock_snapshot;
        if self.kind.caps_quantity() {
            let clamped = self.quantity().unwrap_or(1).min(stock).max(1);
            self.quantity_text = clamped.to_string();
        }
        self.error = None;
        Ok(())
    }

    /// Inline warning shown while the user edits the quantity
    pub fn quantity_warning(&self) -> Option<String> {
        let max = self.max_quantity()?;
        match self.quantity() {
            Some(q) if q > max => Some(format!("Cannot exceed available stock ({max})")),
            _ => None,
        }
    }

    /// Build the request, or say why it cannot be sent
    pub fn validate(&self) -> Result<TransactionRequest, DraftError> {
        let selection = self.picker.selection().ok_or(DraftError::NoItemSelected)?;

        let quantity = self
            .quantity()
            .filter(|q| *q >= 1)
            .ok_or(DraftError::InvalidQuantity)?;

        let min = self.kind.min_unit_price();
        let unit_price = self
            .unit_price()
            .filter(|p| *p >= min)
            .ok_or(DraftError::InvalidUnitPrice { min })?;

        if self.kind.caps_quantity() && quantity > selection.stock_snapshot {
            return Err(DraftError::NotEnoughStock { available: selection.stock_snapshot });
        }

        Ok(TransactionRequest {
            item: selection.item_id,
            no_of_item: quantity,
            price_of_one_piece: unit_price,
        })
    }

    /// Back to the freshly-mounted state
    pub fn reset(&mut self) {
        *self = Self::new(self.kind);
    }
}

/// Outcome of the on-mount item load: the picker's options and, on
/// failure, the banner text. A failed load leaves the picker empty.
pub fn load_finished(result: ApiResult<Vec<Item>>) -> (Vec<Item>, Option<String>) {
    match result {
        Ok(items) => {
            log::info!(target: "PICKER", "Loaded {} items", items.len());
            (items, None)
        }
        Err(e) => {
            log::error!(target: "PICKER", "Error fetching items: {e}");
            (Vec::new(), Some(LOAD_ITEMS_FAILED.to_string()))
        }
    }
}

/// Banner text for a failed submit. Sell trusts the server's own detail
/// message since its stock may have moved since the snapshot.
pub fn submit_failure_message(kind: TransactionKind, err: &ApiError) -> String {
    match (kind, err.detail()) {
        (TransactionKind::Sell, Some(detail)) => detail.to_string(),
        _ => SUBMIT_FAILED.to_string(),
    }
}

/// Format an amount for display without trailing zeros. Nine decimals keep
/// any price a user can type while dropping float noise like `0.30000000000000004`.
pub fn format_amount(value: f64) -> String {
    let fixed = format!("{value:.9}");
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    match trimmed {
        "" | "-0" => "0".to_string(),
        s => s.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ErrorBody;

    fn widget() -> Item {
        Item { id: 1, name: "Widget".to_string(), no_of_available_item: 5 }
    }

    #[test]
    fn test_new_draft_defaults() {
        let draft = TransactionDraft::new(TransactionKind::Buy);
        assert_eq!(draft.quantity(), Some(1));
        assert_eq!(draft.unit_price(), Some(0.0));
        assert_eq!(draft.total(), 0.0);
        assert_eq!(draft.validate(), Err(DraftError::NoItemSelected));
    }

    #[test]
    fn test_total_tracks_quantity_and_price() {
        let mut draft = TransactionDraft::new(TransactionKind::Buy);
        for (q, p) in [(1u32, 0.5f64), (3, 2.25), (10, 10.0), (7, 0.0)] {
            draft.set_quantity_text(q.to_string());
            draft.set_unit_price_text(p.to_string());
            assert_eq!(draft.total(), f64::from(q) * p);
        }
        draft.set_quantity_text("");
        assert_eq!(draft.total(), 0.0);
    }

    #[test]
    fn test_sell_widget_walkthrough() {
        let mut draft = TransactionDraft::new(TransactionKind::Sell);
        draft.picker.set_query("wid");
        draft.select_item(&widget()).unwrap();
        assert_eq!(draft.max_quantity(), Some(5));
        assert_eq!(draft.picker.query(), "Widget");

        draft.set_quantity_text("6");
        draft.set_unit_price_text("10");
        assert_eq!(draft.quantity_warning().as_deref(), Some("Cannot exceed available stock (5)"));
        assert_eq!(draft.validate(), Err(DraftError::NotEnoughStock { available: 5 }));
        assert_eq!(
            DraftError::NotEnoughStock { available: 5 }.to_string(),
            "Not enough items in stock. Available: 5"
        );

        draft.set_quantity_text("5");
        assert_eq!(draft.quantity_warning(), None);
        assert_eq!(format_amount(draft.total()), "50");
        assert_eq!(
            draft.validate(),
            Ok(TransactionRequest { item: 1, no_of_item: 5, price_of_one_piece: 10.0 })
        );
    }

    #[test]
    fn test_sell_select_clamps_quantity() {
        let mut draft = TransactionDraft::new(TransactionKind::Sell);
        draft.set_quantity_text("9");
        draft.picker.set_query("w");
        draft.select_item(&widget()).unwrap();
        assert_eq!(draft.quantity_text(), "5");

        let mut draft = TransactionDraft::new(TransactionKind::Sell);
        draft.set_quantity_text("abc");
        draft.picker.set_query("w");
        draft.select_item(&widget()).unwrap();
        assert_eq!(draft.quantity_text(), "1");
    }

    #[test]
    fn test_buy_ignores_stock() {
        let mut draft = TransactionDraft::new(TransactionKind::Buy);
        draft.picker.set_query("w");
        draft.select_item(&widget()).unwrap();
        draft.set_quantity_text("100");
        draft.set_unit_price_text("2.5");
        assert_eq!(draft.max_quantity(), None);
        assert_eq!(draft.quantity_warning(), None);
        assert_eq!(draft.validate().unwrap().no_of_item, 100);
    }

    #[test]
    fn test_buy_price_lower_bound() {
        let mut draft = TransactionDraft::new(TransactionKind::Buy);
        draft.picker.set_query("w");
        draft.select_item(&widget()).unwrap();
        assert_eq!(draft.validate(), Err(DraftError::InvalidUnitPrice { min: 0.01 }));

        draft.set_unit_price_text("0.01");
        assert!(draft.validate().is_ok());

        let mut sell = TransactionDraft::new(TransactionKind::Sell);
        sell.picker.set_query("w");
        sell.select_item(&widget()).unwrap();
        assert!(sell.validate().is_ok());
    }

    #[test]
    fn test_invalid_quantity() {
        let mut draft = TransactionDraft::new(TransactionKind::Buy);
        draft.picker.set_query("w");
        draft.select_item(&widget()).unwrap();
        draft.set_unit_price_text("1");
        for bad in ["0", "", "-2", "1.5", "lots"] {
            draft.set_quantity_text(bad);
            assert_eq!(draft.validate(), Err(DraftError::InvalidQuantity), "quantity {bad:?}");
        }
    }

    #[test]
    fn test_requery_forces_reselection() {
        let mut draft = TransactionDraft::new(TransactionKind::Sell);
        draft.picker.set_query("w");
        draft.select_item(&widget()).unwrap();
        draft.picker.set_query("Widge");
        assert_eq!(draft.validate(), Err(DraftError::NoItemSelected));
        assert_eq!(draft.max_quantity(), None);
    }

    #[test]
    fn test_reset_keeps_kind() {
        let mut draft = TransactionDraft::new(TransactionKind::Sell);
        draft.picker.set_query("w");
        draft.select_item(&widget()).unwrap();
        draft.set_unit_price_text("3");
        draft.reset();
        assert_eq!(draft, TransactionDraft::new(TransactionKind::Sell));
    }

    #[test]
    fn test_submit_failure_messages() {
        let stock_race = ApiError::Rejected {
            status: 400,
            body: ErrorBody::parse(r#"{"detail":"Only 2 Widget left."}"#),
        };
        assert_eq!(submit_failure_message(TransactionKind::Sell, &stock_race), "Only 2 Widget left.");
        assert_eq!(submit_failure_message(TransactionKind::Buy, &stock_race), SUBMIT_FAILED);

        let offline = ApiError::Network("offline".into());
        assert_eq!(submit_failure_message(TransactionKind::Sell, &offline), SUBMIT_FAILED);
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(50.0), "50");
        assert_eq!(format_amount(12.5), "12.5");
        assert_eq!(format_amount(0.1 * 3.0), "0.3");
        assert_eq!(format_amount(0.0), "0");
        assert_eq!(format_amount(19.99), "19.99");
        assert_eq!(format_amount(0.01), "0.01");
    }

    #[test]
    fn test_total_display_keeps_sub_cent_prices() {
        let mut draft = TransactionDraft::new(TransactionKind::Sell);
        draft.set_quantity_text("3");
        draft.set_unit_price_text("0.333");
        assert_eq!(format_amount(draft.total()), "0.999");

        draft.set_quantity_text("7");
        draft.set_unit_price_text("1.2345");
        assert_eq!(format_amount(draft.total()), "8.6415");
    }

    #[test]
    fn test_failed_load_leaves_picker_empty() {
        let (items, error) = load_finished(Err(ApiError::Network("offline".into())));
        assert!(items.is_empty());
        assert_eq!(error.as_deref(), Some(LOAD_ITEMS_FAILED));

        let mut draft = TransactionDraft::new(TransactionKind::Buy);
        for query in ["w", "Widget", "zzz"] {
            draft.set_query(query);
            assert!(draft.picker.suggestions(&items).is_none(), "query {query:?}");
        }
    }

    #[test]
    fn test_successful_load_feeds_picker() {
        let (items, error) = load_finished(Ok(vec![widget()]));
        assert_eq!(error, None);
        let mut draft = TransactionDraft::new(TransactionKind::Buy);
        draft.set_query("wid");
        assert_eq!(draft.picker.suggestions(&items).map(Iterator::count), Some(1));
    }

    #[test]
    fn test_field_edits_dismiss_error_banner() {
        let mut draft = TransactionDraft::new(TransactionKind::Sell);
        draft.set_query("w");
        draft.select_item(&widget()).unwrap();
        draft.set_quantity_text("6");
        draft.set_unit_price_text("1");
        let err = draft.validate().unwrap_err();
        draft.show_error(err.to_string());
        assert_eq!(draft.error(), Some("Not enough items in stock. Available: 5"));

        draft.set_quantity_text("5");
        assert_eq!(draft.error(), None);

        draft.show_error(SUBMIT_FAILED);
        draft.set_unit_price_text("2");
        assert_eq!(draft.error(), None);

        draft.show_error(SUBMIT_FAILED);
        draft.set_query("Wi");
        assert_eq!(draft.error(), None);
    }
}
