//! Routes
//!
//! The four pages, addressed through `location.hash`.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Directory,
    AddItem,
    Buy,
    Sell,
}

impl Route {
    pub const ALL: [Route; 4] = [Route::Directory, Route::AddItem, Route::Buy, Route::Sell];

    pub fn hash(&self) -> &'static str {
        match self {
            Route::Directory => "#/",
            Route::AddItem => "#/add-item",
            Route::Buy => "#/buy",
            Route::Sell => "#/sell",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Route::Directory => "Items",
            Route::AddItem => "Add Item",
            Route::Buy => "Buy",
            Route::Sell => "Sell",
        }
    }

    /// Unknown hashes land on the directory.
    pub fn from_hash(hash: &str) -> Self {
        let path = hash.trim_start_matches('#').trim_start_matches('/').trim_end_matches('/');
        match path {
            "add-item" => Route::AddItem,
            "buy" => Route::Buy,
            "sell" => Route::Sell,
            _ => Route::Directory,
        }
    }
}
