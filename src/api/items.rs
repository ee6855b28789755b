//! Item Endpoints

use crate::models::{Item, NewItem};
use super::{ApiClient, ApiResult};

pub const ITEMS_PATH: &str = "/api/items/";

impl ApiClient {
    /// List items, optionally filtered server-side by `search`
    pub async fn list_items(&self, search: Option<&str>) -> ApiResult<Vec<Item>> {
        let mut request = self.http.get(self.endpoint(ITEMS_PATH));
        if let Some(term) = search.filter(|t| !t.is_empty()) {
            request = request.query(&[("search", term)]);
        }
        let response = request.send().await?;
        Self::decode(response).await
    }

    pub async fn create_item(&self, item: &NewItem) -> ApiResult<Item> {
        let response = self
            .http
            .post(self.endpoint(ITEMS_PATH))
            .json(item)
            .send()
            .await?;
        Self::decode(response).await
    }
}
