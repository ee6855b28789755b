//! Buying / Selling Transaction Endpoints

use crate::models::{TransactionKind, TransactionRequest};
use super::{ApiClient, ApiResult};

impl ApiClient {
    /// Record a transaction. The form only needs to know the write
    /// succeeded, so the response body is not read on success.
    pub async fn create_transaction(
        &self,
        kind: TransactionKind,
        request: &TransactionRequest,
    ) -> ApiResult<()> {
        let response = self
            .http
            .post(self.endpoint(kind.endpoint()))
            .json(request)
            .send()
            .await?;
        Self::expect_success(response).await
    }
}
