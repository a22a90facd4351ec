//! Quotation endpoints.

use async_trait::async_trait;
use reqwest::Method;

use bookdesk_core::result::AppResult;
use bookdesk_entity::quotation::Quotation;

use crate::api::QuotationApi;
use crate::client::ApiClient;
use crate::dto::response::Envelope;

#[async_trait]
impl QuotationApi for ApiClient {
    async fn list_quotations(&self) -> AppResult<Vec<Quotation>> {
        let quotations: Envelope<Vec<Quotation>> = self
            .send_json(Method::GET, &["quotations"], None, None::<&()>)
            .await?;
        Ok(quotations.into_inner())
    }
}
