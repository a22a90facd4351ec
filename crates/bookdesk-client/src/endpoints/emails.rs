//! Inbox endpoints.

use async_trait::async_trait;
use reqwest::Method;

use bookdesk_core::result::AppResult;
use bookdesk_entity::email::EmailMessage;

use crate::api::EmailApi;
use crate::client::ApiClient;
use crate::dto::response::Envelope;

#[async_trait]
impl EmailApi for ApiClient {
    async fn list_emails(&self) -> AppResult<Vec<EmailMessage>> {
        let emails: Envelope<Vec<EmailMessage>> = self
            .send_json(Method::GET, &["emails"], None, None::<&()>)
            .await?;
        Ok(emails.into_inner())
    }
}
