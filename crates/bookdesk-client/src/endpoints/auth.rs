//! Authentication and password recovery endpoints.

use async_trait::async_trait;
use reqwest::Method;
use tracing::info;

use bookdesk_core::result::AppResult;
use bookdesk_entity::user::User;

use crate::api::AuthApi;
use crate::client::ApiClient;
use crate::dto::request::{
    ForgotPasswordRequest, LoginRequest, ResetPasswordRequest, validate_request,
};
use crate::dto::response::{Envelope, LoginResponse};

#[async_trait]
impl AuthApi for ApiClient {
    async fn login(&self, email: &str, password: &str) -> AppResult<LoginResponse> {
        let request = LoginRequest {
            email: email.trim().to_string(),
            password: password.to_string(),
        };
        validate_request(&request)?;

        let response: LoginResponse = self
            .send_json(Method::POST, &["auth", "login"], None, Some(&request))
            .await?;
        self.set_token(Some(response.token.clone()));

        info!(user_id = %response.user.id, role = %response.user.role, "Signed in");
        Ok(response)
    }

    fn session_token(&self) -> Option<String> {
        self.token()
    }

    async fn current_user(&self) -> AppResult<User> {
        let user: Envelope<User> = self
            .send_json(Method::GET, &["auth", "me"], None, None::<&()>)
            .await?;
        Ok(user.into_inner())
    }

    async fn request_password_reset(&self, email: &str) -> AppResult<()> {
        let request = ForgotPasswordRequest {
            email: email.trim().to_string(),
        };
        validate_request(&request)?;

        self.send_empty(Method::POST, &["auth", "forgot-password"], Some(&request))
            .await
    }

    async fn reset_password(&self, token: &str, password: &str) -> AppResult<()> {
        let request = ResetPasswordRequest {
            token: token.to_string(),
            password: password.to_string(),
        };
        validate_request(&request)?;

        self.send_empty(Method::POST, &["auth", "reset-password"], Some(&request))
            .await
    }
}
