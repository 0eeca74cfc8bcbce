//! Authentication and account endpoints.
//!
//! `login` posts an OAuth2 password form (the backend expects the email under
//! `username`) and stores the returned access token, which every later
//! request picks up as its bearer credential. `sign_in` is login followed by
//! `current_user`, the pair the login page needs. `logout` always drops the
//! local token, even when the server call fails.
//!
//! | Call | Request |
//! |------|---------|
//! | [`register`](ApiClient::register) | `POST /auth/register` |
//! | [`request_password_reset`](ApiClient::request_password_reset) | `POST /auth/reset-password` |
//! | [`confirm_password_reset`](ApiClient::confirm_password_reset) | `POST /auth/confirm-reset` |
//! | [`verify_email`](ApiClient::verify_email) | `POST /auth/verify-email` |
//! | [`resend_verification`](ApiClient::resend_verification) | `POST /auth/resend-verification` |
//! | [`update_profile`](ApiClient::update_profile) | `PUT /users/me` |

use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_json::json;
use store::{clear_token, store_token, User, UserPatch};

use crate::client::{decode, ApiClient, RequestBody, Transport};
use crate::error::ApiError;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: String,
}

/// Body of `POST /auth/register`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RegisterResponse {
    #[serde(default)]
    pub message: String,
    pub user: User,
    #[serde(default)]
    pub email_verification_required: bool,
}

/// `{"message": ...}` replies from the account endpoints.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: String,
}

impl<T: Transport> ApiClient<T> {
    /// Exchange credentials for a token and keep it in storage.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let form = vec![
            ("username".to_string(), email.to_string()),
            ("password".to_string(), password.to_string()),
        ];
        let response: LoginResponse =
            decode(self.send(Method::POST, "/auth/token", RequestBody::Form(form)).await?)?;

        if let Err(e) = store_token(self.storage().as_ref(), &response.access_token) {
            tracing::error!("Failed to store auth token: {}", e);
        }
        Ok(response)
    }

    /// The account behind the stored token.
    pub async fn current_user(&self) -> Result<User, ApiError> {
        decode(self.get("/auth/me").await?)
    }

    /// Log in and fetch the account the new token belongs to.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<User, ApiError> {
        self.login(email, password).await?;
        self.current_user().await
    }

    /// Create an account. No token is issued; the user logs in afterwards.
    pub async fn register(&self, request: &RegisterRequest) -> Result<RegisterResponse, ApiError> {
        decode(self.post("/auth/register", request).await?)
    }

    pub async fn request_password_reset(&self, email: &str) -> Result<MessageResponse, ApiError> {
        decode(self.post("/auth/reset-password", &json!({ "email": email })).await?)
    }

    pub async fn confirm_password_reset(
        &self,
        token: &str,
        new_password: &str,
    ) -> Result<MessageResponse, ApiError> {
        let body = json!({ "token": token, "new_password": new_password });
        decode(self.post("/auth/confirm-reset", &body).await?)
    }

    pub async fn verify_email(&self, token_hash: &str) -> Result<MessageResponse, ApiError> {
        let body = json!({ "token_hash": token_hash, "type": "email" });
        decode(self.post("/auth/verify-email", &body).await?)
    }

    pub async fn resend_verification(&self, email: &str) -> Result<MessageResponse, ApiError> {
        decode(self.post("/auth/resend-verification", &json!({ "email": email })).await?)
    }

    /// Send the changed profile fields and return the account as stored.
    pub async fn update_profile(&self, patch: &UserPatch) -> Result<User, ApiError> {
        decode(self.put("/users/me", patch).await?)
    }

    pub async fn logout(&self) -> Result<(), ApiError> {
        let result = self
            .send(Method::POST, "/auth/logout", RequestBody::Empty)
            .await;
        if let Err(e) = clear_token(self.storage().as_ref()) {
            tracing::error!("Failed to clear auth token: {}", e);
        }
        result.map(|_| ())
    }
}
