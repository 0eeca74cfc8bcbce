//! # API crate — HTTP client for the tagging backend
//!
//! Every request the app and its tests make goes through
//! [`ApiClient`]. It is generic over a [`Transport`], so the UI runs it over
//! [`HttpTransport`] (`reqwest`) while tests script responses in memory.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | Request/response types, bearer-token injection, status handling |
//! | [`http`] | `reqwest` transport bound to the configured base URL |
//! | [`error`] | [`ApiError`] and message normalisation |
//! | [`tagsets`] | Tag set upload, list, get, update and delete |
//! | [`projects`] | Project CRUD and per-project tag sets |
//! | [`documents`] | Document upload and CRUD |
//! | [`auth`] | Login, registration, password reset, profile, logout |

pub mod auth;
pub mod client;
pub mod documents;
pub mod error;
pub mod http;
pub mod projects;
pub mod tagsets;

#[cfg(test)]
mod mock;

pub use auth::{LoginResponse, MessageResponse, RegisterRequest, RegisterResponse};
pub use client::{
    decode_list, ApiClient, ApiRequest, ApiResponse, MultipartForm, RequestBody, Transport,
    UploadFile,
};
pub use documents::{DocumentUpdate, DocumentUpload};
pub use error::ApiError;
pub use http::HttpTransport;
pub use projects::{CreateProject, UpdateProject};
pub use tagsets::TagSetUpdate;

/// The client the UI uses.
pub type HttpClient = ApiClient<HttpTransport>;

/// Build a client for `config` over `storage`.
pub fn http_client(config: &store::ClientConfig, storage: store::SharedStorage) -> HttpClient {
    ApiClient::new(HttpTransport::new(&config.api), storage)
}
