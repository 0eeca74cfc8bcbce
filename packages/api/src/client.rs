//! # API client core
//!
//! [`ApiClient`] turns typed calls into [`ApiRequest`]s and hands them to a
//! [`Transport`]. The transport only moves bytes; everything the application
//! cares about happens here:
//!
//! - the stored auth token, if any, is attached as a bearer credential;
//! - 2xx bodies are parsed as JSON and returned verbatim (an empty body is
//!   `Value::Null`);
//! - non-2xx responses become [`ApiError::Status`] with a normalised message;
//! - a 401 also removes the stored token, so the next gate check redirects.
//!
//! Each call is one round-trip. There is no retry, backoff or cancellation.

use std::future::Future;

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use store::{clear_token, read_token, SharedStorage};

use crate::error::ApiError;

/// A file picked for upload.
#[derive(Clone, Debug, PartialEq)]
pub struct UploadFile {
    pub file_name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl UploadFile {
    pub fn new(file_name: impl Into<String>, mime: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            mime: mime.into(),
            bytes,
        }
    }

    /// A CSV file, the format tag set uploads expect.
    pub fn csv(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self::new(file_name, "text/csv", bytes)
    }
}

/// `multipart/form-data` body: one optional file part under `file`, plus text fields.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MultipartForm {
    pub file: Option<UploadFile>,
    pub fields: Vec<(String, String)>,
}

impl MultipartForm {
    pub fn with_file(file: UploadFile) -> Self {
        Self {
            file: Some(file),
            fields: Vec::new(),
        }
    }

    pub fn text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push((name.into(), value.into()));
        self
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum RequestBody {
    Empty,
    Json(Value),
    /// `application/x-www-form-urlencoded`
    Form(Vec<(String, String)>),
    Multipart(MultipartForm),
}

/// A request as handed to the transport. `path` is relative to the API base URL.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub bearer: Option<String>,
    pub body: RequestBody,
}

/// Raw status and body text.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn json(status: u16, body: &Value) -> Self {
        Self {
            status,
            body: body.to_string(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Moves one request to the server and brings back its response.
pub trait Transport {
    fn send(
        &self,
        request: ApiRequest,
    ) -> impl Future<Output = Result<ApiResponse, ApiError>>;
}

#[derive(Clone)]
pub struct ApiClient<T> {
    transport: T,
    storage: SharedStorage,
}

impl<T> ApiClient<T> {
    pub fn new(transport: T, storage: SharedStorage) -> Self {
        Self { transport, storage }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Storage the client reads the auth token from.
    pub fn storage(&self) -> &SharedStorage {
        &self.storage
    }
}

impl<T> PartialEq for ApiClient<T> {
    fn eq(&self, other: &Self) -> bool {
        std::sync::Arc::ptr_eq(&self.storage, &other.storage)
    }
}

impl<T: Transport> ApiClient<T> {
    pub async fn get(&self, path: &str) -> Result<Value, ApiError> {
        self.send(Method::GET, path, RequestBody::Empty).await
    }

    pub async fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Value, ApiError> {
        self.send(Method::POST, path, RequestBody::Json(serde_json::to_value(body)?))
            .await
    }

    pub async fn put<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Value, ApiError> {
        self.send(Method::PUT, path, RequestBody::Json(serde_json::to_value(body)?))
            .await
    }

    pub async fn patch<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Value, ApiError> {
        self.send(Method::PATCH, path, RequestBody::Json(serde_json::to_value(body)?))
            .await
    }

    pub async fn delete(&self, path: &str) -> Result<Value, ApiError> {
        self.send(Method::DELETE, path, RequestBody::Empty).await
    }

    /// POST a multipart form.
    pub async fn upload(&self, path: &str, form: MultipartForm) -> Result<Value, ApiError> {
        self.send(Method::POST, path, RequestBody::Multipart(form))
            .await
    }

    /// Send a request and return the parsed JSON body.
    pub async fn send(
        &self,
        method: Method,
        path: &str,
        body: RequestBody,
    ) -> Result<Value, ApiError> {
        let request = ApiRequest {
            method,
            path: path.to_string(),
            bearer: read_token(self.storage.as_ref()),
            body,
        };
        tracing::debug!("{} {}", request.method, request.path);

        let response = self.transport.send(request).await?;

        if response.is_success() {
            if response.body.trim().is_empty() {
                return Ok(Value::Null);
            }
            return Ok(serde_json::from_str(&response.body)?);
        }

        let err = ApiError::from_status(response.status, &response.body);
        if err.is_unauthorized() {
            tracing::warn!("{} rejected our credentials, dropping stored token", path);
            if let Err(e) = clear_token(self.storage.as_ref()) {
                tracing::error!("Failed to clear auth token: {}", e);
            }
        }
        Err(err)
    }
}

/// Decode a JSON payload into `R`.
pub(crate) fn decode<R: DeserializeOwned>(value: Value) -> Result<R, ApiError> {
    Ok(serde_json::from_value(value)?)
}

/// Records from a payload that is either a bare array or an envelope such as
/// `{"success": true, "<key>": [...]}`. Entries that do not decode are skipped.
pub fn decode_list<R: DeserializeOwned>(value: &Value, key: &str) -> Vec<R> {
    let items = match value {
        Value::Array(items) => items,
        Value::Object(map) => match map.get(key) {
            Some(Value::Array(items)) => items,
            _ => return Vec::new(),
        },
        _ => return Vec::new(),
    };
    items
        .iter()
        .filter_map(|item| match serde_json::from_value(item.clone()) {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::warn!("Skipping {} entry: {}", key, e);
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::json;
    use store::{KeyValueStorage, MemoryStorage, AUTH_TOKEN_KEY};

    use super::*;
    use crate::mock::RecordingTransport;

    fn client_with(storage: MemoryStorage) -> (ApiClient<RecordingTransport>, RecordingTransport) {
        let transport = RecordingTransport::new();
        (ApiClient::new(transport.clone(), Arc::new(storage)), transport)
    }

    #[tokio::test]
    async fn test_bearer_token_attached_when_present() {
        let (client, transport) = client_with(MemoryStorage::with_items([(AUTH_TOKEN_KEY, "abc123")]));
        transport.respond(ApiResponse::json(200, &json!({"ok": true})));

        client.get("/projects").await.unwrap();

        let request = transport.last_request().unwrap();
        assert_eq!(request.bearer.as_deref(), Some("abc123"));
        assert_eq!(request.method, Method::GET);
    }

    #[tokio::test]
    async fn test_no_bearer_without_token() {
        let (client, transport) = client_with(MemoryStorage::new());
        transport.respond(ApiResponse::json(200, &json!([])));

        client.get("/projects").await.unwrap();
        assert_eq!(transport.last_request().unwrap().bearer, None);
    }

    #[tokio::test]
    async fn test_empty_success_body_is_null() {
        let (client, transport) = client_with(MemoryStorage::new());
        transport.respond(ApiResponse {
            status: 204,
            body: String::new(),
        });

        assert_eq!(client.delete("/projects/p1").await.unwrap(), Value::Null);
    }

    #[tokio::test]
    async fn test_unauthorized_clears_token() {
        let storage = MemoryStorage::with_items([(AUTH_TOKEN_KEY, "expired")]);
        let (client, transport) = client_with(storage.clone());
        transport.respond(ApiResponse::json(401, &json!({"detail": "Could not validate credentials"})));

        let err = client.get("/auth/me").await.unwrap_err();
        assert!(err.is_unauthorized());
        assert_eq!(err.to_string(), "Could not validate credentials");
        assert!(storage.get_item(AUTH_TOKEN_KEY).is_none());
    }

    #[tokio::test]
    async fn test_other_errors_keep_token() {
        let storage = MemoryStorage::with_items([(AUTH_TOKEN_KEY, "abc123")]);
        let (client, transport) = client_with(storage.clone());
        transport.respond(ApiResponse::json(403, &json!({"detail": "Forbidden"})));

        let err = client.get("/tagsets/3").await.unwrap_err();
        assert_eq!(err.status(), Some(403));
        assert_eq!(storage.get_item(AUTH_TOKEN_KEY).as_deref(), Some("abc123"));
    }

    #[tokio::test]
    async fn test_transport_failure_propagates() {
        let (client, transport) = client_with(MemoryStorage::new());
        transport.fail("connection refused");

        let err = client.get("/tagsets").await.unwrap_err();
        assert!(matches!(err, ApiError::Transport(ref m) if m == "connection refused"));
    }

    #[test]
    fn test_decode_list_accepts_array_or_envelope() {
        #[derive(serde::Deserialize)]
        struct Named {
            name: String,
        }

        let bare: Vec<Named> = decode_list(&json!([{"name": "a"}, {"name": "b"}]), "tagsets");
        assert_eq!(bare.len(), 2);

        let wrapped: Vec<Named> = decode_list(
            &json!({"success": true, "tagsets": [{"name": "a"}, {"id": 3}]}),
            "tagsets",
        );
        assert_eq!(wrapped.len(), 1);
        assert_eq!(wrapped[0].name, "a");

        let missing: Vec<Named> = decode_list(&json!({"success": true}), "tagsets");
        assert!(missing.is_empty());
    }

    #[tokio::test]
    async fn test_malformed_success_body_is_decode_error() {
        let (client, transport) = client_with(MemoryStorage::new());
        transport.respond(ApiResponse {
            status: 200,
            body: "not json".into(),
        });

        assert!(matches!(client.get("/tagsets").await, Err(ApiError::Decode(_))));
    }
}
