//! `reqwest`-backed [`Transport`].

use store::config::ApiConfig;

use crate::client::{ApiRequest, ApiResponse, MultipartForm, RequestBody, Transport};
use crate::error::ApiError;

/// Sends requests to the backend at `base_url`.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    http: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    /// Falls back to a default `reqwest` client if the configured one cannot be built.
    pub fn new(config: &ApiConfig) -> Self {
        let builder = reqwest::Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(std::time::Duration::from_secs(config.timeout_secs));
        let http = builder.build().unwrap_or_else(|e| {
            tracing::warn!("Failed to build HTTP client, using defaults: {}", e);
            reqwest::Client::new()
        });

        Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

fn multipart(form: MultipartForm) -> Result<reqwest::multipart::Form, ApiError> {
    let mut out = reqwest::multipart::Form::new();
    if let Some(file) = form.file {
        let part = reqwest::multipart::Part::bytes(file.bytes)
            .file_name(file.file_name)
            .mime_str(&file.mime)
            .map_err(|e| ApiError::InvalidRequest(e.to_string()))?;
        out = out.part("file", part);
    }
    for (name, value) in form.fields {
        out = out.text(name, value);
    }
    Ok(out)
}

impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let mut builder = self.http.request(request.method, self.url(&request.path));
        if let Some(token) = &request.bearer {
            builder = builder.bearer_auth(token);
        }
        builder = match request.body {
            RequestBody::Empty => builder,
            RequestBody::Json(value) => builder.json(&value),
            RequestBody::Form(fields) => builder.form(&fields),
            RequestBody::Multipart(form) => builder.multipart(multipart(form)?),
        };

        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        Ok(ApiResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joining() {
        let config = ApiConfig {
            base_url: "http://localhost:8000/api/".to_string(),
            timeout_secs: 5,
        };
        let transport = HttpTransport::new(&config);
        assert_eq!(transport.base_url(), "http://localhost:8000/api");
        assert_eq!(transport.url("/tagsets/7"), "http://localhost:8000/api/tagsets/7");
        assert_eq!(transport.url("tagsets"), "http://localhost:8000/api/tagsets");
    }
}
