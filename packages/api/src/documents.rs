//! Document endpoints. Payloads are returned as the server sent them.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::client::{ApiClient, MultipartForm, Transport, UploadFile};
use crate::error::ApiError;

/// Optional metadata sent with a document upload.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DocumentUpload {
    pub name: Option<String>,
    pub description: Option<String>,
    pub tags: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl<T: Transport> ApiClient<T> {
    /// Upload a file into a project. Empty metadata fields are left out of the form.
    pub async fn upload_document(
        &self,
        project_id: &str,
        file: UploadFile,
        meta: DocumentUpload,
    ) -> Result<Value, ApiError> {
        let mut form = MultipartForm::with_file(file);
        if let Some(name) = meta.name.filter(|n| !n.is_empty()) {
            form = form.text("name", name);
        }
        if let Some(description) = meta.description.filter(|d| !d.is_empty()) {
            form = form.text("description", description);
        }
        if !meta.tags.is_empty() {
            form = form.text("tags", serde_json::to_string(&meta.tags)?);
        }
        self.upload(&format!("/documents/project/{project_id}/upload"), form)
            .await
    }

    pub async fn list_project_documents(&self, project_id: &str) -> Result<Value, ApiError> {
        self.get(&format!("/documents/project/{project_id}")).await
    }

    pub async fn get_document(&self, document_id: i64) -> Result<Value, ApiError> {
        self.get(&format!("/documents/{document_id}")).await
    }

    pub async fn update_document(
        &self,
        document_id: i64,
        update: &DocumentUpdate,
    ) -> Result<Value, ApiError> {
        self.put(&format!("/documents/{document_id}"), update).await
    }

    pub async fn delete_document(&self, document_id: i64) -> Result<Value, ApiError> {
        self.delete(&format!("/documents/{document_id}")).await
    }
}
