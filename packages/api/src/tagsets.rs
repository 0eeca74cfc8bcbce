//! Tag set endpoints.
//!
//! | Call | Request |
//! |------|---------|
//! | [`upload_tagset`](ApiClient::upload_tagset) | `POST /tagsets/upload-csv` (multipart: `file`, `name`, `description`) |
//! | [`list_tagsets`](ApiClient::list_tagsets) | `GET /tagsets` |
//! | [`get_tagset`](ApiClient::get_tagset) | `GET /tagsets/{id}` |
//! | [`delete_tagset`](ApiClient::delete_tagset) | `DELETE /tagsets/{id}` |
//! | [`update_tagset`](ApiClient::update_tagset) | `PATCH /tagsets/{id}` (JSON: `name`, `description`, `tags`) |
//!
//! Every call returns the server's payload untouched.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use store::TagDefinition;

use crate::client::{ApiClient, MultipartForm, Transport, UploadFile};
use crate::error::ApiError;

/// Body of a tag set update.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TagSetUpdate {
    pub name: String,
    pub description: String,
    pub tags: Vec<TagDefinition>,
}

impl<T: Transport> ApiClient<T> {
    /// Create a tag set from a CSV file.
    pub async fn upload_tagset(
        &self,
        file: UploadFile,
        name: &str,
        description: &str,
    ) -> Result<Value, ApiError> {
        let form = MultipartForm::with_file(file)
            .text("name", name)
            .text("description", description);
        self.upload("/tagsets/upload-csv", form).await
    }

    /// All tag sets owned by the current user.
    pub async fn list_tagsets(&self) -> Result<Value, ApiError> {
        self.get("/tagsets").await
    }

    pub async fn get_tagset(&self, tagset_id: i64) -> Result<Value, ApiError> {
        self.get(&format!("/tagsets/{tagset_id}")).await
    }

    /// Delete a tag set and its stored file.
    pub async fn delete_tagset(&self, tagset_id: i64) -> Result<Value, ApiError> {
        self.delete(&format!("/tagsets/{tagset_id}")).await
    }

    pub async fn update_tagset(
        &self,
        tagset_id: i64,
        update: &TagSetUpdate,
    ) -> Result<Value, ApiError> {
        self.patch(&format!("/tagsets/{tagset_id}"), update).await
    }
}
