//! Project endpoints. Results decode into [`store::Project`].

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use store::Project;

use crate::client::{decode, ApiClient, Transport};
use crate::error::ApiError;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateProject {
    pub name: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settings: Option<Map<String, Value>>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateProject {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settings: Option<Map<String, Value>>,
}

impl<T: Transport> ApiClient<T> {
    pub async fn list_projects(&self) -> Result<Vec<Project>, ApiError> {
        decode(self.get("/projects").await?)
    }

    pub async fn get_project(&self, project_id: &str) -> Result<Project, ApiError> {
        decode(self.get(&format!("/projects/{project_id}")).await?)
    }

    pub async fn create_project(&self, project: &CreateProject) -> Result<Project, ApiError> {
        decode(self.post("/projects", project).await?)
    }

    pub async fn update_project(
        &self,
        project_id: &str,
        update: &UpdateProject,
    ) -> Result<Project, ApiError> {
        decode(self.put(&format!("/projects/{project_id}"), update).await?)
    }

    pub async fn delete_project(&self, project_id: &str) -> Result<Value, ApiError> {
        self.delete(&format!("/projects/{project_id}")).await
    }

    /// Tag sets attached to one project. Returned untouched, like `/tagsets`.
    pub async fn list_project_tagsets(&self, project_id: &str) -> Result<Value, ApiError> {
        self.get(&format!("/projects/{project_id}/tagsets")).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use reqwest::Method;
    use serde_json::json;
    use store::MemoryStorage;

    use super::*;
    use crate::client::{ApiResponse, RequestBody};
    use crate::mock::RecordingTransport;

    fn project_json(id: &str, name: &str) -> Value {
        json!({
            "id": id,
            "name": name,
            "description": "",
            "owner_id": "u1",
            "settings": {"language": "en"},
            "created_at": "2024-01-01T00:00:00Z",
            "updated_at": "2024-01-01T00:00:00Z"
        })
    }

    #[tokio::test]
    async fn test_list_projects_decodes() {
        let transport = RecordingTransport::new();
        let client = ApiClient::new(transport.clone(), Arc::new(MemoryStorage::new()));
        transport.respond(ApiResponse::json(
            200,
            &json!([project_json("p1", "Corpus"), project_json("p2", "Reviews")]),
        ));

        let projects = client.list_projects().await.unwrap();
        assert_eq!(projects.len(), 2);
        assert_eq!(projects[1].name, "Reviews");
        assert_eq!(projects[0].team_id, None);
        assert_eq!(projects[0].settings["language"], "en");
    }

    #[tokio::test]
    async fn test_update_project_sends_only_present_fields() {
        let transport = RecordingTransport::new();
        let client = ApiClient::new(transport.clone(), Arc::new(MemoryStorage::new()));
        transport.respond(ApiResponse::json(200, &project_json("p1", "Renamed")));

        let update = UpdateProject {
            name: Some("Renamed".into()),
            ..UpdateProject::default()
        };
        let project = client.update_project("p1", &update).await.unwrap();
        assert_eq!(project.name, "Renamed");

        let request = transport.last_request().unwrap();
        assert_eq!(request.method, Method::PUT);
        assert_eq!(request.path, "/projects/p1");
        assert_eq!(request.body, RequestBody::Json(json!({"name": "Renamed"})));
    }

    #[tokio::test]
    async fn test_project_tagsets_decode_with_integer_ids() {
        let transport = RecordingTransport::new();
        let client = ApiClient::new(transport.clone(), Arc::new(MemoryStorage::new()));
        transport.respond(ApiResponse::json(
            200,
            &json!({
                "success": true,
                "tagsets": [{
                    "id": 7,
                    "name": "NER",
                    "owner_id": "u1",
                    "tags": [{"name": "PER", "color": "#ff0000"}],
                    "created_at": "2024-03-01T12:00:00Z"
                }]
            }),
        ));

        let payload = client.list_project_tagsets("p1").await.unwrap();
        assert_eq!(transport.last_request().unwrap().path, "/projects/p1/tagsets");

        let tag_sets = crate::decode_list::<store::TagSet>(&payload, "tagsets");
        assert_eq!(tag_sets.len(), 1);
        assert_eq!(tag_sets[0].id, "7");
        assert_eq!(tag_sets[0].created_by, "u1");
    }

    #[tokio::test]
    async fn test_unexpected_shape_is_decode_error() {
        let transport = RecordingTransport::new();
        let client = ApiClient::new(transport.clone(), Arc::new(MemoryStorage::new()));
        transport.respond(ApiResponse::json(200, &json!({"projects": []})));

        assert!(matches!(client.list_projects().await, Err(ApiError::Decode(_))));
    }
}
