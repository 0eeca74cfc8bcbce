//! # Domain models for users, projects, documents and tag sets
//!
//! These are the records the state stores hold and the API client decodes.
//! All of them are `Serialize + Deserialize` using the backend's field names,
//! so a record fetched from the server can be dropped straight into a store.
//!
//! ## Types
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`User`] | The signed-in account: identity, avatar, account flags and audit timestamps. |
//! | [`Project`] | A workspace owning documents and tag sets, with a free-form `settings` map. |
//! | [`Document`] | A text uploaded into a project. |
//! | [`TagSet`] | A named, ordered list of [`TagDefinition`]s belonging to a project. |
//!
//! ## Partial updates
//!
//! Each record has a `*Patch` counterpart whose fields are all optional.
//! [`UserPatch::apply_to`] and friends overwrite exactly the fields that are
//! present and leave the rest alone. Nullable fields use `Option<Option<T>>`:
//! `Some(None)` clears the value, `None` leaves it untouched.
//!
//! ## Identifiers
//!
//! Ids are kept as strings. The backend hands out integer ids for documents,
//! tag sets and some projects and UUID strings for users, so every id field
//! accepts either form on input.

use chrono::{DateTime, Utc};
use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Deserialize an id given as a JSON string or number.
fn flexible_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(de::Error::custom(format!(
            "expected a string or numeric id, got {other}"
        ))),
    }
}

/// The authenticated account.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(deserialize_with = "flexible_id")]
    pub id: String,
    pub email: String,
    pub name: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
    pub is_active: bool,
    pub is_admin: bool,
    pub email_verified: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Name to show in the UI, falling back to the email address.
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            &self.email
        } else {
            &self.name
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UserPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_admin: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_verified: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<User> for UserPatch {
    /// Every mutable field of `user`, for merging a server copy into a store.
    fn from(user: User) -> Self {
        Self {
            email: Some(user.email),
            name: Some(user.name),
            avatar_url: Some(user.avatar_url),
            is_active: Some(user.is_active),
            is_admin: Some(user.is_admin),
            email_verified: Some(user.email_verified),
            updated_at: Some(user.updated_at),
        }
    }
}

impl UserPatch {
    /// Shallow-merge the present fields into `user`.
    pub fn apply_to(self, user: &mut User) {
        if let Some(email) = self.email {
            user.email = email;
        }
        if let Some(name) = self.name {
            user.name = name;
        }
        if let Some(avatar_url) = self.avatar_url {
            user.avatar_url = avatar_url;
        }
        if let Some(is_active) = self.is_active {
            user.is_active = is_active;
        }
        if let Some(is_admin) = self.is_admin {
            user.is_admin = is_admin;
        }
        if let Some(email_verified) = self.email_verified {
            user.email_verified = email_verified;
        }
        if let Some(updated_at) = self.updated_at {
            user.updated_at = updated_at;
        }
    }
}

/// A project workspace.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Project {
    #[serde(deserialize_with = "flexible_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(deserialize_with = "flexible_id")]
    pub owner_id: String,
    #[serde(default)]
    pub team_id: Option<String>,
    #[serde(default)]
    pub settings: Map<String, Value>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_id: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl ProjectPatch {
    /// Patch that only renames.
    pub fn rename(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn apply_to(&self, project: &mut Project) {
        if let Some(name) = &self.name {
            project.name = name.clone();
        }
        if let Some(description) = &self.description {
            project.description = description.clone();
        }
        if let Some(owner_id) = &self.owner_id {
            project.owner_id = owner_id.clone();
        }
        if let Some(team_id) = &self.team_id {
            project.team_id = team_id.clone();
        }
        if let Some(settings) = &self.settings {
            project.settings = settings.clone();
        }
        if let Some(updated_at) = self.updated_at {
            project.updated_at = updated_at;
        }
    }
}

/// A document uploaded into a project.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(deserialize_with = "flexible_id")]
    pub id: String,
    #[serde(deserialize_with = "flexible_id")]
    pub project_id: String,
    pub name: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub file_path: Option<String>,
    #[serde(default, deserialize_with = "flexible_id")]
    pub uploaded_by: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: DateTime<Utc>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_path: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl DocumentPatch {
    pub fn apply_to(&self, document: &mut Document) {
        if let Some(name) = &self.name {
            document.name = name.clone();
        }
        if let Some(content) = &self.content {
            document.content = content.clone();
        }
        if let Some(file_path) = &self.file_path {
            document.file_path = file_path.clone();
        }
        if let Some(updated_at) = self.updated_at {
            document.updated_at = updated_at;
        }
    }
}

/// One tag inside a [`TagSet`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagDefinition {
    pub name: String,
    pub color: String,
    #[serde(default)]
    pub description: String,
}

/// A named, ordered collection of tags.
///
/// Tag sets listed under `/tagsets` belong to a user rather than a project:
/// those rows carry `owner_id` and no `project_id`, which then stays empty.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TagSet {
    #[serde(deserialize_with = "flexible_id")]
    pub id: String,
    #[serde(default, deserialize_with = "flexible_id")]
    pub project_id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Tag order is significant and preserved.
    #[serde(rename = "tags_json", alias = "tags", default)]
    pub tags: Vec<TagDefinition>,
    #[serde(alias = "owner_id", default, deserialize_with = "flexible_id")]
    pub created_by: String,
    #[serde(default)]
    pub created_at: DateTime<Utc>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TagSetPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<TagDefinition>>,
}

impl TagSetPatch {
    pub fn apply_to(&self, tag_set: &mut TagSet) {
        if let Some(name) = &self.name {
            tag_set.name = name.clone();
        }
        if let Some(tags) = &self.tags {
            tag_set.tags = tags.clone();
        }
    }
}
