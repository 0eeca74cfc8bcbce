//! # Project state store
//!
//! [`ProjectStore`] holds the session's working set: every project the user
//! can see, one designated current project, and the documents and tag sets of
//! whatever the views last loaded. Nothing here is persisted; the views
//! rebuild it from the server after each sign-in.
//!
//! Every operation is a synchronous state transition. Collections keep
//! insertion order and are not deduplicated by id. Updating or removing an id
//! that is not present does nothing. Removing a project does not cascade to
//! its documents or tag sets.
//!
//! `update_project` and `remove_project` also apply to `current_project`
//! when its id matches, so the current project never goes stale relative to
//! the `projects` list.

use crate::models::{Document, DocumentPatch, Project, ProjectPatch, TagSet, TagSetPatch};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProjectStore {
    pub current_project: Option<Project>,
    pub projects: Vec<Project>,
    pub documents: Vec<Document>,
    pub tag_sets: Vec<TagSet>,

    /// Shared by project list/detail loads.
    pub is_loading: bool,
    pub is_documents_loading: bool,
    pub is_tag_sets_loading: bool,

    pub error: Option<String>,
}

impl ProjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_current_project(&mut self, project: Option<Project>) {
        self.current_project = project;
    }

    pub fn set_projects(&mut self, projects: Vec<Project>) {
        self.projects = projects;
    }

    pub fn set_documents(&mut self, documents: Vec<Document>) {
        self.documents = documents;
    }

    pub fn set_tag_sets(&mut self, tag_sets: Vec<TagSet>) {
        self.tag_sets = tag_sets;
    }

    pub fn set_loading(&mut self, is_loading: bool) {
        self.is_loading = is_loading;
    }

    pub fn set_documents_loading(&mut self, is_loading: bool) {
        self.is_documents_loading = is_loading;
    }

    pub fn set_tag_sets_loading(&mut self, is_loading: bool) {
        self.is_tag_sets_loading = is_loading;
    }

    pub fn set_error(&mut self, error: Option<String>) {
        self.error = error;
    }

    pub fn add_project(&mut self, project: Project) {
        self.projects.push(project);
    }

    pub fn update_project(&mut self, id: &str, patch: &ProjectPatch) {
        for project in self.projects.iter_mut().filter(|p| p.id == id) {
            patch.apply_to(project);
        }
        if let Some(current) = self.current_project.as_mut().filter(|p| p.id == id) {
            patch.apply_to(current);
        }
    }

    pub fn remove_project(&mut self, id: &str) {
        self.projects.retain(|p| p.id != id);
        if self.current_project.as_ref().is_some_and(|p| p.id == id) {
            self.current_project = None;
        }
    }

    pub fn add_document(&mut self, document: Document) {
        self.documents.push(document);
    }

    pub fn update_document(&mut self, id: &str, patch: &DocumentPatch) {
        for document in self.documents.iter_mut().filter(|d| d.id == id) {
            patch.apply_to(document);
        }
    }

    pub fn remove_document(&mut self, id: &str) {
        self.documents.retain(|d| d.id != id);
    }

    pub fn add_tag_set(&mut self, tag_set: TagSet) {
        self.tag_sets.push(tag_set);
    }

    pub fn update_tag_set(&mut self, id: &str, patch: &TagSetPatch) {
        for tag_set in self.tag_sets.iter_mut().filter(|t| t.id == id) {
            patch.apply_to(tag_set);
        }
    }

    pub fn remove_tag_set(&mut self, id: &str) {
        self.tag_sets.retain(|t| t.id != id);
    }

    /// Reset everything to the initial state (logout, project switch).
    pub fn clear_all(&mut self) {
        *self = Self::default();
    }
}
