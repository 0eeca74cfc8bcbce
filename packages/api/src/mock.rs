//! Scripted transport for tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::client::{ApiRequest, ApiResponse, Transport};
use crate::error::ApiError;

enum Scripted {
    Respond(ApiResponse),
    Fail(String),
}

/// Records every request and answers from a queue of scripted outcomes.
#[derive(Clone, Default)]
pub(crate) struct RecordingTransport {
    requests: Arc<Mutex<Vec<ApiRequest>>>,
    script: Arc<Mutex<VecDeque<Scripted>>>,
}

impl RecordingTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn respond(&self, response: ApiResponse) {
        self.script.lock().unwrap().push_back(Scripted::Respond(response));
    }

    pub(crate) fn fail(&self, message: &str) {
        self.script
            .lock()
            .unwrap()
            .push_back(Scripted::Fail(message.to_string()));
    }

    pub(crate) fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub(crate) fn last_request(&self) -> Option<ApiRequest> {
        self.requests.lock().unwrap().last().cloned()
    }
}

impl Transport for RecordingTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        self.requests.lock().unwrap().push(request);
        match self.script.lock().unwrap().pop_front() {
            Some(Scripted::Respond(response)) => Ok(response),
            Some(Scripted::Fail(message)) => Err(ApiError::Transport(message)),
            None => Err(ApiError::Transport("no scripted response".to_string())),
        }
    }
}
