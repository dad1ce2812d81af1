//! Scripted oracle double for tests and offline runs.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::errors::OracleError;
use crate::domain::models::CompletionRequest;
use crate::domain::ports::Oracle;

/// Pops queued replies in order and records every request it saw. An empty
/// queue answers with `EmptyResponse`, which keeps accidental extra calls
/// visible in tests.
#[derive(Default)]
pub struct ScriptedOracle {
    replies: Mutex<VecDeque<Result<String, OracleError>>>,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl ScriptedOracle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful reply.
    pub fn push_reply(&self, text: impl Into<String>) {
        self.replies.lock().unwrap().push_back(Ok(text.into()));
    }

    /// Queue a failure.
    pub fn push_error(&self, error: OracleError) {
        self.replies.lock().unwrap().push_back(Err(error));
    }

    /// Requests seen so far, in order.
    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl Oracle for ScriptedOracle {
    async fn complete(&self, request: CompletionRequest) -> Result<String, OracleError> {
        self.requests.lock().unwrap().push(request);
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(OracleError::EmptyResponse))
    }
}
