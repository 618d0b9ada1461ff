// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock script executor for deterministic testing.
//!
//! `MockExecutor` implements `ScriptExecutor` without spawning processes. It
//! records every invocation and answers from a queue of canned responses.

use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use folio_config::model::ScriptConfig;
use folio_core::FolioError;
use folio_script::{ScriptExecutor, ScriptHost, ScriptInvocation};

/// A canned executor response.
#[derive(Debug, Clone)]
enum Response {
    Stdout(String),
    Failure(String),
}

/// A mock executor that records invocations and replays queued responses.
///
/// When the queue is empty, an empty stdout is returned.
#[derive(Clone, Default)]
pub struct MockExecutor {
    responses: Arc<Mutex<VecDeque<Response>>>,
    invocations: Arc<Mutex<Vec<ScriptInvocation>>>,
}

impl MockExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock pre-loaded with successful stdout responses.
    pub fn with_stdout(responses: Vec<String>) -> Self {
        Self {
            responses: Arc::new(Mutex::new(
                responses.into_iter().map(Response::Stdout).collect(),
            )),
            invocations: Arc::default(),
        }
    }

    /// A [`ScriptHost`] with the default script settings, backed by this mock.
    pub fn host(&self) -> ScriptHost {
        ScriptHost::new(Arc::new(self.clone()), &ScriptConfig::default())
    }

    /// Queue a successful response.
    pub async fn push_stdout(&self, stdout: impl Into<String>) {
        self.responses
            .lock()
            .await
            .push_back(Response::Stdout(stdout.into()));
    }

    /// Queue an execution failure carrying `message` as the interpreter's stderr.
    pub async fn push_failure(&self, message: impl Into<String>) {
        self.responses
            .lock()
            .await
            .push_back(Response::Failure(message.into()));
    }

    /// Every invocation received so far, in order.
    pub async fn invocations(&self) -> Vec<ScriptInvocation> {
        self.invocations.lock().await.clone()
    }

    /// Number of times `execute` was called.
    pub async fn call_count(&self) -> usize {
        self.invocations.lock().await.len()
    }

    /// Script text of the most recent invocation.
    pub async fn last_script(&self) -> Option<String> {
        self.invocations
            .lock()
            .await
            .last()
            .map(|invocation| invocation.script.clone())
    }
}

#[async_trait]
impl ScriptExecutor for MockExecutor {
    async fn execute(&self, invocation: &ScriptInvocation) -> Result<String, FolioError> {
        self.invocations.lock().await.push(invocation.clone());
        match self.responses.lock().await.pop_front() {
            Some(Response::Stdout(stdout)) => Ok(stdout),
            Some(Response::Failure(message)) => Err(FolioError::Execution {
                message,
                exit_code: Some(1),
            }),
            None => Ok(String::new()),
        }
    }
}
