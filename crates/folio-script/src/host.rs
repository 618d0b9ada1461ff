// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Binds scripts to an interpreter, an application and an executor.

use std::sync::Arc;

use folio_config::model::ScriptConfig;
use folio_core::ToolOutcome;
use tracing::warn;

use crate::executor::{ScriptExecutor, ScriptInvocation};
use crate::script::Script;

/// Shared by every tool: turns a [`Script`] into an invocation and the result
/// into a [`ToolOutcome`].
#[derive(Clone)]
pub struct ScriptHost {
    executor: Arc<dyn ScriptExecutor>,
    interpreter: String,
    eval_flag: String,
    application: String,
}

impl ScriptHost {
    pub fn new(executor: Arc<dyn ScriptExecutor>, config: &ScriptConfig) -> Self {
        Self {
            executor,
            interpreter: config.interpreter.clone(),
            eval_flag: config.eval_flag.clone(),
            application: config.application.clone(),
        }
    }

    pub fn application_name(&self) -> &str {
        &self.application
    }

    /// Start a script addressed to the configured application.
    pub fn application(&self) -> Script {
        Script::tell_application(&self.application)
    }

    pub fn invocation(&self, script: &Script) -> ScriptInvocation {
        ScriptInvocation::new(&self.interpreter, &self.eval_flag, script.render())
    }

    /// Run the script; a success carries the script's stdout.
    pub async fn run(&self, script: &Script) -> ToolOutcome {
        let invocation = self.invocation(script);
        match self.executor.execute(&invocation).await {
            Ok(stdout) => ToolOutcome::success(stdout),
            Err(err) => {
                warn!(error = %err, application = %self.application, "script failed");
                err.into()
            }
        }
    }

    /// Run the script; a success carries `message` instead of stdout.
    pub async fn run_with_message(&self, script: &Script, message: &str) -> ToolOutcome {
        match self.run(script).await {
            ToolOutcome::Success { .. } => ToolOutcome::success(message),
            failure => failure,
        }
    }
}
