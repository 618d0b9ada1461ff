// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `folio doctor` command implementation.
//!
//! Checks that this machine can run the Pages tools: the platform, the
//! script interpreter, and the scripted application.

use std::io::IsTerminal;
use std::sync::Arc;
use std::time::{Duration, Instant};

use folio_config::FolioConfig;
use folio_core::FolioError;
use folio_script::{Literal, ScriptExecutor, ScriptInvocation};

/// Status of a diagnostic check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckStatus {
    Pass,
    Warn,
    Fail,
}

/// Result of a single diagnostic check.
#[derive(Debug, Clone)]
pub struct CheckResult {
    pub name: String,
    pub status: CheckStatus,
    pub message: String,
    pub duration: Duration,
}

impl CheckResult {
    fn new(name: &str, status: CheckStatus, message: impl Into<String>, start: Instant) -> Self {
        Self {
            name: name.to_string(),
            status,
            message: message.into(),
            duration: start.elapsed(),
        }
    }
}

/// Run every check, print the report, and return the number of failures.
pub async fn run_doctor(
    config: &FolioConfig,
    executor: Arc<dyn ScriptExecutor>,
    plain: bool,
) -> usize {
    let use_color = !plain && std::io::stdout().is_terminal();
    let results = collect_checks(config, executor.as_ref()).await;
    print_report(&results, use_color);
    results
        .iter()
        .filter(|r| r.status == CheckStatus::Fail)
        .count()
}

pub async fn collect_checks(
    config: &FolioConfig,
    executor: &dyn ScriptExecutor,
) -> Vec<CheckResult> {
    let mut results = vec![check_config(config), check_platform()];

    let interpreter = check_interpreter(config, executor).await;
    let interpreter_ok = interpreter.status == CheckStatus::Pass;
    results.push(interpreter);

    if interpreter_ok {
        results.push(check_application(config, executor).await);
    } else {
        results.push(CheckResult::new(
            "application",
            CheckStatus::Warn,
            "skipped (interpreter unavailable)",
            Instant::now(),
        ));
    }
    results
}

fn check_config(config: &FolioConfig) -> CheckResult {
    let start = Instant::now();
    let disabled = config.tools.disabled.len();
    CheckResult::new(
        "config",
        CheckStatus::Pass,
        format!(
            "valid (application={}, {disabled} disabled tool{})",
            config.script.application,
            if disabled == 1 { "" } else { "s" }
        ),
        start,
    )
}

fn check_platform() -> CheckResult {
    let start = Instant::now();
    if cfg!(target_os = "macos") {
        CheckResult::new("platform", CheckStatus::Pass, "macOS", start)
    } else {
        CheckResult::new(
            "platform",
            CheckStatus::Warn,
            format!(
                "Pages scripting needs macOS (running on {})",
                std::env::consts::OS
            ),
            start,
        )
    }
}

async fn check_interpreter(config: &FolioConfig, executor: &dyn ScriptExecutor) -> CheckResult {
    let start = Instant::now();
    let invocation = ScriptInvocation::new(
        &config.script.interpreter,
        &config.script.eval_flag,
        "return \"ok\"",
    );
    match executor.execute(&invocation).await {
        Ok(_) => CheckResult::new(
            "interpreter",
            CheckStatus::Pass,
            format!("{} responded", config.script.interpreter),
            start,
        ),
        Err(FolioError::Spawn { command, .. }) => CheckResult::new(
            "interpreter",
            CheckStatus::Fail,
            format!("`{command}` could not be started"),
            start,
        ),
        Err(e) => CheckResult::new("interpreter", CheckStatus::Fail, e.to_string(), start),
    }
}

async fn check_application(config: &FolioConfig, executor: &dyn ScriptExecutor) -> CheckResult {
    let start = Instant::now();
    let script = format!(
        "tell application {} to return name",
        Literal::new(&config.script.application)
    );
    let invocation =
        ScriptInvocation::new(&config.script.interpreter, &config.script.eval_flag, script);
    match executor.execute(&invocation).await {
        Ok(name) if !name.is_empty() => CheckResult::new(
            "application",
            CheckStatus::Pass,
            format!("{name} is reachable"),
            start,
        ),
        Ok(_) => CheckResult::new(
            "application",
            CheckStatus::Pass,
            format!("{} is reachable", config.script.application),
            start,
        ),
        Err(e) => CheckResult::new("application", CheckStatus::Fail, e.to_string(), start),
    }
}

fn print_report(results: &[CheckResult], use_color: bool) {
    println!();
    println!("  folio doctor");
    println!("  {}", "-".repeat(50));

    let mut issues = 0;
    for result in results {
        let duration_ms = result.duration.as_millis();
        let (symbol, tag) = match result.status {
            CheckStatus::Pass => ("✓", "[OK]  "),
            CheckStatus::Warn => ("!", "[WARN]"),
            CheckStatus::Fail => ("✗", "[FAIL]"),
        };
        if result.status != CheckStatus::Pass {
            issues += 1;
        }

        let line = if use_color {
            use colored::Colorize;
            let (symbol, message) = match result.status {
                CheckStatus::Pass => (symbol.green(), result.message.normal()),
                CheckStatus::Warn => (symbol.yellow(), result.message.yellow()),
                CheckStatus::Fail => (symbol.red(), result.message.red()),
            };
            format!(
                "    {symbol} {:<12} {message} ({duration_ms}ms)",
                result.name
            )
        } else {
            format!(
                "    {tag} {:<12} {} ({duration_ms}ms)",
                result.name, result.message
            )
        };
        println!("{line}");
    }

    println!();
    if issues > 0 {
        let issue_word = if issues == 1 { "issue" } else { "issues" };
        println!("  {issues} {issue_word} found.");
    } else {
        println!("  All checks passed.");
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_test_utils::MockExecutor;

    fn config() -> FolioConfig {
        folio_config::load_and_validate_str("").unwrap()
    }

    fn status_of<'a>(results: &'a [CheckResult], name: &str) -> &'a CheckStatus {
        &results
            .iter()
            .find(|r| r.name == name)
            .unwrap_or_else(|| panic!("no `{name}` check"))
            .status
    }

    #[tokio::test]
    async fn reachable_application_passes() {
        let mock = MockExecutor::with_stdout(vec!["ok".into(), "Pages".into()]);
        let results = collect_checks(&config(), &mock).await;

        assert_eq!(status_of(&results, "config"), &CheckStatus::Pass);
        assert_eq!(status_of(&results, "interpreter"), &CheckStatus::Pass);
        assert_eq!(status_of(&results, "application"), &CheckStatus::Pass);

        let invocations = mock.invocations().await;
        assert_eq!(invocations.len(), 2);
        assert_eq!(invocations[0].command, "osascript");
        assert_eq!(invocations[1].script, "tell application \"Pages\" to return name");
    }

    #[tokio::test]
    async fn application_error_is_a_failure() {
        let mock = MockExecutor::with_stdout(vec!["ok".into()]);
        mock.push_failure("Not authorized to send Apple events to Pages.")
            .await;

        let results = collect_checks(&config(), &mock).await;
        assert_eq!(status_of(&results, "application"), &CheckStatus::Fail);
        let app = results.iter().find(|r| r.name == "application").unwrap();
        assert!(app.message.contains("Not authorized"));
    }

    #[tokio::test]
    async fn interpreter_failure_skips_application_check() {
        let mock = MockExecutor::new();
        mock.push_failure("boom").await;

        let results = collect_checks(&config(), &mock).await;
        assert_eq!(status_of(&results, "interpreter"), &CheckStatus::Fail);
        assert_eq!(status_of(&results, "application"), &CheckStatus::Warn);
        assert_eq!(mock.call_count().await, 1);
    }
}
