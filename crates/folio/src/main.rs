// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Folio - Pages document tools for MCP clients.
//!
//! This is the binary entry point: it loads configuration, initializes
//! logging, builds the tool registry and runs the chosen subcommand.

mod call;
mod doctor;
mod serve;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::{Parser, Subcommand};
use folio_config::{ConfigError, FolioConfig};
use folio_core::FolioError;
use folio_script::{ProcessExecutor, ScriptExecutor, ScriptHost};
use folio_skill::{register_pages_tools, ToolRegistry, TOOL_NAMES};
use tracing::{info, warn};

/// Folio - Pages document tools for MCP clients.
#[derive(Parser, Debug)]
#[command(name = "folio", version, about, long_about = None)]
struct Cli {
    /// Load configuration from this file instead of the standard locations.
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Serve the Pages tools over MCP on stdin/stdout.
    Serve,
    /// Print the tool definitions as JSON.
    Tools,
    /// Invoke one tool and print its result as JSON.
    Call {
        /// Tool name, e.g. `get_document_text`.
        tool: String,
        /// Tool parameters as a JSON object.
        #[arg(long, value_name = "JSON")]
        params: Option<String>,
    },
    /// Check that the interpreter and the application are reachable.
    Doctor {
        /// Disable colored output.
        #[arg(long)]
        plain: bool,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(errors) => {
            folio_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    init_tracing(&config.server.log_level);

    let executor: Arc<dyn ScriptExecutor> = Arc::new(ProcessExecutor::new());

    let result = match cli.command {
        Some(Commands::Serve) => match build_registry(&config, Arc::clone(&executor)) {
            Ok(registry) => serve::run_serve(&config, registry).await.map(|()| 0),
            Err(e) => Err(e),
        },
        Some(Commands::Tools) => build_registry(&config, Arc::clone(&executor)).map(|registry| {
            println!("{}", call::render_definitions(&registry));
            0
        }),
        Some(Commands::Call { tool, params }) => {
            match build_registry(&config, Arc::clone(&executor)) {
                Ok(registry) => {
                    let outcome = call::run_call(&registry, &tool, params.as_deref()).await;
                    call::render_outcome(&outcome).map(|json| {
                        println!("{json}");
                        if outcome.is_success() { 0 } else { 1 }
                    })
                }
                Err(e) => Err(e),
            }
        }
        Some(Commands::Doctor { plain }) => {
            let failures = doctor::run_doctor(&config, executor, plain).await;
            Ok(if failures > 0 { 1 } else { 0 })
        }
        None => {
            println!("folio: use --help for available commands");
            Ok(0)
        }
    };

    match result {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<FolioConfig, Vec<ConfigError>> {
    match path {
        Some(path) => folio_config::load_and_validate_path(path),
        None => folio_config::load_and_validate(),
    }
}

/// Register the Pages catalog against the configured interpreter and application.
fn build_registry(
    config: &FolioConfig,
    executor: Arc<dyn ScriptExecutor>,
) -> Result<ToolRegistry, FolioError> {
    for name in unknown_disabled(&config.tools.disabled) {
        warn!(tool = name, "disabled tool is not part of the catalog");
    }

    let host = ScriptHost::new(executor, &config.script);
    let mut registry = ToolRegistry::new();
    let count = register_pages_tools(&mut registry, &host, &config.tools.disabled)?;
    info!(
        tools = count,
        application = host.application_name(),
        "registered tools"
    );
    Ok(registry)
}

/// Names in `disabled` that match no catalog tool.
fn unknown_disabled(disabled: &[String]) -> Vec<&str> {
    disabled
        .iter()
        .map(String::as_str)
        .filter(|name| !TOOL_NAMES.iter().any(|known| known == name))
        .collect()
}

/// Initialize the tracing subscriber.
///
/// Logs go to stderr; stdout carries MCP frames and `call` output.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("folio={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_names(false)
        .init();
}
