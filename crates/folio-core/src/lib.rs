// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Folio tool server.
//!
//! Provides the error type and the uniform tool outcome shared by the script,
//! skill and server crates.

pub mod error;
pub mod outcome;

pub use error::FolioError;
pub use outcome::ToolOutcome;
