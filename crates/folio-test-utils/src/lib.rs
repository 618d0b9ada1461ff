// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for Folio integration tests.
//!
//! - [`MockExecutor`] - Script executor that records invocations and replays canned output

pub mod mock_executor;

pub use mock_executor::MockExecutor;
