// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Seams between the log service and the environment it runs in.

pub mod database;
pub mod display;
pub mod hook;

pub use database::Database;
pub use display::DisplaySink;
pub use hook::{ErrorHandler, HookRegistry, ShutdownHandler};
