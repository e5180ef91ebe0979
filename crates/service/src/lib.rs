// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Log service: filters runtime errors and custom messages, shows them on a
//! display sink and stores them in the log table.

mod builder;
mod config;
mod hooks;
mod macros;
mod notes;
mod outcome;
mod service;
pub mod sink;

pub use builder::LogServiceBuilder;
pub use config::{LogConfig, SeverityFilter};
pub use hooks::ProcessHooks;
pub use logbook_core::{LogEvent, LogQuery, LogRecord, RuntimeError, Severity};
pub use notes::SharedNotes;
pub use outcome::LogOutcome;
pub use service::LogService;
