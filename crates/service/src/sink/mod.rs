// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Display sinks shipped with the service.

mod console;
mod writer;

pub use console::ConsoleSink;
pub use logbook_core::interface::DisplaySink;
pub use writer::WriterSink;
