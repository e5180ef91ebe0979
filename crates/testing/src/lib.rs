// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

pub mod database;
pub mod sink;
pub mod tempdir;

pub use database::RecordingDatabase;
pub use sink::MemorySink;
