// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

pub mod error;
pub mod severity;

pub use error::Error;
pub use severity::Severity;

pub type Result<T> = std::result::Result<T, Error>;
