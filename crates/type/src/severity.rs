// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! The fixed severity table shared by runtime errors and custom messages.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

use crate::{Error, Result};

/// Class of a logged event.
///
/// `Custom` marks messages logged explicitly by the application; every other
/// variant names a class of runtime error. The discriminant is the numeric
/// code stored in the `level` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u32)]
pub enum Severity {
	Custom = 0,
	Error = 1,
	Warning = 2,
	Parse = 4,
	Notice = 8,
	CoreError = 16,
	CoreWarning = 32,
	CompileError = 64,
	CompileWarning = 128,
	UserError = 256,
	UserWarning = 512,
	UserNotice = 1024,
	Strict = 2048,
	RecoverableError = 4096,
	Deprecated = 8192,
	UserDeprecated = 16384,
	All = 32767,
}

impl Severity {
	pub const ALL: [Severity; 17] = [
		Severity::Custom,
		Severity::Error,
		Severity::Warning,
		Severity::Parse,
		Severity::Notice,
		Severity::CoreError,
		Severity::CoreWarning,
		Severity::CompileError,
		Severity::CompileWarning,
		Severity::UserError,
		Severity::UserWarning,
		Severity::UserNotice,
		Severity::Strict,
		Severity::RecoverableError,
		Severity::Deprecated,
		Severity::UserDeprecated,
		Severity::All,
	];

	pub fn code(&self) -> u32 {
		*self as u32
	}

	pub fn name(&self) -> &'static str {
		match self {
			Severity::Custom => "CUSTOM_LOG_MESSAGE",
			Severity::Error => "E_ERROR",
			Severity::Warning => "E_WARNING",
			Severity::Parse => "E_PARSE",
			Severity::Notice => "E_NOTICE",
			Severity::CoreError => "E_CORE_ERROR",
			Severity::CoreWarning => "E_CORE_WARNING",
			Severity::CompileError => "E_COMPILE_ERROR",
			Severity::CompileWarning => "E_COMPILE_WARNING",
			Severity::UserError => "E_USER_ERROR",
			Severity::UserWarning => "E_USER_WARNING",
			Severity::UserNotice => "E_USER_NOTICE",
			Severity::Strict => "E_STRICT",
			Severity::RecoverableError => "E_RECOVERABLE_ERROR",
			Severity::Deprecated => "E_DEPRECATED",
			Severity::UserDeprecated => "E_USER_DEPRECATED",
			Severity::All => "E_ALL",
		}
	}

	/// Look up a severity by its numeric code.
	pub fn from_code(code: u32) -> Result<Severity> {
		Severity::ALL.into_iter().find(|severity| severity.code() == code).ok_or(Error::UnknownSeverity {
			code: code as i64,
		})
	}

	/// Severities that stop the running program.
	pub fn is_fatal(&self) -> bool {
		matches!(
			self,
			Severity::Error
				| Severity::Parse | Severity::CoreError
				| Severity::CompileError
				| Severity::UserError
				| Severity::RecoverableError
		)
	}
}

impl TryFrom<u32> for Severity {
	type Error = Error;

	fn try_from(code: u32) -> Result<Self> {
		Severity::from_code(code)
	}
}

impl TryFrom<i64> for Severity {
	type Error = Error;

	fn try_from(code: i64) -> Result<Self> {
		u32::try_from(code)
			.map_err(|_| Error::UnknownSeverity {
				code,
			})
			.and_then(Severity::from_code)
	}
}

impl FromStr for Severity {
	type Err = Error;

	fn from_str(name: &str) -> Result<Self> {
		Severity::ALL.into_iter().find(|severity| severity.name() == name).ok_or_else(|| {
			Error::UnknownSeverityName {
				name: name.to_string(),
			}
		})
	}
}

impl fmt::Display for Severity {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

impl Serialize for Severity {
	fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
		serializer.serialize_str(self.name())
	}
}

impl<'de> Deserialize<'de> for Severity {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
		let name = String::deserialize(deserializer)?;
		name.parse().map_err(de::Error::custom)
	}
}
