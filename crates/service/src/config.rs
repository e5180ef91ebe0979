// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use indexmap::IndexMap;
use logbook_core::{DateFormat, DisplayFormat};
use logbook_type::{Error, Result, Severity};
use serde::{Deserialize, Serialize};

/// Settings of a log service, fixed for its lifetime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogConfig {
	/// Attach to the process error hooks on `install`
	pub handle_runtime_errors: bool,
	pub persist_runtime_errors: bool,
	pub display_runtime_errors: bool,
	pub persist_custom_messages: bool,
	pub display_custom_messages: bool,
	pub table_prefix: String,
	pub table_suffix: String,
	/// strftime pattern for displayed dates
	pub date_display_format: String,
	/// Severity name to "should be logged"; absent severities are logged
	pub severity_filter: IndexMap<String, bool>,
	pub display_format: DisplayFormat,
}

impl Default for LogConfig {
	fn default() -> Self {
		Self {
			handle_runtime_errors: true,
			persist_runtime_errors: true,
			display_runtime_errors: true,
			persist_custom_messages: true,
			display_custom_messages: true,
			table_prefix: String::new(),
			table_suffix: String::new(),
			date_display_format: DateFormat::DEFAULT.to_string(),
			severity_filter: IndexMap::new(),
			display_format: DisplayFormat::default(),
		}
	}
}

impl LogConfig {
	pub fn from_json(json: &str) -> Result<Self> {
		serde_json::from_str(json).map_err(|e| Error::Config {
			message: e.to_string(),
		})
	}
}

/// Which runtime error severities get logged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeverityFilter(IndexMap<Severity, bool>);

impl SeverityFilter {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn from_names<'a>(entries: impl IntoIterator<Item = (&'a str, bool)>) -> Result<Self> {
		let mut filter = Self::new();
		for (name, enabled) in entries {
			filter.0.insert(name.parse()?, enabled);
		}
		Ok(filter)
	}

	pub fn set(mut self, severity: Severity, enabled: bool) -> Self {
		self.0.insert(severity, enabled);
		self
	}

	pub fn is_enabled(&self, severity: Severity) -> bool {
		self.0.get(&severity).copied().unwrap_or(true)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_defaults() {
		let config = LogConfig::default();
		assert!(config.handle_runtime_errors);
		assert!(config.persist_custom_messages);
		assert_eq!(config.date_display_format, "%d.%m.%Y - %H:%M:%S");
		assert_eq!(config.display_format, DisplayFormat::Html);
	}

	#[test]
	fn test_from_json_fills_defaults() {
		let config = LogConfig::from_json(
			r#"{"display_runtime_errors": false, "table_prefix": "app_", "severity_filter": {"E_NOTICE": false}}"#,
		)
		.unwrap();
		assert!(!config.display_runtime_errors);
		assert!(config.persist_runtime_errors);
		assert_eq!(config.table_prefix, "app_");
		assert_eq!(config.severity_filter.get("E_NOTICE"), Some(&false));
	}

	#[test]
	fn test_from_json_rejects_unknown_keys() {
		let err = LogConfig::from_json(r#"{"persist": true}"#).unwrap_err();
		assert_eq!(err.code(), "LOG_010");
	}

	#[test]
	fn test_filter_defaults_to_enabled() {
		let filter = SeverityFilter::new().set(Severity::Notice, false);
		assert!(!filter.is_enabled(Severity::Notice));
		assert!(filter.is_enabled(Severity::Warning));
	}

	#[test]
	fn test_filter_from_names() {
		let filter = SeverityFilter::from_names([("E_DEPRECATED", false), ("E_WARNING", true)]).unwrap();
		assert!(!filter.is_enabled(Severity::Deprecated));
		assert!(filter.is_enabled(Severity::Warning));

		let err = SeverityFilter::from_names([("E_NOPE", false)]).unwrap_err();
		assert_eq!(err.code(), "LOG_002");
	}
}
