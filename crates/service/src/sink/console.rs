// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::io::{self, Write};

use colored::{ColoredString, Colorize};
use logbook_core::{DisplayBlock, Severity, interface::DisplaySink};

/// Plain text blocks on the terminal.
pub struct ConsoleSink {
	color: bool,
	stderr_for_errors: bool,
}

impl ConsoleSink {
	pub fn new() -> Self {
		Self {
			color: true,
			stderr_for_errors: true,
		}
	}

	pub fn color(mut self, color: bool) -> Self {
		self.color = color;
		self
	}

	/// Send fatal severities to stderr instead of stdout.
	pub fn stderr_for_errors(mut self, stderr_for_errors: bool) -> Self {
		self.stderr_for_errors = stderr_for_errors;
		self
	}

	fn format(&self, block: &DisplayBlock) -> String {
		let text = block.to_string();
		if !self.color {
			return text;
		}

		match text.split_once('\n') {
			Some((heading, rest)) => format!("{}\n{}", paint(block.severity, heading), rest),
			None => paint(block.severity, &text).to_string(),
		}
	}
}

impl Default for ConsoleSink {
	fn default() -> Self {
		Self::new()
	}
}

fn paint(severity: Severity, text: &str) -> ColoredString {
	match severity {
		Severity::Custom => text.green().bold(),
		s if s.is_fatal() => text.red().bold(),
		Severity::Warning
		| Severity::CoreWarning
		| Severity::CompileWarning
		| Severity::UserWarning
		| Severity::Strict => text.yellow().bold(),
		_ => text.cyan().bold(),
	}
}

impl DisplaySink for ConsoleSink {
	fn write(&self, block: &DisplayBlock) -> io::Result<()> {
		let output = self.format(block);
		if self.stderr_for_errors && block.severity.is_fatal() {
			let mut stderr = io::stderr().lock();
			stderr.write_all(output.as_bytes())?;
			stderr.flush()
		} else {
			let mut stdout = io::stdout().lock();
			stdout.write_all(output.as_bytes())?;
			stdout.flush()
		}
	}
}
