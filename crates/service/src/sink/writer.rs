// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::io::{self, Write};

use logbook_core::{DisplayBlock, DisplayFormat, interface::DisplaySink};
use parking_lot::Mutex;

/// Appends rendered blocks to any writer.
pub struct WriterSink<W: Write + Send> {
	writer: Mutex<W>,
	format: DisplayFormat,
}

impl<W: Write + Send> WriterSink<W> {
	pub fn new(writer: W, format: DisplayFormat) -> Self {
		Self {
			writer: Mutex::new(writer),
			format,
		}
	}

	pub fn format(&self) -> DisplayFormat {
		self.format
	}

	pub fn into_inner(self) -> W {
		self.writer.into_inner()
	}
}

impl WriterSink<io::Stdout> {
	pub fn stdout(format: DisplayFormat) -> Self {
		Self::new(io::stdout(), format)
	}
}

impl<W: Write + Send> DisplaySink for WriterSink<W> {
	fn write(&self, block: &DisplayBlock) -> io::Result<()> {
		let mut writer = self.writer.lock();
		writer.write_all(block.render(self.format).as_bytes())?;
		writer.flush()
	}
}

#[cfg(test)]
mod tests {
	use logbook_core::{DateFormat, EventKind, LogEvent, Severity};

	use super::*;

	#[test]
	fn test_appends_blocks() {
		let sink = WriterSink::new(Vec::new(), DisplayFormat::Text);
		let event = LogEvent::new(Severity::Custom, "first");
		sink.write(&DisplayBlock::new(EventKind::Custom, &event, &DateFormat::default())).unwrap();
		let event = LogEvent::new(Severity::Custom, "second");
		sink.write(&DisplayBlock::new(EventKind::Custom, &event, &DateFormat::default())).unwrap();

		let output = String::from_utf8(sink.into_inner()).unwrap();
		assert_eq!(output.matches("[Logger] Custom Message:").count(), 2);
		assert!(output.find("first").unwrap() < output.find("second").unwrap());
	}

	#[test]
	fn test_html_format() {
		let sink = WriterSink::new(Vec::new(), DisplayFormat::Html);
		let event = LogEvent::new(Severity::Warning, "x");
		sink.write(&DisplayBlock::new(EventKind::Runtime, &event, &DateFormat::default())).unwrap();

		let output = String::from_utf8(sink.into_inner()).unwrap();
		assert!(output.starts_with("<hr>"));
	}
}
