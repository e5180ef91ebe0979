// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Command line access to a log table.
//!
//! ```bash
//! # Create the log table
//! logbook --db app.db init
//!
//! # Store a custom message
//! logbook --db app.db log "nightly import finished" --notes "batch 12"
//!
//! # Show the ten oldest warnings first
//! logbook --db app.db list --order-by level --direction asc --limit 10
//! ```

use std::{fs, path::PathBuf, sync::Arc};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use logbook_core::{Limit, LogQuery, LogRecord, OrderColumn, OrderDirection};
use logbook_service::{LogConfig, LogOutcome, LogService, sink::ConsoleSink};
use logbook_sqlite::{Sqlite, SqliteConfig};
use tracing::debug;

#[derive(Parser)]
#[command(name = "logbook", version, about = "Inspect and write a logbook log table")]
struct Cli {
	/// Increase verbosity (-v, -vv, -vvv)
	#[arg(short, long, action = clap::ArgAction::Count, global = true)]
	verbose: u8,

	/// SQLite database file, or a directory holding log.db
	#[arg(long, global = true, default_value = "log.db")]
	db: PathBuf,

	/// JSON file with log service settings
	#[arg(long, global = true)]
	config: Option<PathBuf>,

	#[command(subcommand)]
	command: Command,
}

#[derive(Subcommand)]
enum Command {
	/// Create the log table
	Init,

	/// Print stored records
	List {
		#[arg(long, default_value_t = OrderColumn::Date)]
		order_by: OrderColumn,

		#[arg(long, default_value_t = OrderDirection::Desc)]
		direction: OrderDirection,

		#[arg(long)]
		limit: Option<u32>,

		/// Requires --limit
		#[arg(long, requires = "limit")]
		offset: Option<u32>,

		/// One JSON object per record
		#[arg(long)]
		json: bool,
	},

	/// Store a custom message
	Log {
		message: String,

		#[arg(long)]
		file: Option<String>,

		#[arg(long)]
		line: Option<u32>,

		#[arg(long)]
		notes: Option<String>,
	},
}

fn setup_logging(verbosity: u8) {
	let filter = match verbosity {
		0 => "info",
		1 => "debug",
		_ => "trace",
	};

	tracing_subscriber::fmt()
		.with_writer(std::io::stderr)
		.with_env_filter(
			tracing_subscriber::EnvFilter::try_from_default_env()
				.unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
		)
		.init();
}

fn load_config(path: Option<&PathBuf>) -> Result<LogConfig> {
	let Some(path) = path else {
		return Ok(LogConfig::default());
	};

	let json = fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
	LogConfig::from_json(&json).with_context(|| format!("invalid configuration in {}", path.display()))
}

fn print_record(record: &LogRecord) {
	let location = match (&record.file, record.line) {
		(Some(file), Some(line)) => format!("  {}:{}", file, line),
		(Some(file), None) => format!("  {}", file),
		_ => String::new(),
	};
	println!("{:>6}  {}  {:<20} {}{}", record.id, record.display_date, record.severity_name, record.message, location);
	if let Some(notes) = &record.notes {
		println!("{:>6}  {}", "", notes);
	}
}

fn main() -> Result<()> {
	let cli = Cli::parse();
	setup_logging(cli.verbose);

	let config = load_config(cli.config.as_ref())?;
	let database = Sqlite::new(SqliteConfig::new(&cli.db))
		.with_context(|| format!("failed to open {}", cli.db.display()))?;
	debug!(db = %cli.db.display(), "database opened");

	let service = LogService::builder(Arc::new(database)).config(config).with_sink(ConsoleSink::new()).build()?;

	match cli.command {
		Command::Init => {
			if !service.create_database_tables()? {
				bail!("database refused to create table {}", service.table());
			}
			println!("created table {}", service.table());
		}
		Command::List {
			order_by,
			direction,
			limit,
			offset,
			json,
		} => {
			let mut query = LogQuery::new().order_by(order_by, direction);
			if let Some(count) = limit {
				let mut limit = Limit::new(count);
				if let Some(offset) = offset {
					limit = limit.with_offset(offset);
				}
				query = query.limit(limit);
			}

			for record in service.get_log(&query)?.values() {
				if json {
					println!("{}", serde_json::to_string(record)?);
				} else {
					print_record(record);
				}
			}
		}
		Command::Log {
			message,
			file,
			line,
			notes,
		} => match service.log_custom_message(message, file.as_deref(), line, notes.as_deref()) {
			LogOutcome::Persisted(false) => bail!("message could not be stored in {}", service.table()),
			outcome => debug!(?outcome, "message logged"),
		},
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	use clap::CommandFactory;

	use super::*;

	#[test]
	fn test_command_definition() {
		Cli::command().debug_assert();
	}

	#[test]
	fn test_list_arguments() {
		let cli = Cli::try_parse_from([
			"logbook",
			"--db",
			"data",
			"list",
			"--order-by",
			"level",
			"--direction",
			"asc",
			"--limit",
			"5",
			"--offset",
			"10",
		])
		.unwrap();
		assert_eq!(cli.db, PathBuf::from("data"));

		match cli.command {
			Command::List {
				order_by,
				direction,
				limit,
				offset,
				json,
			} => {
				assert_eq!(order_by, OrderColumn::Level);
				assert_eq!(direction, OrderDirection::Asc);
				assert_eq!(limit, Some(5));
				assert_eq!(offset, Some(10));
				assert!(!json);
			}
			_ => panic!("expected list"),
		}
	}

	#[test]
	fn test_rejects_unknown_order_column() {
		assert!(Cli::try_parse_from(["logbook", "list", "--order-by", "level; DROP TABLE log"]).is_err());
	}

	#[test]
	fn test_offset_requires_limit() {
		assert!(Cli::try_parse_from(["logbook", "list", "--offset", "3"]).is_err());
	}

	#[test]
	fn test_missing_config_file() {
		let path = PathBuf::from("/nonexistent/logbook.json");
		assert!(load_config(Some(&path)).is_err());
		assert_eq!(load_config(None).unwrap(), LogConfig::default());
	}
}
