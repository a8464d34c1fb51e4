//! Terminal logger behind the `log` facade.
//!
//! Info lines go to stdout as-is; warnings and errors go to stderr with a
//! colored prefix. Verbose mode adds debug output and timestamps. An optional
//! log file receives every line with ANSI codes stripped.

use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;

use log::{Level, LevelFilter, Log, Metadata, Record};
use owo_colors::OwoColorize;
use owo_colors::Stream::{Stderr, Stdout};

use crate::CliError;

struct CliLogger {
    level: LevelFilter,
    timestamps: bool,
    logfile: Option<Mutex<File>>,
}

impl CliLogger {
    fn prefix(&self) -> String {
        if self.timestamps {
            format!("[{}] ", chrono::Local::now().format("%H:%M:%S%.3f"))
        } else {
            String::new()
        }
    }

    fn write_logfile(&self, line: &str) {
        if let Some(file) = &self.logfile {
            if let Ok(mut f) = file.lock() {
                let _ = writeln!(f, "{}", strip_ansi_escapes::strip_str(line));
            }
        }
    }
}

impl Log for CliLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let prefix = self.prefix();
        let line = match record.level() {
            Level::Error => {
                let line = format!(
                    "{}{} {}",
                    prefix,
                    "error:".if_supports_color(Stderr, |t| t.red()),
                    record.args(),
                );
                eprintln!("{}", line);
                line
            }
            Level::Warn => {
                let line = format!(
                    "{}{} {}",
                    prefix,
                    "warning:".if_supports_color(Stderr, |t| t.yellow()),
                    record.args(),
                );
                eprintln!("{}", line);
                line
            }
            Level::Info => {
                let line = format!("{}{}", prefix, record.args());
                println!("{}", line);
                line
            }
            Level::Debug | Level::Trace => {
                let body = format!("{} {}", record.level(), record.args());
                let line = format!("{}{}", prefix, body.if_supports_color(Stdout, |t| t.dimmed()));
                println!("{}", line);
                line
            }
        };

        self.write_logfile(&line);
    }

    fn flush(&self) {
        if let Some(file) = &self.logfile {
            if let Ok(mut f) = file.lock() {
                let _ = f.flush();
            }
        }
    }
}

/// Install the CLI logger. Call once, before any command runs.
pub(crate) fn init(quiet: bool, verbose: bool, logfile: Option<&Path>) -> Result<(), CliError> {
    let level = if quiet {
        LevelFilter::Warn
    } else if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let logfile = match logfile {
        Some(path) => Some(Mutex::new(File::create(path).map_err(|e| {
            CliError::other(format!("Failed to create log file {}: {}", path.display(), e))
        })?)),
        None => None,
    };

    let logger = CliLogger {
        level,
        timestamps: verbose,
        logfile,
    };

    log::set_boxed_logger(Box::new(logger))
        .map(|()| log::set_max_level(level))
        .map_err(|e| CliError::other(format!("Failed to install logger: {}", e)))
}

/// Emit an empty line through the logger.
pub(crate) fn log_blank() {
    log::info!("");
}
