/// CLI argument parsing.
use std::{path::PathBuf, time::Duration};

use clap::{Parser, ValueEnum};

use crate::app::{DEFAULT_PICK_DELAY, Settings};

#[derive(Parser, Debug)]
#[command(
    name = "hue",
    version,
    about = "Hue - A terminal random colour picker"
)]
pub struct Cli {
    /// How long a pick "thinks" before landing, in milliseconds
    #[arg(short = 'd', long = "delay-ms", default_value_t = DEFAULT_PICK_DELAY.as_millis() as u64)]
    pub delay_ms: u64,
    /// Seed the random generator for a reproducible session
    #[arg(short = 's', long = "seed")]
    pub seed: Option<u64>,
    /// Write logs to this file (nothing is logged otherwise)
    #[arg(long = "log-file")]
    pub log_file: Option<PathBuf>,
    #[arg(long = "log-level", value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => tracing::Level::ERROR,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Trace => tracing::Level::TRACE,
        }
    }
}

impl Cli {
    pub fn settings(&self) -> Settings {
        Settings {
            pick_delay: Duration::from_millis(self.delay_ms),
            seed: self.seed,
        }
    }
}
