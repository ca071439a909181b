use std::path::PathBuf;

use chrono_tz::Tz;
use clap::{Parser, ValueEnum};

#[derive(Debug, Parser)]
pub struct Args {
    /// Name triggers must target to reach this adapter.
    #[arg(long, env = "ATMO_NAME", default_value = "atmo")]
    pub name: String,

    /// CSV recording of raw sensor readings to replay.
    #[arg(long, env = "ATMO_REPLAY_FILE")]
    pub replay_file: PathBuf,

    #[arg(long, env = "TZ", default_value = "UTC")]
    pub timezone: Tz,

    #[arg(long, env = "ATMO_LOG_FORMAT", value_enum, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Pretty,
    Compact,
    Json,
}
