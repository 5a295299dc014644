use clap::{Parser, ValueEnum};
use log::LevelFilter;
use std::path::PathBuf;

pub const DEFAULT_FILENAME: &str = "image.ppm";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "raycast")]
#[command(about = "Render a scene of flat-colored spheres into a P3 pixmap")]
pub struct Args {
    /// Output file path
    #[arg(default_value = DEFAULT_FILENAME)]
    pub output: PathBuf,

    /// Set the logging level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,
}
