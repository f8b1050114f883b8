use clap::{Parser, ValueEnum};
use log::LevelFilter;

/// Custom enum for log levels that can be used with clap's ValueEnum
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convert our custom LogLevel enum to log crate's LevelFilter
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

/// Command line arguments structure using clap derive macros
#[derive(Debug, Parser)]
#[command(name = "spheretrace")]
#[command(about = "A recursive ray tracer for spheres with soft shadows")]
pub struct Args {
    /// Maximum number of mirror bounces after the primary hit
    #[arg(short, long, default_value = "10", help = "Maximum number of ray bounces")]
    pub bounces: u32,

    /// Set the logging level (defaults to "info")
    #[arg(long, default_value = "info", help = "Set the logging level")]
    pub debug_level: LogLevel,

    /// Image width in pixels
    #[arg(long, default_value = "800", value_parser = clap::value_parser!(u32).range(1..), help = "Image width in pixels")]
    pub width: u32,

    /// Image height in pixels
    #[arg(long, default_value = "600", value_parser = clap::value_parser!(u32).range(1..), help = "Image height in pixels")]
    pub height: u32,

    /// Output file path (.bmp or .png for 8-bit, .exr for HDR linear)
    #[arg(short, long, default_value = "output.bmp", help = "Output file path (.bmp or .png for 8-bit, .exr for HDR linear)")]
    pub output: String,

    /// TOML scene file; the built-in scene is used when omitted
    #[arg(long, help = "TOML scene file (defaults to the built-in scene)")]
    pub scene: Option<String>,

    /// Seed for the soft-shadow jitter, for reproducible output
    #[arg(long, help = "Seed for the soft-shadow jitter (random when omitted)")]
    pub seed: Option<u64>,

    /// Hide the progress bar
    #[arg(short, long, help = "Hide the progress bar")]
    pub quiet: bool,

    /// Send image to TEV for visualization
    #[arg(long, help = "Send image to TEV for visualization")]
    pub tev: bool,

    /// TEV client IP address and port (automatically enables --tev)
    #[arg(long, help = "TEV client IP address and port (automatically enables --tev)")]
    pub tev_address: Option<String>,
}
