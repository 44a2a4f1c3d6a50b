use clap::Parser;

use crate::application::data::{ColorMode, LogLevel};

#[derive(Parser, Debug, Clone)]
#[command(version, about = "An in-memory file/folder tree behind an interactive shell")]
pub struct Cli {
    #[clap(long, short, default_value = "warn", value_enum)]
    pub log_level: LogLevel,

    /// When to colorize shell output
    #[clap(long, default_value = "auto", value_enum)]
    pub color: ColorMode,
}
