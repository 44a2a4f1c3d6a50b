use crate::application::data::ColorMode;
use crate::cli::Cli;

#[derive(Debug, Clone, Copy)]
pub struct RuntimeConfig {
    pub color: ColorMode,
}

impl From<Cli> for RuntimeConfig {
    fn from(cli: Cli) -> Self {
        Self { color: cli.color }
    }
}
