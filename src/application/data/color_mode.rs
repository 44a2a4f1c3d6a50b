use clap::ValueEnum;
use supports_color::Stream;

#[derive(Debug, Clone, Copy, ValueEnum, Default)]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Decides whether shell output should carry ANSI colors. `Always` and
    /// `Never` override the `colored` runtime detection so the two layers
    /// cannot disagree.
    pub fn resolve(self) -> bool {
        match self {
            Self::Always => {
                colored::control::set_override(true);
                true
            }
            Self::Never => {
                colored::control::set_override(false);
                false
            }
            Self::Auto => supports_color::on(Stream::Stdout).is_some(),
        }
    }
}
