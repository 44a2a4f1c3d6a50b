use std::io;

use snafu::Snafu;
use snafu::prelude::*;
use tracing::debug;

use crate::application::RuntimeConfig;
use crate::shell::{Repl, ReplError};
use crate::store::TreeStore;

pub struct Application;

impl Application {
    pub fn run(app_config: impl Into<RuntimeConfig>) -> Result<(), ApplicationError> {
        let app_config: RuntimeConfig = app_config.into();
        let color = app_config.color.resolve();
        debug!("Color output enabled: {}", color);

        let stdin = io::stdin().lock();
        let stdout = io::stdout().lock();

        Repl::new(TreeStore::new(), stdin, stdout, color)
            .run()
            .context(ShellSnafu)?;

        Ok(())
    }
}

#[derive(Debug, Snafu)]
pub enum ApplicationError {
    #[snafu(display("Critical failure encountered while running the shell"))]
    ShellError { source: ReplError },
}
