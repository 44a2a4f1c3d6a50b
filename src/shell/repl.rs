use std::io::{BufRead, Write};

use colored::Colorize;
use snafu::prelude::*;
use tracing::debug;

use crate::shell::command::Command;
use crate::store::{NodeKind, TreeStore};

const GREETING: &str = "In-memory tree shell. Type 'exit' to quit.";

/// The read/eval/print loop around a [`TreeStore`].
///
/// Generic over its input and output streams so sessions can be driven from
/// in-memory buffers. All results and errors are rendered on the output
/// stream; store and parse errors are recoverable and keep the loop running.
pub struct Repl<R, W> {
    store: TreeStore,
    input: R,
    output: W,
    color: bool,
}

impl<R, W> Repl<R, W>
where
    R: BufRead,
    W: Write,
{
    pub fn new(store: TreeStore, input: R, output: W, color: bool) -> Self {
        Repl {
            store,
            input,
            output,
            color,
        }
    }

    /// Runs the loop until `exit` or end of input.
    pub fn run(&mut self) -> Result<(), ReplError> {
        writeln!(self.output, "{GREETING}").context(OutputSnafu)?;

        let mut line = String::new();
        loop {
            let prompt = render_prompt(&self.store.current_path(), self.color);
            write!(self.output, "{prompt}").context(OutputSnafu)?;
            self.output.flush().context(OutputSnafu)?;

            line.clear();
            let read = self.input.read_line(&mut line).context(InputSnafu)?;
            if read == 0 {
                debug!("Reached end of input, leaving the loop");
                break;
            }
            if line.trim().is_empty() {
                continue;
            }

            match Command::parse(&line) {
                Ok(Command::Exit) => {
                    debug!("Exit requested");
                    break;
                }
                Ok(command) => self.dispatch(command)?,
                Err(error) => self.report(&error)?,
            }
        }

        Ok(())
    }

    fn dispatch(&mut self, command: Command) -> Result<(), ReplError> {
        debug!("Dispatching command: {:?}", command);

        let outcome = match command {
            Command::CreateFolder { name } => self.store.create_folder(&name),
            Command::CreateFile { name } => self.store.create_file(&name),
            Command::ChangeDirectory { target } => self.store.change_directory(&target),
            Command::Write { name, text } => self.store.write_file(&name, &text),
            Command::List => {
                for (name, kind) in self.store.list_children() {
                    let entry = render_entry(name, kind, self.color);
                    writeln!(self.output, "{entry}").context(OutputSnafu)?;
                }
                Ok(())
            }
            Command::PrintPath => {
                let path = self.store.current_path();
                writeln!(self.output, "{path}").context(OutputSnafu)?;
                Ok(())
            }
            Command::Read { name } => match self.store.read_file(&name) {
                Ok(content) => {
                    writeln!(self.output, "{content}").context(OutputSnafu)?;
                    Ok(())
                }
                Err(error) => Err(error),
            },
            // Handled by the loop before dispatch
            Command::Exit => Ok(()),
        };

        match outcome {
            Ok(()) => Ok(()),
            Err(error) => self.report(&error),
        }
    }

    fn report(&mut self, error: &dyn std::fmt::Display) -> Result<(), ReplError> {
        writeln!(self.output, "{error}").context(OutputSnafu)
    }
}

fn render_prompt(path: &str, color: bool) -> String {
    if color {
        format!("{}$ ", path.cyan())
    } else {
        format!("{path}$ ")
    }
}

fn render_entry(name: &str, kind: NodeKind, color: bool) -> String {
    match kind {
        NodeKind::Folder if color => format!("{}/", name.blue().bold()),
        NodeKind::Folder => format!("{name}/"),
        NodeKind::File => name.to_string(),
    }
}

#[derive(Debug, Snafu)]
pub enum ReplError {
    #[snafu(display("Failed to read from the input stream"))]
    InputError { source: std::io::Error },
    #[snafu(display("Failed to write to the output stream"))]
    OutputError { source: std::io::Error },
}
