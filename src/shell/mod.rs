//! The interactive command shell around the tree store.
//!
//! One line of input becomes one [`Command`], which dispatches to a single
//! store operation; results and errors are rendered back as text.

mod command;
mod repl;

pub use command::{Command, ParseError};
pub use repl::{Repl, ReplError};
