use snafu::prelude::*;

const MKDIR_USAGE: &str = "mkdir <name>";
const TOUCH_USAGE: &str = "touch <name>";
const CD_USAGE: &str = "cd <name|..>";
const READ_USAGE: &str = "read <name>";
const WRITE_USAGE: &str = "write <name> \"<text>\"";

/// One parsed line of shell input.
///
/// Names are the remainder of the line after the command word, so they may
/// contain spaces. `write` instead takes the second token as the name and
/// everything after it as the text, with one layer of surrounding double
/// quotes stripped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    CreateFolder { name: String },
    CreateFile { name: String },
    List,
    ChangeDirectory { target: String },
    PrintPath,
    Write { name: String, text: String },
    Read { name: String },
    Exit,
}

impl Command {
    pub fn parse(line: &str) -> Result<Self, ParseError> {
        let line = line.trim();
        let (word, rest) = match line.split_once(' ') {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        match (word, rest) {
            ("ls", "") => Ok(Command::List),
            ("pwd", "") => Ok(Command::PrintPath),
            ("exit", "") => Ok(Command::Exit),
            ("mkdir", "") => MissingArgumentSnafu {
                usage: MKDIR_USAGE,
            }
            .fail(),
            ("mkdir", name) => Ok(Command::CreateFolder {
                name: name.to_string(),
            }),
            ("touch", "") => MissingArgumentSnafu {
                usage: TOUCH_USAGE,
            }
            .fail(),
            ("touch", name) => Ok(Command::CreateFile {
                name: name.to_string(),
            }),
            ("cd", "") => MissingArgumentSnafu { usage: CD_USAGE }.fail(),
            ("cd", target) => Ok(Command::ChangeDirectory {
                target: target.to_string(),
            }),
            ("read", "") => MissingArgumentSnafu { usage: READ_USAGE }.fail(),
            ("read", name) => Ok(Command::Read {
                name: name.to_string(),
            }),
            ("write", rest) => match rest.split_once(' ') {
                Some((name, text)) => Ok(Command::Write {
                    name: name.to_string(),
                    text: text.trim_matches('"').to_string(),
                }),
                None => MissingArgumentSnafu {
                    usage: WRITE_USAGE,
                }
                .fail(),
            },
            _ => UnknownCommandSnafu { input: line }.fail(),
        }
    }
}

#[derive(Debug, Snafu, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[snafu(display("Unknown command: '{}'", input))]
    UnknownCommand { input: String },
    #[snafu(display("Usage: {}", usage))]
    MissingArgument { usage: String },
}
