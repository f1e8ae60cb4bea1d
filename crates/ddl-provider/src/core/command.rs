//! Generated commands and the sequences providers return.

use std::fmt;

use serde::Serialize;

/// One executable unit of DDL.
///
/// A command may span several lines (a guarded `CREATE TABLE` is a single
/// command) and must be sent to the database as one batch.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Command(String);

impl Command {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Command {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for Command {
    fn from(text: String) -> Self {
        Self(text)
    }
}

/// Ordered, finite, single-pass sequence of commands from one provider call.
///
/// Commands must be executed in the order yielded. The sequence is fully
/// assembled before it is returned, so every structural error surfaces
/// before the first command is available, and dropping a partially consumed
/// sequence has no effect.
#[derive(Debug)]
pub struct CommandSequence {
    commands: std::vec::IntoIter<Command>,
}

impl CommandSequence {
    pub fn new(commands: Vec<Command>) -> Self {
        Self {
            commands: commands.into_iter(),
        }
    }

    /// A sequence holding exactly one command.
    pub fn single(command: impl Into<String>) -> Self {
        Self::new(vec![Command::new(command)])
    }

    /// Collect the remaining commands as plain strings.
    pub fn into_strings(self) -> Vec<String> {
        self.map(Command::into_string).collect()
    }
}

impl Iterator for CommandSequence {
    type Item = Command;

    fn next(&mut self) -> Option<Command> {
        self.commands.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.commands.size_hint()
    }
}

impl ExactSizeIterator for CommandSequence {}

impl std::iter::FusedIterator for CommandSequence {}
