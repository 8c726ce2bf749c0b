//! Command handlers for the expenses CLI.
//!
//! This module contains implementations for all CLI subcommands.

mod add;
mod delete;
mod edit;
mod init;
mod list;
mod summary;

use serde::Serialize;
use std::fmt::Debug;
use tracing::debug;

pub use add::add;
pub use delete::delete;
pub use edit::edit;
pub use init::init;
pub use list::list;
pub use summary::{summary, SummaryReport};

/// The output type for a command. This allows the command to return a consistent message and,
/// optionally, structured data that can be printed either as text or as JSON.
#[derive(Debug, Clone, Serialize)]
pub struct Out<T>
where
    T: Serialize + Clone + Debug,
{
    /// A message that can be printed to the user regarding the outcome of the command execution.
    message: String,

    /// Any structured data that needs to be output from the call.
    structure: Option<T>,
}

impl<T, S> From<S> for Out<T>
where
    T: Debug + Clone + Serialize,
    S: Into<String>,
{
    fn from(value: S) -> Self {
        Out::new_message(value)
    }
}

impl<T> Out<T>
where
    T: Serialize + Clone + Debug,
{
    /// Create a new `Out` object that has `Some(structure)`.
    pub fn new<S>(message: S, structure: T) -> Self
    where
        S: Into<String>,
    {
        Self {
            message: message.into(),
            structure: Some(structure),
        }
    }

    /// Create a new `Out` object that has `None` for `structure`.
    pub fn new_message<S>(message: S) -> Self
    where
        S: Into<String>,
    {
        Self {
            message: message.into(),
            structure: None,
        }
    }

    /// Get the `message`.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the structured data stored in `structure`.
    pub fn structure(&self) -> Option<&T> {
        self.structure.as_ref()
    }

    /// Print the output to stdout. With `json` the whole `Out` is printed as JSON, otherwise only
    /// the message is printed and the structured data goes to `debug!`.
    pub fn print(&self, json: bool) {
        if json {
            match serde_json::to_string_pretty(self) {
                Ok(s) => println!("{s}"),
                Err(e) => debug!("Unable to serialize command output: {e}"),
            }
            return;
        }

        println!("{}", self.message);
        if let Some(structure) = self.structure() {
            if let Ok(json) = serde_json::to_string_pretty(structure) {
                debug!("Command output:\n\n{json}\n\n");
            }
        }
    }
}

/// Returns `singular` or `plural` according to `count`.
fn plural<'a>(count: usize, singular: &'a str, plural: &'a str) -> &'a str {
    if count == 1 {
        singular
    } else {
        plural
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_serializes_message_and_structure() {
        let out = Out::new("two numbers", vec![1, 2]);
        let json = serde_json::to_value(&out).unwrap();
        assert_eq!(json["message"], "two numbers");
        assert_eq!(json["structure"], serde_json::json!([1, 2]));

        let out: Out<()> = "nothing".into();
        assert_eq!(out.message(), "nothing");
        assert!(out.structure().is_none());
        let json = serde_json::to_value(&out).unwrap();
        assert!(json["structure"].is_null());
    }

    #[test]
    fn test_plural() {
        assert_eq!(plural(1, "expense", "expenses"), "expense");
        assert_eq!(plural(0, "expense", "expenses"), "expenses");
        assert_eq!(plural(7, "expense", "expenses"), "expenses");
    }
}
