//! Output formatting utilities for the CLI.
//!
//! Every loaded record is written as one line: a readable `Kind: …` line by
//! default, or a compact JSON object tagged with `kind` in JSON mode.

use std::io::{self, Write};

use serde::Serialize;

use crate::domain::models::{Issue, IssueComment, IssueEvent};
use crate::services::{ProjectProcessor, RepositoryFailure};

pub trait CommandOutput: Serialize {
    fn to_human(&self) -> String;

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

/// Write one output line for `result`.
pub fn write_output<T: CommandOutput, W: Write>(
    writer: &mut W,
    result: &T,
    json_mode: bool,
) -> io::Result<()> {
    if json_mode {
        writeln!(writer, "{}", result.to_json())
    } else {
        writeln!(writer, "{}", result.to_human())
    }
}

/// One loaded record.
#[derive(Debug, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RecordLine<'a> {
    Issue(&'a Issue),
    Comment(&'a IssueComment),
    Event(&'a IssueEvent),
}

impl CommandOutput for RecordLine<'_> {
    fn to_human(&self) -> String {
        match self {
            Self::Issue(issue) => format!("Issue: {issue}"),
            Self::Comment(comment) => format!("Comment: {comment}"),
            Self::Event(event) => format!("Event: {event}"),
        }
    }
}

/// A repository that failed to load.
#[derive(Debug, Serialize)]
pub struct FailureLine {
    pub kind: &'static str,
    pub owner: String,
    pub name: String,
    pub phase: Option<String>,
    pub error: String,
}

impl From<&RepositoryFailure> for FailureLine {
    fn from(failure: &RepositoryFailure) -> Self {
        Self {
            kind: "failure",
            owner: failure.owner.clone(),
            name: failure.name.clone(),
            phase: failure.error.failed_phase().map(|phase| phase.to_string()),
            error: failure.error.to_string(),
        }
    }
}

impl CommandOutput for FailureLine {
    fn to_human(&self) -> String {
        format!("Failed: {}/{}: {}", self.owner, self.name, self.error)
    }
}

/// Write all records held by `processor`: issues, then comments, then events.
pub fn write_records<W: Write>(
    writer: &mut W,
    processor: &ProjectProcessor,
    json_mode: bool,
) -> io::Result<()> {
    for issue in processor.issues() {
        write_output(writer, &RecordLine::Issue(issue), json_mode)?;
    }
    for comment in processor.issue_comments() {
        write_output(writer, &RecordLine::Comment(comment), json_mode)?;
    }
    for event in processor.issue_events() {
        write_output(writer, &RecordLine::Event(event), json_mode)?;
    }
    writer.flush()
}
