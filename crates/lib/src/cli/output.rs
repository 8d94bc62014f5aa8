use core::fmt;
use std::io::{self, Write};

use serde::{Serialize, Serializer};

use crate::cli::{Answers, Report};

/// Writes answers, messages and reports either as plain text or as one JSON
/// object per line.
pub(crate) struct Output<O> {
    out: O,
    kind: OutputKind,
}

#[derive(Debug, Clone, Copy)]
pub(crate) enum OutputKind {
    Json,
    Normal,
}

impl<O> Output<O>
where
    O: Write,
{
    pub(crate) fn new(out: O, kind: OutputKind) -> Self {
        Self { out, kind }
    }

    #[cfg(test)]
    pub(crate) fn into_inner(self) -> O {
        self.out
    }

    pub(crate) fn info(&mut self, m: impl fmt::Display) -> io::Result<()> {
        self.write(Line::Message {
            kind: MessageKind::Info,
            output: DisplayString(&m),
        })
    }

    pub(crate) fn error(&mut self, m: impl fmt::Display) -> io::Result<()> {
        self.write(Line::Message {
            kind: MessageKind::Error,
            output: DisplayString(&m),
        })
    }

    /// Write every part of an answer, numbering parts from 1.
    pub(crate) fn answers<T>(&mut self, value: &T) -> io::Result<()>
    where
        T: ?Sized + Answers,
    {
        let mut part = 0;

        value.for_each_part(&mut |value| {
            part += 1;

            self.write(Line::Answer {
                part,
                value: DisplayString(value),
            })
        })
    }

    pub(crate) fn report(&mut self, report: &Report) -> io::Result<()> {
        self.write(Line::Report(report))
    }

    fn write(&mut self, line: Line<'_>) -> io::Result<()> {
        match self.kind {
            OutputKind::Json => {
                serde_json::to_writer(&mut self.out, &line)?;
                writeln!(self.out)
            }
            OutputKind::Normal => writeln!(self.out, "{line}"),
        }
    }
}

/// A single line of output.
///
/// As JSON this is `{"type": <variant>, "data": <fields>}`.
#[derive(Serialize)]
#[serde(tag = "type", content = "data", rename_all = "kebab-case")]
enum Line<'a> {
    Answer {
        part: usize,
        value: DisplayString<'a>,
    },
    Message {
        kind: MessageKind,
        output: DisplayString<'a>,
    },
    Report(&'a Report),
}

impl fmt::Display for Line<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Line::Answer { part, value } => write!(f, "part {part} result is {}", value.0),
            Line::Message { kind, output } => write!(f, "{kind}: {}", output.0),
            Line::Report(report) => fmt::Display::fmt(report, f),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "kebab-case")]
enum MessageKind {
    Info,
    Error,
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessageKind::Info => write!(f, "info"),
            MessageKind::Error => write!(f, "error"),
        }
    }
}

/// Serializes anything displayable as a string.
struct DisplayString<'a>(&'a dyn fmt::Display);

impl Serialize for DisplayString<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self.0)
    }
}
