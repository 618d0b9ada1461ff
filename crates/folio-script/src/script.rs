// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! AppleScript composition from a fixed set of statement templates.
//!
//! Text only enters a [`Script`] as a [`Literal`], and numbers only as typed
//! values, so every interpolation point is one of the templates below.

use std::fmt;
use std::str::FromStr;

use folio_core::FolioError;

use crate::sanitize::Literal;

/// Spaces per nesting level in rendered scripts.
const INDENT: usize = 4;

/// A value in an AppleScript record (`{key:value, ...}`).
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    Text(Literal),
    Integer(i64),
    Number(f64),
    Bool(bool),
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(lit) => write!(f, "{lit}"),
            Self::Integer(n) => write!(f, "{n}"),
            // f64's Display already drops the fractional part of whole numbers.
            Self::Number(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{b}"),
        }
    }
}

/// An ordered AppleScript record. Keys are static, so callers cannot inject them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyList {
    entries: Vec<(&'static str, PropertyValue)>,
}

impl PropertyList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: &'static str, value: PropertyValue) {
        self.entries.push((key, value));
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Renders the record body without braces: `key:value, key:value`.
impl fmt::Display for PropertyList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (key, value)) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{key}:{value}")?;
        }
        Ok(())
    }
}

/// What a nested `tell` block addresses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// `document <n>`, 1-based; document 1 is the frontmost.
    Document(u32),
    /// A script variable bound earlier, e.g. by [`Statement::MakeDocument`].
    Variable(&'static str),
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Document(index) => write!(f, "document {index}"),
            Self::Variable(name) => f.write_str(name),
        }
    }
}

/// Where a new paragraph is inserted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParagraphPosition {
    Beginning,
    End,
    /// After the paragraph with this 1-based index.
    After(u32),
}

impl fmt::Display for ParagraphPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Beginning => f.write_str("at beginning"),
            Self::End => f.write_str("at end"),
            Self::After(index) => write!(f, "after paragraph {index}"),
        }
    }
}

/// Accepts `beginning`, `end`, or `after <n>` with `n` a positive integer.
impl FromStr for ParagraphPosition {
    type Err = FolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "beginning" => return Ok(Self::Beginning),
            "end" => return Ok(Self::End),
            _ => {}
        }

        let Some(rest) = s.strip_prefix("after ") else {
            return Err(FolioError::validation(format!(
                "invalid position `{s}`; use \"beginning\", \"end\" or \"after <n>\""
            )));
        };

        match rest.trim().parse::<u32>() {
            Ok(index) if index >= 1 => Ok(Self::After(index)),
            _ => Err(FolioError::validation(format!(
                "invalid position `{s}`; expected \"after <n>\" with n a positive paragraph number"
            ))),
        }
    }
}

/// One statement template.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// Create a document when none is open.
    EnsureDocument,
    /// Return `sentinel` when no document is open.
    ReturnIfNoDocument(Literal),
    /// `set <var> to make new document`, with properties only when non-empty.
    MakeDocument {
        var: &'static str,
        properties: PropertyList,
    },
    Tell {
        target: Target,
        body: Vec<Statement>,
    },
    SetBodyText(Literal),
    /// Read the current body and write it back with the literal appended.
    AppendBodyText(Literal),
    SetParagraphProperties {
        index: u32,
        properties: PropertyList,
    },
    MakeParagraph {
        position: ParagraphPosition,
        data: Literal,
    },
    ReturnBodyText,
}

impl Statement {
    pub fn tell_document(index: u32, body: Vec<Statement>) -> Self {
        Self::Tell {
            target: Target::Document(index),
            body,
        }
    }

    fn render_into(&self, out: &mut String, depth: usize) {
        let pad = " ".repeat(depth * INDENT);
        match self {
            Self::EnsureDocument => {
                out.push_str(&format!(
                    "{pad}if not (exists document 1) then make new document\n"
                ));
            }
            Self::ReturnIfNoDocument(sentinel) => {
                out.push_str(&format!(
                    "{pad}if not (exists document 1) then return {sentinel}\n"
                ));
            }
            Self::MakeDocument { var, properties } => {
                if properties.is_empty() {
                    out.push_str(&format!("{pad}set {var} to make new document\n"));
                } else {
                    out.push_str(&format!(
                        "{pad}set {var} to make new document with properties {{{properties}}}\n"
                    ));
                }
            }
            Self::Tell { target, body } => {
                out.push_str(&format!("{pad}tell {target}\n"));
                for statement in body {
                    statement.render_into(out, depth + 1);
                }
                out.push_str(&format!("{pad}end tell\n"));
            }
            Self::SetBodyText(text) => {
                out.push_str(&format!("{pad}set body text to {text}\n"));
            }
            Self::AppendBodyText(text) => {
                out.push_str(&format!("{pad}set body text to body text & {text}\n"));
            }
            Self::SetParagraphProperties { index, properties } => {
                out.push_str(&format!(
                    "{pad}set properties of paragraph {index} to {{{properties}}}\n"
                ));
            }
            Self::MakeParagraph { position, data } => {
                out.push_str(&format!(
                    "{pad}make new paragraph {position} with data {data}\n"
                ));
            }
            Self::ReturnBodyText => {
                out.push_str(&format!("{pad}return body text\n"));
            }
        }
    }
}

/// A complete script addressed to one application.
#[derive(Debug, Clone, PartialEq)]
pub struct Script {
    application: Literal,
    body: Vec<Statement>,
}

impl Script {
    /// Start a `tell application "<name>"` block.
    pub fn tell_application(name: &str) -> Self {
        Self {
            application: Literal::new(name),
            body: Vec::new(),
        }
    }

    /// Append a statement to the application block.
    pub fn then(mut self, statement: Statement) -> Self {
        self.body.push(statement);
        self
    }

    pub fn render(&self) -> String {
        let mut out = format!("tell application {}\n", self.application);
        for statement in &self.body {
            statement.render_into(&mut out, 1);
        }
        out.push_str("end tell");
        out
    }
}

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
