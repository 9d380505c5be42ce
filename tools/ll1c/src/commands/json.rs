//! `ll1c json`: validate JSON documents.

use std::fmt;
use std::io::{self, Read};
use std::path::PathBuf;

use ll1_core::ParseError;
use ll1_grammars::json;
use rayon::prelude::*;
use thiserror::Error;
use tracing::debug;

/// Where a document comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Stdin,
    File(PathBuf),
}

impl Source {
    /// `-` means standard input; anything else is a path.
    pub fn from_arg(arg: &str) -> Self {
        if arg == "-" {
            Source::Stdin
        } else {
            Source::File(PathBuf::from(arg))
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Stdin => f.write_str("<stdin>"),
            Source::File(path) => write!(f, "{}", path.display()),
        }
    }
}

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("cannot read: {0}")]
    Read(#[from] io::Error),
    #[error("{0}")]
    Parse(#[from] ParseError),
}

/// Shape of a valid document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    /// Kind of the top-level value.
    pub kind: &'static str,
    /// Values in the whole document.
    pub nodes: usize,
}

#[derive(Debug)]
pub struct DocumentReport {
    pub source: Source,
    pub outcome: Result<Summary, DocumentError>,
}

impl DocumentReport {
    pub fn is_ok(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// Read and parse every source in parallel, one report per source in
/// input order. All workers share the one JSON grammar.
pub fn check_documents(sources: Vec<Source>) -> Vec<DocumentReport> {
    check_documents_with_stdin(sources, io::stdin().lock())
}

/// [`check_documents`] with `stdin` standing in for standard input.
///
/// `stdin` is read to the end once, before the fan-out, and every `-`
/// source sees that same text.
pub fn check_documents_with_stdin(
    sources: Vec<Source>,
    mut stdin: impl Read,
) -> Vec<DocumentReport> {
    let piped = if sources.contains(&Source::Stdin) {
        let mut text = String::new();
        stdin.read_to_string(&mut text).map(|_| text)
    } else {
        Ok(String::new())
    };

    sources
        .into_par_iter()
        .map(|source| {
            let outcome = match &source {
                Source::Stdin => match &piped {
                    Ok(text) => check(text),
                    Err(error) => Err(io::Error::new(error.kind(), error.to_string()).into()),
                },
                Source::File(path) => std::fs::read_to_string(path)
                    .map_err(DocumentError::from)
                    .and_then(|text| check(&text)),
            };
            debug!(%source, ok = outcome.is_ok(), "checked document");
            DocumentReport { source, outcome }
        })
        .collect()
}

fn check(text: &str) -> Result<Summary, DocumentError> {
    let value = json::parse(text)?;
    Ok(Summary {
        kind: value.kind(),
        nodes: value.node_count(),
    })
}
