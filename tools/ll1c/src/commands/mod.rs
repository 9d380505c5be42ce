//! Command handlers for the `ll1c` CLI.
//!
//! Handlers return reports; printing and exit codes are left to `main`.

mod expr;
mod json;

pub use expr::{evaluate, parse_binding, BindingError, Evaluated, ExprError};
pub use json::{
    check_documents, check_documents_with_stdin, DocumentError, DocumentReport, Source, Summary,
};
