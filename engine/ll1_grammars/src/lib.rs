//! Concrete grammars written with `ll1_core` and `ll1_text`.
//!
//! - [`expr`]: arithmetic with units, variables, and `min`/`max`
//! - [`json`]: JSON documents
//!
//! Each grammar is built once per process and shared; parsing from several
//! threads at once is fine.

pub mod expr;
pub mod json;
