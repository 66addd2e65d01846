//! Error types and diagnostic reporting for the front end.
//!
//! This module defines the error kinds produced during lexing, parsing and
//! semantic checking, the `Diagnostic` wrapper that pairs a kind with a
//! source position, and the fatal/recoverable split used by the parser.

pub mod errors;
