//! Recursive descent parser for the language.
//!
//! [`parser::Parser`] owns the token stream and the parse-time scope
//! stack; [`stmt`] and [`expr`] hold the productions for statements
//! and the expression precedence chain. [`scope`] tracks declared
//! names during the parse so variable references can be annotated
//! with their declared types as they are built.

pub mod expr;
pub mod parser;
pub mod scope;
pub mod stmt;

#[cfg(test)]
mod tests;
