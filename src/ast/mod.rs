//! Abstract syntax tree for the language.
//!
//! The tree is a closed set of enums: [`expressions::Expr`] for
//! expressions, [`statements::Stmt`] for statements and
//! [`statements::Decl`] for declarations. Every node carries the
//! source [`crate::Position`] where it begins. Types are values of
//! [`types::TypeKind`], a fixed lattice of primitives.

pub mod expressions;
pub mod statements;
pub mod types;
