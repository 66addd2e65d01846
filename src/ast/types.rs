use std::fmt;

use crate::lexer::tokens::{Token, TokenKind};

/// The fixed set of primitive types in the language.
///
/// `Error` is the poison type: it is produced whenever a defect has
/// already been reported for a subexpression, and every compatibility
/// query involving it answers `false` so no follow-on diagnostics are
/// emitted for the same defect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKind {
    Void,
    Int,
    Double,
    Bool,
    String,
    Null,
    Error,
}

impl TypeKind {
    /// Maps a type keyword token to its type, or `None` for any
    /// other token.
    pub fn from_token(token: &Token) -> Option<TypeKind> {
        match token.kind {
            TokenKind::Void => Some(TypeKind::Void),
            TokenKind::Int => Some(TypeKind::Int),
            TokenKind::Double => Some(TypeKind::Double),
            TokenKind::Bool => Some(TypeKind::Bool),
            TokenKind::String => Some(TypeKind::String),
            _ => None,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            TypeKind::Void => "void",
            TypeKind::Int => "int",
            TypeKind::Double => "double",
            TypeKind::Bool => "bool",
            TypeKind::String => "string",
            TypeKind::Null => "null",
            TypeKind::Error => "error",
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, TypeKind::Int | TypeKind::Double)
    }

    pub fn is_void(&self) -> bool {
        matches!(self, TypeKind::Void)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, TypeKind::Error)
    }

    /// Name equivalence. `Error` is never equivalent to anything,
    /// itself included.
    pub fn is_equivalent_to(&self, other: TypeKind) -> bool {
        if self.is_error() || other.is_error() {
            return false;
        }
        *self == other
    }

    /// Whether a value of `self` may be stored where `other` is
    /// expected. `null` is assignable to anything, and the two
    /// numeric types convert to each other.
    pub fn is_assignable_to(&self, other: TypeKind) -> bool {
        if self.is_error() || other.is_error() {
            return false;
        }
        if matches!(self, TypeKind::Null) {
            return true;
        }
        if self.is_numeric() && other.is_numeric() {
            return true;
        }
        self.is_equivalent_to(other)
    }
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.type_name())
    }
}
