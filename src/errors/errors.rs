use std::fmt::Write;

use thiserror::Error;

use crate::Position;

/// The closed set of defects the front end can report.
///
/// The `Display` text of each variant is exactly the message printed after
/// the `*** ` prefix in a rendered diagnostic.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorKind {
    #[error("syntax error")]
    SyntaxError,
    #[error("Incompatible operands: {left} {op} {right}")]
    IncompatibleOperands {
        left: String,
        op: String,
        right: String,
    },
    #[error("Incompatible operand: {op} {operand}")]
    IncompatibleOperand { op: String, operand: String },
    #[error("No declaration found for '{name}'")]
    UndeclaredIdentifier { name: String },
    #[error("Duplicate declaration of '{name}'")]
    DuplicateDeclaration { name: String },
    #[error("Invalid number: {text}")]
    NumberParseError { text: String },
    #[error("Cannot call a non-function expression")]
    CallOfNonIdentifier,
    #[error("{message}")]
    LexicalDefect { message: String },
}

impl ErrorKind {
    pub fn name(&self) -> &'static str {
        match self {
            ErrorKind::SyntaxError => "SyntaxError",
            ErrorKind::IncompatibleOperands { .. } => "IncompatibleOperands",
            ErrorKind::IncompatibleOperand { .. } => "IncompatibleOperand",
            ErrorKind::UndeclaredIdentifier { .. } => "UndeclaredIdentifier",
            ErrorKind::DuplicateDeclaration { .. } => "DuplicateDeclaration",
            ErrorKind::NumberParseError { .. } => "NumberParseError",
            ErrorKind::CallOfNonIdentifier => "CallOfNonIdentifier",
            ErrorKind::LexicalDefect { .. } => "LexicalDefect",
        }
    }
}

/// An error kind located in the source text.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    kind: ErrorKind,
    position: Position,
}

impl Diagnostic {
    pub fn new(kind: ErrorKind, position: Position) -> Self {
        Diagnostic { kind, position }
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn message(&self) -> String {
        self.kind.to_string()
    }

    /// Renders the diagnostic in the line-pointer format:
    ///
    /// ```text
    /// *** Error line 3.
    /// int x = ;
    ///         ^
    /// *** syntax error
    /// ```
    ///
    /// `source` holds the original lines for the caret framing; a position
    /// beyond the stored lines omits the line/caret block.
    pub fn render(&self, source: &[String]) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "*** Error line {}.", self.position.line);

        if self.position.line >= 1 && self.position.line <= source.len() {
            let _ = writeln!(out, "{}", source[self.position.line - 1]);
            let _ = writeln!(
                out,
                "{}^",
                " ".repeat(self.position.column.saturating_sub(1))
            );
        }

        let _ = write!(out, "*** {}", self.kind);
        out
    }
}

/// Outcome of a failed parser production.
///
/// `Fatal` aborts the whole parse (the grammar has no legal continuation);
/// `Recoverable` lets the enclosing declaration/statement loop skip a token
/// and resume.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    Fatal(Diagnostic),
    Recoverable(Diagnostic),
}

impl ParseError {
    pub fn diagnostic(&self) -> &Diagnostic {
        match self {
            ParseError::Fatal(diag) | ParseError::Recoverable(diag) => diag,
        }
    }

    pub fn into_diagnostic(self) -> Diagnostic {
        match self {
            ParseError::Fatal(diag) | ParseError::Recoverable(diag) => diag,
        }
    }

    pub fn is_fatal(&self) -> bool {
        matches!(self, ParseError::Fatal(_))
    }
}
