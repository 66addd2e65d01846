#![allow(clippy::module_inception)]

pub mod ast;
pub mod checker;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;
pub mod symbols;

extern crate regex;

/// A line/column location in the source text. Both components are 1-based;
/// column points at the first character of the token being reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Position { line, column }
    }
}

/// Splits source text into its lines, kept around for diagnostic rendering.
pub fn source_lines(content: &str) -> Vec<String> {
    content.lines().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_source_lines() {
        let lines = super::source_lines("int x;\ndouble y;\n");
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "int x;");
        assert_eq!(lines[1], "double y;");
    }

    #[test]
    fn test_source_lines_no_trailing_newline() {
        let lines = super::source_lines("int x;");
        assert_eq!(lines, vec!["int x;".to_string()]);
    }
}
