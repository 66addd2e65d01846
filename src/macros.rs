//! Utility macros for the front end.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_DEFAULT_HANDLER!` - Creates a lexer handler for fixed-text operators
//!
//! These macros reduce boilerplate in the lexer's pattern table.

/// Creates a Token instance with no lexical defect attached.
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::IntConstant, "42".to_string(), 1, 5, 2);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $text:expr, $line:expr, $column:expr, $length:expr) => {
        Token {
            kind: $kind,
            text: $text,
            line: $line,
            column: $column,
            length: $length,
            error: None,
        }
    };
}

/// Creates a lexer handler for a fixed-text operator or punctuation token.
///
/// Generates a handler that pushes a token with the given kind and text and
/// advances the lexer position by the text's length.
///
/// # Example
///
/// ```ignore
/// Pattern {
///     regex: Regex::new("<=").unwrap(),
///     handler: MK_DEFAULT_HANDLER!(TokenKind::Operator, "<="),
/// }
/// ```
#[macro_export]
macro_rules! MK_DEFAULT_HANDLER {
    ($kind:expr, $value:literal) => {
        |lexer: &mut Lexer, _matched: &str| {
            lexer.push(MK_TOKEN!(
                $kind,
                String::from($value),
                lexer.line,
                lexer.column,
                $value.len()
            ));
            lexer.advance_text($value);
        }
    };
}
