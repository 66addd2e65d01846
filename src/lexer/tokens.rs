use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("void", TokenKind::Void);
        map.insert("int", TokenKind::Int);
        map.insert("double", TokenKind::Double);
        map.insert("bool", TokenKind::Bool);
        map.insert("string", TokenKind::String);
        map.insert("while", TokenKind::While);
        map.insert("if", TokenKind::If);
        map.insert("else", TokenKind::Else);
        map.insert("return", TokenKind::Return);
        map.insert("break", TokenKind::Break);
        map.insert("for", TokenKind::For);
        map.insert("Print", TokenKind::Print);
        map.insert("ReadInteger", TokenKind::ReadInteger);
        map.insert("ReadLine", TokenKind::ReadLine);
        map.insert("true", TokenKind::BoolConstant);
        map.insert("false", TokenKind::BoolConstant);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Identifier,
    IntConstant,
    DoubleConstant,
    BoolConstant,
    StringConstant,
    /// Punctuation and operators, disambiguated by the token text.
    Operator,

    // Reserved
    Void,
    Int,
    Double,
    Bool,
    String,
    While,
    If,
    Else,
    Return,
    Break,
    For,
    Print,
    ReadInteger,
    ReadLine,

    /// Malformed input. Carries a lexical defect note; for the
    /// parser's lookahead it behaves like end-of-input and is never
    /// consumed as valid syntax.
    Unknown,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub line: usize,
    pub column: usize,
    pub length: usize,
    /// Lexical defect noted by the scanner, carried through to the parser.
    pub error: Option<String>,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token {{ kind: {}, text: {} }}", self.kind, self.text)
    }
}

impl Token {
    /// The sentinel returned when the parser looks past the last token.
    pub fn end_marker() -> Token {
        Token {
            kind: TokenKind::Unknown,
            text: String::from("EOF"),
            line: 0,
            column: 0,
            length: 0,
            error: None,
        }
    }

    pub fn is_operator(&self, text: &str) -> bool {
        self.kind == TokenKind::Operator && self.text == text
    }

    /// True for the keywords that begin a type: `void int double bool string`.
    pub fn is_type_keyword(&self) -> bool {
        matches!(
            self.kind,
            TokenKind::Void
                | TokenKind::Int
                | TokenKind::Double
                | TokenKind::Bool
                | TokenKind::String
        )
    }

    pub fn position(&self) -> crate::Position {
        crate::Position::new(self.line, self.column)
    }
}
