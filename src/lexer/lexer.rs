use regex::Regex;

use crate::{MK_DEFAULT_HANDLER, MK_TOKEN};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

const MAX_IDENTIFIER_LENGTH: usize = 31;

pub type PatternHandler = fn(&mut Lexer, &str);

pub struct Pattern {
    regex: Regex,
    handler: PatternHandler,
}

pub struct Lexer {
    tokens: Vec<Token>,
    source: String,
    pos: usize,
    line: usize,
    column: usize,
}

impl Lexer {
    pub fn new(source: &str) -> Lexer {
        Lexer {
            tokens: vec![],
            source: source.to_string(),
            pos: 0,
            line: 1,
            column: 1,
        }
    }

    /// Advances past `matched`. The byte cursor moves by the byte
    /// length, the column by the character count, so multibyte text
    /// keeps later carets aligned.
    pub fn advance_text(&mut self, matched: &str) {
        self.pos += matched.len();
        self.column += matched.chars().count();
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }
}

fn create_patterns() -> Vec<Pattern> {
    vec![
        Pattern { regex: Regex::new("\\s+").unwrap(), handler: skip_handler },
        Pattern { regex: Regex::new("//.*").unwrap(), handler: comment_handler },
        Pattern { regex: Regex::new("[a-zA-Z_][a-zA-Z0-9_]*").unwrap(), handler: symbol_handler },
        Pattern { regex: Regex::new("[0-9]+\\.[0-9]*([Ee][+-]?[0-9]+)?").unwrap(), handler: double_handler },
        Pattern { regex: Regex::new("[0-9]+").unwrap(), handler: int_handler },
        Pattern { regex: Regex::new("\"[^\"\\n]*\"").unwrap(), handler: string_handler },
        Pattern { regex: Regex::new("<=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Operator, "<=") },
        Pattern { regex: Regex::new(">=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Operator, ">=") },
        Pattern { regex: Regex::new("==").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Operator, "==") },
        Pattern { regex: Regex::new("!=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Operator, "!=") },
        Pattern { regex: Regex::new("\\|\\|").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Operator, "||") },
        Pattern { regex: Regex::new("&&").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Operator, "&&") },
        Pattern { regex: Regex::new("\\+").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Operator, "+") },
        Pattern { regex: Regex::new("-").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Operator, "-") },
        Pattern { regex: Regex::new("\\*").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Operator, "*") },
        Pattern { regex: Regex::new("/").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Operator, "/") },
        Pattern { regex: Regex::new("%").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Operator, "%") },
        Pattern { regex: Regex::new("=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Operator, "=") },
        Pattern { regex: Regex::new("<").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Operator, "<") },
        Pattern { regex: Regex::new(">").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Operator, ">") },
        Pattern { regex: Regex::new("!").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Operator, "!") },
        Pattern { regex: Regex::new("\\|").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Operator, "|") },
        Pattern { regex: Regex::new("\\.").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Operator, ".") },
        Pattern { regex: Regex::new(";").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Operator, ";") },
        Pattern { regex: Regex::new(",").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Operator, ",") },
        Pattern { regex: Regex::new("\\{").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Operator, "{") },
        Pattern { regex: Regex::new("\\}").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Operator, "}") },
        Pattern { regex: Regex::new("\\(").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Operator, "(") },
        Pattern { regex: Regex::new("\\)").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Operator, ")") },
    ]
}

fn skip_handler(lexer: &mut Lexer, matched: &str) {
    for ch in matched.chars() {
        if ch == '\n' {
            lexer.line += 1;
            lexer.column = 1;
        } else {
            lexer.column += 1;
        }
    }
    lexer.pos += matched.len();
}

fn comment_handler(lexer: &mut Lexer, matched: &str) {
    lexer.advance_text(matched);
}

fn symbol_handler(lexer: &mut Lexer, matched: &str) {
    if let Some(kind) = RESERVED_LOOKUP.get(matched) {
        lexer.push(MK_TOKEN!(
            *kind,
            String::from(matched),
            lexer.line,
            lexer.column,
            matched.len()
        ));
    } else {
        let mut token = MK_TOKEN!(
            TokenKind::Identifier,
            String::from(matched),
            lexer.line,
            lexer.column,
            matched.len()
        );
        if matched.len() > MAX_IDENTIFIER_LENGTH {
            token.error = Some(format!("Identifier too long: \"{}\"", matched));
        }
        lexer.push(token);
    }

    lexer.advance_text(matched);
}

fn int_handler(lexer: &mut Lexer, matched: &str) {
    lexer.push(MK_TOKEN!(
        TokenKind::IntConstant,
        String::from(matched),
        lexer.line,
        lexer.column,
        matched.len()
    ));
    lexer.advance_text(matched);
}

fn double_handler(lexer: &mut Lexer, matched: &str) {
    lexer.push(MK_TOKEN!(
        TokenKind::DoubleConstant,
        String::from(matched),
        lexer.line,
        lexer.column,
        matched.len()
    ));
    lexer.advance_text(matched);
}

fn string_handler(lexer: &mut Lexer, matched: &str) {
    // Token text drops the quotes; length keeps them so the caret math works.
    lexer.push(MK_TOKEN!(
        TokenKind::StringConstant,
        String::from(&matched[1..matched.len() - 1]),
        lexer.line,
        lexer.column,
        matched.len()
    ));
    lexer.advance_text(matched);
}

/// Tokenizes the entire source text.
///
/// Unrecognized characters become `Unknown` tokens carrying a lexical defect
/// note rather than failing the whole scan; identifiers past the length
/// limit keep their kind but carry a defect as well. The parser surfaces
/// these pass-through defects as diagnostics.
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut lex = Lexer::new(source);
    let patterns = create_patterns();

    while !lex.at_eof() {
        let mut matched_text = None;

        for pattern in patterns.iter() {
            if let Some(found) = pattern.regex.find(lex.remainder()) {
                if found.start() == 0 {
                    matched_text = Some((found.as_str().to_string(), pattern.handler));
                    break;
                }
            }
        }

        match matched_text {
            Some((text, handler)) => handler(&mut lex, &text),
            None => {
                let ch = lex.remainder().chars().next().unwrap_or('\0');
                let text = ch.to_string();
                let mut token = MK_TOKEN!(TokenKind::Unknown, text.clone(), lex.line, lex.column, 1);
                token.error = Some(format!("Unrecognized char: '{}'", ch));
                lex.push(token);
                lex.advance_text(&text);
            }
        }
    }

    lex.tokens
}
