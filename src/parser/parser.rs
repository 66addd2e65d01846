//! Core parser state and the declaration-level productions.
//!
//! This module contains the main Parser struct, the `parse` entry
//! point and the grammar for top level declarations. Statement and
//! expression productions live in the sibling `stmt` and `expr`
//! modules and operate on the same `Parser`.
//!
//! Error handling distinguishes two severities:
//! - a `Fatal` error means the grammar has no legal continuation and
//!   the whole parse is abandoned with a single syntax diagnostic;
//! - a `Recoverable` error is raised when a top level declaration
//!   does not start with a type keyword and identifier, in which case
//!   the declaration loop silently skips one token and tries again.

use std::collections::HashMap;

use crate::{
    ast::statements::{BlockStmt, Decl, FunctionDecl, Program, VarDecl},
    ast::types::TypeKind,
    errors::errors::{Diagnostic, ErrorKind, ParseError},
    lexer::tokens::{Token, TokenKind},
    Position,
};

use super::{scope::ScopeStack, stmt};

/// The main parser structure that maintains parsing state.
///
/// Holds the token stream, the current position in it, the scope
/// stack used for parse-time name resolution and the diagnostics
/// accumulated so far. Lexical defects attached to incoming tokens
/// are turned into diagnostics on construction. `Unknown` tokens
/// stay in the stream but match no production, so lookahead treats
/// them like end-of-input and they are never consumed as valid
/// syntax; only the recovery skip steps over them.
pub struct Parser {
    /// The list of tokens to parse
    tokens: Vec<Token>,
    /// Current position in the token stream
    pos: usize,
    /// Scopes open at the current point of the parse
    pub(crate) scopes: ScopeStack,
    /// Return types of the function signatures parsed so far
    functions: HashMap<String, TypeKind>,
    /// Diagnostics reported so far, in source order
    diagnostics: Vec<Diagnostic>,
    /// Sentinel returned when the stream is exhausted
    end: Token,
}

impl Parser {
    /// Creates a new Parser instance.
    ///
    /// Tokens carrying a lexical defect contribute a diagnostic
    /// immediately, before any parse diagnostic.
    pub fn new(tokens: Vec<Token>) -> Self {
        let mut diagnostics = Vec::new();
        for token in &tokens {
            if let Some(message) = &token.error {
                diagnostics.push(Diagnostic::new(
                    ErrorKind::LexicalDefect {
                        message: message.clone(),
                    },
                    token.position(),
                ));
            }
        }
        Parser {
            tokens,
            pos: 0,
            scopes: ScopeStack::new(),
            functions: HashMap::new(),
            diagnostics,
            end: Token::end_marker(),
        }
    }

    pub(crate) fn at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// Returns the token under the cursor, or the end sentinel once
    /// the stream is exhausted.
    pub(crate) fn current_token(&self) -> &Token {
        self.tokens.get(self.pos).unwrap_or(&self.end)
    }

    /// Position of the token under the cursor; past the end this is
    /// the position of the last token so diagnostics still point at
    /// real source.
    pub(crate) fn current_position(&self) -> Position {
        if let Some(token) = self.tokens.get(self.pos) {
            token.position()
        } else if let Some(last) = self.tokens.last() {
            last.position()
        } else {
            Position::default()
        }
    }

    /// Consumes and returns the current token. The cursor stops at
    /// one-past-the-last-token; advancing from there is a contract
    /// violation on the caller's side.
    pub(crate) fn advance(&mut self) -> Token {
        debug_assert!(self.pos < self.tokens.len(), "advance past end of stream");
        let token = self.current_token().clone();
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
        token
    }

    pub(crate) fn check(&self, kind: TokenKind) -> bool {
        self.current_token().kind == kind
    }

    pub(crate) fn check_operator(&self, symbol: &str) -> bool {
        self.current_token().is_operator(symbol)
    }

    /// Consumes a token of the expected kind, or fails fatally.
    pub(crate) fn consume(&mut self, kind: TokenKind) -> Result<Token, ParseError> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(self.syntax_error())
        }
    }

    /// Consumes the expected operator, or fails fatally.
    pub(crate) fn consume_operator(&mut self, symbol: &str) -> Result<Token, ParseError> {
        if self.check_operator(symbol) {
            Ok(self.advance())
        } else {
            Err(self.syntax_error())
        }
    }

    pub(crate) fn syntax_error(&self) -> ParseError {
        ParseError::Fatal(Diagnostic::new(ErrorKind::SyntaxError, self.current_position()))
    }

    fn recoverable_error(&self) -> ParseError {
        ParseError::Recoverable(Diagnostic::new(
            ErrorKind::SyntaxError,
            self.current_position(),
        ))
    }

    pub(crate) fn report(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Return type of a function whose signature has been parsed,
    /// or `Error` for a name with no signature in sight.
    pub(crate) fn function_return(&self, name: &str) -> TypeKind {
        self.functions.get(name).copied().unwrap_or(TypeKind::Error)
    }

    /// Parses `Type ident` — the common prefix of every declaration.
    /// Either token missing makes the declaration recoverable: the
    /// caller skips a token and retries instead of aborting.
    fn parse_decl_prefix(&mut self) -> Result<(TypeKind, Token), ParseError> {
        let decl_type = match TypeKind::from_token(self.current_token()) {
            Some(decl_type) => decl_type,
            None => return Err(self.recoverable_error()),
        };
        self.advance();

        if !self.check(TokenKind::Identifier) {
            return Err(self.recoverable_error());
        }
        let name = self.advance();
        Ok((decl_type, name))
    }

    /// Parses one top level declaration. After `Type ident` the next
    /// token decides between a function (`(`) and a variable.
    fn parse_decl(&mut self) -> Result<Decl, ParseError> {
        let (decl_type, name) = self.parse_decl_prefix()?;

        if self.check_operator("(") {
            self.parse_function_rest(decl_type, name).map(Decl::Function)
        } else {
            stmt::parse_var_rest(self, decl_type, name).map(Decl::Variable)
        }
    }

    /// Parses the formals and body of a function declaration. The
    /// formals and the body statements share a single scope frame,
    /// so a local redeclaring a formal is the checker's duplicate,
    /// not a shadow.
    fn parse_function_rest(
        &mut self,
        return_type: TypeKind,
        name: Token,
    ) -> Result<FunctionDecl, ParseError> {
        let position = name.position();
        self.consume_operator("(")?;

        let mut params = Vec::new();
        while !self.check_operator(")") {
            if !params.is_empty() {
                self.consume_operator(",")?;
            }
            let param_type = match TypeKind::from_token(self.current_token()) {
                Some(param_type) => param_type,
                None => return Err(self.syntax_error()),
            };
            self.advance();
            let param_name = self.consume(TokenKind::Identifier)?;
            params.push(VarDecl {
                name: param_name.text.clone(),
                declared_type: param_type,
                initializer: None,
                position: param_name.position(),
            });
        }
        self.consume_operator(")")?;

        // Registered before the body so recursive calls resolve.
        self.functions.insert(name.text.clone(), return_type);

        self.scopes.push_frame();
        for param in &params {
            self.scopes.declare(&param.name, param.declared_type);
        }
        let body = self.parse_function_body();
        self.scopes.pop_frame();

        Ok(FunctionDecl {
            name: name.text,
            return_type,
            params,
            body: body?,
            position,
        })
    }

    /// Body block of a function. Unlike a nested block statement it
    /// does not open a frame of its own; the caller already opened
    /// one holding the formals.
    fn parse_function_body(&mut self) -> Result<BlockStmt, ParseError> {
        let open = self.consume_operator("{")?;
        let mut stmts = Vec::new();
        while !self.check_operator("}") {
            if self.at_end() {
                return Err(self.syntax_error());
            }
            stmts.push(stmt::parse_stmt(self)?);
        }
        self.consume_operator("}")?;
        Ok(BlockStmt {
            stmts,
            position: open.position(),
        })
    }
}

/// Parses a full token stream into a program.
///
/// Returns the program (or `None` after a fatal syntax error) and
/// every diagnostic gathered along the way, lexical defects first.
/// A declaration that fails recoverably contributes nothing: the
/// loop skips a single token and resumes looking for the next
/// declaration.
pub fn parse(tokens: Vec<Token>) -> (Option<Program>, Vec<Diagnostic>) {
    let mut parser = Parser::new(tokens);
    let position = parser.current_position();
    parser.scopes.push_frame();

    let mut decls = Vec::new();
    while !parser.at_end() {
        match parser.parse_decl() {
            Ok(decl) => decls.push(decl),
            Err(ParseError::Recoverable(_)) => {
                parser.advance();
            }
            Err(ParseError::Fatal(diagnostic)) => {
                parser.diagnostics.push(diagnostic);
                return (None, parser.diagnostics);
            }
        }
    }
    parser.scopes.pop_frame();

    (Some(Program { decls, position }), parser.diagnostics)
}
