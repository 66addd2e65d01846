use crate::{
    ast::expressions::{BinaryOp, Expr, UnaryOp},
    errors::errors::{Diagnostic, ErrorKind, ParseError},
    lexer::tokens::TokenKind,
};

use super::parser::Parser;

/// Entry point of the expression grammar: assignment, which is
/// right associative and binds loosest.
pub fn parse_expr(parser: &mut Parser) -> Result<Expr, ParseError> {
    let target = parse_logical_or(parser)?;

    if parser.check_operator("=") {
        parser.advance();
        let value = parse_expr(parser)?;
        let position = target.position();
        return Ok(Expr::Assign {
            target: Box::new(target),
            value: Box::new(value),
            position,
        });
    }
    Ok(target)
}

fn binary_level(
    parser: &mut Parser,
    symbols: &[&str],
    next: fn(&mut Parser) -> Result<Expr, ParseError>,
) -> Result<Expr, ParseError> {
    let mut left = next(parser)?;
    loop {
        let Some(symbol) = symbols
            .iter()
            .find(|symbol| parser.check_operator(symbol))
            .copied()
        else {
            break;
        };
        parser.advance();
        // The symbol table above only lists symbols with an op.
        let Some(op) = BinaryOp::from_symbol(symbol) else {
            break;
        };
        let right = next(parser)?;
        let position = left.position();
        left = Expr::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
            position,
        };
    }
    Ok(left)
}

fn parse_logical_or(parser: &mut Parser) -> Result<Expr, ParseError> {
    binary_level(parser, &["||"], parse_logical_and)
}

fn parse_logical_and(parser: &mut Parser) -> Result<Expr, ParseError> {
    binary_level(parser, &["&&"], parse_equality)
}

fn parse_equality(parser: &mut Parser) -> Result<Expr, ParseError> {
    binary_level(parser, &["==", "!="], parse_relational)
}

fn parse_relational(parser: &mut Parser) -> Result<Expr, ParseError> {
    binary_level(parser, &["<=", ">=", "<", ">"], parse_additive)
}

fn parse_additive(parser: &mut Parser) -> Result<Expr, ParseError> {
    binary_level(parser, &["+", "-"], parse_multiplicative)
}

fn parse_multiplicative(parser: &mut Parser) -> Result<Expr, ParseError> {
    binary_level(parser, &["*", "/", "%"], parse_unary)
}

fn parse_unary(parser: &mut Parser) -> Result<Expr, ParseError> {
    let op = if parser.check_operator("-") {
        Some(UnaryOp::Negate)
    } else if parser.check_operator("!") {
        Some(UnaryOp::Not)
    } else {
        None
    };

    if let Some(op) = op {
        let token = parser.advance();
        let operand = parse_unary(parser)?;
        return Ok(Expr::Unary {
            op,
            operand: Box::new(operand),
            position: token.position(),
        });
    }
    parse_call(parser)
}

/// Postfix call position. A call is only well formed on a bare
/// identifier; anything else keeps its value, reports the defect
/// and skips the argument list so the parse can continue.
fn parse_call(parser: &mut Parser) -> Result<Expr, ParseError> {
    let mut expr = parse_primary(parser)?;

    while parser.check_operator("(") {
        expr = match expr {
            Expr::Var { name, position, .. } => {
                parser.advance();
                let mut args = Vec::new();
                while !parser.check_operator(")") {
                    if !args.is_empty() {
                        parser.consume_operator(",")?;
                    }
                    args.push(parse_expr(parser)?);
                }
                parser.consume_operator(")")?;
                let resolved_return_type = parser.function_return(&name);
                Expr::Call {
                    name,
                    args,
                    position,
                    resolved_return_type,
                }
            }
            other => {
                parser.report(Diagnostic::new(
                    ErrorKind::CallOfNonIdentifier,
                    parser.current_position(),
                ));
                skip_argument_list(parser)?;
                other
            }
        };
    }
    Ok(expr)
}

/// Consumes a parenthesized argument list without building anything,
/// balancing nested parentheses.
fn skip_argument_list(parser: &mut Parser) -> Result<(), ParseError> {
    parser.consume_operator("(")?;
    let mut depth = 1usize;
    while depth > 0 {
        if parser.at_end() {
            return Err(parser.syntax_error());
        }
        let token = parser.advance();
        if token.is_operator("(") {
            depth += 1;
        } else if token.is_operator(")") {
            depth -= 1;
        }
    }
    Ok(())
}

fn parse_primary(parser: &mut Parser) -> Result<Expr, ParseError> {
    let token = parser.current_token().clone();
    let position = token.position();

    match token.kind {
        TokenKind::IntConstant => {
            parser.advance();
            let value = token.text.parse::<i64>().map_err(|_| {
                ParseError::Fatal(Diagnostic::new(
                    ErrorKind::NumberParseError {
                        text: token.text.clone(),
                    },
                    position,
                ))
            })?;
            Ok(Expr::IntLiteral { value, position })
        }
        TokenKind::DoubleConstant => {
            parser.advance();
            let value = token.text.parse::<f64>().map_err(|_| {
                ParseError::Fatal(Diagnostic::new(
                    ErrorKind::NumberParseError {
                        text: token.text.clone(),
                    },
                    position,
                ))
            })?;
            Ok(Expr::DoubleLiteral { value, position })
        }
        TokenKind::BoolConstant => {
            parser.advance();
            Ok(Expr::BoolLiteral {
                value: token.text == "true",
                position,
            })
        }
        TokenKind::StringConstant => {
            parser.advance();
            Ok(Expr::StringLiteral {
                value: token.text,
                position,
            })
        }
        TokenKind::Identifier if token.text == "null" => {
            parser.advance();
            Ok(Expr::NullLiteral { position })
        }
        TokenKind::Identifier => {
            parser.advance();
            let resolved_type = parser.scopes.lookup(&token.text);
            Ok(Expr::Var {
                name: token.text,
                position,
                resolved_type,
            })
        }
        TokenKind::ReadInteger => {
            parser.advance();
            parser.consume_operator("(")?;
            parser.consume_operator(")")?;
            Ok(Expr::ReadInteger { position })
        }
        TokenKind::ReadLine => {
            parser.advance();
            parser.consume_operator("(")?;
            parser.consume_operator(")")?;
            Ok(Expr::ReadLine { position })
        }
        TokenKind::Operator if token.is_operator("(") => {
            parser.advance();
            let expr = parse_expr(parser)?;
            parser.consume_operator(")")?;
            Ok(expr)
        }
        _ => Err(parser.syntax_error()),
    }
}
