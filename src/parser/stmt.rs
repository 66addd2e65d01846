use crate::{
    ast::statements::{BlockStmt, Stmt, VarDecl},
    ast::types::TypeKind,
    errors::errors::ParseError,
    lexer::tokens::{Token, TokenKind},
};

use super::{expr::parse_expr, parser::Parser};

pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, ParseError> {
    if parser.current_token().is_type_keyword() {
        let decl_type = match TypeKind::from_token(parser.current_token()) {
            Some(decl_type) => decl_type,
            None => return Err(parser.syntax_error()),
        };
        parser.advance();
        let name = parser.consume(TokenKind::Identifier)?;
        return parse_var_rest(parser, decl_type, name).map(Stmt::VarDecl);
    }

    if parser.check_operator("{") {
        return parse_block(parser).map(Stmt::Block);
    }

    let kind = parser.current_token().kind;
    match kind {
        TokenKind::If => parse_if(parser),
        TokenKind::While => parse_while(parser),
        TokenKind::For => parse_for(parser),
        TokenKind::Return => parse_return(parser),
        TokenKind::Break => parse_break(parser),
        TokenKind::Print => parse_print(parser),
        _ => {
            let expr = parse_expr(parser)?;
            parser.consume_operator(";")?;
            Ok(Stmt::Expr(expr))
        }
    }
}

/// Remainder of a variable declaration once `Type ident` has been
/// consumed: an optional initializer and the terminating semicolon.
/// The name is declared in the innermost open scope.
pub fn parse_var_rest(
    parser: &mut Parser,
    declared_type: TypeKind,
    name: Token,
) -> Result<VarDecl, ParseError> {
    let initializer = if parser.check_operator("=") {
        parser.advance();
        Some(parse_expr(parser)?)
    } else {
        None
    };
    parser.consume_operator(";")?;

    parser.scopes.declare(&name.text, declared_type);
    Ok(VarDecl {
        position: name.position(),
        name: name.text,
        declared_type,
        initializer,
    })
}

/// Block statement. Opens a scope frame of its own, unlike a
/// function body.
pub fn parse_block(parser: &mut Parser) -> Result<BlockStmt, ParseError> {
    let open = parser.consume_operator("{")?;
    parser.scopes.push_frame();

    let mut stmts = Vec::new();
    let result = loop {
        if parser.check_operator("}") {
            break Ok(());
        }
        if parser.at_end() {
            break Err(parser.syntax_error());
        }
        match parse_stmt(parser) {
            Ok(stmt) => stmts.push(stmt),
            Err(err) => break Err(err),
        }
    };
    parser.scopes.pop_frame();
    result?;

    parser.consume_operator("}")?;
    Ok(BlockStmt {
        stmts,
        position: open.position(),
    })
}

fn parse_if(parser: &mut Parser) -> Result<Stmt, ParseError> {
    let keyword = parser.consume(TokenKind::If)?;
    parser.consume_operator("(")?;
    let condition = parse_expr(parser)?;
    parser.consume_operator(")")?;
    let then_branch = Box::new(parse_stmt(parser)?);

    let else_branch = if parser.check(TokenKind::Else) {
        parser.advance();
        Some(Box::new(parse_stmt(parser)?))
    } else {
        None
    };

    Ok(Stmt::If {
        condition,
        then_branch,
        else_branch,
        position: keyword.position(),
    })
}

fn parse_while(parser: &mut Parser) -> Result<Stmt, ParseError> {
    let keyword = parser.consume(TokenKind::While)?;
    parser.consume_operator("(")?;
    let condition = parse_expr(parser)?;
    parser.consume_operator(")")?;
    let body = Box::new(parse_stmt(parser)?);

    Ok(Stmt::While {
        condition,
        body,
        position: keyword.position(),
    })
}

/// `for (init? ; cond? ; step?) stmt` — any clause may be empty, so
/// `for (;;)` is a legal header.
fn parse_for(parser: &mut Parser) -> Result<Stmt, ParseError> {
    let keyword = parser.consume(TokenKind::For)?;
    parser.consume_operator("(")?;

    let init = if parser.check_operator(";") {
        None
    } else {
        Some(parse_expr(parser)?)
    };
    parser.consume_operator(";")?;

    let condition = if parser.check_operator(";") {
        None
    } else {
        Some(parse_expr(parser)?)
    };
    parser.consume_operator(";")?;

    let step = if parser.check_operator(")") {
        None
    } else {
        Some(parse_expr(parser)?)
    };
    parser.consume_operator(")")?;

    let body = Box::new(parse_stmt(parser)?);
    Ok(Stmt::For {
        init,
        condition,
        step,
        body,
        position: keyword.position(),
    })
}

fn parse_return(parser: &mut Parser) -> Result<Stmt, ParseError> {
    let keyword = parser.consume(TokenKind::Return)?;
    let value = if parser.check_operator(";") {
        None
    } else {
        Some(parse_expr(parser)?)
    };
    parser.consume_operator(";")?;

    Ok(Stmt::Return {
        value,
        position: keyword.position(),
    })
}

fn parse_break(parser: &mut Parser) -> Result<Stmt, ParseError> {
    let keyword = parser.consume(TokenKind::Break)?;
    parser.consume_operator(";")?;
    Ok(Stmt::Break {
        position: keyword.position(),
    })
}

/// `Print(expr, ...)` takes at least one argument.
fn parse_print(parser: &mut Parser) -> Result<Stmt, ParseError> {
    let keyword = parser.consume(TokenKind::Print)?;
    parser.consume_operator("(")?;

    let mut args = vec![parse_expr(parser)?];
    while parser.check_operator(",") {
        parser.advance();
        args.push(parse_expr(parser)?);
    }
    parser.consume_operator(")")?;
    parser.consume_operator(";")?;

    Ok(Stmt::Print {
        args,
        position: keyword.position(),
    })
}
