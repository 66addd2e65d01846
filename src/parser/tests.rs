//! Unit tests for the parser module.

use crate::ast::expressions::{BinaryOp, Expr, UnaryOp};
use crate::ast::statements::{Decl, Stmt};
use crate::ast::types::TypeKind;
use crate::lexer::lexer::tokenize;

use super::parser::parse;
use super::scope::ScopeStack;

fn parse_source(source: &str) -> crate::ast::statements::Program {
    let (program, diagnostics) = parse(tokenize(source));
    assert!(diagnostics.is_empty(), "unexpected diagnostics: {diagnostics:?}");
    program.expect("expected a program")
}

#[test]
fn test_parse_global_variable() {
    let program = parse_source("int x;");

    assert_eq!(program.decls.len(), 1);
    match &program.decls[0] {
        Decl::Variable(var) => {
            assert_eq!(var.name, "x");
            assert_eq!(var.declared_type, TypeKind::Int);
            assert!(var.initializer.is_none());
        }
        other => panic!("expected a variable, got {other:?}"),
    }
}

#[test]
fn test_parse_variable_with_initializer() {
    let program = parse_source("double d = 1.5;");

    match &program.decls[0] {
        Decl::Variable(var) => match var.initializer.as_ref().unwrap() {
            Expr::DoubleLiteral { value, .. } => assert_eq!(*value, 1.5),
            other => panic!("expected a double literal, got {other:?}"),
        },
        other => panic!("expected a variable, got {other:?}"),
    }
}

#[test]
fn test_parse_function() {
    let program = parse_source("int add(int a, int b) { return a + b; }");

    match &program.decls[0] {
        Decl::Function(func) => {
            assert_eq!(func.name, "add");
            assert_eq!(func.return_type, TypeKind::Int);
            assert_eq!(func.params.len(), 2);
            assert_eq!(func.params[1].name, "b");
            assert_eq!(func.body.stmts.len(), 1);
        }
        other => panic!("expected a function, got {other:?}"),
    }
}

#[test]
fn test_precedence_multiplication_binds_tighter() {
    let program = parse_source("int x = 1 + 2 * 3;");

    let Decl::Variable(var) = &program.decls[0] else {
        panic!("expected a variable");
    };
    let Some(Expr::Binary { op, right, .. }) = &var.initializer else {
        panic!("expected a binary initializer");
    };
    assert_eq!(*op, BinaryOp::Plus);
    assert!(matches!(
        right.as_ref(),
        Expr::Binary {
            op: BinaryOp::Multiply,
            ..
        }
    ));
}

#[test]
fn test_comparison_binds_looser_than_additive() {
    let program = parse_source("bool b = 1 + 2 < 4;");

    let Decl::Variable(var) = &program.decls[0] else {
        panic!("expected a variable");
    };
    let Some(Expr::Binary { op, .. }) = &var.initializer else {
        panic!("expected a binary initializer");
    };
    assert_eq!(*op, BinaryOp::Less);
}

#[test]
fn test_assignment_is_right_associative() {
    let program = parse_source("void f() { a = b = 1; }");

    let Decl::Function(func) = &program.decls[0] else {
        panic!("expected a function");
    };
    let Stmt::Expr(Expr::Assign { value, .. }) = &func.body.stmts[0] else {
        panic!("expected an assignment");
    };
    assert!(matches!(value.as_ref(), Expr::Assign { .. }));
}

#[test]
fn test_unary_operators_nest() {
    let program = parse_source("int x = - - 5;");

    let Decl::Variable(var) = &program.decls[0] else {
        panic!("expected a variable");
    };
    let Some(Expr::Unary {
        op: UnaryOp::Negate,
        operand,
        ..
    }) = &var.initializer
    else {
        panic!("expected a unary initializer");
    };
    assert!(matches!(
        operand.as_ref(),
        Expr::Unary {
            op: UnaryOp::Negate,
            ..
        }
    ));
}

#[test]
fn test_parse_call_with_args() {
    let program = parse_source("void f() { g(1, 2 + 3); }");

    let Decl::Function(func) = &program.decls[0] else {
        panic!("expected a function");
    };
    let Stmt::Expr(Expr::Call { name, args, .. }) = &func.body.stmts[0] else {
        panic!("expected a call statement");
    };
    assert_eq!(name, "g");
    assert_eq!(args.len(), 2);
}

#[test]
fn test_call_binds_return_type_from_signature() {
    let program = parse_source("int twice(int n) { return twice(n); }\nvoid f() { g(); }");

    let Decl::Function(func) = &program.decls[0] else {
        panic!("expected a function");
    };
    let Stmt::Return {
        value: Some(recursive),
        ..
    } = &func.body.stmts[0]
    else {
        panic!("expected a return");
    };
    // The signature is registered before the body, so the
    // recursive call resolves its own return type.
    assert_eq!(recursive.get_type(), TypeKind::Int);

    let Decl::Function(func) = &program.decls[1] else {
        panic!("expected a function");
    };
    let Stmt::Expr(unknown) = &func.body.stmts[0] else {
        panic!("expected an expression statement");
    };
    assert_eq!(unknown.get_type(), TypeKind::Error);
}

#[test]
fn test_parse_null_literal() {
    let program = parse_source("string s = null;");

    let Decl::Variable(var) = &program.decls[0] else {
        panic!("expected a variable");
    };
    assert!(matches!(var.initializer, Some(Expr::NullLiteral { .. })));
}

#[test]
fn test_parse_control_flow_statements() {
    let program = parse_source(
        "void f() {\n  if (true) Print(\"a\"); else Print(\"b\");\n  while (false) break;\n  for (i = 0; i < 10; i = i + 1) Print(i);\n  return;\n}",
    );

    let Decl::Function(func) = &program.decls[0] else {
        panic!("expected a function");
    };
    assert!(matches!(func.body.stmts[0], Stmt::If { .. }));
    assert!(matches!(func.body.stmts[1], Stmt::While { .. }));
    assert!(matches!(func.body.stmts[2], Stmt::For { .. }));
    assert!(matches!(func.body.stmts[3], Stmt::Return { .. }));
}

#[test]
fn test_for_clauses_may_all_be_empty() {
    let program = parse_source("void main() { for (;;) break; }");

    let Decl::Function(func) = &program.decls[0] else {
        panic!("expected a function");
    };
    let Stmt::For {
        init,
        condition,
        step,
        ..
    } = &func.body.stmts[0]
    else {
        panic!("expected a for statement");
    };
    assert!(init.is_none());
    assert!(condition.is_none());
    assert!(step.is_none());
}

#[test]
fn test_for_with_condition_only() {
    let program = parse_source("void main() { for (; true ;) break; }");

    let Decl::Function(func) = &program.decls[0] else {
        panic!("expected a function");
    };
    let Stmt::For {
        init, condition, ..
    } = &func.body.stmts[0]
    else {
        panic!("expected a for statement");
    };
    assert!(init.is_none());
    assert!(matches!(condition, Some(Expr::BoolLiteral { .. })));
}

#[test]
fn test_parse_read_builtins() {
    let program = parse_source("void f() { x = ReadInteger(); s = ReadLine(); }");

    let Decl::Function(func) = &program.decls[0] else {
        panic!("expected a function");
    };
    let Stmt::Expr(Expr::Assign { value, .. }) = &func.body.stmts[0] else {
        panic!("expected an assignment");
    };
    assert!(matches!(value.as_ref(), Expr::ReadInteger { .. }));
}

#[test]
fn test_var_reference_resolves_parse_time_type() {
    let program = parse_source("int x; int y = x;");

    let Decl::Variable(var) = &program.decls[1] else {
        panic!("expected a variable");
    };
    let Some(Expr::Var { resolved_type, .. }) = &var.initializer else {
        panic!("expected a variable reference");
    };
    assert_eq!(*resolved_type, TypeKind::Int);
}

#[test]
fn test_unresolved_reference_gets_error_type() {
    let program = parse_source("int y = ghost;");

    let Decl::Variable(var) = &program.decls[0] else {
        panic!("expected a variable");
    };
    let Some(Expr::Var { resolved_type, .. }) = &var.initializer else {
        panic!("expected a variable reference");
    };
    assert_eq!(*resolved_type, TypeKind::Error);
}

#[test]
fn test_formals_visible_in_body() {
    let program = parse_source("double f(double d) { return d; }");

    let Decl::Function(func) = &program.decls[0] else {
        panic!("expected a function");
    };
    let Stmt::Return {
        value: Some(Expr::Var { resolved_type, .. }),
        ..
    } = &func.body.stmts[0]
    else {
        panic!("expected a return of a variable");
    };
    assert_eq!(*resolved_type, TypeKind::Double);
}

#[test]
fn test_fatal_syntax_error_aborts_parse() {
    let (program, diagnostics) = parse(tokenize("int x = ;"));

    assert!(program.is_none());
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].message(), "syntax error");
    assert_eq!(diagnostics[0].position().line, 1);
    assert_eq!(diagnostics[0].position().column, 9);
}

#[test]
fn test_recoverable_junk_is_skipped_silently() {
    // A stray statement at top level is not a declaration; the loop
    // skips it token by token and finds the next declaration.
    let (program, diagnostics) = parse(tokenize("f ; int x;"));

    assert!(diagnostics.is_empty());
    let program = program.expect("expected a program");
    assert_eq!(program.decls.len(), 1);
    assert_eq!(program.decls[0].name(), "x");
}

#[test]
fn test_lexical_defect_surfaces_as_diagnostic() {
    // The unknown token reports its defect and then behaves like
    // end-of-input, so the surrounding declaration fails fatally.
    let (program, diagnostics) = parse(tokenize("int x = 1 @ ;"));

    assert!(program.is_none());
    assert_eq!(diagnostics.len(), 2);
    assert_eq!(diagnostics[0].message(), "Unrecognized char: '@'");
    assert_eq!(diagnostics[1].message(), "syntax error");
    assert_eq!(diagnostics[1].position().column, 11);
}

#[test]
fn test_unknown_token_at_top_level_is_skipped_by_recovery() {
    let (program, diagnostics) = parse(tokenize("@\nint x;"));

    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].message(), "Unrecognized char: '@'");
    assert_eq!(program.expect("expected a program").decls.len(), 1);
}

#[test]
fn test_call_on_non_identifier_reports() {
    let (program, diagnostics) = parse(tokenize("int x = (1 + 2)(3);"));

    assert!(program.is_some());
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(
        diagnostics[0].message(),
        "Cannot call a non-function expression"
    );
}

#[test]
fn test_scope_stack_lookup_walks_outward() {
    let mut scopes = ScopeStack::new();
    scopes.push_frame();
    scopes.declare("x", TypeKind::Int);
    scopes.push_frame();
    scopes.declare("x", TypeKind::Double);

    assert_eq!(scopes.lookup("x"), TypeKind::Double);
    scopes.pop_frame();
    assert_eq!(scopes.lookup("x"), TypeKind::Int);
    assert_eq!(scopes.lookup("missing"), TypeKind::Error);
    assert_eq!(scopes.depth(), 1);
}
