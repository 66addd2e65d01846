//! Unit tests for the semantic checker.

use crate::errors::errors::Diagnostic;
use crate::lexer::lexer::tokenize;
use crate::parser::parser::parse;

use super::checker::check;

fn check_source(source: &str) -> Vec<Diagnostic> {
    let (program, diagnostics) = parse(tokenize(source));
    assert!(diagnostics.is_empty(), "unexpected parse diagnostics: {diagnostics:?}");
    check(&program.expect("expected a program"))
}

fn messages(source: &str) -> Vec<String> {
    check_source(source).iter().map(|d| d.message()).collect()
}

#[test]
fn test_well_typed_program_is_clean() {
    let diagnostics = check_source(
        "int counter;\nint next() { counter = counter + 1; return counter; }\nvoid main() { Print(next()); }",
    );
    assert!(diagnostics.is_empty());
}

#[test]
fn test_undeclared_identifier() {
    assert_eq!(
        messages("void f() { x = 1; }"),
        vec!["No declaration found for 'x'"]
    );
}

#[test]
fn test_duplicate_global() {
    assert_eq!(
        messages("int x; double x;"),
        vec!["Duplicate declaration of 'x'"]
    );
}

#[test]
fn test_local_duplicates_formal() {
    assert_eq!(
        messages("void f(int a) { int a; }"),
        vec!["Duplicate declaration of 'a'"]
    );
}

#[test]
fn test_nested_block_shares_function_level() {
    // Blocks do not open a fresh level, so the inner declaration
    // collides with the outer local.
    assert_eq!(
        messages("void f() { int a; { int a; } }"),
        vec!["Duplicate declaration of 'a'"]
    );
}

#[test]
fn test_locals_cleared_between_functions() {
    assert!(messages("void f() { int a; }\nvoid g() { int a; }").is_empty());
}

#[test]
fn test_local_may_shadow_global() {
    assert!(messages("int a;\nvoid f() { double a; a = 1.5; }").is_empty());
}

#[test]
fn test_arithmetic_promotes_to_double() {
    assert!(messages("double d;\nvoid f() { d = 1 + 2.5; }").is_empty());
}

#[test]
fn test_bool_plus_int_is_incompatible() {
    assert_eq!(
        messages("void f() { Print(true + 1); }"),
        vec!["Incompatible operands: bool + int"]
    );
}

#[test]
fn test_int_minus_double_is_rejected() {
    assert_eq!(
        messages("void f() { Print(1 - 2.5); }"),
        vec!["Incompatible operands: int - double"]
    );
}

#[test]
fn test_double_minus_int_promotes() {
    assert!(messages("void f() { Print(2.5 - 1); }").is_empty());
}

#[test]
fn test_double_divided_by_int_is_rejected() {
    assert_eq!(
        messages("void f() { Print(2.5 / 1); }"),
        vec!["Incompatible operands: double / int"]
    );
}

#[test]
fn test_int_divided_by_double_promotes() {
    assert!(messages("void f() { Print(1 / 2.5); }").is_empty());
}

#[test]
fn test_relational_requires_numeric() {
    assert_eq!(
        messages("void f() { Print(true < false); }"),
        vec!["Incompatible operands: bool < bool"]
    );
}

#[test]
fn test_equality_requires_assignable_operands() {
    assert!(messages("void f() { Print(1 == 2.0); }").is_empty());
    assert_eq!(
        messages("void f() { Print(\"a\" == 1); }"),
        vec!["Incompatible operands: string == int"]
    );
}

#[test]
fn test_null_compares_with_anything() {
    assert!(messages("string s;\nvoid f() { Print(s == null); }").is_empty());
}

#[test]
fn test_logical_requires_bool() {
    assert_eq!(
        messages("void f() { Print(1 && true); }"),
        vec!["Incompatible operands: int && bool"]
    );
}

#[test]
fn test_unary_negate_requires_numeric() {
    assert_eq!(
        messages("void f() { Print(-true); }"),
        vec!["Incompatible operand: - bool"]
    );
}

#[test]
fn test_unary_not_requires_bool() {
    assert_eq!(
        messages("void f() { Print(!3); }"),
        vec!["Incompatible operand: ! int"]
    );
}

#[test]
fn test_assignment_type_mismatch() {
    assert_eq!(
        messages("int x;\nvoid f() { x = \"text\"; }"),
        vec!["Incompatible operands: int = string"]
    );
}

#[test]
fn test_initializer_type_mismatch() {
    assert_eq!(
        messages("bool b = 3;"),
        vec!["Incompatible operands: bool = int"]
    );
}

#[test]
fn test_error_poisons_without_cascading() {
    // One defect, one report: the undeclared name poisons every
    // enclosing expression silently.
    assert_eq!(
        messages("int x;\nvoid f() { x = ghost + 1 * 2; }"),
        vec!["No declaration found for 'ghost'"]
    );
}

#[test]
fn test_call_resolves_return_type() {
    assert_eq!(
        messages("int f() { return 1; }\nvoid g() { bool b; b = f(); }"),
        vec!["Incompatible operands: bool = int"]
    );
}

#[test]
fn test_recursive_call_resolves() {
    assert!(messages("int fact(int n) { return n * fact(n - 1); }").is_empty());
}

#[test]
fn test_call_arguments_are_not_matched() {
    // Arity and argument types are not checked at call sites; only
    // the arguments themselves are type checked.
    assert!(messages("int f(int a) { return a; }\nvoid g() { Print(f(1, 2, true)); }").is_empty());
}

#[test]
fn test_unknown_callee_poisons_silently() {
    assert!(messages("void f() { Print(mystery()); }").is_empty());
}

#[test]
fn test_duplicate_still_checks_body() {
    let msgs = messages("void f() { }\nvoid f() { x = 1; }");
    assert_eq!(
        msgs,
        vec![
            "Duplicate declaration of 'f'".to_string(),
            "No declaration found for 'x'".to_string(),
        ]
    );
}

#[test]
fn test_for_with_empty_clauses_checks_clean() {
    assert!(messages("void main() { for (;;) break; }").is_empty());
}

#[test]
fn test_for_step_is_still_checked() {
    assert_eq!(
        messages("void main() { for (;; missing = 1) break; }"),
        vec!["No declaration found for 'missing'"]
    );
}

#[test]
fn test_checking_is_idempotent() {
    let (program, _) = parse(tokenize("int x;\nvoid f() { x = ghost; int x; }"));
    let program = program.expect("expected a program");

    let first = check(&program);
    let second = check(&program);
    assert_eq!(first, second);
    assert!(!first.is_empty());
}

#[test]
fn test_diagnostic_positions_point_at_defect() {
    let diagnostics = check_source("void f() {\n  Print(true + 1);\n}");
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].position().line, 2);
    assert_eq!(diagnostics[0].position().column, 9);
}
