//! Unit tests for the symbol table.

use super::table::{FunctionSymbol, SymbolTable, VariableSymbol, FUNCTION_LEVEL, GLOBAL_LEVEL};
use crate::ast::types::TypeKind;
use crate::Position;

fn var(var_type: TypeKind) -> VariableSymbol {
    VariableSymbol {
        var_type,
        position: Position::default(),
    }
}

#[test]
fn test_install_and_lookup_variable() {
    let mut table = SymbolTable::new();
    table
        .install_variable(GLOBAL_LEVEL, "x", var(TypeKind::Int))
        .unwrap();

    let symbol = table.lookup_variable("x").unwrap();
    assert_eq!(symbol.var_type, TypeKind::Int);
    assert!(table.lookup_variable("y").is_none());
}

#[test]
fn test_duplicate_at_same_level_fails() {
    let mut table = SymbolTable::new();
    table
        .install_variable(GLOBAL_LEVEL, "x", var(TypeKind::Int))
        .unwrap();

    let err = table
        .install_variable(GLOBAL_LEVEL, "x", var(TypeKind::Double))
        .unwrap_err();
    assert_eq!(err.message(), "Duplicate declaration of 'x'");
}

#[test]
fn test_function_level_shadows_global() {
    let mut table = SymbolTable::new();
    table
        .install_variable(GLOBAL_LEVEL, "x", var(TypeKind::Int))
        .unwrap();
    table
        .install_variable(FUNCTION_LEVEL, "x", var(TypeKind::Double))
        .unwrap();

    assert_eq!(table.lookup_variable("x").unwrap().var_type, TypeKind::Double);

    table.clear_function_level();
    assert_eq!(table.lookup_variable("x").unwrap().var_type, TypeKind::Int);
}

#[test]
fn test_clear_function_level_keeps_globals() {
    let mut table = SymbolTable::new();
    table
        .install_variable(GLOBAL_LEVEL, "g", var(TypeKind::Bool))
        .unwrap();
    table
        .install_variable(FUNCTION_LEVEL, "local", var(TypeKind::Int))
        .unwrap();

    table.clear_function_level();
    assert!(table.lookup_variable("local").is_none());
    assert!(table.lookup_variable("g").is_some());
}

#[test]
fn test_functions_are_a_separate_namespace() {
    let mut table = SymbolTable::new();
    table
        .install_variable(GLOBAL_LEVEL, "f", var(TypeKind::Int))
        .unwrap();
    table
        .install_function(
            "f",
            FunctionSymbol {
                return_type: TypeKind::Void,
                param_types: vec![TypeKind::Int],
                position: Position::default(),
            },
        )
        .unwrap();

    assert_eq!(table.lookup_variable("f").unwrap().var_type, TypeKind::Int);
    assert_eq!(
        table.lookup_function("f").unwrap().return_type,
        TypeKind::Void
    );
}

#[test]
fn test_duplicate_function_fails() {
    let mut table = SymbolTable::new();
    let symbol = FunctionSymbol {
        return_type: TypeKind::Int,
        param_types: vec![],
        position: Position::default(),
    };
    table.install_function("main", symbol.clone()).unwrap();
    assert!(table.install_function("main", symbol).is_err());
}
