use std::collections::HashMap;

use crate::ast::types::TypeKind;
use crate::errors::errors::{Diagnostic, ErrorKind};
use crate::Position;

/// Level holding program-wide declarations.
pub const GLOBAL_LEVEL: usize = 1;
/// Level holding the formals and locals of the function currently
/// being checked. The language has no deeper nesting of lifetimes,
/// so blocks inside a function share this level.
pub const FUNCTION_LEVEL: usize = 2;

#[derive(Debug, Clone, PartialEq)]
pub struct VariableSymbol {
    pub var_type: TypeKind,
    pub position: Position,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionSymbol {
    pub return_type: TypeKind,
    pub param_types: Vec<TypeKind>,
    pub position: Position,
}

/// Two-level table with separate namespaces for variables and
/// functions. Functions only exist at the global level.
#[derive(Debug, Default)]
pub struct SymbolTable {
    variables: [HashMap<String, VariableSymbol>; 2],
    functions: HashMap<String, FunctionSymbol>,
}

impl SymbolTable {
    pub fn new() -> Self {
        SymbolTable::default()
    }

    /// Installs a variable at the given level. Fails when the name is
    /// already taken at that level; outer levels never conflict.
    pub fn install_variable(
        &mut self,
        level: usize,
        name: &str,
        symbol: VariableSymbol,
    ) -> Result<(), Diagnostic> {
        let scope = &mut self.variables[level - 1];
        if scope.contains_key(name) {
            return Err(Diagnostic::new(
                ErrorKind::DuplicateDeclaration {
                    name: name.to_string(),
                },
                symbol.position,
            ));
        }
        scope.insert(name.to_string(), symbol);
        Ok(())
    }

    pub fn install_function(
        &mut self,
        name: &str,
        symbol: FunctionSymbol,
    ) -> Result<(), Diagnostic> {
        if self.functions.contains_key(name) {
            return Err(Diagnostic::new(
                ErrorKind::DuplicateDeclaration {
                    name: name.to_string(),
                },
                symbol.position,
            ));
        }
        self.functions.insert(name.to_string(), symbol);
        Ok(())
    }

    /// Resolves a variable name, innermost level first.
    pub fn lookup_variable(&self, name: &str) -> Option<&VariableSymbol> {
        self.variables[FUNCTION_LEVEL - 1]
            .get(name)
            .or_else(|| self.variables[GLOBAL_LEVEL - 1].get(name))
    }

    pub fn lookup_function(&self, name: &str) -> Option<&FunctionSymbol> {
        self.functions.get(name)
    }

    /// Drops every function-level variable. Called between functions
    /// so formals and locals never leak into the next body.
    pub fn clear_function_level(&mut self) {
        self.variables[FUNCTION_LEVEL - 1].clear();
    }
}
