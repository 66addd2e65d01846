//! Type and scope checking over a parsed program.
//!
//! The checker walks declarations in source order, building its own
//! two-level symbol table independently of the scopes the parser
//! tracked. Globals live at [`GLOBAL_LEVEL`]; when a function is
//! entered its formals and every local of the body, nested blocks
//! included, are installed flat at [`FUNCTION_LEVEL`], which is
//! wiped before the next function.
//!
//! Defect suppression follows the poison rule: an expression that
//! already produced a diagnostic has type `Error`, and every rule
//! treats an `Error` operand as silently acceptable so one defect
//! never cascades into a chain of reports.

use crate::{
    ast::expressions::{BinaryOp, Expr, UnaryOp},
    ast::statements::{Decl, FunctionDecl, Program, Stmt, VarDecl},
    ast::types::TypeKind,
    errors::errors::{Diagnostic, ErrorKind},
    symbols::table::{
        FunctionSymbol, SymbolTable, VariableSymbol, FUNCTION_LEVEL, GLOBAL_LEVEL,
    },
    Position,
};

struct Checker {
    table: SymbolTable,
    diagnostics: Vec<Diagnostic>,
}

/// Checks a program and returns its semantic diagnostics in source
/// order. An empty vector means the program is well typed.
pub fn check(program: &Program) -> Vec<Diagnostic> {
    let mut checker = Checker {
        table: SymbolTable::new(),
        diagnostics: Vec::new(),
    };
    for decl in &program.decls {
        match decl {
            Decl::Variable(var) => checker.check_global_var(var),
            Decl::Function(func) => checker.check_function(func),
        }
    }
    checker.diagnostics
}

impl Checker {
    fn report(&mut self, kind: ErrorKind, position: Position) {
        self.diagnostics.push(Diagnostic::new(kind, position));
    }

    fn check_global_var(&mut self, var: &VarDecl) {
        self.install_var(GLOBAL_LEVEL, var);
        self.check_initializer(var);
    }

    fn install_var(&mut self, level: usize, var: &VarDecl) {
        let symbol = VariableSymbol {
            var_type: var.declared_type,
            position: var.position,
        };
        if let Err(diagnostic) = self.table.install_variable(level, &var.name, symbol) {
            self.diagnostics.push(diagnostic);
        }
    }

    /// An initializer is checked like an assignment to the freshly
    /// installed name.
    fn check_initializer(&mut self, var: &VarDecl) {
        let Some(init) = &var.initializer else {
            return;
        };
        let init_type = self.check_expr(init);
        if init_type.is_error() {
            return;
        }
        if !init_type.is_assignable_to(var.declared_type) {
            self.report(
                ErrorKind::IncompatibleOperands {
                    left: var.declared_type.to_string(),
                    op: "=".to_string(),
                    right: init_type.to_string(),
                },
                var.position,
            );
        }
    }

    /// The signature is installed before the body is checked, so a
    /// recursive call inside the body resolves.
    fn check_function(&mut self, func: &FunctionDecl) {
        let symbol = FunctionSymbol {
            return_type: func.return_type,
            param_types: func.params.iter().map(|p| p.declared_type).collect(),
            position: func.position,
        };
        if let Err(diagnostic) = self.table.install_function(&func.name, symbol) {
            self.diagnostics.push(diagnostic);
        }

        self.table.clear_function_level();
        for param in &func.params {
            self.install_var(FUNCTION_LEVEL, param);
        }
        for stmt in &func.body.stmts {
            self.check_stmt(stmt);
        }
        self.table.clear_function_level();
    }

    fn check_stmt(&mut self, stmt: &Stmt) {
        match stmt {
            Stmt::Expr(expr) => {
                self.check_expr(expr);
            }
            // Blocks share the function level, so a block-local name
            // conflicts with a formal or an earlier local.
            Stmt::Block(block) => {
                for stmt in &block.stmts {
                    self.check_stmt(stmt);
                }
            }
            Stmt::VarDecl(var) => {
                self.install_var(FUNCTION_LEVEL, var);
                self.check_initializer(var);
            }
            Stmt::If {
                condition,
                then_branch,
                else_branch,
                ..
            } => {
                self.check_expr(condition);
                self.check_stmt(then_branch);
                if let Some(else_branch) = else_branch {
                    self.check_stmt(else_branch);
                }
            }
            Stmt::While {
                condition, body, ..
            } => {
                self.check_expr(condition);
                self.check_stmt(body);
            }
            Stmt::For {
                init,
                condition,
                step,
                body,
                ..
            } => {
                if let Some(init) = init {
                    self.check_expr(init);
                }
                if let Some(condition) = condition {
                    self.check_expr(condition);
                }
                if let Some(step) = step {
                    self.check_expr(step);
                }
                self.check_stmt(body);
            }
            Stmt::Return { value, .. } => {
                if let Some(value) = value {
                    self.check_expr(value);
                }
            }
            Stmt::Break { .. } => {}
            Stmt::Print { args, .. } => {
                for arg in args {
                    self.check_expr(arg);
                }
            }
        }
    }

    fn check_expr(&mut self, expr: &Expr) -> TypeKind {
        match expr {
            Expr::IntLiteral { .. } => TypeKind::Int,
            Expr::DoubleLiteral { .. } => TypeKind::Double,
            Expr::BoolLiteral { .. } => TypeKind::Bool,
            Expr::StringLiteral { .. } => TypeKind::String,
            Expr::NullLiteral { .. } => TypeKind::Null,
            Expr::ReadInteger { .. } => TypeKind::Int,
            Expr::ReadLine { .. } => TypeKind::String,
            Expr::Var { name, position, .. } => match self.table.lookup_variable(name) {
                Some(symbol) => symbol.var_type,
                None => {
                    self.report(
                        ErrorKind::UndeclaredIdentifier { name: name.clone() },
                        *position,
                    );
                    TypeKind::Error
                }
            },
            Expr::Unary {
                op,
                operand,
                position,
            } => self.check_unary(*op, operand, *position),
            Expr::Binary {
                op,
                left,
                right,
                position,
            } => self.check_binary(*op, left, right, *position),
            Expr::Assign {
                target,
                value,
                position,
            } => self.check_assign(target, value, *position),
            // Call sites resolve only the return type; the gap is
            // deliberate, argument lists are not matched against
            // the signature. An unknown callee poisons silently.
            Expr::Call { name, args, .. } => {
                for arg in args {
                    self.check_expr(arg);
                }
                match self.table.lookup_function(name) {
                    Some(symbol) => symbol.return_type,
                    None => TypeKind::Error,
                }
            }
        }
    }

    fn check_unary(&mut self, op: UnaryOp, operand: &Expr, position: Position) -> TypeKind {
        let operand_type = self.check_expr(operand);
        if operand_type.is_error() {
            return TypeKind::Error;
        }
        match op {
            UnaryOp::Negate if operand_type.is_numeric() => operand_type,
            UnaryOp::Not if operand_type == TypeKind::Bool => TypeKind::Bool,
            _ => {
                self.report(
                    ErrorKind::IncompatibleOperand {
                        op: op.symbol().to_string(),
                        operand: operand_type.to_string(),
                    },
                    position,
                );
                TypeKind::Error
            }
        }
    }

    fn check_binary(
        &mut self,
        op: BinaryOp,
        left: &Expr,
        right: &Expr,
        position: Position,
    ) -> TypeKind {
        let left_type = self.check_expr(left);
        let right_type = self.check_expr(right);
        if left_type.is_error() || right_type.is_error() {
            return TypeKind::Error;
        }

        let compatible = if op.is_arithmetic() {
            left_type.is_numeric()
                && right_type.is_numeric()
                && !Self::is_rejected_mixed_pair(op, left_type, right_type)
        } else if op.is_relational() {
            left_type.is_numeric() && right_type.is_numeric()
        } else if op.is_equality() {
            left_type.is_assignable_to(right_type) || right_type.is_assignable_to(left_type)
        } else {
            left_type == TypeKind::Bool && right_type == TypeKind::Bool
        };

        if !compatible {
            self.report(
                ErrorKind::IncompatibleOperands {
                    left: left_type.to_string(),
                    op: op.symbol().to_string(),
                    right: right_type.to_string(),
                },
                position,
            );
            return TypeKind::Error;
        }

        if op.is_arithmetic() {
            if left_type == TypeKind::Double || right_type == TypeKind::Double {
                TypeKind::Double
            } else {
                TypeKind::Int
            }
        } else {
            TypeKind::Bool
        }
    }

    /// Two mixed numeric pairs that promotion does not cover:
    /// `int - double` and `double / int` are rejected outright.
    fn is_rejected_mixed_pair(op: BinaryOp, left: TypeKind, right: TypeKind) -> bool {
        matches!(
            (op, left, right),
            (BinaryOp::Minus, TypeKind::Int, TypeKind::Double)
                | (BinaryOp::Divide, TypeKind::Double, TypeKind::Int)
        )
    }

    fn check_assign(&mut self, target: &Expr, value: &Expr, position: Position) -> TypeKind {
        let target_type = self.check_expr(target);
        let value_type = self.check_expr(value);
        if target_type.is_error() || value_type.is_error() {
            return TypeKind::Error;
        }
        if !value_type.is_assignable_to(target_type) {
            self.report(
                ErrorKind::IncompatibleOperands {
                    left: target_type.to_string(),
                    op: "=".to_string(),
                    right: value_type.to_string(),
                },
                position,
            );
            return TypeKind::Error;
        }
        target_type
    }
}
