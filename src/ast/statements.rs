use crate::ast::expressions::Expr;
use crate::ast::types::TypeKind;
use crate::Position;

#[derive(Debug, Clone, PartialEq)]
pub struct VarDecl {
    pub name: String,
    pub declared_type: TypeKind,
    pub initializer: Option<Expr>,
    pub position: Position,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDecl {
    pub name: String,
    pub return_type: TypeKind,
    pub params: Vec<VarDecl>,
    pub body: BlockStmt,
    pub position: Position,
}

/// A top level declaration. The language has no nesting of functions,
/// so the program is a flat list of these.
#[derive(Debug, Clone, PartialEq)]
pub enum Decl {
    Variable(VarDecl),
    Function(FunctionDecl),
}

impl Decl {
    pub fn name(&self) -> &str {
        match self {
            Decl::Variable(var) => &var.name,
            Decl::Function(func) => &func.name,
        }
    }

    pub fn position(&self) -> Position {
        match self {
            Decl::Variable(var) => var.position,
            Decl::Function(func) => func.position,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BlockStmt {
    pub stmts: Vec<Stmt>,
    pub position: Position,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Expr(Expr),
    Block(BlockStmt),
    VarDecl(VarDecl),
    If {
        condition: Expr,
        then_branch: Box<Stmt>,
        else_branch: Option<Box<Stmt>>,
        position: Position,
    },
    While {
        condition: Expr,
        body: Box<Stmt>,
        position: Position,
    },
    For {
        init: Option<Expr>,
        condition: Option<Expr>,
        step: Option<Expr>,
        body: Box<Stmt>,
        position: Position,
    },
    Return {
        value: Option<Expr>,
        position: Position,
    },
    Break {
        position: Position,
    },
    Print {
        args: Vec<Expr>,
        position: Position,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub decls: Vec<Decl>,
    pub position: Position,
}

impl Program {
    pub fn dump(&self) -> String {
        let mut out = String::from("Program:\n");
        for decl in &self.decls {
            out.push_str(&decl.dump(1));
        }
        out
    }
}

impl Decl {
    pub fn dump(&self, indent: usize) -> String {
        let pad = "  ".repeat(indent);
        match self {
            Decl::Variable(var) => {
                let mut out = format!("{pad}VarDecl: {} {}\n", var.declared_type, var.name);
                if let Some(init) = &var.initializer {
                    out.push_str(&init.dump(indent + 1));
                }
                out
            }
            Decl::Function(func) => {
                let mut out = format!("{pad}FnDecl: {} {}\n", func.return_type, func.name);
                for param in &func.params {
                    out.push_str(&format!(
                        "{pad}  Formal: {} {}\n",
                        param.declared_type, param.name
                    ));
                }
                out.push_str(&Stmt::Block(func.body.clone()).dump(indent + 1));
                out
            }
        }
    }
}

impl Stmt {
    pub fn dump(&self, indent: usize) -> String {
        let pad = "  ".repeat(indent);
        match self {
            Stmt::Expr(expr) => expr.dump(indent),
            Stmt::Block(block) => {
                let mut out = format!("{pad}StmtBlock:\n");
                for stmt in &block.stmts {
                    out.push_str(&stmt.dump(indent + 1));
                }
                out
            }
            Stmt::VarDecl(var) => {
                let mut out = format!("{pad}VarDecl: {} {}\n", var.declared_type, var.name);
                if let Some(init) = &var.initializer {
                    out.push_str(&init.dump(indent + 1));
                }
                out
            }
            Stmt::If {
                condition,
                then_branch,
                else_branch,
                ..
            } => {
                let mut out = format!("{pad}IfStmt:\n");
                out.push_str(&condition.dump(indent + 1));
                out.push_str(&then_branch.dump(indent + 1));
                if let Some(else_branch) = else_branch {
                    out.push_str(&else_branch.dump(indent + 1));
                }
                out
            }
            Stmt::While {
                condition, body, ..
            } => {
                let mut out = format!("{pad}WhileStmt:\n");
                out.push_str(&condition.dump(indent + 1));
                out.push_str(&body.dump(indent + 1));
                out
            }
            Stmt::For {
                init,
                condition,
                step,
                body,
                ..
            } => {
                let mut out = format!("{pad}ForStmt:\n");
                if let Some(init) = init {
                    out.push_str(&init.dump(indent + 1));
                }
                if let Some(condition) = condition {
                    out.push_str(&condition.dump(indent + 1));
                }
                if let Some(step) = step {
                    out.push_str(&step.dump(indent + 1));
                }
                out.push_str(&body.dump(indent + 1));
                out
            }
            Stmt::Return { value, .. } => {
                let mut out = format!("{pad}ReturnStmt:\n");
                if let Some(value) = value {
                    out.push_str(&value.dump(indent + 1));
                }
                out
            }
            Stmt::Break { .. } => format!("{pad}BreakStmt\n"),
            Stmt::Print { args, .. } => {
                let mut out = format!("{pad}PrintStmt:\n");
                for arg in args {
                    out.push_str(&arg.dump(indent + 1));
                }
                out
            }
        }
    }
}
