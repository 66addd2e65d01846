use crate::ast::types::TypeKind;
use crate::Position;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Plus,
    Minus,
    Multiply,
    Divide,
    Modulo,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
    Equal,
    NotEqual,
    And,
    Or,
}

impl BinaryOp {
    pub fn from_symbol(symbol: &str) -> Option<BinaryOp> {
        match symbol {
            "+" => Some(BinaryOp::Plus),
            "-" => Some(BinaryOp::Minus),
            "*" => Some(BinaryOp::Multiply),
            "/" => Some(BinaryOp::Divide),
            "%" => Some(BinaryOp::Modulo),
            "<" => Some(BinaryOp::Less),
            "<=" => Some(BinaryOp::LessEqual),
            ">" => Some(BinaryOp::Greater),
            ">=" => Some(BinaryOp::GreaterEqual),
            "==" => Some(BinaryOp::Equal),
            "!=" => Some(BinaryOp::NotEqual),
            "&&" => Some(BinaryOp::And),
            "||" => Some(BinaryOp::Or),
            _ => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            BinaryOp::Plus => "+",
            BinaryOp::Minus => "-",
            BinaryOp::Multiply => "*",
            BinaryOp::Divide => "/",
            BinaryOp::Modulo => "%",
            BinaryOp::Less => "<",
            BinaryOp::LessEqual => "<=",
            BinaryOp::Greater => ">",
            BinaryOp::GreaterEqual => ">=",
            BinaryOp::Equal => "==",
            BinaryOp::NotEqual => "!=",
            BinaryOp::And => "&&",
            BinaryOp::Or => "||",
        }
    }

    pub fn is_arithmetic(&self) -> bool {
        matches!(
            self,
            BinaryOp::Plus
                | BinaryOp::Minus
                | BinaryOp::Multiply
                | BinaryOp::Divide
                | BinaryOp::Modulo
        )
    }

    pub fn is_relational(&self) -> bool {
        matches!(
            self,
            BinaryOp::Less | BinaryOp::LessEqual | BinaryOp::Greater | BinaryOp::GreaterEqual
        )
    }

    pub fn is_equality(&self) -> bool {
        matches!(self, BinaryOp::Equal | BinaryOp::NotEqual)
    }

    pub fn is_logical(&self) -> bool {
        matches!(self, BinaryOp::And | BinaryOp::Or)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Negate,
    Not,
}

impl UnaryOp {
    pub fn symbol(&self) -> &'static str {
        match self {
            UnaryOp::Negate => "-",
            UnaryOp::Not => "!",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    IntLiteral {
        value: i64,
        position: Position,
    },
    DoubleLiteral {
        value: f64,
        position: Position,
    },
    BoolLiteral {
        value: bool,
        position: Position,
    },
    StringLiteral {
        value: String,
        position: Position,
    },
    NullLiteral {
        position: Position,
    },
    Var {
        name: String,
        position: Position,
        /// Declared type found by the parser's scope stack, or
        /// `Error` when no declaration was in sight at parse time.
        resolved_type: TypeKind,
    },
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
        position: Position,
    },
    Unary {
        op: UnaryOp,
        operand: Box<Expr>,
        position: Position,
    },
    Assign {
        target: Box<Expr>,
        value: Box<Expr>,
        position: Position,
    },
    Call {
        name: String,
        args: Vec<Expr>,
        position: Position,
        /// Return type of the callee as known at parse time, or
        /// `Error` when no signature had been seen yet.
        resolved_return_type: TypeKind,
    },
    ReadInteger {
        position: Position,
    },
    ReadLine {
        position: Position,
    },
}

impl Expr {
    pub fn position(&self) -> Position {
        match self {
            Expr::IntLiteral { position, .. }
            | Expr::DoubleLiteral { position, .. }
            | Expr::BoolLiteral { position, .. }
            | Expr::StringLiteral { position, .. }
            | Expr::NullLiteral { position }
            | Expr::Var { position, .. }
            | Expr::Binary { position, .. }
            | Expr::Unary { position, .. }
            | Expr::Assign { position, .. }
            | Expr::Call { position, .. }
            | Expr::ReadInteger { position }
            | Expr::ReadLine { position } => *position,
        }
    }

    /// Structural type of the expression, derived top-down from the
    /// types bound while parsing. An `Error` operand anywhere
    /// poisons the result. This is a shape query only; the checker
    /// applies the operand rules and reports the defects.
    pub fn get_type(&self) -> TypeKind {
        match self {
            Expr::IntLiteral { .. } => TypeKind::Int,
            Expr::DoubleLiteral { .. } => TypeKind::Double,
            Expr::BoolLiteral { .. } => TypeKind::Bool,
            Expr::StringLiteral { .. } => TypeKind::String,
            Expr::NullLiteral { .. } => TypeKind::Null,
            Expr::Var { resolved_type, .. } => *resolved_type,
            Expr::Call {
                resolved_return_type,
                ..
            } => *resolved_return_type,
            Expr::ReadInteger { .. } => TypeKind::Int,
            Expr::ReadLine { .. } => TypeKind::String,
            Expr::Unary { op, operand, .. } => {
                let operand_type = operand.get_type();
                if operand_type.is_error() {
                    return TypeKind::Error;
                }
                match op {
                    UnaryOp::Negate if operand_type.is_numeric() => operand_type,
                    UnaryOp::Not if operand_type == TypeKind::Bool => TypeKind::Bool,
                    _ => TypeKind::Error,
                }
            }
            Expr::Binary {
                op, left, right, ..
            } => {
                let left_type = left.get_type();
                let right_type = right.get_type();
                if left_type.is_error() || right_type.is_error() {
                    return TypeKind::Error;
                }
                if op.is_arithmetic() {
                    if !left_type.is_numeric() || !right_type.is_numeric() {
                        TypeKind::Error
                    } else if left_type == TypeKind::Double || right_type == TypeKind::Double {
                        TypeKind::Double
                    } else {
                        TypeKind::Int
                    }
                } else {
                    TypeKind::Bool
                }
            }
            Expr::Assign { target, value, .. } => {
                let target_type = target.get_type();
                if target_type.is_error() || value.get_type().is_error() {
                    return TypeKind::Error;
                }
                target_type
            }
        }
    }

    /// Writes an indented rendition of the expression tree.
    pub fn dump(&self, indent: usize) -> String {
        let pad = "  ".repeat(indent);
        match self {
            Expr::IntLiteral { value, .. } => format!("{pad}IntConstant: {value}\n"),
            Expr::DoubleLiteral { value, .. } => format!("{pad}DoubleConstant: {value}\n"),
            Expr::BoolLiteral { value, .. } => format!("{pad}BoolConstant: {value}\n"),
            Expr::StringLiteral { value, .. } => format!("{pad}StringConstant: \"{value}\"\n"),
            Expr::NullLiteral { .. } => format!("{pad}NullConstant\n"),
            Expr::Var { name, .. } => format!("{pad}FieldAccess: {name}\n"),
            Expr::Binary { op, left, right, .. } => {
                let mut out = format!("{pad}BinaryExpr: {}\n", op.symbol());
                out.push_str(&left.dump(indent + 1));
                out.push_str(&right.dump(indent + 1));
                out
            }
            Expr::Unary { op, operand, .. } => {
                let mut out = format!("{pad}UnaryExpr: {}\n", op.symbol());
                out.push_str(&operand.dump(indent + 1));
                out
            }
            Expr::Assign { target, value, .. } => {
                let mut out = format!("{pad}AssignExpr:\n");
                out.push_str(&target.dump(indent + 1));
                out.push_str(&value.dump(indent + 1));
                out
            }
            Expr::Call { name, args, .. } => {
                let mut out = format!("{pad}Call: {name}\n");
                for arg in args {
                    out.push_str(&arg.dump(indent + 1));
                }
                out
            }
            Expr::ReadInteger { .. } => format!("{pad}ReadIntegerExpr\n"),
            Expr::ReadLine { .. } => format!("{pad}ReadLineExpr\n"),
        }
    }
}
