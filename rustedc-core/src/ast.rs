use std::fmt::Display;

/// Statement-level nodes. Expressions are statements too: an expression in
/// statement position is wrapped in [`Stmt::Expr`].
#[derive(Debug, PartialEq, Clone)]
pub enum Stmt {
    VarDeclaration(VarDeclaration),
    FunctionDeclaration(FunctionDeclaration),
    StructDeclaration(StructDeclaration),
    If(IfStatement),
    While(WhileLoop),
    Return(ReturnStatement),
    Expr(Expr),
}

#[derive(Debug, PartialEq, Clone)]
pub struct VarDeclaration {
    pub name: String,
    pub constant: bool,
    pub value: Option<Expr>,
}

#[derive(Debug, PartialEq, Clone)]
pub struct FunctionDeclaration {
    pub name: String,
    pub parameters: Vec<String>,
    pub body: Vec<Stmt>,
}

#[derive(Debug, PartialEq, Clone)]
pub struct StructDeclaration {
    pub name: String,
    pub fields: Vec<VarDeclaration>,
}

#[derive(Debug, PartialEq, Clone)]
pub struct IfStatement {
    pub condition: Expr,
    pub then_body: Vec<Stmt>,
    /// Empty when the statement has no `else` arm.
    pub else_body: Vec<Stmt>,
}

#[derive(Debug, PartialEq, Clone)]
pub struct WhileLoop {
    pub condition: Expr,
    pub body: Vec<Stmt>,
}

#[derive(Debug, PartialEq, Clone)]
pub struct ReturnStatement {
    pub value: Option<Expr>,
}

#[derive(Debug, PartialEq, Clone)]
pub enum Expr {
    NumericLiteral(f64),
    StrLiteral(String),
    NullLiteral,
    Identifier(String),
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    Logical {
        op: LogicalOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    Unary {
        op: UnaryOp,
        operand: Box<Expr>,
    },
    Assignment {
        target: Box<Expr>,
        value: Box<Expr>,
    },
    Call {
        callee: Box<Expr>,
        args: Vec<Expr>,
    },
    MemberAccess {
        object: Box<Expr>,
        field: String,
    },
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
    EqualEqual,
    NotEqual,
}

impl BinaryOp {
    pub fn symbol(self) -> &'static str {
        use BinaryOp::*;
        match self {
            Add => "+",
            Subtract => "-",
            Multiply => "*",
            Divide => "/",
            Modulo => "%",
            Less => "<",
            LessEqual => "<=",
            Greater => ">",
            GreaterEqual => ">=",
            EqualEqual => "==",
            NotEqual => "!=",
        }
    }

    pub fn is_comparison(self) -> bool {
        use BinaryOp::*;
        matches!(
            self,
            Less | LessEqual | Greater | GreaterEqual | EqualEqual | NotEqual
        )
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum LogicalOp {
    And,
    Or,
}

impl LogicalOp {
    pub fn symbol(self) -> &'static str {
        match self {
            LogicalOp::And => "&&",
            LogicalOp::Or => "||",
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum UnaryOp {
    Not,
    Negate,
}

impl UnaryOp {
    pub fn symbol(self) -> &'static str {
        match self {
            UnaryOp::Not => "!",
            UnaryOp::Negate => "-",
        }
    }
}

/// Root and sole owner of the tree.
#[derive(Debug, PartialEq)]
pub struct Program {
    pub body: Vec<Stmt>,
}

// The Display impls below produce the canonical source form: parsing the
// printed text again yields the same tree shape. Arithmetic operations are
// fully parenthesized; comparisons and logical operations are printed bare
// because parentheses would route them through the general expression
// grammar, which cannot parse them.

fn write_block(f: &mut std::fmt::Formatter<'_>, statements: &[Stmt]) -> std::fmt::Result {
    writeln!(f, "{{")?;
    for statement in statements {
        writeln!(f, "  {}", statement)?;
    }
    write!(f, "}}")
}

fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.is_finite() {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use Expr::*;
        match self {
            NumericLiteral(value) => write!(f, "{}", format_number(*value)),
            StrLiteral(value) => write!(f, "\"{}\"", value),
            NullLiteral => write!(f, "null"),
            Identifier(name) => write!(f, "{}", name),
            Binary { op, left, right } => {
                if op.is_comparison() {
                    write!(f, "{} {} {}", left, op.symbol(), right)
                } else {
                    write!(f, "({} {} {})", left, op.symbol(), right)
                }
            }
            Logical { op, left, right } => {
                write!(f, "{} {} {}", left, op.symbol(), right)
            }
            Unary { op, operand } => write!(f, "({}({}))", op.symbol(), operand),
            Assignment { target, value } => write!(f, "{} = {};", target, value),
            Call { callee, args } => {
                write!(f, "{}(", callee)?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", arg)?;
                }
                write!(f, ")")
            }
            MemberAccess { object, field } => write!(f, "{}.{}", object, field),
        }
    }
}

impl Display for VarDeclaration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let keyword = if self.constant { "const" } else { "let" };
        match &self.value {
            Some(value) => write!(f, "{} {} = {};", keyword, self.name, value),
            None => write!(f, "{} {};", keyword, self.name),
        }
    }
}

impl Display for Stmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stmt::VarDeclaration(declaration) => write!(f, "{}", declaration),
            Stmt::FunctionDeclaration(declaration) => {
                write!(f, "func {}(", declaration.name)?;
                for (i, parameter) in declaration.parameters.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", parameter)?;
                }
                write!(f, ") ")?;
                write_block(f, &declaration.body)
            }
            Stmt::StructDeclaration(declaration) => {
                writeln!(f, "struct {} {{", declaration.name)?;
                for field in &declaration.fields {
                    writeln!(f, "  {}", field)?;
                }
                write!(f, "}}")
            }
            Stmt::If(statement) => {
                write!(f, "if ({}) ", statement.condition)?;
                write_block(f, &statement.then_body)?;
                if !statement.else_body.is_empty() {
                    write!(f, " else ")?;
                    write_block(f, &statement.else_body)?;
                }
                Ok(())
            }
            Stmt::While(statement) => {
                write!(f, "while ({}) ", statement.condition)?;
                write_block(f, &statement.body)
            }
            Stmt::Return(statement) => match &statement.value {
                Some(value) => write!(f, "return {};", value),
                None => write!(f, "return;"),
            },
            // An assignment expression carries its own terminating `;`.
            Stmt::Expr(expression) => match expression {
                Expr::Assignment { .. } => write!(f, "{}", expression),
                _ => write!(f, "{};", expression),
            },
        }
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for statement in &self.body {
            writeln!(f, "{}", statement)?;
        }
        Ok(())
    }
}
