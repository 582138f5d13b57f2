use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use rustedc_core::ast;
use thiserror::Error;

use crate::environment::Environment;

/// Runtime values. Cheap to clone: compound variants share their payload
/// through `Rc`.
#[derive(Debug, PartialEq, Clone)]
pub enum Value {
    Null,
    Boolean(bool),
    Number(f64),
    Str(Rc<str>),
    Function(Rc<Function>),
    NativeFunction(NativeFunction),
    Struct(Rc<StructValue>),
    /// Internal control marker produced by `return`; propagated unmodified
    /// by statement sequences and consumed at the function-call boundary.
    /// Never a user-visible value.
    Return(Box<Value>),
}

impl Value {
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Boolean(_) => "boolean",
            Value::Number(_) => "number",
            Value::Str(_) => "string",
            Value::Function(_) => "function",
            Value::NativeFunction(_) => "native function",
            Value::Struct(_) => "struct",
            Value::Return(_) => "return",
        }
    }
}

/// Whole numbers print without a fractional part.
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.is_finite() {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Boolean(value) => write!(f, "{}", value),
            Value::Number(value) => write!(f, "{}", format_number(*value)),
            Value::Str(value) => write!(f, "{}", value),
            Value::Function(function) => write!(f, "<func {}>", function.name),
            Value::NativeFunction(native) => write!(f, "<native func {}>", native.name),
            Value::Struct(value) => {
                write!(f, "Struct {} {{", value.name)?;
                for (name, field) in value.fields.borrow().iter() {
                    write!(f, "\n  {}: {}", name, field)?;
                }
                write!(f, "\n}}")
            }
            Value::Return(inner) => write!(f, "{}", inner),
        }
    }
}

/// User-defined function: parameters, body, and the environment it was
/// declared in. The defining environment is kept alive by the value itself;
/// note that calls nonetheless chain their scope to the CALLER's
/// environment (see the evaluator).
#[derive(Clone)]
pub struct Function {
    pub name: Rc<str>,
    pub parameters: Vec<String>,
    pub body: Vec<ast::Stmt>,
    pub closure: Environment,
}

impl PartialEq for Function {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.parameters == other.parameters
            && self.body == other.body
            && self.closure.ptr_eq(&other.closure)
    }
}

impl std::fmt::Debug for Function {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Function")
            .field("name", &self.name)
            .field("parameters", &self.parameters)
            .finish()
    }
}

pub type NativeFn = fn(&[Value], &Environment) -> Result<Value, RuntimeError>;

#[derive(Clone)]
pub struct NativeFunction {
    pub name: &'static str,
    pub func: NativeFn,
}

impl PartialEq for NativeFunction {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.func as usize == other.func as usize
    }
}

impl std::fmt::Debug for NativeFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NativeFunction")
            .field("name", &self.name)
            .finish()
    }
}

/// A struct template (`is_template == true`, holding field defaults) or an
/// instance produced by calling the template. Fields are keyed and iterated
/// by NAME, so positional constructor arguments bind in name order, not
/// declaration order.
#[derive(Debug, PartialEq)]
pub struct StructValue {
    pub name: Rc<str>,
    pub is_template: bool,
    pub fields: RefCell<BTreeMap<String, Value>>,
}

#[derive(Debug, PartialEq, Error)]
pub enum RuntimeError {
    #[error("cannot resolve '{0}' as it does not exist")]
    UndefinedName(Rc<str>),
    #[error("cannot declare '{0}', it is already defined in this scope")]
    AlreadyDeclared(Rc<str>),
    #[error("cannot reassign to '{0}' as it was declared constant")]
    AssignToConstant(Rc<str>),
    #[error("invalid left-hand side in assignment expression")]
    InvalidAssignmentTarget,
    #[error("cannot call value of type {0}")]
    NotCallable(&'static str),
    #[error("cannot create a struct instance from another struct instance")]
    InstantiateFromInstance,
    #[error("field '{field}' not found in struct '{name}'")]
    UnknownField { name: Rc<str>, field: String },
    #[error("member access is only supported for structs, got {0}")]
    MemberAccessOnNonStruct(&'static str),
    #[error("division by zero")]
    DivisionByZero,
    #[error("modulo by zero")]
    ModuloByZero,
    #[error("{context} condition must evaluate to a numeric value, got {found}")]
    ConditionNotNumeric {
        context: &'static str,
        found: &'static str,
    },
    #[error("logical operator '{op}' requires numeric operands, got {found}")]
    LogicalOperandType {
        op: &'static str,
        found: &'static str,
    },
    #[error("unary operator '{op}' requires a numeric operand, got {found}")]
    InvalidUnaryOperand {
        op: &'static str,
        found: &'static str,
    },
    #[error("wrong number of arguments for {name}: expected {expected}, got {actual}")]
    NativeArity {
        name: &'static str,
        expected: usize,
        actual: usize,
    },
    #[error("wrong argument type for {name}: expected {expected}, got {found}")]
    NativeArgumentType {
        name: &'static str,
        expected: &'static str,
        found: &'static str,
    },
    #[error("{name}: {message}")]
    NativeFailure {
        name: &'static str,
        message: String,
    },
}
