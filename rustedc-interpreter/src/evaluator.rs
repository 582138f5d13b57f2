use std::cell::RefCell;
use std::rc::Rc;

use rustedc_core::ast;
use rustedc_core::ast::{BinaryOp, Expr, LogicalOp, UnaryOp};

use crate::environment::Environment;
use crate::value::{Function, RuntimeError, StructValue, Value};

/// Evaluates every top-level statement in order and yields the last
/// statement's value. A top-level `return` signal is not consumed here; it
/// flows into the final value and prints as its payload.
pub fn run_program(program: &ast::Program, env: &Environment) -> Result<Value, RuntimeError> {
    let mut last = Value::Null;
    for statement in &program.body {
        last = evaluate(statement, env)?;
    }
    Ok(last)
}

pub fn evaluate(statement: &ast::Stmt, env: &Environment) -> Result<Value, RuntimeError> {
    match statement {
        ast::Stmt::Expr(expression) => eval_expression(expression, env),
        ast::Stmt::VarDeclaration(declaration) => eval_var_declaration(declaration, env),
        ast::Stmt::FunctionDeclaration(declaration) => eval_function_declaration(declaration, env),
        ast::Stmt::StructDeclaration(declaration) => eval_struct_declaration(declaration, env),
        ast::Stmt::If(statement) => eval_if_statement(statement, env),
        ast::Stmt::While(statement) => eval_while_statement(statement, env),
        ast::Stmt::Return(statement) => eval_return_statement(statement, env),
    }
}

/// Statements in order against the given environment; stops at the first
/// `return` signal and hands it back unmodified. The caller decides whether
/// to propagate or unwrap it.
fn eval_statements(statements: &[ast::Stmt], env: &Environment) -> Result<Value, RuntimeError> {
    let mut result = Value::Null;
    for statement in statements {
        result = evaluate(statement, env)?;
        if matches!(result, Value::Return(_)) {
            return Ok(result);
        }
    }
    Ok(result)
}

fn eval_var_declaration(
    declaration: &ast::VarDeclaration,
    env: &Environment,
) -> Result<Value, RuntimeError> {
    let value = match &declaration.value {
        Some(expression) => eval_expression(expression, env)?,
        None => Value::Null,
    };
    env.declare(&declaration.name, value, declaration.constant)
}

fn eval_function_declaration(
    declaration: &ast::FunctionDeclaration,
    env: &Environment,
) -> Result<Value, RuntimeError> {
    let function = Value::Function(Rc::new(Function {
        name: declaration.name.as_str().into(),
        parameters: declaration.parameters.clone(),
        body: declaration.body.clone(),
        closure: env.clone(),
    }));
    env.declare(&declaration.name, function, true)
}

/// Field defaults are evaluated once, at declaration time, into a template.
fn eval_struct_declaration(
    declaration: &ast::StructDeclaration,
    env: &Environment,
) -> Result<Value, RuntimeError> {
    let mut fields = std::collections::BTreeMap::new();
    for field in &declaration.fields {
        let default = match &field.value {
            Some(expression) => eval_expression(expression, env)?,
            None => Value::Null,
        };
        fields.insert(field.name.clone(), default);
    }

    let template = Value::Struct(Rc::new(StructValue {
        name: declaration.name.as_str().into(),
        is_template: true,
        fields: RefCell::new(fields),
    }));
    env.declare(&declaration.name, template, true)
}

fn eval_if_statement(statement: &ast::IfStatement, env: &Environment) -> Result<Value, RuntimeError> {
    let number = match eval_expression(&statement.condition, env)? {
        Value::Number(number) => number,
        other => {
            return Err(RuntimeError::ConditionNotNumeric {
                context: "if",
                found: other.type_name(),
            })
        }
    };

    if number != 0.0 {
        eval_statements(&statement.then_body, env)
    } else if !statement.else_body.is_empty() {
        eval_statements(&statement.else_body, env)
    } else {
        Ok(Value::Null)
    }
}

/// The loop continues only while the condition is exactly 1 — deliberately
/// stricter than `if`'s non-zero test.
fn eval_while_statement(statement: &ast::WhileLoop, env: &Environment) -> Result<Value, RuntimeError> {
    let mut result = Value::Null;
    loop {
        let number = match eval_expression(&statement.condition, env)? {
            Value::Number(number) => number,
            other => {
                return Err(RuntimeError::ConditionNotNumeric {
                    context: "while",
                    found: other.type_name(),
                })
            }
        };
        if number != 1.0 {
            break;
        }

        result = eval_statements(&statement.body, env)?;
        if matches!(result, Value::Return(_)) {
            return Ok(result);
        }
    }
    Ok(result)
}

fn eval_return_statement(
    statement: &ast::ReturnStatement,
    env: &Environment,
) -> Result<Value, RuntimeError> {
    let value = match &statement.value {
        Some(expression) => eval_expression(expression, env)?,
        None => Value::Null,
    };
    Ok(Value::Return(Box::new(value)))
}

fn eval_expression(expression: &Expr, env: &Environment) -> Result<Value, RuntimeError> {
    match expression {
        Expr::NumericLiteral(value) => Ok(Value::Number(*value)),
        Expr::StrLiteral(value) => Ok(Value::Str(value.as_str().into())),
        Expr::NullLiteral => Ok(Value::Null),
        Expr::Identifier(name) => env.lookup(name),
        Expr::Binary { op, left, right } => eval_binary(*op, left, right, env),
        Expr::Logical { op, left, right } => eval_logical(*op, left, right, env),
        Expr::Unary { op, operand } => eval_unary(*op, operand, env),
        Expr::Assignment { target, value } => eval_assignment(target, value, env),
        Expr::Call { callee, args } => eval_call(callee, args, env),
        Expr::MemberAccess { object, field } => eval_member_access(object, field, env),
    }
}

fn unwrap_return(value: Value) -> Value {
    match value {
        Value::Return(inner) => *inner,
        other => other,
    }
}

/// Numeric operands get the arithmetic/comparison table below; ANY other
/// operand typing yields a silent null, not an error.
fn eval_binary(
    op: BinaryOp,
    left: &Expr,
    right: &Expr,
    env: &Environment,
) -> Result<Value, RuntimeError> {
    let left = unwrap_return(eval_expression(left, env)?);
    let right = unwrap_return(eval_expression(right, env)?);

    match (left, right) {
        (Value::Number(left), Value::Number(right)) => apply_numeric(op, left, right),
        _ => Ok(Value::Null),
    }
}

fn apply_numeric(op: BinaryOp, left: f64, right: f64) -> Result<Value, RuntimeError> {
    let boolean = |condition: bool| Value::Number(if condition { 1.0 } else { 0.0 });
    match op {
        BinaryOp::Add => Ok(Value::Number(left + right)),
        BinaryOp::Subtract => Ok(Value::Number(left - right)),
        BinaryOp::Multiply => Ok(Value::Number(left * right)),
        BinaryOp::Divide => {
            if right == 0.0 {
                Err(RuntimeError::DivisionByZero)
            } else {
                Ok(Value::Number(left / right))
            }
        }
        BinaryOp::Modulo => {
            if right == 0.0 {
                Err(RuntimeError::ModuloByZero)
            } else {
                Ok(Value::Number(left % right))
            }
        }
        BinaryOp::Less => Ok(boolean(left < right)),
        BinaryOp::LessEqual => Ok(boolean(left <= right)),
        BinaryOp::Greater => Ok(boolean(left > right)),
        BinaryOp::GreaterEqual => Ok(boolean(left >= right)),
        BinaryOp::EqualEqual => Ok(boolean(left == right)),
        BinaryOp::NotEqual => Ok(boolean(left != right)),
    }
}

/// Both operands are evaluated eagerly; there is no short-circuiting.
fn eval_logical(
    op: LogicalOp,
    left: &Expr,
    right: &Expr,
    env: &Environment,
) -> Result<Value, RuntimeError> {
    let left = eval_expression(left, env)?;
    let right = eval_expression(right, env)?;

    let (Value::Number(left), Value::Number(right)) = (&left, &right) else {
        let found = if matches!(left, Value::Number(_)) {
            right.type_name()
        } else {
            left.type_name()
        };
        return Err(RuntimeError::LogicalOperandType {
            op: op.symbol(),
            found,
        });
    };

    let truthy = |n: f64| n != 0.0;
    let result = match op {
        LogicalOp::And => truthy(*left) && truthy(*right),
        LogicalOp::Or => truthy(*left) || truthy(*right),
    };
    Ok(Value::Number(if result { 1.0 } else { 0.0 }))
}

fn eval_unary(op: UnaryOp, operand: &Expr, env: &Environment) -> Result<Value, RuntimeError> {
    let number = match eval_expression(operand, env)? {
        Value::Number(number) => number,
        other => {
            return Err(RuntimeError::InvalidUnaryOperand {
                op: op.symbol(),
                found: other.type_name(),
            })
        }
    };

    match op {
        UnaryOp::Not => Ok(Value::Number(if number == 0.0 { 1.0 } else { 0.0 })),
        UnaryOp::Negate => Ok(Value::Number(-number)),
    }
}

fn eval_assignment(target: &Expr, value: &Expr, env: &Environment) -> Result<Value, RuntimeError> {
    match target {
        Expr::Identifier(name) => {
            let value = eval_expression(value, env)?;
            env.assign(name, value)
        }
        Expr::MemberAccess { object, field } => {
            let object = match eval_expression(object, env)? {
                Value::Struct(object) => object,
                other => {
                    return Err(RuntimeError::MemberAccessOnNonStruct(other.type_name()))
                }
            };
            let value = eval_expression(value, env)?;
            object
                .fields
                .borrow_mut()
                .insert(field.clone(), value.clone());
            Ok(value)
        }
        _ => Err(RuntimeError::InvalidAssignmentTarget),
    }
}

fn eval_member_access(object: &Expr, field: &str, env: &Environment) -> Result<Value, RuntimeError> {
    let object = match eval_expression(object, env)? {
        Value::Struct(object) => object,
        other => return Err(RuntimeError::MemberAccessOnNonStruct(other.type_name())),
    };

    let value = object.fields.borrow().get(field).cloned();
    value.ok_or_else(|| RuntimeError::UnknownField {
        name: object.name.clone(),
        field: field.to_owned(),
    })
}

/// Callee first, then arguments left to right.
fn eval_call(callee: &Expr, args: &[Expr], env: &Environment) -> Result<Value, RuntimeError> {
    let callee = eval_expression(callee, env)?;

    let mut arguments = Vec::with_capacity(args.len());
    for arg in args {
        arguments.push(eval_expression(arg, env)?);
    }

    match callee {
        Value::Struct(template) => instantiate_struct(&template, arguments),
        Value::NativeFunction(native) => (native.func)(&arguments, env),
        Value::Function(function) => call_function(&function, arguments, env),
        other => Err(RuntimeError::NotCallable(other.type_name())),
    }
}

/// Copies the template's field map, then overwrites fields positionally by
/// walking the map in its natural (name) order lock-step with the argument
/// list up to the shorter length. Remaining fields keep their defaults.
fn instantiate_struct(
    template: &Rc<StructValue>,
    arguments: Vec<Value>,
) -> Result<Value, RuntimeError> {
    if !template.is_template {
        return Err(RuntimeError::InstantiateFromInstance);
    }

    let mut fields = template.fields.borrow().clone();
    for (slot, argument) in fields.values_mut().zip(arguments) {
        *slot = argument;
    }

    Ok(Value::Struct(Rc::new(StructValue {
        name: template.name.clone(),
        is_template: false,
        fields: RefCell::new(fields),
    })))
}

/// The call scope chains to the CALLER's environment, not the function's
/// captured closure scope. Extra arguments are ignored; missing parameters
/// stay unbound and fault on first use.
fn call_function(
    function: &Function,
    arguments: Vec<Value>,
    env: &Environment,
) -> Result<Value, RuntimeError> {
    let call_env = Environment::with_parent(env);
    for (parameter, argument) in function.parameters.iter().zip(arguments) {
        call_env.declare(parameter, argument, false)?;
    }

    let result = eval_statements(&function.body, &call_env)?;
    Ok(unwrap_return(result))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustedc_core::lexer::Lexer;
    use rustedc_core::parser::Parser;

    fn run(source: &str) -> Result<Value, RuntimeError> {
        let tokens = Lexer::new(source).tokenize().unwrap();
        let program = Parser::new(tokens).parse_program().unwrap();
        run_program(&program, &Environment::global())
    }

    fn test_evaluation(inputs: Vec<(&str, Result<Value, RuntimeError>)>) {
        for (input, expected) in inputs {
            assert_eq!(run(input), expected, "input: {input}");
        }
    }

    #[test]
    fn test_literals() {
        let inputs = vec![
            ("5", Ok(Value::Number(5.0))),
            ("3.25", Ok(Value::Number(3.25))),
            ("-7", Ok(Value::Number(-7.0))),
            ("\"hello\"", Ok(Value::Str("hello".into()))),
            ("null", Ok(Value::Null)),
            ("true", Ok(Value::Boolean(true))),
            ("false", Ok(Value::Boolean(false))),
        ];

        test_evaluation(inputs);
    }

    #[test]
    fn test_arithmetic() {
        let inputs = vec![
            ("1 + 2", Ok(Value::Number(3.0))),
            ("7 - 2", Ok(Value::Number(5.0))),
            ("3 * 4", Ok(Value::Number(12.0))),
            ("10 / 4", Ok(Value::Number(2.5))),
            ("10 % 3", Ok(Value::Number(1.0))),
            ("1 + 2 * 3", Ok(Value::Number(7.0))),
            ("(1 + 2) * 3", Ok(Value::Number(9.0))),
        ];

        test_evaluation(inputs);
    }

    #[test]
    fn test_division_by_zero_is_fatal() {
        let inputs = vec![
            ("let x = 1 / 0;", Err(RuntimeError::DivisionByZero)),
            ("5 % 0", Err(RuntimeError::ModuloByZero)),
        ];

        test_evaluation(inputs);
    }

    // Regression pin: mistyped binary operands produce a silent null, never
    // an error.
    #[test]
    fn test_mistyped_binary_operands_yield_null() {
        let inputs = vec![
            ("1 + \"a\"", Ok(Value::Null)),
            ("\"a\" + \"b\"", Ok(Value::Null)),
            ("null + 1", Ok(Value::Null)),
            ("1 + true", Ok(Value::Null)),
        ];

        test_evaluation(inputs);
    }

    #[test]
    fn test_unary_operators() {
        let inputs = vec![
            ("!1", Ok(Value::Number(0.0))),
            ("!0", Ok(Value::Number(1.0))),
            ("let x = 5; -x", Ok(Value::Number(-5.0))),
            (
                "!\"a\"",
                Err(RuntimeError::InvalidUnaryOperand {
                    op: "!",
                    found: "string",
                }),
            ),
            (
                "-null",
                Err(RuntimeError::InvalidUnaryOperand {
                    op: "-",
                    found: "null",
                }),
            ),
        ];

        test_evaluation(inputs);
    }

    #[test]
    fn test_declarations_and_assignment() {
        let inputs = vec![
            ("let a = 5; a", Ok(Value::Number(5.0))),
            ("let a = 5 * 5; a", Ok(Value::Number(25.0))),
            ("let a; a", Ok(Value::Null)),
            ("let a = 1; a = 2; a", Ok(Value::Number(2.0))),
            // The nested assignment terminates itself, hence the double
            // semicolon.
            ("let a = 1; let b = a = 5;; b", Ok(Value::Number(5.0))),
            (
                "let a = 1; let a = 2;",
                Err(RuntimeError::AlreadyDeclared("a".into())),
            ),
            (
                "const c = 1; c = 2;",
                Err(RuntimeError::AssignToConstant("c".into())),
            ),
            (
                "ghost = 1;",
                Err(RuntimeError::UndefinedName("ghost".into())),
            ),
            ("5 = 1;", Err(RuntimeError::InvalidAssignmentTarget)),
            ("missing", Err(RuntimeError::UndefinedName("missing".into()))),
        ];

        test_evaluation(inputs);
    }

    #[test]
    fn test_if_truthiness_is_nonzero() {
        let inputs = vec![
            ("if (1) { 10; } else { 20; }", Ok(Value::Number(10.0))),
            ("if (0) { 10; } else { 20; }", Ok(Value::Number(20.0))),
            // Any non-zero number takes the then-branch.
            ("if (2) { 10; } else { 20; }", Ok(Value::Number(10.0))),
            ("if (0) { 10; }", Ok(Value::Null)),
            (
                "if (null) { 10; }",
                Err(RuntimeError::ConditionNotNumeric {
                    context: "if",
                    found: "null",
                }),
            ),
        ];

        test_evaluation(inputs);
    }

    // `while` is stricter than `if`: the loop continues only on exactly 1.
    #[test]
    fn test_while_continues_only_on_exactly_one() {
        let inputs = vec![
            (
                "let x = 0; while (2) { x = 9; } x",
                Ok(Value::Number(0.0)),
            ),
            (
                "let i = 3; let total = 0;
                 while (i > 0) { total = total + i; i = i - 1; }
                 total",
                Ok(Value::Number(6.0)),
            ),
            (
                "while (\"go\") { 1; }",
                Err(RuntimeError::ConditionNotNumeric {
                    context: "while",
                    found: "string",
                }),
            ),
        ];

        test_evaluation(inputs);
    }

    #[test]
    fn test_return_unwinds_out_of_a_loop() {
        let inputs = vec![
            // At top level nothing consumes the signal, so the program's
            // value IS the wrapped return.
            (
                "while (1) { return 5; }",
                Ok(Value::Return(Box::new(Value::Number(5.0)))),
            ),
            (
                "func f() { while (1) { return 5; } }
                 f()",
                Ok(Value::Number(5.0)),
            ),
            (
                "func f() { while (1) { if (1) { return 7; } } }
                 f()",
                Ok(Value::Number(7.0)),
            ),
        ];

        test_evaluation(inputs);
    }

    #[test]
    fn test_function_calls() {
        let inputs = vec![
            (
                "func add(a, b) { return a + b; }
                 add(2, 3)",
                Ok(Value::Number(5.0)),
            ),
            // Without a return the last statement's value is the result.
            (
                "func double(x) { x * 2 }
                 double(4)",
                Ok(Value::Number(8.0)),
            ),
            ("func nop() {} nop()", Ok(Value::Null)),
            // `return;` yields null through the signal.
            ("func f() { return; 99 } f()", Ok(Value::Null)),
            // Extra arguments are ignored.
            (
                "func first(a) { return a; }
                 first(1, 2, 3)",
                Ok(Value::Number(1.0)),
            ),
            // Missing parameters stay unbound and fault on first use.
            (
                "func add(a, b) { return a + b; }
                 add(1)",
                Err(RuntimeError::UndefinedName("b".into())),
            ),
            ("5()", Err(RuntimeError::NotCallable("number"))),
            (
                "func outer() { return inner(); }
                 outer()",
                Err(RuntimeError::UndefinedName("inner".into())),
            ),
            (
                "func rec(n) { if (n < 2) { return 1; } return rec(n - 1) * n; }
                 rec(5)",
                Ok(Value::Number(120.0)),
            ),
            // Function declarations are constant bindings.
            (
                "func f() {} f = 1;",
                Err(RuntimeError::AssignToConstant("f".into())),
            ),
        ];

        test_evaluation(inputs);
    }

    // The call environment chains to the caller, not the closure scope, so
    // free variables resolve dynamically.
    #[test]
    fn free_variables_resolve_in_the_callers_scope() {
        let inputs = vec![
            (
                "func show() { return message; }
                 func caller() { let message = \"hi\"; return show(); }
                 caller()",
                Ok(Value::Str("hi".into())),
            ),
            // Under lexical closures this would see `n`; here the defining
            // scope is gone from the chain at call time.
            (
                "func make() { let n = 7; func get() { return n; } return get; }
                 let g = make();
                 g()",
                Err(RuntimeError::UndefinedName("n".into())),
            ),
        ];

        test_evaluation(inputs);
    }

    #[test]
    fn test_logical_operators_do_not_short_circuit() {
        let inputs = vec![
            ("if (1 && 0) { 1; } else { 2; }", Ok(Value::Number(2.0))),
            ("if (1 || 0) { 1; } else { 2; }", Ok(Value::Number(1.0))),
            ("if (0 || 0) { 1; } else { 2; }", Ok(Value::Number(2.0))),
            // Both operands evaluate eagerly: the division still faults
            // although the left side already decides the outcome.
            (
                "if (0 && 1 / 0) { 1; } else { 2; }",
                Err(RuntimeError::DivisionByZero),
            ),
            (
                "if (1 && \"yes\") { 1; }",
                Err(RuntimeError::LogicalOperandType {
                    op: "&&",
                    found: "string",
                }),
            ),
        ];

        test_evaluation(inputs);
    }

    #[test]
    fn test_comparisons_yield_numeric_booleans() {
        let inputs = vec![
            ("if (1 < 2) { 1; } else { 0; }", Ok(Value::Number(1.0))),
            ("if (2 <= 1) { 1; } else { 0; }", Ok(Value::Number(0.0))),
            ("if (2 == 2) { 1; } else { 0; }", Ok(Value::Number(1.0))),
            ("if (2 != 2) { 1; } else { 0; }", Ok(Value::Number(0.0))),
        ];

        test_evaluation(inputs);
    }

    #[test]
    fn test_struct_templates_and_instances() {
        let inputs = vec![
            (
                "struct Point { let x = 1; let y = 2; }
                 let p = Point(10, 20);
                 p.x + p.y",
                Ok(Value::Number(30.0)),
            ),
            // Fewer constructor arguments than fields: the rest keep their
            // declared defaults.
            (
                "struct Point { let x = 1; let y = 2; }
                 let p = Point(10);
                 p.y",
                Ok(Value::Number(2.0)),
            ),
            (
                "struct Point { let x = 1; let y = 2; }
                 let p = Point();
                 p.x",
                Ok(Value::Number(1.0)),
            ),
            // Field assignment mutates the shared instance.
            (
                "struct Point { let x = 0; }
                 let p = Point();
                 let q = p;
                 p.x = 42;
                 q.x",
                Ok(Value::Number(42.0)),
            ),
            (
                "struct Point { let x = 0; }
                 let p = Point();
                 p.ghost",
                Err(RuntimeError::UnknownField {
                    name: "Point".into(),
                    field: "ghost".into(),
                }),
            ),
            (
                "let n = 5; n.x",
                Err(RuntimeError::MemberAccessOnNonStruct("number")),
            ),
            // Calling an instance is not a second construction.
            (
                "struct Point { let x = 0; }
                 let p = Point();
                 p()",
                Err(RuntimeError::InstantiateFromInstance),
            ),
        ];

        test_evaluation(inputs);
    }

    // Constructor arguments bind in field-NAME order, not declaration
    // order.
    #[test]
    fn test_struct_arguments_bind_in_name_order() {
        let inputs = vec![
            (
                "struct Pair { let z = 1; let a = 2; }
                 let q = Pair(9);
                 q.a",
                Ok(Value::Number(9.0)),
            ),
            (
                "struct Pair { let z = 1; let a = 2; }
                 let q = Pair(9);
                 q.z",
                Ok(Value::Number(1.0)),
            ),
        ];

        test_evaluation(inputs);
    }

    #[test]
    fn test_native_functions_through_the_language() {
        let inputs = vec![
            ("sqrt(9)", Ok(Value::Number(3.0))),
            ("pow(2, 8)", Ok(Value::Number(256.0))),
            ("min(3, 1, 2)", Ok(Value::Number(1.0))),
            ("max()", Ok(Value::Null)),
            ("len(\"hello\")", Ok(Value::Number(5.0))),
            ("num(\"42\") + 1", Ok(Value::Number(43.0))),
            ("str(7)", Ok(Value::Str("7".into()))),
            ("concat(\"ab\", \"cd\")", Ok(Value::Str("abcd".into()))),
            ("type(5)", Ok(Value::Str("number".into()))),
            ("type(type)", Ok(Value::Str("native function".into()))),
            (
                "sqrt(1, 2)",
                Err(RuntimeError::NativeArity {
                    name: "sqrt",
                    expected: 1,
                    actual: 2,
                }),
            ),
        ];

        test_evaluation(inputs);
    }

    #[test]
    fn test_struct_defaults_are_evaluated_at_declaration() {
        let inputs = vec![(
            "let base = 10;
             struct Conf { let limit = base * 2; }
             base = 0;
             let c = Conf();
             c.limit",
            Ok(Value::Number(20.0)),
        )];

        test_evaluation(inputs);
    }

    #[test]
    fn test_binary_operands_unwrap_return_signals() {
        let signal = Value::Return(Box::new(Value::Number(2.0)));
        assert_eq!(unwrap_return(signal), Value::Number(2.0));
        assert_eq!(unwrap_return(Value::Number(3.0)), Value::Number(3.0));
    }

    #[test]
    fn test_top_level_return_stays_wrapped() {
        let inputs = vec![
            (
                "return 5;",
                Ok(Value::Return(Box::new(Value::Number(5.0)))),
            ),
            (
                "if (1) { return 9; }",
                Ok(Value::Return(Box::new(Value::Number(9.0)))),
            ),
        ];

        test_evaluation(inputs);
    }
}
