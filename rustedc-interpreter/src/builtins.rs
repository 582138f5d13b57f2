use std::io::Write;
use std::rc::Rc;

use crate::environment::Environment;
use crate::value::{format_number, NativeFn, NativeFunction, RuntimeError, Value};

static NATIVES: &[(&str, NativeFn)] = &[
    ("print", native_print),
    ("exit", native_exit),
    ("clear", native_clear),
    ("sqrt", native_sqrt),
    ("pow", native_pow),
    ("round", native_round),
    ("floor", native_floor),
    ("ceil", native_ceil),
    ("min", native_min),
    ("max", native_max),
    ("abs", native_abs),
    ("input", native_input),
    ("num", native_num),
    ("str", native_str),
    ("len", native_len),
    ("type", native_type),
    ("concat", native_concat),
    ("sin", native_sin),
    ("cos", native_cos),
    ("tan", native_tan),
    ("log", native_log),
];

/// Installs the boolean/null constants and the native library into `env`,
/// all as constant bindings. Runs before any program statement executes.
pub fn install(env: &Environment) {
    env.define_constant("true", Value::Boolean(true));
    env.define_constant("false", Value::Boolean(false));
    env.define_constant("null", Value::Null);

    for &(name, func) in NATIVES {
        env.define_constant(name, Value::NativeFunction(NativeFunction { name, func }));
    }
}

fn expect_arity(name: &'static str, args: &[Value], expected: usize) -> Result<(), RuntimeError> {
    if args.len() != expected {
        return Err(RuntimeError::NativeArity {
            name,
            expected,
            actual: args.len(),
        });
    }
    Ok(())
}

fn number_arg(name: &'static str, value: &Value) -> Result<f64, RuntimeError> {
    match value {
        Value::Number(n) => Ok(*n),
        other => Err(RuntimeError::NativeArgumentType {
            name,
            expected: "number",
            found: other.type_name(),
        }),
    }
}

fn string_arg(name: &'static str, value: &Value) -> Result<Rc<str>, RuntimeError> {
    match value {
        Value::Str(s) => Ok(s.clone()),
        other => Err(RuntimeError::NativeArgumentType {
            name,
            expected: "string",
            found: other.type_name(),
        }),
    }
}

fn native_print(args: &[Value], _env: &Environment) -> Result<Value, RuntimeError> {
    for arg in args {
        print!("{} ", arg);
    }
    println!();
    Ok(Value::Null)
}

fn native_exit(_args: &[Value], _env: &Environment) -> Result<Value, RuntimeError> {
    std::process::exit(1);
}

fn native_clear(_args: &[Value], _env: &Environment) -> Result<Value, RuntimeError> {
    print!("\x1B[2J\x1B[1;1H");
    let _ = std::io::stdout().flush();
    Ok(Value::Null)
}

fn native_sqrt(args: &[Value], _env: &Environment) -> Result<Value, RuntimeError> {
    expect_arity("sqrt", args, 1)?;
    Ok(Value::Number(number_arg("sqrt", &args[0])?.sqrt()))
}

fn native_pow(args: &[Value], _env: &Environment) -> Result<Value, RuntimeError> {
    expect_arity("pow", args, 2)?;
    let base = number_arg("pow", &args[0])?;
    let exponent = number_arg("pow", &args[1])?;
    Ok(Value::Number(base.powf(exponent)))
}

fn native_round(args: &[Value], _env: &Environment) -> Result<Value, RuntimeError> {
    expect_arity("round", args, 1)?;
    Ok(Value::Number(number_arg("round", &args[0])?.round()))
}

fn native_floor(args: &[Value], _env: &Environment) -> Result<Value, RuntimeError> {
    expect_arity("floor", args, 1)?;
    Ok(Value::Number(number_arg("floor", &args[0])?.floor()))
}

fn native_ceil(args: &[Value], _env: &Environment) -> Result<Value, RuntimeError> {
    expect_arity("ceil", args, 1)?;
    Ok(Value::Number(number_arg("ceil", &args[0])?.ceil()))
}

fn native_abs(args: &[Value], _env: &Environment) -> Result<Value, RuntimeError> {
    expect_arity("abs", args, 1)?;
    Ok(Value::Number(number_arg("abs", &args[0])?.abs()))
}

fn native_sin(args: &[Value], _env: &Environment) -> Result<Value, RuntimeError> {
    expect_arity("sin", args, 1)?;
    Ok(Value::Number(number_arg("sin", &args[0])?.sin()))
}

fn native_cos(args: &[Value], _env: &Environment) -> Result<Value, RuntimeError> {
    expect_arity("cos", args, 1)?;
    Ok(Value::Number(number_arg("cos", &args[0])?.cos()))
}

fn native_tan(args: &[Value], _env: &Environment) -> Result<Value, RuntimeError> {
    expect_arity("tan", args, 1)?;
    Ok(Value::Number(number_arg("tan", &args[0])?.tan()))
}

fn native_log(args: &[Value], _env: &Environment) -> Result<Value, RuntimeError> {
    expect_arity("log", args, 1)?;
    Ok(Value::Number(number_arg("log", &args[0])?.ln()))
}

/// Variadic; an empty argument list yields null.
fn native_min(args: &[Value], _env: &Environment) -> Result<Value, RuntimeError> {
    let Some(first) = args.first() else {
        return Ok(Value::Null);
    };
    let mut best = number_arg("min", first)?;
    for arg in &args[1..] {
        let candidate = number_arg("min", arg)?;
        if candidate < best {
            best = candidate;
        }
    }
    Ok(Value::Number(best))
}

fn native_max(args: &[Value], _env: &Environment) -> Result<Value, RuntimeError> {
    let Some(first) = args.first() else {
        return Ok(Value::Null);
    };
    let mut best = number_arg("max", first)?;
    for arg in &args[1..] {
        let candidate = number_arg("max", arg)?;
        if candidate > best {
            best = candidate;
        }
    }
    Ok(Value::Number(best))
}

/// Optional string prompt, then one line from stdin.
fn native_input(args: &[Value], _env: &Environment) -> Result<Value, RuntimeError> {
    if args.len() > 1 {
        return Err(RuntimeError::NativeArity {
            name: "input",
            expected: 1,
            actual: args.len(),
        });
    }
    if let Some(prompt) = args.first() {
        println!("{}", string_arg("input", prompt)?);
    }

    let mut line = String::new();
    std::io::stdin()
        .read_line(&mut line)
        .map_err(|err| RuntimeError::NativeFailure {
            name: "input",
            message: err.to_string(),
        })?;
    Ok(Value::Str(line.trim_end_matches(['\n', '\r']).into()))
}

fn native_num(args: &[Value], _env: &Environment) -> Result<Value, RuntimeError> {
    expect_arity("num", args, 1)?;
    let text = string_arg("num", &args[0])?;
    text.trim()
        .parse::<f64>()
        .map(Value::Number)
        .map_err(|_| RuntimeError::NativeFailure {
            name: "num",
            message: format!("cannot convert {:?} to a number", text),
        })
}

fn native_str(args: &[Value], _env: &Environment) -> Result<Value, RuntimeError> {
    expect_arity("str", args, 1)?;
    let number = number_arg("str", &args[0])?;
    Ok(Value::Str(format_number(number).into()))
}

fn native_len(args: &[Value], _env: &Environment) -> Result<Value, RuntimeError> {
    expect_arity("len", args, 1)?;
    let text = string_arg("len", &args[0])?;
    Ok(Value::Number(text.len() as f64))
}

fn native_type(args: &[Value], _env: &Environment) -> Result<Value, RuntimeError> {
    expect_arity("type", args, 1)?;
    Ok(Value::Str(args[0].type_name().into()))
}

/// Variadic string concatenation.
fn native_concat(args: &[Value], _env: &Environment) -> Result<Value, RuntimeError> {
    let mut out = String::new();
    for arg in args {
        out.push_str(&string_arg("concat", arg)?);
    }
    Ok(Value::Str(out.into()))
}
