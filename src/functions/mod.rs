// Functions are organized by categories
pub mod combinatorics;
pub mod elementary;
pub mod trigonometric;

use crate::CalcError;
use crate::value::Value;

pub use combinatorics::*;
pub use elementary::*;
pub use trigonometric::*;

const BUILTINS: &[&str] = &[
  "sin", "cos", "tan", "asin", "acos", "atan", "sinh", "cosh", "tanh",
  "sqrt", "cbrt", "ln", "log", "exp", "abs", "factorial", "nPr", "nCr",
  "int", "iPart", "fPart", "round", "roundN", "min", "max",
];

pub fn is_builtin(name: &str) -> bool {
  BUILTINS.contains(&name)
}

/// Dispatch a call to the named built-in with already-evaluated arguments.
pub fn call(name: &str, args: Vec<Value>) -> Result<Value, CalcError> {
  match name {
    "sin" => map_unary(name, args, sin),
    "cos" => map_unary(name, args, cos),
    "tan" => map_unary(name, args, tan),
    "asin" => map_unary(name, args, asin),
    "acos" => map_unary(name, args, acos),
    "atan" => map_unary(name, args, atan),
    "sinh" => map_unary(name, args, sinh),
    "cosh" => map_unary(name, args, cosh),
    "tanh" => map_unary(name, args, tanh),
    "sqrt" => map_unary(name, args, sqrt),
    "cbrt" => map_unary(name, args, cbrt),
    "ln" => map_unary(name, args, ln),
    "log" => log(args),
    "exp" => map_unary(name, args, exp),
    "abs" => map_unary(name, args, abs),
    "factorial" => map_unary(name, args, factorial),
    "nPr" => permutations(args),
    "nCr" => combinations(args),
    "int" | "iPart" => map_unary(name, args, int_part),
    "fPart" => map_unary(name, args, frac_part),
    "round" | "roundN" => round_n(name, args),
    "min" => extremum(name, args, f64::min),
    "max" => extremum(name, args, f64::max),
    _ => Err(CalcError::UndefinedFunction(name.to_string())),
  }
}

pub(crate) fn expect_arity(
  name: &str,
  args: &[Value],
  range: std::ops::RangeInclusive<usize>,
  expected: &'static str,
) -> Result<(), CalcError> {
  if range.contains(&args.len()) {
    Ok(())
  } else {
    Err(CalcError::Arity {
      name: name.to_string(),
      expected,
      got: args.len(),
    })
  }
}

/// Extract a real argument. Complex values with only rounding noise in
/// the imaginary part are accepted.
pub(crate) fn real_arg(name: &str, value: &Value) -> Result<f64, CalcError> {
  match value {
    Value::List(_) => Err(CalcError::EvaluationError(format!(
      "{name} expects a number, not a list"
    ))),
    other => other
      .as_real()
      .ok_or_else(|| CalcError::NonRealArgument(name.to_string())),
  }
}

/// Apply a one-argument function, mapping it over list arguments.
fn map_unary(
  name: &str,
  mut args: Vec<Value>,
  f: fn(Value) -> Result<Value, CalcError>,
) -> Result<Value, CalcError> {
  expect_arity(name, &args, 1..=1, "1")?;
  match args.pop() {
    Some(value) => apply_listable(value, f),
    None => Err(CalcError::EvaluationError(format!("{name}: no argument"))),
  }
}

fn apply_listable(
  value: Value,
  f: fn(Value) -> Result<Value, CalcError>,
) -> Result<Value, CalcError> {
  match value {
    Value::List(items) => items
      .into_iter()
      .map(|item| apply_listable(item, f))
      .collect::<Result<Vec<_>, _>>()
      .map(Value::List),
    scalar => f(scalar),
  }
}

fn extremum(
  name: &str,
  args: Vec<Value>,
  pick: fn(f64, f64) -> f64,
) -> Result<Value, CalcError> {
  if args.len() < 2 {
    return Err(CalcError::Arity {
      name: name.to_string(),
      expected: "at least 2",
      got: args.len(),
    });
  }
  let mut acc: Option<f64> = None;
  for arg in &args {
    let n = real_arg(name, arg)?;
    acc = Some(match acc {
      Some(current) => pick(current, n),
      None => n,
    });
  }
  Ok(Value::Real(acc.unwrap_or(f64::NAN)))
}
