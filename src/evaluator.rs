use crate::CalcError;
use crate::functions;
use crate::scope::Scope;
use crate::syntax::{BinaryOperator, Expr, UnaryOperator};
use crate::value::{Complex, Value};

/// Named constants. They are lower case so they never collide with the
/// upper-case variable memory.
pub fn constant_value(name: &str) -> Option<Value> {
  match name {
    "pi" => Some(Value::Real(std::f64::consts::PI)),
    "e" => Some(Value::Real(std::f64::consts::E)),
    "tau" => Some(Value::Real(std::f64::consts::TAU)),
    "phi" => Some(Value::Real((1.0 + 5.0_f64.sqrt()) / 2.0)),
    "i" => Some(Value::Complex(Complex::I)),
    _ => None,
  }
}

pub fn evaluate_expr(expr: &Expr, scope: &Scope) -> Result<Value, CalcError> {
  match expr {
    Expr::Number(n) => Ok(Value::Real(*n)),
    Expr::Identifier(name) => scope
      .lookup(name)
      .map(Value::Real)
      .or_else(|| constant_value(name))
      .ok_or_else(|| CalcError::UndefinedSymbol(name.clone())),
    Expr::List(items) => items
      .iter()
      .map(|item| evaluate_expr(item, scope))
      .collect::<Result<Vec<_>, _>>()
      .map(Value::List),
    Expr::FunctionCall { name, args } => {
      if !functions::is_builtin(name) {
        return Err(CalcError::UndefinedFunction(name.clone()));
      }
      let args = args
        .iter()
        .map(|arg| evaluate_expr(arg, scope))
        .collect::<Result<Vec<_>, _>>()?;
      functions::call(name, args)
    }
    Expr::UnaryOp { op, operand } => {
      let value = evaluate_expr(operand, scope)?;
      match op {
        UnaryOperator::Plus => Ok(value),
        UnaryOperator::Minus => Ok(negate(value)),
      }
    }
    Expr::BinaryOp { op, left, right } => {
      let left = evaluate_expr(left, scope)?;
      let right = evaluate_expr(right, scope)?;
      thread_binary_op(*op, left, right)
    }
    Expr::Factorial(operand) => {
      let value = evaluate_expr(operand, scope)?;
      functions::call("factorial", vec![value])
    }
  }
}

fn negate(value: Value) -> Value {
  match value {
    Value::Real(n) => Value::Real(-n),
    Value::Complex(c) => Value::Complex(-c),
    Value::List(items) => Value::List(items.into_iter().map(negate).collect()),
  }
}

/// Apply a binary operator, broadcasting over lists element-wise.
pub fn thread_binary_op(
  op: BinaryOperator,
  left: Value,
  right: Value,
) -> Result<Value, CalcError> {
  match (left, right) {
    (Value::List(l), Value::List(r)) => {
      if l.len() != r.len() {
        return Err(CalcError::EvaluationError(format!(
          "dimension mismatch ({} != {})",
          l.len(),
          r.len()
        )));
      }
      l.into_iter()
        .zip(r)
        .map(|(a, b)| thread_binary_op(op, a, b))
        .collect::<Result<Vec<_>, _>>()
        .map(Value::List)
    }
    (Value::List(l), scalar) => l
      .into_iter()
      .map(|a| thread_binary_op(op, a, scalar.clone()))
      .collect::<Result<Vec<_>, _>>()
      .map(Value::List),
    (scalar, Value::List(r)) => r
      .into_iter()
      .map(|b| thread_binary_op(op, scalar.clone(), b))
      .collect::<Result<Vec<_>, _>>()
      .map(Value::List),
    (Value::Real(a), Value::Real(b)) => real_binary_op(op, a, b),
    (a, b) => match (a.as_complex(), b.as_complex()) {
      (Some(a), Some(b)) => complex_binary_op(op, a, b),
      _ => Err(CalcError::EvaluationError(
        "operands must be numbers".into(),
      )),
    },
  }
}

fn real_binary_op(
  op: BinaryOperator,
  a: f64,
  b: f64,
) -> Result<Value, CalcError> {
  match op {
    BinaryOperator::Plus => Ok(Value::Real(a + b)),
    BinaryOperator::Minus => Ok(Value::Real(a - b)),
    BinaryOperator::Times => Ok(Value::Real(a * b)),
    BinaryOperator::Divide => {
      if b == 0.0 {
        Err(CalcError::DivisionByZero)
      } else {
        Ok(Value::Real(a / b))
      }
    }
    BinaryOperator::Power => {
      // A negative base with a fractional exponent leaves the reals
      if a < 0.0 && b.is_finite() && b.fract() != 0.0 {
        let c = Complex::from_real(a).powc(Complex::from_real(b));
        Ok(Value::from_complex(c))
      } else {
        Ok(Value::Real(a.powf(b)))
      }
    }
  }
}

fn complex_binary_op(
  op: BinaryOperator,
  a: Complex,
  b: Complex,
) -> Result<Value, CalcError> {
  let c = match op {
    BinaryOperator::Plus => a + b,
    BinaryOperator::Minus => a - b,
    BinaryOperator::Times => a * b,
    BinaryOperator::Divide => {
      if b.is_zero() {
        return Err(CalcError::DivisionByZero);
      }
      a / b
    }
    BinaryOperator::Power => a.powc(b),
  };
  Ok(Value::from_complex(c))
}
