use super::real_arg;
use crate::CalcError;
use crate::value::Value;

pub fn sin(x: Value) -> Result<Value, CalcError> {
  Ok(Value::Real(real_arg("sin", &x)?.sin()))
}

pub fn cos(x: Value) -> Result<Value, CalcError> {
  Ok(Value::Real(real_arg("cos", &x)?.cos()))
}

pub fn tan(x: Value) -> Result<Value, CalcError> {
  Ok(Value::Real(real_arg("tan", &x)?.tan()))
}

/// Inverse sine; outside [-1, 1] the principal complex value is returned.
pub fn asin(x: Value) -> Result<Value, CalcError> {
  match x.as_real() {
    Some(n) if (-1.0..=1.0).contains(&n) => Ok(Value::Real(n.asin())),
    _ => complex_arg("asin", &x).map(|z| Value::from_complex(z.asin())),
  }
}

/// Inverse cosine; outside [-1, 1] the principal complex value is returned.
pub fn acos(x: Value) -> Result<Value, CalcError> {
  match x.as_real() {
    Some(n) if (-1.0..=1.0).contains(&n) => Ok(Value::Real(n.acos())),
    _ => complex_arg("acos", &x).map(|z| Value::from_complex(z.acos())),
  }
}

pub fn atan(x: Value) -> Result<Value, CalcError> {
  Ok(Value::Real(real_arg("atan", &x)?.atan()))
}

pub fn sinh(x: Value) -> Result<Value, CalcError> {
  Ok(Value::Real(real_arg("sinh", &x)?.sinh()))
}

pub fn cosh(x: Value) -> Result<Value, CalcError> {
  Ok(Value::Real(real_arg("cosh", &x)?.cosh()))
}

pub fn tanh(x: Value) -> Result<Value, CalcError> {
  Ok(Value::Real(real_arg("tanh", &x)?.tanh()))
}

fn complex_arg(
  name: &str,
  x: &Value,
) -> Result<crate::value::Complex, CalcError> {
  x.as_complex().ok_or_else(|| {
    CalcError::EvaluationError(format!("{name} expects a number"))
  })
}
