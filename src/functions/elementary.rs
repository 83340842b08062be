use super::{expect_arity, real_arg};
use crate::CalcError;
use crate::value::{Complex, Value};

/// sqrt[x] - negative arguments give the principal imaginary root
pub fn sqrt(x: Value) -> Result<Value, CalcError> {
  match x {
    Value::Real(n) if n >= 0.0 || n.is_nan() => Ok(Value::Real(n.sqrt())),
    other => numeric("sqrt", &other).map(|z| Value::from_complex(z.sqrt())),
  }
}

pub fn cbrt(x: Value) -> Result<Value, CalcError> {
  Ok(Value::Real(real_arg("cbrt", &x)?.cbrt()))
}

/// ln[x] - natural logarithm
pub fn ln(x: Value) -> Result<Value, CalcError> {
  natural_log("ln", &x).map(Value::from_complex)
}

/// log[x] or log[x, b] - base 10 unless a base is given
pub fn log(mut args: Vec<Value>) -> Result<Value, CalcError> {
  expect_arity("log", &args, 1..=2, "1 or 2")?;
  let base = if args.len() == 2 { args.pop() } else { None };
  let x = match args.pop() {
    Some(x) => x,
    None => return Err(CalcError::EvaluationError("log: no argument".into())),
  };
  if let Value::List(items) = x {
    return items
      .into_iter()
      .map(|item| {
        let mut inner = vec![item];
        inner.extend(base.clone());
        log(inner)
      })
      .collect::<Result<Vec<_>, _>>()
      .map(Value::List);
  }
  let numerator = natural_log("log", &x)?;
  let denominator = match base {
    Some(b) => natural_log("log", &b)?,
    None => Complex::from_real(std::f64::consts::LN_10),
  };
  if denominator.is_zero() {
    return Err(CalcError::DivisionByZero);
  }
  if numerator.im == 0.0 && denominator.im == 0.0 {
    return Ok(Value::Real(numerator.re / denominator.re));
  }
  Ok(Value::from_complex(numerator / denominator))
}

pub fn exp(x: Value) -> Result<Value, CalcError> {
  match x {
    Value::Real(n) => Ok(Value::Real(n.exp())),
    other => numeric("exp", &other).map(|z| Value::from_complex(z.exp())),
  }
}

/// abs[x] - modulus for complex arguments
pub fn abs(x: Value) -> Result<Value, CalcError> {
  match x {
    Value::Real(n) => Ok(Value::Real(n.abs())),
    other => numeric("abs", &other).map(|z| Value::Real(z.norm())),
  }
}

/// int[x] - truncate toward zero
pub fn int_part(x: Value) -> Result<Value, CalcError> {
  Ok(Value::Real(real_arg("int", &x)?.trunc()))
}

/// fPart[x] - x minus its truncation
pub fn frac_part(x: Value) -> Result<Value, CalcError> {
  let n = real_arg("fPart", &x)?;
  Ok(Value::Real(n - n.trunc()))
}

/// roundN[x, n] - round half up at n decimals (n defaults to 0)
pub fn round_n(name: &str, args: Vec<Value>) -> Result<Value, CalcError> {
  expect_arity(name, &args, 1..=2, "1 or 2")?;
  let digits = match args.get(1) {
    Some(n) => real_arg(name, n)?,
    None => 0.0,
  };
  let factor = 10_f64.powf(digits);
  match &args[0] {
    Value::List(items) => items
      .iter()
      .map(|item| Ok(Value::Real(round_half_up(real_arg(name, item)?, factor))))
      .collect::<Result<Vec<_>, _>>()
      .map(Value::List),
    x => Ok(Value::Real(round_half_up(real_arg(name, x)?, factor))),
  }
}

pub fn round_half_up(x: f64, factor: f64) -> f64 {
  (x * factor + 0.5).floor() / factor
}

fn natural_log(name: &str, x: &Value) -> Result<Complex, CalcError> {
  let z = numeric(name, x)?;
  if z.is_zero() {
    return Err(CalcError::Domain(name.to_string()));
  }
  if z.im == 0.0 && (z.re > 0.0 || z.re.is_nan()) {
    return Ok(Complex::from_real(z.re.ln()));
  }
  Ok(z.ln())
}

fn numeric(name: &str, x: &Value) -> Result<Complex, CalcError> {
  x.as_complex().ok_or_else(|| {
    CalcError::EvaluationError(format!("{name} expects a number"))
  })
}
