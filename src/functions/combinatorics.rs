use super::{expect_arity, real_arg};
use crate::CalcError;
use crate::value::Value;

/// Largest n whose factorial is finite in f64.
const MAX_FINITE_FACTORIAL: f64 = 170.0;

/// factorial[n] / n! - non-negative integers only
pub fn factorial(n: Value) -> Result<Value, CalcError> {
  let n = whole_number("factorial", &n)?;
  if n > MAX_FINITE_FACTORIAL {
    return Ok(Value::Real(f64::INFINITY));
  }
  Ok(Value::Real(falling_product(n, n)))
}

/// nPr[n, r] = n! / (n - r)!
pub fn permutations(args: Vec<Value>) -> Result<Value, CalcError> {
  let (n, r) = pair("nPr", &args)?;
  Ok(Value::Real(falling_product(n, r)))
}

/// nCr[n, r] = n! / (r! (n - r)!)
pub fn combinations(args: Vec<Value>) -> Result<Value, CalcError> {
  let (n, r) = pair("nCr", &args)?;
  let k = r.min(n - r);
  let mut acc: f64 = 1.0;
  let mut i = 1.0;
  while i <= k {
    acc = acc * (n - k + i) / i;
    if !acc.is_finite() {
      return Ok(Value::Real(f64::INFINITY));
    }
    i += 1.0;
  }
  Ok(Value::Real(acc.round()))
}

/// n (n-1) ... (n-k+1)
fn falling_product(n: f64, k: f64) -> f64 {
  let mut acc: f64 = 1.0;
  let mut i = 0.0;
  while i < k && acc.is_finite() {
    acc *= n - i;
    i += 1.0;
  }
  acc
}

fn pair(name: &str, args: &[Value]) -> Result<(f64, f64), CalcError> {
  expect_arity(name, args, 2..=2, "2")?;
  let n = whole_number(name, &args[0])?;
  let r = whole_number(name, &args[1])?;
  if r > n {
    return Err(CalcError::Domain(name.to_string()));
  }
  Ok((n, r))
}

fn whole_number(name: &str, value: &Value) -> Result<f64, CalcError> {
  let n = real_arg(name, value)?;
  if n < 0.0 || n.fract() != 0.0 || !n.is_finite() {
    return Err(CalcError::Domain(name.to_string()));
  }
  Ok(n)
}
