use std::collections::BTreeMap;

use log::debug;

use crate::evaluator::evaluate_expr;
use crate::normalize::normalize;
use crate::scope::Scope;
use crate::syntax::string_to_expr;
use crate::value::Value;
use crate::{CalcError, ErrorKind, EvaluationResult};

/// The calculator's expression engine. Owns the variable memory for one
/// session; every evaluation re-normalizes and re-parses its input.
#[derive(Debug, Default)]
pub struct MathEngine {
  scope: Scope,
}

impl MathEngine {
  pub fn new() -> MathEngine {
    MathEngine::default()
  }

  /// Evaluate calculator notation. `Ans` is overwritten on success only.
  ///
  /// A NaN produced by the underlying math is still a success here; turning
  /// it into an error token is the formatter's job.
  pub fn evaluate(&mut self, expression: &str) -> EvaluationResult {
    let result = compute(expression, &self.scope);
    if let Ok(value) = result {
      self.scope.set_ans(value);
    }
    result
  }

  /// Evaluate with `X` bound to `x`. Returns `None` for failures and
  /// non-finite values. Neither `X` nor `Ans` is changed afterwards.
  pub fn evaluate_at(&mut self, expression: &str, x: f64) -> Option<f64> {
    let bound = self.scope.bind_x(x);
    compute(expression, &bound)
      .ok()
      .filter(|value| value.is_finite())
  }

  /// Overwrite one of the fixed variables. Unknown names are ignored.
  pub fn store_variable(&mut self, name: &str, value: f64) {
    if !self.scope.store(name, value) {
      debug!("ignoring store to unknown variable {name:?}");
    }
  }

  /// Current value of a variable, 0 for unknown names.
  pub fn get_variable(&self, name: &str) -> f64 {
    self.scope.lookup(name).unwrap_or(0.0)
  }

  pub fn get_ans(&self) -> f64 {
    self.scope.ans()
  }

  /// A copy of the variable memory.
  pub fn get_all_variables(&self) -> BTreeMap<String, f64> {
    self.scope.snapshot()
  }
}

fn compute(expression: &str, scope: &Scope) -> EvaluationResult {
  let canonical = normalize(expression);
  match evaluate_canonical(&canonical, scope) {
    Ok(value) => classify_value(value),
    Err(err) => {
      let kind = ErrorKind::classify(&err);
      debug!("{expression:?} (as {canonical:?}) failed: {err} -> {kind}");
      Err(kind)
    }
  }
}

fn evaluate_canonical(
  canonical: &str,
  scope: &Scope,
) -> Result<Value, CalcError> {
  let expr = string_to_expr(canonical)?;
  evaluate_expr(&expr, scope)
}

fn classify_value(value: Value) -> EvaluationResult {
  match value {
    Value::Real(n) => Ok(n),
    Value::Complex(c) if c.has_negligible_imaginary() => Ok(c.re),
    Value::Complex(_) => Err(ErrorKind::NonReal),
    Value::List(_) => Err(ErrorKind::DataType),
  }
}
