//! Variable memory for one calculator session.
//!
//! The persistent keys are `Ans` and the letters `A`..`Z` except `X`, which
//! is reserved for the graphing variable and only exists while a
//! [`XBinding`] is alive.

use std::collections::{BTreeMap, HashMap};
use std::ops::Deref;

pub const ANS: &str = "Ans";
pub const GRAPH_VARIABLE: &str = "X";

pub const PERSISTENT_NAMES: [&str; 26] = [
  "Ans", "A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K", "L", "M",
  "N", "O", "P", "Q", "R", "S", "T", "U", "V", "W", "Y", "Z",
];

#[derive(Debug, Clone)]
pub struct Scope {
  values: HashMap<&'static str, f64>,
  x: Option<f64>,
}

impl Default for Scope {
  fn default() -> Self {
    Scope {
      values: PERSISTENT_NAMES.iter().map(|name| (*name, 0.0)).collect(),
      x: None,
    }
  }
}

impl Scope {
  pub fn new() -> Scope {
    Scope::default()
  }

  /// Resolve a name for evaluation. `X` only resolves while bound.
  pub fn lookup(&self, name: &str) -> Option<f64> {
    if name == GRAPH_VARIABLE {
      return self.x;
    }
    self.values.get(name).copied()
  }

  /// Overwrite an existing key. Returns false, changing nothing, for names
  /// outside the fixed key set.
  pub fn store(&mut self, name: &str, value: f64) -> bool {
    match self.values.get_mut(name) {
      Some(slot) => {
        *slot = value;
        true
      }
      None => false,
    }
  }

  pub fn ans(&self) -> f64 {
    self.values.get(ANS).copied().unwrap_or(0.0)
  }

  pub fn set_ans(&mut self, value: f64) {
    self.store(ANS, value);
  }

  pub fn snapshot(&self) -> BTreeMap<String, f64> {
    self
      .values
      .iter()
      .map(|(name, value)| (name.to_string(), *value))
      .collect()
  }

  /// Bind `X` for the lifetime of the returned guard. The previous binding
  /// is restored when the guard drops, on every path.
  pub fn bind_x(&mut self, x: f64) -> XBinding<'_> {
    let previous = self.x.replace(x);
    XBinding {
      scope: self,
      previous,
    }
  }
}

pub struct XBinding<'a> {
  scope: &'a mut Scope,
  previous: Option<f64>,
}

impl Deref for XBinding<'_> {
  type Target = Scope;

  fn deref(&self) -> &Scope {
    self.scope
  }
}

impl Drop for XBinding<'_> {
  fn drop(&mut self) {
    self.scope.x = self.previous;
  }
}
