use log::debug;

use super::{GraphEngine, GraphWindow, Point};
use crate::MathEngine;

/// Coarse scan used to bracket sign changes.
pub const SCAN_STEPS: usize = 100;
pub const BISECTION_ITERATIONS: usize = 100;
pub const BISECTION_TOLERANCE: f64 = 1e-10;
/// Roots closer than this to an already reported root are dropped.
pub const ZERO_DEDUP_DISTANCE: f64 = 0.001;

impl GraphEngine<'_> {
  /// Roots of `expression` in the window, in ascending `x`.
  ///
  /// Only strict sign changes between neighbouring scan points are
  /// bracketed, so tangent roots such as `X^2` at 0 are missed.
  pub fn find_zeros(
    &mut self,
    expression: &str,
    window: &GraphWindow,
  ) -> Vec<f64> {
    let mut zeros: Vec<f64> = Vec::new();
    for (x1, x2) in brackets(window) {
      let (Some(y1), Some(y2)) = (
        self.math.evaluate_at(expression, x1),
        self.math.evaluate_at(expression, x2),
      ) else {
        continue;
      };
      if y1 * y2 >= 0.0 {
        continue;
      }
      if let Some(root) = bisection(self.math, expression, x1, x2) {
        if zeros.iter().all(|z| (z - root).abs() >= ZERO_DEDUP_DISTANCE) {
          zeros.push(root);
        }
      }
    }
    zeros
  }

  /// Crossings of two functions, located on their difference. Every
  /// bracketed crossing is reported; near-duplicates are not merged.
  pub fn find_intersection(
    &mut self,
    first: &str,
    second: &str,
    window: &GraphWindow,
  ) -> Vec<Point> {
    let mut crossings = Vec::new();
    for (x1, x2) in brackets(window) {
      let (Some(a1), Some(b1), Some(a2), Some(b2)) = (
        self.math.evaluate_at(first, x1),
        self.math.evaluate_at(second, x1),
        self.math.evaluate_at(first, x2),
        self.math.evaluate_at(second, x2),
      ) else {
        continue;
      };
      if (a1 - b1) * (a2 - b2) >= 0.0 {
        continue;
      }
      let x = bisection_diff(self.math, first, second, x1, x2);
      if let Some(y) = self.math.evaluate_at(first, x) {
        crossings.push(Point { x, y });
      }
    }
    crossings
  }
}

/// Neighbouring scan points `(x, x + step)`. Scan points are a running
/// sum from `x_min`, not `x_min + i * step`.
fn brackets(window: &GraphWindow) -> impl Iterator<Item = (f64, f64)> {
  let x_max = window.x_max;
  let step = (window.x_max - window.x_min) / SCAN_STEPS as f64;
  let start = window.has_x_range().then_some(window.x_min);
  std::iter::successors(start, move |x| Some(x + step))
    .take_while(move |&x| x < x_max)
    .take(SCAN_STEPS + 1)
    .map(move |x| (x, x + step))
}

/// Halve `[a, b]` until the midpoint value drops below tolerance, falling
/// back to the last midpoint. Gives up if the function is undefined
/// anywhere it probes.
fn bisection(
  math: &mut MathEngine,
  expression: &str,
  mut a: f64,
  mut b: f64,
) -> Option<f64> {
  let mut fa = math.evaluate_at(expression, a)?;
  for _ in 0..BISECTION_ITERATIONS {
    let c = (a + b) / 2.0;
    let fc = math.evaluate_at(expression, c)?;
    if fc.abs() < BISECTION_TOLERANCE {
      return Some(c);
    }
    if fc * fa < 0.0 {
      b = c;
    } else {
      a = c;
      fa = fc;
    }
  }
  debug!("bisection of {expression:?} did not settle, using midpoint");
  Some((a + b) / 2.0)
}

/// Bisection on `first - second`. Undefined probes count as zero.
fn bisection_diff(
  math: &mut MathEngine,
  first: &str,
  second: &str,
  mut a: f64,
  mut b: f64,
) -> f64 {
  let mut diff = |x: f64| {
    math.evaluate_at(first, x).unwrap_or(0.0)
      - math.evaluate_at(second, x).unwrap_or(0.0)
  };
  let mut fa = diff(a);
  for _ in 0..BISECTION_ITERATIONS {
    let c = (a + b) / 2.0;
    let fc = diff(c);
    if fc.abs() < BISECTION_TOLERANCE {
      return c;
    }
    if fc * fa < 0.0 {
      b = c;
    } else {
      a = c;
      fa = fc;
    }
  }
  (a + b) / 2.0
}
