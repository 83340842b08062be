//! Function sampling, root finding and extrema over a viewing window.
//!
//! Every operation is a bounded, eager scan: results are rebuilt from
//! scratch on each call and probe the function only through
//! [`MathEngine::evaluate_at`].

mod roots;
mod table;
mod window;

use std::collections::BTreeMap;

use log::trace;
use serde::{Deserialize, Serialize};

use crate::MathEngine;

pub use roots::{
  BISECTION_ITERATIONS, BISECTION_TOLERANCE, SCAN_STEPS, ZERO_DEDUP_DISTANCE,
};
pub use table::{TABLE_ROWS, TableCell, TableRow, TableSettings};
pub use window::{GraphWindow, Point, UnknownPreset, ZOOM_FACTOR, ZoomPreset};

/// Sampling never drops below this many steps, however narrow the output.
pub const MIN_SAMPLES: usize = 500;
/// Grid resolution of the minimum/maximum search.
pub const EXTREMA_STEPS: usize = 1000;

/// One of the `Y1`..`Y10` slots of the function editor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphFunction {
  pub id: String,
  pub expression: String,
  pub color: String,
  pub enabled: bool,
}

impl GraphFunction {
  pub fn is_plottable(&self) -> bool {
    self.enabled && !self.expression.trim().is_empty()
  }
}

pub struct GraphEngine<'a> {
  math: &'a mut MathEngine,
}

impl<'a> GraphEngine<'a> {
  pub fn new(math: &'a mut MathEngine) -> GraphEngine<'a> {
    GraphEngine { math }
  }

  /// Sample evenly across `[x_min, x_max]` using
  /// `max(2 * width_hint, MIN_SAMPLES)` steps. Undefined and non-finite
  /// samples are left out, so gaps show up as jumps in `x`.
  pub fn generate_points(
    &mut self,
    expression: &str,
    window: &GraphWindow,
    width_hint: usize,
  ) -> Vec<Point> {
    if !window.has_x_range() {
      return Vec::new();
    }
    let steps = (width_hint.saturating_mul(2)).max(MIN_SAMPLES);
    let points: Vec<Point> = grid(window, steps)
      .filter_map(|x| {
        self.math.evaluate_at(expression, x).map(|y| Point { x, y })
      })
      .collect();
    trace!(
      "sampled {expression:?}: {} of {} points defined",
      points.len(),
      steps + 1
    );
    points
  }

  /// Smallest finite sample on a 1000-step grid; the first one wins ties.
  pub fn find_minimum(
    &mut self,
    expression: &str,
    window: &GraphWindow,
  ) -> Option<Point> {
    self.find_extreme(expression, window, |candidate, best| candidate < best)
  }

  /// Largest finite sample on a 1000-step grid; the first one wins ties.
  pub fn find_maximum(
    &mut self,
    expression: &str,
    window: &GraphWindow,
  ) -> Option<Point> {
    self.find_extreme(expression, window, |candidate, best| candidate > best)
  }

  fn find_extreme(
    &mut self,
    expression: &str,
    window: &GraphWindow,
    better: fn(f64, f64) -> bool,
  ) -> Option<Point> {
    if !window.has_x_range() {
      return None;
    }
    let mut best: Option<Point> = None;
    for x in grid(window, EXTREMA_STEPS) {
      if let Some(y) = self.math.evaluate_at(expression, x) {
        match best {
          Some(point) if !better(y, point.y) => {}
          _ => best = Some(Point { x, y }),
        }
      }
    }
    best
  }

  /// The value under the trace cursor.
  pub fn trace(&mut self, expression: &str, x: f64) -> Option<f64> {
    self.math.evaluate_at(expression, x)
  }

  pub fn zoom_presets() -> BTreeMap<&'static str, GraphWindow> {
    ZoomPreset::table()
  }

  pub fn zoom_in(window: &GraphWindow, factor: f64) -> GraphWindow {
    window.zoom_in(factor)
  }

  pub fn zoom_out(window: &GraphWindow, factor: f64) -> GraphWindow {
    window.zoom_out(factor)
  }
}

/// `steps + 1` evenly spaced abscissae from `x_min` to `x_max` inclusive.
fn grid(window: &GraphWindow, steps: usize) -> impl Iterator<Item = f64> {
  let x_min = window.x_min;
  let step = (window.x_max - window.x_min) / steps as f64;
  (0..=steps).map(move |i| x_min + i as f64 * step)
}
