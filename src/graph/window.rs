use std::collections::BTreeMap;
use std::f64::consts::PI;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Default factor for the zoom keys.
pub const ZOOM_FACTOR: f64 = 2.0;

/// Viewing rectangle plus tick spacing. `x_min < x_max` and
/// `y_min < y_max` are the caller's responsibility.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphWindow {
  pub x_min: f64,
  pub x_max: f64,
  pub y_min: f64,
  pub y_max: f64,
  pub x_scl: f64,
  pub y_scl: f64,
}

impl Default for GraphWindow {
  fn default() -> Self {
    ZoomPreset::Standard.window()
  }
}

impl GraphWindow {
  /// True when the x range can be sampled.
  pub fn has_x_range(&self) -> bool {
    self.x_min.is_finite() && self.x_max.is_finite() && self.x_min < self.x_max
  }

  /// Recenter on the midpoint and divide both ranges by `factor`. Tick
  /// spacing is kept.
  pub fn zoom_in(&self, factor: f64) -> GraphWindow {
    let x_center = (self.x_min + self.x_max) / 2.0;
    let y_center = (self.y_min + self.y_max) / 2.0;
    let x_range = (self.x_max - self.x_min) / factor;
    let y_range = (self.y_max - self.y_min) / factor;
    GraphWindow {
      x_min: x_center - x_range / 2.0,
      x_max: x_center + x_range / 2.0,
      y_min: y_center - y_range / 2.0,
      y_max: y_center + y_range / 2.0,
      ..*self
    }
  }

  pub fn zoom_out(&self, factor: f64) -> GraphWindow {
    self.zoom_in(1.0 / factor)
  }
}

/// One sample of a function.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
  pub x: f64,
  pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ZoomPreset {
  Standard,
  Trig,
  Decimal,
  Square,
  Integer,
}

impl ZoomPreset {
  pub const ALL: [ZoomPreset; 5] = [
    ZoomPreset::Standard,
    ZoomPreset::Trig,
    ZoomPreset::Decimal,
    ZoomPreset::Square,
    ZoomPreset::Integer,
  ];

  pub fn name(self) -> &'static str {
    match self {
      ZoomPreset::Standard => "standard",
      ZoomPreset::Trig => "trig",
      ZoomPreset::Decimal => "decimal",
      ZoomPreset::Square => "square",
      ZoomPreset::Integer => "integer",
    }
  }

  pub fn window(self) -> GraphWindow {
    match self {
      ZoomPreset::Standard => GraphWindow {
        x_min: -10.0,
        x_max: 10.0,
        y_min: -10.0,
        y_max: 10.0,
        x_scl: 1.0,
        y_scl: 1.0,
      },
      ZoomPreset::Trig => GraphWindow {
        x_min: -2.0 * PI,
        x_max: 2.0 * PI,
        y_min: -4.0,
        y_max: 4.0,
        x_scl: PI / 2.0,
        y_scl: 1.0,
      },
      ZoomPreset::Decimal => GraphWindow {
        x_min: -4.7,
        x_max: 4.7,
        y_min: -3.1,
        y_max: 3.1,
        x_scl: 1.0,
        y_scl: 1.0,
      },
      ZoomPreset::Square => GraphWindow {
        x_min: -15.16,
        x_max: 15.16,
        y_min: -10.0,
        y_max: 10.0,
        x_scl: 1.0,
        y_scl: 1.0,
      },
      ZoomPreset::Integer => GraphWindow {
        x_min: -47.0,
        x_max: 47.0,
        y_min: -31.0,
        y_max: 31.0,
        x_scl: 10.0,
        y_scl: 10.0,
      },
    }
  }

  pub fn table() -> BTreeMap<&'static str, GraphWindow> {
    ZoomPreset::ALL
      .iter()
      .map(|preset| (preset.name(), preset.window()))
      .collect()
  }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown zoom preset {0:?}")]
pub struct UnknownPreset(pub String);

impl FromStr for ZoomPreset {
  type Err = UnknownPreset;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    ZoomPreset::ALL
      .iter()
      .copied()
      .find(|preset| preset.name().eq_ignore_ascii_case(s))
      .ok_or_else(|| UnknownPreset(s.to_string()))
  }
}
