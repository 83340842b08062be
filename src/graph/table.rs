use serde::{Deserialize, Serialize};

use super::{GraphEngine, GraphFunction};

/// Rows shown on the table screen.
pub const TABLE_ROWS: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableSettings {
  pub tbl_start: f64,
  pub tbl_step: f64,
}

impl Default for TableSettings {
  fn default() -> Self {
    TableSettings {
      tbl_start: -5.0,
      tbl_step: 1.0,
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum TableCell {
  Value(f64),
  Error,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableRow {
  pub x: f64,
  pub cells: Vec<TableCell>,
}

impl GraphEngine<'_> {
  /// One row per `x = tbl_start + i * tbl_step`, one cell per function in
  /// the order given.
  pub fn table(
    &mut self,
    functions: &[&GraphFunction],
    settings: &TableSettings,
  ) -> Vec<TableRow> {
    (0..TABLE_ROWS)
      .map(|i| {
        let x = settings.tbl_start + i as f64 * settings.tbl_step;
        let cells = functions
          .iter()
          .map(|function| match self.trace(&function.expression, x) {
            Some(y) => TableCell::Value(y),
            None => TableCell::Error,
          })
          .collect();
        TableRow { x, cells }
      })
      .collect()
  }
}
