//! State behind the calculator screens: the input line, history, the
//! `Y=` editor slots, and the window and table settings.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::format::format_result;
use crate::graph::{
  GraphEngine, GraphFunction, GraphWindow, Point, TableRow, TableSettings,
  ZoomPreset,
};
use crate::{ErrorKind, EvaluationResult, MathEngine};

/// Only the most recent entries are kept.
pub const HISTORY_LIMIT: usize = 10;
pub const GRAPH_SLOTS: usize = 10;
pub const GRAPH_COLORS: [&str; 8] = [
  "#ff6b6b", "#4ecdc4", "#45b7d1", "#96ceb4", "#ffeaa7", "#dfe6e9", "#fd79a8",
  "#a29bfe",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
  #[default]
  Calc,
  Graph,
  Table,
  Window,
  YEditor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Modifier {
  #[default]
  None,
  Second,
  Alpha,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
  pub input: String,
  pub result: String,
}

/// Any subset of the window fields; `None` leaves a field unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowUpdate {
  pub x_min: Option<f64>,
  pub x_max: Option<f64>,
  pub y_min: Option<f64>,
  pub y_max: Option<f64>,
  pub x_scl: Option<f64>,
  pub y_scl: Option<f64>,
}

impl WindowUpdate {
  pub fn apply_to(&self, window: &mut GraphWindow) {
    let fields = [
      (self.x_min, &mut window.x_min),
      (self.x_max, &mut window.x_max),
      (self.y_min, &mut window.y_min),
      (self.y_max, &mut window.y_max),
      (self.x_scl, &mut window.x_scl),
      (self.y_scl, &mut window.y_scl),
    ];
    for (update, field) in fields {
      if let Some(value) = update {
        *field = value;
      }
    }
  }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableSettingsUpdate {
  pub tbl_start: Option<f64>,
  pub tbl_step: Option<f64>,
}

/// One calculator: the engine with its variable memory plus everything the
/// screens display.
#[derive(Debug)]
pub struct Calculator {
  engine: MathEngine,
  mode: Mode,
  modifier: Modifier,
  input: String,
  display: String,
  error: Option<ErrorKind>,
  history: Vec<HistoryEntry>,
  graph_functions: Vec<GraphFunction>,
  active_graph_function: usize,
  window: GraphWindow,
  table_settings: TableSettings,
}

impl Default for Calculator {
  fn default() -> Self {
    Calculator::new(MathEngine::new())
  }
}

impl Calculator {
  pub fn new(engine: MathEngine) -> Calculator {
    let graph_functions = (0..GRAPH_SLOTS)
      .map(|i| GraphFunction {
        id: format!("Y{}", i + 1),
        expression: String::new(),
        color: GRAPH_COLORS[i % GRAPH_COLORS.len()].to_string(),
        enabled: true,
      })
      .collect();
    Calculator {
      engine,
      mode: Mode::default(),
      modifier: Modifier::default(),
      input: String::new(),
      display: String::new(),
      error: None,
      history: Vec::new(),
      graph_functions,
      active_graph_function: 0,
      window: GraphWindow::default(),
      table_settings: TableSettings::default(),
    }
  }

  pub fn engine(&self) -> &MathEngine {
    &self.engine
  }

  pub fn mode(&self) -> Mode {
    self.mode
  }

  pub fn set_mode(&mut self, mode: Mode) {
    self.mode = mode;
    self.modifier = Modifier::None;
  }

  pub fn modifier(&self) -> Modifier {
    self.modifier
  }

  /// Pressing the active modifier again releases it.
  pub fn set_modifier(&mut self, modifier: Modifier) {
    self.modifier = if self.modifier == modifier {
      Modifier::None
    } else {
      modifier
    };
  }

  pub fn input_line(&self) -> &str {
    &self.input
  }

  pub fn display(&self) -> &str {
    &self.display
  }

  pub fn error(&self) -> Option<ErrorKind> {
    self.error
  }

  pub fn history(&self) -> &[HistoryEntry] {
    &self.history
  }

  pub fn input(&mut self, text: &str) {
    self.input.push_str(text);
    self.error = None;
    self.modifier = Modifier::None;
  }

  pub fn clear(&mut self) {
    self.input.clear();
    self.error = None;
    self.modifier = Modifier::None;
  }

  /// Like [`Calculator::clear`] but keeps a pending modifier.
  pub fn clear_entry(&mut self) {
    self.input.clear();
    self.error = None;
  }

  pub fn delete(&mut self) {
    self.input.pop();
    self.error = None;
  }

  pub fn use_ans(&mut self) {
    self.input.push_str(crate::scope::ANS);
  }

  /// Evaluate the input line. Blank input is ignored and yields `None`.
  pub fn submit(&mut self) -> Option<EvaluationResult> {
    if self.input.trim().is_empty() {
      return None;
    }
    let result = self.engine.evaluate(&self.input);
    match result {
      Ok(value) => {
        let formatted = format_result(value);
        if self.history.len() >= HISTORY_LIMIT {
          let excess = self.history.len() + 1 - HISTORY_LIMIT;
          self.history.drain(..excess);
        }
        self.history.push(HistoryEntry {
          input: std::mem::take(&mut self.input),
          result: formatted.clone(),
        });
        self.display = formatted;
        self.error = None;
      }
      Err(kind) => {
        debug!("submit failed with {kind}");
        self.error = Some(kind);
      }
    }
    self.modifier = Modifier::None;
    Some(result)
  }

  /// Keyboard shortcuts: digits and operators are typed (`*` and `/` as
  /// their glyphs), Enter submits, Backspace deletes, Escape clears.
  /// Returns whether the key was recognised.
  pub fn press_key(&mut self, key: &str) -> bool {
    let glyph = match key {
      "*" => "×",
      "/" => "÷",
      "+" | "-" | "^" | "(" | ")" | "." => key,
      _ if key.len() == 1 && key.chars().all(|c| c.is_ascii_digit()) => key,
      "Enter" => {
        self.submit();
        return true;
      }
      "Backspace" => {
        self.delete();
        return true;
      }
      "Escape" => {
        self.clear();
        return true;
      }
      _ => return false,
    };
    self.input(glyph);
    true
  }

  pub fn store(&mut self, name: &str, value: f64) {
    self.engine.store_variable(name, value);
  }

  pub fn graph_functions(&self) -> &[GraphFunction] {
    &self.graph_functions
  }

  pub fn set_graph_function(&mut self, index: usize, expression: &str) {
    if let Some(function) = self.graph_functions.get_mut(index) {
      function.expression = expression.to_string();
    }
  }

  pub fn toggle_graph_function(&mut self, index: usize) {
    if let Some(function) = self.graph_functions.get_mut(index) {
      function.enabled = !function.enabled;
    }
  }

  pub fn active_graph_function(&self) -> usize {
    self.active_graph_function
  }

  pub fn set_active_graph_function(&mut self, index: usize) {
    if index < self.graph_functions.len() {
      self.active_graph_function = index;
    }
  }

  /// Enabled slots with a non-blank expression.
  pub fn active_functions(&self) -> Vec<&GraphFunction> {
    self
      .graph_functions
      .iter()
      .filter(|function| function.is_plottable())
      .collect()
  }

  pub fn window(&self) -> &GraphWindow {
    &self.window
  }

  pub fn update_window(&mut self, update: &WindowUpdate) {
    update.apply_to(&mut self.window);
  }

  pub fn zoom(&mut self, preset: ZoomPreset) {
    self.window = preset.window();
  }

  pub fn zoom_in(&mut self, factor: f64) {
    self.window = GraphEngine::zoom_in(&self.window, factor);
  }

  pub fn zoom_out(&mut self, factor: f64) {
    self.window = GraphEngine::zoom_out(&self.window, factor);
  }

  pub fn table_settings(&self) -> &TableSettings {
    &self.table_settings
  }

  pub fn update_table_settings(&mut self, update: &TableSettingsUpdate) {
    if let Some(start) = update.tbl_start {
      self.table_settings.tbl_start = start;
    }
    if let Some(step) = update.tbl_step {
      self.table_settings.tbl_step = step;
    }
  }

  /// Sampled curves for every active function, keyed by slot id.
  pub fn plot(&mut self, width_hint: usize) -> Vec<(String, Vec<Point>)> {
    let functions: Vec<&GraphFunction> = self
      .graph_functions
      .iter()
      .filter(|function| function.is_plottable())
      .collect();
    let mut graph = GraphEngine::new(&mut self.engine);
    functions
      .into_iter()
      .map(|function| {
        let points =
          graph.generate_points(&function.expression, &self.window, width_hint);
        (function.id.clone(), points)
      })
      .collect()
  }

  /// Table screen rows for the active functions.
  pub fn table(&mut self) -> Vec<TableRow> {
    let functions: Vec<&GraphFunction> = self
      .graph_functions
      .iter()
      .filter(|function| function.is_plottable())
      .collect();
    GraphEngine::new(&mut self.engine).table(&functions, &self.table_settings)
  }
}
