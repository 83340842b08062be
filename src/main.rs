use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use ticalc::format::{format_result, format_table_value};
use ticalc::graph::{TableCell, TableSettings};
use ticalc::{GraphEngine, GraphFunction, GraphWindow, MathEngine, ZoomPreset};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Evaluate expressions in calculator notation, one session for all
  Eval {
    /// Expressions to evaluate in order (`Ans` carries over)
    #[arg(required = true)]
    expressions: Vec<String>,
  },
  /// Sample a function of X across the window
  Points {
    expression: String,
    #[command(flatten)]
    window: WindowArgs,
    /// Output width in pixels; sets the sampling resolution
    #[arg(long, default_value_t = 0)]
    width: usize,
  },
  /// Roots of a function of X inside the window
  Zeros {
    expression: String,
    #[command(flatten)]
    window: WindowArgs,
  },
  /// Lowest point of a function inside the window
  Minimum {
    expression: String,
    #[command(flatten)]
    window: WindowArgs,
  },
  /// Highest point of a function inside the window
  Maximum {
    expression: String,
    #[command(flatten)]
    window: WindowArgs,
  },
  /// Crossings of two functions inside the window
  Intersect {
    first: String,
    second: String,
    #[command(flatten)]
    window: WindowArgs,
  },
  /// Value of a function at one X
  Trace {
    expression: String,
    #[arg(allow_hyphen_values = true)]
    x: f64,
  },
  /// Ten-row value table for one or more functions
  Table {
    #[arg(required = true)]
    expressions: Vec<String>,
    #[arg(long, allow_hyphen_values = true)]
    start: Option<f64>,
    #[arg(long, allow_hyphen_values = true)]
    step: Option<f64>,
  },
  /// Print the zoom presets
  Presets,
}

#[derive(Args)]
struct WindowArgs {
  /// Starting preset, before any per-field overrides
  #[arg(long, default_value = "standard")]
  zoom: String,
  #[arg(long, allow_hyphen_values = true)]
  x_min: Option<f64>,
  #[arg(long, allow_hyphen_values = true)]
  x_max: Option<f64>,
  #[arg(long, allow_hyphen_values = true)]
  y_min: Option<f64>,
  #[arg(long, allow_hyphen_values = true)]
  y_max: Option<f64>,
  #[arg(long)]
  x_scl: Option<f64>,
  #[arg(long)]
  y_scl: Option<f64>,
}

impl WindowArgs {
  fn resolve(&self) -> Result<GraphWindow> {
    let preset: ZoomPreset = self.zoom.parse()?;
    let mut window = preset.window();
    let update = ticalc::session::WindowUpdate {
      x_min: self.x_min,
      x_max: self.x_max,
      y_min: self.y_min,
      y_max: self.y_max,
      x_scl: self.x_scl,
      y_scl: self.y_scl,
    };
    update.apply_to(&mut window);
    if !window.has_x_range() {
      bail!(
        "x-min must be below x-max (got {} and {})",
        window.x_min,
        window.x_max
      );
    }
    Ok(window)
  }
}

fn main() -> Result<()> {
  env_logger::Builder::from_env(
    env_logger::Env::default().default_filter_or("warn"),
  )
  .init();

  let cli = Cli::parse();
  let mut engine = MathEngine::new();

  match cli.command {
    Commands::Eval { expressions } => {
      for expression in expressions {
        match engine.evaluate(&expression) {
          Ok(value) => println!("{}", format_result(value)),
          Err(kind) => println!("{kind}"),
        }
      }
    }
    Commands::Points { expression, window, width } => {
      let window = window.resolve()?;
      let mut graph = GraphEngine::new(&mut engine);
      print_json(&graph.generate_points(&expression, &window, width))?;
    }
    Commands::Zeros { expression, window } => {
      let window = window.resolve()?;
      let mut graph = GraphEngine::new(&mut engine);
      print_json(&graph.find_zeros(&expression, &window))?;
    }
    Commands::Minimum { expression, window } => {
      let window = window.resolve()?;
      let mut graph = GraphEngine::new(&mut engine);
      print_json(&graph.find_minimum(&expression, &window))?;
    }
    Commands::Maximum { expression, window } => {
      let window = window.resolve()?;
      let mut graph = GraphEngine::new(&mut engine);
      print_json(&graph.find_maximum(&expression, &window))?;
    }
    Commands::Intersect { first, second, window } => {
      let window = window.resolve()?;
      let mut graph = GraphEngine::new(&mut engine);
      print_json(&graph.find_intersection(&first, &second, &window))?;
    }
    Commands::Trace { expression, x } => {
      print_json(&GraphEngine::new(&mut engine).trace(&expression, x))?;
    }
    Commands::Table { expressions, start, step } => {
      let defaults = TableSettings::default();
      let settings = TableSettings {
        tbl_start: start.unwrap_or(defaults.tbl_start),
        tbl_step: step.unwrap_or(defaults.tbl_step),
      };
      let functions: Vec<GraphFunction> = expressions
        .into_iter()
        .enumerate()
        .map(|(i, expression)| GraphFunction {
          id: format!("Y{}", i + 1),
          expression,
          color: String::new(),
          enabled: true,
        })
        .collect();
      let refs: Vec<&GraphFunction> = functions.iter().collect();
      let rows = GraphEngine::new(&mut engine).table(&refs, &settings);

      let header: Vec<&str> = functions.iter().map(|f| f.id.as_str()).collect();
      println!("X\t{}", header.join("\t"));
      for row in rows {
        let cells: Vec<String> = row
          .cells
          .iter()
          .map(|cell| match cell {
            TableCell::Value(y) => format_table_value(*y),
            TableCell::Error => "ERROR".to_string(),
          })
          .collect();
        println!("{}\t{}", format_table_value(row.x), cells.join("\t"));
      }
    }
    Commands::Presets => {
      print_json(&GraphEngine::zoom_presets())?;
    }
  }

  Ok(())
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
  let text = serde_json::to_string_pretty(value)
    .context("failed to serialize output")?;
  println!("{text}");
  Ok(())
}
