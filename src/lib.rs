use pest::Parser;
use pest_derive::Parser;
use thiserror::Error;

pub mod engine;
pub mod evaluator;
pub mod format;
pub mod functions;
pub mod graph;
pub mod normalize;
pub mod scope;
pub mod session;
pub mod syntax;
pub mod value;

pub use engine::MathEngine;
pub use graph::{GraphEngine, GraphFunction, GraphWindow, Point, ZoomPreset};
pub use session::Calculator;

#[derive(Parser)]
#[grammar = "calc.pest"]
pub struct CalcParser;

/// Detailed failure raised while parsing or evaluating one expression.
///
/// These never leave the engine; [`MathEngine::evaluate`] folds them into an
/// [`ErrorKind`].
#[derive(Error, Debug)]
pub enum CalcError {
  #[error("Parse error: {0}")]
  ParseError(#[from] Box<pest::error::Error<Rule>>),
  #[error("Undefined symbol {0}")]
  UndefinedSymbol(String),
  #[error("Undefined function {0}")]
  UndefinedFunction(String),
  #[error("Division by zero")]
  DivisionByZero,
  #[error("Argument outside the domain of {0}")]
  Domain(String),
  #[error("{name} expects {expected} argument(s), got {got}")]
  Arity {
    name: String,
    expected: &'static str,
    got: usize,
  },
  #[error("{0} is not defined for non-real arguments")]
  NonRealArgument(String),
  #[error("Evaluation error: {0}")]
  EvaluationError(String),
}

/// The calculator's error taxonomy, rendered as the short tokens the
/// display shows in place of a result.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
  #[error("ERR:SYNTAX")]
  Syntax,
  #[error("ERR:UNDEFINED")]
  Undefined,
  #[error("ERR:DIVIDE BY 0")]
  DivideByZero,
  #[error("ERR:DOMAIN")]
  Domain,
  #[error("ERR:NONREAL ANS")]
  NonReal,
  #[error("ERR:DATA TYPE")]
  DataType,
}

impl ErrorKind {
  /// Map an evaluation failure onto the taxonomy. Unresolved names win over
  /// division by zero, which wins over domain errors; anything else is a
  /// syntax error.
  pub fn classify(err: &CalcError) -> ErrorKind {
    match err {
      CalcError::UndefinedSymbol(_) | CalcError::UndefinedFunction(_) => {
        ErrorKind::Undefined
      }
      CalcError::DivisionByZero => ErrorKind::DivideByZero,
      CalcError::Domain(_) => ErrorKind::Domain,
      CalcError::NonRealArgument(_) => ErrorKind::NonReal,
      CalcError::ParseError(_)
      | CalcError::Arity { .. }
      | CalcError::EvaluationError(_) => ErrorKind::Syntax,
    }
  }
}

/// Outcome of a single calculator-mode evaluation. There is no partial
/// success.
pub type EvaluationResult = Result<f64, ErrorKind>;

impl CalcParser {
  pub fn parse_program(
    input: &str,
  ) -> Result<pest::iterators::Pairs<'_, Rule>, Box<pest::error::Error<Rule>>>
  {
    if syntax::nesting_depth(input) > syntax::MAX_NESTING {
      return Err(Box::new(pest::error::Error::new_from_pos(
        pest::error::ErrorVariant::CustomError {
          message: "expression nested too deeply".into(),
        },
        pest::Position::from_start(input),
      )));
    }
    Self::parse(Rule::Program, input).map_err(Box::new)
  }
}

/// Parse canonical (already normalized) arithmetic text.
pub fn parse(
  input: &str,
) -> Result<pest::iterators::Pairs<'_, Rule>, Box<pest::error::Error<Rule>>> {
  CalcParser::parse_program(input)
}

/// Evaluate one line of calculator notation in a fresh engine and render
/// the result the way the display would.
pub fn interpret(input: &str) -> String {
  let mut engine = MathEngine::new();
  match engine.evaluate(input) {
    Ok(value) => format::format_result(value),
    Err(kind) => kind.to_string(),
  }
}
