use pest::iterators::Pair;

use crate::{CalcError, Rule};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
  Plus,
  Minus,
  Times,
  Divide,
  Power,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
  Plus,
  Minus,
}

/// Owned expression tree lowered from the pest pairs.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
  Number(f64),
  Identifier(String),
  List(Vec<Expr>),
  FunctionCall {
    name: String,
    args: Vec<Expr>,
  },
  UnaryOp {
    op: UnaryOperator,
    operand: Box<Expr>,
  },
  BinaryOp {
    op: BinaryOperator,
    left: Box<Expr>,
    right: Box<Expr>,
  },
  Factorial(Box<Expr>),
}

impl BinaryOperator {
  fn from_symbol(symbol: &str) -> Result<Self, CalcError> {
    match symbol {
      "+" => Ok(Self::Plus),
      "-" => Ok(Self::Minus),
      "*" => Ok(Self::Times),
      "/" => Ok(Self::Divide),
      "^" => Ok(Self::Power),
      other => Err(CalcError::EvaluationError(format!(
        "unknown operator {other}"
      ))),
    }
  }

  pub fn symbol(self) -> &'static str {
    match self {
      Self::Plus => "+",
      Self::Minus => "-",
      Self::Times => "*",
      Self::Divide => "/",
      Self::Power => "^",
    }
  }
}

/// Deepest nesting the parser accepts. Parsing, lowering and evaluation
/// all recurse once per level.
pub const MAX_NESTING: usize = 32;

/// Rough recursion depth of `input`: open brackets, plus the current
/// `^` chain, plus runs of prefix signs and trailing `!`.
pub fn nesting_depth(input: &str) -> usize {
  let mut brackets = 0usize;
  let mut powers = 0usize;
  let mut signs = 0usize;
  let mut bangs = 0usize;
  let mut deepest = 0usize;
  let mut prev: Option<char> = None;
  for c in input.chars().filter(|c| !c.is_whitespace()) {
    match c {
      '(' | '{' | '[' => brackets += 1,
      ')' | '}' | ']' => {
        brackets = brackets.saturating_sub(1);
        powers = 0;
      }
      '^' => powers += 1,
      '+' | '-' => {
        if !matches!(prev, Some('^' | '+' | '-')) {
          powers = 0;
        }
      }
      '*' | '/' | ',' => powers = 0,
      _ => {}
    }
    signs = if matches!(c, '+' | '-') { signs + 1 } else { 0 };
    bangs = if c == '!' { bangs + 1 } else { 0 };
    deepest = deepest.max(brackets + powers + signs + bangs);
    prev = Some(c);
  }
  deepest
}

/// Parse canonical arithmetic text straight into an [`Expr`].
pub fn string_to_expr(input: &str) -> Result<Expr, CalcError> {
  let mut pairs = crate::parse(input)?;
  match pairs.next() {
    Some(program) => pair_to_expr(program),
    None => Err(CalcError::EvaluationError("empty program".into())),
  }
}

pub fn pair_to_expr(pair: Pair<Rule>) -> Result<Expr, CalcError> {
  match pair.as_rule() {
    Rule::Program => match pair.into_inner().next() {
      Some(inner) if inner.as_rule() != Rule::EOI => pair_to_expr(inner),
      _ => Err(CalcError::EvaluationError("empty program".into())),
    },
    Rule::Expression | Rule::Term => fold_left(pair),
    Rule::Unary => {
      let mut signs = Vec::new();
      let mut operand = None;
      for inner in pair.into_inner() {
        match inner.as_rule() {
          Rule::Sign => signs.push(inner.as_str() == "-"),
          _ => operand = Some(pair_to_expr(inner)?),
        }
      }
      let mut expr = operand.ok_or_else(|| {
        CalcError::EvaluationError("sign without operand".into())
      })?;
      // Innermost sign applies first
      for negative in signs.into_iter().rev() {
        expr = Expr::UnaryOp {
          op: if negative {
            UnaryOperator::Minus
          } else {
            UnaryOperator::Plus
          },
          operand: Box::new(expr),
        };
      }
      Ok(expr)
    }
    Rule::Power => {
      let mut inner = pair.into_inner();
      let base = next_operand(&mut inner)?;
      match inner.next() {
        Some(exponent) => Ok(Expr::BinaryOp {
          op: BinaryOperator::Power,
          left: Box::new(base),
          right: Box::new(pair_to_expr(exponent)?),
        }),
        None => Ok(base),
      }
    }
    Rule::Postfix => {
      let mut inner = pair.into_inner();
      let mut expr = next_operand(&mut inner)?;
      for bang in inner {
        debug_assert_eq!(bang.as_rule(), Rule::Bang);
        expr = Expr::Factorial(Box::new(expr));
      }
      Ok(expr)
    }
    Rule::Number => {
      let text = pair.as_str();
      text.parse::<f64>().map(Expr::Number).map_err(|_| {
        CalcError::EvaluationError(format!("malformed number {text}"))
      })
    }
    Rule::Identifier => Ok(Expr::Identifier(pair.as_str().to_string())),
    Rule::FunctionCall => {
      let mut inner = pair.into_inner();
      let name = match inner.next() {
        Some(ident) => ident.as_str().to_string(),
        None => {
          return Err(CalcError::EvaluationError(
            "function call without a name".into(),
          ));
        }
      };
      let args = inner.map(pair_to_expr).collect::<Result<Vec<_>, _>>()?;
      Ok(Expr::FunctionCall { name, args })
    }
    Rule::List => {
      let items = pair
        .into_inner()
        .map(pair_to_expr)
        .collect::<Result<Vec<_>, _>>()?;
      Ok(Expr::List(items))
    }
    other => Err(CalcError::EvaluationError(format!(
      "unexpected grammar rule {other:?}"
    ))),
  }
}

/// Fold `operand (op operand)*` sequences into left-associative trees.
fn fold_left(pair: Pair<Rule>) -> Result<Expr, CalcError> {
  let mut inner = pair.into_inner();
  let mut acc = next_operand(&mut inner)?;
  while let Some(op) = inner.next() {
    let op = BinaryOperator::from_symbol(op.as_str())?;
    let right = next_operand(&mut inner)?;
    acc = Expr::BinaryOp {
      op,
      left: Box::new(acc),
      right: Box::new(right),
    };
  }
  Ok(acc)
}

fn next_operand(
  inner: &mut pest::iterators::Pairs<Rule>,
) -> Result<Expr, CalcError> {
  match inner.next() {
    Some(operand) => pair_to_expr(operand),
    None => Err(CalcError::EvaluationError("missing operand".into())),
  }
}

impl std::fmt::Display for Expr {
  fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
    match self {
      Expr::Number(n) => write!(f, "{n}"),
      Expr::Identifier(name) => write!(f, "{name}"),
      Expr::List(items) => {
        write!(f, "{{")?;
        for (i, item) in items.iter().enumerate() {
          if i > 0 {
            write!(f, ", ")?;
          }
          write!(f, "{item}")?;
        }
        write!(f, "}}")
      }
      Expr::FunctionCall { name, args } => {
        write!(f, "{name}(")?;
        for (i, arg) in args.iter().enumerate() {
          if i > 0 {
            write!(f, ", ")?;
          }
          write!(f, "{arg}")?;
        }
        write!(f, ")")
      }
      Expr::UnaryOp { op, operand } => match op {
        UnaryOperator::Plus => write!(f, "(+{operand})"),
        UnaryOperator::Minus => write!(f, "(-{operand})"),
      },
      Expr::BinaryOp { op, left, right } => {
        write!(f, "({left} {} {right})", op.symbol())
      }
      Expr::Factorial(operand) => write!(f, "{operand}!"),
    }
  }
}
