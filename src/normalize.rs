//! Rewrites calculator display notation into canonical arithmetic.
//!
//! The rules form a fixed pipeline: each one is applied once, left to
//! right over the whole string, in table order. Later rules see the output
//! of earlier ones, so the order is part of the behaviour.

use regex::Regex;
use std::sync::LazyLock;

pub struct RewriteRule {
  pub name: &'static str,
  pattern: Regex,
  replacement: &'static str,
}

impl RewriteRule {
  fn new(
    name: &'static str,
    pattern: &str,
    replacement: &'static str,
  ) -> RewriteRule {
    RewriteRule {
      name,
      pattern: Regex::new(pattern).expect("rewrite pattern must compile"),
      replacement,
    }
  }

  pub fn apply(&self, input: &str) -> String {
    self
      .pattern
      .replace_all(input, self.replacement)
      .into_owned()
  }
}

static RULES: LazyLock<Vec<RewriteRule>> = LazyLock::new(|| {
  vec![
    // Display glyphs
    RewriteRule::new("divide-glyph", "÷", "/"),
    RewriteRule::new("multiply-glyph", "×", "*"),
    RewriteRule::new("minus-glyph", "−", "-"),
    // Roots
    RewriteRule::new("root-call", r"√\(", "sqrt("),
    RewriteRule::new("root-numeral", r"√([0-9.]+)", "sqrt(${1})"),
    RewriteRule::new("pi", "π", "pi"),
    // Superscripts; inverse trig must run before the bare ⁻¹
    RewriteRule::new("square", "²", "^2"),
    RewriteRule::new("cube", "³", "^3"),
    RewriteRule::new("inverse-sin", "sin⁻¹", "asin"),
    RewriteRule::new("inverse-cos", "cos⁻¹", "acos"),
    RewriteRule::new("inverse-tan", "tan⁻¹", "atan"),
    RewriteRule::new("reciprocal", "⁻¹", "^(-1)"),
    // Implicit multiplication
    RewriteRule::new("digit-paren", r"(\d)\(", "${1}*("),
    RewriteRule::new("paren-paren", r"\)\(", ")*("),
    RewriteRule::new("paren-digit", r"\)(\d)", ")*${1}"),
    RewriteRule::new("digit-letter", r"(\d)([A-Za-z])", "${1}*${2}"),
    RewriteRule::new("paren-letter", r"\)([A-Za-z])", ")*${1}"),
    // The negate key. Absorbs the `*` the paren rules put after its `)`.
    RewriteRule::new("negate", r"\(-\)\*?", "(-1)*"),
  ]
});

pub fn rules() -> &'static [RewriteRule] {
  &RULES
}

pub fn rule(name: &str) -> Option<&'static RewriteRule> {
  RULES.iter().find(|rule| rule.name == name)
}

pub fn normalize(expression: &str) -> String {
  RULES
    .iter()
    .fold(expression.to_string(), |acc, rule| rule.apply(&acc))
}
