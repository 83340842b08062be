use super::*;
use ticalc::normalize::{normalize, rule, rules};

mod glyphs {
  use super::*;

  #[test]
  fn operator_glyphs() {
    assert_eq!(normalize("6÷3×2−1"), "6/3*2-1");
    assert_eq!(interpret("6÷3×2−1"), "3");
  }

  #[test]
  fn superscripts() {
    assert_eq!(normalize("3²"), "3^2");
    assert_eq!(normalize("2³"), "2^3");
    assert_eq!(normalize("4⁻¹"), "4^(-1)");
    assert_eq!(interpret("4⁻¹"), "0.25");
  }

  #[test]
  fn inverse_trig_is_not_a_reciprocal() {
    assert_eq!(normalize("sin⁻¹(0.5)"), "asin(0.5)");
    assert_eq!(normalize("cos⁻¹(X)"), "acos(X)");
    assert_eq!(normalize("tan⁻¹(1)"), "atan(1)");
  }

  #[test]
  fn pi_glyph() {
    assert_eq!(normalize("2π"), "2*pi");
  }
}

mod implicit_multiplication {
  use super::*;

  #[test]
  fn digit_before_paren() {
    assert_eq!(normalize("2(3)"), "2*(3)");
    assert_eq!(interpret("2(3+1)"), "8");
  }

  #[test]
  fn adjacent_parens() {
    assert_eq!(normalize("(1)(2)"), "(1)*(2)");
    assert_eq!(interpret("(2)(3)"), "6");
  }

  #[test]
  fn paren_before_digit_or_letter() {
    assert_eq!(normalize("(2)3"), "(2)*3");
    assert_eq!(normalize("(2)X"), "(2)*X");
  }

  #[test]
  fn digit_before_letter() {
    assert_eq!(normalize("2X"), "2*X");
    assert_eq!(normalize("3sin(0)"), "3*sin(0)");
  }
}

mod negate_key {
  use super::*;

  #[test]
  fn negate_becomes_minus_one_factor() {
    assert_eq!(normalize("(-)5"), "(-1)*5");
    assert_eq!(interpret("(-)5"), "-5");
  }

  #[test]
  fn negate_after_a_coefficient() {
    assert_eq!(normalize("4(-)X"), "4*(-1)*X");
  }

  #[test]
  fn negate_before_a_group() {
    assert_eq!(interpret("(-)(2+3)"), "-5");
  }
}

mod rule_table {
  use super::*;

  #[test]
  fn rules_run_in_a_fixed_order() {
    let names: Vec<&str> = rules().iter().map(|r| r.name).collect();
    let position = |name: &str| names.iter().position(|n| *n == name).unwrap();
    assert!(position("inverse-sin") < position("reciprocal"));
    assert!(position("paren-digit") < position("negate"));
    assert_eq!(names.last(), Some(&"negate"));
  }

  #[test]
  fn single_rule_in_isolation() {
    let square = rule("square").unwrap();
    assert_eq!(square.apply("X²+Y²"), "X^2+Y^2");
    assert!(rule("no-such-rule").is_none());
  }

  #[test]
  fn canonical_text_is_unchanged() {
    assert_eq!(normalize("sqrt(2)*X^2-1/3"), "sqrt(2)*X^2-1/3");
  }
}
