use super::*;
use ticalc::format::{format_result, format_table_value};

mod results {
  use super::*;

  #[test]
  fn integers_and_short_decimals() {
    assert_eq!(format_result(4.0), "4");
    assert_eq!(format_result(-12.5), "-12.5");
    assert_eq!(format_result(0.0), "0");
    assert_eq!(format_result(-0.0), "0");
  }

  #[test]
  fn ten_significant_digits() {
    assert_eq!(format_result(2.0 / 3.0), "0.6666666667");
    assert_eq!(format_result(123456.789012345), "123456.789");
  }

  #[test]
  fn large_and_tiny_values_use_exponents() {
    assert_eq!(format_result(1e10), "1.000000e+10");
    assert_eq!(format_result(-12345678901.0), "-1.234568e+10");
    assert_eq!(format_result(1.5e-11), "1.500000e-11");
  }

  #[test]
  fn small_values_above_the_exponent_threshold() {
    assert_eq!(format_result(0.001), "0.001");
    assert_eq!(format_result(1.5e-7), "1.5e-7");
  }

  #[test]
  fn infinities_and_nan() {
    assert_eq!(format_result(f64::INFINITY), "∞");
    assert_eq!(format_result(f64::NEG_INFINITY), "-∞");
    assert_eq!(format_result(f64::NAN), "ERR:DOMAIN");
  }

  #[test]
  fn zero_to_a_negative_power_is_infinite() {
    assert_eq!(interpret("0^(-1)"), "∞");
  }
}

mod table_values {
  use super::*;

  #[test]
  fn six_significant_digits() {
    assert_eq!(format_table_value(1.0 / 3.0), "0.333333");
    assert_eq!(format_table_value(1234567.0), "1234570");
    assert_eq!(format_table_value(-2.0), "-2");
  }
}
