//! Rendering results for the display and the table screen.

use crate::ErrorKind;

/// Render a successful evaluation the way the home screen shows it.
pub fn format_result(value: f64) -> String {
  if value.is_nan() {
    return ErrorKind::Domain.to_string();
  }
  if value.is_infinite() {
    return infinity(value);
  }
  let magnitude = value.abs();
  if (magnitude < 1e-10 && value != 0.0) || magnitude >= 1e10 {
    return with_signed_exponent(format!("{value:.6e}"));
  }
  number_to_string(round_significant(value, 10))
}

/// Six significant digits, for table cells.
pub fn format_table_value(value: f64) -> String {
  if value.is_nan() {
    return ErrorKind::Domain.to_string();
  }
  if value.is_infinite() {
    return infinity(value);
  }
  number_to_string(round_significant(value, 6))
}

fn infinity(value: f64) -> String {
  let glyph = if value > 0.0 { "∞" } else { "-∞" };
  glyph.to_string()
}

fn round_significant(value: f64, digits: usize) -> f64 {
  let text = format!("{:.*e}", digits.saturating_sub(1), value);
  text.parse().unwrap_or(value)
}

/// Shortest round-trip decimal, switching to exponent form outside
/// `[1e-6, 1e21)`.
fn number_to_string(value: f64) -> String {
  if value == 0.0 {
    return "0".to_string();
  }
  let magnitude = value.abs();
  if !(1e-6..1e21).contains(&magnitude) {
    return with_signed_exponent(format!("{value:e}"));
  }
  value.to_string()
}

/// `1.5e10` -> `1.5e+10`
fn with_signed_exponent(text: String) -> String {
  match text.split_once('e') {
    Some((mantissa, exponent)) if !exponent.starts_with('-') => {
      format!("{mantissa}e+{exponent}")
    }
    _ => text,
  }
}
