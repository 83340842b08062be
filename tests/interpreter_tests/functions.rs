use super::*;

fn value(input: &str) -> f64 {
  MathEngine::new().evaluate(input).unwrap()
}

mod trigonometric {
  use super::*;

  #[test]
  fn sin_of_half_pi() {
    assert!((value("sin(π/2)") - 1.0).abs() < 1e-12);
  }

  #[test]
  fn cos_and_tan() {
    assert!((value("cos(0)") - 1.0).abs() < 1e-12);
    assert!((value("tan(π/4)") - 1.0).abs() < 1e-12);
  }

  #[test]
  fn inverse_glyphs() {
    assert!((value("sin⁻¹(1)") - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
    assert!(value("cos⁻¹(1)").abs() < 1e-12);
    assert!((value("tan⁻¹(1)") - std::f64::consts::FRAC_PI_4).abs() < 1e-12);
  }

  #[test]
  fn hyperbolic() {
    assert!(value("sinh(0)").abs() < 1e-12);
    assert!((value("cosh(0)") - 1.0).abs() < 1e-12);
    assert!(value("tanh(0)").abs() < 1e-12);
  }
}

mod elementary {
  use super::*;

  #[test]
  fn roots() {
    assert_eq!(interpret("√(16)"), "4");
    assert_eq!(interpret("√9"), "3");
    assert_eq!(interpret("sqrt(2)"), "1.414213562");
    assert_eq!(interpret("cbrt(27)"), "3");
  }

  #[test]
  fn logarithms() {
    assert_eq!(interpret("log(1000)"), "3");
    assert_eq!(interpret("log(8,2)"), "3");
    assert_eq!(interpret("ln(e)"), "1");
    assert_eq!(interpret("exp(0)"), "1");
  }

  #[test]
  fn log_base_one_divides_by_zero() {
    assert_eq!(interpret("log(5,1)"), "ERR:DIVIDE BY 0");
  }

  #[test]
  fn abs_and_parts() {
    assert_eq!(interpret("abs(-3.5)"), "3.5");
    assert_eq!(interpret("abs(3+4i)"), "5");
    assert_eq!(interpret("int(-2.7)"), "-2");
    assert_eq!(interpret("iPart(2.7)"), "2");
    assert_eq!(interpret("fPart(2.75)"), "0.75");
  }

  #[test]
  fn rounding() {
    assert_eq!(interpret("round(2.5)"), "3");
    assert_eq!(interpret("round(3.14159,2)"), "3.14");
    assert_eq!(interpret("roundN(2.345,1)"), "2.3");
  }

  #[test]
  fn min_and_max() {
    assert_eq!(interpret("min(3,1,2)"), "1");
    assert_eq!(interpret("max(3,1,2)"), "3");
  }
}

mod combinatorics {
  use super::*;

  #[test]
  fn factorial() {
    assert_eq!(interpret("factorial(6)"), "720");
    assert_eq!(interpret("170!"), "7.257416e+306");
    assert_eq!(interpret("171!"), "∞");
  }

  #[test]
  fn permutations_and_combinations() {
    assert_eq!(interpret("nPr(5,2)"), "20");
    assert_eq!(interpret("nCr(5,2)"), "10");
    assert_eq!(interpret("nCr(52,5)"), "2598960");
    assert_eq!(interpret("nCr(4,0)"), "1");
  }

  #[test]
  fn huge_arguments_overflow_to_infinity() {
    assert_eq!(interpret("nCr(10^17,5*10^16)"), "∞");
    assert_eq!(interpret("nPr(10^17,5*10^16)"), "∞");
    assert_eq!(interpret("nCr(2000,1000)"), "∞");
  }
}

mod listable {
  use ticalc::functions::call;
  use ticalc::value::Value;

  #[test]
  fn unary_functions_map_over_lists() {
    let result =
      call("abs", vec![Value::List(vec![Value::Real(-1.0), Value::Real(2.0)])])
        .unwrap();
    assert_eq!(result, Value::List(vec![Value::Real(1.0), Value::Real(2.0)]));
  }
}
