use super::*;

mod find_zeros {
  use super::*;

  #[test]
  fn quadratic_has_two_roots() {
    let mut math = MathEngine::new();
    let zeros =
      GraphEngine::new(&mut math).find_zeros("X^2-4", &GraphWindow::default());
    assert_eq!(zeros.len(), 2);
    assert!(zeros.iter().any(|z| (z + 2.0).abs() < 0.01));
    assert!(zeros.iter().any(|z| (z - 2.0).abs() < 0.01));
  }

  #[test]
  fn sign_jump_reports_the_exhausted_midpoint() {
    let mut math = MathEngine::new();
    let zeros =
      GraphEngine::new(&mut math).find_zeros("X/abs(X)", &window(-1.0, 2.0));
    assert_eq!(zeros.len(), 1);
    assert!(zeros[0].abs() < 1e-9);
  }

  #[test]
  fn roots_come_back_in_ascending_order() {
    let mut math = MathEngine::new();
    let zeros = GraphEngine::new(&mut math).find_zeros(
      "(X+3)(X-1)(X-4.5)",
      &GraphWindow::default(),
    );
    assert_eq!(zeros.len(), 3);
    assert!(zeros.windows(2).all(|pair| pair[0] < pair[1]));
    for (found, expected) in zeros.iter().zip([-3.0, 1.0, 4.5]) {
      assert!((found - expected).abs() < 1e-6);
    }
  }

  #[test]
  fn refined_well_below_the_scan_step() {
    let mut math = MathEngine::new();
    let zeros =
      GraphEngine::new(&mut math).find_zeros("X^2-2", &GraphWindow::default());
    let root = 2.0_f64.sqrt();
    assert!(zeros.iter().any(|z| (z - root).abs() < 1e-9));
    assert!(zeros.iter().any(|z| (z + root).abs() < 1e-9));
  }

  #[test]
  fn sine_in_the_trig_window() {
    let mut math = MathEngine::new();
    let zeros = GraphEngine::new(&mut math)
      .find_zeros("sin(X)", &ZoomPreset::Trig.window());
    let pi = std::f64::consts::PI;
    for expected in [-pi, 0.0, pi] {
      assert!(zeros.iter().any(|z| (z - expected).abs() < 1e-6));
    }
  }

  #[test]
  fn tangent_root_is_not_found() {
    let mut math = MathEngine::new();
    let zeros =
      GraphEngine::new(&mut math).find_zeros("X^2", &GraphWindow::default());
    assert!(zeros.is_empty());
  }

  #[test]
  fn no_roots_outside_the_window() {
    let mut math = MathEngine::new();
    let zeros =
      GraphEngine::new(&mut math).find_zeros("X-20", &GraphWindow::default());
    assert!(zeros.is_empty());
  }

  #[test]
  fn undefined_expression_has_no_roots() {
    let mut math = MathEngine::new();
    let mut graph = GraphEngine::new(&mut math);
    assert!(graph.find_zeros("Q(X)", &GraphWindow::default()).is_empty());
    assert!(graph.find_zeros("sqrt(X-20)", &GraphWindow::default()).is_empty());
  }
}

mod find_intersection {
  use super::*;

  #[test]
  fn lines_cross_once() {
    let mut math = MathEngine::new();
    let crossings = GraphEngine::new(&mut math).find_intersection(
      "X",
      "4-X",
      &GraphWindow::default(),
    );
    assert_eq!(crossings.len(), 1);
    assert!((crossings[0].x - 2.0).abs() < 1e-9);
    assert!((crossings[0].y - 2.0).abs() < 1e-9);
  }

  #[test]
  fn parabola_and_line() {
    let mut math = MathEngine::new();
    let crossings = GraphEngine::new(&mut math).find_intersection(
      "X^2",
      "X+2",
      &GraphWindow::default(),
    );
    assert_eq!(crossings.len(), 2);
    assert!((crossings[0].x + 1.0).abs() < 1e-6);
    assert!((crossings[0].y - 1.0).abs() < 1e-5);
    assert!((crossings[1].x - 2.0).abs() < 1e-6);
    assert!((crossings[1].y - 4.0).abs() < 1e-5);
  }

  #[test]
  fn parallel_lines_never_cross() {
    let mut math = MathEngine::new();
    let crossings = GraphEngine::new(&mut math).find_intersection(
      "X",
      "X+1",
      &GraphWindow::default(),
    );
    assert!(crossings.is_empty());
  }
}
