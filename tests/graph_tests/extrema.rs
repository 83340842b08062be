use super::*;

mod find_minimum {
  use super::*;

  #[test]
  fn parabola_vertex() {
    let mut math = MathEngine::new();
    let point = GraphEngine::new(&mut math)
      .find_minimum("X^2-4", &GraphWindow::default())
      .unwrap();
    assert!(point.x.abs() < 1e-9);
    assert!((point.y + 4.0).abs() < 1e-9);
  }

  #[test]
  fn skips_the_pole() {
    let mut math = MathEngine::new();
    let point = GraphEngine::new(&mut math)
      .find_minimum("1/X", &GraphWindow::default())
      .unwrap();
    assert!(point.x < 0.0);
    assert!(point.y < -49.0 && point.y.is_finite());
  }

  #[test]
  fn nothing_defined_in_the_window() {
    let mut math = MathEngine::new();
    let mut graph = GraphEngine::new(&mut math);
    assert_eq!(graph.find_minimum("sqrt(X-20)", &GraphWindow::default()), None);
    assert_eq!(graph.find_minimum("2+", &GraphWindow::default()), None);
  }
}

mod find_maximum {
  use super::*;

  #[test]
  fn first_occurrence_wins_ties() {
    let mut math = MathEngine::new();
    let point = GraphEngine::new(&mut math)
      .find_maximum("X^2", &GraphWindow::default())
      .unwrap();
    assert_eq!(point, Point { x: -10.0, y: 100.0 });
  }

  #[test]
  fn sine_peak() {
    let mut math = MathEngine::new();
    let point = GraphEngine::new(&mut math)
      .find_maximum("sin(X)", &ZoomPreset::Trig.window())
      .unwrap();
    assert!((point.y - 1.0).abs() < 1e-3);
    assert!((point.x + 1.5 * std::f64::consts::PI).abs() < 0.02);
  }

  #[test]
  fn degenerate_window() {
    let mut math = MathEngine::new();
    let point =
      GraphEngine::new(&mut math).find_maximum("X", &window(3.0, 3.0));
    assert_eq!(point, None);
  }
}
