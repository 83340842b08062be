use super::*;

mod generate_points {
  use super::*;

  #[test]
  fn covers_the_window_inclusively() {
    let mut math = MathEngine::new();
    let points =
      GraphEngine::new(&mut math).generate_points("X", &window(-1.0, 1.0), 0);
    assert!(points.len() >= 500);
    assert_eq!(points[0], Point { x: -1.0, y: -1.0 });
    let last = points[points.len() - 1];
    assert!((last.x - 1.0).abs() < 1e-9);
  }

  #[test]
  fn resolution_follows_the_width_hint() {
    let mut math = MathEngine::new();
    let mut graph = GraphEngine::new(&mut math);
    let narrow = graph.generate_points("X", &window(-1.0, 1.0), 100);
    let wide = graph.generate_points("X", &window(-1.0, 1.0), 1000);
    assert!(narrow.len() >= 500 && narrow.len() <= 502);
    assert!(wide.len() >= 2000 && wide.len() <= 2002);
  }

  #[test]
  fn samples_are_ascending_and_on_the_curve() {
    let mut math = MathEngine::new();
    let window = GraphWindow::default();
    let points =
      GraphEngine::new(&mut math).generate_points("X^2", &window, 320);
    assert!(points.windows(2).all(|pair| pair[0].x < pair[1].x));
    assert!(points.iter().all(|p| (p.y - p.x * p.x).abs() < 1e-12));
  }

  #[test]
  fn pole_is_left_out() {
    let mut math = MathEngine::new();
    let points = GraphEngine::new(&mut math).generate_points(
      "1/X",
      &window(-1.0, 1.0),
      500,
    );
    assert!(!points.is_empty());
    assert!(points.iter().all(|p| p.x.abs() > 1e-12));
    assert!(points.iter().all(|p| p.y.is_finite()));
    assert!(points.iter().any(|p| p.x < -0.5));
    assert!(points.iter().any(|p| p.x > 0.5));
  }

  #[test]
  fn undefined_region_is_left_out() {
    let mut math = MathEngine::new();
    let points = GraphEngine::new(&mut math).generate_points(
      "sqrt(X)",
      &window(-2.0, 2.0),
      0,
    );
    assert!(points.iter().all(|p| p.x >= 0.0));
    assert!(points.len() < 300);
  }

  #[test]
  fn degenerate_window_is_empty() {
    let mut math = MathEngine::new();
    let mut graph = GraphEngine::new(&mut math);
    assert!(graph.generate_points("X", &window(1.0, 1.0), 0).is_empty());
    assert!(graph.generate_points("X", &window(2.0, 1.0), 0).is_empty());
  }

  #[test]
  fn invalid_expression_is_empty() {
    let mut math = MathEngine::new();
    let window = GraphWindow::default();
    let points = GraphEngine::new(&mut math).generate_points("2+", &window, 0);
    assert!(points.is_empty());
  }

  #[test]
  fn sampling_leaves_ans_alone() {
    let mut math = MathEngine::new();
    math.evaluate("5").unwrap();
    let window = GraphWindow::default();
    GraphEngine::new(&mut math).generate_points("X+1", &window, 0);
    assert_eq!(math.get_ans(), 5.0);
  }
}

mod trace {
  use super::*;

  #[test]
  fn matches_evaluate_at() {
    let mut math = MathEngine::new();
    let mut graph = GraphEngine::new(&mut math);
    assert_eq!(graph.trace("2X+1", 3.0), Some(7.0));
    assert_eq!(graph.trace("1/X", 0.0), None);
  }
}

mod graph_function {
  use super::*;

  #[test]
  fn plottable_needs_an_enabled_non_blank_expression() {
    let mut function = GraphFunction {
      id: "Y1".to_string(),
      expression: "  ".to_string(),
      color: "#ff6b6b".to_string(),
      enabled: true,
    };
    assert!(!function.is_plottable());
    function.expression = "X".to_string();
    assert!(function.is_plottable());
    function.enabled = false;
    assert!(!function.is_plottable());
  }
}
