mod convex_hull {
  use hullbrute::algorithms::*;
  use hullbrute::data::*;
  use hullbrute::*;

  use rand::{Rng, SeedableRng};
  use std::collections::BTreeSet;

  fn square() -> Vec<Point> {
    Point::parse_many("0 0\n4 0\n4 4\n0 4\n2 2\n").unwrap()
  }

  #[test]
  fn square_unordered() -> Result<(), Error> {
    let hull = unordered_hull(&square())?;
    assert_eq!(hull, [0, 1, 2, 3].iter().copied().collect::<BTreeSet<_>>());
    Ok(())
  }

  #[test]
  fn square_ordered() -> Result<(), Error> {
    assert_eq!(ordered_hull(&square())?, vec![0, 1, 2, 3]);
    Ok(())
  }

  #[test]
  fn colinear_midpoint() -> Result<(), Error> {
    let pts: Vec<Point> = Point::parse_many("0 0  2 0  4 0  4 4  0 4").unwrap();
    assert!(unordered_hull(&pts)?.contains(&1));
    assert_eq!(ordered_hull(&pts)?, vec![0, 1, 2, 3, 4]);
    Ok(())
  }

  #[test]
  fn too_few_points() {
    let pts: Vec<Point> = vec![Point::new([0., 0.]), Point::new([1., 1.])];
    assert_eq!(unordered_hull(&pts).err(), Some(Error::InvalidInput(2)));
    assert_eq!(ordered_hull(&pts).err(), Some(Error::InvalidInput(2)));
    assert_eq!(
      ordered_hull::<f64>(&[]).err(),
      Some(Error::InvalidInput(0))
    );
  }

  #[test]
  fn single_precision() -> Result<(), Error> {
    let pts: Vec<Point<f32>> = Point::parse_many("0 0  1 0  0.5 0.25  1 1  0 1").unwrap();
    assert_eq!(ordered_hull(&pts)?, vec![0, 1, 3, 4]);
    assert_eq!(unordered_hull(&pts)?.len(), 4);
    Ok(())
  }

  #[test]
  fn random_disc_agrees() -> Result<(), Error> {
    let mut rng = rand::rngs::SmallRng::seed_from_u64(1);
    let pts: Vec<Point> = (0..60)
      .map(|_| {
        let angle: f64 = rng.gen_range(0.0..std::f64::consts::TAU);
        let radius: f64 = rng.gen_range(0.0..1.0);
        Point::new([radius * angle.cos(), radius * angle.sin()])
      })
      .collect();
    let config = HullConfig::default().with_predicate(Predicate::Robust);
    let ordered = ordered_hull_with(&pts, &config)?;
    let unordered = unordered_hull_with(&pts, &config)?;
    assert_eq!(ordered.iter().copied().collect::<BTreeSet<_>>(), unordered);

    // Every point is on or left of every hull edge.
    for (i, &from) in ordered.iter().enumerate() {
      let to = ordered[(i + 1) % ordered.len()];
      for pt in &pts {
        assert!(!config.predicate.orient(&pts[from], &pts[to], pt).is_right());
      }
    }
    Ok(())
  }

  #[test]
  fn random_sampling_is_in_unit_square() {
    let mut rng = rand::rngs::SmallRng::seed_from_u64(7);
    let pts: Vec<Point> = (0..100).map(|_| rng.gen()).collect();
    assert!(pts
      .iter()
      .all(|pt| (0.0..1.0).contains(pt.x_coord()) && (0.0..1.0).contains(pt.y_coord())));
    let config = HullConfig::default().with_predicate(Predicate::Robust);
    let hull = ordered_hull_with(&pts, &config).unwrap();
    assert!(hull.len() >= 3);
  }

  #[test]
  fn error_messages() {
    assert_eq!(
      Error::InvalidInput(1).to_string(),
      "Invalid input: need at least 3 points, got 1"
    );
    assert_eq!(
      Error::DegenerateGeometry(4).to_string(),
      "Degenerate geometry: no hull edge found from vertex 4"
    );
    assert_eq!(
      "1 x".parse::<Point>().unwrap_err().to_string(),
      "Invalid coordinate: \"x\""
    );
  }
}
