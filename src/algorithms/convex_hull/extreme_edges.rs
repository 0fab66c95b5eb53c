use std::collections::BTreeSet;
use tracing::debug;

use super::check_input;
use crate::data::Point;
use crate::{Error, HullConfig, HullScalar};

// Properties:
//    No panics.
//    Every returned index is in range.
//    Colinear points on a hull edge are reported.
/// $O(n^3)$ Indices of all points on the boundary of the convex hull.
///
/// A directed pair of points `(i, j)` is an extreme edge if no point lies
/// strictly to the left of the line `i -> j`. Every index that takes part in an
/// extreme edge is in the result. Points lying exactly on a hull edge are
/// therefore included, not just the corners.
///
/// # Errors
/// Will return [`Error::InvalidInput`] iff the input has fewer than three points.
///
/// # Examples
///
/// ```rust
/// # use hullbrute::algorithms::unordered_hull;
/// # use hullbrute::data::Point;
/// # use hullbrute::Error;
/// let pts: Vec<Point> = Point::parse_many("0 0  2 0  4 0  4 4  0 4").unwrap();
/// let hull = unordered_hull(&pts).unwrap();
/// assert_eq!(hull.len(), 5);
///
/// assert_eq!(unordered_hull(&pts[..2]).err(), Some(Error::InvalidInput(2)));
/// ```
pub fn unordered_hull<T>(pts: &[Point<T>]) -> Result<BTreeSet<usize>, Error>
where
  T: HullScalar,
{
  unordered_hull_with(pts, &HullConfig::default())
}

/// Like [`unordered_hull`] but with a configurable orientation predicate.
///
/// # Errors
/// [`Error::InvalidInput`] for fewer than three points and
/// [`Error::InvalidTolerance`] for a badly configured predicate.
pub fn unordered_hull_with<T>(pts: &[Point<T>], config: &HullConfig) -> Result<BTreeSet<usize>, Error>
where
  T: HullScalar,
{
  let hull: BTreeSet<usize> = extreme_edges(pts, config)?
    .into_iter()
    .flat_map(|(i, j)| [i, j])
    .collect();
  debug!(points = pts.len(), hull = hull.len(), "unordered hull");
  Ok(hull)
}

/// $O(n^3)$ All directed extreme edges `(i, j)`, sorted by `i` then `j`.
///
/// Every other point is on the right of `i -> j` or on the line, so the edges
/// run clockwise around the hull. Pairs of points with equal coordinates are
/// never edges.
///
/// ```rust
/// # use hullbrute::algorithms::extreme_edges;
/// # use hullbrute::data::Point;
/// # use hullbrute::HullConfig;
/// let triangle: Vec<Point> = Point::parse_many("0 0  4 0  0 4").unwrap();
/// assert_eq!(
///   extreme_edges(&triangle, &HullConfig::default()).unwrap(),
///   vec![(0, 2), (1, 0), (2, 1)]
/// );
/// ```
pub fn extreme_edges<T>(pts: &[Point<T>], config: &HullConfig) -> Result<Vec<(usize, usize)>, Error>
where
  T: HullScalar,
{
  check_input(pts, config)?;
  let predicate = config.predicate;
  let n = pts.len();

  let mut edges = Vec::new();
  for i in 0..n {
    for j in 0..n {
      if pts[i] == pts[j] {
        continue;
      }
      let supporting = pts
        .iter()
        .all(|pt| !predicate.orient(&pts[i], &pts[j], pt).is_left());
      if supporting {
        edges.push((i, j));
      }
    }
  }
  Ok(edges)
}
