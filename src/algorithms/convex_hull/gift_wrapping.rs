use std::cmp::Ordering;
use tracing::{debug, trace, warn};

use super::check_input;
use crate::data::Point;
use crate::{Error, HullConfig, HullScalar, Orientation};

// https://en.wikipedia.org/wiki/Gift_wrapping_algorithm

// Properties:
//    No panics.
//    Terminates after at most n accepted vertices.
//    No input point is strictly right of any edge of an Ok result.
/// $O(h n^2)$ Hull vertices in counter-clockwise order.
///
/// [Gift Wrapping][wiki] starting from the leftmost point. From the current
/// vertex, candidates are tried in index order and the first one with no point
/// strictly to its right becomes the next vertex. The walk ends when it
/// returns to the leftmost point, which is the first entry of the result.
///
/// Ties are broken by index, so colinear points on a hull edge are walked one
/// by one when they come first.
///
/// # Errors
/// * [`Error::InvalidInput`] iff the input has fewer than three points.
/// * [`Error::DegenerateGeometry`] if the walk gets stuck, for example when
///   every point has the same coordinates.
///
/// # Examples
///
/// ```rust
/// # use hullbrute::algorithms::ordered_hull;
/// # use hullbrute::data::Point;
/// let pts: Vec<Point> = Point::parse_many("0 4  4 0  0 0  4 4  1 1").unwrap();
/// assert_eq!(ordered_hull(&pts).unwrap(), vec![0, 2, 1, 3]);
/// ```
///
/// [wiki]: https://en.wikipedia.org/wiki/Gift_wrapping_algorithm
pub fn ordered_hull<T>(pts: &[Point<T>]) -> Result<Vec<usize>, Error>
where
  T: HullScalar,
{
  ordered_hull_with(pts, &HullConfig::default())
}

/// Like [`ordered_hull`] but with a configurable orientation predicate.
pub fn ordered_hull_with<T>(pts: &[Point<T>], config: &HullConfig) -> Result<Vec<usize>, Error>
where
  T: HullScalar,
{
  check_input(pts, config)?;
  let predicate = config.predicate;
  wrap(pts, |p1, p2, q| predicate.orient(p1, p2, q))
}

fn wrap<T, F>(pts: &[Point<T>], orient: F) -> Result<Vec<usize>, Error>
where
  T: HullScalar,
  F: Fn(&Point<T>, &Point<T>, &Point<T>) -> Orientation,
{
  let start = leftmost_point_index(pts)?;
  let mut visited = vec![false; pts.len()];
  visited[start] = true;
  let mut hull = vec![start];
  let mut current = start;

  loop {
    let next = match next_vertex(pts, current, &orient) {
      Some(next) => next,
      None => {
        warn!(vertex = current, "no hull edge leaves vertex");
        return Err(Error::DegenerateGeometry(current));
      }
    };
    if next == start {
      break;
    }
    if visited[next] {
      warn!(vertex = current, next, "hull walk revisited a vertex");
      return Err(Error::DegenerateGeometry(current));
    }
    trace!(from = current, to = next, "hull edge");
    visited[next] = true;
    hull.push(next);
    current = next;
  }

  debug!(points = pts.len(), hull = hull.len(), "ordered hull");
  Ok(hull)
}

// First candidate, by index, that leaves no point strictly to the right of
// `current -> candidate`. Candidates at the same position as `current` span no
// line and are skipped.
fn next_vertex<T, F>(pts: &[Point<T>], current: usize, orient: &F) -> Option<usize>
where
  T: HullScalar,
  F: Fn(&Point<T>, &Point<T>, &Point<T>) -> Orientation,
{
  let from = &pts[current];
  (0..pts.len())
    .filter(|&candidate| pts[candidate] != *from)
    .find(|&candidate| {
      let to = &pts[candidate];
      pts
        .iter()
        .enumerate()
        .filter(|&(idx, _)| idx != current && idx != candidate)
        .all(|(_, pt)| !orient(from, to, pt).is_right())
    })
}

// Smallest x coordinate. The first of several equal minima wins.
// O(n)
fn leftmost_point_index<T>(pts: &[Point<T>]) -> Result<usize, Error>
where
  T: HullScalar,
{
  pts
    .iter()
    .enumerate()
    .min_by(|(_, a), (_, b)| {
      a.x_coord()
        .partial_cmp(b.x_coord())
        .unwrap_or(Ordering::Equal)
    })
    .map(|(index, _)| index)
    .ok_or(Error::InvalidInput(pts.len()))
}
