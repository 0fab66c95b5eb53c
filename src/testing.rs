// Strategies and checks shared by the unit tests:
//  * points on an integer grid, where every side product is exact
//  * point sets in general position
//  * boundary checks for hull results
use crate::data::Point;
use crate::Orientation;

use ordered_float::OrderedFloat;
use proptest::collection::*;
use proptest::prelude::*;
use std::collections::BTreeSet;
use std::ops::RangeInclusive;

pub const GRID: RangeInclusive<i32> = -1000..=1000;

/// Any point with finite coordinates.
pub fn any_finite() -> impl Strategy<Value = Point> {
  use proptest::num::f64::{NEGATIVE, NORMAL, POSITIVE, SUBNORMAL, ZERO};
  let coord = POSITIVE | NEGATIVE | NORMAL | SUBNORMAL | ZERO;
  (coord.clone(), coord).prop_map(|(x, y)| Point::new([x, y]))
}

/// Points with small integer coordinates. Side products of these are exact.
pub fn any_grid() -> impl Strategy<Value = Point> {
  (GRID, GRID).prop_map(|(x, y)| Point::new([f64::from(x), f64::from(y)]))
}

/// Grid points with no duplicates and no three points on a line.
pub fn general_position(len: RangeInclusive<usize>) -> impl Strategy<Value = Vec<Point>> {
  vec(any_grid(), len).prop_filter("points must be in general position", |pts| {
    in_general_position(pts)
  })
}

pub fn in_general_position(pts: &[Point]) -> bool {
  let n = pts.len();
  for i in 0..n {
    for j in i + 1..n {
      for k in j + 1..n {
        if pts[i].orientation(&pts[j], &pts[k]).is_colinear() {
          return false;
        }
      }
    }
  }
  true
}

/// Coordinates of the selected points, in a form that can be compared as a set.
pub fn coords<'a, I>(pts: &[Point], indices: I) -> BTreeSet<(OrderedFloat<f64>, OrderedFloat<f64>)>
where
  I: IntoIterator<Item = &'a usize>,
{
  indices
    .into_iter()
    .map(|&idx| (OrderedFloat(pts[idx][0]), OrderedFloat(pts[idx][1])))
    .collect()
}

/// True if no point lies strictly right of any edge of the closed walk `seq`.
pub fn is_ccw_boundary(pts: &[Point], seq: &[usize]) -> bool {
  let h = seq.len();
  (0..h).all(|i| {
    let from = &pts[seq[i]];
    let to = &pts[seq[(i + 1) % h]];
    pts
      .iter()
      .all(|pt| !Orientation::new(from, to, pt).is_right())
  })
}
