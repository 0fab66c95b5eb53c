use std::cmp::Ordering;

use crate::HullScalar;

/// Position of a point relative to a directed line.
///
/// Walking along the line, `CounterClockWise` points are on the left and
/// `ClockWise` points are on the right.
#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Copy, Clone)]
pub enum Orientation {
  CounterClockWise,
  ClockWise,
  CoLinear,
}

impl Orientation {
  /// Locate `q` relative to the directed line `p1 -> p2`.
  ///
  /// The sign test is exact: no epsilon is applied, so points very close to
  /// the line may be misclassified by rounding. Use a
  /// [`Predicate`](crate::Predicate) if that matters.
  ///
  /// # Examples
  ///
  /// ```rust
  /// # use hullbrute::data::Point;
  /// # use hullbrute::Orientation;
  /// let p1 = Point::new([0.0, 0.0]);
  /// let p2 = Point::new([0.0, 1.0]); // One unit above p1.
  /// assert!(Orientation::new(&p1, &p2, &Point::new([0.0, 2.0])).is_colinear());
  /// assert!(Orientation::new(&p1, &p2, &Point::new([-1.0, 2.0])).is_left());
  /// assert!(Orientation::new(&p1, &p2, &Point::new([1.0, 2.0])).is_right());
  /// ```
  pub fn new<T>(p1: &[T; 2], p2: &[T; 2], q: &[T; 2]) -> Orientation
  where
    T: HullScalar,
  {
    Orientation::from_side_product(Orientation::side_product(p1, p2, q))
  }

  /// Dot product of the left-normal of `p2 - p1` with `q - p1`.
  ///
  /// Positive when `q` is right of `p1 -> p2`, negative when it is left, and
  /// zero when the three points are colinear.
  pub fn side_product<T>(p1: &[T; 2], p2: &[T; 2], q: &[T; 2]) -> T
  where
    T: HullScalar,
  {
    let dir = [p2[0] - p1[0], p2[1] - p1[1]];
    let norm = [dir[1], -dir[0]];
    let offset = [q[0] - p1[0], q[1] - p1[1]];
    norm[0] * offset[0] + norm[1] * offset[1]
  }

  pub(crate) fn from_side_product<T>(s: T) -> Orientation
  where
    T: HullScalar,
  {
    if s < T::zero() {
      Orientation::CounterClockWise
    } else if s > T::zero() {
      Orientation::ClockWise
    } else {
      Orientation::CoLinear
    }
  }

  // `geometry_predicates` reports a positive determinant for left turns.
  pub(crate) fn from_determinant(ord: Ordering) -> Orientation {
    match ord {
      Ordering::Greater => Orientation::CounterClockWise,
      Ordering::Less => Orientation::ClockWise,
      Ordering::Equal => Orientation::CoLinear,
    }
  }

  pub fn is_colinear(self) -> bool {
    matches!(self, Orientation::CoLinear)
  }

  pub fn is_left(self) -> bool {
    matches!(self, Orientation::CounterClockWise)
  }

  pub fn is_right(self) -> bool {
    matches!(self, Orientation::ClockWise)
  }

  /// The `(is_left, is_right)` pair. Colinear points set neither flag.
  pub fn location(self) -> (bool, bool) {
    (self.is_left(), self.is_right())
  }

  #[must_use]
  pub fn reverse(self) -> Orientation {
    match self {
      Orientation::CounterClockWise => Orientation::ClockWise,
      Orientation::ClockWise => Orientation::CounterClockWise,
      Orientation::CoLinear => Orientation::CoLinear,
    }
  }
}

/// Which side of the directed line `(p1x, p1y) -> (p2x, p2y)` the point
/// `(qx, qy)` is on, as `(is_left, is_right)`.
///
/// ```rust
/// # use hullbrute::location;
/// assert_eq!(location(0.0, 0.0, 4.0, 0.0, 2.0, 2.0), (true, false));
/// assert_eq!(location(0.0, 0.0, 4.0, 0.0, 2.0, -2.0), (false, true));
/// assert_eq!(location(0.0, 0.0, 4.0, 0.0, 8.0, 0.0), (false, false));
/// ```
pub fn location<T>(p1x: T, p1y: T, p2x: T, p2y: T, qx: T, qy: T) -> (bool, bool)
where
  T: HullScalar,
{
  Orientation::new(&[p1x, p1y], &[p2x, p2y], &[qx, qy]).location()
}
