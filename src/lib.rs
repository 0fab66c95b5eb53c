#![deny(clippy::cast_lossless)]
#![doc(test(no_crate_inject))]
//! Brute-force convex hulls of 2D point sets.
//!
//! Two $O(n^3)$ strategies are provided, both built on the same
//! [orientation predicate](Orientation):
//!
//! * [`unordered_hull`](algorithms::unordered_hull) keeps every pair of points
//!   whose supporting line has no other point strictly to its left, and returns
//!   the set of indices that appear in any such pair.
//! * [`ordered_hull`](algorithms::ordered_hull) gift-wraps the point set,
//!   starting at the leftmost point, and returns the hull vertices in
//!   counter-clockwise order.
//!
//! ```rust
//! # use hullbrute::algorithms::{ordered_hull, unordered_hull};
//! # use hullbrute::data::Point;
//! let square = vec![
//!   Point::new([0.0, 0.0]),
//!   Point::new([4.0, 0.0]),
//!   Point::new([4.0, 4.0]),
//!   Point::new([0.0, 4.0]),
//!   Point::new([2.0, 2.0]),
//! ];
//! let set = unordered_hull(&square).unwrap();
//! assert_eq!(set.into_iter().collect::<Vec<_>>(), vec![0, 1, 2, 3]);
//! assert_eq!(ordered_hull(&square).unwrap(), vec![0, 1, 2, 3]);
//! ```
use num_traits::Float;
use std::fmt::{Debug, Display};
use std::str::FromStr;

pub mod algorithms;
mod config;
pub mod data;
mod orientation;

pub use config::{HullConfig, Predicate};
pub use orientation::{location, Orientation};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
  /// Fewer than three points were given. Carries the number of points.
  InvalidInput(usize),
  /// The gift-wrapping walk got stuck at the given vertex index.
  DegenerateGeometry(usize),
  /// A tolerance predicate was configured with a negative or NaN epsilon.
  InvalidTolerance,
}

impl std::fmt::Display for Error {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
    match self {
      Error::InvalidInput(n) => write!(f, "Invalid input: need at least 3 points, got {}", n),
      Error::DegenerateGeometry(v) => {
        write!(f, "Degenerate geometry: no hull edge found from vertex {}", v)
      }
      Error::InvalidTolerance => write!(f, "Tolerance must be a non-negative number"),
    }
  }
}

impl std::error::Error for Error {}

/// Coordinate type of a [`Point`](data::Point).
///
/// Comparisons are exact. No epsilon is applied anywhere unless a
/// [`Predicate::Tolerance`] is configured explicitly.
pub trait HullScalar: Float + Debug + Display + FromStr {
  /// Widen to `f64` for the adaptive-precision predicate. Must be lossless.
  fn to_f64_lossless(self) -> f64;

  /// Sign of the orientation determinant of `p`, `q`, `r`, computed with
  /// adaptive exact arithmetic. Positive when `r` is left of `p -> q`.
  fn orient2d_robust(p: &[Self; 2], q: &[Self; 2], r: &[Self; 2]) -> std::cmp::Ordering {
    let orient = geometry_predicates::predicates::orient2d(
      [p[0].to_f64_lossless(), p[1].to_f64_lossless()],
      [q[0].to_f64_lossless(), q[1].to_f64_lossless()],
      [r[0].to_f64_lossless(), r[1].to_f64_lossless()],
    );
    if orient > 0.0 {
      std::cmp::Ordering::Greater
    } else if orient < 0.0 {
      std::cmp::Ordering::Less
    } else {
      std::cmp::Ordering::Equal
    }
  }
}

macro_rules! floating_precision {
  ( $( $ty:ty ),* ) => {
    $(
      impl HullScalar for $ty {
        fn to_f64_lossless(self) -> f64 {
          f64::from(self)
        }
      }
    )*
  };
}

floating_precision!(f32, f64);

#[cfg(test)]
pub mod testing;
