use crate::{Error, HullScalar, Orientation};

/// How the orientation of a point against a hull edge candidate is decided.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Predicate {
  /// Exact sign of the side product. Near-colinear points may be
  /// misclassified by rounding.
  Exact,
  /// Side products within `eps` of zero count as colinear.
  Tolerance(f64),
  /// Adaptive exact arithmetic from `geometry_predicates`.
  Robust,
}

impl Default for Predicate {
  fn default() -> Self {
    Predicate::Exact
  }
}

impl Predicate {
  pub fn validate(&self) -> Result<(), Error> {
    match self {
      Predicate::Tolerance(eps) if eps.is_nan() || *eps < 0.0 => Err(Error::InvalidTolerance),
      _ => Ok(()),
    }
  }

  /// Locate `q` relative to the directed line `p1 -> p2`.
  pub fn orient<T>(&self, p1: &[T; 2], p2: &[T; 2], q: &[T; 2]) -> Orientation
  where
    T: HullScalar,
  {
    match self {
      Predicate::Exact => Orientation::new(p1, p2, q),
      Predicate::Tolerance(eps) => {
        let s = Orientation::side_product(p1, p2, q).to_f64_lossless();
        if s < -eps {
          Orientation::CounterClockWise
        } else if s > *eps {
          Orientation::ClockWise
        } else {
          Orientation::CoLinear
        }
      }
      Predicate::Robust => Orientation::from_determinant(T::orient2d_robust(p1, p2, q)),
    }
  }
}

/// Options shared by every hull algorithm.
///
/// ```rust
/// # use hullbrute::{HullConfig, Predicate};
/// let config = HullConfig::default().with_predicate(Predicate::Robust);
/// assert_eq!(config.predicate, Predicate::Robust);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HullConfig {
  pub predicate: Predicate,
}

impl HullConfig {
  #[must_use]
  pub fn with_predicate(mut self, predicate: Predicate) -> HullConfig {
    self.predicate = predicate;
    self
  }

  pub fn validate(&self) -> Result<(), Error> {
    self.predicate.validate()
  }
}
