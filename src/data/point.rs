use array_init::array_init;
use rand::distributions::{Distribution, Standard};
use rand::Rng;
use std::fmt;
use std::ops::Deref;
use std::ops::Index;
use std::str::FromStr;

use crate::{HullScalar, Orientation};

/// A point in the plane.
///
/// Equality is exact and component-wise. Two points that differ in the last
/// bit of a coordinate are different points.
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(transparent)]
pub struct Point<T = f64> {
  pub array: [T; 2],
}

// Random sampling.
impl<T> Distribution<Point<T>> for Standard
where
  Standard: Distribution<T>,
{
  fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Point<T> {
    Point {
      array: array_init(|_| rng.gen()),
    }
  }
}

impl<T> Point<T> {
  pub const fn new(array: [T; 2]) -> Point<T> {
    Point { array }
  }

  pub fn x_coord(&self) -> &T {
    &self.array[0]
  }

  pub fn y_coord(&self) -> &T {
    &self.array[1]
  }

  pub fn cast<U, F>(&self, f: F) -> Point<U>
  where
    T: Clone,
    F: Fn(T) -> U,
  {
    Point {
      array: array_init(|i| f(self.array[i].clone())),
    }
  }
}

impl<T: HullScalar> Point<T> {
  /// Which side of the directed line `self -> q` the point `r` lies on.
  pub fn orientation(&self, q: &Point<T>, r: &Point<T>) -> Orientation {
    Orientation::new(self, q, r)
  }

  /// Read consecutive `x y` pairs from whitespace-separated text.
  ///
  /// Line breaks carry no meaning, so `"0 0 4 0\n4 4"` holds three points.
  ///
  /// ```rust
  /// # use hullbrute::data::{ParsePointError, Point};
  /// let pts: Vec<Point> = Point::parse_many("0 0\n4 0\n4 4").unwrap();
  /// assert_eq!(pts[2], Point::new([4.0, 4.0]));
  /// assert_eq!(
  ///   Point::<f64>::parse_many("1 2 3").err(),
  ///   Some(ParsePointError::MissingCoordinate)
  /// );
  /// ```
  pub fn parse_many(input: &str) -> Result<Vec<Point<T>>, ParsePointError> {
    let mut fields = input.split_whitespace();
    let mut points = Vec::new();
    while let Some(x) = fields.next() {
      let x = parse_coord(Some(x))?;
      let y = parse_coord(fields.next())?;
      points.push(Point::new([x, y]));
    }
    Ok(points)
  }
}

fn parse_coord<T: FromStr>(field: Option<&str>) -> Result<T, ParsePointError> {
  let field = field.ok_or(ParsePointError::MissingCoordinate)?;
  field
    .parse()
    .map_err(|_| ParsePointError::InvalidNumber(field.to_string()))
}

impl<T> Index<usize> for Point<T> {
  type Output = T;
  fn index(&self, key: usize) -> &T {
    self.array.index(key)
  }
}

impl<T> Deref for Point<T> {
  type Target = [T; 2];
  fn deref(&self) -> &[T; 2] {
    &self.array
  }
}

impl<T> From<(T, T)> for Point<T> {
  fn from(point: (T, T)) -> Point<T> {
    Point {
      array: [point.0, point.1],
    }
  }
}

impl<T: fmt::Display> fmt::Display for Point<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{} {}", self.array[0], self.array[1])
  }
}

impl<T: HullScalar> FromStr for Point<T> {
  type Err = ParsePointError;

  fn from_str(s: &str) -> Result<Point<T>, ParsePointError> {
    let mut fields = s.split_whitespace();
    let x = parse_coord(fields.next())?;
    let y = parse_coord(fields.next())?;
    if fields.next().is_some() {
      return Err(ParsePointError::TrailingInput);
    }
    Ok(Point::new([x, y]))
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsePointError {
  MissingCoordinate,
  TrailingInput,
  InvalidNumber(String),
}

impl fmt::Display for ParsePointError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ParsePointError::MissingCoordinate => write!(f, "Expected two coordinates per point"),
      ParsePointError::TrailingInput => write!(f, "Unexpected input after the y coordinate"),
      ParsePointError::InvalidNumber(field) => write!(f, "Invalid coordinate: {:?}", field),
    }
  }
}

impl std::error::Error for ParsePointError {}
