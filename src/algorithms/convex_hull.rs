use crate::data::Point;
use crate::{Error, HullConfig};

pub mod extreme_edges;
pub mod gift_wrapping;

// Every hull algorithm needs at least three points. The size is checked
// before the configuration so that short inputs always report InvalidInput.
pub(crate) fn check_input<T>(pts: &[Point<T>], config: &HullConfig) -> Result<(), Error> {
  if pts.len() < 3 {
    return Err(Error::InvalidInput(pts.len()));
  }
  config.validate()
}
