pub(crate) mod point;

pub use point::{ParsePointError, Point};
