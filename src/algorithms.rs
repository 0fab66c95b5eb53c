pub mod convex_hull;

#[doc(inline)]
pub use convex_hull::extreme_edges::{extreme_edges, unordered_hull, unordered_hull_with};
#[doc(inline)]
pub use convex_hull::gift_wrapping::{ordered_hull, ordered_hull_with};
