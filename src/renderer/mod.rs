pub mod canvas;
pub mod transform;

pub use canvas::{mix, Canvas};
pub use transform::Transform;
