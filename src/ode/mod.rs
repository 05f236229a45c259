pub mod euler;
pub mod model;
pub mod resizer;

pub use euler::Euler;
pub use model::{Model, ModelState};
pub use resizer::{DynamicResizer, FixedLength, FixedResizer, Resize, Resizer};
