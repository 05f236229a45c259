pub mod ode;
mod utils;

pub use ode::{DynamicResizer, Euler, FixedResizer, Model, ModelState, Resizer};
