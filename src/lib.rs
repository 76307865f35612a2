pub mod error;
pub mod numeric;
pub mod demo;
pub mod cli;

pub use error::Error;
pub use numeric::{Vec3, Double3, add, subtract, dot, magnitude, format};
