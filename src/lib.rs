pub mod error;
pub mod math;
pub mod mesh;
pub mod operations;
pub mod tessellation;

pub use error::{LensError, Result};
