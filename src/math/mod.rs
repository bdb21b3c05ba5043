pub mod semi_diameter;
pub mod triangle;

pub use semi_diameter::auto_semi_diameter;
pub use triangle::triangle_area;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;
