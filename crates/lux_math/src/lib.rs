// Re-export glam for convenience
pub use glam::*;

// Lux math types
mod interval;
mod optics;
mod ray;
pub use interval::Interval;
pub use optics::{normalize, reflect, transmit};
pub use ray::Ray;
