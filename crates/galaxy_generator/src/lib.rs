//! Procedural spiral galaxy point clouds.
//!
//! [`generate`] turns a [`GalaxyParameters`] record and a [`RandomSource`] into a
//! [`PointCloud`]: one position and one color per particle, laid out along
//! evenly spaced spiral arms with per-axis random scatter.
mod error;
mod generate;
mod parameters;
mod point_cloud;
mod random;

pub use error::GalaxyError;
pub use generate::{branch_angle, generate, generate_parallel};
pub use parameters::GalaxyParameters;
pub use point_cloud::PointCloud;
pub use random::RandomSource;
