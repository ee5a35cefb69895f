pub use crate::galaxy::{GalaxyConfig, InstalledGalaxy};
pub use galaxy_generator::{GalaxyParameters, PointCloud};
