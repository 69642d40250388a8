//! Service regions and full-interior coverage.
//!
//! A [`Region`] is a rectangle of cells that must be driven over completely.
//! [`cover`] turns a region plus the corner the robot arrives at into a
//! serpentine sweep that visits each cell exactly once.

mod region;
mod sweep;

pub use region::{Region, RegionError};
pub use sweep::cover;
