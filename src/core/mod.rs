pub mod color;
pub mod coord;
pub mod image;
pub mod rng;
