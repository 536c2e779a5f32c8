pub mod bsdf;
pub mod core;
pub mod light;

pub use crate::bsdf::{Bsdf, BsdfT, Emission, Glass, Microfacet, Mirror, Refraction};
pub use crate::core::color::Color;
pub use crate::core::coord::Coordinate;
pub use crate::core::image::RadianceImage;
pub use crate::core::rng::Rng;
pub use crate::light::{EnvLight, LightT};
