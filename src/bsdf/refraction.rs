use crate::core::{color::Color, rng::Rng};

use super::BsdfT;

/// Pure transmission without Fresnel weighting. Kept as a placeholder with
/// zero contribution; Glass is the physically meaningful dielectric model.
pub struct Refraction {
    #[allow(dead_code)]
    transmittance: Color,
    #[allow(dead_code)]
    ior: f32,
}

impl Refraction {
    pub fn new(transmittance: Color, ior: f32) -> Self {
        Self { transmittance, ior }
    }
}

impl BsdfT for Refraction {
    fn f(&self, _wo: glam::Vec3A, _wi: glam::Vec3A) -> Color {
        Color::BLACK
    }

    fn sample_f(&self, wo: glam::Vec3A, _rng: &mut Rng) -> (glam::Vec3A, f32, Color) {
        (wo, 0.0, Color::BLACK)
    }

    fn is_delta(&self) -> bool {
        true
    }
}
