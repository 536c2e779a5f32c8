use crate::core::{color::Color, rng::Rng};

use super::BsdfT;

/// Emitting surface. Scattering is zero; the emitted radiance is read off
/// through `emission` by the integrator.
pub struct Emission {
    radiance: Color,
}

impl Emission {
    pub fn new(radiance: Color) -> Self {
        Self { radiance }
    }
}

impl BsdfT for Emission {
    fn f(&self, _wo: glam::Vec3A, _wi: glam::Vec3A) -> Color {
        Color::BLACK
    }

    fn sample_f(&self, _wo: glam::Vec3A, rng: &mut Rng) -> (glam::Vec3A, f32, Color) {
        let wi = rng.cosine_weighted_on_hemisphere();
        (wi, std::f32::consts::FRAC_1_PI, Color::BLACK)
    }

    fn is_delta(&self) -> bool {
        false
    }

    fn emission(&self) -> Color {
        self.radiance
    }
}
