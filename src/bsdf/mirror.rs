use crate::core::{color::Color, rng::Rng};

use super::{util, BsdfT};

/// Perfect specular reflector.
pub struct Mirror {
    reflectance: Color,
}

impl Mirror {
    pub fn new(reflectance: Color) -> Self {
        Self { reflectance }
    }
}

impl BsdfT for Mirror {
    fn f(&self, _wo: glam::Vec3A, _wi: glam::Vec3A) -> Color {
        Color::BLACK
    }

    fn sample_f(&self, wo: glam::Vec3A, _rng: &mut Rng) -> (glam::Vec3A, f32, Color) {
        let wi = util::reflect(wo);
        (wi, 1.0, self.reflectance / wi.z.abs())
    }

    fn is_delta(&self) -> bool {
        true
    }
}
