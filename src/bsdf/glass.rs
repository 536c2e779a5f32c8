use crate::core::{color::Color, rng::Rng};

use super::{util, BsdfT};

/// Dielectric interface that stochastically reflects or refracts with a
/// Schlick-weighted coin flip.
pub struct Glass {
    reflectance: Color,
    transmittance: Color,
    ior: f32,
}

impl Glass {
    pub fn new(reflectance: Color, transmittance: Color, ior: f32) -> Self {
        Self {
            reflectance,
            transmittance,
            ior,
        }
    }
}

impl BsdfT for Glass {
    fn f(&self, _wo: glam::Vec3A, _wi: glam::Vec3A) -> Color {
        Color::BLACK
    }

    fn sample_f(&self, wo: glam::Vec3A, rng: &mut Rng) -> (glam::Vec3A, f32, Color) {
        let refracted = match util::refract(wo, self.ior) {
            Some(wi) => wi,
            None => {
                let wi = util::reflect(wo);
                return (wi, 1.0, self.reflectance / wi.z.abs());
            }
        };

        let schlick = util::schlick_fresnel(self.ior, refracted.z.abs());
        if rng.coin_flip(schlick) {
            let wi = util::reflect(wo);
            (wi, schlick, schlick * self.reflectance / wi.z.abs())
        } else {
            // radiance compresses or expands across the interface
            let eta = if wo.z > 0.0 {
                1.0 / self.ior
            } else {
                self.ior
            };
            let wi = refracted;
            (
                wi,
                1.0 - schlick,
                (1.0 - schlick) * self.transmittance / wi.z.abs() / (eta * eta),
            )
        }
    }

    fn is_delta(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matched_index_always_refracts() {
        let glass = Glass::new(Color::WHITE, Color::WHITE, 1.0);
        let mut rng = Rng::from_seed(4);
        for &z in &[0.95_f32, 0.99, -0.97] {
            let sin = (1.0 - z * z).sqrt();
            let wo = glam::Vec3A::new(sin, 0.0, z);
            for _ in 0..2000 {
                let (wi, pdf, _) = glass.sample_f(wo, &mut rng);
                assert!((wi - (-wo)).length() < 1e-5, "reflected instead: {:?}", wi);
                assert!(pdf > 0.999, "pdf = {}", pdf);
            }
        }
    }

    #[test]
    fn total_internal_reflection_falls_back_to_mirror() {
        let glass = Glass::new(Color::new(0.9, 0.9, 0.9), Color::WHITE, 1.5);
        let mut rng = Rng::from_seed(6);
        // exiting well past the critical angle
        let wo = glam::Vec3A::new(0.866, 0.0, -0.5);
        for _ in 0..100 {
            let (wi, pdf, weight) = glass.sample_f(wo, &mut rng);
            assert_eq!(wi, util::reflect(wo));
            assert_eq!(pdf, 1.0);
            assert!((weight.r - 0.9 / 0.5).abs() < 1e-5);
        }
    }

    #[test]
    fn branch_weights_match_the_schlick_split() {
        let glass = Glass::new(Color::WHITE, Color::gray(0.8), 1.5);
        let mut rng = Rng::from_seed(8);
        let wo = glam::Vec3A::new(0.3, 0.2, 0.933).normalize();
        let refracted = util::refract(wo, 1.5).unwrap();
        let schlick = util::schlick_fresnel(1.5, refracted.z.abs());

        let mut saw_reflect = false;
        let mut saw_refract = false;
        for _ in 0..5000 {
            let (wi, pdf, weight) = glass.sample_f(wo, &mut rng);
            if wi.z > 0.0 {
                saw_reflect = true;
                assert!((pdf - schlick).abs() < 1e-6);
                assert!((weight.r - schlick / wi.z.abs()).abs() < 1e-5);
            } else {
                saw_refract = true;
                assert!((pdf - (1.0 - schlick)).abs() < 1e-6);
                // entering from outside: transmittance scaled by ior^2
                let expected = (1.0 - schlick) * 0.8 * 1.5 * 1.5 / wi.z.abs();
                assert!((weight.g - expected).abs() < 1e-4);
            }
        }
        assert!(saw_reflect && saw_refract);
    }

    #[test]
    fn pointwise_evaluation_is_zero() {
        let glass = Glass::new(Color::WHITE, Color::WHITE, 1.5);
        let wo = glam::Vec3A::new(0.0, 0.6, 0.8);
        assert_eq!(glass.f(wo, util::reflect(wo)), Color::BLACK);
        assert!(glass.is_delta());
    }
}
