use std::f32::consts::PI;

use crate::core::{color::Color, rng::Rng};

use super::{util, BsdfT};

/// Rough conductor with a Beckmann microfacet distribution.
pub struct Microfacet {
    eta: Color,
    k: Color,
    alpha: f32,
}

impl Microfacet {
    pub fn new(eta: Color, k: Color, alpha: f32) -> Self {
        Self { eta, k, alpha }
    }
}

impl BsdfT for Microfacet {
    fn f(&self, wo: glam::Vec3A, wi: glam::Vec3A) -> Color {
        if wo.z <= 0.0 || wi.z <= 0.0 {
            return Color::BLACK;
        }

        let half = (wo + wi).normalize();
        let fresnel = util::fresnel_conductor(self.eta, self.k, wi.z);
        let geom = util::beckmann_g(wo, wi, self.alpha);
        let ndf = util::beckmann_ndf(half.z, self.alpha);

        fresnel * (geom * ndf / (4.0 * wo.z * wi.z))
    }

    fn sample_f(&self, wo: glam::Vec3A, rng: &mut Rng) -> (glam::Vec3A, f32, Color) {
        let (rand_x, rand_y) = rng.uniform_2d();
        let alpha_sqr = self.alpha * self.alpha;

        // inverse-CDF draw of the half-vector elevation, uniform azimuth
        let theta_h = (-alpha_sqr * (1.0 - rand_x).ln()).sqrt().atan();
        let tan_theta_h = theta_h.tan();
        let (sin_theta_h, cos_theta_h) = theta_h.sin_cos();
        let phi_h = 2.0 * PI * rand_y;
        let (sin_phi_h, cos_phi_h) = phi_h.sin_cos();

        let half = glam::Vec3A::new(
            sin_theta_h * cos_phi_h,
            sin_theta_h * sin_phi_h,
            cos_theta_h,
        );
        let wi = 2.0 * wo.dot(half) * half - wo;
        if wi.z <= 0.0 {
            return (wi, 0.0, Color::BLACK);
        }

        // half-vector density over solid angle, then the reflection Jacobian
        let pdf_half =
            (-tan_theta_h * tan_theta_h / alpha_sqr).exp() / (PI * alpha_sqr * cos_theta_h.powi(3));
        let pdf = pdf_half / (4.0 * wo.dot(half).abs());

        (wi, pdf, self.f(wo, wi))
    }

    fn is_delta(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gold() -> Microfacet {
        Microfacet::new(
            Color::new(0.143, 0.375, 1.442),
            Color::new(3.983, 2.386, 1.603),
            0.5,
        )
    }

    #[test]
    fn sampled_weight_equals_evaluation() {
        let bsdf = gold();
        let mut rng = Rng::from_seed(5);
        let mut accepted = 0;
        for _ in 0..5000 {
            let mut wo = rng.uniform_on_sphere();
            wo.z = wo.z.abs().max(0.05);
            let wo = wo.normalize();
            let (wi, pdf, weight) = bsdf.sample_f(wo, &mut rng);
            if pdf > 0.0 {
                accepted += 1;
                let eval = bsdf.f(wo, wi);
                assert_eq!(weight, eval);
                assert!(weight.is_finite());
                assert!(pdf.is_finite());
            } else {
                assert_eq!(weight, Color::BLACK);
            }
        }
        assert!(accepted > 1000);
    }

    #[test]
    fn below_hemisphere_evaluates_to_zero() {
        let bsdf = gold();
        let up = glam::Vec3A::new(0.3, 0.1, 0.95).normalize();
        let down = glam::Vec3A::new(0.2, -0.4, -0.89).normalize();
        assert_eq!(bsdf.f(up, down), Color::BLACK);
        assert_eq!(bsdf.f(down, up), Color::BLACK);
        assert!(!bsdf.is_delta());
    }

    // the sampling estimate of the reflection integral must match a direct
    // quadrature of f over the hemisphere
    #[test]
    fn importance_sampling_matches_quadrature() {
        let bsdf = gold();
        let wo = glam::Vec3A::new(0.5, 0.0, 0.866).normalize();

        let theta_steps = 128;
        let phi_steps = 256;
        let mut quad = Color::BLACK;
        for ti in 0..theta_steps {
            let theta = (ti as f32 + 0.5) / theta_steps as f32 * 0.5 * PI;
            let (sin_theta, cos_theta) = theta.sin_cos();
            for pj in 0..phi_steps {
                let phi = (pj as f32 + 0.5) / phi_steps as f32 * 2.0 * PI;
                let wi =
                    glam::Vec3A::new(sin_theta * phi.cos(), sin_theta * phi.sin(), cos_theta);
                quad += bsdf.f(wo, wi) * (cos_theta * sin_theta);
            }
        }
        quad *= 0.5 * PI / theta_steps as f32 * 2.0 * PI / phi_steps as f32;

        let mut rng = Rng::from_seed(9);
        let samples = 50_000;
        let mut estimate = Color::BLACK;
        for _ in 0..samples {
            let (wi, pdf, weight) = bsdf.sample_f(wo, &mut rng);
            if pdf > 0.0 {
                estimate += weight * (wi.z / pdf);
            }
        }
        estimate /= samples as f32;

        assert!(
            (estimate.luminance() - quad.luminance()).abs() < 0.05 * quad.luminance(),
            "estimate {:?} vs quadrature {:?}",
            estimate,
            quad
        );
    }
}
