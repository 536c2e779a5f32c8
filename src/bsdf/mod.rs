mod emission;
mod glass;
mod microfacet;
mod mirror;
mod refraction;
pub mod util;

pub use emission::*;
pub use glass::*;
pub use microfacet::*;
pub use mirror::*;
pub use refraction::*;

use crate::core::{color::Color, rng::Rng};

/// Surface scattering model. Directions live in the local shading frame
/// with the geometric normal at (0, 0, 1).
#[enum_dispatch::enum_dispatch(Bsdf)]
pub trait BsdfT: Send + Sync {
    /// bsdf value for a fixed pair of directions
    fn f(&self, wo: glam::Vec3A, wi: glam::Vec3A) -> Color;

    /// importance-sample a scattered direction for the given outgoing one
    /// return (wi, pdf, weight); pdf 0 marks a rejected sample
    fn sample_f(&self, wo: glam::Vec3A, rng: &mut Rng) -> (glam::Vec3A, f32, Color);

    fn is_delta(&self) -> bool;

    fn emission(&self) -> Color {
        Color::BLACK
    }
}

#[enum_dispatch::enum_dispatch]
pub enum Bsdf {
    Mirror,
    Microfacet,
    Refraction,
    Glass,
    Emission,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatch_reaches_every_variant() {
        let mut rng = Rng::from_seed(21);
        let wo = glam::Vec3A::new(0.0, 0.6, 0.8);
        let bsdfs: Vec<Bsdf> = vec![
            Mirror::new(Color::WHITE).into(),
            Microfacet::new(Color::gray(0.2), Color::gray(3.0), 0.3).into(),
            Refraction::new(Color::WHITE, 1.5).into(),
            Glass::new(Color::WHITE, Color::WHITE, 1.5).into(),
            Emission::new(Color::WHITE).into(),
        ];
        for bsdf in &bsdfs {
            let (wi, pdf, weight) = bsdf.sample_f(wo, &mut rng);
            assert!(wi.is_finite());
            assert!(pdf >= 0.0);
            if pdf > 0.0 {
                assert!(weight.is_finite());
            }
            let _ = bsdf.f(wo, wi);
            let _ = bsdf.is_delta();
        }
        assert_eq!(bsdfs[4].emission(), Color::WHITE);
        assert_eq!(bsdfs[0].emission(), Color::BLACK);
    }
}
