use rand::SeedableRng;

/// Random-variate source handed to every sampling call. One instance per
/// worker, never shared.
pub struct Rng {
    rng: rand::rngs::SmallRng,
}

impl Rng {
    pub fn new() -> Self {
        Self {
            rng: rand::rngs::SmallRng::from_entropy(),
        }
    }

    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: rand::rngs::SmallRng::seed_from_u64(seed),
        }
    }

    pub fn uniform_1d(&mut self) -> f32 {
        rand::Rng::gen(&mut self.rng)
    }

    pub fn uniform_2d(&mut self) -> (f32, f32) {
        (self.uniform_1d(), self.uniform_1d())
    }

    /// true with probability `prob`
    pub fn coin_flip(&mut self, prob: f32) -> bool {
        self.uniform_1d() < prob
    }

    pub fn uniform_on_sphere(&mut self) -> glam::Vec3A {
        let (rand_x, rand_y) = self.uniform_2d();
        let phi = rand_x * 2.0 * std::f32::consts::PI;
        let (sin_phi, cos_phi) = phi.sin_cos();
        let cos_theta = 1.0 - 2.0 * rand_y;
        let sin_theta = (1.0 - cos_theta * cos_theta).sqrt();
        glam::Vec3A::new(sin_theta * cos_phi, sin_theta * sin_phi, cos_theta)
    }

    pub fn cosine_weighted_on_hemisphere(&mut self) -> glam::Vec3A {
        let (rand_x, rand_y) = self.uniform_2d();
        let phi = rand_x * 2.0 * std::f32::consts::PI;
        let (sin_phi, cos_phi) = phi.sin_cos();
        let sin_theta_sqr = rand_y;
        let sin_theta = sin_theta_sqr.sqrt();
        let cos_theta = (1.0 - sin_theta_sqr).sqrt();
        glam::Vec3A::new(sin_theta * cos_phi, sin_theta * sin_phi, cos_theta)
    }
}
