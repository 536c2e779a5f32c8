use crate::core::color::Color;

/// Mirror `wo` about the local shading normal (0, 0, 1).
pub fn reflect(wo: glam::Vec3A) -> glam::Vec3A {
    glam::Vec3A::new(-wo.x, -wo.y, wo.z)
}

/// Snell refraction across the z = 0 interface, `None` on total internal
/// reflection. `wo.z > 0` means the ray enters from outside.
pub fn refract(wo: glam::Vec3A, ior: f32) -> Option<glam::Vec3A> {
    let ior_ratio = if wo.z > 0.0 { 1.0 / ior } else { ior };
    let radicand = 1.0 - ior_ratio * ior_ratio * (1.0 - wo.z * wo.z);
    if radicand < 0.0 {
        return None;
    }

    let wi_z = if wo.z > 0.0 {
        -radicand.sqrt()
    } else {
        radicand.sqrt()
    };
    Some(glam::Vec3A::new(
        -ior_ratio * wo.x,
        -ior_ratio * wo.y,
        wi_z,
    ))
}

/// Reflectance at normal incidence, squared Schlick base term.
pub fn fresnel_r0_sqr(ior: f32) -> f32 {
    let r0 = (1.0 - ior) / (1.0 + ior);
    r0 * r0
}

/// Schlick approximation of dielectric reflectance at the given |cos|.
pub fn schlick_fresnel(ior: f32, cos: f32) -> f32 {
    let r0_sqr = fresnel_r0_sqr(ior);
    r0_sqr + (1.0 - r0_sqr) * pow5(1.0 - cos)
}

/// Dielectric-conductor reflectance per channel, average of the s- and
/// p-polarized terms.
pub fn fresnel_conductor(eta: Color, k: Color, cos: f32) -> Color {
    let eta_sqr_k_sqr = eta * eta + k * k;
    let two_eta_cos = eta * (2.0 * cos);
    let cos_sqr = cos * cos;

    let rs = (eta_sqr_k_sqr - two_eta_cos + Color::gray(cos_sqr))
        / (eta_sqr_k_sqr + two_eta_cos + Color::gray(cos_sqr));
    let rp = (eta_sqr_k_sqr * cos_sqr - two_eta_cos + Color::WHITE)
        / (eta_sqr_k_sqr * cos_sqr + two_eta_cos + Color::WHITE);

    (rs + rp) * 0.5
}

/// Beckmann normal distribution, `cos_theta_h` is the half vector's z.
pub fn beckmann_ndf(cos_theta_h: f32, alpha: f32) -> f32 {
    let cos_sqr = cos_theta_h * cos_theta_h;
    let tan_sqr = (1.0 - cos_sqr) / cos_sqr;
    let alpha_sqr = alpha * alpha;
    (-tan_sqr / alpha_sqr).exp() / (std::f32::consts::PI * alpha_sqr * cos_sqr * cos_sqr)
}

/// Smith masking-shadowing for the Beckmann distribution.
pub fn beckmann_g(wo: glam::Vec3A, wi: glam::Vec3A, alpha: f32) -> f32 {
    1.0 / (1.0 + beckmann_lambda(wi, alpha) + beckmann_lambda(wo, alpha))
}

// rational fit to the Beckmann Smith lambda in a = 1 / (alpha tan_theta)
fn beckmann_lambda(w: glam::Vec3A, alpha: f32) -> f32 {
    let cos_sqr = w.z * w.z;
    let tan_theta = (1.0 - cos_sqr).max(0.0).sqrt() / w.z.abs();
    let a = 1.0 / (alpha * tan_theta);
    if a >= 1.6 {
        0.0
    } else {
        (1.0 - 1.259 * a + 0.396 * a * a) / (3.535 * a + 2.181 * a * a)
    }
}

fn pow5(x: f32) -> f32 {
    x * x * x * x * x
}
