use std::f32::consts::PI;
use std::path::Path;

use crate::core::{color::Color, image::RadianceImage, rng::Rng};

use super::LightT;

// keeps the pdf Jacobian finite for directions at the poles
const MIN_SIN_THETA: f32 = 1e-4;

/// Environment light over a borrowed equirectangular radiance image,
/// importance-sampled through a piecewise-constant 2D distribution built
/// once at construction.
pub struct EnvLight<'a> {
    envmap: &'a RadianceImage,
    pdf_envmap: Vec<f32>,
    marginal_y: Vec<f32>,
    conds_y: Vec<f32>,
    avg_power: f32,
}

impl<'a> EnvLight<'a> {
    pub fn new(envmap: &'a RadianceImage) -> Self {
        let w = envmap.width();
        let h = envmap.height();
        log::info!("building environment distribution for a {}x{} map", w, h);

        // per-texel mass, weighted by the shrinking solid angle of
        // equirectangular rows toward the poles
        let mut pdf_envmap = vec![0.0_f32; w * h];
        let mut sum = 0.0;
        for j in 0..h {
            let sin_theta = (PI * (j as f32 + 0.5) / h as f32).sin();
            for i in 0..w {
                let mass = envmap.texel(i, j).luminance() * sin_theta;
                pdf_envmap[j * w + i] = mass;
                sum += mass;
            }
        }
        let avg_power = sum / (w * h) as f32;

        if sum > 0.0 {
            let sum_inv = 1.0 / sum;
            for mass in &mut pdf_envmap {
                *mass *= sum_inv;
            }
        } else {
            log::warn!("environment map has zero luminance, all samples will be rejected");
        }

        let mut marginal_y = vec![0.0_f32; h];
        let mut density = vec![0.0_f32; h];
        let mut cumulative = 0.0;
        for j in 0..h {
            let row_mass: f32 = pdf_envmap[j * w..(j + 1) * w].iter().sum();
            density[j] = row_mass;
            cumulative += row_mass;
            marginal_y[j] = cumulative;
        }

        let mut conds_y = vec![0.0_f32; w * h];
        for j in 0..h {
            if density[j] <= 0.0 {
                continue;
            }
            let density_inv = 1.0 / density[j];
            conds_y[j * w] = pdf_envmap[j * w] * density_inv;
            for i in 1..w {
                conds_y[j * w + i] = conds_y[j * w + i - 1] + pdf_envmap[j * w + i] * density_inv;
            }
        }

        Self {
            envmap,
            pdf_envmap,
            marginal_y,
            conds_y,
            avg_power,
        }
    }

    /// Write the marginal (red) and conditional (green) CDFs as an image,
    /// for eyeballing the distribution build.
    pub fn save_probability_debug<P: AsRef<Path>>(&self, path: P) -> anyhow::Result<()> {
        let w = self.envmap.width();
        let h = self.envmap.height();
        let mut img = image::RgbaImage::new(w as u32, h as u32);
        for j in 0..h {
            for i in 0..w {
                let r = (self.marginal_y[j] * 255.0) as u8;
                let g = (self.conds_y[j * w + i] * 255.0) as u8;
                img.put_pixel(i as u32, j as u32, image::Rgba([r, g, 0, 255]));
            }
        }
        img.save(path.as_ref())?;
        log::info!(
            "saved environment distribution debug image to {}",
            path.as_ref().display()
        );
        Ok(())
    }

    fn pdf_solid_angle(&self, x: usize, y: usize, theta: f32) -> f32 {
        let w = self.envmap.width();
        let h = self.envmap.height();
        let sin_theta = theta.sin().max(MIN_SIN_THETA);
        self.pdf_envmap[y * w + x] * (w * h) as f32 / (2.0 * PI * PI * sin_theta)
    }

    // bilinear lookup at fractional texel coordinates, wrapping across the
    // left/right seam and clamping at the poles
    fn bilerp(&self, x: f32, y: f32) -> Color {
        let w = self.envmap.width();
        let h = self.envmap.height();

        let mut right = x.round() as i64;
        let u1 = right as f32 - x + 0.5;
        let left = if right <= 0 || right >= w as i64 {
            right = 0;
            w - 1
        } else {
            right as usize - 1
        };
        let right = right as usize;

        let mut v = y.round() as i64;
        let v1 = if v <= 0 {
            v = 1;
            1.0
        } else if v >= h as i64 {
            v = h as i64 - 1;
            0.0
        } else {
            v as f32 - y + 0.5
        };
        let v = (v.max(1)) as usize;
        let top = v - 1;
        let bottom = v.min(h - 1);
        let u0 = 1.0 - u1;

        (self.envmap.texel(left, top) * u1 + self.envmap.texel(right, top) * u0) * v1
            + (self.envmap.texel(left, bottom) * u1 + self.envmap.texel(right, bottom) * u0)
                * (1.0 - v1)
    }
}

fn dir_to_theta_phi(dir: glam::Vec3A) -> (f32, f32) {
    let unit = dir.normalize();
    let theta = unit.y.clamp(-1.0, 1.0).acos();
    let phi = (-unit.z).atan2(unit.x) + PI;
    (theta, phi)
}

fn theta_phi_to_dir(theta: f32, phi: f32) -> glam::Vec3A {
    let (sin_theta, cos_theta) = theta.sin_cos();
    let (sin_phi, cos_phi) = (phi - PI).sin_cos();
    glam::Vec3A::new(cos_phi * sin_theta, cos_theta, -sin_phi * sin_theta)
}

impl LightT for EnvLight<'_> {
    fn sample(&self, _position: glam::Vec3A, rng: &mut Rng) -> (glam::Vec3A, f32, Color, f32) {
        let w = self.envmap.width();
        let h = self.envmap.height();
        let (rand_x, rand_y) = rng.uniform_2d();

        // invert the marginal CDF over rows, then the row's conditional CDF
        let y = self.marginal_y.partition_point(|&m| m <= rand_y).min(h - 1);
        let row = &self.conds_y[y * w..(y + 1) * w];
        let x = row.partition_point(|&c| c <= rand_x).min(w - 1);

        let theta = y as f32 / h as f32 * PI;
        let phi = x as f32 / w as f32 * 2.0 * PI;
        let wi = theta_phi_to_dir(theta, phi);
        let pdf = self.pdf_solid_angle(x, y, theta);

        (wi, pdf, self.envmap.texel(x, y), f32::INFINITY)
    }

    fn strength_dist_pdf(&self, _position: glam::Vec3A, wi: glam::Vec3A) -> (Color, f32, f32) {
        let w = self.envmap.width();
        let h = self.envmap.height();

        let (theta, phi) = dir_to_theta_phi(wi);
        let x = phi * 0.5 * std::f32::consts::FRAC_1_PI * w as f32;
        let y = theta * std::f32::consts::FRAC_1_PI * h as f32;

        let strength = self.bilerp(x, y);
        let xi = (x as usize).min(w - 1);
        let yi = (y as usize).min(h - 1);
        let pdf = self.pdf_solid_angle(xi, yi, theta);

        (strength, f32::INFINITY, pdf)
    }

    fn is_delta(&self) -> bool {
        false
    }

    fn power(&self) -> f32 {
        self.avg_power * 4.0 * PI
    }
}
