use crate::core::color::Color;

/// Row-major equirectangular radiance image. Owned by the caller and
/// borrowed by lights built over it.
pub struct RadianceImage {
    width: usize,
    height: usize,
    texels: Vec<Color>,
}

impl RadianceImage {
    pub fn new(width: usize, height: usize, texels: Vec<Color>) -> anyhow::Result<Self> {
        anyhow::ensure!(
            width > 0 && height > 0,
            "radiance image must have nonzero dimensions, got {}x{}",
            width,
            height
        );
        anyhow::ensure!(
            texels.len() == width * height,
            "radiance image expects {} texels, got {}",
            width * height,
            texels.len()
        );
        Ok(Self {
            width,
            height,
            texels,
        })
    }

    pub fn constant(width: usize, height: usize, color: Color) -> anyhow::Result<Self> {
        Self::new(width, height, vec![color; width * height])
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn texel(&self, x: usize, y: usize) -> Color {
        self.texels[y * self.width + x]
    }
}
