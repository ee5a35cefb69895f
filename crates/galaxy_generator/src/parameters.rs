use crate::GalaxyError;

/// Shape and appearance of a generated galaxy.
///
/// Colors are sRGB channels in `[0, 1]`. `particle_size` is a rendering hint
/// and does not affect generation.
#[derive(Clone, Debug, PartialEq)]
pub struct GalaxyParameters {
    pub count: u32,
    pub particle_size: f32,
    pub galaxy_radius: f32,
    pub galaxy_branches: u32,
    /// Radians of twist per unit of radius, the sign picks the winding direction.
    pub spin: f32,
    /// Upper bound of the scatter applied on each axis.
    pub randomness: f32,
    /// Exponent applied to the scatter draws, larger values pull particles
    /// closer to the arm.
    pub randomness_power: f32,
    pub inside_color: [f32; 3],
    pub outside_color: [f32; 3],
}

const fn hex_rgb(hex: u32) -> [f32; 3] {
    [
        ((hex >> 16) & 0xff) as f32 / 255.0,
        ((hex >> 8) & 0xff) as f32 / 255.0,
        (hex & 0xff) as f32 / 255.0,
    ]
}

impl Default for GalaxyParameters {
    fn default() -> Self {
        Self {
            count: 10000,
            particle_size: 0.02,
            galaxy_radius: 5.0,
            galaxy_branches: 3,
            spin: 1.0,
            randomness: 0.2,
            // above the slider range on purpose, the slider only clamps on edit
            randomness_power: 3.0,
            inside_color: hex_rgb(0xff6030),
            outside_color: hex_rgb(0x1b3984),
        }
    }
}

impl GalaxyParameters {
    pub const MIN: Self = Self {
        count: 500,
        particle_size: 0.001,
        galaxy_radius: 0.01,
        galaxy_branches: 3,
        spin: -5.0,
        randomness: 0.0,
        randomness_power: 0.0,
        inside_color: [0.0; 3],
        outside_color: [0.0; 3],
    };
    pub const MAX: Self = Self {
        count: 50000,
        particle_size: 0.1,
        galaxy_radius: 20.0,
        galaxy_branches: 20,
        spin: 5.0,
        randomness: 2.0,
        randomness_power: 2.0,
        inside_color: [1.0; 3],
        outside_color: [1.0; 3],
    };
    /// Slider increments, colors are picked freely.
    pub const STEP: Self = Self {
        count: 100,
        particle_size: 0.001,
        galaxy_radius: 0.01,
        galaxy_branches: 1,
        spin: 0.001,
        randomness: 0.001,
        randomness_power: 0.001,
        inside_color: [0.0; 3],
        outside_color: [0.0; 3],
    };

    /// Rejects records the generator would turn into empty or NaN buffers.
    pub fn validate(&self) -> Result<(), GalaxyError> {
        if self.count == 0 {
            return Err(GalaxyError::invalid("count", "must be at least 1"));
        }
        if self.galaxy_branches == 0 {
            return Err(GalaxyError::invalid("galaxy_branches", "must be at least 1"));
        }
        if !self.galaxy_radius.is_finite() || self.galaxy_radius <= 0.0 {
            return Err(GalaxyError::invalid(
                "galaxy_radius",
                "must be finite and greater than zero",
            ));
        }
        if !self.particle_size.is_finite() {
            return Err(GalaxyError::invalid("particle_size", "must be finite"));
        }
        if !self.spin.is_finite() {
            return Err(GalaxyError::invalid("spin", "must be finite"));
        }
        if !self.randomness.is_finite() || self.randomness < 0.0 {
            return Err(GalaxyError::invalid(
                "randomness",
                "must be finite and non-negative",
            ));
        }
        if !self.randomness_power.is_finite() || self.randomness_power < 0.0 {
            return Err(GalaxyError::invalid(
                "randomness_power",
                "must be finite and non-negative",
            ));
        }
        if !self.inside_color.iter().all(|c| c.is_finite()) {
            return Err(GalaxyError::invalid("inside_color", "channels must be finite"));
        }
        if !self.outside_color.iter().all(|c| c.is_finite()) {
            return Err(GalaxyError::invalid("outside_color", "channels must be finite"));
        }
        Ok(())
    }
}
