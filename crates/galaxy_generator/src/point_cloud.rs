use bevy::math::Vec3;

/// Generated particles, `positions[i]` and `colors[i]` describe the same point.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PointCloud {
    pub positions: Vec<Vec3>,
    /// sRGB channels in `[0, 1]`.
    pub colors: Vec<Vec3>,
}

impl PointCloud {
    pub(crate) fn with_len(count: usize) -> Self {
        Self {
            positions: vec![Vec3::ZERO; count],
            colors: vec![Vec3::ZERO; count],
        }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Vec3, Vec3)> + '_ {
        self.positions
            .iter()
            .copied()
            .zip(self.colors.iter().copied())
    }

    /// `x, y, z` triples packed back to back.
    pub fn positions_flat(&self) -> &[f32] {
        bytemuck::cast_slice(&self.positions)
    }

    /// `r, g, b` triples packed back to back.
    pub fn colors_flat(&self) -> &[f32] {
        bytemuck::cast_slice(&self.colors)
    }
}
