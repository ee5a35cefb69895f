use rand::Rng;

/// Supplies the uniform draws consumed by the generator.
///
/// Any [`rand::Rng`] works as-is; tests can implement this directly to script
/// exact draw sequences.
pub trait RandomSource {
    /// A draw from `[0, 1)`.
    fn uniform(&mut self) -> f32;
}

impl<R: Rng> RandomSource for R {
    fn uniform(&mut self) -> f32 {
        self.random::<f32>()
    }
}
