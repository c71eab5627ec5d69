/// Multiplier applied to a parent seed when deriving the seed of a nested object.
pub const NESTED_SEED_STRIDE: i64 = 100_000;

/// The two integers every synthesizer is parameterized by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GenerationContext {
    pub seed: i64,
    /// Number of fields populated before this one in the current object.
    pub position: u32,
}

impl GenerationContext {
    pub fn new(seed: i64, position: u32) -> Self {
        Self { seed, position }
    }

    /// `seed + position` without overflow.
    pub fn sum(&self) -> i128 {
        i128::from(self.seed) + i128::from(self.position)
    }

    /// `(seed + position) mod modulus`, always in `0..modulus`.
    pub fn fold(&self, modulus: u64) -> u64 {
        // modulus fits in i128 and the euclidean remainder is non-negative
        self.sum().rem_euclid(i128::from(modulus)) as u64
    }

    /// Seed handed to a composite field at this position.
    pub fn nested_seed(&self) -> i64 {
        self.seed
            .wrapping_mul(NESTED_SEED_STRIDE)
            .wrapping_add(i64::from(self.position))
    }
}
