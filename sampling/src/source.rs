use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::SeedableRng;
use rand_core::RngCore;
use rand_distr::{Distribution, Uniform};

/// Deterministic randomness source seeded with an explicit 32-byte seed.
/// Two sources built from the same seed produce identical streams.
pub struct Source {
    source: ChaCha8Rng,
}

impl Source {
    pub fn new(seed: [u8; 32]) -> Source {
        Source {
            source: ChaCha8Rng::from_seed(seed),
        }
    }

    /// Draws a fresh seed from the current stream.
    pub fn new_seed(&mut self) -> [u8; 32] {
        let mut seed: [u8; 32] = [0u8; 32];
        self.source.fill_bytes(&mut seed);
        seed
    }

    /// Forks an independent source whose seed is drawn from self.
    pub fn branch(&mut self) -> Self {
        Source::new(self.new_seed())
    }

    /// Uniform value in [0, max) by masked rejection.
    /// The mask must cover max, i.e. mask = 2^k - 1 with 2^k >= max.
    #[inline(always)]
    pub fn next_u64n(&mut self, max: u64, mask: u64) -> u64 {
        let mut x: u64 = self.next_u64() & mask;
        while x >= max {
            x = self.next_u64() & mask;
        }
        x
    }

    /// Uniform value in [min, max).
    #[inline(always)]
    pub fn next_f64(&mut self, min: f64, max: f64) -> f64 {
        let dist: Uniform<f64> = Uniform::new(min, max).unwrap();
        dist.sample(&mut self.source)
    }

    /// Uniform value in [min, max].
    #[inline(always)]
    pub fn next_i64(&mut self, min: i64, max: i64) -> i64 {
        let dist: Uniform<i64> = Uniform::new_inclusive(min, max).unwrap();
        dist.sample(&mut self.source)
    }
}

impl RngCore for Source {
    #[inline(always)]
    fn next_u32(&mut self) -> u32 {
        self.source.next_u32()
    }

    #[inline(always)]
    fn next_u64(&mut self) -> u64 {
        self.source.next_u64()
    }

    #[inline(always)]
    fn fill_bytes(&mut self, bytes: &mut [u8]) {
        self.source.fill_bytes(bytes)
    }
}
