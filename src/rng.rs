//! Seeded pseudo-random sequence for decorative placement
//!
//! Confetti jitter must be byte-identical across runs, so the generator is
//! a plain xorshift32 seeded with a fixed constant, never with wall-clock
//! time.

/// Deterministic xorshift32 generator.
#[derive(Debug, Clone)]
pub struct SeededRng {
    state: u32,
}

impl SeededRng {
    /// `seed` 0 is mapped to 1; xorshift has a fixed point at zero.
    pub fn new(seed: u32) -> Self {
        Self {
            state: seed.max(1),
        }
    }

    pub fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }

    /// Uniform integer in `lo..=hi`.
    pub fn range_i32(&mut self, lo: i32, hi: i32) -> i32 {
        debug_assert!(lo <= hi);
        let span = (hi - lo + 1) as u32;
        lo + (self.next_u32() % span) as i32
    }

    /// Uniformly pick one element of a non-empty slice.
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[(self.next_u32() % items.len() as u32) as usize]
    }
}
