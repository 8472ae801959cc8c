//! Random replacement baselines.
//!
//! Two generators are compared: a uniform float draw from `StdRng`, and the
//! classic 31-bit linear congruential recurrence taken modulo the frame
//! count. Neither looks at occupants or history.

use rand::rngs::StdRng;
use rand::Rng;

use crate::common::FrameId;

use super::{Policy, Replacer, VictimContext};

/// Scales a uniform `[0, 1)` draw by the frame count.
#[derive(Debug, Clone)]
pub struct RandomUniformReplacer {
    rng: StdRng,
}

impl RandomUniformReplacer {
    pub fn new(rng: StdRng) -> Self {
        Self { rng }
    }
}

impl Replacer for RandomUniformReplacer {
    fn policy(&self) -> Policy {
        Policy::RandomUniform
    }

    fn select_victim(&mut self, ctx: &VictimContext<'_>) -> FrameId {
        let capacity = ctx.frames.capacity().max(1);
        let draw: f64 = self.rng.gen();
        let index = (draw * capacity as f64) as usize;
        FrameId::new(index.min(capacity - 1))
    }
}

/// Linear congruential generator: `x' = (1103515245 x + 12345) mod 2^31`.
///
/// Low bits cycle with short periods, which is the weakness this baseline
/// is meant to expose.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lcg31 {
    state: u32,
}

impl Lcg31 {
    const MULTIPLIER: u32 = 1_103_515_245;
    const INCREMENT: u32 = 12_345;
    const MASK: u32 = 0x7fff_ffff;

    /// Seed the generator. Only the low 31 bits of the seed are kept.
    pub fn new(seed: u64) -> Self {
        Self {
            state: (seed as u32) & Self::MASK,
        }
    }

    /// Advance and return the next value in `[0, 2^31)`.
    pub fn next_u31(&mut self) -> u32 {
        self.state = self
            .state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
            & Self::MASK;
        self.state
    }
}

/// Takes the LCG output modulo the frame count.
#[derive(Debug, Clone)]
pub struct RandomCongruentialReplacer {
    lcg: Lcg31,
}

impl RandomCongruentialReplacer {
    pub fn new(lcg: Lcg31) -> Self {
        Self { lcg }
    }
}

impl Replacer for RandomCongruentialReplacer {
    fn policy(&self) -> Policy {
        Policy::RandomCongruential
    }

    fn select_victim(&mut self, ctx: &VictimContext<'_>) -> FrameId {
        let capacity = ctx.frames.capacity().max(1);
        FrameId::new(self.lcg.next_u31() as usize % capacity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{FrameStore, PageDirectory};
    use rand::SeedableRng;

    #[test]
    fn test_lcg_known_sequence() {
        let mut lcg = Lcg31::new(1);
        // 1103515245 * 1 + 12345 = 1103527590
        assert_eq!(lcg.next_u31(), 1_103_527_590);
        assert!(lcg.next_u31() < (1 << 31));
    }

    #[test]
    fn test_lcg_is_deterministic() {
        let mut a = Lcg31::new(99);
        let mut b = Lcg31::new(99);
        for _ in 0..100 {
            assert_eq!(a.next_u31(), b.next_u31());
        }
    }

    #[test]
    fn test_random_victims_stay_in_range() {
        let frames = FrameStore::new(7);
        let pages = PageDirectory::new(16);
        let ctx = VictimContext {
            frames: &frames,
            pages: &pages,
            upcoming: &[],
        };

        let mut uniform = RandomUniformReplacer::new(StdRng::seed_from_u64(3));
        let mut lcg = RandomCongruentialReplacer::new(Lcg31::new(3));
        for _ in 0..1_000 {
            assert!(uniform.select_victim(&ctx).index() < 7);
            assert!(lcg.select_victim(&ctx).index() < 7);
        }
    }

    #[test]
    fn test_uniform_covers_every_frame() {
        let frames = FrameStore::new(4);
        let pages = PageDirectory::new(16);
        let ctx = VictimContext {
            frames: &frames,
            pages: &pages,
            upcoming: &[],
        };

        let mut seen = [false; 4];
        let mut uniform = RandomUniformReplacer::new(StdRng::seed_from_u64(11));
        for _ in 0..1_000 {
            seen[uniform.select_victim(&ctx).index()] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }
}
