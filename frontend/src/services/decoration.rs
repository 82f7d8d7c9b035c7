//! Seeded pseudo-random values for purely decorative rendering (waveform
//! bars, floating hero particles). Seeds are fixed so every render of the
//! page produces the same layout.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

pub const WAVEFORM_SEED: u64 = 0x5eed_0a7e;
pub const PARTICLE_SEED: u64 = 0x9a47_1c1e;

const BAR_MIN_HEIGHT: f64 = 20.0;
const BAR_HEIGHT_SPREAD: f64 = 30.0;
const BAR_SWING: f64 = 15.0;

/// Resting heights (px) for `count` waveform bars
pub fn waveform_base_heights(seed: u64, count: usize) -> Vec<f64> {
    let mut rng = SmallRng::seed_from_u64(seed);
    (0..count)
        .map(|_| BAR_MIN_HEIGHT + rng.gen_range(0.0..BAR_HEIGHT_SPREAD))
        .collect()
}

/// Height of bar `index` at playback time `elapsed` seconds
pub fn animated_bar_height(base: f64, index: usize, elapsed: f64, playing: bool) -> f64 {
    if !playing {
        return base;
    }
    base + (elapsed + index as f64 * 0.5).sin() * BAR_SWING
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// Horizontal position, percent of the container
    pub left: f64,
    /// Vertical position, percent of the container
    pub top: f64,
    /// Float cycle length in seconds
    pub duration: f64,
    pub delay: f64,
}

pub fn particles(seed: u64, count: usize) -> Vec<Particle> {
    let mut rng = SmallRng::seed_from_u64(seed);
    (0..count)
        .map(|_| Particle {
            left: rng.gen_range(0.0..100.0),
            top: rng.gen_range(0.0..100.0),
            duration: 2.0 + rng.gen_range(0.0..3.0),
            delay: rng.gen_range(0.0..2.0),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_waveform_is_deterministic_per_seed() {
        let first = waveform_base_heights(WAVEFORM_SEED, 20);
        assert_eq!(first, waveform_base_heights(WAVEFORM_SEED, 20));
        assert_ne!(first, waveform_base_heights(WAVEFORM_SEED + 1, 20));
        assert!(first.iter().all(|h| (20.0..50.0).contains(h)));
    }

    #[test]
    fn test_paused_bars_rest_at_base() {
        assert_eq!(animated_bar_height(32.0, 3, 12.5, false), 32.0);
        let playing = animated_bar_height(32.0, 3, 12.5, true);
        assert!((32.0 - BAR_SWING..=32.0 + BAR_SWING).contains(&playing));
    }

    #[test]
    fn test_particles_stay_in_bounds() {
        let all = particles(PARTICLE_SEED, 25);
        assert_eq!(all.len(), 25);
        assert_eq!(all, particles(PARTICLE_SEED, 25));
        for particle in all {
            assert!((0.0..100.0).contains(&particle.left));
            assert!((0.0..100.0).contains(&particle.top));
            assert!((2.0..5.0).contains(&particle.duration));
        }
    }
}
