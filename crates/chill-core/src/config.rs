//! Construction-time engine tuning.
//!
//! Invalid values are clamped here, once, at construction. The engine never
//! re-validates mid-run.

use serde::Deserialize;

/// Tuning parameters for the break engine.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Probability (0-100) that the boss notices each break.
    pub boss_alertness: u8,
    /// Seconds of sustained quiet per one-step alert decay. 0 disables decay.
    pub boss_alertness_cooldown: u64,
    /// Stress gained per minute without a break.
    pub stress_increase_rate: f64,
    /// Deterministic RNG seed. `None` seeds from entropy.
    pub rng_seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            boss_alertness: 35,
            boss_alertness_cooldown: 120,
            stress_increase_rate: 1.0,
            rng_seed: None,
        }
    }
}

impl EngineConfig {
    /// Clamp out-of-range values into their legal ranges.
    pub fn sanitized(mut self) -> Self {
        self.boss_alertness = self.boss_alertness.min(100);
        if !self.stress_increase_rate.is_finite() || self.stress_increase_rate < 0.0 {
            self.stress_increase_rate = 0.0;
        }
        self
    }
}
