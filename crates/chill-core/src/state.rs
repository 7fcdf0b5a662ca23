//! The break engine: two gauges and every time-aware rule that moves them.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::clock::{tokio_sleep, Clock, SleepFn, SystemClock};
use crate::config::EngineConfig;
use crate::report::{BreakReport, GaugeSnapshot};
use crate::routine::BreakRoutine;

/// Upper bound of the stress gauge.
pub const MAX_STRESS: f64 = 100.0;
/// Upper bound of the boss alert gauge.
pub const MAX_BOSS_ALERT: u8 = 5;
/// Stress level a fresh engine starts at.
pub const INITIAL_STRESS: f64 = 35.0;
/// Seconds spent pretending to work when the alert gauge is saturated.
pub const BOSS_WATCH_DELAY_SECS: f64 = 20.0;

/// Clamp `value` to the inclusive range `[minimum, maximum]`.
fn clamp(value: f64, minimum: f64, maximum: f64) -> f64 {
    value.max(minimum).min(maximum)
}

/// Live engine state.
///
/// One instance is built in the composition root and handed by mutable
/// reference to every action invocation for the process lifetime. Callers
/// must serialize invocations; the engine has no internal locking.
pub struct ChillState {
    stress_level: f64,
    boss_alert_level: u8,
    config: EngineConfig,
    rng: SmallRng,
    clock: Box<dyn Clock>,
    sleep: SleepFn,
    last_update_time: f64,
    last_boss_alert_decay: f64,
}

impl ChillState {
    /// Engine with the real clock and the tokio timer.
    pub fn new(config: EngineConfig) -> Self {
        Self::with_clock_and_sleep(config, Box::new(SystemClock::new()), tokio_sleep())
    }

    /// Engine with injected clock and sleep capabilities.
    pub fn with_clock_and_sleep(config: EngineConfig, clock: Box<dyn Clock>, sleep: SleepFn) -> Self {
        let config = config.sanitized();
        let rng = match config.rng_seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };
        let now = clock.now();
        Self {
            stress_level: INITIAL_STRESS,
            boss_alert_level: 0,
            config,
            rng,
            clock,
            sleep,
            last_update_time: now,
            last_boss_alert_decay: now,
        }
    }

    pub fn stress_level(&self) -> f64 {
        self.stress_level
    }

    pub fn boss_alert_level(&self) -> u8 {
        self.boss_alert_level
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Overwrite the stress gauge, clamped to its range.
    pub fn set_stress_level(&mut self, value: f64) {
        self.stress_level = clamp(value, 0.0, MAX_STRESS);
    }

    /// Overwrite the alert gauge, clamped to its range.
    pub fn set_boss_alert_level(&mut self, level: u8) {
        self.boss_alert_level = level.min(MAX_BOSS_ALERT);
    }

    /// Add (or with a negative delta, remove) stress, clamped to range.
    pub fn add_stress(&mut self, delta: f64) {
        self.stress_level = clamp(self.stress_level + delta, 0.0, MAX_STRESS);
    }

    /// Force both gauges back to zero.
    pub fn reset_gauges(&mut self) {
        self.stress_level = 0.0;
        self.boss_alert_level = 0;
    }

    /// Two-decimal snapshot of the gauges for logs and history records.
    pub fn snapshot(&self) -> GaugeSnapshot {
        GaugeSnapshot {
            stress_level: (self.stress_level * 100.0).round() / 100.0,
            boss_alert_level: self.boss_alert_level,
        }
    }

    /// Bring both gauges up to date with elapsed time.
    ///
    /// Idempotent with no elapsed time; a clock reading that went backwards
    /// counts as zero elapsed time.
    pub fn tick(&mut self) {
        let now = self.clock.now();
        self.apply_stress_drift(now);
        self.apply_boss_cooldown(now);
    }

    fn apply_stress_drift(&mut self, now: f64) {
        if now <= self.last_update_time {
            return;
        }

        let elapsed_seconds = now - self.last_update_time;
        let increment = (elapsed_seconds / 60.0) * self.config.stress_increase_rate;
        if increment > 0.0 {
            self.stress_level = clamp(self.stress_level + increment, 0.0, MAX_STRESS);
            self.last_update_time = now;
        }
    }

    fn apply_boss_cooldown(&mut self, now: f64) {
        if self.boss_alert_level == 0 {
            // No decay debt accrues while already calm.
            self.last_boss_alert_decay = now;
            return;
        }

        if self.config.boss_alertness_cooldown == 0 {
            return;
        }

        let cooldown = self.config.boss_alertness_cooldown as f64;
        let elapsed_seconds = now - self.last_boss_alert_decay;
        if elapsed_seconds < cooldown {
            return;
        }

        let steps = (elapsed_seconds / cooldown).floor() as u64;
        if steps == 0 {
            return;
        }

        let decrease = steps.min(u64::from(self.boss_alert_level)) as u8;
        self.boss_alert_level -= decrease;
        // Advance by whole periods only, keeping the fractional remainder
        // for future ticks.
        self.last_boss_alert_decay += steps as f64 * cooldown;
    }

    /// Execute one break routine against the engine.
    ///
    /// The sole mutating entry point used by the protocol layer. The only
    /// suspension point is the enforced delay while the boss is watching;
    /// dropping the future during that delay leaves the gauges without any
    /// partial break update applied.
    pub async fn perform_break(&mut self, routine: &BreakRoutine) -> BreakReport {
        let before = self.snapshot();
        tracing::info!(
            tool = routine.name,
            stress = before.stress_level,
            boss_alert = before.boss_alert_level,
            "break starting"
        );

        self.tick();

        if self.boss_alert_level >= MAX_BOSS_ALERT {
            // Boss is hovering right behind us. Look busy for 20 seconds.
            (self.sleep)(BOSS_WATCH_DELAY_SECS).await;
            self.tick();
        }

        let scenario = *routine.choose_scenario(&mut self.rng);

        let (low, high) = scenario.stress_reduction;
        let reduction = self.rng.gen_range(low..=high);
        self.stress_level = clamp(self.stress_level - f64::from(reduction), 0.0, MAX_STRESS);

        let alert_before = self.boss_alert_level;
        let mut boss_noticed = false;
        if self.rng.gen::<f64>() * 100.0 < f64::from(self.config.boss_alertness) {
            self.boss_alert_level = (self.boss_alert_level + 1).min(MAX_BOSS_ALERT);
            boss_noticed = self.boss_alert_level != alert_before;
        }

        let now = self.clock.now();
        self.last_update_time = now;
        self.last_boss_alert_decay = now;

        if let Some(hook) = routine.post_hook {
            hook(self);
        }

        let detail_lines = scenario.render_details(&mut self.rng);
        let report = BreakReport {
            tool: routine.name,
            headline: scenario.headline,
            detail_lines,
            boss_noticed,
            stress_level: BreakReport::stress_display(self.stress_level),
            boss_alert_level: self.boss_alert_level,
            before,
            after: self.snapshot(),
        };

        tracing::info!(
            tool = routine.name,
            stress = report.after.stress_level,
            boss_alert = report.after.boss_alert_level,
            noticed = boss_noticed,
            "break complete"
        );

        report
    }
}
