//! Break routine and scenario data types.
//!
//! The routine catalog itself lives in the registry crate; the engine only
//! needs the shapes and how to render them.

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;

use crate::state::ChillState;

/// Detail lines attached to a scenario.
///
/// Dynamic providers draw from the engine's shared generator, so a fixed
/// seed reproduces the cosmetic text along with the gauge math.
#[derive(Debug, Clone, Copy)]
pub enum DetailLines {
    None,
    Fixed(&'static [&'static str]),
    Dynamic(fn(&mut SmallRng) -> Vec<String>),
}

/// One randomly selectable outcome of a break routine.
#[derive(Debug, Clone, Copy)]
pub struct Scenario {
    pub headline: &'static str,
    /// Inclusive (low, high) stress reduction range.
    pub stress_reduction: (u8, u8),
    pub details: DetailLines,
}

impl Scenario {
    pub fn new(headline: &'static str, stress_reduction: (u8, u8)) -> Self {
        Self {
            headline,
            stress_reduction,
            details: DetailLines::None,
        }
    }

    pub fn with_fixed_details(mut self, lines: &'static [&'static str]) -> Self {
        self.details = DetailLines::Fixed(lines);
        self
    }

    pub fn with_dynamic_details(mut self, provider: fn(&mut SmallRng) -> Vec<String>) -> Self {
        self.details = DetailLines::Dynamic(provider);
        self
    }

    /// Render the detail lines, consuming the shared generator if dynamic.
    pub fn render_details(&self, rng: &mut SmallRng) -> Vec<String> {
        match self.details {
            DetailLines::None => Vec::new(),
            DetailLines::Fixed(lines) => lines.iter().map(|line| line.to_string()).collect(),
            DetailLines::Dynamic(provider) => provider(rng),
        }
    }
}

/// Hook applied to the engine after the standard gauge update.
///
/// Hooks mutate through the engine's clamping mutators, so gauges stay in
/// range no matter what a hook does.
pub type PostHook = fn(&mut ChillState);

/// A named break action backed by one or more scenarios.
#[derive(Debug, Clone)]
pub struct BreakRoutine {
    pub name: &'static str,
    pub scenarios: Vec<Scenario>,
    pub post_hook: Option<PostHook>,
}

impl BreakRoutine {
    pub fn new(name: &'static str, scenarios: Vec<Scenario>) -> Self {
        Self {
            name,
            scenarios,
            post_hook: None,
        }
    }

    pub fn with_post_hook(mut self, hook: PostHook) -> Self {
        self.post_hook = Some(hook);
        self
    }

    /// Pick one scenario uniformly with the shared generator.
    pub(crate) fn choose_scenario(&self, rng: &mut SmallRng) -> &Scenario {
        // Registry validation guarantees a non-empty scenario list.
        self.scenarios
            .choose(rng)
            .expect("routine has at least one scenario")
    }
}
