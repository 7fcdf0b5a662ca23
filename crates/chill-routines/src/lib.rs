//! Scenario registry: the immutable catalog of named break routines.
//!
//! Built once at startup and validated up front, so a misconfigured routine
//! is a boot failure instead of a mid-session crash. Lookups by name feed
//! the protocol layer; unknown names are the caller's fault to handle.

pub mod catalog;

use std::collections::HashMap;

use chill_core::BreakRoutine;

pub use catalog::builtin_routines;

/// Errors detected while building a registry.
#[derive(Debug)]
pub enum RegistryError {
    /// A routine was registered with no scenarios
    EmptyScenarios { routine: &'static str },
    /// A scenario's stress reduction range is inverted
    InvalidReduction {
        routine: &'static str,
        low: u8,
        high: u8,
    },
    /// Two routines share a name
    DuplicateName { name: &'static str },
    /// The catalog itself is empty
    EmptyCatalog,
}

impl std::fmt::Display for RegistryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegistryError::EmptyScenarios { routine } => {
                write!(f, "routine '{}' has no scenarios", routine)
            }
            RegistryError::InvalidReduction { routine, low, high } => {
                write!(
                    f,
                    "routine '{}' has inverted stress reduction range ({}, {})",
                    routine, low, high
                )
            }
            RegistryError::DuplicateName { name } => {
                write!(f, "routine name '{}' registered twice", name)
            }
            RegistryError::EmptyCatalog => write!(f, "registry has no routines"),
        }
    }
}

impl std::error::Error for RegistryError {}

/// Read-only mapping from action name to routine definition.
pub struct Registry {
    routines: HashMap<&'static str, BreakRoutine>,
    /// Registration order, for stable listings.
    names: Vec<&'static str>,
}

impl Registry {
    /// Build a registry, validating every routine up front.
    pub fn new(routines: Vec<BreakRoutine>) -> Result<Self, RegistryError> {
        if routines.is_empty() {
            return Err(RegistryError::EmptyCatalog);
        }

        let mut map = HashMap::with_capacity(routines.len());
        let mut names = Vec::with_capacity(routines.len());

        for routine in routines {
            if routine.scenarios.is_empty() {
                return Err(RegistryError::EmptyScenarios {
                    routine: routine.name,
                });
            }
            for scenario in &routine.scenarios {
                let (low, high) = scenario.stress_reduction;
                if low > high {
                    return Err(RegistryError::InvalidReduction {
                        routine: routine.name,
                        low,
                        high,
                    });
                }
            }
            if map.contains_key(routine.name) {
                return Err(RegistryError::DuplicateName { name: routine.name });
            }
            names.push(routine.name);
            map.insert(routine.name, routine);
        }

        Ok(Self {
            routines: map,
            names,
        })
    }

    /// Registry loaded with the full builtin catalog.
    pub fn builtin() -> Self {
        Self::new(builtin_routines()).expect("builtin catalog should always be valid")
    }

    /// Look up a routine by name.
    pub fn get(&self, name: &str) -> Option<&BreakRoutine> {
        self.routines.get(name)
    }

    /// Action names in registration order.
    pub fn names(&self) -> &[&'static str] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::builtin()
    }
}
