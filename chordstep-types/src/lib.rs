//! # chordstep-types
//!
//! Shared type definitions for chordstep: chord payloads, outlet layout,
//! host events and the emissions a stepper produces in response.
//! Pure data, no I/O.

pub mod action;
pub mod chord;
pub mod dispatch;
pub mod layout;

pub use action::{Emission, OutletValue, StepperEvent};
pub use chord::{ChordRow, ChordTable, ResonatorParams, RowError, TableError};
pub use dispatch::Dispatcher;
pub use layout::{OutletLayout, StepperSettings, RESONATOR_COUNT};

/// Index of an outlet on the host object, counted from the left.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct OutletIndex(usize);

impl OutletIndex {
    pub fn new(idx: usize) -> Self {
        Self(idx)
    }
    pub fn get(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for OutletIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
