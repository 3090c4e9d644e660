//! # chordstep-core
//!
//! Chord table steppers: on each trigger, send the next chord of a fixed
//! table to one of a set of resonator outlets.
//!
//! ## Quick Start
//!
//! ```rust
//! use chordstep_core::presets::Preset;
//! use chordstep_core::setup::StepperSource;
//! use chordstep_types::{Dispatcher, StepperEvent};
//!
//! let mut stepper = StepperSource::from_preset(Preset::Crack).build().unwrap();
//! assert!(stepper.dispatch(StepperEvent::Bang).is_empty()); // waits for init
//! let total = stepper.dispatch(StepperEvent::Init);
//! assert_eq!(total[0].as_count(), Some(46));
//! let chord = stepper.dispatch(StepperEvent::Bang);
//! assert_eq!(chord.len(), 2); // chord on outlet 0, position on outlet 5
//! ```
//!
//! ## Module Overview
//!
//! - [`stepper`] — `ChordStepper`: `trigger`, `init`, `reset`, phase tracking
//! - [`presets`] — the patch's stepper variants and their settings
//! - [`tables`] — built-in chord tables
//! - [`table_file`] — TOML/JSON chord table files
//! - [`setup`] — build a stepper from preset, table file and overrides
//! - [`config`] — TOML configuration (embedded defaults + user override)

pub mod config;
pub mod presets;
pub mod setup;
pub mod stepper;
pub mod table_file;
pub mod tables;

pub use stepper::{ChordStepper, StepperPhase};
