//! The chord stepper: walks a chord table one row per trigger.
//!
//! End-of-table handling keeps the patch's `position > len` guard, so the
//! counter is allowed to sit on `len` for one trigger. That slot has no row;
//! it plays as a silent step and the counter wraps on the following increment.

use chordstep_types::{
    ChordRow, ChordTable, Dispatcher, Emission, OutletLayout, StepperEvent, StepperSettings,
};

/// Where a stepper is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepperPhase {
    /// Waiting for `init`; triggers are ignored.
    Uninitialized,
    Initialized,
    /// Position is past the end of the table; triggers emit silence until reset.
    Draining,
}

/// A chord table paired with its playback position.
#[derive(Debug, Clone)]
pub struct ChordStepper {
    table: ChordTable,
    settings: StepperSettings,
    layout: OutletLayout,
    position: usize,
    initialized: bool,
}

impl ChordStepper {
    pub fn new(table: ChordTable, settings: StepperSettings) -> Self {
        Self {
            layout: settings.layout(),
            table,
            settings,
            position: 0,
            initialized: false,
        }
    }

    pub fn table(&self) -> &ChordTable {
        &self.table
    }

    pub fn settings(&self) -> &StepperSettings {
        &self.settings
    }

    pub fn layout(&self) -> &OutletLayout {
        &self.layout
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn phase(&self) -> StepperPhase {
        if self.settings.requires_init && !self.initialized {
            StepperPhase::Uninitialized
        } else if self.is_draining() {
            StepperPhase::Draining
        } else {
            StepperPhase::Initialized
        }
    }

    fn is_draining(&self) -> bool {
        self.settings.drain_past_end && self.position > self.table.len()
    }

    /// Advance one chord.
    pub fn trigger(&mut self) -> Vec<Emission> {
        if self.settings.requires_init && !self.initialized {
            log::debug!(target: "stepper", "trigger ignored before init");
            return Vec::new();
        }

        let outlet = self.layout.data_outlet(self.position);

        if self.is_draining() {
            self.position += 1;
            return vec![Emission::row(outlet, ChordRow::silence())];
        }

        let row = match self.table.get(self.position) {
            Some(row) => row.clone(),
            None => {
                log::debug!(target: "stepper", "silent step at position {}", self.position);
                ChordRow::silence()
            }
        };
        let mut emissions = vec![Emission::row(outlet, row)];

        self.position += 1;
        if self.position > self.table.len() {
            log::debug!(
                target: "stepper",
                "wrapping from {} to {}",
                self.position,
                self.settings.wrap_to
            );
            self.position = self.settings.wrap_to;
            if self.is_draining() {
                log::debug!(target: "stepper", "wrap target is past the table, draining");
            }
        }

        if let Some(count) = self.layout.count_outlet() {
            emissions.push(Emission::count(count, self.position));
        }
        emissions
    }

    /// Arm the stepper and report how many chords the table holds.
    pub fn init(&mut self) -> Vec<Emission> {
        self.initialized = true;
        self.layout
            .total_outlet()
            .map(|total| Emission::count(total, self.table.len()))
            .into_iter()
            .collect()
    }

    /// Rewind to the first chord.
    pub fn reset(&mut self) -> Vec<Emission> {
        log::debug!(target: "stepper", "reset from position {}", self.position);
        self.position = 0;
        self.layout
            .count_outlet()
            .map(|count| Emission::count(count, 0))
            .into_iter()
            .collect()
    }
}

impl Dispatcher for ChordStepper {
    fn dispatch(&mut self, event: StepperEvent) -> Vec<Emission> {
        match event {
            StepperEvent::Bang => self.trigger(),
            StepperEvent::Init => self.init(),
            StepperEvent::Reset => self.reset(),
        }
    }
}
