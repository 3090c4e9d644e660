//! Dispatch abstraction between a host adapter and a stepper.

use crate::{Emission, StepperEvent};

/// Anything that can take a host event and answer with outlet messages.
///
/// Hosts deliver events one at a time; implementations may assume calls
/// never overlap.
pub trait Dispatcher {
    /// Handle one event. Emissions are in the order the host should send them.
    fn dispatch(&mut self, event: StepperEvent) -> Vec<Emission>;
}
