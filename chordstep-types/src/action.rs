//! Events a host delivers to a stepper, and what comes back out.

use serde::{Deserialize, Serialize};

use crate::{ChordRow, OutletIndex};

/// Parameterless control messages on the stepper's inlet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepperEvent {
    /// Advance to the next chord.
    Bang,
    Init,
    Reset,
}

impl StepperEvent {
    pub fn name(&self) -> &'static str {
        match self {
            StepperEvent::Bang => "bang",
            StepperEvent::Init => "init",
            StepperEvent::Reset => "reset",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutletValue {
    Row(ChordRow),
    /// Position or table length.
    Count(usize),
}

/// A single message sent out of one outlet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Emission {
    pub outlet: OutletIndex,
    pub value: OutletValue,
}

impl Emission {
    pub fn row(outlet: OutletIndex, row: ChordRow) -> Self {
        Self {
            outlet,
            value: OutletValue::Row(row),
        }
    }

    pub fn count(outlet: OutletIndex, count: usize) -> Self {
        Self {
            outlet,
            value: OutletValue::Count(count),
        }
    }

    pub fn as_row(&self) -> Option<&ChordRow> {
        match &self.value {
            OutletValue::Row(row) => Some(row),
            OutletValue::Count(_) => None,
        }
    }

    pub fn as_count(&self) -> Option<usize> {
        match self.value {
            OutletValue::Count(n) => Some(n),
            OutletValue::Row(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emission_json_shape() {
        let row = ChordRow::from_flat(&[440.0, 0.5, 1.5]).unwrap();
        let json = serde_json::to_string(&Emission::row(OutletIndex::new(2), row)).unwrap();
        assert_eq!(json, r#"{"outlet":2,"value":{"row":[440.0,0.5,1.5]}}"#);

        let json = serde_json::to_string(&Emission::count(OutletIndex::new(5), 3)).unwrap();
        assert_eq!(json, r#"{"outlet":5,"value":{"count":3}}"#);
    }

    #[test]
    fn event_names() {
        assert_eq!(StepperEvent::Bang.name(), "bang");
        let parsed: StepperEvent = serde_json::from_str(r#""reset""#).unwrap();
        assert_eq!(parsed, StepperEvent::Reset);
    }
}
