use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

use crate::OutletIndex;

/// Resonators driven by a multi-outlet stepper, one data outlet each.
pub const RESONATOR_COUNT: usize = 5;

/// Behavior switches for a stepper. The presets in chordstep-core cover the
/// variants the patch uses; table files may carry their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StepperSettings {
    /// Rows go to data outlet `position % data_outlets`.
    pub data_outlets: NonZeroUsize,
    /// Report the position after every trigger and reset.
    pub count_outlet: bool,
    /// Report the table length on `init`.
    pub total_outlet: bool,
    /// Ignore triggers until `init` has been received.
    pub requires_init: bool,
    /// Emit silence instead of rows once position has run past the table.
    pub drain_past_end: bool,
    /// Position to jump to when the counter passes the end of the table.
    pub wrap_to: usize,
}

impl Default for StepperSettings {
    fn default() -> Self {
        Self {
            data_outlets: NonZeroUsize::MIN,
            count_outlet: false,
            total_outlet: false,
            requires_init: false,
            drain_past_end: false,
            wrap_to: 0,
        }
    }
}

impl StepperSettings {
    pub fn layout(&self) -> OutletLayout {
        OutletLayout {
            data_outlets: self.data_outlets,
            count_outlet: self.count_outlet,
            total_outlet: self.total_outlet,
        }
    }
}

/// Outlet numbering: data outlets first, then count, then total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutletLayout {
    data_outlets: NonZeroUsize,
    count_outlet: bool,
    total_outlet: bool,
}

impl OutletLayout {
    pub fn data_outlets(&self) -> usize {
        self.data_outlets.get()
    }

    /// Data outlet for a given position.
    pub fn data_outlet(&self, position: usize) -> OutletIndex {
        OutletIndex::new(position % self.data_outlets.get())
    }

    pub fn count_outlet(&self) -> Option<OutletIndex> {
        self.count_outlet
            .then(|| OutletIndex::new(self.data_outlets.get()))
    }

    pub fn total_outlet(&self) -> Option<OutletIndex> {
        self.total_outlet
            .then(|| OutletIndex::new(self.data_outlets.get() + self.count_outlet as usize))
    }

    pub fn outlet_count(&self) -> usize {
        self.data_outlets.get() + self.count_outlet as usize + self.total_outlet as usize
    }

    /// Hover text for an outlet, as shown in the patcher.
    pub fn assist(&self, outlet: OutletIndex) -> Option<String> {
        let idx = outlet.get();
        if idx < self.data_outlets.get() {
            return Some(if self.data_outlets.get() == 1 {
                "returns next chord in sequence".to_string()
            } else {
                format!("chord for resonator {}", idx + 1)
            });
        }
        if Some(outlet) == self.count_outlet() {
            return Some("current position in sequence".to_string());
        }
        if Some(outlet) == self.total_outlet() {
            return Some("total number of chords (sent on init)".to_string());
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(data: usize, count: bool, total: bool) -> StepperSettings {
        StepperSettings {
            data_outlets: NonZeroUsize::new(data).unwrap(),
            count_outlet: count,
            total_outlet: total,
            ..StepperSettings::default()
        }
    }

    #[test]
    fn single_outlet_layout() {
        let layout = settings(1, false, false).layout();
        assert_eq!(layout.outlet_count(), 1);
        assert_eq!(layout.data_outlet(7), OutletIndex::new(0));
        assert_eq!(layout.count_outlet(), None);
        assert_eq!(layout.total_outlet(), None);
    }

    #[test]
    fn resonator_layout_numbers_count_then_total() {
        let layout = settings(RESONATOR_COUNT, true, true).layout();
        assert_eq!(layout.outlet_count(), 7);
        assert_eq!(layout.data_outlet(13), OutletIndex::new(3));
        assert_eq!(layout.count_outlet(), Some(OutletIndex::new(5)));
        assert_eq!(layout.total_outlet(), Some(OutletIndex::new(6)));
    }

    #[test]
    fn total_without_count_follows_data() {
        let layout = settings(2, false, true).layout();
        assert_eq!(layout.total_outlet(), Some(OutletIndex::new(2)));
    }

    #[test]
    fn assist_text() {
        let layout = settings(1, true, false).layout();
        assert_eq!(
            layout.assist(OutletIndex::new(0)).as_deref(),
            Some("returns next chord in sequence")
        );
        assert_eq!(
            layout.assist(OutletIndex::new(1)).as_deref(),
            Some("current position in sequence")
        );
        assert_eq!(layout.assist(OutletIndex::new(2)), None);

        let layout = settings(RESONATOR_COUNT, true, true).layout();
        assert_eq!(
            layout.assist(OutletIndex::new(4)).as_deref(),
            Some("chord for resonator 5")
        );
    }

    #[test]
    fn settings_defaults_fill_missing_fields() {
        let parsed: StepperSettings = serde_json::from_str(r#"{"data_outlets": 5}"#).unwrap();
        assert_eq!(parsed.data_outlets.get(), 5);
        assert!(!parsed.count_outlet);
        assert_eq!(parsed.wrap_to, 0);

        assert!(serde_json::from_str::<StepperSettings>(r#"{"data_outlets": 0}"#).is_err());

        let parsed: StepperSettings = serde_json::from_str(r#"{"count_outlet": true}"#).unwrap();
        assert_eq!(parsed.data_outlets.get(), 1);
        assert!(parsed.count_outlet);
    }
}
