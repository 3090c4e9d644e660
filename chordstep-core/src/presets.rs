use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

use chordstep_types::{ChordTable, StepperSettings, RESONATOR_COUNT};

use crate::tables::{CRACK_CHORDS, ICE_CHORDS};

/// Where the crack stepper jumps back to after the last chord, so the tail
/// of the piece keeps looping instead of restarting from the top.
pub const CRACK_REPLAY_OFFSET: usize = 45;

/// The stepper variants used in the patch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Preset {
    /// One outlet, loops the three Ice chords.
    Ice,
    /// Ice chords plus a position outlet and reset.
    IceCounted,
    /// Crack chords spread over five resonator outlets, with a position outlet.
    Resonators,
    /// Resonators plus init gating, a total outlet, drain and replay offset.
    #[default]
    Crack,
}

impl Preset {
    pub const ALL: [Preset; 4] = [
        Preset::Ice,
        Preset::IceCounted,
        Preset::Resonators,
        Preset::Crack,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Preset::Ice => "ice",
            Preset::IceCounted => "ice-counted",
            Preset::Resonators => "resonators",
            Preset::Crack => "crack",
        }
    }

    pub fn from_name(s: &str) -> Option<Preset> {
        Preset::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(s.trim()))
    }

    pub fn description(&self) -> &'static str {
        match self {
            Preset::Ice => "3 chords, single outlet",
            Preset::IceCounted => "3 chords, single outlet, position outlet",
            Preset::Resonators => "46 chords over 5 resonator outlets, position outlet",
            Preset::Crack => "46 chords over 5 resonator outlets, needs init, replays from 45",
        }
    }

    pub fn settings(&self) -> StepperSettings {
        let resonators = NonZeroUsize::new(RESONATOR_COUNT).unwrap_or(NonZeroUsize::MIN);
        match self {
            Preset::Ice => StepperSettings::default(),
            Preset::IceCounted => StepperSettings {
                count_outlet: true,
                ..StepperSettings::default()
            },
            Preset::Resonators => StepperSettings {
                data_outlets: resonators,
                count_outlet: true,
                ..StepperSettings::default()
            },
            Preset::Crack => StepperSettings {
                data_outlets: resonators,
                count_outlet: true,
                total_outlet: true,
                requires_init: true,
                drain_past_end: true,
                wrap_to: CRACK_REPLAY_OFFSET,
            },
        }
    }

    pub fn table(&self) -> ChordTable {
        let rows = match self {
            Preset::Ice | Preset::IceCounted => ICE_CHORDS,
            Preset::Resonators | Preset::Crack => CRACK_CHORDS,
        };
        ChordTable::from_triples(rows).expect("built-in chord tables are valid")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_roundtrip() {
        for preset in Preset::ALL {
            assert_eq!(Preset::from_name(preset.name()), Some(preset));
        }
        assert_eq!(Preset::from_name(" CRACK "), Some(Preset::Crack));
        assert_eq!(Preset::from_name("glass"), None);
    }

    #[test]
    fn builtin_tables_load() {
        assert_eq!(Preset::Ice.table().len(), 3);
        assert_eq!(Preset::Crack.table().len(), 46);
        assert_eq!(Preset::Resonators.table(), Preset::Crack.table());
    }

    #[test]
    fn crack_settings() {
        let settings = Preset::Crack.settings();
        assert_eq!(settings.data_outlets.get(), RESONATOR_COUNT);
        assert_eq!(settings.wrap_to, 45);
        assert!(settings.requires_init && settings.drain_past_end);
        assert_eq!(settings.layout().outlet_count(), 7);
    }

    #[test]
    fn simple_variants_wrap_to_zero() {
        for preset in [Preset::Ice, Preset::IceCounted, Preset::Resonators] {
            assert_eq!(preset.settings().wrap_to, 0);
            assert!(!preset.settings().requires_init);
        }
    }

    #[test]
    fn serde_uses_kebab_names() {
        let json = serde_json::to_string(&Preset::IceCounted).unwrap();
        assert_eq!(json, r#""ice-counted""#);
    }
}
