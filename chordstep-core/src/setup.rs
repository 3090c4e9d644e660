//! Assembling a stepper from a preset, an optional table file and overrides.

use std::path::PathBuf;

use crate::presets::Preset;
use crate::stepper::ChordStepper;
use crate::table_file::{TableFile, TableFileError};

/// Error type for stepper setup.
#[derive(Debug)]
pub enum SetupError {
    Table(TableFileError),
    /// A wrap target past the last chord on a stepper that cannot drain
    /// would leave it stuck on the silent slot.
    WrapPastEnd { wrap_to: usize, len: usize },
}

impl From<TableFileError> for SetupError {
    fn from(e: TableFileError) -> Self {
        Self::Table(e)
    }
}

impl std::fmt::Display for SetupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Table(e) => write!(f, "{}", e),
            Self::WrapPastEnd { wrap_to, len } => write!(
                f,
                "wrap target {} is past the last chord ({}) and the stepper does not drain",
                wrap_to, len
            ),
        }
    }
}

impl std::error::Error for SetupError {}

/// Everything needed to build a stepper at startup.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StepperSource {
    pub preset: Preset,
    /// Replaces the preset's table; its `settings`, if any, replace the preset's too.
    pub table: Option<PathBuf>,
    /// Overrides the wrap target.
    pub replay_offset: Option<usize>,
}

impl StepperSource {
    pub fn from_preset(preset: Preset) -> Self {
        Self {
            preset,
            ..Self::default()
        }
    }

    pub fn build(&self) -> Result<ChordStepper, SetupError> {
        let (table, mut settings) = match &self.table {
            Some(path) => {
                let file = TableFile::load(path)?;
                let settings = file.settings.unwrap_or_else(|| self.preset.settings());
                (file.rows, settings)
            }
            None => (self.preset.table(), self.preset.settings()),
        };
        if let Some(offset) = self.replay_offset {
            settings.wrap_to = offset;
        }
        if settings.wrap_to > table.len() {
            if !settings.drain_past_end {
                return Err(SetupError::WrapPastEnd {
                    wrap_to: settings.wrap_to,
                    len: table.len(),
                });
            }
            log::warn!(
                "wrap target {} is past the last chord ({}); stepper plays silence after the first pass until reset",
                settings.wrap_to,
                table.len()
            );
        }
        log::info!(
            "stepper ready: preset {}, {} chords, {} outlets",
            self.preset.name(),
            table.len(),
            settings.layout().outlet_count()
        );
        Ok(ChordStepper::new(table, settings))
    }
}
