//! Chord payloads: resonator triples, rows and the immutable table.

use serde::{Deserialize, Serialize};

/// One resonator's settings within a chord.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResonatorParams {
    pub freq_hz: f32,
    pub gain: f32,
    pub decay: f32,
}

impl ResonatorParams {
    pub const SILENT: ResonatorParams = ResonatorParams {
        freq_hz: 0.0,
        gain: 0.0,
        decay: 0.0,
    };

    pub fn new(freq_hz: f32, gain: f32, decay: f32) -> Self {
        Self {
            freq_hz,
            gain,
            decay,
        }
    }

    fn is_finite(&self) -> bool {
        self.freq_hz.is_finite() && self.gain.is_finite() && self.decay.is_finite()
    }
}

impl From<[f32; 3]> for ResonatorParams {
    fn from([freq_hz, gain, decay]: [f32; 3]) -> Self {
        Self::new(freq_hz, gain, decay)
    }
}

/// Why a row was rejected.
#[derive(Debug, Clone, PartialEq)]
pub enum RowError {
    Empty,
    /// Flat list length that is not a multiple of three.
    Ragged(usize),
    NonFinite { resonator: usize },
}

impl std::fmt::Display for RowError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "chord row has no resonators"),
            Self::Ragged(len) => write!(
                f,
                "chord row has {} values, expected freq/gain/decay triples",
                len
            ),
            Self::NonFinite { resonator } => {
                write!(f, "resonator {} has a non-finite value", resonator)
            }
        }
    }
}

impl std::error::Error for RowError {}

/// A chord: the settings for every resonator it drives, in order.
///
/// Serialized as the flat `[f0, g0, d0, f1, g1, d1, ...]` list the host
/// receives on a data outlet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f32>", into = "Vec<f32>")]
pub struct ChordRow(Vec<ResonatorParams>);

impl ChordRow {
    pub fn new(resonators: Vec<ResonatorParams>) -> Result<Self, RowError> {
        if resonators.is_empty() {
            return Err(RowError::Empty);
        }
        if let Some(resonator) = resonators.iter().position(|r| !r.is_finite()) {
            return Err(RowError::NonFinite { resonator });
        }
        Ok(Self(resonators))
    }

    /// The `(0, 0, 0)` row sent while draining and on the boundary step.
    pub fn silence() -> Self {
        Self(vec![ResonatorParams::SILENT])
    }

    pub fn is_silence(&self) -> bool {
        self.0.iter().all(|r| *r == ResonatorParams::SILENT)
    }

    pub fn resonators(&self) -> &[ResonatorParams] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn to_flat(&self) -> Vec<f32> {
        self.0
            .iter()
            .flat_map(|r| [r.freq_hz, r.gain, r.decay])
            .collect()
    }

    pub fn from_flat(values: &[f32]) -> Result<Self, RowError> {
        if values.len() % 3 != 0 {
            return Err(RowError::Ragged(values.len()));
        }
        Self::new(
            values
                .chunks_exact(3)
                .map(|c| ResonatorParams::new(c[0], c[1], c[2]))
                .collect(),
        )
    }
}

impl TryFrom<Vec<f32>> for ChordRow {
    type Error = RowError;

    fn try_from(values: Vec<f32>) -> Result<Self, Self::Error> {
        Self::from_flat(&values)
    }
}

impl From<ChordRow> for Vec<f32> {
    fn from(row: ChordRow) -> Self {
        row.to_flat()
    }
}

/// Why a table was rejected.
#[derive(Debug, Clone, PartialEq)]
pub enum TableError {
    Empty,
    Row { index: usize, error: RowError },
}

impl std::fmt::Display for TableError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "chord table has no rows"),
            Self::Row { index, error } => write!(f, "row {}: {}", index, error),
        }
    }
}

impl std::error::Error for TableError {}

/// Ordered chord rows. Never empty, never mutated once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<ChordRow>", into = "Vec<ChordRow>")]
pub struct ChordTable {
    rows: Vec<ChordRow>,
}

impl ChordTable {
    pub fn new(rows: Vec<ChordRow>) -> Result<Self, TableError> {
        if rows.is_empty() {
            return Err(TableError::Empty);
        }
        Ok(Self { rows })
    }

    /// Build a table from `[freq, gain, decay]` literals, as the built-in
    /// tables are written.
    pub fn from_triples(rows: &[&[[f32; 3]]]) -> Result<Self, TableError> {
        let rows = rows
            .iter()
            .enumerate()
            .map(|(index, triples)| {
                ChordRow::new(triples.iter().copied().map(ResonatorParams::from).collect())
                    .map_err(|error| TableError::Row { index, error })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(rows)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ChordRow> {
        self.rows.get(index)
    }

    pub fn rows(&self) -> &[ChordRow] {
        &self.rows
    }
}

impl TryFrom<Vec<ChordRow>> for ChordTable {
    type Error = TableError;

    fn try_from(rows: Vec<ChordRow>) -> Result<Self, Self::Error> {
        Self::new(rows)
    }
}

impl From<ChordTable> for Vec<ChordRow> {
    fn from(table: ChordTable) -> Self {
        table.rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_from_flat_groups_triples() {
        let row = ChordRow::from_flat(&[880.0, 0.5, 1.0, 1320.0, 0.5, 0.9]).unwrap();
        assert_eq!(row.len(), 2);
        assert_eq!(row.resonators()[1], ResonatorParams::new(1320.0, 0.5, 0.9));
        assert_eq!(row.to_flat(), vec![880.0, 0.5, 1.0, 1320.0, 0.5, 0.9]);
    }

    #[test]
    fn row_rejects_ragged_list() {
        assert_eq!(
            ChordRow::from_flat(&[880.0, 0.5]),
            Err(RowError::Ragged(2))
        );
    }

    #[test]
    fn row_rejects_empty_and_nan() {
        assert_eq!(ChordRow::from_flat(&[]), Err(RowError::Empty));
        assert_eq!(
            ChordRow::from_flat(&[1.0, 1.0, 1.0, f32::NAN, 0.5, 0.5]),
            Err(RowError::NonFinite { resonator: 1 })
        );
    }

    #[test]
    fn silence_is_single_zero_triple() {
        let silence = ChordRow::silence();
        assert_eq!(silence.to_flat(), vec![0.0, 0.0, 0.0]);
        assert!(silence.is_silence());
        assert!(!ChordRow::from_flat(&[440.0, 0.5, 0.5]).unwrap().is_silence());
    }

    #[test]
    fn empty_table_rejected() {
        assert_eq!(ChordTable::new(Vec::new()), Err(TableError::Empty));
    }

    #[test]
    fn from_triples_reports_bad_row_index() {
        let err = ChordTable::from_triples(&[&[[440.0, 0.5, 0.5]], &[]]).unwrap_err();
        assert_eq!(
            err,
            TableError::Row {
                index: 1,
                error: RowError::Empty
            }
        );
    }

    #[test]
    fn table_deserializes_flat_rows() {
        let table: ChordTable =
            serde_json::from_str("[[440, 0.5, 0.5], [660, 0.5, 0.5, 880, 0.5, 0.5]]").unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.get(1).map(ChordRow::len), Some(2));
        assert!(table.get(2).is_none());
    }

    #[test]
    fn table_deserialize_rejects_ragged_row() {
        let result: Result<ChordTable, _> = serde_json::from_str("[[440, 0.5]]");
        assert!(result.is_err());
        let result: Result<ChordTable, _> = serde_json::from_str("[]");
        assert!(result.is_err());
    }
}
