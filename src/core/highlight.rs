//! Highlight planning.
//!
//! The planner turns engine events into declarative named ranges; the
//! display layer decides how to paint them. Ranges are inclusive
//! `(start, end)` pairs of 1-based rows and columns.

use crate::core::punch::MatchResult;
use crate::roster::FIRST_DATA_ROW;
use serde::Serialize;
use std::collections::BTreeMap;

pub const BARCODE_RANGE: &str = "barcode";
pub const NFC_RANGE: &str = "nfccode";
pub const LATEST_RANGE: &str = "latest";

/// RGBA color; alpha is the overlay strength over the cell background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HighlightColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl HighlightColor {
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Blend over white and pack as 0xRRGGBB.
    pub fn over_white(&self) -> u32 {
        let mix = |c: u8| -> u32 {
            let a = u32::from(self.a);
            (u32::from(c) * a + 255 * (255 - a)) / 255
        };
        (mix(self.r) << 16) | (mix(self.g) << 8) | mix(self.b)
    }
}

pub const BARCODE_COLOR: HighlightColor = HighlightColor::rgba(178, 148, 187, 50);
pub const NFC_COLOR: HighlightColor = HighlightColor::rgba(138, 190, 183, 50);
pub const LATEST_COLOR: HighlightColor = HighlightColor::rgba(240, 198, 116, 50);

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HighlightSpec {
    pub name: &'static str,
    pub rows: (usize, usize),
    pub cols: (usize, usize),
    pub color: HighlightColor,
}

impl HighlightSpec {
    pub fn contains(&self, row: usize, col: usize) -> bool {
        (self.rows.0..=self.rows.1).contains(&row) && (self.cols.0..=self.cols.1).contains(&col)
    }
}

/// Events that change what should be highlighted.
#[derive(Debug, Clone, Copy)]
pub enum HighlightEvent<'a> {
    /// The operator picked (possibly) different code columns.
    ColumnsChanged {
        row_count: usize,
        barcode_column: usize,
        nfc_column: usize,
    },
    /// A punch completed; empty results plan nothing.
    Punched {
        result: &'a MatchResult,
        column_count: usize,
    },
}

pub fn plan_highlights(event: &HighlightEvent<'_>) -> Vec<HighlightSpec> {
    match *event {
        HighlightEvent::ColumnsChanged {
            row_count,
            barcode_column,
            nfc_column,
        } => {
            // header-only roster: nothing to paint
            if row_count < FIRST_DATA_ROW {
                return Vec::new();
            }
            let rows = (FIRST_DATA_ROW, row_count);
            vec![
                HighlightSpec {
                    name: BARCODE_RANGE,
                    rows,
                    cols: (barcode_column, barcode_column),
                    color: BARCODE_COLOR,
                },
                HighlightSpec {
                    name: NFC_RANGE,
                    rows,
                    cols: (nfc_column, nfc_column),
                    color: NFC_COLOR,
                },
            ]
        }
        HighlightEvent::Punched {
            result,
            column_count,
        } => match result.row() {
            Some(row) => vec![HighlightSpec {
                name: LATEST_RANGE,
                rows: (row, row),
                cols: (1, column_count),
                color: LATEST_COLOR,
            }],
            None => Vec::new(),
        },
    }
}

/// Highlights currently in effect, one per name.
///
/// Applying a spec replaces whatever was stored under its name, which keeps
/// a single `latest` range active.
#[derive(Debug, Clone, Default)]
pub struct HighlightSet {
    ranges: BTreeMap<&'static str, HighlightSpec>,
}

impl HighlightSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply<I: IntoIterator<Item = HighlightSpec>>(&mut self, specs: I) {
        for spec in specs {
            self.ranges.insert(spec.name, spec);
        }
    }

    pub fn get(&self, name: &str) -> Option<&HighlightSpec> {
        self.ranges.get(name)
    }

    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Fill color for a cell. `latest` is painted over the code columns.
    pub fn color_at(&self, row: usize, col: usize) -> Option<HighlightColor> {
        [LATEST_RANGE, BARCODE_RANGE, NFC_RANGE]
            .iter()
            .filter_map(|name| self.ranges.get(name))
            .find(|spec| spec.contains(row, col))
            .map(|spec| spec.color)
    }
}
