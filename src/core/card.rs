use crate::errors::AppResult;
use crate::roster::RosterAccess;

/// Badge enrollment: writes a code into a known row without checking it in.
pub struct CardLogic;

impl CardLogic {
    /// Write `code` into `(row, column)`.
    ///
    /// The caller picks the row; this never searches and never touches the
    /// checked flag or the check-in time.
    pub fn fill_card<R: RosterAccess + ?Sized>(
        roster: &mut R,
        row: usize,
        column: usize,
        code: &str,
    ) -> AppResult<()> {
        roster.set_cell(row, column, code)
    }
}
