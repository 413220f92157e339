use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use crate::*;

/// Display text for the whole grid.
///
/// This is only ever written to by the session; the view draws it verbatim and never looks at clue state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BoardSurface {
    headers: Vec<String>,
    /// Indexed `[y][x]`, one row per clue index.
    cells: Vec<Vec<String>>,
}

impl BoardSurface {
    pub const PLACEHOLDER: &'static str = "?";

    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }

    pub fn clear(&mut self) {
        self.headers.clear();
        self.cells.clear();
    }

    /// Paints a freshly loaded board: category titles on top and a placeholder in every clue cell.
    pub fn paint(&mut self, board: &Board) {
        self.headers = board.titles().map(String::from).collect();
        self.cells = vec![vec![String::from(Self::PLACEHOLDER); CATEGORY_COUNT]; CLUES_PER_CATEGORY];
    }

    /// Applies the outcome of a single reveal, leaving every other cell untouched.
    pub fn update_cell(&mut self, coords: Coord2, outcome: &RevealOutcome) -> bool {
        let Some(text) = outcome.text() else {
            return false;
        };
        let (x, y) = coords.to_index();
        match self.cells.get_mut(y).and_then(|row| row.get_mut(x)) {
            Some(cell) => {
                log::trace!("update cell {:?}", coords);
                *cell = String::from(text);
                true
            }
            None => false,
        }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.cells
    }

    pub fn cell_text(&self, (x, y): Coord2) -> Option<&str> {
        self.cells
            .get(usize::from(y))
            .and_then(|row| row.get(usize::from(x)))
            .map(String::as_str)
    }
}
