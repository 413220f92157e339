/// Single coordinate axis used for board columns and rows.
pub type Coord = u8;

/// Two-dimensional coordinates `(x, y)`: `x` is the category column, `y` the clue row.
pub type Coord2 = (Coord, Coord);

/// Number of categories (columns) on a board.
pub const CATEGORY_COUNT: usize = 6;

/// Number of clues (rows) per category.
pub const CLUES_PER_CATEGORY: usize = 5;

pub const BOARD_SIZE: Coord2 = (CATEGORY_COUNT as Coord, CLUES_PER_CATEGORY as Coord);

pub trait ToIndex {
    type Output;
    fn to_index(self) -> Self::Output;
}

impl ToIndex for Coord2 {
    type Output = (usize, usize);

    fn to_index(self) -> Self::Output {
        (self.0.into(), self.1.into())
    }
}

pub const fn in_bounds(coords: Coord2) -> bool {
    coords.0 < BOARD_SIZE.0 && coords.1 < BOARD_SIZE.1
}

/// Iterates all cell coordinates in row-major order (row by row, left to right).
pub fn iter_cells() -> impl Iterator<Item = Coord2> {
    (0..BOARD_SIZE.1).flat_map(|y| (0..BOARD_SIZE.0).map(move |x| (x, y)))
}
