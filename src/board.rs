//! `board` — the immutable square grid of letter tiles.
//!
//! A board is built once per puzzle from a flat, row-major tile list and
//! never mutated afterwards. Tiles are short strings, not necessarily one
//! character ("QU" is a legal tile). Cell (row, col) maps to the linear
//! index `row * size + col`, which is the position identifier that path
//! results expose to callers.

use std::fmt;

use crate::errors::EngineError;

/// Moore neighborhood: the fixed direction order also decides which path
/// wins when a word can be traced more than one way.
const DIRECTIONS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// An N×N grid of uppercase tile strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Row-major tiles; `tiles.len() == size * size`.
    tiles: Vec<String>,
    size: usize,
}

impl Board {
    /// Build a board from a flat row-major tile list.
    ///
    /// Tiles are normalized to uppercase so that tile, lexicon, and query
    /// comparisons all happen in a single case.
    ///
    /// # Errors
    ///
    /// - [`EngineError::EmptyBoard`] if `tiles` is empty.
    /// - [`EngineError::NonSquareBoard`] if `tiles.len()` is not a perfect
    ///   square.
    ///
    /// # Example
    /// ```
    /// use wordtrail::board::Board;
    ///
    /// let board = Board::from_tiles(&["C", "A", "T", "S"]).unwrap();
    /// assert_eq!(board.size(), 2);
    /// assert_eq!(board.tile_at(1, 0), "T");
    /// ```
    pub fn from_tiles<S: AsRef<str>>(tiles: &[S]) -> Result<Board, EngineError> {
        if tiles.is_empty() {
            return Err(EngineError::EmptyBoard);
        }

        let count = tiles.len();
        let size = (count as f64).sqrt().round() as usize;
        if size * size != count {
            return Err(EngineError::NonSquareBoard { count });
        }

        let tiles = tiles.iter().map(|t| t.as_ref().to_uppercase()).collect();

        Ok(Board { tiles, size })
    }

    /// Side length N of the grid.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total number of cells (N²).
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.tiles.len()
    }

    /// Tile value at (row, col).
    ///
    /// # Panics
    /// Panics if either coordinate is out of `[0, size)`; callers iterate
    /// cell coordinates produced by the board itself.
    #[must_use]
    pub fn tile_at(&self, row: usize, col: usize) -> &str {
        &self.tiles[self.linear_index(row, col)]
    }

    /// Row-major linear index of cell (row, col).
    #[must_use]
    pub fn linear_index(&self, row: usize, col: usize) -> usize {
        row * self.size + col
    }

    /// The up-to-8 in-bounds Moore neighbors of (row, col), in the fixed
    /// `DIRECTIONS` order.
    pub fn neighbors(&self, row: usize, col: usize) -> impl Iterator<Item = (usize, usize)> + '_ {
        let size = self.size as isize;
        DIRECTIONS.iter().filter_map(move |&(dr, dc)| {
            let r = row as isize + dr;
            let c = col as isize + dc;
            if r >= 0 && r < size && c >= 0 && c < size {
                Some((r as usize, c as usize))
            } else {
                None
            }
        })
    }

    /// Row-major dump with one tile per position, rows newline-separated.
    /// Presentation only; no search logic reads this.
    #[must_use]
    pub fn render(&self) -> String {
        let mut output = String::new();
        for row in 0..self.size {
            for col in 0..self.size {
                if col > 0 {
                    output.push(' ');
                }
                output.push_str(self.tile_at(row, col));
            }
            output.push('\n');
        }
        output
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl Default for Board {
    /// A fixed 4×4 starting board, so the engine always has a board to
    /// render and query between construction and the first `set_board`.
    fn default() -> Board {
        Board::from_tiles(&[
            "E", "E", "C", "A", "A", "L", "E", "P", "H", "N", "B", "O", "Q", "T", "T", "Y",
        ])
        .expect("default board layout is square")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_tiles_basic() {
        let board = Board::from_tiles(&["C", "A", "T", "D", "O", "G", "X", "X", "X"]).unwrap();

        assert_eq!(board.size(), 3);
        assert_eq!(board.cell_count(), 9);
        assert_eq!(board.tile_at(0, 0), "C");
        assert_eq!(board.tile_at(1, 2), "G");
        assert_eq!(board.tile_at(2, 2), "X");
    }

    #[test]
    fn test_from_tiles_uppercases() {
        let board = Board::from_tiles(&["c", "a", "t", "s"]).unwrap();

        assert_eq!(board.tile_at(0, 0), "C");
        assert_eq!(board.tile_at(1, 1), "S");
    }

    #[test]
    fn test_from_tiles_accepts_multichar_tiles() {
        let board = Board::from_tiles(&["QU", "I", "T", "E"]).unwrap();

        assert_eq!(board.tile_at(0, 0), "QU");
    }

    #[test]
    fn test_from_tiles_rejects_empty() {
        let tiles: [&str; 0] = [];
        let err = Board::from_tiles(&tiles).unwrap_err();

        assert_eq!(err.code(), "W003");
    }

    #[test]
    fn test_from_tiles_rejects_non_square() {
        for count in [2, 3, 5, 8, 15] {
            let tiles = vec!["A"; count];
            let err = Board::from_tiles(&tiles).unwrap_err();
            assert!(
                matches!(err, EngineError::NonSquareBoard { count: c } if c == count),
                "count {} should be rejected",
                count
            );
        }
    }

    #[test]
    fn test_linear_index_is_row_major() {
        let board = Board::from_tiles(&["A"; 16]).unwrap();

        assert_eq!(board.linear_index(0, 0), 0);
        assert_eq!(board.linear_index(0, 3), 3);
        assert_eq!(board.linear_index(1, 0), 4);
        assert_eq!(board.linear_index(3, 3), 15);
    }

    #[test]
    fn test_neighbors_corner_edge_center() {
        let board = Board::from_tiles(&["A"; 9]).unwrap();

        let corner: Vec<_> = board.neighbors(0, 0).collect();
        assert_eq!(corner, vec![(0, 1), (1, 0), (1, 1)]);

        let edge: Vec<_> = board.neighbors(0, 1).collect();
        assert_eq!(edge.len(), 5);

        let center: Vec<_> = board.neighbors(1, 1).collect();
        assert_eq!(center.len(), 8);
        // a cell is never its own neighbor
        assert!(!center.contains(&(1, 1)));
    }

    #[test]
    fn test_neighbors_on_1x1_board() {
        let board = Board::from_tiles(&["A"]).unwrap();

        assert_eq!(board.neighbors(0, 0).count(), 0);
    }

    #[test]
    fn test_render_rows_newline_separated() {
        let board = Board::from_tiles(&["C", "A", "T", "S"]).unwrap();

        assert_eq!(board.render(), "C A\nT S\n");
        assert_eq!(board.to_string(), board.render());
    }

    #[test]
    fn test_default_board_is_square() {
        let board = Board::default();

        assert_eq!(board.size(), 4);
        assert_eq!(board.tile_at(3, 0), "Q");
    }
}
