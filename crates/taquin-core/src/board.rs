//! The [`Board`] type — an immutable sliding-tile arrangement.
//!
//! A board is a bijection between tile identities (0 = blank,
//! 1..n²−1 = numbered tiles) and the cells of an n×n grid. Every operation
//! that "changes" a board returns a fresh value; boards compare and hash by
//! content so they can key the visited sets of a search.

use crate::geom::Cell;
use std::fmt;

/// Largest supported board side. Tile ids are `u16`, so 255×255 is the
/// biggest square whose tile set still fits.
pub const MAX_SIDE: usize = 255;

/// An immutable n×n tile arrangement.
///
/// Internally stored row-major (`tiles[row * n + col]` is the tile id at
/// that cell) with the blank's cell cached; the tile→cell view of the data
/// model is served by [`locate`](Board::locate).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    n: usize,
    tiles: Box<[u16]>,
    blank: Cell,
}

impl Board {
    /// Build a board from row-major input rows.
    ///
    /// The grid must be square, non-empty, no larger than
    /// [`MAX_SIDE`]×[`MAX_SIDE`], and contain every tile id in `0..n²`
    /// exactly once (0 is the blank).
    pub fn from_grid(rows: &[Vec<u16>]) -> Result<Self, BoardError> {
        let n = rows.len();
        if n == 0 {
            return Err(BoardError::Empty);
        }
        if n > MAX_SIDE {
            return Err(BoardError::TooLarge { n });
        }
        for row in rows {
            if row.len() != n {
                return Err(BoardError::NotSquare {
                    rows: n,
                    width: row.len(),
                });
            }
        }

        let count = n * n;
        let mut tiles = Vec::with_capacity(count);
        let mut seen = vec![false; count];
        let mut blank = None;
        for (r, row) in rows.iter().enumerate() {
            for (c, &tile) in row.iter().enumerate() {
                if (tile as usize) >= count {
                    return Err(BoardError::TileOutOfRange { tile, n });
                }
                if seen[tile as usize] {
                    return Err(BoardError::DuplicateTile { tile });
                }
                seen[tile as usize] = true;
                if tile == 0 {
                    blank = Some(Cell::new(r as i32, c as i32));
                }
                tiles.push(tile);
            }
        }
        // A full set of n² distinct in-range tiles necessarily includes the
        // blank, so `blank` is always Some here.
        match blank {
            Some(blank) => Ok(Self {
                n,
                tiles: tiles.into_boxed_slice(),
                blank,
            }),
            None => Err(BoardError::MissingBlank),
        }
    }

    /// The canonical goal board for side `n`: tiles `1..n²−1` in row-major
    /// order with the blank in the last cell.
    pub fn goal(n: usize) -> Result<Self, BoardError> {
        if n == 0 {
            return Err(BoardError::Empty);
        }
        if n > MAX_SIDE {
            return Err(BoardError::TooLarge { n });
        }
        let count = n * n;
        let tiles: Vec<u16> = (1..count as u16).chain(std::iter::once(0)).collect();
        Ok(Self {
            n,
            tiles: tiles.into_boxed_slice(),
            blank: Cell::new(n as i32 - 1, n as i32 - 1),
        })
    }

    /// Side length of the board.
    #[inline]
    pub fn size(&self) -> usize {
        self.n
    }

    /// The blank's cell.
    #[inline]
    pub fn blank(&self) -> Cell {
        self.blank
    }

    #[inline]
    fn idx(&self, cell: Cell) -> usize {
        (cell.row as usize) * self.n + (cell.col as usize)
    }

    /// The tile at `cell`, or `None` if the cell is out of bounds.
    #[inline]
    pub fn tile_at(&self, cell: Cell) -> Option<u16> {
        if cell.in_bounds(self.n) {
            Some(self.tiles[self.idx(cell)])
        } else {
            None
        }
    }

    /// The cell holding `tile`, or `None` for a tile id not on this board.
    ///
    /// For valid tile ids this always succeeds: the board invariant keeps
    /// the tile→cell mapping a bijection.
    pub fn locate(&self, tile: u16) -> Option<Cell> {
        self.tiles.iter().position(|&t| t == tile).map(|i| {
            Cell::new((i / self.n) as i32, (i % self.n) as i32)
        })
    }

    /// Row-major iterator over `(cell, tile)` pairs.
    pub fn tiles(&self) -> impl Iterator<Item = (Cell, u16)> + '_ {
        self.tiles.iter().enumerate().map(|(i, &tile)| {
            (
                Cell::new((i / self.n) as i32, (i % self.n) as i32),
                tile,
            )
        })
    }

    /// Return a new board with the tiles at `a` and `b` exchanged.
    ///
    /// The receiver is never mutated. Both cells must be in bounds; the
    /// search engine only calls this with destinations vetted by the active
    /// topology.
    pub fn with_swap(&self, a: Cell, b: Cell) -> Self {
        debug_assert!(a.in_bounds(self.n) && b.in_bounds(self.n));
        let mut tiles = self.tiles.clone();
        tiles.swap(self.idx(a), self.idx(b));
        let blank = if self.blank == a {
            b
        } else if self.blank == b {
            a
        } else {
            self.blank
        };
        Self {
            n: self.n,
            tiles,
            blank,
        }
    }

    /// The inverse of [`from_grid`](Board::from_grid), for presentation.
    pub fn to_rows(&self) -> Vec<Vec<u16>> {
        self.tiles.chunks(self.n).map(|row| row.to_vec()).collect()
    }
}

impl fmt::Display for Board {
    /// Aligned grid rendering, one row per line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = (self.n * self.n - 1).to_string().len();
        for (r, row) in self.tiles.chunks(self.n).enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for (c, tile) in row.iter().enumerate() {
                if c > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{tile:>width$}")?;
            }
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Board {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_rows().serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Board {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let rows = Vec::<Vec<u16>>::deserialize(deserializer)?;
        Board::from_grid(&rows).map_err(serde::de::Error::custom)
    }
}

/// Errors that can occur when building a board from input rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// The input grid has no rows.
    Empty,
    /// A row's width differs from the number of rows.
    NotSquare { rows: usize, width: usize },
    /// The side length exceeds [`MAX_SIDE`].
    TooLarge { n: usize },
    /// A tile id outside `0..n²` appeared.
    TileOutOfRange { tile: u16, n: usize },
    /// The same tile id appeared twice.
    DuplicateTile { tile: u16 },
    /// No blank (tile 0) in the grid.
    MissingBlank,
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "board: input grid is empty"),
            Self::NotSquare { rows, width } => {
                write!(f, "board: grid is not square ({rows} rows, found a row of width {width})")
            }
            Self::TooLarge { n } => {
                write!(f, "board: side {n} exceeds the supported maximum of {MAX_SIDE}")
            }
            Self::TileOutOfRange { tile, n } => {
                write!(f, "board: tile id {tile} is outside 0..{}", n * n)
            }
            Self::DuplicateTile { tile } => write!(f, "board: duplicate tile id {tile}"),
            Self::MissingBlank => write!(f, "board: no blank (tile 0) in grid"),
        }
    }
}

impl std::error::Error for BoardError {}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn board_round_trip() {
        let b = Board::goal(3).unwrap();
        let json = serde_json::to_string(&b).unwrap();
        assert_eq!(json, "[[1,2,3],[4,5,6],[7,8,0]]");
        let back: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(b, back);
    }

    #[test]
    fn board_deserialize_validates() {
        // Duplicate tile: rejected through the same path as from_grid.
        let err = serde_json::from_str::<Board>("[[0,1],[1,2]]");
        assert!(err.is_err());
    }
}
