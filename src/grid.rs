use derive_more::Display;
use smallvec::SmallVec;

use crate::error::SearchError;

pub type Coord = u32;
pub type Cost = u32;

/// A cell position as (row, column). Equality is structural.
#[derive(Copy, Clone, Debug, Display, PartialEq, Eq, Hash)]
#[display("({row}, {col})")]
pub struct Pos {
    pub row: Coord,
    pub col: Coord,
}

impl Pos {
    #[inline(always)]
    #[must_use]
    pub fn new(row: Coord, col: Coord) -> Self {
        Self { row, col }
    }
}

/// Offsets used to reach a neighbouring cell. `Coord::MAX` wraps to -1.
const PREV: Coord = Coord::MAX;
const SAME: Coord = 0;
const NEXT: Coord = 1;

/// Left, right, up, down.
///
/// The enumeration order is fixed; tie-breaking between equal-priority search
/// nodes depends on the order neighbours are generated in.
const ORTHOGONAL_DELTAS: [(Coord, Coord); 4] = [
    (SAME, PREV),
    (SAME, NEXT),
    (PREV, SAME),
    (NEXT, SAME),
];

/// Up-left, up-right, down-left, down-right.
const DIAGONAL_DELTAS: [(Coord, Coord); 4] = [
    (PREV, PREV),
    (PREV, NEXT),
    (NEXT, PREV),
    (NEXT, NEXT),
];

/// An immutable rectangular 2D cost matrix.
///
/// A cell value of zero is impassable; any positive value is the cost incurred
/// when entering that cell. The grid never changes during a search, so a
/// shared reference may back any number of concurrent searches.
#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Vec<Cost>>,
}

impl Grid {
    /// Builds a grid, rejecting empty or ragged input.
    pub fn new(cells: Vec<Vec<Cost>>) -> Result<Self, SearchError> {
        if cells.is_empty() || cells[0].is_empty() {
            return Err(SearchError::InvalidArgument {
                reason: "grid has no cells".into(),
            });
        }
        let expected = cells[0].len();
        for (row, line) in cells.iter().enumerate() {
            if line.len() != expected {
                return Err(SearchError::InvalidArgument {
                    reason: format!(
                        "grid is not rectangular: row {row} has {} cells, expected {expected}",
                        line.len()
                    ),
                });
            }
        }
        Ok(Self { cells })
    }

    /// Builds a grid from rows already known to be rectangular and non-empty.
    #[inline(always)]
    pub(crate) fn from_rows(cells: Vec<Vec<Cost>>) -> Self {
        debug_assert!(!cells.is_empty() && !cells[0].is_empty());
        debug_assert!(cells.iter().all(|r| r.len() == cells[0].len()));
        Self { cells }
    }

    /// (rows, columns)
    #[inline(always)]
    #[must_use]
    pub fn dimensions(&self) -> (Coord, Coord) {
        (self.cells.len() as Coord, self.cells[0].len() as Coord)
    }

    #[inline(always)]
    #[must_use]
    pub fn in_bounds(&self, pos: Pos) -> bool {
        let (rows, cols) = self.dimensions();
        pos.row < rows && pos.col < cols
    }

    #[inline(always)]
    fn at(&self, pos: Pos) -> Cost {
        debug_assert!(self.in_bounds(pos));
        self.cells[pos.row as usize][pos.col as usize]
    }

    /// Whether `pos` is within bounds and not a wall.
    #[inline(always)]
    #[must_use]
    pub fn is_traversable(&self, pos: Pos) -> bool {
        self.in_bounds(pos) && self.at(pos) != 0
    }

    /// The cost of entering `pos`.
    ///
    /// Only meaningful for traversable positions; callers check first.
    #[inline(always)]
    #[must_use]
    pub fn entry_cost(&self, pos: Pos) -> Cost {
        debug_assert!(self.is_traversable(pos));
        self.at(pos)
    }

    /// The in-bounds neighbours of `pos`, in the fixed enumeration order:
    /// left, right, up, down, and with diagonals enabled also up-left,
    /// up-right, down-left, down-right.
    ///
    /// Walls are not filtered here; this is a pure adjacency query.
    #[must_use]
    pub fn neighbors(&self, pos: Pos, allow_diagonal: bool) -> SmallVec<[Pos; 8]> {
        let mut v = SmallVec::new();
        for (dr, dc) in ORTHOGONAL_DELTAS {
            if let Some(n) = self.offset(pos, dr, dc) {
                v.push(n);
            }
        }
        if allow_diagonal {
            for (dr, dc) in DIAGONAL_DELTAS {
                if let Some(n) = self.offset(pos, dr, dc) {
                    v.push(n);
                }
            }
        }
        v
    }

    #[inline(always)]
    fn offset(&self, pos: Pos, dr: Coord, dc: Coord) -> Option<Pos> {
        let n = Pos {
            row: pos.row.wrapping_add(dr),
            col: pos.col.wrapping_add(dc),
        };
        self.in_bounds(n).then_some(n)
    }

    /// Row-major view of the cells, for read-only consumers.
    #[inline(always)]
    #[must_use]
    pub fn rows(&self) -> &[Vec<Cost>] {
        &self.cells
    }
}

impl std::fmt::Debug for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "Grid{:?}", self.dimensions())
    }
}
