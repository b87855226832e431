//! Cells and cell categories.

use std::fmt;

/// Flat row-major cell identifier: `id = row * cols + col`.
pub type CellId = usize;

/// What a grid position is: the forced entry/exit endpoints, open path,
/// or an impassable wall.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellKind {
    /// The designated start cell (always id 0 after generation).
    Entry,
    /// The designated goal cell (always the last id after generation).
    Exit,
    /// Open, traversable ground.
    #[default]
    Path,
    /// Impassable.
    Wall,
}

impl CellKind {
    /// Whether the cell blocks movement.
    #[inline]
    pub const fn is_wall(self) -> bool {
        matches!(self, CellKind::Wall)
    }

    /// Whether the cell can be entered. Everything except a wall.
    #[inline]
    pub const fn is_traversable(self) -> bool {
        !self.is_wall()
    }
}

impl fmt::Display for CellKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CellKind::Entry => "entry",
            CellKind::Exit => "exit",
            CellKind::Path => "path",
            CellKind::Wall => "wall",
        };
        f.write_str(name)
    }
}

/// One grid position: its coordinates, flat id, and kind.
///
/// The id is redundant with `(row, col)` for a fixed column count; it is
/// stored so that graph and search code can work with flat ids alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub row: i32,
    pub col: i32,
    pub id: CellId,
    pub kind: CellKind,
}

impl Cell {
    /// Create a new cell.
    #[inline]
    pub const fn new(row: i32, col: i32, id: CellId, kind: CellKind) -> Self {
        Self { row, col, id, kind }
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn cell_round_trip() {
        let cell = Cell::new(2, 3, 11, CellKind::Wall);
        let json = serde_json::to_string(&cell).unwrap();
        let back: Cell = serde_json::from_str(&json).unwrap();
        assert_eq!(cell, back);
    }
}
