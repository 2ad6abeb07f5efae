//! Draw info - occupied cells and bounding box of a piece orientation
//!
//! Renderers and the state machine never decode shape bytes themselves; they ask
//! this module for the filled cells (relative to the piece's top-left corner) and
//! for the piece's width and height.

use crate::pieces::piece_at;
use crate::types::{Layout, PieceKind, Rotation};

/// Column of the leftmost set bit of a 4-bit row, `None` for an empty row.
pub(crate) const LEFT_MOST_BIT: [Option<u8>; 16] = [
    None,
    Some(3),
    Some(2),
    Some(2),
    Some(1),
    Some(1),
    Some(1),
    Some(1),
    Some(0),
    Some(0),
    Some(0),
    Some(0),
    Some(0),
    Some(0),
    Some(0),
    Some(0),
];

/// Column of the rightmost set bit of a 4-bit row, `None` for an empty row.
pub(crate) const RIGHT_MOST_BIT: [Option<u8>; 16] = [
    None,
    Some(3),
    Some(2),
    Some(3),
    Some(1),
    Some(3),
    Some(2),
    Some(3),
    Some(0),
    Some(3),
    Some(2),
    Some(3),
    Some(1),
    Some(3),
    Some(2),
    Some(3),
];

/// Iterator over the occupied cells of a shape byte.
///
/// Bits are visited most significant first, so cells come out in a stable order.
/// The iterator is `Copy`: cloning it restarts nothing and costs nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceCells {
    bits: u8,
    layout: Layout,
    index: u8,
}

impl PieceCells {
    /// Cells of an arbitrary shape byte under a layout.
    pub fn from_bits(bits: u8, layout: Layout) -> Self {
        Self {
            bits,
            layout,
            index: 0,
        }
    }
}

impl Iterator for PieceCells {
    type Item = (u8, u8);

    fn next(&mut self) -> Option<Self::Item> {
        while self.index < 8 {
            let i = self.index;
            self.index += 1;
            if (self.bits << i) & 0b1000_0000 != 0 {
                return Some(self.layout.cell(i));
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = if self.index >= 8 {
            0
        } else {
            (self.bits << self.index).count_ones() as usize
        };
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for PieceCells {}

/// Occupied cells of `kind` in `rotation`, relative to the piece's top-left.
///
/// # Examples
///
/// ```
/// use bytetris_core::draw::cells;
/// use bytetris_core::types::{PieceKind, Rotation};
///
/// let t: Vec<_> = cells(PieceKind::T, Rotation::North).collect();
/// assert_eq!(t, vec![(0, 0), (1, 0), (2, 0), (1, 1)]);
/// ```
pub fn cells(kind: PieceKind, rotation: Rotation) -> PieceCells {
    PieceCells::from_bits(piece_at(kind, rotation), rotation.layout())
}

/// Call `visit(kind, x, y)` for each occupied cell of `kind` in `rotation`.
pub fn for_each_cell(kind: PieceKind, rotation: Rotation, mut visit: impl FnMut(PieceKind, u8, u8)) {
    for (x, y) in cells(kind, rotation) {
        visit(kind, x, y);
    }
}

/// Width in cells of `kind` in `rotation`.
pub fn width_of(kind: PieceKind, rotation: Rotation) -> u8 {
    match rotation.layout() {
        // Column layout is the row-layout bounding box transposed.
        Layout::Column => height_of(kind, Rotation::North),
        Layout::Row => {
            let piece = piece_at(kind, rotation);
            let combined = (piece >> 4) | (piece & 0x0F);
            RIGHT_MOST_BIT[combined as usize].map_or(0, |right| right + 1)
        }
    }
}

/// Height in cells of `kind` in `rotation`.
pub fn height_of(kind: PieceKind, rotation: Rotation) -> u8 {
    match rotation.layout() {
        Layout::Column => width_of(kind, Rotation::North),
        Layout::Row => {
            let piece = piece_at(kind, rotation);
            let high = piece >> 4;
            let low = piece & 0x0F;
            match (high, low) {
                (0, 0) => 0,
                (0, _) | (_, 0) => 1,
                _ => 2,
            }
        }
    }
}
