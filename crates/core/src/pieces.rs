//! Pieces module - byte-packed tetromino shapes and derived rotations
//!
//! Every shape fits a 4x2 box, so a piece is a single byte: the high nibble is the
//! top row, the low nibble the bottom row, and the most significant bit of each
//! nibble is the leftmost column. Only the canonical (North) byte is written down;
//! the other three orientations are derived with bit operations:
//!
//! - East (90°): swap the nibbles, then read the byte in column layout
//! - South (180°): reverse the bits of each nibble of the swapped byte
//! - West (270°): reverse the bits of each nibble, read in column layout
//!
//! Raw transforms can leave the shape floating inside the byte, so each derived
//! byte is pushed back against the top-left corner with [`align_top_left`].
//!
//! ```text
//! T North   East      South   West
//! 1110      01        0100    10
//! 0100      11        1110    11
//!           01                10
//! ```

use crate::types::{PieceKind, Rotation, PIECE_COUNT};

/// Canonical row-layout byte for each kind, indexed by [`PieceKind::index`].
pub const CANONICAL: [u8; PIECE_COUNT] = [
    0b1111_0000, // I
    0b1100_1100, // O
    0b1110_0100, // T
    0b1000_1110, // J
    0b1110_1000, // L
    0b0110_1100, // S
    0b1100_0110, // Z
];

/// Derived rotations per kind: `[East, South, West]`.
///
/// Evaluated at compile time; there is no way to rebuild or mutate it at runtime.
pub const ROTATIONS: [[u8; 3]; PIECE_COUNT] = derive_rotations();

/// 4-bit value with its bit order reversed.
const REVERSE_4_BITS: [u8; 16] = [
    0b0000, 0b1000, 0b0100, 0b1100, //
    0b0010, 0b1010, 0b0110, 0b1110, //
    0b0001, 0b1001, 0b0101, 0b1101, //
    0b0011, 0b1011, 0b0111, 0b1111,
];

/// Exchange the high and low nibbles.
#[inline]
pub const fn swap(byte: u8) -> u8 {
    (byte >> 4) | (byte << 4)
}

/// Reverse the bit order inside each nibble, keeping the nibbles in place.
#[inline]
pub const fn reverse_nibbles(byte: u8) -> u8 {
    let high = byte >> 4;
    let low = byte & 0x0F;
    (REVERSE_4_BITS[high as usize] << 4) | REVERSE_4_BITS[low as usize]
}

/// Shift a shape until its occupied bits touch the top-left corner.
///
/// First a whole empty leading nibble is shifted out (an empty top row in row
/// layout, an empty left column in column layout), then both nibbles are shifted
/// one bit at a time until bit 7 or bit 3 is set. Zero is returned unchanged.
///
/// ```text
/// 0000 -> 1111      0111 -> 1110
/// 1111    0000      0010    0100
/// ```
pub const fn align_top_left(byte: u8) -> u8 {
    if byte == 0 {
        return byte;
    }
    let mut result = byte;

    while result & 0b1111_0000 == 0 {
        result <<= 4;
    }

    while result & 0b1000_1000 == 0 {
        let high = result & 0xF0;
        let low = result & 0x0F;
        result = (high << 1) | (low << 1);
    }

    result
}

/// Compute the `[East, South, West]` bytes for every canonical shape.
pub const fn derive_rotations() -> [[u8; 3]; PIECE_COUNT] {
    let mut table = [[0u8; 3]; PIECE_COUNT];
    let mut i = 0;
    while i < PIECE_COUNT {
        let byte = CANONICAL[i];
        table[i][0] = align_top_left(swap(byte));
        table[i][1] = align_top_left(reverse_nibbles(swap(byte)));
        table[i][2] = align_top_left(reverse_nibbles(byte));
        i += 1;
    }
    table
}

/// Canonical (North) byte of a kind.
#[inline]
pub const fn canonical_shape(kind: PieceKind) -> u8 {
    CANONICAL[kind.index()]
}

/// Shape byte of a kind in the given orientation.
#[inline]
pub const fn piece_at(kind: PieceKind, rotation: Rotation) -> u8 {
    match rotation {
        Rotation::North => CANONICAL[kind.index()],
        _ => ROTATIONS[kind.index()][rotation.index() - 1],
    }
}
