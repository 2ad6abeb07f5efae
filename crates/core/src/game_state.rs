//! Game state module - the falling-piece state machine
//!
//! One [`GameState`] owns the board, the active piece, the queued next piece, the
//! score and the random source. A piece is either falling, or being locked (fused
//! into the board, full rows cleared and the next piece spawned in one step), or the
//! game is over and every operation is a no-op.

use arrayvec::ArrayVec;

use crate::board::{Board, ClearedRows};
use crate::draw::{cells, height_of, width_of, PieceCells, LEFT_MOST_BIT, RIGHT_MOST_BIT};
use crate::pieces::piece_at;
use crate::rng::SimpleRng;
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::{GameAction, Layout, PieceKind, Rotation, BOARD_HEIGHT, BOARD_WIDTH};

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tetromino {
    pub kind: PieceKind,
    pub rotation: Rotation,
    /// Column of the piece's top-left corner
    pub x: i8,
    /// Row of the piece's top-left corner
    pub y: i8,
    width: u8,
    height: u8,
}

impl Tetromino {
    /// Create a new tetromino at the spawn position, horizontally centred on row 0
    pub fn new(kind: PieceKind) -> Self {
        let width = width_of(kind, Rotation::North);
        Self {
            kind,
            rotation: Rotation::North,
            x: ((BOARD_WIDTH - width) / 2) as i8,
            y: 0,
            width,
            height: height_of(kind, Rotation::North),
        }
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    pub fn layout(&self) -> Layout {
        self.rotation.layout()
    }

    /// Shape byte of the current orientation
    pub fn shape(&self) -> u8 {
        piece_at(self.kind, self.rotation)
    }

    /// Occupied cells relative to the top-left corner
    pub fn cells(&self) -> PieceCells {
        cells(self.kind, self.rotation)
    }

    /// Occupied cells in board coordinates
    pub fn board_cells(&self) -> impl Iterator<Item = (i8, i8)> {
        let (x, y) = (self.x, self.y);
        self.cells()
            .map(move |(dx, dy)| (x + dx as i8, y + dy as i8))
    }

    fn set_rotation(&mut self, rotation: Rotation) {
        self.rotation = rotation;
        self.width = width_of(self.kind, rotation);
        self.height = height_of(self.kind, rotation);
    }
}

/// Leftmost and rightmost occupied column of every occupied shape row, as
/// `(row, left, right)` relative to the piece's top-left.
///
/// Row layout has two rows (the nibbles). Column layout has up to four rows,
/// each built from one bit of the high nibble (column 0) and one of the low
/// nibble (column 1).
fn row_extents(shape: u8, layout: Layout) -> ArrayVec<(u8, u8, u8), 4> {
    let mut extents = ArrayVec::new();
    match layout {
        Layout::Row => {
            for (row, nibble) in [(0u8, shape >> 4), (1, shape & 0x0F)] {
                if let (Some(left), Some(right)) = (
                    LEFT_MOST_BIT[nibble as usize],
                    RIGHT_MOST_BIT[nibble as usize],
                ) {
                    extents.push((row, left, right));
                }
            }
        }
        Layout::Column => {
            for row in 0..4u8 {
                let bits = (((shape >> (7 - row)) & 1) << 1) | ((shape >> (3 - row)) & 1);
                // A 2-bit value sits in the low half of the 4-bit tables.
                if let (Some(left), Some(right)) =
                    (LEFT_MOST_BIT[bits as usize], RIGHT_MOST_BIT[bits as usize])
                {
                    extents.push((row, left - 2, right - 2));
                }
            }
        }
    }
    extents
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    active: Tetromino,
    next: PieceKind,
    rng: SimpleRng,
    seed: u32,
    score: u32,
    game_over: bool,
}

impl GameState {
    /// Create a new game with the given RNG seed
    ///
    /// The first "next" piece is drawn from the seed and immediately spawned, so
    /// two games with the same seed see the same piece sequence.
    ///
    /// # Examples
    ///
    /// ```
    /// use bytetris_core::GameState;
    ///
    /// let a = GameState::new(42);
    /// let b = GameState::new(42);
    /// assert_eq!(a.active(), b.active());
    /// assert_eq!(a.next_piece(), b.next_piece());
    /// assert_eq!(a.score(), 0);
    /// assert!(!a.game_over());
    /// ```
    pub fn new(seed: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        let first = rng.next_piece();
        Self::from_parts(Board::new(), first, rng, seed)
    }

    /// Start from a prepared board with a chosen first piece.
    ///
    /// The next piece is still drawn from `seed`. Spawning follows the normal rules,
    /// so a board that blocks the spawn position starts out game over.
    pub fn with_board(board: Board, first: PieceKind, seed: u32) -> Self {
        Self::from_parts(board, first, SimpleRng::new(seed), seed)
    }

    fn from_parts(board: Board, first: PieceKind, rng: SimpleRng, seed: u32) -> Self {
        let mut state = Self {
            board,
            active: Tetromino::new(first),
            next: first,
            rng,
            seed,
            score: 0,
            game_over: false,
        };
        state.spawn();
        state
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Tetromino {
        self.active
    }

    pub fn next_piece(&self) -> PieceKind {
        self.next
    }

    /// Number of cleared rows
    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_grid(&mut out.board);
        out.active = ActiveSnapshot::from(self.active);
        out.next = self.next;
        out.score = self.score;
        out.game_over = self.game_over;
        out.seed = self.seed;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Promote the queued piece to active and queue a fresh random one.
    ///
    /// Returns false (and sets game over) when the new piece overlaps locked cells.
    /// The board is never modified here. Once the game is over nothing changes.
    pub fn spawn(&mut self) -> bool {
        if self.game_over {
            return false;
        }
        self.active = Tetromino::new(self.next);
        self.next = self.rng.next_piece();

        if self.overlaps(self.active.kind, self.active.rotation, self.active.x, self.active.y) {
            self.game_over = true;
            return false;
        }
        true
    }

    /// Check whether a shape at `(x, y)` leaves the board or hits a locked cell.
    fn overlaps(&self, kind: PieceKind, rotation: Rotation, x: i8, y: i8) -> bool {
        cells(kind, rotation).any(|(dx, dy)| {
            let (cx, cy) = (x + dx as i8, y + dy as i8);
            self.board.get(cx, cy) != Some(false)
        })
    }

    /// Shift the active piece one column left
    ///
    /// Rejected when flush against the left wall, or when the cell just left of any
    /// shape row's leftmost block is filled.
    pub fn move_left(&mut self) -> bool {
        let piece = self.active;
        if self.game_over || piece.x == 0 {
            return false;
        }

        let blocked = row_extents(piece.shape(), piece.layout())
            .iter()
            .any(|&(row, left, _)| {
                self.board
                    .is_occupied(piece.x + left as i8 - 1, piece.y + row as i8)
            });
        if blocked {
            return false;
        }

        self.active.x -= 1;
        true
    }

    /// Shift the active piece one column right
    pub fn move_right(&mut self) -> bool {
        let piece = self.active;
        if self.game_over || piece.x + piece.width as i8 == BOARD_WIDTH as i8 {
            return false;
        }

        let blocked = row_extents(piece.shape(), piece.layout())
            .iter()
            .any(|&(row, _, right)| {
                self.board
                    .is_occupied(piece.x + right as i8 + 1, piece.y + row as i8)
            });
        if blocked {
            return false;
        }

        self.active.x += 1;
        true
    }

    /// Rotate the active piece 90° clockwise in place
    ///
    /// There is no kick search. When the rotated piece would stick out past the
    /// right wall it is shifted left by its growth in width, and the shape is then
    /// tested once at that final position; any overlap rejects the rotation.
    pub fn rotate(&mut self) -> bool {
        let piece = self.active;
        if self.game_over {
            return false;
        }

        let rotation = piece.rotation.rotate_cw();
        let width = width_of(piece.kind, rotation);
        let mut x = piece.x;
        // Shift only when the piece would exceed the board, not when it ends flush.
        if x + width as i8 > BOARD_WIDTH as i8 {
            x -= (width - piece.width) as i8;
        }

        if self.overlaps(piece.kind, rotation, x, piece.y) {
            return false;
        }

        self.active.set_rotation(rotation);
        self.active.x = x;
        true
    }

    /// Check if the active piece rests on the floor or on a locked cell
    pub fn is_landed(&self) -> bool {
        let piece = self.active;
        if piece.y + piece.height as i8 >= BOARD_HEIGHT as i8 {
            return true;
        }
        piece
            .board_cells()
            .any(|(x, y)| self.board.is_occupied(x, y + 1))
    }

    /// Move the active piece down one row.
    ///
    /// Returns true when the piece has landed and should be locked; the piece is
    /// not moved in that case. Locking is left to the caller.
    pub fn move_down(&mut self) -> bool {
        if self.game_over {
            return false;
        }
        if self.is_landed() {
            return true;
        }
        self.active.y += 1;
        false
    }

    /// Fuse the active piece into the board, clear full rows and spawn the next piece.
    ///
    /// Each cleared row adds one to the score. Returns the cleared row indices;
    /// after game over nothing is locked and the list is empty.
    pub fn lock_and_clear(&mut self) -> ClearedRows {
        if self.game_over {
            return ClearedRows::new();
        }
        let piece = self.active;
        self.board.fill_cells(piece.x, piece.y, piece.cells());

        let cleared = self.board.clear_full_rows();
        self.score += cleared.len() as u32;

        self.spawn();
        cleared
    }

    /// One gravity step. Returns true when a piece was placed.
    pub fn tick(&mut self) -> bool {
        if self.game_over {
            return false;
        }
        if self.move_down() {
            self.lock_and_clear();
            return true;
        }
        false
    }

    /// Apply a player action. Returns true if the active piece changed.
    ///
    /// Soft drop only moves; a landed piece is left for the next gravity step.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.move_left(),
            GameAction::MoveRight => self.move_right(),
            GameAction::RotateCw => self.rotate(),
            GameAction::SoftDrop => {
                let before = self.active.y;
                self.move_down();
                self.active.y != before
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game_with(board: Board, first: PieceKind) -> GameState {
        GameState::with_board(board, first, 7)
    }

    #[test]
    fn test_spawn_centres_piece() {
        for kind in PieceKind::ALL {
            let state = game_with(Board::new(), kind);
            let active = state.active();
            assert_eq!(active.rotation, Rotation::North);
            assert_eq!(active.y, 0);
            assert_eq!(active.x, ((10 - active.width()) / 2) as i8, "{:?}", kind);
        }
    }

    #[test]
    fn test_o_piece_moves_left_to_wall() {
        let mut state = game_with(Board::new(), PieceKind::O);
        assert_eq!(state.active().x, 4);

        assert!(state.move_left());
        assert_eq!(state.active().x, 3);

        for _ in 0..3 {
            assert!(state.move_left());
        }
        assert_eq!(state.active().x, 0);
        assert!(!state.move_left());
        assert_eq!(state.active().x, 0);
    }

    #[test]
    fn test_move_right_stops_at_wall() {
        let mut state = game_with(Board::new(), PieceKind::T);
        while state.move_right() {}
        let active = state.active();
        assert_eq!(active.x + active.width() as i8, 10);
        assert!(!state.move_right());
    }

    #[test]
    fn test_move_blocked_by_locked_cell() {
        // Cell just left of the O's bottom row at x = 3, y = 1.
        let mut board = Board::new();
        board.set(3, 1, true);
        let mut state = game_with(board, PieceKind::O);

        assert!(!state.move_left());
        assert_eq!(state.active().x, 4);
        assert!(state.move_right());
    }

    #[test]
    fn test_column_layout_edges() {
        // East T: 01 / 11 / 01 - only the middle row reaches column 0.
        let mut state = game_with(Board::new(), PieceKind::T);
        assert!(state.rotate());
        assert_eq!(state.active().x, 3);

        let extents = row_extents(state.active().shape(), Layout::Column);
        assert_eq!(extents.as_slice(), &[(0, 1, 1), (1, 0, 1), (2, 1, 1)]);

        // Diagonal from the top row's block: not in the way.
        let mut board = Board::new();
        board.set(2, 0, true);
        let mut free = game_with(board, PieceKind::T);
        assert!(free.rotate());
        assert!(free.move_left());

        // Directly left of the middle row: blocks.
        let mut board = Board::new();
        board.set(2, 1, true);
        let mut blocked = game_with(board, PieceKind::T);
        assert!(blocked.rotate());
        assert!(!blocked.move_left());
    }

    #[test]
    fn test_rotate_cycles_back_to_north() {
        let mut state = game_with(Board::new(), PieceKind::L);
        let start = state.active();
        for _ in 0..4 {
            assert!(state.rotate());
        }
        let active = state.active();
        assert_eq!(active.rotation, Rotation::North);
        assert_eq!((active.width(), active.height()), (start.width(), start.height()));
    }

    #[test]
    fn test_rotate_clamps_at_right_wall() {
        let mut state = game_with(Board::new(), PieceKind::I);
        assert!(state.rotate());
        assert_eq!(state.active().width(), 1);
        while state.move_right() {}
        assert_eq!(state.active().x, 9);

        assert!(state.rotate());
        let active = state.active();
        assert_eq!(active.rotation, Rotation::South);
        assert_eq!(active.x, 6);
        assert_eq!(active.x + active.width() as i8, 10);
    }

    /// Vertical I flush against the right wall at `y = 10`.
    fn vertical_i_at_right_wall(board: Board) -> GameState {
        let mut state = game_with(board, PieceKind::I);
        assert!(state.rotate());
        while state.move_right() {}
        for _ in 0..10 {
            assert!(!state.move_down());
        }
        let active = state.active();
        assert_eq!((active.x, active.y, active.rotation), (9, 10, Rotation::East));
        state
    }

    #[test]
    fn test_rotate_rejected_when_clamped_position_is_occupied() {
        let mut board = Board::new();
        board.set(7, 10, true);
        let mut state = vertical_i_at_right_wall(board);
        let before = state.active();

        assert!(!state.rotate());
        assert_eq!(state.active(), before);
        assert!(state
            .active()
            .board_cells()
            .all(|(x, y)| !state.board().is_occupied(x, y)));
    }

    #[test]
    fn test_rotate_clamps_next_to_locked_cells() {
        // Occupied cells just outside the clamped span leave room to turn.
        let mut board = Board::new();
        board.set(5, 10, true);
        board.set(6, 11, true);
        let mut state = vertical_i_at_right_wall(board);

        assert!(state.rotate());
        let active = state.active();
        assert_eq!((active.x, active.y, active.rotation), (6, 10, Rotation::South));
        assert!(active.board_cells().all(|(x, y)| !state.board().is_occupied(x, y)));
    }

    #[test]
    fn test_rotate_flush_with_wall_checks_locked_cells() {
        // West J ends flush at x = 7 once (9, 1) stops it; North J is 3 wide and
        // still fits without a shift, but its bottom row would cover (9, 1).
        let mut board = Board::new();
        board.set(9, 1, true);
        let mut state = game_with(board, PieceKind::J);
        for _ in 0..3 {
            assert!(state.rotate());
        }
        assert_eq!(state.active().rotation, Rotation::West);
        while state.move_right() {}
        assert_eq!(state.active().x, 7);
        let before = state.active();

        assert!(!state.rotate());
        assert_eq!(state.active(), before);
    }

    #[test]
    fn test_rotate_blocked_by_floor() {
        let mut state = game_with(Board::new(), PieceKind::I);
        while !state.move_down() {}
        assert_eq!(state.active().y, 15);
        assert!(!state.rotate());
        assert_eq!(state.active().rotation, Rotation::North);
    }

    #[test]
    fn test_move_down_reports_landing_without_moving() {
        let mut state = game_with(Board::new(), PieceKind::O);
        for _ in 0..14 {
            assert!(!state.move_down());
        }
        assert_eq!(state.active().y, 14);
        assert!(state.is_landed());
        assert!(state.move_down());
        assert_eq!(state.active().y, 14);
        assert_eq!(state.board().filled_count(), 0);
    }

    #[test]
    fn test_tick_locks_and_spawns() {
        let mut state = game_with(Board::new(), PieceKind::O);
        let next = state.next_piece();
        let mut ticks = 0;
        while !state.tick() {
            ticks += 1;
        }
        assert_eq!(ticks, 14);
        assert_eq!(state.board().filled_count(), 4);
        assert!(state.board().is_occupied(4, 15));
        assert!(state.board().is_occupied(5, 14));
        assert_eq!(state.active().kind, next);
        assert_eq!(state.active().y, 0);
    }

    #[test]
    fn test_lock_clears_completed_row() {
        let board = Board::from_rows(&["#.........", "#########."]);
        let mut state = game_with(board, PieceKind::I);
        assert!(state.rotate());
        while state.move_right() {}
        while !state.tick() {}

        assert_eq!(state.score(), 1);
        let board = state.board();
        // Row 15 took row 14: the old '#' at x = 0 plus the I cell at x = 9.
        assert!(board.is_occupied(0, 15));
        assert!(board.is_occupied(9, 15));
        assert!(!board.is_occupied(1, 15));
        assert!(board.is_occupied(9, 14));
        assert!(board.is_occupied(9, 13));
        assert!(!board.is_occupied(9, 12));
        assert_eq!(board.filled_count(), 4);
    }

    #[test]
    fn test_spawn_over_blocks_sets_game_over() {
        let mut board = Board::new();
        board.set(4, 0, true);
        let before = board.clone();

        let mut state = game_with(board, PieceKind::O);
        assert!(state.game_over());
        assert_eq!(state.board(), &before);

        let active = state.active();
        assert!(!state.move_left());
        assert!(!state.move_right());
        assert!(!state.rotate());
        assert!(!state.move_down());
        assert!(!state.tick());
        assert_eq!(state.active(), active);
        assert_eq!(state.board(), &before);
    }

    #[test]
    fn test_spawn_and_lock_are_inert_after_game_over() {
        let mut board = Board::from_rows(&["#########."]);
        board.set(4, 0, true);
        let mut state = game_with(board, PieceKind::O);
        assert!(state.game_over());

        let board = state.board().clone();
        let next = state.next_piece();
        let active = state.active();

        assert!(!state.spawn());
        assert!(state.lock_and_clear().is_empty());

        assert_eq!(state.board(), &board);
        assert_eq!(state.score(), 0);
        assert_eq!(state.next_piece(), next);
        assert_eq!(state.active(), active);
    }

    #[test]
    fn test_apply_action_dispatch() {
        let mut state = game_with(Board::new(), PieceKind::T);
        let x = state.active().x;

        assert!(state.apply_action(GameAction::MoveRight));
        assert_eq!(state.active().x, x + 1);
        assert!(state.apply_action(GameAction::MoveLeft));
        assert_eq!(state.active().x, x);
        assert!(state.apply_action(GameAction::RotateCw));
        assert_eq!(state.active().rotation, Rotation::East);
        assert!(state.apply_action(GameAction::SoftDrop));
        assert_eq!(state.active().y, 1);
    }

    #[test]
    fn test_soft_drop_never_locks() {
        let mut state = game_with(Board::new(), PieceKind::O);
        while state.apply_action(GameAction::SoftDrop) {}
        assert_eq!(state.active().y, 14);
        assert_eq!(state.board().filled_count(), 0);
        assert!(!state.apply_action(GameAction::SoftDrop));
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = GameState::new(2024);
        let mut b = GameState::new(2024);
        for _ in 0..200 {
            assert_eq!(a.tick(), b.tick());
            assert_eq!(a.active(), b.active());
            assert_eq!(a.next_piece(), b.next_piece());
        }
    }

    #[test]
    fn test_snapshot_mirrors_state() {
        let mut state = game_with(Board::from_rows(&["##........"]), PieceKind::S);
        state.move_right();
        let snap = state.snapshot();
        assert_eq!(snap.active.kind, PieceKind::S);
        assert_eq!(snap.active.x, state.active().x);
        assert_eq!(snap.next, state.next_piece());
        assert!(snap.board[15][0] && snap.board[15][1]);
        assert!(!snap.game_over);
        assert_eq!(snap.seed, 7);
    }
}
