use crate::engine::move_list::MoveList;
use crate::engine::{GameState, Move};
use serde::{Deserialize, Serialize};

pub type Bitboard = u64;

pub const DEFAULT_WIDTH: i8 = 7;
pub const DEFAULT_HEIGHT: i8 = 7;

const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Player {
    One,
    Two,
}

impl Player {
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::One => Self::Two,
            Self::Two => Self::One,
        }
    }

    pub const fn index(self) -> usize {
        match self {
            Self::One => 0,
            Self::Two => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coordinate {
    pub row: i8,
    pub col: i8,
}

impl Coordinate {
    #[must_use]
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }
}

/// Reference board for knight-move Isolation. Cells are blocked permanently
/// once a player lands on them; occupancy lives in a single `u64` bitboard,
/// which caps supported dimensions at 64 cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    width: i8,
    height: i8,
    blocked: Bitboard,
    locations: [Option<Coordinate>; 2],
    to_move: Player,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    #[must_use]
    pub fn new() -> Self {
        Self::with_dimensions(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }

    #[must_use]
    pub fn with_dimensions(width: i8, height: i8) -> Self {
        debug_assert!(width > 0 && height > 0);
        debug_assert!(i32::from(width) * i32::from(height) <= 64);
        Self {
            width,
            height,
            blocked: 0,
            locations: [None; 2],
            to_move: Player::One,
        }
    }

    fn square_index(&self, row: i8, col: i8) -> u32 {
        u32::from(row.unsigned_abs()) * u32::from(self.width.unsigned_abs())
            + u32::from(col.unsigned_abs())
    }

    const fn in_bounds(&self, row: i8, col: i8) -> bool {
        row >= 0 && row < self.height && col >= 0 && col < self.width
    }

    fn is_open(&self, row: i8, col: i8) -> bool {
        self.in_bounds(row, col) && (self.blocked & (1 << self.square_index(row, col))) == 0
    }

    /// Puts `player` on `coord` and blocks the cell. The player's previous
    /// cell stays blocked; moving leaves a trail.
    pub fn place(&mut self, player: Player, coord: Coordinate) {
        debug_assert!(self.in_bounds(coord.row, coord.col));
        self.blocked |= 1 << self.square_index(coord.row, coord.col);
        if let Some(slot) = self.locations.get_mut(player.index()) {
            *slot = Some(coord);
        }
    }

    /// Blocks a cell without placing anyone on it. Test and setup helper.
    pub fn block(&mut self, coord: Coordinate) {
        debug_assert!(self.in_bounds(coord.row, coord.col));
        self.blocked |= 1 << self.square_index(coord.row, coord.col);
    }

    pub fn set_to_move(&mut self, player: Player) {
        self.to_move = player;
    }
}

impl GameState for Board {
    fn to_move(&self) -> Player {
        self.to_move
    }

    fn legal_moves_for(&self, player: Player) -> MoveList {
        let mut moves = MoveList::new();
        match self.locations.get(player.index()).copied().flatten() {
            // Opening placement: any open cell.
            None => {
                for row in 0..self.height {
                    for col in 0..self.width {
                        if self.is_open(row, col) {
                            moves.push(Move::new(row, col));
                        }
                    }
                }
            }
            Some(loc) => {
                for (dr, dc) in KNIGHT_OFFSETS {
                    let (row, col) = (loc.row + dr, loc.col + dc);
                    if self.is_open(row, col) {
                        moves.push(Move::new(row, col));
                    }
                }
            }
        }
        moves
    }

    fn forecast(&self, mv: Move) -> Self {
        debug_assert!(!mv.is_none());
        let mut next = self.clone();
        next.place(self.to_move, mv.coordinate());
        next.to_move = self.to_move.opposite();
        next
    }

    fn is_winner(&self, player: Player) -> bool {
        player != self.to_move && self.legal_moves_for(self.to_move).is_empty()
    }

    fn is_loser(&self, player: Player) -> bool {
        player == self.to_move && self.legal_moves_for(player).is_empty()
    }

    fn player_location(&self, player: Player) -> Option<Coordinate> {
        self.locations.get(player.index()).copied().flatten()
    }

    fn open_cell_count(&self) -> u32 {
        self.total_cell_count() - self.blocked.count_ones()
    }

    fn width(&self) -> i8 {
        self.width
    }

    fn height(&self) -> i8 {
        self.height
    }
}
