use crate::engine::Move;

// A knight has at most 8 onward moves, but the opening placement enumerates
// every open cell, so capacity must cover the largest supported board.
const MAX_MOVES: usize = 64;

pub struct MoveList {
    moves: [Move; MAX_MOVES],
    count: usize,
}

impl Default for MoveList {
    fn default() -> Self {
        Self {
            moves: [Move::NONE; MAX_MOVES],
            count: 0,
        }
    }
}

impl MoveList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, mv: Move) {
        if self.count < self.moves.len() {
            if let Some(slot) = self.moves.get_mut(self.count) {
                *slot = mv;
                self.count += 1;
            }
        } else {
            debug_assert!(false, "MoveList overflow! Max moves: {}", MAX_MOVES);
        }
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.count
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// First move in enumeration order; the root fallback when no candidate
    /// strictly improved on the baseline.
    #[must_use]
    pub fn first(&self) -> Option<Move> {
        self.moves.get(0..self.count).and_then(|s| s.first().copied())
    }

    #[must_use]
    pub fn contains(&self, mv: Move) -> bool {
        self.iter().any(|m| *m == mv)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.moves.get(0..self.count).unwrap_or(&[]).iter()
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for MoveList {
    type Item = Move;
    type IntoIter = std::iter::Take<std::array::IntoIter<Move, MAX_MOVES>>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.into_iter().take(self.count)
    }
}
