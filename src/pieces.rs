use std::fmt::{self, Display};

// ---------------------------------------------
// Pieces
// ---------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    White,
}

impl Color {
    pub fn opposite(self) -> Color {
        match self {
            Color::Red => Color::White,
            Color::White => Color::Red,
        }
    }

    /// Forward row direction for men of this color. Red starts at the top
    /// of the board (row 0) and moves down, White moves up.
    pub fn forward(self) -> i16 {
        match self {
            Color::Red => 1,
            Color::White => -1,
        }
    }

    /// Row on which men of this color are crowned.
    pub fn back_rank(self) -> u8 {
        match self {
            Color::Red => 7,
            Color::White => 0,
        }
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Red => write!(f, "Red"),
            Color::White => write!(f, "White"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rank {
    Man,
    King,
}

/// A checkers piece. Pieces enter the board as men and are promoted in
/// place when they reach the back rank; they are never demoted and their
/// color never changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    color: Color,
    rank: Rank,
}

impl Piece {
    pub fn new(color: Color) -> Piece {
        Piece {
            color: color,
            rank: Rank::Man,
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn rank(&self) -> Rank {
        self.rank
    }

    pub fn is_king(&self) -> bool {
        self.rank == Rank::King
    }

    pub fn promote(&mut self) {
        self.rank = Rank::King;
    }

    /// Board-diagram symbol: lowercase for men, uppercase for kings.
    pub fn symbol(&self) -> char {
        match (self.color, self.rank) {
            (Color::Red, Rank::Man) => 'r',
            (Color::Red, Rank::King) => 'R',
            (Color::White, Rank::Man) => 'w',
            (Color::White, Rank::King) => 'W',
        }
    }
}

impl Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
