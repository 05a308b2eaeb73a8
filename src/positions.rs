use crate::checkers_errors::*;
use std::fmt::{self, Display};
use std::ops;
use std::str::FromStr;

// Checkerboard positions on a 8x8 board.
//
// Numbered as follows:
//
//     a  b  c  d  e  f  g  h
//   ---------------------------
// 8 | 0  1  2  3  4  5  6  7  | 8
// 7 | 8  9  10 11 12 13 14 15 | 7
// 6 | 16 17 18 19 20 21 22 23 | 6
// 5 | 24 25 26 27 28 29 30 31 | 5
// 4 | 32 33 34 35 36 37 38 39 | 4
// 3 | 40 41 42 43 44 45 46 47 | 3
// 2 | 48 49 50 51 52 53 54 55 | 2
// 1 | 56 57 58 59 60 61 62 63 | 1
//   ---------------------------
//    a  b  c  d  e  f  g  h
//
// Pieces only ever sit on the dark squares, those where row + col is odd.
//
// ---------------------------------------------
// Positions
// ---------------------------------------------

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position(u8);

impl From<u8> for Position {
    fn from(u: u8) -> Self {
        debug_assert!(u < 64, "Invalid position: {}", u);
        Position(u)
    }
}

impl FromStr for Position {
    type Err = CheckersError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Error is rather big, so we use a closure to avoid copies
        let err_closure = || -> CheckersError { format!("Invalid square {}", s).into() };
        let mut chars = s.chars();

        let col = chars.next().ok_or_else(err_closure)?;
        let row = chars
            .next()
            .map(|r| r.to_digit(10))
            .flatten()
            .ok_or_else(err_closure)?;

        //    Too many characters || column or row outside a1..h8
        if chars.next().is_some() || col < 'a' || col > 'h' || row < 1 || row > 8 {
            return Err(err_closure());
        }

        // number part of the square counts rows from the bottom up
        Ok(Position::from_row_col(
            (8 - row) as u8,
            col as u8 - 'a' as u8,
        ))
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (row, col) = self.to_row_col();
        write!(
            f,
            "{}{}",
            ['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h'][col as usize],
            8 - row,
        )
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

pub struct PositionIterator(u8);

impl Iterator for PositionIterator {
    type Item = Position;

    fn next(&mut self) -> Option<Self::Item> {
        if self.0 > 63 {
            None
        } else {
            self.0 = self.0 + 1u8;
            Some((self.0 - 1).into())
        }
    }
}

impl Position {
    /// Returns row and col from position. If the position is illegal, an illegal row and col
    /// will be returned.
    /// Example: Position 63 (h1 on the board) is mapped to (7,7)
    pub const fn to_row_col(self) -> (u8, u8) {
        (self.0 / 8, self.0 % 8)
    }

    /// Transforms a row and a col to Position on the board.
    /// Row and col must correspond to a legal board position,
    /// else the returned value also doesn't correspond to a legal board position.
    pub fn from_row_col(row: u8, col: u8) -> Position {
        debug_assert!(Position::in_board(row as i16, col as i16));
        (row * 8 + col).into()
    }

    /// Checks if row and col belong to a legal board position.
    pub const fn in_board(row: i16, col: i16) -> bool {
        row >= 0 && col >= 0 && row < 8 && col < 8
    }

    /// Dark squares are the only squares checkers pieces occupy or traverse.
    pub fn is_dark(self) -> bool {
        let (row, col) = self.to_row_col();
        (row + col) % 2 == 1
    }

    /// Allows access to underlying u8. Should only be used when necessary.
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Allows to iterate over all positions on the board
    pub fn all_positions() -> PositionIterator {
        PositionIterator(0)
    }
}

// ---------------------------------------------
// Steps
// ---------------------------------------------

/// An offset between board squares, saved as (row, col). Diagonal steps
/// preserve square shade, so stepping from a dark square always lands on
/// a dark square.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step(pub i16, pub i16);

impl Step {
    /// The four diagonal directions a piece can ever head in.
    pub const DIAGONALS: [Step; 4] = [Step(-1, -1), Step(-1, 1), Step(1, -1), Step(1, 1)];

    /// Offset leading from `from` to `to`.
    pub fn between(from: Position, to: Position) -> Step {
        let (fr, fc) = from.to_row_col();
        let (tr, tc) = to.to_row_col();
        Step(tr as i16 - fr as i16, tc as i16 - fc as i16)
    }
}

impl<T> ops::Index<Position> for [T; 64] {
    type Output = T;

    fn index(&self, index: Position) -> &T {
        &self[index.0 as usize]
    }
}

impl<T> ops::IndexMut<Position> for [T; 64] {
    fn index_mut(&mut self, index: Position) -> &mut Self::Output {
        &mut self[index.0 as usize]
    }
}

impl_op_ex!(+ |a: &Position, b: &Step| -> Option<Position> {
    let (row, col) = a.to_row_col();
    let new_row = row as i16 + b.0;
    let new_col = col as i16 + b.1;
    if Position::in_board(new_row, new_col) {
        Some(Position::from_row_col(new_row as u8, new_col as u8))
    } else {
        None
    }
});
