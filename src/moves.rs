/// Describing the moves that can be done on a checkerboard.
use crate::checkers_errors::*;
use crate::positions::*;
use std::fmt;
use std::str::FromStr;

/// A move from one square to another. This is either a one-step diagonal
/// relocation, a single jump (two steps with the captured piece in the
/// middle), or a capture chain written as its origin and final landing
/// square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Position,
    pub to: Position,
}

impl Move {
    pub fn new(from: Position, to: Position) -> Self {
        Move { from: from, to: to }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.from, self.to)
    }
}

impl FromStr for Move {
    type Err = CheckersError;

    /// Parses move notation of the form `<from>-<to>`, e.g. `b6-c5`.
    /// Anything not yielding exactly two square names is malformed.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err_closure = || -> CheckersError { format!("Invalid move notation {}", s).into() };
        let parts: Vec<&str> = s.split('-').collect();
        if parts.len() != 2 {
            return Err(err_closure());
        }
        Ok(Move::new(parts[0].parse()?, parts[1].parse()?))
    }
}
