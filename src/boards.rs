use crate::checkers_errors::*;
use crate::moves::*;
use crate::pieces::*;
use crate::positions::*;
use array_init::array_init;
use lazy_static::lazy_static;
use std::collections::HashMap;
use std::fmt::{self, Display};

// ---------------------------------------------
// Board Types
// ---------------------------------------------

pub const BOARD_SIZE: u8 = 8;

lazy_static! {
    /// Diagonal neighbors of every dark square, precomputed once. Light
    /// squares have no entry since pieces never occupy or traverse them.
    static ref ADJACENCY: HashMap<Position, Vec<Position>> = build_adjacency();
}

fn build_adjacency() -> HashMap<Position, Vec<Position>> {
    let mut adjacency = HashMap::new();
    for pos in Position::all_positions().filter(|p| p.is_dark()) {
        let mut neighbors = Vec::with_capacity(4);
        for step in Step::DIAGONALS.iter() {
            if let Some(neighbor) = pos + step {
                neighbors.push(neighbor);
            }
        }
        adjacency.insert(pos, neighbors);
    }
    adjacency
}

fn neighbors_of(pos: Position) -> impl Iterator<Item = &'static Position> {
    ADJACENCY.get(&pos).into_iter().flatten()
}

/// The square contents of a board. Copying a grid copies every piece by
/// value, so snapshots never alias live pieces.
#[derive(Clone, Copy, PartialEq)]
pub struct Grid {
    squares: [Option<Piece>; (BOARD_SIZE * BOARD_SIZE) as usize],
}

impl Grid {
    fn empty() -> Grid {
        Grid {
            squares: array_init(|_| None),
        }
    }

    fn standard_setup() -> Grid {
        let mut grid = Grid::empty();
        for pos in Position::all_positions().filter(|p| p.is_dark()) {
            let (row, _) = pos.to_row_col();
            if row < 3 {
                grid.squares[pos] = Some(Piece::new(Color::Red));
            } else if row > 4 {
                grid.squares[pos] = Some(Piece::new(Color::White));
            }
        }
        grid
    }
}

// ---------------------------------------------
// Board
// ---------------------------------------------

/// The rule engine: one grid plus a stack of pre-move snapshots for undo.
/// All mutation goes through [apply_move](Board::apply_move) and
/// [undo](Board::undo).
pub struct Board {
    grid: Grid,
    history: Vec<Grid>,
}

impl Board {
    /// A board with the standard starting layout: Red men on the dark
    /// squares of rows 8-6 of the diagram, White men on rows 3-1.
    pub fn standard_setup() -> Board {
        Board {
            grid: Grid::standard_setup(),
            history: Vec::new(),
        }
    }

    /// A board without any pieces, for setting up arbitrary situations.
    pub fn empty() -> Board {
        Board {
            grid: Grid::empty(),
            history: Vec::new(),
        }
    }

    /// Puts a piece on an empty dark square.
    pub fn place(&mut self, pos: Position, piece: Piece) -> CheckersResult<()> {
        if !pos.is_dark() {
            return Err(format!("Square {} is not playable", pos).into());
        }
        let current = &mut self.grid.squares[pos];
        if current.is_some() {
            return Err(format!("Square {} is not empty", pos).into());
        }
        *current = Some(piece);
        Ok(())
    }

    pub fn piece_at(&self, pos: Position) -> Option<Piece> {
        self.grid.squares[pos]
    }

    /// Attempts to apply a move for a player and reports whether it was
    /// legal. Every legality check completes before any state is touched,
    /// so a rejected move leaves both the grid and the undo history
    /// exactly as they were.
    ///
    /// Accepted displacements are a one-step diagonal (forward-only for
    /// men), a single jump over an opposing piece (any direction for any
    /// rank), or the endpoint of a capture chain discovered by the same
    /// search that [all_valid_moves](Board::all_valid_moves) uses. On
    /// acceptance the pre-move grid is pushed onto the history, captured
    /// pieces are removed, and a man landing on its back rank is crowned.
    pub fn apply_move(&mut self, m: &Move, player: Color) -> bool {
        let piece = match self.grid.squares[m.from] {
            Some(p) if p.color() == player => p,
            _ => return false,
        };
        if self.grid.squares[m.to].is_some() {
            return false;
        }

        let step = Step::between(m.from, m.to);
        let captured = if step.0.abs() == 1 && step.1.abs() == 1 {
            // Simple move: men may only head in their forward direction
            if !piece.is_king() && step.0 != player.forward() {
                return false;
            }
            Vec::new()
        } else if step.0.abs() == 2 && step.1.abs() == 2 {
            // Single jump: the midpoint must hold an opposing piece. A
            // chain with an odd number of jumps can also end two squares
            // away from its origin, so a failed midpoint check falls
            // through to the chain search instead of rejecting.
            let mid = match m.from + Step(step.0 / 2, step.1 / 2) {
                Some(p) => p,
                None => return false,
            };
            match self.grid.squares[mid] {
                Some(p) if p.color() != player => vec![mid],
                _ => match self.find_chain(m.from, m.to, player) {
                    Some(jumped) => jumped,
                    None => return false,
                },
            }
        } else {
            // Any other displacement can only be the endpoint of a
            // capture chain starting at the origin square.
            match self.find_chain(m.from, m.to, player) {
                Some(jumped) => jumped,
                None => return false,
            }
        };

        self.save_state();
        for pos in captured {
            self.grid.squares[pos] = None;
        }
        self.grid.squares[m.from] = None;
        let mut piece = piece;
        let (to_row, _) = m.to.to_row_col();
        if !piece.is_king() && to_row == player.back_rank() {
            piece.promote();
        }
        self.grid.squares[m.to] = Some(piece);
        true
    }

    /// Saves the current grid to the history stack. Grids have value
    /// semantics, so this is a plain copy.
    fn save_state(&mut self) {
        self.history.push(self.grid);
    }

    /// Restores the most recent snapshot, if any. A no-op on empty
    /// history. Turn order is the game loop's business, not the board's.
    pub fn undo(&mut self) {
        if let Some(grid) = self.history.pop() {
            self.grid = grid;
        }
    }
}

// ---------------------------------------------
// Move generation
// ---------------------------------------------

impl Board {
    /// Produces every legal move for `player`: simple steps, single jumps
    /// and multi-jump capture chains (emitted as origin to final landing
    /// square). Duplicate (from, to) pairs are filtered out, since a jump
    /// without continuation is found both by the one-jump scan and by the
    /// chain search. The result order carries no meaning. An empty result
    /// means `player` has lost.
    pub fn all_valid_moves(&self, player: Color) -> Vec<Move> {
        let mut moves = Vec::new();

        for pos in Position::all_positions() {
            let piece = match self.grid.squares[pos] {
                Some(p) if p.color() == player => p,
                _ => continue,
            };

            for &neighbor in neighbors_of(pos) {
                let step = Step::between(pos, neighbor);

                // Simple moves: kings head anywhere diagonal, men only forward
                if self.grid.squares[neighbor].is_none()
                    && (piece.is_king() || step.0 == player.forward())
                {
                    moves.push(Move::new(pos, neighbor));
                }

                // Single jumps are direction-unrestricted for all pieces
                if let Some(landing) = neighbor + step {
                    let over_enemy = match self.grid.squares[neighbor] {
                        Some(p) => p.color() != player,
                        None => false,
                    };
                    if over_enemy && self.grid.squares[landing].is_none() {
                        push_unique(&mut moves, Move::new(pos, landing));
                    }
                }
            }

            // Multi-jump capture chains, searched on a scratch copy so
            // enumeration never disturbs the live grid
            let mut scratch = self.grid;
            let mut landings = Vec::new();
            dfs_jumps(&mut scratch, pos, player, 0, &mut landings);
            for landing in landings {
                push_unique(&mut moves, Move::new(pos, landing));
            }
        }
        moves
    }

    /// Searches for a capture chain from `from` ending at `to` and returns
    /// the squares of the jumped pieces along the first such chain found.
    fn find_chain(&self, from: Position, to: Position, player: Color) -> Option<Vec<Position>> {
        let mut scratch = self.grid;
        let mut jumped = Vec::new();
        if chain_to(&mut scratch, from, to, player, &mut jumped) {
            Some(jumped)
        } else {
            None
        }
    }
}

fn push_unique(moves: &mut Vec<Move>, m: Move) {
    if !moves.contains(&m) {
        moves.push(m);
    }
}

/// Depth-first search over all capture chains starting at `current`.
/// Jumped pieces are removed for the duration of a branch and put back on
/// backtracking, so the grid is unchanged once the search returns. A chain
/// terminates where no further jump is available; terminal squares of
/// chains with at least one jump are collected into `landings`.
fn dfs_jumps(
    grid: &mut Grid,
    current: Position,
    player: Color,
    jumps: usize,
    landings: &mut Vec<Position>,
) {
    let mut extended = false;
    for &neighbor in neighbors_of(current) {
        let step = Step::between(current, neighbor);
        let landing = match neighbor + step {
            Some(p) => p,
            None => continue,
        };
        let over_enemy = match grid.squares[neighbor] {
            Some(p) => p.color() != player,
            None => false,
        };
        if over_enemy && grid.squares[landing].is_none() {
            extended = true;
            let captured = grid.squares[neighbor].take();
            dfs_jumps(grid, landing, player, jumps + 1, landings);
            grid.squares[neighbor] = captured;
        }
    }
    if !extended && jumps > 0 {
        landings.push(current);
    }
}

/// Like [dfs_jumps], but stops as soon as some capture path reaches
/// `target`, leaving the squares of the pieces jumped on the way in
/// `jumped`. Returns whether such a path exists.
fn chain_to(
    grid: &mut Grid,
    current: Position,
    target: Position,
    player: Color,
    jumped: &mut Vec<Position>,
) -> bool {
    for &neighbor in neighbors_of(current) {
        let step = Step::between(current, neighbor);
        let landing = match neighbor + step {
            Some(p) => p,
            None => continue,
        };
        let over_enemy = match grid.squares[neighbor] {
            Some(p) => p.color() != player,
            None => false,
        };
        if over_enemy && grid.squares[landing].is_none() {
            let captured = grid.squares[neighbor].take();
            jumped.push(neighbor);
            if landing == target || chain_to(grid, landing, target, player, jumped) {
                return true;
            }
            jumped.pop();
            grid.squares[neighbor] = captured;
        }
    }
    false
}

// ---------------------------------------------
// Display
// ---------------------------------------------

// Displays the 64 items from an iterator in a checkerboard style:
//
//   a b c d e f g h
// 8 i1 i2 i3 ...   8
// 7 ....
//
// Where i1,...i64 are the items of the iterator.
// It is required that the iterator has at least 64 items, else we will panic.
fn display_checkerboard_style<I, C>(it: &mut I, f: &mut fmt::Formatter<'_>) -> fmt::Result
where
    I: Iterator<Item = C>,
    C: Display,
{
    write!(f, " ")?;
    for c in 'a'..'i' {
        write!(f, " {}", c)?;
    }
    for row in 0..BOARD_SIZE {
        write!(f, "\n{} ", 8 - row)?;
        for _col in 0..BOARD_SIZE {
            let i = it.next().expect("Iterator ended too early");
            write!(f, "{} ", i)?;
        }
        write!(f, "{}", 8 - row)?;
    }
    write!(f, "\n ")?;
    for c in 'a'..'i' {
        write!(f, " {}", c)?;
    }
    Ok(())
}

impl Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut cells = self.grid.squares.iter().map(|s| match s {
            Some(piece) => piece.symbol(),
            None => '.',
        });
        display_checkerboard_style(&mut cells, f)
    }
}
