use crate::boards::*;
use crate::moves::*;
use crate::pieces::*;

/// What an agent wants to do with its turn.
pub enum Command {
    Play(Move),
    Undo,
    Exit,
}

/// An agent is an object that can play checkers by choosing commands
/// appropriate to a current board.
pub trait Agent {
    fn choose_command(&self, board: &Board, color: Color) -> Command;
}

pub struct Game<A1: Agent, A2: Agent> {
    red: A1,
    white: A2,
    board: Board,
    current: Color,
}

impl<A1: Agent, A2: Agent> Game<A1, A2> {
    pub fn new(red: A1, white: A2) -> Game<A1, A2> {
        Game {
            red: red,
            white: white,
            board: Board::standard_setup(),
            current: Color::Red,
        }
    }

    /// Drives the turn loop until a player runs out of moves or an agent
    /// exits. An illegal move does not consume the turn; undoing swaps
    /// the active player back as one compound action.
    pub fn play(&mut self) {
        loop {
            println!("{}", self.board);
            if self.board.all_valid_moves(self.current).is_empty() {
                println!(
                    "{} has no moves. {} wins!",
                    self.current,
                    self.current.opposite()
                );
                break;
            }
            let command = match self.current {
                Color::Red => self.red.choose_command(&self.board, self.current),
                Color::White => self.white.choose_command(&self.board, self.current),
            };
            match command {
                Command::Play(m) => {
                    if self.board.apply_move(&m, self.current) {
                        self.current = self.current.opposite();
                    } else {
                        println!("Invalid move.");
                    }
                }
                Command::Undo => {
                    self.board.undo();
                    self.current = self.current.opposite();
                }
                Command::Exit => break,
            }
        }
    }
}
