#[macro_use]
extern crate impl_ops;

mod agents;
mod boards;
mod checkers_errors;
mod game;
mod moves;
mod pieces;
mod positions;

use agents::*;
use game::*;

// A console checkers game. The Board in boards.rs is the rule engine
// proper (legality, captures with multi-jump chains, promotion, undo);
// everything here is glue wiring a human player against a random
// computer opponent.

fn main() {
    let mut game = Game::new(HumanAgent::new(), RandomAgent::new());
    game.play();
}
