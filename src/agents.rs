/// Differing kinds of agents that can play the game
use crate::boards::Board;
use crate::game::{Agent, Command};
use crate::moves::Move;
use crate::pieces::Color;
use std::io::{stdout, Write};
use text_io::read;

pub struct HumanAgent {}

impl HumanAgent {
    pub fn new() -> Self {
        HumanAgent {}
    }
}

impl Agent for HumanAgent {
    fn choose_command(&self, _board: &Board, color: Color) -> Command {
        loop {
            print!("Your move ({}, e.g. b6-c5) or 'undo' or 'exit': ", color);
            stdout().flush().unwrap();
            let line: String = read!("{}\n");
            let input = line.trim();
            if input.eq_ignore_ascii_case("exit") {
                return Command::Exit;
            }
            if input.eq_ignore_ascii_case("undo") {
                return Command::Undo;
            }
            match input.parse::<Move>() {
                Ok(m) => return Command::Play(m),
                // Malformed input never reaches the board and does not
                // consume the turn
                Err(e) => println!("{}", e),
            }
        }
    }
}

pub struct RandomAgent {}

impl RandomAgent {
    pub fn new() -> Self {
        RandomAgent {}
    }
}

impl Agent for RandomAgent {
    fn choose_command(&self, board: &Board, color: Color) -> Command {
        use rand::seq::SliceRandom;

        let moves = board.all_valid_moves(color);
        match moves.choose(&mut rand::thread_rng()) {
            Some(m) => {
                println!("Computer moves {} from {} to {}", color, m.from, m.to);
                Command::Play(*m)
            }
            // The game loop declares the winner before asking a moveless
            // agent, so this is only a safety net
            None => Command::Exit,
        }
    }
}
