mod food;
mod game;
mod snake;
mod term;

use std::{process::exit, thread::sleep, time::Duration};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::game::Game;
use crate::snake::Direction;
use crate::term::TermManager;

pub type TermInt = u16;
pub type GridInt = i32;

// Roughly the cadence of a 60Hz animation frame callback.
const FRAME_INTERVAL_MS: u64 = 16;

fn main() {
    env_logger::init();

    let mut term = TermManager::new();
    term.setup();

    let mut game = Game::new();

    // The frame loop runs until CTRL+C, which restores the terminal
    // before exiting.
    loop {
        sleep(Duration::from_millis(FRAME_INTERVAL_MS));

        for key_ev in term.read_key_events_queue() {
            match &key_ev {
                ev if is_ctrl_c(ev) => {
                    term.restore();
                    exit(0);
                }
                KeyEvent { code, modifiers: _ } => match code {
                    KeyCode::Up => game.set_direction(Direction::Up),
                    KeyCode::Down => game.set_direction(Direction::Down),
                    KeyCode::Left => game.set_direction(Direction::Left),
                    KeyCode::Right => game.set_direction(Direction::Right),
                    _ => {}
                },
            }
        }

        game.update();
        term.draw(&game);
    }
}

fn is_ctrl_c(ev: &KeyEvent) -> bool {
    matches!(ev, KeyEvent { code: KeyCode::Char('c'), modifiers: KeyModifiers::CONTROL })
}
