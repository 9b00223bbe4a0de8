use std::io::{stdout, Stdout, Write};
use std::time::Duration;

use crossterm::event::{poll, read, Event, KeyEvent};
use crossterm::style::Color;
use crossterm::terminal::{ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, execute, queue, style, terminal};

use crate::game::Game;
use crate::snake::Point;
use crate::TermInt;

// Each grid cell is drawn two columns wide so the board looks roughly
// square in a character grid.
const CELL_WIDTH: TermInt = 2;

const FOOD_COLOR: Color = Color::Red;
const SNAKE_COLOR: Color = Color::Green;

pub struct TermManager {
    width: TermInt,
    height: TermInt,
    stdout: Stdout,
}

impl TermManager {
    pub fn new() -> Self {
        let (width, height) = terminal::size().expect("Error reading size.");
        TermManager { width, height, stdout: stdout() }
    }

    pub fn setup(&mut self) {
        execute!(self.stdout, EnterAlternateScreen).expect("Error entering alt screen");
        self.set_raw_mode(true);
        self.set_cursor_visibility(false);
        self.set_cursor_blink(false);
    }

    pub fn restore(&mut self) {
        self.set_raw_mode(false);
        self.set_cursor_visibility(true);
        self.set_cursor_blink(true);
        execute!(self.stdout, LeaveAlternateScreen).expect("Error leaving alt screen");
    }

    pub fn read_key_events_queue(&self) -> Vec<KeyEvent> {
        let mut events = vec![];

        while poll(Duration::from_millis(1)).unwrap() {
            if let Event::Key(ev) = read().unwrap() {
                events.push(ev);
            }
        }

        events
    }

    /// Repaints the whole board: clear, border, food, then the snake's body
    /// in order. A terminal too small to hold the board is treated like a
    /// missing drawing surface and the frame is skipped.
    pub fn draw(&mut self, game: &Game) {
        let cols = game.grid_size() as TermInt * CELL_WIDTH + 2;
        let rows = game.grid_size() as TermInt + 2;

        if self.width < cols || self.height < rows {
            return;
        }

        queue!(self.stdout, terminal::Clear(ClearType::All)).expect("Error clearing.");
        self.draw_borders(cols, rows);
        self.draw_cell(game.food().position(), FOOD_COLOR);
        for segment in game.snake().body() {
            self.draw_cell(*segment, SNAKE_COLOR);
        }
        self.flush();
    }

    ///////////////////////////////////////////////////////////////////////////

    fn draw_borders(&mut self, width: TermInt, height: TermInt) {
        let end_x = width - 1;
        let end_y = height - 1;

        for x in 0..width {
            let ch = if x == 0 || x == end_x { '+' } else { '-' };
            self.print_at((x, 0), ch);
            self.print_at((x, end_y), ch);
        }

        for y in 1..height - 1 {
            self.print_at((0, y), '|');
            self.print_at((end_x, y), '|');
        }
    }

    // Grid coordinates map to the screen at a (1, 1) offset to leave room
    // for the border.
    fn draw_cell(&mut self, pos: Point, color: Color) {
        let x = 1 + pos.x as TermInt * CELL_WIDTH;
        let y = 1 + pos.y as TermInt;

        queue!(
            self.stdout,
            cursor::MoveTo(x, y),
            style::SetBackgroundColor(color),
            style::Print("  "),
            style::ResetColor
        )
        .unwrap();
    }

    fn print_at(&mut self, pos: (TermInt, TermInt), ch: char) {
        queue!(self.stdout, cursor::MoveTo(pos.0, pos.1), style::Print(ch)).unwrap();
    }

    fn flush(&mut self) {
        self.stdout.flush().expect("Error flushing.");
    }

    fn set_raw_mode(&self, option: bool) {
        let res = if option {
            terminal::enable_raw_mode()
        } else {
            terminal::disable_raw_mode()
        };

        res.expect("Error setting raw mode.");
    }

    fn set_cursor_blink(&mut self, option: bool) {
        let res = if option {
            execute!(self.stdout, cursor::EnableBlinking)
        } else {
            execute!(self.stdout, cursor::DisableBlinking)
        };

        res.expect("Error setting cursor blink.");
    }

    fn set_cursor_visibility(&mut self, option: bool) {
        let res = if option {
            execute!(self.stdout, cursor::Show)
        } else {
            execute!(self.stdout, cursor::Hide)
        };

        res.expect("Error setting cursor visibility.");
    }
}
