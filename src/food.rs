use log::warn;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::snake::{Point, Snake};
use crate::GridInt;

// Rejection sampling gives up after this many misses and the free cells
// are scanned instead.
const MAX_SAMPLE_ATTEMPTS: u32 = 100;

pub struct Food {
    position: Point,
    grid_size: GridInt,
}

impl Food {
    pub fn new(snake: &Snake, grid_size: GridInt, rng: &mut impl Rng) -> Self {
        let mut food = Food { position: Point::new(0, 0), grid_size };
        food.generate_new_position(snake, rng);
        food
    }

    pub fn position(&self) -> Point {
        self.position
    }

    /// Picks a new position uniformly at random among the cells not occupied
    /// by the snake's body. Samples the grid until an unoccupied cell comes
    /// up, with a bounded number of attempts before falling back to choosing
    /// from the free cells directly.
    pub fn generate_new_position(&mut self, snake: &Snake, rng: &mut impl Rng) {
        for _ in 0..MAX_SAMPLE_ATTEMPTS {
            let candidate = Point::new(
                rng.gen_range(0..self.grid_size),
                rng.gen_range(0..self.grid_size),
            );

            if !snake.collides_with(candidate) {
                self.position = candidate;
                return;
            }
        }

        let free: Vec<Point> = (0..self.grid_size)
            .flat_map(|y| (0..self.grid_size).map(move |x| Point::new(x, y)))
            .filter(|pos| !snake.collides_with(*pos))
            .collect();

        match free.choose(rng) {
            Some(pos) => self.position = *pos,
            None => warn!("no free cell left for food, keeping old position"),
        }
    }

    #[cfg(test)]
    pub fn set_position(&mut self, position: Point) {
        self.position = position;
    }
}
