use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::food::Food;
use crate::snake::{Direction, Point, Snake};
use crate::GridInt;

const GRID_SIZE: GridInt = 20;
const UPDATE_INTERVAL: u32 = 5;

pub struct Game {
    grid_size: GridInt,
    snake: Snake,
    food: Food,
    rng: StdRng,
    ticks_since_step: u32,
}

impl Game {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    pub fn from_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(mut rng: StdRng) -> Self {
        let grid_size = GRID_SIZE;
        let snake = Snake::new(Point::new(grid_size / 2, grid_size / 2));
        let food = Food::new(&snake, grid_size, &mut rng);
        Game { grid_size, snake, food, rng, ticks_since_step: 0 }
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> &Food {
        &self.food
    }

    pub fn grid_size(&self) -> GridInt {
        self.grid_size
    }

    pub fn set_direction(&mut self, direction: Direction) {
        self.snake.set_direction(direction);
    }

    /// Called once per frame. The snake only advances every
    /// `UPDATE_INTERVAL` calls, which is what decouples the simulation
    /// speed from the frame rate.
    pub fn update(&mut self) {
        self.ticks_since_step += 1;
        if self.ticks_since_step < UPDATE_INTERVAL {
            return;
        }
        self.ticks_since_step = 0;

        self.snake.update();

        if self.snake.collides_with(self.food.position()) {
            self.snake.eat(&mut self.food, &mut self.rng);
            debug!("food eaten, body length is now {}", self.snake.body().len());
        }

        let head = self.snake.head();
        if head.x < 0 || head.x >= self.grid_size || head.y < 0 || head.y >= self.grid_size {
            info!("hit the wall at ({}, {})", head.x, head.y);
            self.reset();
            return;
        }

        if self.snake.body()[1..].contains(&head) {
            info!("ran into itself at ({}, {})", head.x, head.y);
            self.reset();
        }
    }

    /// Replaces the snake with a fresh centered one and relocates the food.
    /// The game keeps running; nothing else is preserved.
    pub fn reset(&mut self) {
        self.snake = Snake::new(Point::new(self.grid_size / 2, self.grid_size / 2));
        self.food.generate_new_position(&self.snake, &mut self.rng);
    }
}
