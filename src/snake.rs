use rand::Rng;

use crate::food::Food;
use crate::GridInt;
use Direction::*;

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Point {
    pub x: GridInt,
    pub y: GridInt,
}

impl Point {
    pub fn new(x: GridInt, y: GridInt) -> Self {
        Point { x, y }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

pub struct Snake {
    body: Vec<Point>,
    direction: Direction,
}

impl Snake {
    /// Creates a 3-segment snake with its head at `start`, facing up,
    /// with the rest of the body trailing below it.
    pub fn new(start: Point) -> Self {
        let body = (0..3).map(|i| Point::new(start.x, start.y + i)).collect();
        Snake { body, direction: Up }
    }

    pub fn body(&self) -> &[Point] {
        &self.body
    }

    pub fn head(&self) -> Point {
        self.body[0]
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    // Direction changes take effect as-is. Reversing into the neck is
    // allowed and self-collides on the next step.
    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    /// Advances the snake one cell: every segment takes the position its
    /// predecessor held, then the head moves in the current direction.
    /// The head may leave the grid; the caller detects that.
    pub fn update(&mut self) {
        for i in (1..self.body.len()).rev() {
            self.body[i] = self.body[i - 1];
        }

        let head = &mut self.body[0];
        match self.direction {
            Up => head.y -= 1,
            Down => head.y += 1,
            Left => head.x -= 1,
            Right => head.x += 1,
        }
    }

    /// Grows the body by duplicating the tail segment, then relocates the
    /// food off the now-longer body.
    pub fn eat(&mut self, food: &mut Food, rng: &mut impl Rng) {
        let tail = *self.body.last().unwrap();
        self.body.push(tail);
        food.generate_new_position(self, rng);
    }

    pub fn collides_with(&self, point: Point) -> bool {
        self.body.iter().any(|p| *p == point)
    }

    #[cfg(test)]
    pub fn from_body(body: Vec<Point>, direction: Direction) -> Self {
        Snake { body, direction }
    }
}

#[cfg(test)]
mod tests {
    use quickcheck::{quickcheck, Arbitrary, Gen};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    impl Arbitrary for Direction {
        fn arbitrary(g: &mut Gen) -> Direction {
            *g.choose(&[Up, Down, Left, Right]).unwrap()
        }
    }

    fn moved_one_cell(from: Point, to: Point, dir: Direction) -> bool {
        let expected = match dir {
            Up => Point::new(from.x, from.y - 1),
            Down => Point::new(from.x, from.y + 1),
            Left => Point::new(from.x - 1, from.y),
            Right => Point::new(from.x + 1, from.y),
        };
        to == expected
    }

    #[test]
    fn new_snake_is_three_segments_facing_up() {
        let snake = Snake::new(Point::new(10, 10));
        assert_eq!(
            snake.body(),
            &[Point::new(10, 10), Point::new(10, 11), Point::new(10, 12)]
        );
        assert_eq!(snake.direction(), Up);
    }

    #[test]
    fn update_shifts_body_and_moves_head() {
        let mut snake = Snake::new(Point::new(5, 5));
        snake.set_direction(Left);
        snake.update();
        assert_eq!(
            snake.body(),
            &[Point::new(4, 5), Point::new(5, 5), Point::new(5, 6)]
        );
    }

    #[test]
    fn set_direction_has_no_reversal_lockout() {
        let mut snake = Snake::new(Point::new(5, 5));
        snake.set_direction(Down);
        assert_eq!(snake.direction(), Down);
    }

    #[test]
    fn eat_duplicates_the_tail_and_relocates_food() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut snake = Snake::new(Point::new(10, 10));
        let mut food = Food::new(&snake, 20, &mut rng);

        snake.eat(&mut food, &mut rng);

        assert_eq!(snake.body().len(), 4);
        assert_eq!(snake.body()[3], snake.body()[2]);
        assert!(!snake.collides_with(food.position()));
    }

    #[test]
    fn collides_with_checks_every_segment() {
        let snake = Snake::new(Point::new(3, 3));
        assert!(snake.collides_with(Point::new(3, 5)));
        assert!(!snake.collides_with(Point::new(4, 3)));
    }

    fn update_shifts_each_segment_prop(dirs: Vec<Direction>) -> bool {
        let mut snake = Snake::new(Point::new(10, 10));

        for dir in dirs {
            snake.set_direction(dir);
            let before = snake.body().to_vec();
            snake.update();
            let after = snake.body();

            if after.len() != before.len() {
                return false;
            }
            if !moved_one_cell(before[0], after[0], dir) {
                return false;
            }
            if !(1..after.len()).all(|i| after[i] == before[i - 1]) {
                return false;
            }
        }
        true
    }

    #[test]
    fn update_shifts_each_segment() {
        quickcheck(update_shifts_each_segment_prop as fn(Vec<Direction>) -> bool);
    }

    fn length_never_decreases_prop(dirs: Vec<Direction>) -> bool {
        let mut rng = StdRng::seed_from_u64(99);
        let mut snake = Snake::new(Point::new(10, 10));
        let mut food = Food::new(&snake, 20, &mut rng);
        let mut last_len = snake.body().len();

        for (i, dir) in dirs.into_iter().enumerate() {
            snake.set_direction(dir);
            snake.update();
            if i % 3 == 0 {
                snake.eat(&mut food, &mut rng);
            }
            if snake.body().len() < last_len {
                return false;
            }
            last_len = snake.body().len();
        }
        true
    }

    #[test]
    fn length_never_decreases() {
        quickcheck(length_never_decreases_prop as fn(Vec<Direction>) -> bool);
    }
}
