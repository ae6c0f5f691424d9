use super::action::Direction;

/// A cell on the game grid
///
/// Coordinates are signed so that a head that has just crossed the edge is
/// representable; such a position is terminal and never rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The adjacent cell one step in a direction
    pub fn neighbor(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// The snake body
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Segments, head at index 0, tail last
    pub body: Vec<Position>,
    /// Current direction of travel
    pub direction: Direction,
}

impl Snake {
    /// Spawn a snake with every segment stacked on one cell.
    ///
    /// The classic start state: the body unfolds over the first few ticks
    /// as the head pulls away from the pile.
    pub fn coiled(spawn: Position, direction: Direction, length: usize) -> Self {
        Self {
            body: vec![spawn; length.max(1)],
            direction,
        }
    }

    pub fn head(&self) -> Position {
        self.body[0]
    }

    pub fn tail(&self) -> Position {
        *self.body.last().unwrap()
    }

    /// All segments in body order, head first
    pub fn segments(&self) -> &[Position] {
        &self.body
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Turn toward a direction, ignoring a 180-degree reversal
    pub fn steer(&mut self, requested: Direction) {
        if !self.direction.is_opposite(requested) {
            self.direction = requested;
        }
    }

    /// Move one tick: each segment takes its predecessor's place, then the
    /// head steps one cell along the current direction. No bounds handling
    /// here; the engine decides what an off-grid head means.
    pub fn advance(&mut self) {
        for i in (1..self.body.len()).rev() {
            self.body[i] = self.body[i - 1];
        }
        self.body[0] = self.body[0].neighbor(self.direction);
    }

    /// Append a duplicate of the tail. The pair renders as one cell for a
    /// tick; the next advance shifts the copy into its own place. No-op
    /// once the body has as many segments as the grid has cells.
    pub fn grow(&mut self, capacity: usize) {
        if self.body.len() < capacity {
            self.body.push(self.tail());
        }
    }

    /// Is the head on top of another segment?
    pub fn self_collision(&self) -> bool {
        self.body[1..].contains(&self.head())
    }

    /// Does any segment sit on this cell?
    pub fn occupies(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }
}

/// Why the session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOverCause {
    /// The head left the grid
    Wall,
    /// The head landed on the body
    SelfCollision,
    /// No free cell left to place food on
    BoardFull,
}

/// One session's authoritative state
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    pub food: Position,
    pub grid_width: usize,
    pub grid_height: usize,
    pub score: u32,
    pub steps: u32,
    /// Set once, never cleared
    pub game_over: Option<GameOverCause>,
}

impl GameState {
    pub fn new(snake: Snake, food: Position, grid_width: usize, grid_height: usize) -> Self {
        Self {
            snake,
            food,
            grid_width,
            grid_height,
            score: 0,
            steps: 0,
            game_over: None,
        }
    }

    /// Is the position on the grid?
    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.x >= 0
            && pos.x < self.grid_width as i32
            && pos.y >= 0
            && pos.y < self.grid_height as i32
    }

    /// Total number of grid cells
    pub fn cell_count(&self) -> usize {
        self.grid_width * self.grid_height
    }

    /// Request a turn for the upcoming tick; reversals are dropped
    pub fn apply_input(&mut self, direction: Direction) {
        self.snake.steer(direction);
    }

    /// Is the head on the food cell right now?
    pub fn check_food_collision(&self) -> bool {
        self.snake.head() == self.food
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_snake(cells: &[(i32, i32)], direction: Direction) -> Snake {
        Snake {
            body: cells.iter().map(|&(x, y)| Position::new(x, y)).collect(),
            direction,
        }
    }

    #[test]
    fn neighbor_steps_one_cell() {
        let pos = Position::new(5, 5);
        assert_eq!(pos.neighbor(Direction::Up), Position::new(5, 4));
        assert_eq!(pos.neighbor(Direction::Down), Position::new(5, 6));
        assert_eq!(pos.neighbor(Direction::Left), Position::new(4, 5));
        assert_eq!(pos.neighbor(Direction::Right), Position::new(6, 5));
    }

    #[test]
    fn coiled_spawn_stacks_segments() {
        let snake = Snake::coiled(Position::new(20, 15), Direction::Right, 3);
        assert_eq!(snake.len(), 3);
        assert!(snake.body.iter().all(|&p| p == Position::new(20, 15)));
        assert_eq!(snake.direction, Direction::Right);
    }

    #[test]
    fn coiled_spawn_never_empty() {
        let snake = Snake::coiled(Position::new(0, 0), Direction::Up, 0);
        assert_eq!(snake.len(), 1);
    }

    #[test]
    fn advance_unfolds_stacked_spawn() {
        // All three segments start on the center cell; one tick right moves
        // only the head off the pile.
        let mut snake = Snake::coiled(Position::new(20, 15), Direction::Right, 3);
        snake.advance();
        assert_eq!(snake.body[0], Position::new(21, 15));
        assert_eq!(snake.body[1], Position::new(20, 15));
        assert_eq!(snake.body[2], Position::new(20, 15));
    }

    #[test]
    fn advance_shifts_every_segment_back_one() {
        let mut snake = line_snake(&[(5, 5), (4, 5), (3, 5)], Direction::Right);
        let before = snake.body.clone();

        snake.advance();

        assert_eq!(snake.len(), before.len());
        assert_eq!(snake.head(), before[0].neighbor(Direction::Right));
        for i in 1..snake.len() {
            assert_eq!(snake.body[i], before[i - 1]);
        }
    }

    #[test]
    fn three_ticks_right_from_center() {
        let mut snake = Snake::coiled(Position::new(20, 15), Direction::Right, 3);
        for _ in 0..3 {
            snake.advance();
        }
        assert_eq!(snake.head(), Position::new(23, 15));
        assert!(!snake.self_collision());
    }

    #[test]
    fn steer_ignores_reversal() {
        let mut snake = Snake::coiled(Position::new(5, 5), Direction::Right, 3);

        snake.steer(Direction::Left);
        assert_eq!(snake.direction, Direction::Right);

        snake.advance();
        assert_eq!(snake.head(), Position::new(6, 5));
    }

    #[test]
    fn steer_accepts_perpendicular_turn() {
        let mut snake = Snake::coiled(Position::new(5, 5), Direction::Right, 3);
        snake.steer(Direction::Down);
        assert_eq!(snake.direction, Direction::Down);
    }

    #[test]
    fn grow_duplicates_tail_only() {
        let mut snake = line_snake(&[(5, 5), (4, 5), (3, 5)], Direction::Right);
        let before = snake.body.clone();

        snake.grow(100);

        assert_eq!(snake.len(), 4);
        assert_eq!(&snake.body[..3], &before[..]);
        assert_eq!(snake.body[3], Position::new(3, 5));
    }

    #[test]
    fn grow_is_capped_at_capacity() {
        let mut snake = line_snake(&[(0, 0), (1, 0), (0, 1), (1, 1)], Direction::Right);
        snake.grow(4);
        assert_eq!(snake.len(), 4);
    }

    #[test]
    fn duplicated_tail_separates_on_next_advance() {
        let mut snake = line_snake(&[(5, 5), (4, 5), (3, 5)], Direction::Right);
        snake.grow(100);
        snake.advance();
        assert_eq!(
            snake.body,
            vec![
                Position::new(6, 5),
                Position::new(5, 5),
                Position::new(4, 5),
                Position::new(3, 5),
            ]
        );
    }

    #[test]
    fn self_collision_is_head_against_body() {
        let clear = line_snake(&[(5, 5), (4, 5), (3, 5)], Direction::Right);
        assert!(!clear.self_collision());

        let bitten = line_snake(&[(4, 5), (4, 6), (5, 6), (5, 5), (4, 5)], Direction::Up);
        assert!(bitten.self_collision());
    }

    #[test]
    fn moving_into_vacated_tail_cell_is_legal() {
        // A 2x2 loop: the head enters the cell the tail leaves on the same
        // tick, which is not a collision.
        let mut snake = line_snake(&[(0, 0), (0, 1), (1, 1), (1, 0)], Direction::Right);
        snake.advance();
        assert_eq!(snake.head(), Position::new(1, 0));
        assert!(!snake.self_collision());
    }

    #[test]
    fn bounds_checking() {
        let state = GameState::new(
            Snake::coiled(Position::new(5, 5), Direction::Right, 3),
            Position::new(8, 8),
            20,
            20,
        );

        assert!(state.in_bounds(Position::new(0, 0)));
        assert!(state.in_bounds(Position::new(19, 19)));
        assert!(!state.in_bounds(Position::new(-1, 0)));
        assert!(!state.in_bounds(Position::new(20, 0)));
        assert!(!state.in_bounds(Position::new(0, 20)));
    }

    #[test]
    fn food_collision_is_exact() {
        let mut state = GameState::new(
            Snake::coiled(Position::new(5, 5), Direction::Right, 3),
            Position::new(5, 5),
            20,
            20,
        );
        assert!(state.check_food_collision());

        state.food = Position::new(5, 6);
        assert!(!state.check_food_collision());
    }
}
