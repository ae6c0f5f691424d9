use std::collections::HashSet;
use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{
    action::{Action, Direction},
    config::GameConfig,
    state::{GameOverCause, GameState, Position, Snake},
};

/// Food placement failed because the snake occupies every cell.
///
/// Reaching this is the alternate way a session ends: there is nothing
/// left to eat toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardFullError;

impl fmt::Display for BoardFullError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no free cell left to place food on")
    }
}

impl std::error::Error for BoardFullError {}

/// What one tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepResult {
    /// The head landed on the food this tick
    pub ate_food: bool,
    /// Set when the session is over (this tick or earlier)
    pub game_over: Option<GameOverCause>,
}

impl StepResult {
    pub fn terminated(&self) -> bool {
        self.game_over.is_some()
    }
}

/// Runs the rules: owns the configuration and the RNG, drives a
/// `GameState` one tick at a time.
pub struct GameEngine {
    config: GameConfig,
    rng: StdRng,
}

impl GameEngine {
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            rng: StdRng::from_entropy(),
        }
    }

    /// An engine whose food placement replays identically for a given seed
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self {
            config,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// A fresh session: the snake piled on the center cell heading right,
    /// food somewhere free. Fails only if the board cannot fit both.
    pub fn reset(&mut self) -> Result<GameState, BoardFullError> {
        let spawn = Position::new(
            (self.config.grid_width / 2) as i32,
            (self.config.grid_height / 2) as i32,
        );
        let snake = Snake::coiled(spawn, Direction::Right, self.config.initial_snake_length);
        let food = self.spawn_food(&snake)?;

        Ok(GameState::new(
            snake,
            food,
            self.config.grid_width,
            self.config.grid_height,
        ))
    }

    /// Advance the session one tick.
    ///
    /// Order matters: input, then movement, then the terminal checks on the
    /// settled body, then food. Stepping a finished session is a no-op that
    /// reports the existing cause.
    pub fn step(&mut self, state: &mut GameState, action: Action) -> StepResult {
        if let Some(cause) = state.game_over {
            return StepResult {
                ate_food: false,
                game_over: Some(cause),
            };
        }

        if let Action::Steer(direction) = action {
            state.apply_input(direction);
        }

        state.snake.advance();
        state.steps += 1;

        if !state.in_bounds(state.snake.head()) {
            state.game_over = Some(GameOverCause::Wall);
            return StepResult {
                ate_food: false,
                game_over: state.game_over,
            };
        }

        if state.snake.self_collision() {
            state.game_over = Some(GameOverCause::SelfCollision);
            return StepResult {
                ate_food: false,
                game_over: state.game_over,
            };
        }

        let ate_food = state.check_food_collision();
        if ate_food {
            state.score += 1;
            state.snake.grow(state.cell_count());

            match self.spawn_food(&state.snake) {
                Ok(food) => state.food = food,
                Err(BoardFullError) => state.game_over = Some(GameOverCause::BoardFull),
            }
        }

        StepResult {
            ate_food,
            game_over: state.game_over,
        }
    }

    /// Roll random cells until one is free of the snake.
    ///
    /// Counts *distinct* occupied cells first: on the tick food was eaten
    /// the tail is duplicated, so the body length alone would overstate
    /// occupancy and miss the last free cell.
    pub fn spawn_food(&mut self, snake: &Snake) -> Result<Position, BoardFullError> {
        let occupied: HashSet<Position> = snake.segments().iter().copied().collect();
        if occupied.len() >= self.config.cell_count() {
            return Err(BoardFullError);
        }

        loop {
            let pos = Position::new(
                self.rng.gen_range(0..self.config.grid_width) as i32,
                self.rng.gen_range(0..self.config.grid_height) as i32,
            );
            if !occupied.contains(&pos) {
                return Ok(pos);
            }
        }
    }
}
