use serde::{Deserialize, Serialize};

/// Configuration for one game session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Width of the grid in cells
    pub grid_width: usize,
    /// Height of the grid in cells
    pub grid_height: usize,
    /// How many segments the snake spawns with
    pub initial_snake_length: usize,
    /// Milliseconds per simulation tick
    pub tick_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        // 40x30 is an 800x600 window at 20px cells
        Self {
            grid_width: 40,
            grid_height: 30,
            initial_snake_length: 3,
            tick_ms: 100,
        }
    }
}

impl GameConfig {
    /// A configuration with a custom grid size
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            grid_width: width,
            grid_height: height,
            ..Default::default()
        }
    }

    /// Small grid, handy in tests
    pub fn small() -> Self {
        Self::new(10, 10)
    }

    /// Total number of grid cells
    pub fn cell_count(&self) -> usize {
        self.grid_width * self.grid_height
    }
}
