//! Classic Snake for the terminal.
//!
//! The interesting part lives in [`game`]: the snake body, per-tick
//! movement, collision detection, and no-overlap food placement, all free
//! of I/O. The rest is the thin frontend around it:
//! - [`input`]: key events to commands
//! - [`render`]: ratatui widgets
//! - [`metrics`]: per-session stats
//! - [`modes`]: the interactive game loop

pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
