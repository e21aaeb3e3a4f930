//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and simulation logic.
//! It has **no dependencies** on terminal I/O or input handling, making it:
//!
//! - **Deterministic**: Same seed and same inputs produce identical games
//! - **Testable**: Every rule is a plain method over a 4x4 array
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//! - **Fast**: Turns do not allocate; the empty-cell list lives on the stack
//!
//! # Module Structure
//!
//! - [`board`]: 4x4 grid with slide/merge and the terminal-state check
//! - [`game_state`]: Session state: grid, score, game-over flag, turn handling
//! - [`rng`]: Seeded spawn randomness (cell choice, 2-vs-4)
//! - [`snapshot`]: Copy of the session for renderers
//!
//! # Game Rules
//!
//! - **Slide**: every tile travels toward the chosen edge until blocked
//! - **Merge**: two equal tiles combine into one of double value; the new
//!   value is added to the score
//! - **One merge per tile**: a freshly merged tile neither moves nor merges
//!   again in the same move
//! - **Spawn**: after every move that changed the grid, a 2 (90%) or a 4 (10%)
//!   appears in a random empty cell
//! - **Game over**: no empty cell and no two neighbouring tiles are equal
//!
//! # Example
//!
//! ```
//! use tui_2048_core::GameState;
//! use tui_2048_types::{Direction, GameAction};
//!
//! // Create and start a game
//! let mut game = GameState::new(12345);
//! game.start();
//! assert_eq!(game.grid().tile_count(), 1);
//!
//! // Apply game actions
//! game.apply_action(GameAction::Move(Direction::Left));
//! game.apply_action(GameAction::Move(Direction::Up));
//!
//! // Check game state
//! assert!(!game.game_over());
//! assert!(game.grid().is_well_formed());
//! ```

pub mod board;
pub mod game_state;
pub mod rng;
pub mod snapshot;

pub use tui_2048_types as types;

// Re-export commonly used types for convenience
pub use board::{is_terminal, Grid, SlideOutcome};
pub use game_state::GameState;
pub use rng::TileRng;
pub use snapshot::GameSnapshot;
