//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, key mapping).
//!
//! # Grid Dimensions
//!
//! The classic 2048 playfield:
//!
//! - **Size**: 4x4 cells, addressed as `(row, col)` with both in `0..4`
//! - **Empty cell**: value `0`
//! - **Tiles**: powers of two, starting at 2
//!
//! # Spawn Odds
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `SPAWN_TWO_VALUE` | 2 | Common spawned tile |
//! | `SPAWN_FOUR_VALUE` | 4 | Rare spawned tile |
//! | `SPAWN_FOUR_PROBABILITY` | 0.1 | Chance a spawn is a 4 |
//! | `MAX_TILE` | 131072 | Largest reachable tile; merges stop there |
//!
//! # Examples
//!
//! ```
//! use tui_2048_types::{Direction, GameAction, GRID_SIZE};
//!
//! // Parse from string (case-insensitive)
//! let dir = Direction::from_str("Left").unwrap();
//! assert_eq!(dir, Direction::Left);
//! assert_eq!(dir.delta(), (0, -1));
//!
//! // Parse game action
//! let action = GameAction::from_str("moveUp").unwrap();
//! assert_eq!(action, GameAction::Move(Direction::Up));
//!
//! assert_eq!(GRID_SIZE, 4);
//! ```

/// Grid side length in cells (4x4)
pub const GRID_SIZE: usize = 4;

/// Total number of cells on the grid
pub const CELL_COUNT: usize = GRID_SIZE * GRID_SIZE;

/// Value stored in an empty cell
pub const EMPTY: Cell = 0;

/// Tile value spawned most of the time
pub const SPAWN_TWO_VALUE: Cell = 2;

/// Tile value spawned the rest of the time
pub const SPAWN_FOUR_VALUE: Cell = 4;

/// Probability that a spawned tile is a 4 instead of a 2
pub const SPAWN_FOUR_PROBABILITY: f64 = 0.1;

/// Largest tile a 4x4 grid can hold (2^17: sixteen cells seeded with 4s)
///
/// Merges that would exceed it are refused.
pub const MAX_TILE: Cell = 1 << 17;

/// A single grid cell: `0` when empty, otherwise a power of two >= 2.
pub type Cell = u32;

/// Row-major cell storage shared by the grid and its snapshots.
pub type Cells = [[Cell; GRID_SIZE]; GRID_SIZE];

/// Returns true if `value` may appear on a grid (empty or a power of two in
/// `2..=MAX_TILE`).
///
/// # Examples
///
/// ```
/// use tui_2048_types::is_valid_cell;
///
/// assert!(is_valid_cell(0));
/// assert!(is_valid_cell(2));
/// assert!(is_valid_cell(2048));
/// assert!(!is_valid_cell(1));
/// assert!(!is_valid_cell(6));
/// assert!(is_valid_cell(131072));
/// assert!(!is_valid_cell(1 << 31));
/// ```
pub fn is_valid_cell(value: Cell) -> bool {
    value == EMPTY || ((2..=MAX_TILE).contains(&value) && value.is_power_of_two())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_2048_defaults() {
        assert_eq!(GRID_SIZE, 4);
        assert_eq!(CELL_COUNT, 16);
        assert_eq!(SPAWN_TWO_VALUE, 2);
        assert_eq!(SPAWN_FOUR_VALUE, 4);
        assert!((SPAWN_FOUR_PROBABILITY - 0.1).abs() < f64::EPSILON);
        assert_eq!(MAX_TILE, 131072);
    }

    #[test]
    fn direction_parse_roundtrip() {
        for dir in Direction::ALL {
            assert_eq!(Direction::from_str(dir.as_str()), Some(dir));
        }
        assert_eq!(Direction::from_str("north"), None);
    }

    #[test]
    fn opposite_directions_cancel() {
        for dir in Direction::ALL {
            let (dr, dc) = dir.delta();
            let (or, oc) = dir.opposite().delta();
            assert_eq!((dr + or, dc + oc), (0, 0));
        }
    }

    #[test]
    fn action_parse_accepts_bare_and_prefixed_names() {
        assert_eq!(
            GameAction::from_str("down"),
            Some(GameAction::Move(Direction::Down))
        );
        assert_eq!(
            GameAction::from_str("MOVERIGHT"),
            Some(GameAction::Move(Direction::Right))
        );
        assert_eq!(GameAction::from_str("restart"), Some(GameAction::Restart));
        assert_eq!(GameAction::from_str("hardDrop"), None);
    }

    #[test]
    fn key_mapping_names() {
        assert_eq!(KeyMapping::default(), KeyMapping::Natural);
        for m in [KeyMapping::Natural, KeyMapping::Rotated] {
            assert_eq!(KeyMapping::from_str(m.as_str()), Some(m));
        }
        assert_eq!(KeyMapping::from_str("ROTATED"), Some(KeyMapping::Rotated));
        assert_eq!(KeyMapping::from_str("wasd"), None);
    }

    #[test]
    fn rotated_mapping_is_a_permutation() {
        let mut seen: Vec<Direction> = Direction::ALL
            .iter()
            .map(|d| KeyMapping::Rotated.resolve(*d))
            .collect();
        seen.sort_by_key(|d| d.as_str());
        let mut all = Direction::ALL.to_vec();
        all.sort_by_key(|d| d.as_str());
        assert_eq!(seen, all);
    }
}

/// The four slide directions
///
/// The direction names the edge tiles travel toward:
/// - **Up**: toward row 0
/// - **Down**: toward row 3
/// - **Left**: toward column 0
/// - **Right**: toward column 3
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions, in a stable order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Parse direction from string (case-insensitive)
    ///
    /// Accepts full names or single letters: "up" | "u", "down" | "d",
    /// "left" | "l", "right" | "r".
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_types::Direction;
    ///
    /// assert_eq!(Direction::from_str("up"), Some(Direction::Up));
    /// assert_eq!(Direction::from_str("R"), Some(Direction::Right));
    /// assert_eq!(Direction::from_str("sideways"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" | "u" => Some(Direction::Up),
            "down" | "d" => Some(Direction::Down),
            "left" | "l" => Some(Direction::Left),
            "right" | "r" => Some(Direction::Right),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }

    /// Per-step `(row, col)` offset of a sliding tile.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_types::Direction;
    ///
    /// assert_eq!(Direction::Up.delta(), (-1, 0));
    /// assert_eq!(Direction::Right.delta(), (0, 1));
    /// ```
    pub fn delta(&self) -> (i8, i8) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// True for `Up`/`Down`, which traverse columns in the outer loop.
    pub fn is_vertical(&self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }
}

/// Game actions that can be applied to modify game state
///
/// These actions are produced by the key mapper and consumed by
/// `GameState::apply_action`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Slide every tile toward one edge, then spawn if anything moved
    Move(Direction),
    /// Throw away the current game and start a fresh one
    Restart,
}

impl GameAction {
    /// Parse action from string
    ///
    /// Accepts bare directions ("up") as well as camelCase move names
    /// ("moveUp"), and "restart".
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_types::{Direction, GameAction};
    ///
    /// assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::Move(Direction::Left)));
    /// assert_eq!(GameAction::from_str("restart"), Some(GameAction::Restart));
    /// assert_eq!(GameAction::from_str("undo"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        let lower = s.to_lowercase();
        if lower == "restart" {
            return Some(GameAction::Restart);
        }
        let name = lower.strip_prefix("move").unwrap_or(&lower);
        Direction::from_str(name).map(GameAction::Move)
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Move(Direction::Up) => "moveUp",
            GameAction::Move(Direction::Down) => "moveDown",
            GameAction::Move(Direction::Left) => "moveLeft",
            GameAction::Move(Direction::Right) => "moveRight",
            GameAction::Restart => "restart",
        }
    }
}

/// Which physical key drives which slide direction
///
/// - **Natural**: each arrow slides toward the edge it points at
/// - **Rotated**: the arrows are turned a quarter: Up slides left, Down slides
///   right, Left slides up, Right slides down (the layout of the browser game
///   this was modelled on)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum KeyMapping {
    #[default]
    Natural,
    Rotated,
}

impl KeyMapping {
    /// Parse mapping name (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "natural" => Some(KeyMapping::Natural),
            "rotated" => Some(KeyMapping::Rotated),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            KeyMapping::Natural => "natural",
            KeyMapping::Rotated => "rotated",
        }
    }

    /// Direction produced by the key that points `pressed`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_types::{Direction, KeyMapping};
    ///
    /// assert_eq!(KeyMapping::Natural.resolve(Direction::Up), Direction::Up);
    /// assert_eq!(KeyMapping::Rotated.resolve(Direction::Up), Direction::Left);
    /// assert_eq!(KeyMapping::Rotated.resolve(Direction::Right), Direction::Down);
    /// ```
    pub fn resolve(&self, pressed: Direction) -> Direction {
        match self {
            KeyMapping::Natural => pressed,
            KeyMapping::Rotated => match pressed {
                Direction::Up => Direction::Left,
                Direction::Down => Direction::Right,
                Direction::Left => Direction::Up,
                Direction::Right => Direction::Down,
            },
        }
    }
}
