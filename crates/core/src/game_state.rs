//! Game state module - manages the complete game session
//!
//! This module ties together the grid, the spawn RNG and the score. One call
//! to [`GameState::handle_input`] is one turn: slide, spawn if anything moved,
//! then check for game over.

use tracing::{debug, info};

use crate::board::{Grid, SlideOutcome};
use crate::rng::TileRng;
use crate::snapshot::GameSnapshot;
use crate::types::{Direction, GameAction};

/// Complete game session
#[derive(Debug, Clone)]
pub struct GameState {
    grid: Grid,
    rng: TileRng,
    score: u32,
    /// Highest score seen by this process; survives restarts, never persisted.
    best_score: u32,
    /// Successful moves in the current episode.
    moves: u32,
    /// Monotonic episode id (increments on restart).
    episode_id: u32,
    game_over: bool,
    started: bool,
}

impl GameState {
    /// Create a new game with the given RNG seed
    ///
    /// The grid starts empty; call [`GameState::start`] to spawn the first tile.
    pub fn new(seed: u64) -> Self {
        Self {
            grid: Grid::new(),
            rng: TileRng::new(seed),
            score: 0,
            best_score: 0,
            moves: 0,
            episode_id: 0,
            game_over: false,
            started: false,
        }
    }

    /// Resume from an arbitrary grid (puzzles, tests, replays).
    ///
    /// The session counts as started and no tile is spawned. Game over is
    /// evaluated immediately against `grid`.
    pub fn with_grid(grid: Grid, seed: u64) -> Self {
        let mut state = Self::new(seed);
        state.grid = grid;
        state.started = true;
        state.game_over = grid.is_terminal();
        state
    }

    /// Start the game and spawn the first tile
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        info!(seed = self.rng.seed(), "game started");
        self.spawn_random_tile();
    }

    /// Throw away the grid and score and begin a new episode with one tile.
    ///
    /// The RNG keeps running, so consecutive episodes differ.
    pub fn reset(&mut self) {
        self.grid = Grid::new();
        self.score = 0;
        self.moves = 0;
        self.game_over = false;
        self.started = true;
        self.episode_id = self.episode_id.wrapping_add(1);
        info!(episode_id = self.episode_id, "game reset");
        self.spawn_random_tile();
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn best_score(&self) -> u32 {
        self.best_score
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.grid = *self.grid.rows();
        out.score = self.score;
        out.best_score = self.best_score;
        out.moves = self.moves;
        out.game_over = self.game_over;
        out.episode_id = self.episode_id;
        out.seed = self.rng.seed();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Slide every tile toward `direction` and credit merge points.
    ///
    /// Returns whether the grid changed. A move that changes nothing leaves
    /// grid and score untouched. Does not spawn and ignores the game-over
    /// flag; use [`GameState::handle_input`] for a full turn.
    pub fn move_tiles(&mut self, direction: Direction) -> bool {
        let SlideOutcome {
            moved,
            score,
            merges,
        } = self.grid.slide(direction);

        if moved {
            self.score = self.score.saturating_add(score);
            self.best_score = self.best_score.max(self.score);
            self.moves = self.moves.wrapping_add(1);
            debug!(
                direction = direction.as_str(),
                merges,
                gained = score,
                score = self.score,
                "tiles moved"
            );
        }
        debug_assert!(self.grid.is_well_formed());
        moved
    }

    /// Place a 2 (90%) or 4 (10%) in a uniformly chosen empty cell.
    ///
    /// With no empty cell nothing spawns and the game is over. After a
    /// successful spawn the grid is checked for a terminal position, so
    /// filling the last cell with no merge left also ends the game.
    ///
    /// Returns the spawned `(row, col, value)`, if any.
    pub fn spawn_random_tile(&mut self) -> Option<(usize, usize, u32)> {
        let empty = self.grid.empty_cells();
        let Some(i) = self.rng.pick_index(empty.len()) else {
            self.end_game();
            return None;
        };

        let (row, col) = empty[i];
        let value = self.rng.tile_value();
        self.grid.set(row, col, value);
        debug!(row, col, value, "tile spawned");

        if self.grid.is_terminal() {
            self.end_game();
        }
        Some((row, col, value))
    }

    /// One full turn: move, then spawn if the move changed the grid.
    ///
    /// Ignored once the game is over. Returns whether the grid moved.
    pub fn handle_input(&mut self, direction: Direction) -> bool {
        if self.game_over {
            return false;
        }
        if !self.started {
            self.start();
        }

        let moved = self.move_tiles(direction);
        if moved {
            self.spawn_random_tile();
        }
        moved
    }

    /// Apply a game action (from keyboard input or a parsed command)
    ///
    /// Returns true if the action changed the session.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Move(direction) => self.handle_input(direction),
            GameAction::Restart => {
                self.reset();
                true
            }
        }
    }

    fn end_game(&mut self) {
        if !self.game_over {
            self.game_over = true;
            info!(
                score = self.score,
                moves = self.moves,
                max_tile = self.grid.max_tile(),
                "game over"
            );
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
