use crate::types::{Cells, EMPTY, GRID_SIZE};

/// Read-only copy of everything the renderer needs for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub grid: Cells,
    pub score: u32,
    pub best_score: u32,
    pub moves: u32,
    pub game_over: bool,
    pub episode_id: u32,
    pub seed: u64,
}

impl GameSnapshot {
    pub fn playable(&self) -> bool {
        !self.game_over
    }

    /// Highest tile in the snapshot (0 when the grid is empty)
    pub fn max_tile(&self) -> u32 {
        self.grid.iter().flatten().copied().max().unwrap_or(EMPTY)
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            grid: [[EMPTY; GRID_SIZE]; GRID_SIZE],
            score: 0,
            best_score: 0,
            moves: 0,
            game_over: false,
            episode_id: 0,
            seed: 0,
        }
    }
}
