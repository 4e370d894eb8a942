//! Underground voxel occupancy grid.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// One discrete unit of the underground. Digging is one-way: a cell that
/// has been emptied never refills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CellState {
    #[default]
    Soil,
    Empty,
}

/// Fixed-size 2D occupancy map of the underground. `y` grows downward,
/// row 0 sitting just below the surface.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldGrid {
    cells: Vec<Vec<CellState>>,
    pub width: u16,
    pub height: u16,
    entry_carved: bool,
}

impl WorldGrid {
    /// Create a grid of solid soil.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            cells: vec![vec![CellState::Soil; width as usize]; height as usize],
            width,
            height,
            entry_carved: false,
        }
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32
    }

    pub fn cell(&self, x: i32, y: i32) -> Option<CellState> {
        if self.in_bounds(x, y) {
            Some(self.cells[y as usize][x as usize])
        } else {
            None
        }
    }

    pub fn is_soil(&self, x: i32, y: i32) -> bool {
        self.cell(x, y) == Some(CellState::Soil)
    }

    /// True iff the cell is in bounds and already dug out.
    pub fn is_passable(&self, x: i32, y: i32) -> bool {
        self.cell(x, y) == Some(CellState::Empty)
    }

    /// Turn a soil cell to empty. Out-of-bounds or already-empty targets
    /// are logged no-ops. Returns whether a cell actually changed.
    pub fn dig(&mut self, x: i32, y: i32) -> bool {
        if !self.in_bounds(x, y) {
            tracing::debug!(x, y, "dig rejected: out of bounds");
            return false;
        }
        let cell = &mut self.cells[y as usize][x as usize];
        if *cell == CellState::Empty {
            tracing::debug!(x, y, "dig rejected: already empty");
            return false;
        }
        *cell = CellState::Empty;
        true
    }

    /// In-bounds cardinal neighbors in randomized order, so repeated
    /// exploration does not favor one direction.
    pub fn neighbors4<R: Rng>(&self, x: i32, y: i32, rng: &mut R) -> Vec<(i32, i32)> {
        let mut out: Vec<(i32, i32)> = [(0, -1), (0, 1), (-1, 0), (1, 0)]
            .iter()
            .map(|(dx, dy)| (x + dx, y + dy))
            .filter(|&(nx, ny)| self.in_bounds(nx, ny))
            .collect();
        out.shuffle(rng);
        out
    }

    /// The cell where the surface nest hole meets the underground.
    pub fn entry_cell(&self) -> (i32, i32) {
        (self.width as i32 / 2, 0)
    }

    /// Carve the entry cell the first time the underground is entered.
    /// Subsequent calls are no-ops.
    pub fn carve_entry(&mut self) -> (i32, i32) {
        let (x, y) = self.entry_cell();
        if !self.entry_carved {
            self.entry_carved = true;
            self.dig(x, y);
            tracing::info!(x, y, "entry carved");
        }
        (x, y)
    }

    /// Row-major copy of the occupancy for snapshots.
    pub fn occupancy(&self) -> Vec<CellState> {
        self.cells.iter().flatten().copied().collect()
    }

    pub fn count_empty(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&c| c == CellState::Empty)
            .count()
    }
}
