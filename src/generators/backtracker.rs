use log::{debug, info, trace};

use crate::error::Result;
use crate::generators::Generator;
use crate::grids::{Coord, WallGrid};
use crate::random::RandomSource;

const START: Coord = (0, 0);

/// Randomized depth-first search with an explicit stack, advanced one step at
/// a time so it can be animated.
pub struct Backtracker<R: RandomSource> {
    grid: WallGrid,
    rng: R,
    stack: Vec<Coord>,
    current_cell: Coord,
    visits: usize,
    pub done: bool,
}

impl<R: RandomSource> Backtracker<R> {
    pub fn new(width: usize, height: usize, rng: R) -> Result<Self> {
        let mut grid = WallGrid::with_dims(width, height)?;
        grid.visit(START);
        debug!("backtracker on {}x{} grid", width, height);

        Ok(Self {
            grid,
            rng,
            stack: Vec::new(),
            current_cell: START,
            visits: 1,
            done: false,
        })
    }

    pub fn current_cell(&self) -> Coord {
        self.current_cell
    }

    pub fn stack_depth(&self) -> usize {
        self.stack.len()
    }

    pub fn visits(&self) -> usize {
        self.visits
    }
}

impl<R: RandomSource> Generator for Backtracker<R> {
    fn step_generation(&mut self) {
        if self.done {
            return;
        }

        let neighbors = self.grid.unvisited_neighbors_of(self.current_cell);
        if !neighbors.is_empty() {
            let (next, dir) = neighbors[self.rng.next_in_range(neighbors.len())];
            self.grid.visit(next);
            self.visits += 1;
            self.stack.push(self.current_cell);
            self.grid.carve(self.current_cell, dir);
            trace!("carve {:?} -> {:?}", self.current_cell, next);
            self.current_cell = next;
        } else if let Some(prev) = self.stack.pop() {
            self.current_cell = prev;
        } else {
            self.done = true;
            info!(
                "backtracker finished: {} cells visited, {} passages",
                self.visits,
                self.grid.open_passage_count()
            );
        }
    }

    fn is_done(&self) -> bool {
        self.done
    }

    fn grid(&self) -> &WallGrid {
        &self.grid
    }

    fn into_grid(self: Box<Self>) -> WallGrid {
        self.grid
    }
}
