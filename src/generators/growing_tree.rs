use log::{debug, info, trace};

use crate::error::Result;
use crate::generators::Generator;
use crate::grids::{Cell, Coord, Direction, WallGrid};
use crate::random::RandomSource;

/// Where the walk resumes once it runs into a dead end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum RestartPolicy {
    /// First unvisited cell (row-major) that has an unvisited neighbor. The
    /// anchor is linked to that neighbor but is not itself marked visited, so a
    /// later walk may enter it again. The result can contain cycles and
    /// detached pieces.
    #[value(name = "unvisited")]
    UnvisitedAnchor,
    /// Same anchor as `UnvisitedAnchor`, marked visited when picked. Never
    /// forms cycles, but each restart starts a new disconnected tree.
    #[value(name = "mark-visited")]
    MarkAnchorVisited,
    /// First visited cell (row-major) that has an unvisited neighbor, i.e.
    /// hunt-and-kill. Always yields a perfect maze.
    #[value(name = "visited")]
    VisitedAnchor,
}

impl Default for RestartPolicy {
    fn default() -> Self {
        RestartPolicy::UnvisitedAnchor
    }
}

impl RestartPolicy {
    fn is_anchor(self, cell: &Cell, grid: &WallGrid) -> bool {
        let wants_visited = self == RestartPolicy::VisitedAnchor;
        cell.is_visited() == wants_visited && grid.has_unvisited_neighbor(cell.coords())
    }
}

/// Random walk from a random cell that, instead of backtracking, rescans the
/// grid for a new anchor whenever it gets stuck.
pub struct GrowingTree<R: RandomSource> {
    grid: WallGrid,
    rng: R,
    policy: RestartPolicy,
    current_cell: Coord,
    restarts: usize,
    pub done: bool,
}

impl<R: RandomSource> GrowingTree<R> {
    pub fn new(width: usize, height: usize, rng: R) -> Result<Self> {
        Self::with_policy(width, height, rng, RestartPolicy::default())
    }

    pub fn with_policy(
        width: usize,
        height: usize,
        mut rng: R,
        policy: RestartPolicy,
    ) -> Result<Self> {
        let mut grid = WallGrid::with_dims(width, height)?;
        let dims = grid.dims();
        let start = dims.coord_of(rng.next_in_range(dims.cell_count()));
        grid.visit(start);
        debug!(
            "growing tree on {}x{} grid from {:?} ({:?})",
            width, height, start, policy
        );

        Ok(Self {
            grid,
            rng,
            policy,
            current_cell: start,
            restarts: 0,
            done: false,
        })
    }

    pub fn current_cell(&self) -> Coord {
        self.current_cell
    }

    pub fn policy(&self) -> RestartPolicy {
        self.policy
    }

    pub fn restarts(&self) -> usize {
        self.restarts
    }

    fn find_anchor(&self) -> Option<Coord> {
        self.grid
            .cells()
            .find(|cell| self.policy.is_anchor(cell, &self.grid))
            .map(Cell::coords)
    }

    // carves to a random unvisited neighbor of `from` and moves there
    fn advance(&mut self, from: Coord, neighbors: &[(Coord, Direction)]) {
        let (next, dir) = neighbors[self.rng.next_in_range(neighbors.len())];
        self.grid.carve(from, dir);
        self.grid.visit(next);
        trace!("carve {:?} -> {:?}", from, next);
        self.current_cell = next;
    }
}

impl<R: RandomSource> Generator for GrowingTree<R> {
    fn step_generation(&mut self) {
        if self.done {
            return;
        }

        let neighbors = self.grid.unvisited_neighbors_of(self.current_cell);
        if !neighbors.is_empty() {
            self.advance(self.current_cell, &neighbors);
            return;
        }

        match self.find_anchor() {
            Some(anchor) => {
                self.restarts += 1;
                if self.policy == RestartPolicy::MarkAnchorVisited {
                    self.grid.visit(anchor);
                }
                debug!("dead end at {:?}, restarting at {:?}", self.current_cell, anchor);

                self.current_cell = anchor;
                let neighbors = self.grid.unvisited_neighbors_of(anchor);
                self.advance(anchor, &neighbors);
            }
            None => {
                self.done = true;
                info!(
                    "growing tree finished after {} restarts: {} of {} cells visited, {} passages",
                    self.restarts,
                    self.grid.visited_count(),
                    self.grid.dims().cell_count(),
                    self.grid.open_passage_count()
                );
            }
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
