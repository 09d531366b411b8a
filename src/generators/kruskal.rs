use log::{debug, info};

use crate::disjoint_set::DisjointSet;
use crate::error::{MazeError, Result};
use crate::generators::Generator;
use crate::grids::{Coord, Dimensions, Direction, WallGrid};
use crate::random::RandomSource;

/// How the edge list is put in random order before the union pass. The maze is
/// a spanning tree either way; only the distribution of mazes differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ShuffleStrategy {
    /// Swaps every position with any position in the list. Cheap, but some
    /// orderings come up more often than others.
    #[value(name = "naive")]
    Naive,
    /// Swaps every position with one at or after it, which is uniform.
    #[value(name = "fisher-yates")]
    FisherYates,
}

impl Default for ShuffleStrategy {
    fn default() -> Self {
        ShuffleStrategy::FisherYates
    }
}

impl ShuffleStrategy {
    pub fn shuffle<T, R: RandomSource + ?Sized>(self, items: &mut [T], rng: &mut R) {
        let len = items.len();
        for i in 0..len {
            let j = match self {
                ShuffleStrategy::Naive => rng.next_in_range(len),
                ShuffleStrategy::FisherYates => i + rng.next_in_range(len - i),
            };
            items.swap(i, j);
        }
    }
}

/// A wall between two 4-adjacent cells, `dir` pointing from `one` to `two`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub one: Coord,
    pub two: Coord,
    pub dir: Direction,
}

/// Every horizontal and vertical adjacency exactly once, column by column.
pub fn edges_of(dims: Dimensions) -> Result<Vec<Edge>> {
    let mut edges = Vec::new();
    edges
        .try_reserve_exact(dims.edge_count())
        .map_err(|_| MazeError::Allocation {
            cells: dims.cell_count(),
        })?;
    for x in 0..dims.width {
        for y in 0..dims.height {
            if x > 0 {
                edges.push(Edge {
                    one: (x, y),
                    two: (x - 1, y),
                    dir: Direction::Left,
                });
            }
            if y > 0 {
                edges.push(Edge {
                    one: (x, y),
                    two: (x, y - 1),
                    dir: Direction::Up,
                });
            }
        }
    }

    Ok(edges)
}

/// Randomized Kruskal: walks a shuffled edge list once and opens every wall
/// whose cells are not yet connected.
///
/// All randomness is spent on the shuffle at construction, so the source is not
/// kept around.
pub struct Kruskal {
    grid: WallGrid,
    sets: DisjointSet,
    edges: Vec<Edge>,
    next_edge: usize,
    unions: usize,
    pub done: bool,
}

impl Kruskal {
    pub fn new<R: RandomSource>(width: usize, height: usize, rng: R) -> Result<Self> {
        Self::with_strategy(width, height, rng, ShuffleStrategy::default())
    }

    pub fn with_strategy<R: RandomSource>(
        width: usize,
        height: usize,
        mut rng: R,
        strategy: ShuffleStrategy,
    ) -> Result<Self> {
        let grid = WallGrid::with_dims(width, height)?;
        let dims = grid.dims();

        let mut edges = edges_of(dims)?;
        let sets = DisjointSet::try_new(dims.cell_count())?;
        strategy.shuffle(&mut edges, &mut rng);
        debug!(
            "kruskal on {}x{} grid, {} edges ({:?} shuffle)",
            width,
            height,
            edges.len(),
            strategy
        );

        let done = edges.is_empty();
        Ok(Self {
            grid,
            sets,
            edges,
            next_edge: 0,
            unions: 0,
            done,
        })
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn unions(&self) -> usize {
        self.unions
    }
}

impl Generator for Kruskal {
    fn step_generation(&mut self) {
        if self.done {
            return;
        }

        let edge = self.edges[self.next_edge];
        self.next_edge += 1;

        let dims = self.grid.dims();
        // a failed union means the cells are already connected and the wall
        // would close a cycle
        if self.sets.union(dims.index_of(edge.one), dims.index_of(edge.two)) {
            self.grid.carve(edge.one, edge.dir);
            self.unions += 1;
        }

        if self.next_edge == self.edges.len() {
            self.done = true;
            info!(
                "kruskal finished: {} of {} edges opened",
                self.unions,
                self.edges.len()
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

#[cfg(test)]
mod test_kruskal {
    use super::*;
    use crate::random::{RngSource, ScriptedSource};
    use std::collections::HashSet;

    #[test]
    fn edge_list_is_complete() {
        let dims = Dimensions {
            width: 5,
            height: 4,
        };
        let edges = edges_of(dims).unwrap();
        assert_eq!(edges.len(), dims.edge_count());

        let unique: HashSet<_> = edges
            .iter()
            .map(|edge| {
                let a = dims.index_of(edge.one);
                let b = dims.index_of(edge.two);
                (a.min(b), a.max(b))
            })
            .collect();
        assert_eq!(unique.len(), edges.len());

        for edge in edges.iter() {
            assert_eq!(Direction::between(edge.one, edge.two), Some(edge.dir));
        }
    }

    #[test]
    fn edge_list_order() {
        let edges = edges_of(Dimensions {
            width: 2,
            height: 2,
        })
        .unwrap();
        let pairs: Vec<_> = edges.iter().map(|edge| (edge.one, edge.two)).collect();
        assert_eq!(
            pairs,
            vec![
                ((0, 1), (0, 0)),
                ((1, 0), (0, 0)),
                ((1, 1), (0, 1)),
                ((1, 1), (1, 0)),
            ]
        );
    }

    #[test]
    fn naive_shuffle_draws_from_whole_range() {
        let mut items = vec![0, 1, 2, 3];
        let mut rng = ScriptedSource::new(vec![3, 3, 3, 3]);
        ShuffleStrategy::Naive.shuffle(&mut items, &mut rng);
        // 0<->3, 1<->3, 2<->3, 3<->3
        assert_eq!(items, vec![3, 0, 1, 2]);
    }

    #[test]
    fn fisher_yates_stays_ahead() {
        let mut items = vec![0, 1, 2, 3];
        let mut rng = ScriptedSource::new(vec![3, 3, 3, 3]);
        ShuffleStrategy::FisherYates.shuffle(&mut items, &mut rng);
        // 0<->3, 1<->(1 + 3 % 3), 2<->(2 + 3 % 2), 3<->3
        assert_eq!(items, vec![3, 1, 0, 2]);
    }

    #[test]
    fn shuffles_keep_every_item() {
        for strategy in [ShuffleStrategy::Naive, ShuffleStrategy::FisherYates].iter() {
            let mut items: Vec<usize> = (0..100).collect();
            strategy.shuffle(&mut items, &mut RngSource::seeded(11));
            items.sort_unstable();
            assert_eq!(items, (0..100).collect::<Vec<_>>());
        }
    }

    #[test]
    fn unions_equal_cells_minus_one() {
        for strategy in [ShuffleStrategy::Naive, ShuffleStrategy::FisherYates].iter() {
            let mut generator =
                Kruskal::with_strategy(8, 6, RngSource::seeded(4), *strategy).unwrap();
            let grid = generator.generate_maze();
            assert!(grid.is_perfect());
            assert_eq!(generator.unions(), 47);
            assert_eq!(generator.grid().open_passage_count(), 47);
        }
    }

    #[test]
    fn five_by_five_scripted() {
        let source = ScriptedSource::new(vec![7, 22, 3, 15, 31, 0, 9]);
        let mut generator = Kruskal::new(5, 5, source).unwrap();
        assert_eq!(generator.edges().len(), 40);

        assert!(generator.run_steps(40));
        assert_eq!(generator.grid().open_passage_count(), 24);
        assert!(generator.grid().is_perfect());
    }

    #[test]
    fn one_pass_over_edges() {
        let mut generator = Kruskal::new(3, 3, RngSource::seeded(8)).unwrap();
        assert!(!generator.run_steps(11));
        assert!(generator.run_steps(1));
        assert_eq!(generator.unions(), 8);
    }

    #[test]
    fn oversized_edge_list_is_an_error() {
        let dims = Dimensions {
            width: usize::MAX / 4,
            height: 1,
        };
        assert_eq!(
            edges_of(dims).unwrap_err(),
            MazeError::Allocation {
                cells: usize::MAX / 4
            }
        );
        assert!(matches!(
            Kruskal::new(usize::MAX / 4, 1, ScriptedSource::zeros()),
            Err(MazeError::Allocation { .. })
        ));
    }

    #[test]
    fn single_cell_is_done_at_once() {
        let generator = Kruskal::new(1, 1, ScriptedSource::zeros()).unwrap();
        assert!(generator.is_done());
        assert!(generator.edges().is_empty());
    }
}
