pub mod backtracker;
pub mod growing_tree;
pub mod kruskal;

use crate::config::MazeConfig;
use crate::error::Result;
use crate::grids::WallGrid;
use crate::random::RandomSource;

pub use backtracker::Backtracker;
pub use growing_tree::{GrowingTree, RestartPolicy};
pub use kruskal::{Kruskal, ShuffleStrategy};

/// A maze generator that carves passages into the grid it owns.
///
/// Every generator can be advanced one step at a time, which is how the
/// animated view drives it, or run to completion in one go.
pub trait Generator {
    fn step_generation(&mut self);
    fn is_done(&self) -> bool;
    fn grid(&self) -> &WallGrid;
    fn into_grid(self: Box<Self>) -> WallGrid;

    fn next_step(&mut self) -> &WallGrid {
        self.step_generation();
        self.grid()
    }

    /// Runs at most `budget` steps, stopping early once done. Returns whether
    /// generation is complete.
    fn run_steps(&mut self, budget: usize) -> bool {
        for _ in 0..budget {
            if self.is_done() {
                break;
            }
            self.step_generation();
        }

        self.is_done()
    }

    fn generate_maze(&mut self) -> &WallGrid {
        while !self.is_done() {
            self.step_generation();
        }

        self.grid()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum GeneratorKind {
    #[value(name = "easy", alias = "backtracker")]
    Backtracker,
    #[value(name = "medium", alias = "growing-tree")]
    GrowingTree,
    #[value(name = "hard", alias = "kruskal")]
    Kruskal,
}

impl GeneratorKind {
    /// Whether the generator is meant to be stepped frame by frame rather than
    /// run to completion before the first draw.
    pub fn is_incremental(self) -> bool {
        self == GeneratorKind::Backtracker
    }
}

pub fn new_generator<R>(
    generator_kind: GeneratorKind,
    config: &MazeConfig,
    rng: R,
) -> Result<Box<dyn Generator>>
where
    R: RandomSource + 'static,
{
    let (width, height) = (config.width(), config.height());

    Ok(match generator_kind {
        GeneratorKind::Backtracker => Box::new(Backtracker::new(width, height, rng)?),
        GeneratorKind::GrowingTree => Box::new(GrowingTree::with_policy(
            width,
            height,
            rng,
            config.restart,
        )?),
        GeneratorKind::Kruskal => Box::new(Kruskal::with_strategy(
            width,
            height,
            rng,
            config.shuffle,
        )?),
    })
}

#[cfg(test)]
mod test_generators {
    use super::*;
    use crate::random::RngSource;
    use proptest::prelude::*;

    const KINDS: [GeneratorKind; 3] = [
        GeneratorKind::Backtracker,
        GeneratorKind::GrowingTree,
        GeneratorKind::Kruskal,
    ];

    #[test]
    fn single_cell_completes_without_passages() {
        for kind in KINDS.iter() {
            let config = MazeConfig::new(1, 1).unwrap();
            let mut generator = new_generator(*kind, &config, RngSource::seeded(1)).unwrap();

            let grid = generator.generate_maze();
            assert_eq!(grid.open_passage_count(), 0, "{:?}", kind);
            assert!(generator.is_done());
            assert!(generator.run_steps(10));
        }
    }

    #[test]
    fn factory_respects_config() {
        let config = MazeConfig::new(6, 3)
            .unwrap()
            .with_restart(RestartPolicy::VisitedAnchor);
        for kind in KINDS.iter() {
            let mut generator = new_generator(*kind, &config, RngSource::seeded(9)).unwrap();
            assert_eq!(generator.grid().width(), 6);
            assert_eq!(generator.grid().height(), 3);

            generator.generate_maze();
            let grid = generator.into_grid();
            assert!(grid.is_perfect(), "{:?}", kind);
        }
    }

    #[test]
    fn run_steps_zero_is_a_no_op() {
        let config = MazeConfig::new(4, 4).unwrap();
        let mut generator =
            new_generator(GeneratorKind::Backtracker, &config, RngSource::seeded(2)).unwrap();
        assert!(!generator.run_steps(0));
        assert_eq!(generator.grid().open_passage_count(), 0);
    }

    #[test]
    fn only_backtracker_is_incremental() {
        assert!(GeneratorKind::Backtracker.is_incremental());
        assert!(!GeneratorKind::GrowingTree.is_incremental());
        assert!(!GeneratorKind::Kruskal.is_incremental());
    }

    fn spanning_kinds() -> impl Strategy<Value = (GeneratorKind, ShuffleStrategy)> {
        prop_oneof![
            Just((GeneratorKind::Backtracker, ShuffleStrategy::FisherYates)),
            Just((GeneratorKind::Kruskal, ShuffleStrategy::FisherYates)),
            Just((GeneratorKind::Kruskal, ShuffleStrategy::Naive)),
            Just((GeneratorKind::GrowingTree, ShuffleStrategy::FisherYates)),
        ]
    }

    proptest! {
        #[test]
        fn completed_mazes_are_spanning_trees(
            width in 1usize..12,
            height in 1usize..12,
            seed in any::<u64>(),
            (kind, shuffle) in spanning_kinds(),
        ) {
            let config = MazeConfig::new(width, height)
                .unwrap()
                .with_shuffle(shuffle)
                .with_restart(RestartPolicy::VisitedAnchor);
            let mut generator = new_generator(kind, &config, RngSource::seeded(seed)).unwrap();
            let grid = generator.generate_maze();

            prop_assert_eq!(grid.open_passage_count(), width * height - 1);
            prop_assert!(grid.is_perfect());
            prop_assert!(grid.walls_are_symmetric());
        }

        #[test]
        fn walls_stay_symmetric_mid_generation(
            width in 1usize..10,
            height in 1usize..10,
            seed in any::<u64>(),
            steps in 0usize..60,
        ) {
            let config = MazeConfig::new(width, height).unwrap();
            for kind in KINDS.iter() {
                let mut generator = new_generator(*kind, &config, RngSource::seeded(seed)).unwrap();
                generator.run_steps(steps);
                prop_assert!(generator.grid().walls_are_symmetric());
            }
        }
    }
}
