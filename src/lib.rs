//! Perfect maze generation over a grid of walled cells.
//!
//! Three generators carve passages into a [`WallGrid`]: a steppable
//! depth-first [`Backtracker`], a restarting [`GrowingTree`] walk and a
//! union-find driven [`Kruskal`]. All randomness comes through a
//! [`RandomSource`] so runs can be replayed exactly.

pub mod config;
pub mod disjoint_set;
pub mod error;
pub mod generators;
pub mod grids;
pub mod random;
pub mod renderer;

pub use config::{MazeConfig, StepBudget};
pub use error::{MazeError, Result};
pub use generators::{
    new_generator, Backtracker, Generator, GeneratorKind, GrowingTree, Kruskal, RestartPolicy,
    ShuffleStrategy,
};
pub use grids::{Cell, Coord, Dimensions, Direction, WallGrid};
pub use random::{RandomSource, RngSource, ScriptedSource};
