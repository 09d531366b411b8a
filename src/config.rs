use std::fmt;
use std::str::FromStr;

use rand::rngs::StdRng;

use crate::error::{MazeError, Result};
use crate::generators::{RestartPolicy, ShuffleStrategy};
use crate::grids::Dimensions;
use crate::random::RngSource;

pub const DEFAULT_DIMS: (usize, usize) = (20, 20);

/// Validated settings for one maze run. Dimensions cannot change after
/// construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MazeConfig {
    dims: Dimensions,
    pub seed: Option<u64>,
    pub shuffle: ShuffleStrategy,
    pub restart: RestartPolicy,
}

impl MazeConfig {
    pub fn new(width: usize, height: usize) -> Result<Self> {
        Ok(Self {
            dims: Dimensions::new(width, height)?,
            seed: None,
            shuffle: ShuffleStrategy::default(),
            restart: RestartPolicy::default(),
        })
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_shuffle(mut self, shuffle: ShuffleStrategy) -> Self {
        self.shuffle = shuffle;
        self
    }

    pub fn with_restart(mut self, restart: RestartPolicy) -> Self {
        self.restart = restart;
        self
    }

    pub fn dims(&self) -> Dimensions {
        self.dims
    }

    pub fn width(&self) -> usize {
        self.dims.width
    }

    pub fn height(&self) -> usize {
        self.dims.height
    }

    /// Seeded when a seed was given, otherwise drawn from OS entropy.
    pub fn random_source(&self) -> RngSource<StdRng> {
        match self.seed {
            Some(seed) => RngSource::seeded(seed),
            None => RngSource::from_entropy(),
        }
    }
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            dims: Dimensions {
                width: DEFAULT_DIMS.0,
                height: DEFAULT_DIMS.1,
            },
            seed: None,
            shuffle: ShuffleStrategy::default(),
            restart: RestartPolicy::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepBudget {
    Steps(usize),
    /// Finish the whole maze before the first frame.
    Instant,
}

impl StepBudget {
    pub fn per_tick(self) -> usize {
        match self {
            StepBudget::Steps(steps) => steps,
            // backtracking pops cost a step each, so `cells - 1` would stop short
            StepBudget::Instant => usize::MAX,
        }
    }
}

impl Default for StepBudget {
    fn default() -> Self {
        StepBudget::Steps(1)
    }
}

impl FromStr for StepBudget {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("instant") {
            return Ok(StepBudget::Instant);
        }

        match s.parse::<usize>() {
            Ok(steps) if steps > 0 => Ok(StepBudget::Steps(steps)),
            _ => Err(MazeError::InvalidStepBudget(s.to_string())),
        }
    }
}

impl fmt::Display for StepBudget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepBudget::Steps(steps) => write!(f, "{}", steps),
            StepBudget::Instant => write!(f, "instant"),
        }
    }
}
