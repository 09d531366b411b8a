use std::io;
use std::thread;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use log::{debug, info};

use maze_rs::renderer::TextRenderer;
use maze_rs::{
    new_generator, Generator, GeneratorKind, MazeConfig, RestartPolicy, ShuffleStrategy,
    StepBudget,
};

#[derive(Parser, Debug)]
#[command(name = "maze-rs", version, about = "Generates a perfect maze and draws it")]
struct Cli {
    /// Number of cells along X and Y
    #[arg(short, long, num_args = 2, value_names = ["X", "Y"], default_values_t = vec![20, 20])]
    cells: Vec<usize>,

    /// Steps per frame, or 'instant' to generate the complete maze at once
    #[arg(short, long, default_value_t = StepBudget::Steps(1))]
    steps: StepBudget,

    #[arg(short, long, value_enum, default_value_t = GeneratorKind::Backtracker)]
    algorithm: GeneratorKind,

    /// Seed for a replayable maze
    #[arg(long)]
    seed: Option<u64>,

    /// Edge shuffle used by the 'hard' generator
    #[arg(long, value_enum, default_value_t = ShuffleStrategy::FisherYates)]
    shuffle: ShuffleStrategy,

    /// Restart anchor used by the 'medium' generator
    #[arg(long, value_enum, default_value_t = RestartPolicy::UnvisitedAnchor)]
    restart: RestartPolicy,

    #[arg(long, default_value_t = 16)]
    frame_delay_ms: u64,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = MazeConfig::new(cli.cells[0], cli.cells[1])?
        .with_seed(cli.seed)
        .with_shuffle(cli.shuffle)
        .with_restart(cli.restart);
    info!(
        "{:?} maze, {}x{} cells, seed {:?}",
        cli.algorithm,
        config.width(),
        config.height(),
        config.seed
    );

    let mut maze_generator = new_generator(cli.algorithm, &config, config.random_source())?;
    let stdout = io::stdout();
    let mut renderer = TextRenderer::new(stdout.lock());

    if cli.algorithm.is_incremental() {
        let budget = cli.steps.per_tick();
        let delay = Duration::from_millis(cli.frame_delay_ms);
        loop {
            let done = maze_generator.run_steps(budget);
            renderer.draw(maze_generator.grid(), true)?;
            if done {
                break;
            }
            thread::sleep(delay);
        }
    } else {
        debug!("{:?} runs to completion, ignoring step budget {}", cli.algorithm, cli.steps);
        maze_generator.generate_maze();
        renderer.draw(maze_generator.grid(), false)?;
    }

    let grid = maze_generator.grid();
    info!(
        "done after {} frames: {} passages, {} of {} cells visited, perfect: {}",
        renderer.frames(),
        grid.open_passage_count(),
        grid.visited_count(),
        grid.dims().cell_count(),
        grid.is_perfect()
    );

    Ok(())
}
