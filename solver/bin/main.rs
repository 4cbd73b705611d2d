use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use log::info;
use solver::{render, save, solve, Discipline, Maze, RenderOptions};

/// Solve a text maze with depth-first or breadth-first search
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Maze file: 'A' marks the start, 'B' the goal, spaces are open and anything else is a wall
    maze: PathBuf,

    /// Search algorithm, dfs or bfs
    #[arg(default_value = "dfs")]
    algorithm: Discipline,

    /// Where to write the rendered image
    #[arg(short, long, default_value = "maze.png")]
    output: PathBuf,

    /// JSON file with render options (cell size, border, colours)
    #[arg(long)]
    render_config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    let maze = Maze::open(&args.maze)
        .with_context(|| format!("could not load maze from {}", args.maze.display()))?;
    info!(
        "loaded {}x{} maze from {}",
        maze.rows(),
        maze.columns(),
        args.maze.display()
    );

    println!("Maze:");
    print!("{}", maze);

    println!("Solving using {} ...", args.algorithm);
    let solved = solve(&maze, args.algorithm)?;
    println!("States Explored: {}", solved.num_explored);
    println!("Solution:");
    print!("{}", maze.view(Some(&solved.solution)));

    let mut options = match &args.render_config {
        Some(path) => RenderOptions::load(path)
            .with_context(|| format!("could not read render options from {}", path.display()))?,
        None => RenderOptions::default(),
    };
    options.show_solution = true;
    options.show_explored = true;

    let img = render(&maze, Some(&solved.solution), Some(&solved.explored), &options);
    save(&img, &args.output)
        .with_context(|| format!("could not write image to {}", args.output.display()))?;

    Ok(())
}
