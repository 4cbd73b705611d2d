//! Error types for the maze solver

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Malformed maze: {0}")]
    MalformedMaze(String),

    #[error("Empty frontier")]
    EmptyFrontier,

    #[error("No solution exists for this maze")]
    NoSolution,

    #[error("Invalid algorithm '{0}'! Choose 'dfs' or 'bfs'.")]
    UnknownAlgorithm(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Configuration error: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
