//! Uninformed maze search.
//!
//! A [`Maze`] is parsed from text, searched depth-first or breadth-first by a
//! [`PathFinder`] and drawn either as text or as an image with [`render`].

pub mod error;
pub mod find;
pub mod frontier;
pub mod grid;
pub mod render;

pub use error::{Error, Result};
pub use find::{
    solve, MapStorage, MapTrait, NodeReference, PathFinder, PathFinderState, SearchOutcome,
    Solution, Solved,
};
pub use frontier::{Discipline, Frontier, Node};
pub use grid::{Cell, CellStorage, Direction, Maze, MazeView, Point};
pub use render::{render, save, Palette, RenderOptions};
