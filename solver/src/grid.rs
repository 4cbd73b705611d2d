use crate::error::{Error, Result};
use crate::find::{MapStorage, MapTrait, NodeReference, Solution};
use std::path::Path;
use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum Cell {
    Wall,
    Open,
}

impl Default for Cell {
    fn default() -> Self {
        Self::Wall
    }
}

/// The four actions that connect a cell to its neighbors.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions in the order neighbors are enumerated. The order decides
    /// tie-breaking for both search disciplines.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];
}

impl Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Direction::Up => "up",
                Direction::Down => "down",
                Direction::Left => "left",
                Direction::Right => "right",
            }
        )
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub row: usize,
    pub col: usize,
}

impl Point {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// The point one step away in `direction`, or `None` if that would leave
    /// the first row or column. The upper bounds are checked by the map.
    pub fn step(self, direction: Direction) -> Option<Point> {
        let (row, col) = match direction {
            Direction::Up => (self.row.checked_sub(1)?, self.col),
            Direction::Down => (self.row + 1, self.col),
            Direction::Left => (self.row, self.col.checked_sub(1)?),
            Direction::Right => (self.row, self.col + 1),
        };
        Some(Point { row, col })
    }
}

impl NodeReference for Point {}

/// A rectangular maze of wall and open cells with a single start and goal.
///
/// The maze is immutable once parsed; every search runs against a shared
/// reference to it.
#[derive(Debug, Clone)]
pub struct Maze {
    rows: usize,
    columns: usize,
    cells: Vec<Vec<Cell>>,
    start: Point,
    goal: Point,
}

impl Maze {
    /// Read and parse a maze from a text file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        contents.parse()
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn goal(&self) -> Point {
        self.goal
    }

    pub fn cell(&self, point: Point) -> Cell {
        self.cells[point.row][point.col]
    }

    /// Whether the point is impassable. Points outside the maze count as walls.
    pub fn is_wall(&self, point: Point) -> bool {
        !self.is_valid(point) || self.cell(point) == Cell::Wall
    }

    /// Passable neighbors of `point`, in up, down, left, right order.
    pub fn neighbors(&self, point: Point) -> impl Iterator<Item = (Direction, Point)> + '_ {
        Direction::ALL.into_iter().filter_map(move |direction| {
            point
                .step(direction)
                .filter(|p| !self.is_wall(*p))
                .map(|p| (direction, p))
        })
    }

    /// A text view of the maze with the cells of `solution` marked.
    pub fn view<'a>(&'a self, solution: Option<&'a Solution<Point>>) -> MazeView<'a> {
        MazeView {
            maze: self,
            solution: solution.map(|s| s.cells.as_slice()),
        }
    }
}

impl FromStr for Maze {
    type Err = Error;

    fn from_str(contents: &str) -> Result<Self> {
        if contents.matches('A').count() != 1 || contents.matches('B').count() != 1 {
            return Err(Error::MalformedMaze(
                "maze must have exactly one start point ('A') and one goal point ('B')".into(),
            ));
        }

        let lines: Vec<Vec<char>> = contents.lines().map(|l| l.chars().collect()).collect();
        let rows = lines.len();
        let columns = lines.iter().map(Vec::len).max().unwrap_or(0);

        // cells past the end of a short line stay walls
        let mut cells = vec![vec![Cell::Wall; columns]; rows];
        let mut start = None;
        let mut goal = None;

        for (row, line) in lines.iter().enumerate() {
            for (col, c) in line.iter().enumerate() {
                cells[row][col] = match c {
                    'A' => {
                        start = Some(Point { row, col });
                        Cell::Open
                    }
                    'B' => {
                        goal = Some(Point { row, col });
                        Cell::Open
                    }
                    ' ' => Cell::Open,
                    _ => Cell::Wall,
                };
            }
        }

        let (Some(start), Some(goal)) = (start, goal) else {
            return Err(Error::MalformedMaze(
                "start or goal not found in maze".into(),
            ));
        };

        Ok(Maze {
            rows,
            columns,
            cells,
            start,
            goal,
        })
    }
}

/// Text rendering of a [`Maze`], optionally with a solution overlay.
pub struct MazeView<'a> {
    maze: &'a Maze,
    solution: Option<&'a [Point]>,
}

impl Display for MazeView<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, cells) in self.maze.cells.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                let point = Point { row, col };
                let glyph = if *cell == Cell::Wall {
                    '█'
                } else if point == self.maze.start {
                    'A'
                } else if point == self.maze.goal {
                    'B'
                } else if self.solution.is_some_and(|s| s.contains(&point)) {
                    '*'
                } else {
                    ' '
                };
                write!(f, "{}", glyph)?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

impl Display for Maze {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.view(None).fmt(f)
    }
}

/// A MapStorage that uses a rectangular grid of cells (a vec in a vec)
#[derive(Debug, Clone)]
pub struct CellStorage<T>(Vec<Vec<T>>);

impl<T: Default + Clone> CellStorage<T> {
    pub fn new(rows: usize, columns: usize) -> Self {
        CellStorage(vec![vec![T::default(); columns]; rows])
    }
}

impl<T: Copy + 'static> MapStorage<T> for CellStorage<T> {
    type Reference = Point;

    fn is_valid(&self, node: Self::Reference) -> bool {
        node.row < self.0.len() && self.0.first().is_some_and(|r| node.col < r.len())
    }

    fn get(&self, node: Self::Reference) -> T {
        self.0[node.row][node.col]
    }

    fn get_mut(&mut self, node: Self::Reference) -> &mut T {
        &mut self.0[node.row][node.col]
    }
}

impl CellStorage<bool> {
    /// All points whose flag is set, in row-major order.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.0.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .filter(|(_, set)| **set)
                .map(move |(col, _)| Point { row, col })
        })
    }

    pub fn count(&self) -> usize {
        self.0.iter().flatten().filter(|set| **set).count()
    }
}

impl MapTrait for Maze {
    type Reference = Point;
    type Storage<T: Default + Copy + Clone + 'static> = CellStorage<T>;

    fn is_valid(&self, node: Self::Reference) -> bool {
        node.row < self.rows && node.col < self.columns
    }

    fn neighbors_of(
        &self,
        node: Self::Reference,
    ) -> impl Iterator<Item = (Direction, Self::Reference)> {
        self.neighbors(node)
    }

    fn create_storage<T: Default + Copy + Clone + 'static>(&self) -> Self::Storage<T> {
        CellStorage::new(self.rows, self.columns)
    }
}

#[cfg(test)]
mod test {

    use super::*;

    const FORCED: &str = "A  #\n## #\n  B\n";

    #[test]
    fn test_parse_dimensions_and_padding() {
        let maze: Maze = FORCED.parse().unwrap();

        assert_eq!(maze.rows(), 3);
        assert_eq!(maze.columns(), 4);
        assert_eq!(maze.start(), Point::new(0, 0));
        assert_eq!(maze.goal(), Point::new(2, 2));

        // the last line is three characters long, the rest is padded with walls
        assert_eq!(maze.cell(Point::new(2, 0)), Cell::Open);
        assert_eq!(maze.cell(Point::new(2, 2)), Cell::Open);
        assert_eq!(maze.cell(Point::new(2, 3)), Cell::Wall);
        assert_eq!(maze.cell(Point::new(1, 2)), Cell::Open);
        assert!(maze.is_wall(Point::new(0, 3)));
        assert!(maze.is_wall(Point::new(3, 0)));
    }

    #[test]
    fn test_parse_crlf() {
        let maze: Maze = "A #\r\n  B\r\n".parse().unwrap();
        assert_eq!(maze.columns(), 3);
        assert_eq!(maze.goal(), Point::new(1, 2));
    }

    #[test]
    fn test_marker_validation() {
        for text in ["   \n  B", "A  \n   ", "AA \n  B", "A B\n  B", "A\nA\nB\nB"] {
            assert!(
                matches!(text.parse::<Maze>(), Err(Error::MalformedMaze(_))),
                "accepted {:?}",
                text
            );
        }
    }

    #[test]
    fn test_neighbors_order() {
        let maze: Maze = "   \n A \n  B".parse().unwrap();

        let neighbors: Vec<_> = maze.neighbors(Point::new(1, 1)).collect();
        assert_eq!(
            neighbors,
            vec![
                (Direction::Up, Point::new(0, 1)),
                (Direction::Down, Point::new(2, 1)),
                (Direction::Left, Point::new(1, 0)),
                (Direction::Right, Point::new(1, 2)),
            ]
        );

        // corners only see in-bounds cells
        let neighbors: Vec<_> = maze.neighbors(Point::new(0, 0)).collect();
        assert_eq!(
            neighbors,
            vec![
                (Direction::Down, Point::new(1, 0)),
                (Direction::Right, Point::new(0, 1)),
            ]
        );
    }

    #[test]
    fn test_neighbors_skip_walls() {
        let maze: Maze = FORCED.parse().unwrap();

        let neighbors: Vec<_> = maze.neighbors(Point::new(0, 2)).collect();
        assert_eq!(
            neighbors,
            vec![
                (Direction::Down, Point::new(1, 2)),
                (Direction::Left, Point::new(0, 1)),
            ]
        );
    }

    #[test]
    fn test_display() {
        let maze: Maze = FORCED.parse().unwrap();
        assert_eq!(maze.to_string(), "A  █\n██ █\n  B█\n");
    }

    #[test]
    fn test_view_with_solution() {
        let maze: Maze = FORCED.parse().unwrap();
        let solution = Solution {
            actions: vec![
                Direction::Right,
                Direction::Right,
                Direction::Down,
                Direction::Down,
            ],
            cells: vec![
                Point::new(0, 1),
                Point::new(0, 2),
                Point::new(1, 2),
                Point::new(2, 2),
            ],
        };
        assert_eq!(
            maze.view(Some(&solution)).to_string(),
            "A**█\n██*█\n  B█\n"
        );
    }

    #[test]
    fn test_direction_labels() {
        let labels: Vec<_> = Direction::ALL.iter().map(|d| d.to_string()).collect();
        assert_eq!(labels, vec!["up", "down", "left", "right"]);
    }

    #[test]
    fn test_cell_storage_points() {
        let maze: Maze = FORCED.parse().unwrap();
        let mut storage: CellStorage<bool> = maze.create_storage();
        *storage.get_mut(Point::new(1, 2)) = true;
        *storage.get_mut(Point::new(0, 1)) = true;

        assert_eq!(storage.count(), 2);
        assert_eq!(
            storage.points().collect::<Vec<_>>(),
            vec![Point::new(0, 1), Point::new(1, 2)]
        );
        assert!(storage.is_valid(Point::new(2, 3)));
        assert!(!storage.is_valid(Point::new(2, 4)));
    }
}
