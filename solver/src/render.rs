use std::{fs::File, io::BufReader, path::Path};

use image::{Rgba, RgbaImage};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::find::{MapStorage, MapTrait, Solution};
use crate::grid::{Cell, CellStorage, Maze, Point};

/// Colours used when rasterizing a maze, as RGBA.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub background: [u8; 4],
    pub wall: [u8; 4],
    pub start: [u8; 4],
    pub goal: [u8; 4],
    pub solution: [u8; 4],
    pub explored: [u8; 4],
    pub open: [u8; 4],
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: [0, 0, 0, 255],
            wall: [40, 40, 40, 255],
            start: [255, 0, 0, 255],
            goal: [0, 171, 28, 255],
            solution: [220, 235, 113, 255],
            explored: [212, 97, 85, 255],
            open: [237, 240, 252, 255],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Side length of one cell in pixels
    pub cell_size: u32,
    /// Background margin left around each cell, in pixels
    pub cell_border: u32,
    pub show_solution: bool,
    pub show_explored: bool,
    pub palette: Palette,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            cell_size: 50,
            cell_border: 2,
            show_solution: true,
            show_explored: false,
            palette: Palette::default(),
        }
    }
}

impl RenderOptions {
    /// Load options from a JSON file. Missing fields keep their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let reader = BufReader::new(File::open(path)?);
        Ok(serde_json::from_reader(reader)?)
    }
}

/// Rasterize the maze. Each cell is coloured by the first match of wall,
/// start, goal, solution (if shown), explored (if shown) and open.
pub fn render(
    maze: &Maze,
    solution: Option<&Solution<Point>>,
    explored: Option<&CellStorage<bool>>,
    options: &RenderOptions,
) -> RgbaImage {
    let size = options.cell_size;
    let border = options.cell_border;
    let palette = &options.palette;

    let mut on_path: CellStorage<bool> = maze.create_storage();
    if let Some(solution) = solution {
        for cell in &solution.cells {
            *on_path.get_mut(*cell) = true;
        }
    }

    let mut img = RgbaImage::from_pixel(
        maze.columns() as u32 * size,
        maze.rows() as u32 * size,
        Rgba(palette.background),
    );
    if size == 0 {
        return img;
    }
    let max_x = img.width() - 1;
    let max_y = img.height() - 1;

    for row in 0..maze.rows() {
        for col in 0..maze.columns() {
            let point = Point { row, col };

            let fill = if maze.cell(point) == Cell::Wall {
                palette.wall
            } else if point == maze.start() {
                palette.start
            } else if point == maze.goal() {
                palette.goal
            } else if options.show_solution && on_path.get(point) {
                palette.solution
            } else if options.show_explored && explored.is_some_and(|e| e.get(point)) {
                palette.explored
            } else {
                palette.open
            };

            // both corners are inclusive, clamped to the image
            let x0 = col as u32 * size;
            let y0 = row as u32 * size;
            let x1 = (x0 + size).saturating_sub(border).min(max_x);
            let y1 = (y0 + size).saturating_sub(border).min(max_y);
            for y in (y0 + border)..=y1 {
                for x in (x0 + border)..=x1 {
                    img.put_pixel(x, y, Rgba(fill));
                }
            }
        }
    }

    img
}

/// Write the image to `path`; the format follows the file extension.
pub fn save(img: &RgbaImage, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    img.save(path)?;
    debug!(
        "wrote {}x{} image to {}",
        img.width(),
        img.height(),
        path.display()
    );
    Ok(())
}
