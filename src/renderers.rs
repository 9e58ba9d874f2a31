use std::path::Path;

use image::{GrayImage, ImageFormat, Luma};
use log::info;

use crate::cells::Direction;
use crate::errors::*;
use crate::grid::Grid;
use crate::units::{CellPixels, ColumnsCount, RowsCount};

/// Default pixel length of one cell side.
pub const CELL_SIZE: u32 = 10;

const BLACK: Luma<u8> = Luma([0x00]);
const WHITE: Luma<u8> = Luma([0xff]);

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RenderOptions {
    cell_pixels: CellPixels,
    wall_colour: Luma<u8>,
    background_colour: Luma<u8>,
}

impl Default for RenderOptions {
    fn default() -> RenderOptions {
        RenderOptions {
            cell_pixels: CellPixels(CELL_SIZE),
            wall_colour: BLACK,
            background_colour: WHITE,
        }
    }
}

#[derive(Debug, Default)]
pub struct RenderOptionsBuilder {
    options: RenderOptions,
}

impl RenderOptionsBuilder {
    pub fn new() -> RenderOptionsBuilder {
        RenderOptionsBuilder::default()
    }
    pub fn cell_side_pixels_length(mut self, cell_pixels: u32) -> Self {
        self.options.cell_pixels = CellPixels(cell_pixels);
        self
    }
    pub fn wall_colour(mut self, intensity: u8) -> Self {
        self.options.wall_colour = Luma([intensity]);
        self
    }
    pub fn background_colour(mut self, intensity: u8) -> Self {
        self.options.background_colour = Luma([intensity]);
        self
    }
    pub fn build(self) -> RenderOptions {
        self.options
    }
}

/// Rasterise the standing walls of a maze as one pixel wide lines.
///
/// The image is `columns * cell + 1` pixels wide and `rows * cell + 1` high so the right and
/// bottom boundary walls land inside it. Each wall spans its whole cell side, corners included.
pub fn render_image(grid: &Grid, options: &RenderOptions) -> Result<GrayImage> {
    let CellPixels(cell) = options.cell_pixels;
    if cell == 0 {
        return Err(ErrorKind::InvalidCellPixels(cell).into());
    }

    let ColumnsCount(columns) = grid.columns();
    let RowsCount(rows) = grid.rows();
    let too_large = || Error::from(ErrorKind::ImageTooLarge(columns, rows, cell));
    let image_side = |cells_count: u32| cells_count.checked_mul(cell).and_then(|px| px.checked_add(1));
    let width = image_side(columns).ok_or_else(too_large)?;
    let height = image_side(rows).ok_or_else(too_large)?;

    let mut image = GrayImage::from_pixel(width, height, options.background_colour);
    let wall = options.wall_colour;

    for (coord, maze_cell) in grid.iter().zip(grid.cells()) {
        let x1 = coord.x * cell;
        let y1 = coord.y * cell;
        let x2 = x1 + cell;
        let y2 = y1 + cell;

        for direction in maze_cell.walls() {
            match direction {
                Direction::Up => draw_horizontal_line(&mut image, x1, x2, y1, wall),
                Direction::Down => draw_horizontal_line(&mut image, x1, x2, y2, wall),
                Direction::Left => draw_vertical_line(&mut image, x1, y1, y2, wall),
                Direction::Right => draw_vertical_line(&mut image, x2, y1, y2, wall),
            }
        }
    }

    Ok(image)
}

/// Write a rendered maze out as a PNG file.
pub fn save_png(image: &GrayImage, path: &Path) -> Result<()> {
    image.save_with_format(path, ImageFormat::Png)
         .chain_err(|| format!("Failed to write maze image {}", path.display()))?;
    info!("saved {}x{} maze image to {}", image.width(), image.height(), path.display());
    Ok(())
}

pub fn render_png(grid: &Grid, options: &RenderOptions, path: &Path) -> Result<()> {
    let image = render_image(grid, options)?;
    save_png(&image, path)
}

fn draw_horizontal_line(image: &mut GrayImage, x1: u32, x2: u32, y: u32, colour: Luma<u8>) {
    for x in x1..=x2 {
        image.put_pixel(x, y, colour);
    }
}

fn draw_vertical_line(image: &mut GrayImage, x: u32, y1: u32, y2: u32, colour: Luma<u8>) {
    for y in y1..=y2 {
        image.put_pixel(x, y, colour);
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::generate_seeded;
    use crate::grid_dimensions::GridDimensions;

    fn is_black(image: &GrayImage, x: u32, y: u32) -> bool {
        *image.get_pixel(x, y) == BLACK
    }

    #[test]
    fn image_size_covers_the_boundary() {
        let grid = generate_seeded(5, 3, 1).unwrap();
        let image = render_image(&grid, &RenderOptions::default()).unwrap();
        assert_eq!(image.dimensions(), (51, 31));

        let image = render_image(&grid, &RenderOptionsBuilder::new().cell_side_pixels_length(4).build())
            .unwrap();
        assert_eq!(image.dimensions(), (21, 13));
    }

    #[test]
    fn closed_cell_is_a_square_outline() {
        let grid = generate_seeded(1, 1, 1).unwrap();
        let image = render_image(&grid, &RenderOptions::default()).unwrap();
        for i in 0..=CELL_SIZE {
            assert!(is_black(&image, i, 0));
            assert!(is_black(&image, i, CELL_SIZE));
            assert!(is_black(&image, 0, i));
            assert!(is_black(&image, CELL_SIZE, i));
        }
        for x in 1..CELL_SIZE {
            for y in 1..CELL_SIZE {
                assert!(!is_black(&image, x, y));
            }
        }
    }

    #[test]
    fn corridor_has_no_internal_walls() {
        let grid = generate_seeded(3, 1, 5).unwrap();
        let image = render_image(&grid, &RenderOptions::default()).unwrap();
        let mid_y = CELL_SIZE / 2;
        assert!(is_black(&image, 0, mid_y));
        assert!(!is_black(&image, CELL_SIZE, mid_y));
        assert!(!is_black(&image, 2 * CELL_SIZE, mid_y));
        assert!(is_black(&image, 3 * CELL_SIZE, mid_y));
    }

    #[test]
    fn every_open_passage_is_blank() {
        let grid = generate_seeded(12, 9, 77).unwrap();
        let image = render_image(&grid, &RenderOptions::default()).unwrap();
        for (a, b) in grid.iter_passages() {
            let (x, y) = if b.x > a.x {
                (b.x * CELL_SIZE, a.y * CELL_SIZE + CELL_SIZE / 2)
            } else {
                (a.x * CELL_SIZE + CELL_SIZE / 2, b.y * CELL_SIZE)
            };
            assert!(!is_black(&image, x, y), "passage {:?} -> {:?} is drawn as a wall", a, b);
        }
    }

    #[test]
    fn custom_colours() {
        let grid = generate_seeded(2, 2, 3).unwrap();
        let options = RenderOptionsBuilder::new().wall_colour(0x40).background_colour(0xc0).build();
        let image = render_image(&grid, &options).unwrap();
        assert_eq!(*image.get_pixel(0, 0), Luma([0x40]));
        assert_eq!(*image.get_pixel(5, 5), Luma([0xc0]));
    }

    #[test]
    fn zero_cell_pixels_is_an_error() {
        let grid = generate_seeded(2, 2, 3).unwrap();
        let options = RenderOptionsBuilder::new().cell_side_pixels_length(0).build();
        let err = render_image(&grid, &options).unwrap_err();
        assert!(matches!(*err.kind(), ErrorKind::InvalidCellPixels(0)));
    }

    #[test]
    fn oversized_image_is_an_error() {
        let grid = Grid::new(GridDimensions::new(1 << 20, 1).unwrap());
        let options = RenderOptionsBuilder::new().cell_side_pixels_length(1 << 13).build();
        let err = render_image(&grid, &options).unwrap_err();
        assert!(matches!(*err.kind(), ErrorKind::ImageTooLarge(..)));
    }

    #[test]
    fn png_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("maze_output.png");
        let grid = generate_seeded(6, 4, 9).unwrap();
        let options = RenderOptions::default();

        render_png(&grid, &options, &path).unwrap();

        let loaded = image::open(&path).unwrap().to_luma8();
        assert_eq!(loaded, render_image(&grid, &options).unwrap());
    }

    #[test]
    fn unwritable_path_reports_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("maze.png");
        let image = render_image(&generate_seeded(2, 2, 0).unwrap(), &RenderOptions::default()).unwrap();
        let err = save_png(&image, &path).unwrap_err();
        assert!(err.to_string().contains("maze.png"));
    }
}
