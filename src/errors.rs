// Other modules in this crate `use crate::errors::*;` to get the Error, ErrorKind,
// ResultExt and Result types that `error_chain!` creates.
use error_chain::*;

error_chain! {

    foreign_links {
        Io(::std::io::Error);
        Image(::image::ImageError);
    }

    errors {
        InvalidDimensions(columns: i64, rows: i64) {
            description("invalid maze dimensions")
            display("invalid maze dimensions {}x{}: both must be positive and fit in a u32 grid",
                    columns, rows)
        }

        DimensionsParse(text: String) {
            description("unparseable maze dimensions")
            display("cannot parse maze dimensions from '{}', expected <width>x<height>", text)
        }

        InvalidCoordinate(x: u32, y: u32) {
            description("coordinate outside of the grid")
            display("coordinate ({}, {}) is outside of the grid", x, y)
        }

        ImageTooLarge(columns: u32, rows: u32, cell_pixels: u32) {
            description("maze image too large")
            display("a {}x{} maze at {} pixels per cell does not fit in an image",
                    columns, rows, cell_pixels)
        }

        InvalidCellPixels(cell_pixels: u32) {
            description("invalid cell pixel size")
            display("cell pixel size must be at least 1, got {}", cell_pixels)
        }
    }
}
