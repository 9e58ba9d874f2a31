use std::fmt;

use crate::cells::{Coordinate, Direction};
use crate::grid::Grid;
use crate::units::{ColumnsCount, RowsCount};

/// Box drawing glyph for a lattice point, indexed by the wall arms meeting there:
/// bit 0 up, bit 1 down, bit 2 left, bit 3 right.
const JUNCTIONS: [char; 16] = [
    ' ', '╵', '╷', '│',
    '╴', '┘', '┐', '┤',
    '╶', '└', '┌', '├',
    '─', '┴', '┬', '┼',
];

const ARM_UP: usize = 1;
const ARM_DOWN: usize = 1 << 1;
const ARM_LEFT: usize = 1 << 2;
const ARM_RIGHT: usize = 1 << 3;

const CELL_BODY: &str = "   ";
const HORIZONTAL_WALL: &str = "───";

impl Grid {
    /// Does the cell at (x, y) exist and have a wall standing on side `direction`?
    /// Coordinates are signed so lattice lookups can step one off the grid edge.
    fn wall_at(&self, x: i64, y: i64, direction: Direction) -> bool {
        if x < 0 || y < 0 || x > i64::from(u32::max_value()) || y > i64::from(u32::max_value()) {
            return false;
        }
        self.cell(Coordinate::new(x as u32, y as u32))
            .map_or(false, |cell| cell.has_wall(direction))
    }

    /// Glyph for the lattice point at the top left corner of cell (px, py).
    ///
    /// Up to four cells touch the point. Each arm out of the point is a wall segment that is
    /// shared by two cells, and is drawn if either cell has it standing.
    fn junction(&self, px: i64, py: i64) -> char {
        let up = self.wall_at(px, py - 1, Direction::Left) || self.wall_at(px - 1, py - 1, Direction::Right);
        let down = self.wall_at(px, py, Direction::Left) || self.wall_at(px - 1, py, Direction::Right);
        let left = self.wall_at(px - 1, py, Direction::Up) || self.wall_at(px - 1, py - 1, Direction::Down);
        let right = self.wall_at(px, py, Direction::Up) || self.wall_at(px, py - 1, Direction::Down);

        let mut arms = 0;
        if up { arms |= ARM_UP; }
        if down { arms |= ARM_DOWN; }
        if left { arms |= ARM_LEFT; }
        if right { arms |= ARM_RIGHT; }
        JUNCTIONS[arms]
    }

    /// The line of lattice points and horizontal walls along the top edge of row `py`.
    /// `py == rows` gives the bottom boundary.
    fn write_wall_line(&self, out: &mut String, py: i64, columns: i64) {
        for px in 0..columns {
            out.push(self.junction(px, py));
            let wall = self.wall_at(px, py, Direction::Up) || self.wall_at(px, py - 1, Direction::Down);
            out.push_str(if wall { HORIZONTAL_WALL } else { CELL_BODY });
        }
        out.push(self.junction(columns, py));
        out.push('\n');
    }

    fn write_cell_line(&self, out: &mut String, py: i64, columns: i64) {
        for px in 0..columns {
            let wall = self.wall_at(px, py, Direction::Left) || self.wall_at(px - 1, py, Direction::Right);
            out.push(if wall { '│' } else { ' ' });
            out.push_str(CELL_BODY);
        }
        out.push(if self.wall_at(columns - 1, py, Direction::Right) { '│' } else { ' ' });
        out.push('\n');
    }
}

/// Text rendering: every cell is three characters wide and one line high, with one character
/// of wall (or opening) between neighbours.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let ColumnsCount(columns) = self.columns();
        let RowsCount(rows) = self.rows();
        let (columns, rows) = (i64::from(columns), i64::from(rows));

        let mut output = String::new();
        for py in 0..rows {
            self.write_wall_line(&mut output, py, columns);
            self.write_cell_line(&mut output, py, columns);
        }
        self.write_wall_line(&mut output, rows, columns);

        f.write_str(&output)
    }
}
