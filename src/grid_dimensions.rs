use std::convert::TryFrom;
use std::fmt;
use std::str::FromStr;

use crate::errors::*;
use crate::units::{ColumnsCount, EdgesCount, NodesCount, RowsCount};


/// Validated width and height of a rectangular maze grid.
///
/// Both sides are at least 1 and the cell count fits in a `usize`, so a grid of these
/// dimensions can always be indexed without overflow.
#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash)]
pub struct GridDimensions {
    columns: ColumnsCount,
    rows: RowsCount,
}

impl GridDimensions {
    /// Validate raw (possibly user supplied) dimensions.
    ///
    /// Fails with `ErrorKind::InvalidDimensions` if either side is not positive, does not
    /// fit a `u32` or the total cell count overflows.
    pub fn new(columns: i64, rows: i64) -> Result<GridDimensions> {
        let invalid = || Error::from(ErrorKind::InvalidDimensions(columns, rows));

        if columns <= 0 || rows <= 0 {
            return Err(invalid());
        }
        let columns_u32 = u32::try_from(columns).map_err(|_| invalid())?;
        let rows_u32 = u32::try_from(rows).map_err(|_| invalid())?;
        (columns_u32 as usize)
            .checked_mul(rows_u32 as usize)
            .ok_or_else(invalid)?;

        Ok(GridDimensions {
            columns: ColumnsCount(columns_u32),
            rows: RowsCount(rows_u32),
        })
    }

    #[inline]
    pub fn columns(&self) -> ColumnsCount {
        self.columns
    }

    #[inline]
    pub fn rows(&self) -> RowsCount {
        self.rows
    }

    #[inline]
    pub fn size(&self) -> NodesCount {
        NodesCount(self.columns.0 as usize * self.rows.0 as usize)
    }

    /// Node and edge counts of a spanning tree over this grid.
    pub fn graph_size(&self) -> (NodesCount, EdgesCount) {
        let NodesCount(cells_count) = self.size();
        (NodesCount(cells_count), EdgesCount(cells_count - 1))
    }
}

impl FromStr for GridDimensions {
    type Err = Error;

    /// Parses `"<width>x<height>"`, e.g. `"50x50"` or `" 20 X 8 "`.
    fn from_str(text: &str) -> Result<GridDimensions> {
        let parse_error = || Error::from(ErrorKind::DimensionsParse(text.to_string()));

        let mut parts = text.trim().splitn(2, |c: char| c == 'x' || c == 'X');
        let (width_text, height_text) = match (parts.next(), parts.next()) {
            (Some(w), Some(h)) => (w.trim(), h.trim()),
            _ => return Err(parse_error()),
        };

        let width = width_text.parse::<i64>().map_err(|_| parse_error())?;
        let height = height_text.parse::<i64>().map_err(|_| parse_error())?;

        GridDimensions::new(width, height)
    }
}

impl fmt::Display for GridDimensions {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}x{}", self.columns.0, self.rows.0)
    }
}
