use std::fmt;
use std::io::Write;

use petgraph::graph::{NodeIndex, UnGraph};
use smallvec::SmallVec;

use crate::cells::{Cell, Coordinate, Direction};
use crate::errors::*;
use crate::grid_dimensions::GridDimensions;
use crate::units::{ColumnsCount, EdgesCount, NodesCount, RowsCount};

pub type CoordinateSmallVec = SmallVec<[Coordinate; 4]>;
pub type DirectionSmallVec = SmallVec<[Direction; 4]>;


/// A rectangular grid of cells stored in row major order.
///
/// Walls can only be removed from inside the crate; everything handed out publicly is a read
/// only view of a finished maze.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    dimensions: GridDimensions,
    cells: Vec<Cell>,
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Grid :: dimensions: {}, passages: {}",
               self.dimensions, self.passages_count())
    }
}

impl Grid {
    /// A grid with every cell unvisited and every wall standing.
    pub fn new(dimensions: GridDimensions) -> Grid {
        let NodesCount(cells_count) = dimensions.size();
        Grid {
            dimensions,
            cells: vec![Cell::default(); cells_count],
        }
    }

    #[inline]
    pub fn dimensions(&self) -> GridDimensions {
        self.dimensions
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn columns(&self) -> ColumnsCount {
        self.dimensions.columns()
    }

    #[inline]
    pub fn rows(&self) -> RowsCount {
        self.dimensions.rows()
    }

    /// Convert a grid coordinate to a one dimensional index in the range 0..grid.size().
    /// Returns None if the grid coordinate is invalid.
    #[inline]
    pub fn coordinate_to_index(&self, coord: Coordinate) -> Option<usize> {
        if self.is_valid_coordinate(coord) {
            let ColumnsCount(row_size) = self.columns();
            Some(coord.y as usize * row_size as usize + coord.x as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn index_to_coordinate(&self, index: usize) -> Option<Coordinate> {
        if index < self.size() {
            let ColumnsCount(row_size) = self.columns();
            let row_size = row_size as usize;
            Some(Coordinate::new((index % row_size) as u32, (index / row_size) as u32))
        } else {
            None
        }
    }

    /// Is the grid coordinate valid for this grid - within the grid's dimensions
    #[inline]
    pub fn is_valid_coordinate(&self, coord: Coordinate) -> bool {
        coord.x < self.columns().0 && coord.y < self.rows().0
    }

    #[inline]
    pub fn cell(&self, coord: Coordinate) -> Option<&Cell> {
        self.coordinate_to_index(coord).map(|index| &self.cells[index])
    }

    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn neighbour_at_direction(&self, coord: Coordinate, direction: Direction) -> Option<Coordinate> {
        if !self.is_valid_coordinate(coord) {
            return None;
        }
        coord.offset(direction)
             .filter(|&neighbour_coord| self.is_valid_coordinate(neighbour_coord))
    }

    /// Cells that are Up, Down, Left or Right of a cell, but not necessarily joined by a passage.
    pub fn neighbours(&self, coord: Coordinate) -> CoordinateSmallVec {
        Direction::ALL.iter()
                      .filter_map(|&dir| self.neighbour_at_direction(coord, dir))
                      .collect()
    }

    /// Directions out of `coord` that lead to a grid cell not yet reached by generation,
    /// in `Direction::ALL` order.
    pub fn unvisited_neighbour_directions(&self, coord: Coordinate) -> DirectionSmallVec {
        Direction::ALL.iter()
                      .cloned()
                      .filter(|&dir| {
                          self.neighbour_at_direction(coord, dir)
                              .and_then(|neighbour_coord| self.cell(neighbour_coord))
                              .map_or(false, |cell| !cell.is_visited())
                      })
                      .collect()
    }

    /// Is there an open passage out of `coord` in `direction`?
    /// Walls on the outer boundary of the grid never have a passage.
    pub fn has_passage(&self, coord: Coordinate, direction: Direction) -> bool {
        self.neighbour_at_direction(coord, direction).is_some() &&
        self.cell(coord).map_or(false, |cell| !cell.has_wall(direction))
    }

    /// Cells joined to `coord` by a passage.
    pub fn passages(&self, coord: Coordinate) -> Option<CoordinateSmallVec> {
        if !self.is_valid_coordinate(coord) {
            return None;
        }
        Some(Direction::ALL.iter()
                           .filter(|&&dir| self.has_passage(coord, dir))
                           .filter_map(|&dir| self.neighbour_at_direction(coord, dir))
                           .collect())
    }

    /// Number of passages, counting each shared opening between two cells once.
    pub fn passages_count(&self) -> usize {
        self.iter_passages().count()
    }

    #[inline]
    pub fn iter(&self) -> CellIter {
        CellIter {
            columns: self.columns().0,
            current_cell_number: 0,
            cells_count: self.size(),
        }
    }

    /// The coordinates of each row, top to bottom.
    pub fn iter_row(&self) -> impl Iterator<Item = Vec<Coordinate>> {
        let ColumnsCount(columns) = self.columns();
        let RowsCount(rows) = self.rows();
        (0..rows).map(move |y| (0..columns).map(|x| Coordinate::new(x, y)).collect())
    }

    /// Every passage once, as `(a, b)` where `b` is to the right of or below `a`.
    pub fn iter_passages(&self) -> impl Iterator<Item = (Coordinate, Coordinate)> + '_ {
        self.iter().flat_map(move |coord| {
            let passages: SmallVec<[(Coordinate, Coordinate); 2]> =
                [Direction::Right, Direction::Down]
                    .iter()
                    .filter(|&&dir| self.has_passage(coord, dir))
                    .filter_map(|&dir| self.neighbour_at_direction(coord, dir))
                    .map(|neighbour_coord| (coord, neighbour_coord))
                    .collect();
            passages
        })
    }

    /// The maze as an undirected graph: one node per cell in row major order (node index ==
    /// `coordinate_to_index`) weighted with its coordinate, one edge per passage.
    pub fn passage_graph(&self) -> UnGraph<Coordinate, ()> {
        let (NodesCount(nodes), EdgesCount(edges)) = self.dimensions.graph_size();
        let mut graph = UnGraph::with_capacity(nodes, edges);
        for coord in self.iter() {
            let _ = graph.add_node(coord);
        }
        for (a, b) in self.iter_passages() {
            if let (Some(a_index), Some(b_index)) = (self.coordinate_to_index(a),
                                                     self.coordinate_to_index(b)) {
                let _ = graph.add_edge(NodeIndex::new(a_index), NodeIndex::new(b_index), ());
            }
        }
        graph
    }

    /// Serialize the maze as an edge list. Line 1: `n(#vertices) m(#edges)`. Line 2+: an edge
    /// between two vertices using 1-based row major vertex indices.
    pub fn write_edge_list<W: Write>(&self, writer: &mut W) -> Result<()> {
        writeln!(writer, "{} {}", self.size(), self.passages_count())?;
        for (src, dst) in self.iter_passages() {
            let index_a = self.coordinate_to_index(src)
                              .ok_or_else(|| ErrorKind::InvalidCoordinate(src.x, src.y))?;
            let index_b = self.coordinate_to_index(dst)
                              .ok_or_else(|| ErrorKind::InvalidCoordinate(dst.x, dst.y))?;
            writeln!(writer, "{} {}", index_a + 1, index_b + 1)?;
        }
        Ok(())
    }

    pub(crate) fn mark_visited(&mut self, coord: Coordinate) -> Result<()> {
        let index = self.coordinate_to_index(coord)
                        .ok_or_else(|| ErrorKind::InvalidCoordinate(coord.x, coord.y))?;
        self.cells[index].mark_visited();
        Ok(())
    }

    /// Open a passage from `coord` towards `direction`, clearing the facing walls of both cells.
    /// Returns the coordinate of the cell on the other side.
    pub(crate) fn carve_passage(&mut self, coord: Coordinate, direction: Direction) -> Result<Coordinate> {
        let index = self.coordinate_to_index(coord)
                        .ok_or_else(|| ErrorKind::InvalidCoordinate(coord.x, coord.y))?;
        let neighbour_coord = self.neighbour_at_direction(coord, direction)
                                  .ok_or_else(|| ErrorKind::InvalidCoordinate(coord.x, coord.y))?;
        let neighbour_index = self.coordinate_to_index(neighbour_coord)
                                  .ok_or_else(|| ErrorKind::InvalidCoordinate(neighbour_coord.x,
                                                                              neighbour_coord.y))?;

        self.cells[index].clear_wall(direction);
        self.cells[neighbour_index].clear_wall(direction.opposite());
        Ok(neighbour_coord)
    }
}

/// Row major iterator over every coordinate of a grid.
#[derive(Debug, Clone)]
pub struct CellIter {
    columns: u32,
    current_cell_number: usize,
    cells_count: usize,
}

impl ExactSizeIterator for CellIter {} // default impl using size_hint()
impl Iterator for CellIter {
    type Item = Coordinate;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current_cell_number < self.cells_count {
            let row_size = self.columns as usize;
            let coord = Coordinate::new((self.current_cell_number % row_size) as u32,
                                        (self.current_cell_number / row_size) as u32);
            self.current_cell_number += 1;
            Some(coord)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.cells_count - self.current_cell_number;
        (remaining, Some(remaining))
    }
}
