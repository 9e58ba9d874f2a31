use log::debug;
use rand::{Rng, SeedableRng};
use rand_xorshift::XorShiftRng;

use crate::cells::Coordinate;
use crate::errors::*;
use crate::grid::Grid;
use crate::grid_dimensions::GridDimensions;

/// Validate `columns` x `rows` and generate a perfect maze with the recursive backtracker.
///
/// Fails with `ErrorKind::InvalidDimensions` before allocating anything if either dimension
/// is not positive or is too large.
pub fn generate<R>(columns: i64, rows: i64, rng: &mut R) -> Result<Grid>
    where R: Rng + ?Sized
{
    let dimensions = GridDimensions::new(columns, rows)?;
    recursive_backtracker(dimensions, rng)
}

/// As `generate` but driven by an `XorShiftRng` seeded from `seed`, so the same seed and
/// dimensions always produce the same maze.
pub fn generate_seeded(columns: i64, rows: i64, seed: u64) -> Result<Grid> {
    let mut rng = XorShiftRng::seed_from_u64(seed);
    generate(columns, rows, &mut rng)
}

/// Apply the recursive backtracker maze generation algorithm to a fresh grid.
///
/// A randomised depth first traversal from the top left cell, using an explicit stack rather
/// than recursion. The top of the stack looks at its unvisited neighbours (enumerated Up, Down,
/// Left, Right) and carves a passage to one picked uniformly at random, which becomes the new
/// top. When there are no unvisited neighbours left it is a dead end and we backtrack by
/// popping. Every push visits a new cell so the loop ends after at most `2 * size` iterations,
/// leaving every cell visited and `size - 1` passages forming a spanning tree.
///
/// The result is the classic long-corridor biased maze, it is not a uniform spanning tree.
pub fn recursive_backtracker<R>(dimensions: GridDimensions, rng: &mut R) -> Result<Grid>
    where R: Rng + ?Sized
{
    debug!("generating {} maze with the recursive backtracker", dimensions);

    let mut grid = Grid::new(dimensions);
    let origin = Coordinate::new(0, 0);
    grid.mark_visited(origin)?;

    let mut stack = Vec::with_capacity(grid.size());
    stack.push(origin);
    let mut carved = 0usize;

    while let Some(&current) = stack.last() {
        let unvisited = grid.unvisited_neighbour_directions(current);

        if unvisited.is_empty() {
            // dead end
            let _ = stack.pop();
        } else {
            // u32 sampling keeps seeded mazes identical on 32 and 64 bit targets
            let choice = rng.gen_range(0..unvisited.len() as u32) as usize;
            let next = grid.carve_passage(current, unvisited[choice])?;
            grid.mark_visited(next)?;
            stack.push(next);
            carved += 1;
        }
    }

    debug!("carved {} passages in {} maze", carved, dimensions);
    Ok(grid)
}
