use std::convert::From;

#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug, Ord, PartialOrd)]
pub struct Coordinate {
    pub x: u32,
    pub y: u32,
}

impl Coordinate {
    pub fn new(x: u32, y: u32) -> Coordinate {
        Coordinate { x, y }
    }

    /// Creates a new `Coordinate` offset 1 cell away in the given direction.
    /// Returns None if the coordinate would be negative or overflow, it does not check any grid bounds.
    pub fn offset(self, direction: Direction) -> Option<Coordinate> {
        let Coordinate { x, y } = self;
        match direction {
            Direction::Up => y.checked_sub(1).map(|y| Coordinate::new(x, y)),
            Direction::Down => y.checked_add(1).map(|y| Coordinate::new(x, y)),
            Direction::Left => x.checked_sub(1).map(|x| Coordinate::new(x, y)),
            Direction::Right => x.checked_add(1).map(|x| Coordinate::new(x, y)),
        }
    }
}

impl From<(u32, u32)> for Coordinate {
    fn from(x_y_pair: (u32, u32)) -> Coordinate {
        Coordinate::new(x_y_pair.0, x_y_pair.1)
    }
}

/// Sides of a square cell. `y` grows downwards, so `Up` is towards row 0.
#[derive(Eq, PartialEq, Hash, Copy, Clone, Debug)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Every direction in the order neighbours are enumerated during generation.
    /// Seeded mazes are only reproducible because this order never changes.
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    #[inline]
    fn wall_index(self) -> usize {
        match self {
            Direction::Up => 0,
            Direction::Down => 1,
            Direction::Left => 2,
            Direction::Right => 3,
        }
    }
}

/// One grid position: whether generation has reached it and which of its four walls still stand.
#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash)]
pub struct Cell {
    visited: bool,
    walls: [bool; 4],
}

impl Default for Cell {
    fn default() -> Cell {
        Cell {
            visited: false,
            walls: [true; 4],
        }
    }
}

impl Cell {
    #[inline]
    pub fn is_visited(&self) -> bool {
        self.visited
    }

    #[inline]
    pub fn has_wall(&self, direction: Direction) -> bool {
        self.walls[direction.wall_index()]
    }

    /// The directions that still have a wall, in `Direction::ALL` order.
    pub fn walls(&self) -> impl Iterator<Item = Direction> + '_ {
        IntoIterator::into_iter(Direction::ALL).filter(move |&dir| self.has_wall(dir))
    }

    pub fn walls_count(&self) -> usize {
        self.walls.iter().filter(|&&standing| standing).count()
    }

    #[inline]
    pub(crate) fn mark_visited(&mut self) {
        self.visited = true;
    }

    #[inline]
    pub(crate) fn clear_wall(&mut self, direction: Direction) {
        self.walls[direction.wall_index()] = false;
    }
}
