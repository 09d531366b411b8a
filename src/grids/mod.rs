pub mod wall_grid;

use crate::error::{MazeError, Result};

pub use wall_grid::{Cell, WallGrid};

/// `(x, y)` with the origin in the top left corner.
pub type Coord = (usize, usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: usize,
    pub height: usize,
}

impl Dimensions {
    /// Both sides at least 1, and twice the cell count (the edge list bound)
    /// must fit in a `usize`.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        width
            .checked_mul(height)
            .and_then(|count| count.checked_mul(2))
            .filter(|_| width > 0 && height > 0)
            .map(|_| Self { width, height })
            .ok_or(MazeError::InvalidDimensions { width, height })
    }

    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }

    /// Number of 4-adjacent cell pairs, i.e. the size of the full edge set.
    pub fn edge_count(&self) -> usize {
        2 * self.cell_count() - self.width - self.height
    }

    #[inline]
    pub fn contains(&self, (x, y): Coord) -> bool {
        x < self.width && y < self.height
    }

    // row-major, shared by the grid storage and the disjoint set
    #[inline]
    pub fn index_of(&self, (x, y): Coord) -> usize {
        (self.width * y) + x
    }

    #[inline]
    pub fn coord_of(&self, index: usize) -> Coord {
        (index % self.width, index / self.width)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up = 0,
    Down = 1,
    Left = 2,
    Right = 3,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn between(a: Coord, b: Coord) -> Option<Direction> {
        let dx = b.0 as isize - a.0 as isize;
        let dy = b.1 as isize - a.1 as isize;

        match (dx, dy) {
            (0, -1) => Some(Direction::Up),
            (0, 1) => Some(Direction::Down),
            (-1, 0) => Some(Direction::Left),
            (1, 0) => Some(Direction::Right),
            _ => None,
        }
    }

    /// Steps one cell from `coords`, returning `None` when that would leave `dims`.
    pub fn step(self, (x, y): Coord, dims: Dimensions) -> Option<Coord> {
        let next = match self {
            Direction::Up => (x, y.checked_sub(1)?),
            Direction::Down => (x, y + 1),
            Direction::Left => (x.checked_sub(1)?, y),
            Direction::Right => (x + 1, y),
        };

        if dims.contains(next) {
            Some(next)
        } else {
            None
        }
    }
}

impl std::ops::Neg for Direction {
    type Output = Direction;

    fn neg(self) -> Self::Output {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

impl From<usize> for Direction {
    fn from(dir: usize) -> Self {
        match dir {
            0 => Direction::Up,
            1 => Direction::Down,
            2 => Direction::Left,
            3 => Direction::Right,
            _ => unreachable!(),
        }
    }
}

/// In-bounds neighbors of a cell, yielded in `Up, Down, Left, Right` order.
#[derive(Debug, Clone, Copy)]
pub struct Neighborhood {
    pub up: Option<Coord>,
    pub down: Option<Coord>,
    pub left: Option<Coord>,
    pub right: Option<Coord>,

    counter: usize,
}

impl Neighborhood {
    pub fn of(coords: Coord, dims: Dimensions) -> Self {
        Self {
            up: Direction::Up.step(coords, dims),
            down: Direction::Down.step(coords, dims),
            left: Direction::Left.step(coords, dims),
            right: Direction::Right.step(coords, dims),
            counter: 0,
        }
    }

    fn get(&self, dir: Direction) -> Option<Coord> {
        match dir {
            Direction::Up => self.up,
            Direction::Down => self.down,
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }
}

impl Iterator for Neighborhood {
    type Item = (Coord, Direction);

    fn next(&mut self) -> Option<Self::Item> {
        while self.counter < Direction::ALL.len() {
            let dir = Direction::from(self.counter);
            self.counter += 1;

            if let Some(neighbor) = self.get(dir) {
                return Some((neighbor, dir));
            }
        }

        None
    }
}

#[cfg(test)]
mod test_grids {
    use super::*;

    fn dims(width: usize, height: usize) -> Dimensions {
        Dimensions { width, height }
    }

    #[test]
    fn dimensions_are_validated() {
        assert_eq!(Dimensions::new(3, 2), Ok(dims(3, 2)));
        assert!(Dimensions::new(0, 2).is_err());
        assert!(Dimensions::new(2, 0).is_err());
        assert!(Dimensions::new(usize::MAX, 2).is_err());
        // the cell count fits, its double does not
        assert_eq!(
            Dimensions::new(usize::MAX / 2 + 1, 1),
            Err(MazeError::InvalidDimensions {
                width: usize::MAX / 2 + 1,
                height: 1
            })
        );
    }

    #[test]
    fn edge_count_matches_formula() {
        assert_eq!(dims(1, 1).edge_count(), 0);
        assert_eq!(dims(5, 5).edge_count(), 40);
        assert_eq!(dims(3, 1).edge_count(), 2);
        assert_eq!(dims(4, 7).edge_count(), 2 * 28 - 4 - 7);
    }

    #[test]
    fn corner_has_two_neighbors() {
        let hood: Vec<_> = Neighborhood::of((0, 0), dims(3, 3)).collect();
        assert_eq!(hood, vec![((0, 1), Direction::Down), ((1, 0), Direction::Right)]);
    }

    #[test]
    fn interior_neighbors_in_fixed_order() {
        let dirs: Vec<_> = Neighborhood::of((1, 1), dims(3, 3)).map(|(_, d)| d).collect();
        assert_eq!(dirs, Direction::ALL.to_vec());
    }

    #[test]
    fn single_cell_has_no_neighbors() {
        assert_eq!(Neighborhood::of((0, 0), dims(1, 1)).count(), 0);
    }

    #[test]
    fn direction_between() {
        assert_eq!(Direction::between((1, 1), (2, 1)), Some(Direction::Right));
        assert_eq!(Direction::between((1, 1), (1, 0)), Some(Direction::Up));
        assert_eq!(Direction::between((1, 1), (2, 2)), None);
        assert_eq!(Direction::between((1, 1), (1, 1)), None);
        assert_eq!(Direction::between((0, 0), (0, 2)), None);
    }

    #[test]
    fn negation_is_opposite() {
        for dir in Direction::ALL.iter() {
            assert_eq!(-(-*dir), *dir);
            assert_ne!(-*dir, *dir);
        }
    }

    #[test]
    fn index_round_trip_is_row_major() {
        let d = dims(4, 3);
        assert_eq!(d.index_of((1, 0)), 1);
        assert_eq!(d.index_of((0, 1)), 4);
        assert_eq!(d.coord_of(7), (3, 1));
    }
}
