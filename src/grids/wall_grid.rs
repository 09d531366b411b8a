use std::collections::VecDeque;

use crate::error::{MazeError, Result};
use crate::grids::{Coord, Dimensions, Direction, Neighborhood};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub x: usize,
    pub y: usize,
    visited: bool,
    // indexed by `Direction as usize`
    walls: [bool; 4],
}

impl Cell {
    fn new(x: usize, y: usize) -> Self {
        Self {
            x,
            y,
            visited: false,
            walls: [true; 4],
        }
    }

    #[inline]
    pub fn coords(&self) -> Coord {
        (self.x, self.y)
    }

    #[inline]
    pub fn is_visited(&self) -> bool {
        self.visited
    }

    #[inline]
    pub fn has_wall(&self, dir: Direction) -> bool {
        self.walls[dir as usize]
    }

    pub fn walls(&self) -> [bool; 4] {
        self.walls
    }
}

/// A rectangular grid of cells where every cell owns its four walls.
///
/// Walls between two cells are stored twice, once on each side, and are only
/// ever cleared in pairs so both sides always agree.
#[derive(Debug, Clone)]
pub struct WallGrid {
    dims: Dimensions,
    cells: Vec<Cell>,
}

impl WallGrid {
    pub fn with_dims(width: usize, height: usize) -> Result<Self> {
        let dims = Dimensions::new(width, height)?;
        let count = dims.cell_count();

        let mut cells = Vec::new();
        cells
            .try_reserve_exact(count)
            .map_err(|_| MazeError::Allocation { cells: count })?;
        for y in 0..height {
            for x in 0..width {
                cells.push(Cell::new(x, y));
            }
        }

        Ok(Self { dims, cells })
    }

    #[inline]
    pub fn dims(&self) -> Dimensions {
        self.dims
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.dims.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.dims.height
    }

    #[inline]
    fn index_of(&self, coords: Coord) -> usize {
        self.dims.index_of(coords)
    }

    fn check_bounds(&self, (x, y): Coord) -> Result<()> {
        if self.dims.contains((x, y)) {
            Ok(())
        } else {
            Err(MazeError::OutOfBounds {
                x,
                y,
                width: self.dims.width,
                height: self.dims.height,
            })
        }
    }

    pub fn get_cell(&self, x: usize, y: usize) -> Option<&Cell> {
        if self.dims.contains((x, y)) {
            self.cells.get(self.index_of((x, y)))
        } else {
            None
        }
    }

    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Panics when `coords` is out of bounds.
    #[inline]
    pub fn wall_state(&self, coords: Coord, dir: Direction) -> bool {
        self.cells[self.index_of(coords)].has_wall(dir)
    }

    #[inline]
    pub fn is_visited(&self, coords: Coord) -> bool {
        self.cells[self.index_of(coords)].visited
    }

    pub fn visit(&mut self, coords: Coord) -> bool {
        let index = self.index_of(coords);
        let prev = self.cells[index].visited;
        self.cells[index].visited = true;
        prev
    }

    pub fn neighbors_of(&self, coords: Coord) -> Neighborhood {
        Neighborhood::of(coords, self.dims)
    }

    pub fn unvisited_neighbors_of(&self, coords: Coord) -> Vec<(Coord, Direction)> {
        self.neighbors_of(coords)
            .filter(|(neighbor, _)| !self.is_visited(*neighbor))
            .collect()
    }

    pub fn has_unvisited_neighbor(&self, coords: Coord) -> bool {
        self.neighbors_of(coords)
            .any(|(neighbor, _)| !self.is_visited(neighbor))
    }

    pub fn open_passage(&mut self, one: Coord, two: Coord) -> Result<Direction> {
        self.check_bounds(one)?;
        self.check_bounds(two)?;

        let dir =
            Direction::between(one, two).ok_or(MazeError::NotAdjacent { a: one, b: two })?;
        self.clear_wall_between(one, two, dir);

        Ok(dir)
    }

    /// Clears the wall on `dir` side of `coords` along with its mirror, returning the
    /// neighbor on the other side. `None` if that side is the outer border.
    pub fn carve(&mut self, coords: Coord, dir: Direction) -> Option<Coord> {
        let neighbor = dir.step(coords, self.dims)?;
        self.clear_wall_between(coords, neighbor, dir);
        Some(neighbor)
    }

    fn clear_wall_between(&mut self, one: Coord, two: Coord, dir: Direction) {
        let index_one = self.index_of(one);
        let index_two = self.index_of(two);

        self.cells[index_one].walls[dir as usize] = false;
        self.cells[index_two].walls[(-dir) as usize] = false;
    }

    pub fn visited_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.visited).count()
    }

    /// Each open passage counted once, through its right or bottom side.
    pub fn open_passage_count(&self) -> usize {
        self.cells
            .iter()
            .map(|cell| {
                let right = cell.x + 1 < self.dims.width && !cell.has_wall(Direction::Right);
                let down = cell.y + 1 < self.dims.height && !cell.has_wall(Direction::Down);
                right as usize + down as usize
            })
            .sum()
    }

    pub fn reachable_from(&self, start: Coord) -> usize {
        let mut seen = vec![false; self.cells.len()];
        let mut queue = VecDeque::new();
        seen[self.index_of(start)] = true;
        queue.push_back(start);

        let mut count = 0;
        while let Some(current) = queue.pop_front() {
            count += 1;
            for (neighbor, dir) in self.neighbors_of(current) {
                let index = self.index_of(neighbor);
                if !seen[index] && !self.wall_state(current, dir) {
                    seen[index] = true;
                    queue.push_back(neighbor);
                }
            }
        }

        count
    }

    /// Connected and acyclic, i.e. the open passages form a spanning tree.
    pub fn is_perfect(&self) -> bool {
        let cells = self.dims.cell_count();
        self.open_passage_count() == cells - 1 && self.reachable_from((0, 0)) == cells
    }

    /// Every wall agrees with the wall facing it from the neighboring cell.
    pub fn walls_are_symmetric(&self) -> bool {
        self.cells.iter().all(|cell| {
            self.neighbors_of(cell.coords()).all(|(neighbor, dir)| {
                cell.has_wall(dir) == self.wall_state(neighbor, -dir)
            })
        })
    }
}
