use std::io::{self, Write};

use crate::grids::{Coord, Direction, WallGrid};

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Draws the wall state of a grid as text, with `S` on the first cell and `E`
/// on the last one.
pub struct TextRenderer<W: Write> {
    out: W,
    frames: usize,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out, frames: 0 }
    }

    pub fn frames(&self) -> usize {
        self.frames
    }

    /// Writes one frame. With `clear` set the terminal is wiped first so
    /// consecutive frames animate in place.
    pub fn draw(&mut self, grid: &WallGrid, clear: bool) -> io::Result<()> {
        if clear {
            self.out.write_all(CLEAR_SCREEN.as_bytes())?;
        }
        self.out.write_all(render(grid).as_bytes())?;
        self.out.flush()?;
        self.frames += 1;

        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

fn marker(grid: &WallGrid, coords: Coord) -> &'static str {
    let end = (grid.width() - 1, grid.height() - 1);
    if coords == (0, 0) {
        " S "
    } else if coords == end {
        " E "
    } else {
        "   "
    }
}

pub fn render(grid: &WallGrid) -> String {
    let mut frame = String::new();

    for y in 0..grid.height() {
        frame.push('+');
        for x in 0..grid.width() {
            frame.push_str(if grid.wall_state((x, y), Direction::Up) {
                "---"
            } else {
                "   "
            });
            frame.push('+');
        }
        frame.push('\n');

        for x in 0..grid.width() {
            frame.push(if grid.wall_state((x, y), Direction::Left) {
                '|'
            } else {
                ' '
            });
            frame.push_str(marker(grid, (x, y)));
        }
        let last = (grid.width() - 1, y);
        frame.push(if grid.wall_state(last, Direction::Right) {
            '|'
        } else {
            ' '
        });
        frame.push('\n');
    }

    // bottom border comes from the last row's down walls
    let bottom = grid.height() - 1;
    frame.push('+');
    for x in 0..grid.width() {
        frame.push_str(if grid.wall_state((x, bottom), Direction::Down) {
            "---"
        } else {
            "   "
        });
        frame.push('+');
    }
    frame.push('\n');

    frame
}
