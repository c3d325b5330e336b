use crossterm::style::Color;

use crate::engine::LifeEngine;
use crate::grid::GridResult;

/// Hex values of braille dots
///
/// ```text
///  1   8
///  2  10
///  4  20
/// 40  80
/// ```
///
/// Where the base blank pattern is codepoint `0x2800` (or U+2800)
///
/// To get other configurations, just add the numbers above.
const BRAILLE_EMPTY: u32 = 0x2800;

/// Color of alive cells
pub const ALIVE: Color = Color::White;

/// Color of dead cells
pub const DEAD: Color = Color::Black;

/// A window onto a [`LifeEngine`], drawn with braille characters.
pub struct Camera {
    /// The dot buffer, `true` for an alive dot
    cb: Vec<bool>,

    /// The frame buffer.
    fb: String,

    /// Codepoints. This allows us to construct the framebuffer more easily
    cp: Vec<u32>,

    /// Width of the dot buffer
    w: usize,

    /// Height of the dot buffer
    h: usize,

    /// Row of the universe shown at the top of the view
    row: usize,

    /// Column of the universe shown at the left of the view
    col: usize,
}

impl Camera {
    /// Create a camera of `w x h` braille dots. In terms of terminal characters, that's
    /// `ceil(w / 2)` columns and `ceil(h / 4)` rows.
    pub fn new(w: usize, h: usize) -> Self {
        // Each braille character is 3 bytes, and newlines one byte. With `bw x bh` braille
        // characters, this gives us a framebuffer of length `3 * (bw * bh) + bh`.
        let (bw, bh) = (w.div_ceil(2), h.div_ceil(4));

        Self {
            cb: vec![false; w * h],
            fb: String::with_capacity(3 * (bw * bh) + bh),
            cp: vec![BRAILLE_EMPTY; bw * bh],
            w,
            h,
            row: 0,
            col: 0,
        }
    }

    /// Camera that exactly fits a terminal of `cols x rows` characters
    pub fn for_terminal(cols: u16, rows: u16) -> Self {
        Self::new(2 * cols as usize, 4 * rows as usize)
    }

    /// Change the size of the view, keeping its position
    pub fn resize(&mut self, w: usize, h: usize) {
        let (row, col) = (self.row, self.col);

        *self = Self::new(w, h);
        self.row = row;
        self.col = col;
    }

    /// Move the view by `rows` and `cols` cells, stopping at the top left of the universe
    pub fn pan(&mut self, rows: isize, cols: isize) {
        self.row = self.row.saturating_add_signed(rows);
        self.col = self.col.saturating_add_signed(cols);
    }

    pub fn reset_view(&mut self) {
        self.row = 0;
        self.col = 0;
    }

    /// Reset the dot buffer
    pub fn reset(&mut self) {
        self.cb.fill(false);
    }

    /// Draw the current generation of `engine`, with every cell taking up a
    /// `pixel_size x pixel_size` square of dots. Cells past the edge of the view are clipped.
    pub fn draw(&mut self, engine: &LifeEngine, pixel_size: usize) -> GridResult<()> {
        let pixel_size = pixel_size.max(1);

        // number of cells that fit in the view
        let rows = self.h.div_ceil(pixel_size);
        let cols = self.w.div_ceil(pixel_size);

        let row_end = engine.rows().min(self.row.saturating_add(rows));
        let col_end = engine.cols().min(self.col.saturating_add(cols));

        for row in self.row..row_end {
            for col in self.col..col_end {
                if !engine.cell_at(row, col)? {
                    continue;
                }

                let y = (row - self.row).saturating_mul(pixel_size);
                let x = (col - self.col).saturating_mul(pixel_size);
                self.fill_square(x, y, pixel_size);
            }
        }

        Ok(())
    }

    /// Turns on a square of dots, clipped to the view
    fn fill_square(&mut self, x: usize, y: usize, s: usize) {
        let sw = s.min(self.w.saturating_sub(x));
        let sh = s.min(self.h.saturating_sub(y));

        if sw == 0 || sh == 0 {
            return;
        }

        for dy in 0..sh {
            let i = self.xy_from(x, y + dy);
            self.cb[i..i + sw].fill(true);
        }
    }

    /// Fundamentally, we have a buffer of every dot on our screen, and we ask ourselves "Is
    /// this dot on or off?".
    pub fn render(&mut self) -> &str {
        let bw = self.w.div_ceil(2);

        // compute new codepoints
        self.cp.fill(BRAILLE_EMPTY);

        for (n, &px) in self.cb.iter().enumerate() {
            let (x, y) = (n % self.w, n / self.w);

            if px {
                self.cp[(y / 4) * bw + (x / 2)] += Self::get_hex_value(x, y);
            }
        }

        // update framebuffer
        self.fb.clear();

        for (i, &c) in self.cp.iter().enumerate() {
            if i > 0 && i % bw == 0 {
                self.fb.push('\n');
            }

            // every codepoint is in the braille block
            self.fb.push(char::from_u32(c).unwrap_or(' '));
        }
        self.fb.push('\n');

        &self.fb
    }

    fn xy_from(&self, x: usize, y: usize) -> usize {
        y * self.w + x
    }

    fn get_hex_value(x: usize, y: usize) -> u32 {
        match (x % 2, y % 4) {
            (0, 0) => 0x1,
            (1, 0) => 0x8,
            (0, 1) => 0x2,
            (1, 1) => 0x10,
            (0, 2) => 0x4,
            (1, 2) => 0x20,
            (0, 3) => 0x40,
            (1, 3) => 0x80,
            _ => unreachable!(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::Camera;
    use crate::engine::LifeEngine;
    use crate::grid::BoundedGrid;

    fn engine(rows: usize, cols: usize, alive: &[(usize, usize)]) -> LifeEngine {
        let mut grid = BoundedGrid::new(rows, cols).unwrap();
        for &(r, c) in alive {
            grid.set(r, c, true).unwrap();
        }

        LifeEngine::new(grid).unwrap()
    }

    #[test]
    fn empty_view() {
        let mut cam = Camera::new(4, 4);
        assert_eq!(cam.render(), "\u{2800}\u{2800}\n");
    }

    #[test]
    fn single_cell() {
        let mut cam = Camera::new(2, 4);
        cam.draw(&engine(4, 2, &[(3, 1)]), 1).unwrap();

        assert_eq!(cam.render(), "\u{2880}\n");
    }

    #[test]
    fn scaled_cell_fills_character() {
        let mut cam = Camera::new(2, 4);
        cam.draw(&engine(1, 1, &[(0, 0)]), 4).unwrap();

        assert_eq!(cam.render(), "\u{28FF}\n");
    }

    #[test]
    fn pan_skips_cells() {
        let mut cam = Camera::new(2, 4);
        let engine = engine(3, 3, &[(0, 0)]);

        cam.pan(1, 1);
        cam.draw(&engine, 1).unwrap();
        assert_eq!(cam.render(), "\u{2800}\n");

        cam.reset_view();
        cam.draw(&engine, 1).unwrap();
        assert_eq!(cam.render(), "\u{2801}\n");
    }

    #[test]
    fn huge_cells_are_clipped() {
        let mut cam = Camera::new(2, 4);
        cam.draw(&engine(2, 2, &[(0, 0), (1, 1)]), usize::MAX).unwrap();

        assert_eq!(cam.render(), "\u{28FF}\n");
    }

    #[test]
    fn partial_cell_at_edge() {
        // 3 dots wide, so the second cell only gets its left column
        let mut cam = Camera::new(3, 4);
        cam.draw(&engine(1, 2, &[(0, 1)]), 2).unwrap();

        // dots (2, 0) and (2, 1) land in the second character
        assert_eq!(cam.render(), "\u{2800}\u{2803}\n");
    }

    #[test]
    fn resize_keeps_position() {
        let engine = engine(4, 4, &[(1, 1), (3, 3)]);
        let mut cam = Camera::new(2, 4);

        cam.pan(1, 1);
        cam.resize(4, 4);
        cam.draw(&engine, 1).unwrap();

        // (1, 1) is now the top left dot, (3, 3) is dot (2, 2)
        assert_eq!(cam.render(), "\u{2801}\u{2804}\n");
    }
}
