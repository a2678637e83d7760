//! A uniform bucket grid over the play area.
use smallvec::SmallVec;

use crate::errors::GridError;
use crate::rearrange::Collides;

/// A `SpatialGrid` can tell us which bodies are near each other, so that only
/// spatially close pairs get an actual collision test.
///
/// The grid doesn't support updates or removals; it is a derived index with
/// no authoritative position data of its own, and we rebuild it from the
/// bodies' current positions on every resolution pass.
///
/// Cells carry a one-cell border margin on every side, so a body clamped to
/// the play area's edge still lands in a cell whose full 3x3 neighborhood is
/// addressable without index arithmetic going negative.
#[derive(Debug)]
pub struct SpatialGrid {
    /// `(rows + 2) * (cols + 2)` buckets, row-major, holding indices into
    /// the caller's body slice.
    cells: Vec<SmallVec<[usize; 8]>>,
    cols: usize,
    rows: usize,
    cell_width: f64,
    cell_height: f64,
}

impl SpatialGrid {
    pub fn new(
        play_width: f64,
        play_height: f64,
        cols: usize,
        rows: usize,
    ) -> Result<SpatialGrid, GridError> {
        if cols == 0 || rows == 0 {
            return Err(GridError::GridZeroDims);
        }
        if play_width <= 0.0 || play_height <= 0.0 {
            return Err(GridError::GridEmptyArea);
        }

        Ok(SpatialGrid {
            cells: vec![Default::default(); (rows + 2) * (cols + 2)],
            cols,
            rows,
            cell_width: play_width / cols as f64,
            cell_height: play_height / rows as f64,
        })
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cell_width(&self) -> f64 {
        self.cell_width
    }

    pub fn cell_height(&self) -> f64 {
        self.cell_height
    }

    /// The bucket at grid coordinates `(x, y)`, border cells included, as
    /// indices into the body slice of the last `update_cells` call.
    pub fn cell(&self, x: usize, y: usize) -> &[usize] {
        &self.cells[self.cell_index(x, y)]
    }

    pub(crate) fn cell_index(&self, x: usize, y: usize) -> usize {
        y * (self.cols + 2) + x
    }

    /// Clear every bucket, then file each body under the cell its current
    /// position falls in.
    pub fn update_cells<B: Collides>(&mut self, bodies: &[B]) {
        for cell in self.cells.iter_mut() {
            cell.clear();
        }

        for (i, body) in bodies.iter().enumerate() {
            let pos = body.position();

            // Positions outside the play area pin to the nearest edge cell,
            // never wrap to the opposite side.
            let gx =
                ((pos.x / self.cell_width).floor() as i64).clamp(0, self.cols as i64 - 1) as usize;
            let gy =
                ((pos.y / self.cell_height).floor() as i64).clamp(0, self.rows as i64 - 1) as usize;

            // Add 1 for the border cells.
            let index = self.cell_index(gx + 1, gy + 1);
            self.cells[index].push(i);
        }
    }
}
