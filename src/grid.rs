//! Map geometry and the dense payout grid

use crate::error::MapError;

/// Integer cell coordinate on the map
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridPos {
    pub x: u32,
    pub y: u32,
}

impl GridPos {
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

/// Validated map dimensions. Both sides are at least one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapDims {
    width: u32,
    height: u32,
}

impl MapDims {
    pub fn new(width: u32, height: u32) -> Result<Self, MapError> {
        if width == 0 || height == 0 {
            return Err(MapError::InvalidDimensions { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    pub fn contains(&self, pos: GridPos) -> bool {
        pos.x < self.width && pos.y < self.height
    }

    /// Point reflection through the map center: `(x, y) -> (w-1-x, h-1-y)`.
    pub fn mirror(&self, pos: GridPos) -> GridPos {
        debug_assert!(self.contains(pos), "mirror of out-of-bounds {pos:?}");
        GridPos {
            x: self.width - 1 - pos.x,
            y: self.height - 1 - pos.y,
        }
    }

    /// Mirror for real-valued points, used for hill centers.
    pub fn mirror_point(&self, x: f64, y: f64) -> (f64, f64) {
        (
            f64::from(self.width) - 1.0 - x,
            f64::from(self.height) - 1.0 - y,
        )
    }

    /// Row-major index of a cell
    pub fn pos_to_index(&self, pos: GridPos) -> Option<usize> {
        if self.contains(pos) {
            Some(pos.y as usize * self.width as usize + pos.x as usize)
        } else {
            None
        }
    }

    /// Iterates all cells row by row.
    pub fn positions(&self) -> impl Iterator<Item = GridPos> {
        let (w, h) = (self.width, self.height);
        (0..h).flat_map(move |y| (0..w).map(move |x| GridPos { x, y }))
    }
}

/// Squared Euclidean distance between two cells
pub fn distance_sq(a: GridPos, b: GridPos) -> u64 {
    let dx = u64::from(a.x.abs_diff(b.x));
    let dy = u64::from(a.y.abs_diff(b.y));
    dx * dx + dy * dy
}

/// Summed hill density for every cell, row-major. Built once, read-only after.
#[derive(Debug, Clone, PartialEq)]
pub struct PayoutGrid {
    dims: MapDims,
    values: Vec<f64>,
}

impl PayoutGrid {
    /// Evaluates `f` at every integer cell.
    pub fn from_fn(dims: MapDims, mut f: impl FnMut(GridPos) -> f64) -> Self {
        let mut values = Vec::with_capacity(dims.cell_count());
        values.extend(dims.positions().map(&mut f));
        Self { dims, values }
    }

    pub fn dims(&self) -> MapDims {
        self.dims
    }

    pub fn width(&self) -> u32 {
        self.dims.width
    }

    pub fn height(&self) -> u32 {
        self.dims.height
    }

    /// Payout at `(x, y)`.
    ///
    /// # Panics
    /// If the coordinate lies outside the grid.
    pub fn payout(&self, x: u32, y: u32) -> f64 {
        match self.get(GridPos { x, y }) {
            Some(value) => value,
            None => panic!(
                "payout ({x}, {y}) outside {}x{} grid",
                self.dims.width, self.dims.height
            ),
        }
    }

    pub fn get(&self, pos: GridPos) -> Option<f64> {
        self.dims.pos_to_index(pos).map(|i| self.values[i])
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Largest cell value, `0.0` for an all-zero grid.
    pub fn max_value(&self) -> f64 {
        self.values.iter().copied().fold(0.0, f64::max)
    }
}
