//! Hexagonal tessellation and per-cell aggregation.
//!
//! Tiles a pixel-space viewport with flat-edged hexagons, counts the data
//! points landing in each cell, and emits 7-vertex fan outlines for the
//! non-empty cells. The hexagon edge length derives from the viewport
//! height and a target bin count; odd rows shift by half a cell width to
//! interlock the tiling.

use crate::dataset::Dataset;
use crate::error::{Error, Result};
use crate::geometry::Point;
use crate::range::{transform, Range};

/// Default number of hexagons along the vertical axis.
pub const DEFAULT_TARGET_BINS: usize = 30;

/// One non-empty cell of a built [`HexGrid`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HexCell {
    /// Closed 7-vertex fan outlining the hexagon (last vertex repeats the
    /// first), in pixel coordinates.
    pub vertices: [Point; 7],
    /// Number of data points aggregated into this cell.
    pub count: u32,
    /// `count / max_count`, the gradient key in `[0, 1]`.
    pub weight: f64,
}

/// A hexagonal density grid over a viewport.
///
/// Transient: rebuilt from the dataset on every plot call, never cached
/// across frames.
#[derive(Debug, Clone)]
pub struct HexGrid {
    edge: f64,
    half_edge: f64,
    apothem: f64,
    xstep: f64,
    ystep: f64,
    nx: usize,
    ny: usize,
    counts: Vec<Vec<u32>>,
    max_count: u32,
    view_x: Range,
    view_y: Range,
}

impl HexGrid {
    /// Aggregate `data` into a hex grid covering the viewport.
    ///
    /// Each point is transformed from the data domains into pixel space and
    /// assigned a row by vertical cell height and a column by cell width,
    /// with the half-width brick offset applied on alternating rows.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyData`] for a zero `target_bins`, and
    /// [`Error::NotInRange`] if a point lies outside the supplied domains.
    pub fn build(
        data: &Dataset,
        xdomain: Range,
        ydomain: Range,
        view_x: Range,
        view_y: Range,
        target_bins: usize,
    ) -> Result<Self> {
        if target_bins == 0 {
            return Err(Error::EmptyData);
        }

        let edge = view_y.distance() / target_bins as f64;
        let half_edge = 0.5 * edge;
        let apothem = 60.0_f64.to_radians().sin() * edge;
        let xstep = 2.0 * apothem;
        let ystep = 1.5 * edge;
        let cell_w = 2.0 * apothem;
        let cell_h = edge + half_edge;

        let nx = (view_x.distance() / cell_w).ceil().max(1.0) as usize;
        let ny = (view_y.distance() / cell_h).ceil().max(1.0) as usize;

        let mut counts = vec![vec![0_u32; nx]; ny];
        let mut max_count = 0_u32;

        let minx = view_x.low();
        let miny = view_y.low();

        for p in data {
            let tx = transform(p.x, xdomain, view_x)? - minx;
            let ty = transform(p.y, ydomain, view_y)? - miny;

            let yidx = ((ty / cell_h) as usize).min(ny - 1);
            let xidx = if yidx % 2 == 0 {
                if tx > apothem { ((tx - apothem) / cell_w) as usize } else { 0 }
            } else {
                (tx / cell_w) as usize
            }
            .min(nx - 1);

            counts[yidx][xidx] += 1;
            max_count = max_count.max(counts[yidx][xidx]);
        }

        Ok(Self {
            edge,
            half_edge,
            apothem,
            xstep,
            ystep,
            nx,
            ny,
            counts,
            max_count,
            view_x,
            view_y,
        })
    }

    /// Hexagon edge length in pixels.
    #[must_use]
    pub const fn edge(&self) -> f64 {
        self.edge
    }

    /// Largest single-cell count.
    #[must_use]
    pub const fn max_count(&self) -> u32 {
        self.max_count
    }

    /// Grid dimensions as (columns, rows).
    #[must_use]
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.nx, self.ny)
    }

    /// Total number of aggregated points across all cells.
    ///
    /// Equals the dataset size the grid was built from: no point is dropped
    /// or double-counted.
    #[must_use]
    pub fn total_count(&self) -> u64 {
        self.counts.iter().flatten().map(|&c| u64::from(c)).sum()
    }

    /// Closed fan for the hexagon anchored at `(x, y)` (its lower-left
    /// vertex).
    fn fan(&self, x: f64, y: f64) -> [Point; 7] {
        [
            Point::new(x, y),
            Point::new(x, y + self.edge),
            Point::new(x + self.apothem, y + self.edge + self.half_edge),
            Point::new(x + self.xstep, y + self.edge),
            Point::new(x + self.xstep, y),
            Point::new(x + self.apothem, y - self.half_edge),
            Point::new(x, y),
        ]
    }

    /// The non-empty cells whose geometry lies fully within the viewport.
    ///
    /// Cells overlapping the viewport border on either axis are skipped:
    /// every x extent of the hexagon (left edge, midpoint, right edge) and
    /// every y extent (edge ends and both apexes) must be in range.
    #[must_use]
    pub fn cells(&self) -> Vec<HexCell> {
        let mut out = Vec::new();
        if self.max_count == 0 {
            return out;
        }

        let minx = self.view_x.low();
        let maxx = self.view_x.high();
        let miny = self.view_y.low();
        let maxy = self.view_y.high();

        let mut y = miny + self.half_edge;
        let mut row = 0_usize;
        while y < maxy && row < self.ny {
            let xoff = if row % 2 == 1 { self.apothem } else { 0.0 };
            let ys = [y, y + self.edge, y + self.edge + self.half_edge, y - self.half_edge];

            if ys.iter().all(|&v| self.view_y.contains(v)) {
                let mut x = minx + xoff;
                let mut col = 0_usize;
                while x < maxx - self.xstep && col < self.nx {
                    let count = self.counts[row][col];
                    // Only cells that aggregated anything get geometry.
                    if count > 0 {
                        let xs = [x, x + self.apothem, x + self.xstep];
                        if xs.iter().all(|&v| self.view_x.contains(v)) {
                            out.push(HexCell {
                                vertices: self.fan(x, y),
                                count,
                                weight: f64::from(count) / f64::from(self.max_count),
                            });
                        }
                    }
                    x += self.xstep;
                    col += 1;
                }
            }

            y += self.ystep;
            row += 1;
        }

        out
    }
}
