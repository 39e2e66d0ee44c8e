//! Synthetic test grids for stress-testing the search engine.
//!
//! The random source is always passed in by the caller, so fixtures are
//! reproducible from a seed.

use std::io::Write;
use std::path::Path;

use rand::Rng;

use crate::grid::{Cost, Grid};

/// The largest entry cost a generated cell can have.
const MAX_CELL_COST: Cost = 5;

/// Generates a `size`×`size` grid with entry costs in `1..=5` and a random
/// sprinkling of impassable cells.
///
/// With `with_cycles`, bidirectional links are re-opened along the
/// off-diagonals so the grid is guaranteed to contain cycles.
#[must_use]
pub fn generate<R: Rng>(r: &mut R, size: u32, with_cycles: bool) -> Grid {
    let size = size as usize;
    let mut cells: Vec<Vec<Cost>> = (0..size)
        .map(|_| (0..size).map(|_| r.random_range(1..=MAX_CELL_COST)).collect())
        .collect();

    let num_obstacles = r.random_range(size / 4..=size / 2);
    for _ in 0..num_obstacles {
        let row = r.random_range(0..size);
        let col = r.random_range(0..size);
        cells[row][col] = 0;
    }

    if with_cycles {
        for i in 1..size.saturating_sub(1) {
            let c = r.random_range(1..=MAX_CELL_COST);
            cells[i][i + 1] = c;
            cells[i + 1][i] = c;

            // An extra bidirectional link between nonadjacent cells.
            if i < size - 2 {
                let c = r.random_range(1..=MAX_CELL_COST);
                cells[i][i + 2] = c;
                cells[i + 2][i] = c;
            }
        }
    }

    Grid::from_rows(cells)
}

/// Writes `grid` in the loader's text format: one row per line, values
/// separated by single spaces.
pub fn write_grid<W: Write>(grid: &Grid, mut out: W) -> std::io::Result<()> {
    for row in grid.rows() {
        let line: Vec<String> = row.iter().map(Cost::to_string).collect();
        writeln!(out, "{}", line.join(" "))?;
    }
    Ok(())
}

/// Saves `grid` as a text file at `path`.
pub fn save_grid(grid: &Grid, path: &Path) -> std::io::Result<()> {
    let file = std::fs::File::create(path)?;
    let mut out = std::io::BufWriter::new(file);
    write_grid(grid, &mut out)?;
    out.flush()?;
    log::debug!("Saved {:?} grid to {:?}", grid.dimensions(), path);
    Ok(())
}
