//! Human-readable text rendering of grids and solution paths.

use rustc_hash::FxHashSet;

use crate::grid::{Grid, Pos};

/// The glyph drawn for impassable cells.
const WALL: char = '\u{2588}'; // █
/// The glyph drawn for cells on the solution path.
const STEP: char = '.';

/// Renders `grid` as text, one row per line, values separated by spaces.
///
/// With a `path`, cells on it are drawn as `.` and walls as a block character;
/// without one, the raw numeric matrix is produced. Read-only: neither the
/// grid nor the path is modified.
#[must_use]
pub fn render(grid: &Grid, path: Option<&[Pos]>) -> String {
    let on_path: FxHashSet<Pos> = path.unwrap_or_default().iter().copied().collect();

    let mut out = String::new();
    for (row, line) in grid.rows().iter().enumerate() {
        let rendered: Vec<String> = line
            .iter()
            .enumerate()
            .map(|(col, &value)| {
                let pos = Pos::new(row as u32, col as u32);
                if path.is_some() && on_path.contains(&pos) {
                    STEP.to_string()
                } else if path.is_some() && value == 0 {
                    WALL.to_string()
                } else {
                    value.to_string()
                }
            })
            .collect();
        out.push_str(&rendered.join(" "));
        out.push('\n');
    }
    out
}
