//! Plain-text worksheet rendering for terminals and printers

use crate::io::error::{Result, file_system_error};
use crate::presentation::layout::WorksheetGrid;
use crate::presentation::orientation::DisplayPair;
use std::io::Write;
use std::path::Path;

/// Spaces between neighbouring cells
const CELL_GAP: &str = "    ";

/// Top line, symbol line and rule of one cell, each `number_width + 2` characters wide
pub fn cell_lines(cell: &DisplayPair, number_width: usize) -> [String; 3] {
    let width = number_width + 2;
    [
        format!("{:>width$}", cell.top),
        format!("{}{:>rest$}", cell.symbol, cell.bottom, rest = width - 1),
        "-".repeat(width),
    ]
}

/// Render the grid as vertical problems, one blank line between grid rows
pub fn render_text(grid: &WorksheetGrid) -> String {
    let number_width = grid.number_width();
    let mut out = String::new();

    for row in 0..grid.rows() {
        if row > 0 {
            out.push('\n');
        }
        let cells: Vec<[String; 3]> = grid
            .row(row)
            .map(|cell| cell_lines(cell, number_width))
            .collect();

        for line in 0..3 {
            let joined = cells
                .iter()
                .filter_map(|lines| lines.get(line).map(String::as_str))
                .collect::<Vec<_>>()
                .join(CELL_GAP);
            out.push_str(joined.trim_end());
            out.push('\n');
        }
    }

    out
}

/// Write rendered text to `path`, or to stdout when no path is given
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created or the write fails
pub fn write_text(text: &str, path: Option<&Path>) -> Result<()> {
    let Some(path) = path else {
        let mut stdout = std::io::stdout().lock();
        stdout
            .write_all(text.as_bytes())
            .and_then(|()| stdout.flush())
            .map_err(file_system_error("<stdout>", "write"))?;
        return Ok(());
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(file_system_error(parent, "create directory"))?;
    }
    std::fs::write(path, text).map_err(file_system_error(path, "write"))?;

    Ok(())
}
