//! Row/column arrangement of rendered problems

use crate::algorithm::executor::Worksheet;
use crate::io::error::{Result, WorksheetError};
use crate::presentation::orientation::{DisplayPair, Presenter};
use ndarray::Array2;

/// Rendered problems arranged `rows × columns` in row-major order
#[derive(Clone, Debug)]
pub struct WorksheetGrid {
    cells: Array2<DisplayPair>,
}

impl WorksheetGrid {
    /// Render every problem of a worksheet through `presenter` and lay them out
    ///
    /// # Errors
    ///
    /// Returns an error if the number of problems does not match the grid shape
    pub fn build<P: Presenter + ?Sized>(worksheet: &Worksheet, presenter: &mut P) -> Result<Self> {
        let constant = worksheet.config.constant;
        let rendered: Vec<DisplayPair> = worksheet
            .problems
            .iter()
            .map(|problem| presenter.render(problem, constant))
            .collect();

        Self::from_cells(worksheet.config.rows, worksheet.config.columns, rendered)
    }

    /// Arrange already rendered cells
    ///
    /// # Errors
    ///
    /// Returns an error if `cells.len()` differs from `rows * columns`
    pub fn from_cells(rows: usize, columns: usize, cells: Vec<DisplayPair>) -> Result<Self> {
        let found = cells.len();
        let cells =
            Array2::from_shape_vec((rows, columns), cells).map_err(|e| WorksheetError::Layout {
                rows,
                columns,
                found,
                reason: e.to_string(),
            })?;
        Ok(Self { cells })
    }

    /// Number of grid rows
    pub fn rows(&self) -> usize {
        self.cells.nrows()
    }

    /// Number of grid columns
    pub fn columns(&self) -> usize {
        self.cells.ncols()
    }

    /// Cell at `(row, column)` if inside the grid
    pub fn get(&self, row: usize, column: usize) -> Option<&DisplayPair> {
        self.cells.get([row, column])
    }

    /// Cells of one row, left to right
    pub fn row(&self, row: usize) -> impl Iterator<Item = &DisplayPair> + '_ {
        (0..self.columns()).filter_map(move |column| self.get(row, column))
    }

    /// Widest number on the sheet in characters, used to right-align cells
    pub fn number_width(&self) -> usize {
        self.cells
            .iter()
            .flat_map(|cell| [cell.top, cell.bottom])
            .map(|value| value.to_string().chars().count())
            .max()
            .unwrap_or(1)
    }
}
