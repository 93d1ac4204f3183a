use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader};
use tracing::debug;

use crate::error::{DashboardError, Result};
use crate::utils::numeric::cell_string;

/// Header row plus data rows of one worksheet, in sheet order.
#[derive(Debug, Clone, Default)]
pub struct Sheet {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Data>>,
}

impl Sheet {
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }
}

/// Reads the first worksheet of an .xlsx/.xls file into a [`Sheet`].
pub struct SheetReader {
    skip_rows: usize,
}

impl SheetReader {
    pub fn new() -> Self {
        Self { skip_rows: 0 }
    }

    /// Discard `skip_rows` leading rows (title banners) before treating
    /// the next row as the header.
    pub fn with_skip_rows(skip_rows: usize) -> Self {
        Self { skip_rows }
    }

    pub fn read(&self, path: &Path) -> Result<Sheet> {
        let mut workbook = open_workbook_auto(path)?;

        let sheet_name = workbook
            .sheet_names()
            .first()
            .cloned()
            .ok_or_else(|| {
                DashboardError::InvalidFormat(format!("{} has no sheets", path.display()))
            })?;

        let range = workbook.worksheet_range(&sheet_name)?;

        let mut row_iter = range.rows();
        for _ in 0..self.skip_rows {
            row_iter.next();
        }

        let headers: Vec<String> = match row_iter.next() {
            Some(row) => row.iter().map(|c| cell_string(c).trim().to_string()).collect(),
            None => Vec::new(),
        };

        let rows: Vec<Vec<Data>> = row_iter
            .filter(|row| !row.iter().all(|c| matches!(c, Data::Empty)))
            .map(|row| row.to_vec())
            .collect();

        debug!(
            file = %path.display(),
            sheet = %sheet_name,
            rows = rows.len(),
            "read worksheet"
        );

        Ok(Sheet { headers, rows })
    }
}

impl Default for SheetReader {
    fn default() -> Self {
        Self::new()
    }
}
