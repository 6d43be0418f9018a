//! Single-sheet workbook writer.

use rust_xlsxwriter::{Format, Workbook, Worksheet};
use std::path::{Path, PathBuf};

use super::{rows, Cell};
use crate::{
    error::{BigvError, Result},
    synergy::PlayerTable,
};

pub const SHEET_NAME: &str = "Player Stats";

/// What ended up in the workbook.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReport {
    pub path: PathBuf,
    pub players: usize,
    pub columns: usize,
}

/// Write `table` as a header row plus one row per player to `path`.
///
/// An empty table is refused before anything touches the filesystem.
pub fn write_workbook(path: &Path, table: &PlayerTable) -> Result<ExportReport> {
    if table.is_empty() {
        return Err(BigvError::EmptyResult);
    }

    let rows = rows(table);
    let columns = rows.first().map(Vec::len).unwrap_or(0);

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    let mut workbook = Workbook::new();
    {
        let sheet = workbook.add_worksheet();
        sheet.set_name(SHEET_NAME)?;
        write_rows(sheet, &rows)?;
        sheet.set_freeze_panes(1, 0)?;
    }
    workbook.save(path)?;

    tracing::info!(path = %path.display(), players = table.len(), "workbook written");

    Ok(ExportReport {
        path: path.to_path_buf(),
        players: table.len(),
        columns,
    })
}

fn write_rows(worksheet: &mut Worksheet, rows: &[Vec<Cell<'_>>]) -> Result<()> {
    let bold = Format::new().set_bold();
    for (row_idx, row) in rows.iter().enumerate() {
        let r = row_idx as u32;
        for (col_idx, cell) in row.iter().enumerate() {
            let c = col_idx as u16;
            match cell {
                Cell::Text(text) if row_idx == 0 => {
                    worksheet.write_string_with_format(r, c, *text, &bold)?;
                }
                Cell::Text(text) => {
                    worksheet.write_string(r, c, *text)?;
                }
                Cell::Number(n) => {
                    worksheet.write_number(r, c, *n)?;
                }
                Cell::Blank => {}
            }
        }
    }
    Ok(())
}
