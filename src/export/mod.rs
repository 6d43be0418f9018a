//! Flatten a player table into spreadsheet rows.

pub mod xlsx;

use std::path::{Path, PathBuf};

use crate::{
    cli::types::SeasonId,
    synergy::{PlayerRecord, PlayerTable, StatValue},
};

/// One spreadsheet cell.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell<'a> {
    Text(&'a str),
    Number(f64),
    Blank,
}

impl<'a> Cell<'a> {
    fn from_stat(value: &'a StatValue) -> Self {
        match value {
            StatValue::Unknown => Cell::Text(crate::synergy::UNKNOWN),
            StatValue::Null => Cell::Blank,
            StatValue::Number(n) => n.as_f64().map(Cell::Number).unwrap_or(Cell::Blank),
            StatValue::Text(s) => Cell::Text(s),
        }
    }
}

/// Header row followed by one row per record, in table order.
pub fn rows(table: &PlayerTable) -> Vec<Vec<Cell<'_>>> {
    let header: Vec<Cell<'_>> = PlayerRecord::columns().into_iter().map(Cell::Text).collect();

    let mut rows = Vec::with_capacity(table.len() + 1);
    rows.push(header);
    rows.extend(table.values().map(record_row));
    rows
}

fn record_row(record: &PlayerRecord) -> Vec<Cell<'_>> {
    let mut row = vec![
        Cell::Text(&record.name),
        Cell::Text(&record.team),
        Cell::Text(&record.dob),
    ];
    row.extend(record.stats.iter().map(|(_, value)| Cell::from_stat(value)));
    row
}

/// Force an `.xlsx` extension, replacing any other one.
pub fn ensure_xlsx_extension(path: &Path) -> PathBuf {
    let is_xlsx = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("xlsx"))
        .unwrap_or(false);
    if is_xlsx {
        path.to_path_buf()
    } else {
        path.with_extension("xlsx")
    }
}

/// `<downloads>/bigv-player-stats-<season>.xlsx`, or the working directory when
/// the platform has no download folder.
pub fn default_output_path(season: &SeasonId) -> PathBuf {
    let base = dirs::download_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join(format!("bigv-player-stats-{}.xlsx", season))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        synergy::{StatField, UNKNOWN},
        PersonId,
    };
    use serde_json::Number;

    fn table() -> PlayerTable {
        let mut jo = PlayerRecord::new("Jo Smith", "2000-01-01");
        jo.team = "Tigers".to_string();
        jo.stats
            .set(StatField::Points, StatValue::Number(Number::from(10)));
        jo.stats.set(StatField::Assists, StatValue::Null);

        let sam = PlayerRecord::new("Sam Lee", UNKNOWN);

        let mut table = PlayerTable::new();
        table.insert(PersonId::new("P2"), sam);
        table.insert(PersonId::new("P1"), jo);
        table
    }

    #[test]
    fn test_rows_header_then_records() {
        let table = table();
        let rows = rows(&table);

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0][0], Cell::Text("name"));
        assert_eq!(rows[0][3], Cell::Text("games"));
        assert!(rows.iter().all(|r| r.len() == rows[0].len()));

        // P1 sorts before P2
        assert_eq!(rows[1][0], Cell::Text("Jo Smith"));
        assert_eq!(rows[2][0], Cell::Text("Sam Lee"));
        assert_eq!(rows[2][1], Cell::Text(UNKNOWN));
    }

    #[test]
    fn test_cells_follow_stat_values() {
        let table = table();
        let rows = rows(&table);
        let header = &rows[0];
        let col = |key: &'static str| header.iter().position(|c| *c == Cell::Text(key)).unwrap();

        assert_eq!(rows[1][col("points")], Cell::Number(10.0));
        assert_eq!(rows[1][col("assists")], Cell::Blank);
        assert_eq!(rows[1][col("steals")], Cell::Text(UNKNOWN));
    }

    #[test]
    fn test_ensure_xlsx_extension() {
        assert_eq!(
            ensure_xlsx_extension(Path::new("out/stats")),
            PathBuf::from("out/stats.xlsx")
        );
        assert_eq!(
            ensure_xlsx_extension(Path::new("stats.csv")),
            PathBuf::from("stats.xlsx")
        );
        assert_eq!(
            ensure_xlsx_extension(Path::new("stats.XLSX")),
            PathBuf::from("stats.XLSX")
        );
    }

    #[test]
    fn test_default_output_path_file_name() {
        let path = default_output_path(&SeasonId::new("S1"));
        assert_eq!(
            path.file_name().unwrap().to_str().unwrap(),
            "bigv-player-stats-S1.xlsx"
        );
    }
}
