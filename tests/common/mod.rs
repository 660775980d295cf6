//! Shared test fixtures

#![allow(dead_code)]

use data_model_extract::models::Grid;
use rust_xlsxwriter::Workbook;
use std::path::{Path, PathBuf};

/// Build a grid row from string cells; "" is an absent cell.
pub fn row(cells: &[&str]) -> Vec<Option<String>> {
    cells
        .iter()
        .map(|c| if c.is_empty() { None } else { Some(c.to_string()) })
        .collect()
}

pub fn grid(rows: &[&[&str]]) -> Grid {
    Grid::from_rows(rows.iter().map(|r| row(r)).collect())
}

/// Two models side by side, as laid out in the data-model sheet.
pub fn sample_rows() -> Vec<Vec<&'static str>> {
    vec![
        vec!["User", "", "", "", "", "", "Order", "", "", "", "", ""],
        vec!["", "", "", "", "", "", "", "", "", "", "", ""],
        vec![
            "Field", "Type", "FK", "FK Target", "Note", "", "Field", "Type", "FK", "FK Target",
            "Note", "",
        ],
        vec![
            "id", "int", "", "", "primary key", "", "id", "int", "", "", "", "",
        ],
        vec![
            "email", "string", "", "", "unique", "", "user_id", "int", "Y", "User", "", "",
        ],
    ]
}

/// Write a workbook with one sheet of string cells; "" cells are left blank.
pub fn write_workbook(dir: &Path, file_name: &str, sheet: &str, rows: &[Vec<&str>]) -> PathBuf {
    let path = dir.join(file_name);
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(sheet).unwrap();
    for (r, cells) in rows.iter().enumerate() {
        for (c, text) in cells.iter().enumerate() {
            if !text.is_empty() {
                worksheet.write_string(r as u32, c as u16, *text).unwrap();
            }
        }
    }
    workbook.save(&path).unwrap();
    path
}
