//! Tabular sheet model

use crate::alias::AliasMap;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// One spreadsheet cell
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Cell {
    Empty,
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    /// Display text with a navigable reference
    Link { text: String, url: String },
}

impl Cell {
    pub fn text(value: impl Into<String>) -> Self {
        Cell::Text(value.into())
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Empty => Ok(()),
            Cell::Text(text) => f.write_str(text),
            Cell::Int(value) => write!(f, "{value}"),
            Cell::Float(value) => write!(f, "{value}"),
            Cell::Bool(value) => write!(f, "{value}"),
            Cell::Link { text, url } => write!(f, "[{text}]({url})"),
        }
    }
}

/// Ordered rows under named columns
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl Table {
    /// Every row is cut or padded with empty cells to the header width
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Cell>>) -> Self {
        let width = columns.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, Cell::Empty);
                row
            })
            .collect();
        Self { columns, rows }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column == name)
    }

    /// Cells of one column, top to bottom
    pub fn column(&self, name: &str) -> Option<Vec<&Cell>> {
        let index = self.column_index(name)?;
        Some(self.rows.iter().filter_map(|row| row.get(index)).collect())
    }

    /// Rewrite every cell of one column; false if the column does not exist
    pub fn map_column<F>(&mut self, name: &str, mut f: F) -> bool
    where
        F: FnMut(Cell) -> Cell,
    {
        let Some(index) = self.column_index(name) else {
            return false;
        };
        for row in &mut self.rows {
            if let Some(cell) = row.get_mut(index) {
                let value = std::mem::replace(cell, Cell::Empty);
                *cell = f(value);
            }
        }
        true
    }

    /// Replace every text cell that exactly equals an alias key, in any column
    pub fn apply_aliases(mut self, aliases: &AliasMap) -> Self {
        if aliases.is_empty() {
            return self;
        }
        for cell in self.rows.iter_mut().flatten() {
            if let Cell::Text(text) = cell {
                if let Some(nickname) = aliases.get(text) {
                    *text = nickname.to_string();
                }
            }
        }
        self
    }

    /// Render as a pipe-delimited Markdown table
    pub fn to_markdown(&self) -> String {
        fn escape(value: String) -> String {
            value.replace('|', "\\|").replace('\n', " ")
        }

        let mut out = String::new();
        let header: Vec<String> = self.columns.iter().map(|c| escape(c.clone())).collect();
        out.push_str(&format!("| {} |\n", header.join(" | ")));
        out.push_str(&format!("|{}|\n", vec!["---"; self.columns.len()].join("|")));
        for row in &self.rows {
            let cells: Vec<String> = row.iter().map(|cell| escape(cell.to_string())).collect();
            out.push_str(&format!("| {} |\n", cells.join(" | ")));
        }
        out
    }
}

/// Named sheets of one workbook
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SheetDocument {
    sheets: BTreeMap<String, Table>,
}

impl SheetDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, table: Table) {
        self.sheets.insert(name.into(), table);
    }

    pub fn get(&self, name: &str) -> Option<&Table> {
        self.sheets.get(name)
    }

    pub fn sheet_names(&self) -> impl Iterator<Item = &str> {
        self.sheets.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.sheets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }

    /// Draft-year sheet names, newest first
    ///
    /// Any sheet whose name contains "20", other than the history sheet.
    /// Lexicographic descending order is enough for year-prefixed labels.
    pub fn draft_years(&self, history_sheet: &str) -> Vec<String> {
        let mut years: Vec<String> = self
            .sheet_names()
            .filter(|name| name.contains("20") && *name != history_sheet)
            .map(str::to_string)
            .collect();
        years.sort_unstable_by(|a, b| b.cmp(a));
        years
    }
}

impl FromIterator<(String, Table)> for SheetDocument {
    fn from_iter<I: IntoIterator<Item = (String, Table)>>(iter: I) -> Self {
        Self { sheets: iter.into_iter().collect() }
    }
}
