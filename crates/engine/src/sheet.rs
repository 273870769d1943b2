//! Sheet memory: the grid of cells formulas read from.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use tallysheet_core::label;

use crate::cell::{Cell, CellSnapshot};
use crate::formula::eval::CellStore;

/// Sparse grid of cells with fixed bounds, addressed by A1 label.
///
/// Cells that were never written read as default empty cells, as do labels
/// outside the grid. Writes to out-of-range labels are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SheetMemory {
    cells: FxHashMap<(usize, usize), Cell>,
    rows: usize,
    cols: usize,
}

impl Default for SheetMemory {
    fn default() -> Self {
        Self::new(100, 26)
    }
}

impl SheetMemory {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            cells: FxHashMap::default(),
            rows,
            cols,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    fn coords(&self, label: &str) -> Option<(usize, usize)> {
        label::parse_label(label).filter(|&(row, col)| row < self.rows && col < self.cols)
    }

    fn cell_entry(&mut self, label: &str) -> Option<&mut Cell> {
        let key = self.coords(label)?;
        Some(self.cells.entry(key).or_default())
    }

    pub fn cell(&self, label: &str) -> Option<&Cell> {
        self.cells.get(&self.coords(label)?)
    }

    pub fn set_formula(&mut self, label: &str, tokens: Vec<String>) {
        if let Some(cell) = self.cell_entry(label) {
            cell.set_formula(tokens);
        }
    }

    pub fn set_value(&mut self, label: &str, value: f64) {
        if let Some(cell) = self.cell_entry(label) {
            cell.set_value(value);
        }
    }

    pub fn set_error(&mut self, label: &str, error: impl Into<String>) {
        if let Some(cell) = self.cell_entry(label) {
            cell.set_error(error);
        }
    }

    pub fn clear_cell(&mut self, label: &str) {
        if let Some(key) = self.coords(label) {
            self.cells.remove(&key);
        }
    }
}

impl CellStore for SheetMemory {
    fn cell_by_label(&self, label: &str) -> CellSnapshot {
        self.cell(label).map(CellSnapshot::from).unwrap_or_default()
    }
}
