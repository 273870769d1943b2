use serde::{Deserialize, Serialize};

/// A single spreadsheet cell: the formula it was given (as a token
/// sequence), the numeric value last computed for it, and its error string
/// (empty when the cell is error-free).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Cell {
    formula: Vec<String>,
    value: f64,
    error: String,
}

impl Cell {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn formula(&self) -> &[String] {
        &self.formula
    }

    /// A cell that was never written has an empty formula.
    pub fn has_formula(&self) -> bool {
        !self.formula.is_empty()
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn error(&self) -> &str {
        &self.error
    }

    pub fn set_formula(&mut self, tokens: Vec<String>) {
        self.formula = tokens;
    }

    pub fn set_value(&mut self, value: f64) {
        self.value = value;
    }

    pub fn set_error(&mut self, error: impl Into<String>) {
        self.error = error.into();
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Read-only view of a cell as the evaluator consumes it: whether it holds
/// a formula, the value it carries, and its error text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CellSnapshot {
    pub has_formula: bool,
    pub value: f64,
    pub error: String,
}

impl From<&Cell> for CellSnapshot {
    fn from(cell: &Cell) -> Self {
        Self {
            has_formula: cell.has_formula(),
            value: cell.value,
            error: cell.error.clone(),
        }
    }
}
