//! tallysheet-engine - cells, sheet memory, formula evaluation.

pub mod cell;
pub mod formula;
pub mod sheet;

pub use cell::{Cell, CellSnapshot};
pub use formula::eval::{CellStore, Evaluator};
pub use sheet::SheetMemory;
