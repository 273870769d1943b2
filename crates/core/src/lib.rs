//! tallysheet-core - cell labels and the evaluation error taxonomy.

pub mod error;
pub mod label;

pub use error::EvalError;
