// Formula token classification and evaluation

pub mod eval;
pub mod token;
