//! Terminal output formatting

mod display;

pub use display::{print_instruction, print_statistics};
