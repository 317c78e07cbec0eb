//! CLI command implementations

pub mod demo;
pub mod transpose;

pub use demo::run_demo;
pub use transpose::{run_transpose, TransposeCommand};
