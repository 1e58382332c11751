// src/export/mod.rs

pub mod csv;
pub mod target;

pub use self::csv::write_rows;
pub use target::{Delimiter, output_path_for};
