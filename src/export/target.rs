// src/export/target.rs

use std::path::{Path, PathBuf};

/// Field delimiter of the generated CSV.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Delimiter {
    Comma,
    Semicolon,
}

impl Delimiter {
    /// `,` for a `.json` source, `;` for any other extension or none.
    pub fn for_source(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Delimiter::Comma,
            _ => Delimiter::Semicolon,
        }
    }

    pub fn as_byte(&self) -> u8 {
        match self {
            Delimiter::Comma => b',',
            Delimiter::Semicolon => b';',
        }
    }
}

/// Same directory and base name as `source`, extension replaced by `csv`.
pub fn output_path_for(source: &Path) -> PathBuf {
    source.with_extension("csv")
}
