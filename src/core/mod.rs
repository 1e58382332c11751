pub mod convert;
pub mod extract;
pub mod import;
pub mod notes;

pub use convert::{ConversionSummary, ConvertLogic, ConvertRequest};
