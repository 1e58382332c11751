pub mod path;
pub mod time;

pub use time::validate_time;
