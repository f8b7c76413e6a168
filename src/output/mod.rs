pub mod format;
pub mod json;
pub mod table;

pub use format::OutputMode;
