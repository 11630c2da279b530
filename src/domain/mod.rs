pub mod error;
pub mod key_path;
pub mod recipe;
pub mod report;
