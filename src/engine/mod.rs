pub mod r#assert;
pub mod harness;
pub mod rules;
