//! Validates AutoPkg recipes against required-field and expected-value rules.

pub mod cmd;
pub mod domain;
pub mod engine;
pub mod io;
pub mod util;
