//! Library components of the epistats CLI.

pub mod input;
pub mod logging;
