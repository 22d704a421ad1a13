//! The builtin math functions available in expressions.

pub mod trigonometry;

pub use trigonometry::{cos, sin, tan};
