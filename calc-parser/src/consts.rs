//! Values for the named constants recognized in expressions. These are fixed-precision by
//! design, not derived from the machine constants.

/// Euler's number, bound to the name `e`.
pub const E: f64 = 2.7182818284;

/// The circle constant, bound to the name `p`.
pub const PI: f64 = 3.1415926535;
