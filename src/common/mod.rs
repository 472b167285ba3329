//! Shared numeric helpers used across indicator calculations.

pub mod math;
