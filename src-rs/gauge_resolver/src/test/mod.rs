//! Test utilities for the quantity resolver.

pub mod construct;
